use chrono::Datelike;
use leptos::prelude::*;

use super::layout::Container;
use crate::data::PROFILE;

pub fn copyright_line(year: i32) -> String {
    format!(
        "\u{00A9} {year} {} \u{2022} {}",
        PROFILE.name, PROFILE.headline
    )
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="border-t border-neutral-200 dark:border-neutral-800 py-8">
            <Container>
                <div class="flex flex-col sm:flex-row items-start sm:items-center justify-between gap-4 text-sm text-neutral-600 dark:text-neutral-400">
                    <div>{copyright_line(year)}</div>
                    <div class="flex flex-wrap items-center gap-3">
                        <a class="hover:underline" href={PROFILE.mailto()}>"Email"</a>
                    </div>
                </div>
            </Container>
        </footer>
    }
}
