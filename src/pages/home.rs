use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::asset_url;
use crate::components::icons::{Linkedin, Mail};
use crate::components::layout::{Button, ButtonVariant, Container, Pill};
use crate::data::{research_areas, PROFILE};
use crate::nav::Page;
use crate::pages::document_title;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=document_title(Page::Home) />
        <main id="main">
            <Hero />
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let areas = research_areas();
    let headshot = asset_url(PROFILE.headshot);

    view! {
        <section class="relative">
            <Container>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 md:gap-12 items-center py-8 md:py-12">
                    <div class="order-1">
                        <div class="mb-3 flex flex-wrap gap-2">
                            {PROFILE.topics.iter().map(|topic| view! { <Pill>{*topic}</Pill> }).collect_view()}
                        </div>
                        <h1 class="text-3xl sm:text-4xl md:text-5xl font-semibold tracking-tight text-neutral-900 dark:text-white">
                            {PROFILE.name}
                        </h1>
                        <p class="mt-2 text-lg text-neutral-600 dark:text-neutral-300">
                            {format!("{}, {}", PROFILE.headline, PROFILE.affiliation)}
                        </p>
                        <p class="mt-5 max-w-2xl leading-7 text-neutral-700 dark:text-neutral-300">
                            {PROFILE.bio}
                        </p>

                        <div class="mt-6">
                            <h3 class="text-sm font-semibold tracking-wide text-neutral-900 dark:text-white uppercase">
                                "Research Areas"
                            </h3>
                            <ul class="mt-3 space-y-2 text-neutral-700 dark:text-neutral-300">
                                {areas.into_iter().map(|area| view! {
                                    <li>
                                        <span class="font-medium text-neutral-900 dark:text-white">{area.title}</span>
                                        " \u{2014} "
                                        {area.topics}
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>

                        <div class="mt-6 flex flex-wrap gap-3">
                            <Button
                                href=EMAIL_HREF
                                icon=|| view! { <Mail class="h-4 w-4" /> }.into_any()
                            >
                                "Email"
                            </Button>
                            <Button
                                href={PROFILE.linkedin}
                                variant=ButtonVariant::Outline
                                icon=|| view! { <Linkedin class="h-4 w-4" /> }.into_any()
                            >
                                "LinkedIn"
                            </Button>
                        </div>
                    </div>

                    <div class="order-2 flex md:justify-end">
                        <div class="relative h-48 w-48 sm:h-56 sm:w-56 md:h-64 md:w-64">
                            <div class="absolute inset-0 rounded-3xl bg-gradient-to-br from-neutral-200 to-neutral-50 dark:from-neutral-800 dark:to-neutral-900"></div>
                            <img
                                class="relative z-10 h-full w-full rounded-3xl object-cover object-center border border-neutral-200 dark:border-neutral-800"
                                src=headshot
                                alt="Headshot"
                            />
                        </div>
                    </div>
                </div>
            </Container>
        </section>
    }
}

const EMAIL_HREF: &str = "mailto:s.verdi@rug.nl";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_button_matches_profile() {
        assert_eq!(EMAIL_HREF, PROFILE.mailto());
    }
}
