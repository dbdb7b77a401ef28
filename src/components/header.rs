use leptos::prelude::*;

use super::asset_url;
use super::icons::{nav_icon, Menu, X};
use super::layout::Container;
use crate::data::PROFILE;
use crate::nav::{desktop_item_class, mobile_item_class, nav_items, MenuState, Page};

/// Sticky top bar with the brand block and page navigation.
///
/// Selection state belongs to the caller; the header only reads `current`
/// and reports clicks through `on_select`.
#[component]
pub fn Header(
    #[prop(into)] current: Signal<Page>,
    on_select: Callback<Page>,
) -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let headshot = asset_url(PROFILE.headshot);

    view! {
        <header class="sticky top-0 z-40 w-full border-b border-neutral-200/80 dark:border-neutral-800/80 bg-white/80 dark:bg-neutral-950/70 backdrop-blur-xl">
            <Container>
                <div class="flex items-center justify-between py-3">
                    <div class="flex items-center gap-3">
                        <img
                            src=headshot
                            alt={PROFILE.name}
                            class="h-9 w-9 rounded-xl object-cover border border-neutral-200 dark:border-neutral-700"
                        />
                        <div class="flex flex-col">
                            <span class="text-base font-semibold tracking-tight text-neutral-900 dark:text-white">
                                {PROFILE.name}
                            </span>
                            <span class="text-xs text-neutral-500 dark:text-neutral-400">
                                {PROFILE.headline}
                            </span>
                        </div>
                    </div>

                    <nav class="hidden md:flex items-center gap-1" aria-label="Main navigation">
                        {nav_items().into_iter().map(|item| {
                            let page = item.page;
                            view! {
                                <button
                                    class=move || desktop_item_class(current.get() == page)
                                    on:click=move |_| on_select.run(page)
                                >
                                    {item.label}
                                </button>
                            }
                        }).collect_view()}
                    </nav>

                    <div class="flex items-center gap-2">
                        <button
                            class="md:hidden p-2 rounded-lg hover:bg-neutral-100 dark:hover:bg-neutral-800"
                            aria-label="Toggle Menu"
                            on:click=move |_| set_menu.update(MenuState::toggle)
                        >
                            {move || {
                                if menu.get().is_open() {
                                    view! { <X class="h-5 w-5" /> }.into_any()
                                } else {
                                    view! { <Menu class="h-5 w-5" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>

                // Mobile menu
                <Show when=move || menu.get().is_open()>
                    <div class="md:hidden pb-4">
                        <div class="grid gap-2">
                            {nav_items().into_iter().map(|item| {
                                let page = item.page;
                                view! {
                                    <button
                                        class=move || mobile_item_class(current.get() == page)
                                        on:click=move |_| {
                                            let mut next = menu.get_untracked();
                                            on_select.run(next.select(page));
                                            set_menu.set(next);
                                        }
                                    >
                                        {nav_icon(item.icon, "h-5 w-5")}
                                        {item.label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                </Show>
            </Container>
        </header>
    }
}
