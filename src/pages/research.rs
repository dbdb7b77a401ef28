use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::{Container, PageHeading, SectionCard};
use crate::data::{publications, Publication};
use crate::nav::Page;
use crate::pages::document_title;

pub const HEADING: &str = "Research & Publications";

#[component]
pub fn ResearchPage() -> impl IntoView {
    let pubs = publications();

    view! {
        <Title text=document_title(Page::Research) />
        <main id="main">
            <section class="py-10 md:py-14">
                <Container>
                    <PageHeading title=HEADING />
                    <div class="grid grid-cols-1 gap-6 md:gap-8">
                        <SectionCard title="Overview of research">
                            <div class="mt-4 md:mt-5 text-neutral-700 dark:text-neutral-300 leading-7 text-base">
                                <p>
                                    "In my "<strong>"first PhD research project"</strong>", I looked at what happens to "
                                    <strong>"people's donations"</strong>" when charities "
                                    <em>"create their donation appeals using Generative AI tools and disclose that they have used them!"</em>
                                    " We examined this in the climate change domain to see, first, how people perceive the severity and risk of climate-related threats when the appeals are AI-generated, and second, whether, and how, their donations change as a consequence."
                                </p>
                                <p class="mt-4">
                                    "In my "<strong>"second and third PhD research projects"</strong>", I study "
                                    <em>"people's cognitive biases"</em>" in using Generative AI tools."
                                </p>
                            </div>
                        </SectionCard>
                        <SectionCard title="Working Papers / Publications">
                            <div class="mt-6 space-y-6">
                                {pubs.into_iter().map(|p| view! { <PublicationEntry publication=p /> }).collect_view()}
                            </div>
                        </SectionCard>
                    </div>
                </Container>
            </section>
        </main>
    }
}

#[component]
fn PublicationEntry(publication: Publication) -> impl IntoView {
    let authors = publication
        .author_line()
        .into_iter()
        .map(|(name, is_owner, sep)| {
            let name_view = if is_owner {
                view! { <span class="font-semibold">{name}</span> }.into_any()
            } else {
                name.into_any()
            };
            view! { {name_view}{sep} }
        })
        .collect_view();

    view! {
        <article>
            <h3 class="text-base md:text-lg font-semibold text-neutral-900 dark:text-white">
                {publication.title}
            </h3>
            <p class="mt-1 text-neutral-700 dark:text-neutral-300">
                {authors}
                " \u{2014} "
                <em>{publication.status}</em>
                {publication.link.map(|(text, href)| view! {
                    " \u{2022} "
                    <a
                        href=href
                        class="underline underline-offset-2 decoration-neutral-300 hover:decoration-neutral-500"
                    >
                        {text}
                    </a>
                })}
            </p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_matches_nav_label() {
        assert_eq!(HEADING, Page::Research.label());
    }

    #[test]
    fn test_lists_a_publication() {
        let pubs = publications();
        assert!(pubs
            .iter()
            .any(|p| p.title == "AI Disclosure in Environmental Donation Appeals"));
    }
}
