use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::{Container, PageHeading, SectionCard};
use crate::data::{current_courses, past_courses, Course};
use crate::nav::Page;
use crate::pages::document_title;

#[component]
pub fn TeachingPage() -> impl IntoView {
    let current = current_courses();
    let last = current.len().saturating_sub(1);

    view! {
        <Title text=document_title(Page::Teaching) />
        <main id="main">
            <section class="py-10 md:py-14">
                <Container>
                    <PageHeading
                        title="Teaching"
                        lead="Courses I currently teach/supervise and a record of past teaching."
                    />
                    <div class="grid grid-cols-1 gap-6 md:gap-8">
                        <SectionCard title="Current Courses">
                            <ul class="mt-6 space-y-0">
                                {current.into_iter().enumerate().map(|(i, course)| {
                                    let class = if i < last {
                                        "py-4 text-base md:text-lg font-semibold text-neutral-900 dark:text-white border-b border-dashed border-neutral-200/70 dark:border-neutral-700/70"
                                    } else {
                                        "py-4 text-base md:text-lg font-semibold text-neutral-900 dark:text-white"
                                    };
                                    view! { <li class=class>{course_line(&course)}</li> }
                                }).collect_view()}
                            </ul>
                        </SectionCard>
                        <SectionCard title="Past Courses">
                            <ul class="mt-6">
                                {past_courses().into_iter().map(|course| view! {
                                    <li class="py-2 text-base md:text-lg font-semibold text-neutral-900 dark:text-white">
                                        {course_line(&course)}
                                    </li>
                                }).collect_view()}
                            </ul>
                        </SectionCard>
                    </div>
                </Container>
            </section>
        </main>
    }
}

/// Course title followed by its detail, dash-separated.
pub fn course_line(course: &Course) -> String {
    match course.detail {
        Some(detail) => format!("{} \u{2013} {detail}", course.title),
        None => course.title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_line() {
        let course = Course {
            title: "Marketing for E&BE",
            detail: Some("University of Groningen"),
        };
        assert_eq!(course_line(&course), "Marketing for E&BE \u{2013} University of Groningen");

        let bare = Course {
            title: "Seminar",
            detail: None,
        };
        assert_eq!(course_line(&bare), "Seminar");
    }
}
