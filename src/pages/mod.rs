pub mod home;
pub mod research;
pub mod teaching;

use leptos::prelude::*;

use crate::nav::Page;
use home::HomePage;
use research::ResearchPage;
use teaching::TeachingPage;

/// Browser tab title for a page.
pub fn document_title(page: Page) -> String {
    let name = crate::data::PROFILE.name;
    match page {
        Page::Home => name.to_string(),
        _ => format!("{} | {name}", page.label()),
    }
}

/// The view mounted for each page. One arm per [`Page`], so the nav list
/// and the switch cannot drift apart.
pub fn page_view(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Research => view! { <ResearchPage /> }.into_any(),
        Page::Teaching => view! { <TeachingPage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_titles() {
        assert_eq!(document_title(Page::Home), "Soroush Verdi");
        assert_eq!(
            document_title(Page::Research),
            "Research & Publications | Soroush Verdi"
        );
        assert_eq!(document_title(Page::Teaching), "Teaching | Soroush Verdi");
    }
}
