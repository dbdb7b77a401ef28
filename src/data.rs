//! Static site content.

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub affiliation: &'static str,
    pub bio: &'static str,
    pub topics: &'static [&'static str],
    pub email: &'static str,
    pub linkedin: &'static str,
    /// File name under the static asset directory
    pub headshot: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Soroush Verdi",
    headline: "PhD Candidate in Marketing",
    affiliation: "University of Groningen",
    bio: "I am a PhD Candidate in Marketing at the University of Groningen. My work lies at the \
          intersection of behavioral science and judgment and decision-making. I\u{2019}m \
          particularly interested in how people think about value, how they interpret prices, \
          justify spending, respond to incentives, and make sense of what feels fair or \
          worthwhile. I study the psychological biases and mental shortcuts that guide these \
          decisions and explore why people sometimes make choices that seem inconsistent or even \
          irrational on the surface.",
    topics: &["Consumer Behavior", "Judgment & Decision-Making"],
    email: "s.verdi@rug.nl",
    linkedin: "https://www.linkedin.com/in/soroushverdi/",
    headshot: "headshot.jpg",
};

pub struct ResearchArea {
    pub title: &'static str,
    pub topics: &'static str,
}

pub fn research_areas() -> Vec<ResearchArea> {
    vec![
        ResearchArea {
            title: "Value Perception",
            topics: "Price Evaluation, Mental Accounting, Fairness and Worth Judgments.",
        },
        ResearchArea {
            title: "Judgment & Decision-Making",
            topics: "Trade-off Evaluation, Incentive Response, Donation and Prosocial Decisions.",
        },
        ResearchArea {
            title: "Psychology of AI",
            topics: "AI Influence on People's Decisions, Biases Caused by AI.",
        },
    ]
}

pub struct Author {
    pub name: &'static str,
    /// The site owner, rendered in bold
    pub is_owner: bool,
}

pub struct Publication {
    pub title: &'static str,
    pub authors: &'static [Author],
    pub status: &'static str,
    /// Link text and target for obtaining the paper
    pub link: Option<(&'static str, &'static str)>,
}

impl Publication {
    /// APA-style author list: "A, B, & C".
    pub fn author_line(&self) -> Vec<(&'static str, bool, &'static str)> {
        let n = self.authors.len();
        self.authors
            .iter()
            .enumerate()
            .map(|(i, author)| {
                let sep = match n - i {
                    1 => "",
                    2 if n > 2 => ", & ",
                    2 => " & ",
                    _ => ", ",
                };
                (author.name, author.is_owner, sep)
            })
            .collect()
    }
}

pub fn publications() -> Vec<Publication> {
    vec![Publication {
        title: "AI Disclosure in Environmental Donation Appeals",
        authors: &[
            Author { name: "Verdi, S.", is_owner: true },
            Author { name: "Moeini-Jazani, M.", is_owner: false },
            Author { name: "Schwarz, N.", is_owner: false },
        ],
        status: "Submitted, 2025",
        link: Some(("Email for the draft", "mailto:s.verdi@rug.nl")),
    }]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub title: &'static str,
    pub detail: Option<&'static str>,
}

pub fn current_courses() -> Vec<Course> {
    vec![
        Course {
            title: "Building Brands for Impact",
            detail: Some("University of Groningen (MSc Marketing Management)"),
        },
        Course {
            title: "Marketing for E&BE",
            detail: Some("University of Groningen (BSc Economics and Business Economics)"),
        },
        Course {
            title: "Thesis Supervision",
            detail: Some("MSc and BSc students"),
        },
    ]
}

pub fn past_courses() -> Vec<Course> {
    vec![Course {
        title: "Research Methodology for IB",
        detail: Some("BSc International Business, 2024"),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_links() {
        assert_eq!(PROFILE.mailto(), "mailto:s.verdi@rug.nl");
        assert!(PROFILE.linkedin.starts_with("https://www.linkedin.com/"));
    }

    #[test]
    fn test_at_least_one_publication() {
        let pubs = publications();
        assert!(!pubs.is_empty());
        assert!(pubs.iter().all(|p| !p.title.is_empty()));
    }

    #[test]
    fn test_owner_is_highlighted() {
        let pubs = publications();
        let owner: Vec<_> = pubs[0].authors.iter().filter(|a| a.is_owner).collect();
        assert_eq!(owner.len(), 1);
        assert_eq!(owner[0].name, "Verdi, S.");
    }

    #[test]
    fn test_author_line_three_authors() {
        let pubs = publications();
        let text: String = pubs[0]
            .author_line()
            .into_iter()
            .map(|(name, _, sep)| format!("{name}{sep}"))
            .collect();
        assert_eq!(text, "Verdi, S., Moeini-Jazani, M., & Schwarz, N.");
    }

    #[test]
    fn test_author_line_two_authors() {
        let p = Publication {
            title: "t",
            authors: &[
                Author { name: "A", is_owner: true },
                Author { name: "B", is_owner: false },
            ],
            status: "",
            link: None,
        };
        let seps: Vec<_> = p.author_line().into_iter().map(|(_, _, s)| s).collect();
        assert_eq!(seps, [" & ", ""]);
    }

    #[test]
    fn test_courses() {
        assert_eq!(current_courses().len(), 3);
        assert_eq!(past_courses()[0].title, "Research Methodology for IB");
        assert_eq!(research_areas().len(), 3);
    }
}
