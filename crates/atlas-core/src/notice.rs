// crates/atlas-core/src/notice.rs
use serde::Serialize;

/// User-facing explanation of a non-`Normal` query outcome.
///
/// Titles, messages and suggestions are fixed per outcome; renderers and APIs
/// show them verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub suggestions: Vec<String>,
}

impl Notice {
    fn new(title: &str, message: String, suggestions: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            message,
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn empty_by_search(query: &str) -> Self {
        Self::new(
            "No Results Found",
            format!("No countries match your search criteria: '{query}'"),
            &[
                "Check your spelling",
                "Try a more general search term",
                "Search by region instead",
                "Browse all countries without filters",
            ],
        )
    }

    pub fn empty_by_filter() -> Self {
        Self::new(
            "No Countries in Time Zone",
            "We couldn't find any countries in the selected time zone.".to_string(),
            &[
                "Try a different time zone",
                "Check our world map to see time zone coverage",
                "Browse all countries without time zone filter",
            ],
        )
    }

    pub fn invalid_page(max_page: usize) -> Self {
        let mut message = "The requested page number does not exist.".to_string();
        if max_page == 1 {
            message.push_str(" There is only 1 page available.");
        } else {
            message.push_str(&format!(" Available pages: 1 to {max_page}."));
        }
        Self::new(
            "Invalid Page Number",
            message,
            &[
                "Go to the first page",
                "Use the pagination controls at the bottom of the page",
                "Return to the homepage without filters",
            ],
        )
    }

    pub fn invalid_parameter(name: &str) -> Self {
        Self::new(
            "Invalid URL Parameter",
            format!("The URL contains an invalid parameter: '{name}'"),
            &[
                "Remove the invalid parameter from the URL",
                "Check for typos in the URL",
                "Use the navigation and search forms instead of manually editing the URL",
                "Return to the homepage without filters",
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_message_depends_on_max() {
        assert_eq!(
            Notice::invalid_page(1).message,
            "The requested page number does not exist. There is only 1 page available."
        );
        assert_eq!(
            Notice::invalid_page(4).message,
            "The requested page number does not exist. Available pages: 1 to 4."
        );
    }

    #[test]
    fn notices_are_distinct() {
        let all = [
            Notice::empty_by_search("x"),
            Notice::empty_by_filter(),
            Notice::invalid_page(2),
            Notice::invalid_parameter("foo"),
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(!a.suggestions.is_empty());
            for b in &all[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
        assert!(Notice::invalid_parameter("foo").message.ends_with("'foo'"));
    }
}
