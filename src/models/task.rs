use crate::config::Config;

/// Colour group for a task's category badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Work,
    School,
    Personal,
}

impl Category {
    /// Classifies free-form badge text; unknown categories fall back to work.
    pub fn classify(label: &str) -> Self {
        let label = label.trim().to_lowercase();

        if label.contains("work") {
            Category::Work
        } else if label.contains("school") || label.contains("education") {
            Category::School
        } else if label.contains("personal") || label.contains("home") {
            Category::Personal
        } else {
            Category::Work
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Work => "category-work",
            Category::School => "category-school",
            Category::Personal => "category-personal",
        }
    }
}

/// Whether a task's title or meta text contains the search term.
pub fn matches_search(title: &str, meta: Option<&str>, term: &str) -> bool {
    let term = term.to_lowercase();
    title.to_lowercase().contains(&term)
        || meta.is_some_and(|meta| meta.to_lowercase().contains(&term))
}

/// Whether a badge passes the category filter; an empty selection shows all.
pub fn matches_category(badge: &str, selected: &str) -> bool {
    selected.is_empty()
        || badge
            .trim()
            .to_lowercase()
            .contains(&selected.to_lowercase())
}

/// Required fields only count as filled when they have non-whitespace content.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Colour band of a textarea character counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Danger,
}

impl CounterLevel {
    pub fn for_length(length: usize, max_length: usize) -> Self {
        if length > max_length {
            CounterLevel::Danger
        } else if length as f64 > max_length as f64 * Config::COUNTER_WARNING_RATIO {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }

    /// CSS colour expression applied to the counter.
    pub fn color(&self) -> &'static str {
        match self {
            CounterLevel::Normal => "var(--text-light)",
            CounterLevel::Warning => "var(--warning-color)",
            CounterLevel::Danger => "var(--danger-color)",
        }
    }
}

pub fn counter_text(length: usize, max_length: usize) -> String {
    format!("{length}/{max_length}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_classification() {
        assert_eq!(Category::classify("Work"), Category::Work);
        assert_eq!(Category::classify("  Homework "), Category::Work);
        assert_eq!(Category::classify("School"), Category::School);
        assert_eq!(Category::classify("Higher Education"), Category::School);
        assert_eq!(Category::classify("Personal"), Category::Personal);
        assert_eq!(Category::classify("Home"), Category::Personal);
        assert_eq!(Category::classify("Groceries"), Category::Work);
    }

    #[test]
    fn test_search_matches_title_or_meta() {
        assert!(matches_search("Buy Milk", None, "milk"));
        assert!(matches_search("Buy milk", Some("Due: Friday"), "FRIDAY"));
        assert!(!matches_search("Buy milk", Some("Due: Friday"), "eggs"));
        assert!(matches_search("Anything", None, ""));
    }

    #[test]
    fn test_category_filter() {
        assert!(matches_category("School", ""));
        assert!(matches_category(" School ", "school"));
        assert!(!matches_category("Work", "personal"));
    }

    #[test]
    fn test_counter_levels() {
        assert_eq!(CounterLevel::for_length(10, 100), CounterLevel::Normal);
        assert_eq!(CounterLevel::for_length(90, 100), CounterLevel::Normal);
        assert_eq!(CounterLevel::for_length(91, 100), CounterLevel::Warning);
        assert_eq!(CounterLevel::for_length(100, 100), CounterLevel::Warning);
        assert_eq!(CounterLevel::for_length(101, 100), CounterLevel::Danger);
        assert_eq!(counter_text(12, 200), "12/200");
    }

    #[test]
    fn test_blank_detection() {
        assert!(is_blank("   \n\t"));
        assert!(!is_blank(" a "));
    }
}
