// SPDX-License-Identifier: MPL-2.0
//! Option data and search filtering for the select.

/// One entry of a select's option list.
///
/// Options are owned by the caller; the select only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Text shown in the list and in the trigger once selected.
    pub label: String,
    /// Key reported on selection. Unique within a list.
    pub value: String,
    /// Disabled options are shown dimmed and cannot be picked.
    pub disabled: bool,
    /// Optional picture reference; rendered as an avatar with the label's initial.
    pub photo: Option<String>,
    /// Optional short text rendered as a chip at the end of the row.
    pub tag: Option<String>,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
            photo: None,
            tag: None,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    #[must_use]
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Uppercased first letter of the label, used for the avatar.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.label
            .chars()
            .find(|c| c.is_alphanumeric())
            .and_then(|c| c.to_uppercase().next())
    }

    /// Case-insensitive substring match on the label.
    fn matches(&self, lowered_term: &str) -> bool {
        self.label.to_lowercase().contains(lowered_term)
    }
}

/// Options whose label contains `term`, ignoring case, in their original order.
///
/// An empty term keeps every option.
pub fn filter<'a>(options: &'a [SelectOption], term: &str) -> Vec<&'a SelectOption> {
    if term.is_empty() {
        return options.iter().collect();
    }

    let lowered = term.to_lowercase();
    options.iter().filter(|option| option.matches(&lowered)).collect()
}

/// Finds the option carrying `value`.
pub fn find<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a SelectOption> {
    options.iter().find(|option| option.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn alpha_beta() -> Vec<SelectOption> {
        vec![SelectOption::new("Alpha", "a"), SelectOption::new("Beta", "b")]
    }

    #[test]
    fn filter_matches_substring_ignoring_case() {
        let options = alpha_beta();
        let filtered = filter(&options, "al");
        assert_eq!(filtered, vec![&SelectOption::new("Alpha", "a")]);
    }

    #[test]
    fn filter_with_uppercase_term() {
        let options = alpha_beta();
        let filtered = filter(&options, "ETA");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].value, "b");
    }

    #[test]
    fn empty_term_keeps_everything() {
        let options = alpha_beta();
        assert_eq!(filter(&options, "").len(), 2);
    }

    #[test]
    fn no_match_yields_empty_set() {
        let options = alpha_beta();
        assert!(filter(&options, "gamma").is_empty());
    }

    #[test]
    fn filter_matches_label_not_value() {
        let options = alpha_beta();
        assert!(filter(&options, "b").iter().all(|o| o.label == "Beta"));
        assert!(filter(&options, "x").is_empty());
    }

    #[test]
    fn filter_on_empty_list_is_empty() {
        assert!(filter(&[], "anything").is_empty());
        assert!(filter(&[], "").is_empty());
    }

    #[test]
    fn find_by_value() {
        let options = alpha_beta();
        assert_eq!(find(&options, "b").map(|o| o.label.as_str()), Some("Beta"));
        assert!(find(&options, "Beta").is_none());
    }

    #[test]
    fn builder_sets_auxiliary_fields() {
        let option = SelectOption::new("Carol", "c")
            .disabled()
            .with_photo("avatars/carol.png")
            .with_tag("Coach");
        assert!(option.disabled);
        assert_eq!(option.photo.as_deref(), Some("avatars/carol.png"));
        assert_eq!(option.tag.as_deref(), Some("Coach"));
    }

    #[test]
    fn initial_skips_leading_symbols() {
        assert_eq!(SelectOption::new("  émile", "e").initial(), Some('É'));
        assert_eq!(SelectOption::new("", "x").initial(), None);
    }

    fn option_strategy() -> impl Strategy<Value = SelectOption> {
        ("[a-zA-Z ]{0,12}", "[a-z0-9]{1,6}", any::<bool>())
            .prop_map(|(label, value, disabled)| SelectOption {
                disabled,
                ..SelectOption::new(label, value)
            })
    }

    proptest! {
        #[test]
        fn filtered_set_is_exactly_the_matching_options(
            options in proptest::collection::vec(option_strategy(), 0..20),
            term in "[a-zA-Z ]{0,4}",
        ) {
            let filtered = filter(&options, &term);
            let expected: Vec<&SelectOption> = options
                .iter()
                .filter(|o| o.label.to_lowercase().contains(&term.to_lowercase()))
                .collect();
            prop_assert_eq!(filtered, expected);
        }

        #[test]
        fn empty_term_is_identity(options in proptest::collection::vec(option_strategy(), 0..20)) {
            let filtered = filter(&options, "");
            prop_assert_eq!(filtered.len(), options.len());
        }
    }
}
