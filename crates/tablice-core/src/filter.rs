//! Normalized region filters.
//!
//! Callers hand over loosely shaped input: a filter may be absent, empty, or
//! contain null and blank entries next to real names. Normalization keeps
//! every non-blank entry verbatim (recognized or not) and drops the rest, so
//! an input consisting only of nulls behaves like no filter at all.

use serde::Serialize;

/// Names from one optional filter sequence, nulls and blanks removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameFilter {
    names: Vec<String>,
}

impl NameFilter {
    /// Filter that matches every name.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn from_entries<I, T>(entries: Option<I>) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
        T: AsRef<str>,
    {
        let names = entries
            .into_iter()
            .flatten()
            .flatten()
            .filter(|entry| !entry.as_ref().trim().is_empty())
            .map(|entry| entry.as_ref().to_string())
            .collect();
        Self { names }
    }

    pub fn from_names<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::from_entries(Some(names.into_iter().map(Some)))
    }

    /// True when the filter places no restriction.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Case-sensitive exact match; an empty filter matches everything.
    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || self.names.iter().any(|entry| entry == name)
    }
}

/// Voivodeship and region filters applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlateFilter {
    pub voivodeships: NameFilter,
    pub regions: NameFilter,
}

impl PlateFilter {
    pub fn new<V, VT, R, RT>(voivodeships: Option<V>, regions: Option<R>) -> Self
    where
        V: IntoIterator<Item = Option<VT>>,
        VT: AsRef<str>,
        R: IntoIterator<Item = Option<RT>>,
        RT: AsRef<str>,
    {
        Self {
            voivodeships: NameFilter::from_entries(voivodeships),
            regions: NameFilter::from_entries(regions),
        }
    }

    /// Filter that leaves the national pool untouched.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn voivodeships<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.voivodeships = NameFilter::from_names(names);
        self
    }

    pub fn regions<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.regions = NameFilter::from_names(names);
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.voivodeships.is_empty() && self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_entries_mean_no_filter() {
        let filter = NameFilter::from_entries(None::<Vec<Option<&str>>>);
        assert!(filter.is_empty());
        assert!(filter.matches("mazowieckie"));
    }

    #[test]
    fn null_and_blank_entries_are_dropped() {
        let filter =
            NameFilter::from_entries(Some(vec![None, Some(""), Some("  "), Some("radomski")]));
        assert_eq!(filter.names(), ["radomski".to_string()]);
    }

    #[test]
    fn only_nulls_behaves_like_no_filter() {
        let filter = NameFilter::from_entries(Some([None::<&str>]));
        assert!(filter.is_empty());
    }

    #[test]
    fn unrecognized_names_are_kept_and_match_nothing_else() {
        let filter = NameFilter::from_names(["fake county"]);
        assert!(!filter.is_empty());
        assert!(filter.matches("fake county"));
        assert!(!filter.matches("radomski"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let filter = NameFilter::from_names(["Mazowieckie"]);
        assert!(!filter.matches("mazowieckie"));
    }

    #[test]
    fn builder_sets_both_filters() {
        let filter = PlateFilter::any()
            .voivodeships(["mazowieckie"])
            .regions(["radomski"]);
        assert!(!filter.is_unrestricted());
        assert_eq!(filter.voivodeships.names(), ["mazowieckie".to_string()]);
        assert_eq!(filter.regions.names(), ["radomski".to_string()]);
    }
}
