//! Policy knobs for the combination rules.

/// What a disjunction does with annotations of branches that did not
/// contribute to its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retention {
    /// Keep only annotations of contributing branches.
    #[default]
    Contributing,
    /// Keep every annotation; those from non-contributing branches carry the
    /// branch index in [`AnnotationEntry::branch`](crate::AnnotationEntry::branch).
    ///
    /// A disjunction in which no branch matched leaves its annotations
    /// untagged: every branch contributed to that failure.
    TagAll,
}

/// Configuration for combining child results.
///
/// The default keeps only contributing annotations and reports a failed
/// disjunction through its branches' own errors, without a summary entry.
///
/// # Example
///
/// ```rust
/// use schema_verdict::combine::{CombineOptions, Retention};
///
/// let options = CombineOptions::new()
///     .with_retention(Retention::TagAll)
///     .with_summary(true);
///
/// assert_eq!(options.retention(), Retention::TagAll);
/// assert!(options.summary());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombineOptions {
    retention: Retention,
    summary: bool,
}

impl CombineOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self {
            retention: Retention::Contributing,
            summary: false,
        }
    }

    /// Sets the annotation retention policy for disjunctions.
    pub fn with_retention(mut self, retention: Retention) -> Self {
        self.retention = retention;
        self
    }

    /// Sets whether a disjunction in which no branch matched reports a
    /// summary error ahead of the branches' errors. A disjunction with no
    /// branches at all always reports one.
    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    /// Returns the annotation retention policy.
    pub fn retention(&self) -> Retention {
        self.retention
    }

    /// Returns whether failed disjunctions lead with a summary error.
    pub fn summary(&self) -> bool {
        self.summary
    }
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self::new()
    }
}
