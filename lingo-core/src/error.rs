/// Errors produced by the `lingo-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A similarity score or threshold value was outside the valid range `0..=100`.
    #[error("invalid score {value}: must be in 0..=100")]
    InvalidScore { value: u8 },

    /// A catalog definition contained no usable language names.
    #[error("empty catalog: expected at least one non-empty comma-separated language name")]
    EmptyCatalog,
}
