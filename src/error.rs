//! Error taxonomy (component A and component E failures).
//!
//! Everything else in the solver either succeeds or prunes a branch; pruning
//! is not an error (see the crate-level docs), so it never appears here.

/// Failure building a [`crate::Matrix`] from user-supplied items and options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("item {0:?} is used in an option, but not declared")]
    ItemNotDeclared(String),
    #[error("item {0:?} is declared as both primary and secondary")]
    ItemDeclaredTwice(String),
    #[error("no primary items declared")]
    NoPrimaryItems,
    #[error("no options declared")]
    NoOptions,
    #[error("option {option} is empty")]
    EmptyOption { option: usize },
    #[error("item {item:?} appears twice in option {option}")]
    DuplicateItemInOption { option: usize, item: String },
    #[error("empty color string in option {option}, item {item:?}")]
    EmptyColor { option: usize, item: String },
    #[error("primary item {item:?} cannot carry a color (option {option})")]
    PrimaryItemColored { option: usize, item: String },
}

/// A violation found by [`crate::verify`].
///
/// Unlike the reference behavior's `assert` calls, every violation is
/// reported as data: callers that want to know *why* a purported solution is
/// invalid can match on the variant instead of catching a panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyViolation {
    #[error("primary item {item:?} is not covered by any option in the solution")]
    PrimaryItemUncovered { item: String },
    #[error("primary item {item:?} is covered by more than one option in the solution")]
    PrimaryItemCoveredTwice { item: String },
    #[error("secondary item {item:?} is covered with inconsistent colors")]
    InconsistentColor { item: String },
    #[error("secondary item {item:?} is covered more than once with no color to reconcile it")]
    SecondaryItemCoveredTwice { item: String },
    #[error("solution refers to option index {0} which does not exist")]
    UnknownOption(usize),
}
