//! Check, narrow and complete multiplication tables against the group axioms

pub use self::classify::classify;
pub use self::propagate::{propagate, reduce};
pub use self::search::{complete, Completions, SearchBudget, DEFAULT_SEARCH_LIMIT};

mod classify;
mod propagate;
mod search;

/// How a table relates to the group axioms
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Some axiom is already violated, or some product has no candidates left
    Invalid,
    /// No violation found yet, but some products are undetermined
    Incomplete,
    /// Every product is determined and the table is a group
    Valid,
}
