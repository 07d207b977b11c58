/// Actions an observer can take during the feasibility search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search without a verdict.
    StopEarly,
}
