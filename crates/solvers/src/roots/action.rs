/// Actions an observer can take during the root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the roots found so far.
    StopEarly,
}
