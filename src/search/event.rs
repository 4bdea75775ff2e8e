use super::SearchState;

/// Input events understood by the search reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The search input now holds this raw text.
    TermChanged(String),
    /// The search input was cleared.
    Cleared,
}

impl SearchEvent {
    /// Build a [`SearchEvent::TermChanged`] from anything string-like.
    pub fn term(raw_input: impl Into<String>) -> Self {
        Self::TermChanged(raw_input.into())
    }
}

/// Fold one event into the state, returning the replacement state.
#[must_use]
pub fn reduce(state: SearchState, event: SearchEvent) -> SearchState {
    match event {
        SearchEvent::TermChanged(raw_input) => state.with_term(raw_input),
        SearchEvent::Cleared => state.with_term(String::new()),
    }
}
