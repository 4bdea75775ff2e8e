//! Incremental search over a [`Catalog`](crate::catalog::Catalog).
//!
//! The filter is a pure reducer: every input event consumes the previous
//! [`SearchState`] and returns a new one whose visible ports are recomputed
//! from the full catalog. Nothing here depends on an event loop, so the same
//! code backs the interactive CLI session and the tests.

mod event;
mod state;

pub use event::{SearchEvent, reduce};
pub use state::{SearchState, VisiblePorts};

use crate::catalog::Catalog;

/// Create the initial state for `catalog`: empty term, every port visible.
#[must_use]
pub fn initialize(catalog: Catalog) -> SearchState {
    SearchState::new(catalog)
}

/// Apply a new raw input to `previous` and return the resulting state.
///
/// Filtering always restarts from the full catalog captured by `previous`.
#[must_use]
pub fn on_term_changed(previous: SearchState, raw_input: impl Into<String>) -> SearchState {
    previous.with_term(raw_input)
}

/// Normalize raw input for matching.
///
/// Only case is folded. Whitespace is significant, so `" vim"` does not match
/// a `vim` search term.
#[must_use]
pub fn normalize_term(raw_input: &str) -> String {
    raw_input.to_lowercase()
}

/// Indices of the ports in `catalog` matching `raw_input`, in catalog order.
#[must_use]
pub fn filter_indices(catalog: &Catalog, raw_input: &str) -> Vec<usize> {
    let needle = normalize_term(raw_input);
    catalog
        .iter()
        .enumerate()
        .filter(|(_, port)| needle.is_empty() || port.matches(&needle))
        .map(|(index, _)| index)
        .collect()
}
