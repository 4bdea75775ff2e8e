use std::iter::FusedIterator;

use tracing::trace;

use super::filter_indices;
use crate::catalog::Catalog;
use crate::types::Port;

/// Snapshot of the search view: the raw term and the ports it leaves visible.
///
/// The term and the visible list are only ever replaced together. Updating
/// consumes the state and returns a new one; there is no in-place mutation.
#[derive(Debug, Clone)]
pub struct SearchState {
    catalog: Catalog,
    term: String,
    visible: Vec<usize>,
}

impl SearchState {
    pub(super) fn new(catalog: Catalog) -> Self {
        let visible = (0..catalog.len()).collect();
        Self {
            catalog,
            term: String::new(),
            visible,
        }
    }

    /// Replace the term and recompute the visible ports from the full catalog.
    #[must_use]
    pub fn with_term(self, raw_input: impl Into<String>) -> Self {
        let term = raw_input.into();
        let visible = filter_indices(&self.catalog, &term);
        trace!(
            term = %term,
            visible = visible.len(),
            total = self.catalog.len(),
            "recomputed visible ports"
        );
        Self {
            catalog: self.catalog,
            term,
            visible,
        }
    }

    /// The raw input exactly as the user typed it.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The unfiltered catalog this state was initialized with.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog indices of the visible ports, strictly increasing.
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    #[must_use]
    pub fn visible_ports(&self) -> VisiblePorts<'_> {
        VisiblePorts {
            ports: self.catalog.as_slice(),
            indices: self.visible.iter(),
        }
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Return `true` when no port matches the current term.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Consume the state, cloning the visible ports out of the catalog.
    #[must_use]
    pub fn into_visible(self) -> Vec<Port> {
        self.visible_ports().cloned().collect()
    }
}

/// Iterator over the visible ports of a [`SearchState`], in catalog order.
#[derive(Debug, Clone)]
pub struct VisiblePorts<'a> {
    ports: &'a [Port],
    indices: std::slice::Iter<'a, usize>,
}

impl<'a> Iterator for VisiblePorts<'a> {
    type Item = &'a Port;

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.indices.next()?;
        self.ports.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl DoubleEndedIterator for VisiblePorts<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = *self.indices.next_back()?;
        self.ports.get(index)
    }
}

impl ExactSizeIterator for VisiblePorts<'_> {}

impl FusedIterator for VisiblePorts<'_> {}
