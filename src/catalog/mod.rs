//! The immutable catalog of ports and the loaders that provide it.
//!
//! A [`Catalog`] is built once from external metadata and then shared
//! read-only between every [`SearchState`](crate::search::SearchState)
//! derived from it. Cloning a catalog is cheap: all clones point at the same
//! storage.

mod error;
mod source;

use std::sync::Arc;

pub use error::CatalogError;
pub use source::CatalogFormat;

use crate::types::Port;

/// Ordered, read-only collection of ports.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ports: Arc<[Port]>,
}

impl Catalog {
    /// Create a catalog that preserves the order of `ports`.
    #[must_use]
    pub fn new(ports: Vec<Port>) -> Self {
        Self {
            ports: ports.into(),
        }
    }

    /// Create a catalog without any ports.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Port> {
        self.ports.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Port> {
        self.ports.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Port] {
        &self.ports
    }

    /// Return `true` when both handles share the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ports, &other.ports)
    }
}

impl FromIterator<Port> for Catalog {
    fn from_iter<T: IntoIterator<Item = Port>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Port;
    type IntoIter = std::slice::Iter<'a, Port>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
