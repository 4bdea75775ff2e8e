//! Incremental search over a catalog of port projects.
//!
//! A [`Catalog`] of [`Port`]s is loaded once from metadata and shared
//! read-only. The [`search`] module turns each change of the search input into
//! a fresh [`SearchState`] holding the raw term and the ports still visible,
//! always filtered from the full catalog and kept in catalog order.
//!
//! ```
//! use portgrid::{Catalog, Port, search};
//!
//! let catalog = Catalog::new(vec![
//!     Port::new("redis", "Nord Redis").with_search_terms(["redis", "cache"]),
//!     Port::new("nginx", "Nord Nginx").with_search_terms(["nginx", "proxy"]),
//! ]);
//!
//! let state = search::initialize(catalog);
//! let state = search::on_term_changed(state, "RE");
//! let names: Vec<_> = state.visible_ports().map(|port| port.name.as_str()).collect();
//! assert_eq!(names, ["redis"]);
//! ```

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod search;
pub mod types;

pub use catalog::{Catalog, CatalogError, CatalogFormat};
pub use search::{SearchEvent, SearchState, reduce};
pub use types::{Port, Release};
