//! Records shared by the catalog, the search filter and the output layer.

mod port;

pub use port::{Port, Release};
