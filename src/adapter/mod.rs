//! Result adapters and the registry resolution consults.

mod store;

pub use store::{AdapterStore, ResultAdapter};
