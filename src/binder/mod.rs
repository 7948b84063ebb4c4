//! Binder resolution for observable query methods.
//!
//! The binder turns one declared return type plus one parsed query into an
//! [`ObservableBinder`]:
//! - the wrapper's element type, extracted per wrapper shape
//! - an optional result adapter for that element type
//! - the full set of tables whose changes must re-run the query
//!
//! The resolution sequence is fixed; only extraction and construction vary
//! by wrapper shape.

mod deps;
mod observable;
mod shape;

pub use deps::{dependency_set, TableSet};
pub use observable::{resolve, ObservableBinder, ResolveCtx};
pub use shape::{BinderShape, ObservableKind, LIVE_WRAPPER, PAGES_WRAPPER, STREAM_WRAPPER};
