//! Observable wrapper shapes and their extraction/construction hooks.

use std::sync::Arc;

use crate::adapter::ResultAdapter;
use crate::error::{RebindError, Result};
use crate::types::TypeDescriptor;

use super::deps::TableSet;
use super::observable::ObservableBinder;

/// Wrapper type name handled by [`ObservableKind::Live`].
pub const LIVE_WRAPPER: &str = "Live";
/// Wrapper type name handled by [`ObservableKind::Stream`].
pub const STREAM_WRAPPER: &str = "Stream";
/// Wrapper type name handled by [`ObservableKind::Pages`].
pub const PAGES_WRAPPER: &str = "PageSource";

/// The closed set of observable wrapper kinds the resolver understands.
///
/// Each kind handles one wrapper shape; the emission backend later wires the
/// binder to the reactive runtime primitive the kind stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservableKind {
    /// `Live<T>`: holds the latest value, republished on every change.
    Live,
    /// `Stream<T>`: multi-value reactive stream of query results.
    Stream,
    /// `PageSource<K, V>`: factory for paged access keyed by `K` over rows
    /// of `V`.
    Pages,
}

impl ObservableKind {
    /// Selects the kind handling the declared wrapper, if any.
    ///
    /// This is the single dispatch step run before the shared resolution
    /// sequence; the sequence itself is identical across kinds.
    #[must_use]
    pub fn of(declared: &TypeDescriptor) -> Option<ObservableKind> {
        match declared.name() {
            LIVE_WRAPPER => Some(ObservableKind::Live),
            STREAM_WRAPPER => Some(ObservableKind::Stream),
            PAGES_WRAPPER => Some(ObservableKind::Pages),
            _ => None,
        }
    }

    /// Returns the wrapper type name this kind handles.
    #[must_use]
    pub fn wrapper(self) -> &'static str {
        match self {
            ObservableKind::Live => LIVE_WRAPPER,
            ObservableKind::Stream => STREAM_WRAPPER,
            ObservableKind::Pages => PAGES_WRAPPER,
        }
    }
}

/// Extraction and construction hooks for one observable wrapper shape.
///
/// The sequence in [`super::resolve`] is fixed; implementations only decide
/// how the element type comes out of the declared wrapper and how the final
/// binder is assembled.
pub trait BinderShape {
    /// Extracts the element type from the declared wrapper type.
    ///
    /// # Errors
    ///
    /// Returns [`RebindError::ShapeMismatch`] if the wrapper does not carry
    /// exactly the expected number of type arguments.
    fn extract_element(&self, declared: &TypeDescriptor) -> Result<TypeDescriptor>;

    /// Assembles the binder for this shape from the resolved parts.
    ///
    /// Only reached once the dependency set has been checked non-empty.
    fn construct(
        &self,
        element: TypeDescriptor,
        adapter: Option<Arc<ResultAdapter>>,
        tables: TableSet,
    ) -> ObservableBinder;
}

impl BinderShape for ObservableKind {
    fn extract_element(&self, declared: &TypeDescriptor) -> Result<TypeDescriptor> {
        match self {
            ObservableKind::Live => type_arg_at(LIVE_WRAPPER, declared, 1, 0),
            ObservableKind::Stream => type_arg_at(STREAM_WRAPPER, declared, 1, 0),
            // PageSource<K, V>: K only configures paging; rows convert to V.
            ObservableKind::Pages => type_arg_at(PAGES_WRAPPER, declared, 2, 1),
        }
    }

    fn construct(
        &self,
        element: TypeDescriptor,
        adapter: Option<Arc<ResultAdapter>>,
        tables: TableSet,
    ) -> ObservableBinder {
        match self {
            ObservableKind::Live => {
                ObservableBinder::new(ObservableKind::Live, element, adapter, tables)
            }
            ObservableKind::Stream => {
                ObservableBinder::new(ObservableKind::Stream, element, adapter, tables)
            }
            ObservableKind::Pages => {
                ObservableBinder::new(ObservableKind::Pages, element, adapter, tables)
            }
        }
    }
}

/// Validates the wrapper's argument count and returns the argument at
/// `position`.
fn type_arg_at(
    wrapper: &str,
    declared: &TypeDescriptor,
    expected: usize,
    position: usize,
) -> Result<TypeDescriptor> {
    let args = declared.type_args();
    if args.len() != expected {
        return Err(RebindError::ShapeMismatch {
            wrapper: wrapper.to_string(),
            expected,
            actual: args.len(),
        });
    }
    Ok(args[position].clone())
}
