//! Shared resolution sequence for observable query methods.

use std::sync::Arc;

use crate::adapter::{AdapterStore, ResultAdapter};
use crate::diagnostics::{DiagnosticSink, OBSERVABLE_QUERY_NOTHING_TO_OBSERVE};
use crate::error::{RebindError, Result};
use crate::query::ParsedQuery;
use crate::types::{SourceRef, TypeDescriptor};

use super::deps::{dependency_set, TableSet};
use super::shape::{BinderShape, ObservableKind};

/// Collaborators one resolution call consults.
pub struct ResolveCtx<'a> {
    /// Adapter registry, read-only during resolution.
    pub adapters: &'a AdapterStore,
    /// Sink accumulating diagnostics across the compilation unit.
    pub diagnostics: &'a DiagnosticSink,
}

/// Resolved binding for one observable query method.
///
/// Immutable once constructed and consumed exactly once by the emission
/// backend. The dependency set is never empty — resolution refuses to
/// construct a binder for a query with nothing to observe.
#[derive(Debug, Clone)]
pub struct ObservableBinder {
    kind: ObservableKind,
    element: TypeDescriptor,
    adapter: Option<Arc<ResultAdapter>>,
    tables: TableSet,
}

impl ObservableBinder {
    pub(crate) fn new(
        kind: ObservableKind,
        element: TypeDescriptor,
        adapter: Option<Arc<ResultAdapter>>,
        tables: TableSet,
    ) -> Self {
        debug_assert!(!tables.is_empty(), "binder constructed with no dependencies");
        ObservableBinder {
            kind,
            element,
            adapter,
            tables,
        }
    }

    /// Returns the wrapper kind this binder targets.
    #[must_use]
    pub fn kind(&self) -> ObservableKind {
        self.kind
    }

    /// Returns the element type query results convert into.
    #[must_use]
    pub fn element(&self) -> &TypeDescriptor {
        &self.element
    }

    /// Returns the result adapter, absent when no structured conversion is
    /// needed.
    #[must_use]
    pub fn adapter(&self) -> Option<&ResultAdapter> {
        self.adapter.as_deref()
    }

    /// Returns the tables whose changes must re-run the query. Never empty.
    #[must_use]
    pub fn tables(&self) -> &TableSet {
        &self.tables
    }
}

/// Resolves one observable query method into a binder.
///
/// The sequence is fixed for every wrapper shape:
/// 1. extract the element type from the declared wrapper (shape hook)
/// 2. look up a result adapter for the element type
/// 3. union the adapter's tables with the query's referenced tables
/// 4. require the union to be non-empty
/// 5. construct the binder (shape hook)
///
/// Resolution is a pure function of its inputs and the registry contents;
/// at most one diagnostic is reported per call, and a failing method never
/// halts its compilation unit.
///
/// # Errors
///
/// Returns [`RebindError::ShapeMismatch`] if the declared wrapper does not
/// carry the expected type arguments, and [`RebindError::UnobservableQuery`]
/// if the dependency set comes up empty. Both are reported to the sink
/// against `source` before returning. Adapter-lookup failures on malformed
/// input propagate unchanged.
pub fn resolve(
    shape: &dyn BinderShape,
    ctx: &ResolveCtx<'_>,
    declared: &TypeDescriptor,
    source: &SourceRef,
    query: &ParsedQuery,
) -> Result<ObservableBinder> {
    let element = match shape.extract_element(declared) {
        Ok(element) => element,
        Err(err) => {
            ctx.diagnostics.report_error(source, &err.to_string());
            return Err(err);
        }
    };

    let adapter = ctx.adapters.find_result_adapter(&element, query)?;

    let adapter_tables = adapter
        .as_ref()
        .map(|a| a.accessed_table_names())
        .unwrap_or_default();
    let tables = dependency_set(adapter_tables, query.table_names());

    if tables.is_empty() {
        ctx.diagnostics
            .report_error(source, OBSERVABLE_QUERY_NOTHING_TO_OBSERVE);
        return Err(RebindError::UnobservableQuery {
            source_ref: source.clone(),
        });
    }

    log::debug!(
        "resolved {source}: element {element}, {} table dependencies",
        tables.len()
    );

    Ok(shape.construct(element, adapter, tables))
}
