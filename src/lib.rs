//! rebind - resolution engine for observable data-access query methods.
//!
//! Given a method's declared return type (an observable wrapper such as
//! `Live<T>`, `Stream<T>` or `PageSource<K, V>`) and the parsed SQL it
//! executes, the resolver determines the element type callers expect, how
//! raw rows convert into it, and which tables must invalidate the query,
//! then packages the result as an [`ObservableBinder`] for code emission.
//!
//! Diagnostics accumulate: one invalid method never stops its siblings,
//! and the unit fails as a whole only if anything was recorded.

pub mod adapter;
pub mod binder;
pub mod diagnostics;
pub mod error;
pub mod query;
pub mod types;

use rayon::prelude::*;

pub use adapter::{AdapterStore, ResultAdapter};
pub use binder::{
    dependency_set, resolve, BinderShape, ObservableBinder, ObservableKind, ResolveCtx, TableSet,
    LIVE_WRAPPER, PAGES_WRAPPER, STREAM_WRAPPER,
};
pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use error::{RebindError, Result};
pub use query::{BindParam, ParsedQuery, TableRef};
pub use types::{SourceRef, TypeDescriptor};

/// One declarative query method awaiting resolution.
#[derive(Debug, Clone)]
pub struct QueryMethod {
    /// Name of the declaring data-access type.
    pub owner: String,
    /// Method name.
    pub name: String,
    /// Declared return type, expected to be an observable wrapper.
    pub returns: TypeDescriptor,
    /// Parsed query the method executes.
    pub query: ParsedQuery,
}

impl QueryMethod {
    /// Creates a query method description.
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        returns: TypeDescriptor,
        query: ParsedQuery,
    ) -> Self {
        QueryMethod {
            owner: owner.into(),
            name: name.into(),
            returns,
            query,
        }
    }

    /// Returns the source reference diagnostics for this method attach to.
    #[must_use]
    pub fn source_ref(&self) -> SourceRef {
        SourceRef::new(self.owner.clone(), self.name.clone())
    }
}

/// Drives binder resolution for one compilation unit.
///
/// Owns the adapter registry and the diagnostic sink. Register adapters
/// first, then resolve; the registry is treated as read-only from that
/// point on.
#[derive(Debug, Default)]
pub struct Resolver {
    adapters: AdapterStore,
    diagnostics: DiagnosticSink,
}

impl Resolver {
    /// Creates a resolver with an empty adapter registry.
    #[must_use]
    pub fn new() -> Self {
        Resolver {
            adapters: AdapterStore::new(),
            diagnostics: DiagnosticSink::new(),
        }
    }

    /// Returns the adapter registry.
    #[must_use]
    pub fn adapters(&self) -> &AdapterStore {
        &self.adapters
    }

    /// Returns the diagnostic sink.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticSink {
        &self.diagnostics
    }

    /// Resolves a single query method, recording any diagnostic.
    ///
    /// Returns `None` when the method cannot be bound; sibling methods are
    /// unaffected.
    pub fn resolve_method(&self, method: &QueryMethod) -> Option<ObservableBinder> {
        let source = method.source_ref();
        let Some(kind) = ObservableKind::of(&method.returns) else {
            let err = RebindError::UnsupportedWrapper {
                declared: method.returns.to_string(),
            };
            self.diagnostics.report_error(&source, &err.to_string());
            return None;
        };

        let ctx = ResolveCtx {
            adapters: &self.adapters,
            diagnostics: &self.diagnostics,
        };
        resolve(&kind, &ctx, &method.returns, &source, &method.query).ok()
    }

    /// Resolves every method of a compilation unit in parallel.
    ///
    /// Output order matches input order. Each resolution is independent;
    /// only the diagnostic sink is shared, and it synchronizes internally.
    pub fn resolve_unit(&self, methods: &[QueryMethod]) -> Vec<Option<ObservableBinder>> {
        log::debug!("resolving unit of {} method(s)", methods.len());
        methods
            .par_iter()
            .map(|method| self.resolve_method(method))
            .collect()
    }

    /// Returns true if any method failed to resolve so far.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Consumes the resolver, returning all recorded diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_diagnostics()
    }
}
