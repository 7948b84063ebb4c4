//! Adapter registry keyed by rendered element type.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{RebindError, Result};
use crate::query::ParsedQuery;
use crate::types::TypeDescriptor;

/// Conversion strategy from raw result rows into one element type.
///
/// How the conversion is implemented belongs to the emission backend;
/// resolution only needs to know which element type the adapter produces
/// and which tables its conversion reads (non-empty for composed element
/// types assembled from joined rows, empty for flat row types).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultAdapter {
    /// Rendered element type the adapter converts rows into.
    element: String,
    /// Tables the conversion itself reads.
    accessed_tables: Vec<String>,
}

impl ResultAdapter {
    /// Creates an adapter for the given rendered element type.
    #[must_use]
    pub fn new(element: impl Into<String>, accessed_tables: Vec<String>) -> Self {
        ResultAdapter {
            element: element.into(),
            accessed_tables,
        }
    }

    /// Returns the rendered element type this adapter produces.
    #[must_use]
    pub fn element(&self) -> &str {
        &self.element
    }

    /// Returns the tables the conversion itself reads. May be empty.
    #[must_use]
    pub fn accessed_table_names(&self) -> &[String] {
        &self.accessed_tables
    }
}

/// Registry of result adapters, keyed by rendered element type.
///
/// Built up before resolution starts and read-only afterwards. The interior
/// lock makes lookups safe when a compilation driver resolves methods from
/// several threads.
#[derive(Debug, Default)]
pub struct AdapterStore {
    adapters: RwLock<HashMap<String, Arc<ResultAdapter>>>,
}

impl AdapterStore {
    /// Creates an empty adapter store.
    #[must_use]
    pub fn new() -> Self {
        AdapterStore {
            adapters: RwLock::new(HashMap::new()),
        }
    }

    /// Registers an adapter under its element type.
    ///
    /// # Errors
    ///
    /// Returns [`RebindError::DuplicateAdapter`] if an adapter for the same
    /// element type is already registered.
    pub fn register(&self, adapter: ResultAdapter) -> Result<()> {
        let mut adapters = self.adapters.write();
        if adapters.contains_key(adapter.element()) {
            return Err(RebindError::DuplicateAdapter(adapter.element().to_string()));
        }
        adapters.insert(adapter.element().to_string(), Arc::new(adapter));
        Ok(())
    }

    /// Looks up the adapter converting rows into `element`, if one exists.
    ///
    /// `Ok(None)` is the valid "no structured conversion needed" state, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`RebindError::MalformedType`] if the element type has a
    /// blank head name.
    pub fn find_result_adapter(
        &self,
        element: &TypeDescriptor,
        query: &ParsedQuery,
    ) -> Result<Option<Arc<ResultAdapter>>> {
        if element.name().trim().is_empty() {
            return Err(RebindError::MalformedType(format!(
                "element type with blank name in query '{}'",
                query.sql
            )));
        }

        let rendered = element.to_string();
        let found = self.adapters.read().get(&rendered).cloned();
        if found.is_none() {
            log::trace!(
                "no result adapter for '{rendered}' (query references {} table(s))",
                query.table_names().len()
            );
        }
        Ok(found)
    }

    /// Returns true if an adapter is registered for the rendered element type.
    #[must_use]
    pub fn contains(&self, element: &str) -> bool {
        self.adapters.read().contains_key(element)
    }

    /// Returns the number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.read().len()
    }

    /// Returns true if no adapters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_query() -> ParsedQuery {
        ParsedQuery::new("SELECT * FROM users").with_table("users")
    }

    #[test]
    fn test_lookup_missing_adapter_is_ok_none() {
        let store = AdapterStore::new();
        let found = store
            .find_result_adapter(&TypeDescriptor::new("User"), &users_query())
            .expect("lookup");
        assert!(found.is_none());
    }

    #[test]
    fn test_lookup_registered_adapter() {
        let store = AdapterStore::new();
        store
            .register(ResultAdapter::new("User", vec!["users".to_string()]))
            .expect("register");

        let found = store
            .find_result_adapter(&TypeDescriptor::new("User"), &users_query())
            .expect("lookup")
            .expect("adapter present");
        assert_eq!(found.element(), "User");
        assert_eq!(found.accessed_table_names(), ["users".to_string()]);
    }

    #[test]
    fn test_lookup_uses_rendered_generic_name() {
        let store = AdapterStore::new();
        store
            .register(ResultAdapter::new("Vec<User>", vec!["users".to_string()]))
            .expect("register");

        let element =
            TypeDescriptor::generic("Vec", vec![TypeDescriptor::new("User")]);
        let found = store
            .find_result_adapter(&element, &users_query())
            .expect("lookup");
        assert!(found.is_some());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let store = AdapterStore::new();
        store
            .register(ResultAdapter::new("User", Vec::new()))
            .expect("first registration");

        let err = store
            .register(ResultAdapter::new("User", vec!["users".to_string()]))
            .expect_err("duplicate registration");
        assert!(matches!(err, RebindError::DuplicateAdapter(ref e) if e == "User"));
    }

    #[test]
    fn test_blank_element_name_is_malformed() {
        let store = AdapterStore::new();
        let err = store
            .find_result_adapter(&TypeDescriptor::new("  "), &users_query())
            .expect_err("malformed element");
        assert!(matches!(err, RebindError::MalformedType(_)));
    }
}
