//! Contract tests for the public resolution API and its collaborator
//! interfaces (adapter registry, diagnostic sink, dependency set builder).

// =============================================================================
// Dependency Set Contracts
// =============================================================================

mod dependency_set_contracts {
    use rebind::dependency_set;

    #[test]
    fn test_query_tables_pass_through_when_adapter_empty() {
        let empty: [&str; 0] = [];
        let set = dependency_set(empty, ["users", "sessions"]);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            ["sessions", "users"]
        );
    }

    #[test]
    fn test_union_is_superset_of_both_inputs() {
        let set = dependency_set(["posts", "comments"], ["users", "posts"]);
        for name in ["posts", "comments", "users"] {
            assert!(set.contains(name), "missing {name}");
        }
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_both_sides_empty_is_empty() {
        let empty: [&str; 0] = [];
        assert!(dependency_set(empty, empty).is_empty());
    }

    #[test]
    fn test_names_compared_by_exact_equality() {
        // Normalization is the upstream parser's contract; "Users" and
        // "users" are distinct dependencies here.
        let set = dependency_set(["Users"], ["users"]);
        assert_eq!(set.len(), 2);
    }
}

// =============================================================================
// Adapter Store Contracts
// =============================================================================

mod adapter_store_contracts {
    use rebind::{AdapterStore, ParsedQuery, RebindError, ResultAdapter, TypeDescriptor};

    #[test]
    fn test_not_found_is_ok_none() {
        let store = AdapterStore::new();
        let query = ParsedQuery::new("SELECT * FROM users").with_table("users");
        let found = store
            .find_result_adapter(&TypeDescriptor::new("User"), &query)
            .expect("lookup never fails for not-found");
        assert!(found.is_none());
    }

    #[test]
    fn test_registered_adapter_found_by_rendered_type() {
        let store = AdapterStore::new();
        store
            .register(ResultAdapter::new(
                "Vec<User>",
                vec!["users".to_string()],
            ))
            .expect("register");

        let element = TypeDescriptor::generic("Vec", vec![TypeDescriptor::new("User")]);
        let query = ParsedQuery::new("SELECT * FROM users").with_table("users");
        let adapter = store
            .find_result_adapter(&element, &query)
            .expect("lookup")
            .expect("adapter present");
        assert_eq!(adapter.element(), "Vec<User>");
        assert_eq!(adapter.accessed_table_names(), ["users".to_string()]);
    }

    #[test]
    fn test_duplicate_registration_is_an_error() {
        let store = AdapterStore::new();
        store
            .register(ResultAdapter::new("User", Vec::new()))
            .expect("first");
        let err = store
            .register(ResultAdapter::new("User", Vec::new()))
            .expect_err("second");
        assert!(matches!(err, RebindError::DuplicateAdapter(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_blank_element_type_is_malformed_input() {
        let store = AdapterStore::new();
        let query = ParsedQuery::new("SELECT 1");
        let err = store
            .find_result_adapter(&TypeDescriptor::new(""), &query)
            .expect_err("malformed");
        assert!(matches!(err, RebindError::MalformedType(_)));
    }
}

// =============================================================================
// Parsed Query Contracts
// =============================================================================

mod parsed_query_contracts {
    use rebind::ParsedQuery;

    #[test]
    fn test_table_names_are_ordered_and_distinct() {
        let query = ParsedQuery::new("SELECT * FROM b JOIN a ON 1=1 JOIN b b2 ON 1=1")
            .with_table("b")
            .with_table("a")
            .with_aliased_table("b", "b2");
        assert_eq!(query.table_names(), vec!["b", "a"]);
    }

    #[test]
    fn test_bind_params_are_metadata_only() {
        let query = ParsedQuery::new("SELECT * FROM users WHERE id = :id")
            .with_table("users")
            .with_param("id", 0);
        // Params never show up as dependencies.
        assert_eq!(query.table_names(), vec!["users"]);
        assert_eq!(query.params[0].index, 0);
    }
}

// =============================================================================
// Diagnostic Report Contracts
// =============================================================================

mod diagnostic_report_contracts {
    use rebind::{DiagnosticSink, SourceRef};

    #[test]
    fn test_report_never_halts_and_aggregates() {
        let sink = DiagnosticSink::new();
        for i in 0..3 {
            sink.report_error(&SourceRef::new("Store", format!("m{i}")), "boom");
        }
        assert_eq!(sink.len(), 3);
        assert!(sink.has_errors());
    }

    #[test]
    fn test_diagnostics_serialize_to_stable_json() {
        let sink = DiagnosticSink::new();
        sink.report_error(
            &SourceRef::new("UserStore", "observe_all"),
            "observable query has nothing to observe",
        );

        let json =
            serde_json::to_value(sink.into_diagnostics()).expect("serialize diagnostics");
        assert_eq!(json[0]["source"]["owner"], "UserStore");
        assert_eq!(json[0]["source"]["method"], "observe_all");
        assert_eq!(
            json[0]["message"],
            "observable query has nothing to observe"
        );
    }
}
