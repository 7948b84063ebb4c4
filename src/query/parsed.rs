//! Structured view of one parsed SQL statement.

/// A parsed SQL statement as produced by the upstream parser.
///
/// Immutable input to resolution. Table names arrive already normalized;
/// equality between them is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Raw statement text.
    pub sql: String,
    /// Tables referenced by the statement, in reference order.
    pub tables: Vec<TableRef>,
    /// Bind-parameter metadata. Carried through for the emission backend;
    /// resolution does not read it.
    pub params: Vec<BindParam>,
}

impl ParsedQuery {
    /// Creates a query descriptor with no table references.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        ParsedQuery {
            sql: sql.into(),
            tables: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Adds a referenced table.
    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>) -> Self {
        self.tables.push(TableRef::new(name));
        self
    }

    /// Adds a referenced table known under an alias.
    #[must_use]
    pub fn with_aliased_table(
        mut self,
        name: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        self.tables.push(TableRef::aliased(name, alias));
        self
    }

    /// Adds a bind parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, index: usize) -> Self {
        self.params.push(BindParam {
            name: name.into(),
            index,
        });
        self
    }

    /// Returns the distinct referenced table names in first-occurrence order.
    ///
    /// Aliases do not participate; only the underlying table name does.
    #[must_use]
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.tables.len());
        for table in &self.tables {
            if !names.contains(&table.name.as_str()) {
                names.push(&table.name);
            }
        }
        names
    }
}

/// One table referenced by a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Normalized table name.
    pub name: String,
    /// Alias the statement refers to it by, if any.
    pub alias: Option<String>,
}

impl TableRef {
    /// Creates an unaliased table reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        TableRef {
            name: name.into(),
            alias: None,
        }
    }

    /// Creates an aliased table reference.
    #[must_use]
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        TableRef {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }
}

/// Bind-parameter metadata attached to a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindParam {
    /// Parameter name as written in the statement.
    pub name: String,
    /// Zero-based position within the statement.
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names_in_reference_order() {
        let query = ParsedQuery::new("SELECT * FROM a JOIN b ON a.id = b.a_id")
            .with_table("a")
            .with_table("b");
        assert_eq!(query.table_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_table_names_deduplicated() {
        let query = ParsedQuery::new("SELECT * FROM a, a a2, b")
            .with_table("a")
            .with_aliased_table("a", "a2")
            .with_table("b");
        assert_eq!(query.table_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_alias_does_not_leak_into_names() {
        let query = ParsedQuery::new("SELECT u.name FROM users u")
            .with_aliased_table("users", "u");
        assert_eq!(query.table_names(), vec!["users"]);
    }

    #[test]
    fn test_params_carried_but_unused() {
        let query = ParsedQuery::new("SELECT * FROM users WHERE id = :id")
            .with_table("users")
            .with_param("id", 0);
        assert_eq!(query.params.len(), 1);
        assert_eq!(query.params[0].name, "id");
        assert_eq!(query.params[0].index, 0);
    }
}
