//! Dependency set construction for observable queries.

use std::collections::BTreeSet;

/// Set of table names an observable query depends on.
///
/// A `BTreeSet` keeps iteration deterministic for the emission backend;
/// the ordering itself carries no meaning.
pub type TableSet = BTreeSet<String>;

/// Unions the tables a result adapter reads with the tables the query
/// references directly.
///
/// Table names are compared by exact string equality; normalization is the
/// upstream parser's contract. Empty inputs are valid and simply yield a
/// smaller, possibly empty, union — the caller decides whether an empty
/// result is an error.
#[must_use]
pub fn dependency_set<A, Q>(adapter_tables: A, query_tables: Q) -> TableSet
where
    A: IntoIterator,
    A::Item: AsRef<str>,
    Q: IntoIterator,
    Q::Item: AsRef<str>,
{
    adapter_tables
        .into_iter()
        .map(|name| name.as_ref().to_owned())
        .chain(query_tables.into_iter().map(|name| name.as_ref().to_owned()))
        .collect()
}
