//! Parsed query descriptors.
//!
//! The SQL parser itself lives upstream; resolution only consumes the
//! structured view it produces: referenced tables, raw statement text,
//! and bind-parameter metadata.

mod parsed;

pub use parsed::{BindParam, ParsedQuery, TableRef};
