//! Type descriptors for declared method signatures.

mod descriptor;

pub use descriptor::{SourceRef, TypeDescriptor};
