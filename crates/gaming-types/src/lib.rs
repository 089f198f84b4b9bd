//! Gaming Domain Types
//!
//! Shared vocabulary for Game Explorer registration: the element tree the
//! host compiler hands over, the typed tuples the gaming compiler emits into
//! an intermediate section, and the table schema a backend binder uses to
//! lay those tuples out as installer rows.
//!
//! # Key Concepts
//!
//! - **Element / Attribute / QName**: a namespace-qualified document tree with
//!   document order preserved. Tokenizing XML is the host's job.
//! - **IntermediateTuple**: one typed record (Directory, Shortcut, ...) bound
//!   for the installer's relational intermediate representation.
//! - **IntermediateSection**: the append-only, insertion-ordered set that owns
//!   every emitted tuple.
//! - **TableDefinition**: the persisted shape of the extension's own table,
//!   `WixGameExplorer`.

#![deny(unsafe_code)]

mod document;
mod section;
mod source;
mod tables;
mod tuples;

pub use document::*;
pub use section::*;
pub use source::*;
pub use tables::*;
pub use tuples::*;
