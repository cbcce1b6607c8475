//! Pegasus Typegen Core
//!
//! The identifier-export and named-type-identity layer of a Pegasus schema
//! code generator: turns schema-level names into export-safe identifiers for
//! the generated language, and gives named schema declarations a stable
//! identity so that the same logical type, referenced from many schema files,
//! collapses to one entry in the type registry.
//!
//! ## Features
//!
//! - **Export-safe identifiers**: deterministic mapping from arbitrary schema
//!   names to capitalized, letter-leading symbol names
//! - **Coordinate identity**: declarations compare equal by `(namespace, name)`
//!   alone, so re-ingesting a schema through a different path is a no-op
//! - **Weak type references**: [`Identifier`] handles point at declarations by
//!   coordinate, never by ownership, so mutually recursive types cost nothing
//! - **Conflict detection**: a coordinate redeclared with different content is
//!   surfaced as an error, never silently merged
//!
//! ## Architecture
//!
//! ```text
//! schema parser (external)
//!     │  NamedType per declaration
//!     ▼
//! TypeRegistry ── populate fully, then resolve
//!     │  &NamedType per Identifier handle
//!     ▼
//! code emission (external)
//! ```
//!
//! The registry is owned by the caller and follows a strict two-phase
//! lifecycle: every declaration is registered before the first reference is
//! resolved. Nothing in this crate performs I/O.

pub mod error;
pub mod export;
pub mod registry;
pub mod schema;

pub use error::{Result, SchemaError};
pub use export::exported_identifier;
pub use registry::{RegistryStats, TypeRegistry};
pub use schema::{Identifier, NamedType, TypeKind};
