//! Type Registry
//!
//! The global type table: every named declaration the ingestion stage finds,
//! keyed by coordinate. Ownership stays with the caller, which drives a
//! strict two-phase lifecycle - populate fully during ingestion, then
//! resolve references during generation. Declarations may be referenced
//! before they are ingested, so resolution is never attempted mid-populate.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{Result, SchemaError};
use crate::schema::{Identifier, NamedType, TypeKind};

/// The global table of named declarations
#[derive(Debug, Default)]
pub struct TypeRegistry {
    /// coordinate -> declaration, keys unique
    types: HashMap<Identifier, NamedType>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration under its own coordinate.
    ///
    /// Registering the same declaration twice is idempotent (the same schema
    /// file reached through two paths is not a conflict). Registering a
    /// coordinate whose content differs from what is already in the table is
    /// a conflict and is surfaced, never overwritten - overwriting would
    /// hide a genuine modeling error in the source schemas.
    pub fn register(&mut self, declaration: NamedType) -> Result<()> {
        let identifier = declaration.identifier();

        if let Some(existing) = self.types.get(&identifier) {
            if existing.same_definition(&declaration) {
                debug!(
                    %identifier,
                    source = %declaration.source_file.display(),
                    "ignoring duplicate registration of identical declaration"
                );
                return Ok(());
            }
            warn!(
                %identifier,
                existing = %existing.source_file.display(),
                duplicate = %declaration.source_file.display(),
                "conflicting redeclaration"
            );
            return Err(SchemaError::DuplicateType {
                identifier,
                existing_file: existing.source_file.display().to_string(),
                duplicate_file: declaration.source_file.display().to_string(),
            });
        }

        debug!(
            %identifier,
            source = %declaration.source_file.display(),
            "registered declaration"
        );
        self.types.insert(identifier, declaration);
        Ok(())
    }

    /// Resolve a type-reference handle to its declaration.
    ///
    /// Stable regardless of insertion order, provided the populate phase has
    /// finished before the first call.
    pub fn resolve(&self, reference: &Identifier) -> Result<&NamedType> {
        self.types
            .get(reference)
            .ok_or_else(|| SchemaError::UnresolvedReference {
                identifier: reference.clone(),
            })
    }

    /// Look up a declaration without treating a miss as an error
    pub fn get(&self, reference: &Identifier) -> Option<&NamedType> {
        self.types.get(reference)
    }

    /// Whether a coordinate has been registered
    pub fn contains(&self, reference: &Identifier) -> bool {
        self.types.contains_key(reference)
    }

    /// Number of registered declarations
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all registered declarations
    pub fn iter(&self) -> impl Iterator<Item = (&Identifier, &NamedType)> {
        self.types.iter()
    }

    /// Count registered declarations per kind
    pub fn stats(&self) -> RegistryStats {
        let mut stats = RegistryStats::default();
        for declaration in self.types.values() {
            match declaration.kind {
                TypeKind::Record => stats.records += 1,
                TypeKind::Enum { .. } => stats.enums += 1,
                TypeKind::Typeref => stats.typerefs += 1,
                TypeKind::Fixed { .. } => stats.fixed += 1,
            }
        }
        stats
    }
}

/// Statistics about registered declarations
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RegistryStats {
    pub records: usize,
    pub enums: usize,
    pub typerefs: usize,
    pub fixed: usize,
}
