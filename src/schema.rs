//! Named schema declarations and type-reference handles

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::export::exported_identifier;

/// The `(namespace, name)` coordinate of a named schema declaration.
///
/// Doubles as a weak type-reference handle: field types, method signatures,
/// and other reference sites hold an `Identifier` and resolve it against the
/// [`TypeRegistry`](crate::registry::TypeRegistry) instead of owning the
/// declaration, which keeps mutually recursive schemas cycle-free. The
/// identity contract of the whole crate lives here - two declarations are
/// the same entity iff their coordinates are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// Dot-separated scoping path; empty for top-level declarations
    pub namespace: String,
    /// The declaration's local name as given in the schema
    pub name: String,
}

impl Identifier {
    /// Create an identifier from a namespace and a local name
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// The dotted qualified name (e.g. "com.example.Fortune")
    pub fn qualified(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

/// Kind of named declaration
///
/// Payloads are codegen inputs only; none of them participate in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// A record with named fields (fields modeled outside this core)
    Record,
    /// An enumeration of string symbols
    Enum {
        symbols: Vec<String>,
        /// Per-symbol documentation, carried through for codegen comments
        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        symbol_docs: HashMap<String, String>,
    },
    /// An alias for another type
    Typeref,
    /// A fixed-size byte array
    Fixed { size: usize },
}

/// A named schema declaration.
///
/// Created once per declaration during ingestion, immutable thereafter.
/// Equality and hashing cover the `(namespace, name)` coordinate ONLY:
/// `doc`, `source_file`, and `kind` never participate, so re-ingesting the
/// same schema through a different path yields values that compare equal
/// and hash identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedType {
    /// The declaration's local name as given in the schema (not yet export-safe)
    pub name: String,
    /// Dot-separated scoping path; empty for top-level declarations
    pub namespace: String,
    /// Free-form documentation, carried through for codegen comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Provenance only - which schema file declared this type
    pub source_file: PathBuf,
    /// Kind of declaration
    pub kind: TypeKind,
}

impl NamedType {
    /// Create a new declaration without documentation
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        kind: TypeKind,
        source_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            doc: None,
            source_file: source_file.into(),
            kind,
        }
    }

    /// Create a new declaration with documentation
    pub fn with_doc(
        namespace: impl Into<String>,
        name: impl Into<String>,
        kind: TypeKind,
        source_file: impl Into<PathBuf>,
        doc: impl Into<String>,
    ) -> Self {
        let mut named = Self::new(namespace, name, kind, source_file);
        named.doc = Some(doc.into());
        named
    }

    /// The declaration's own coordinate as a type-reference handle.
    ///
    /// Used when a declaration refers to itself or is registered as a
    /// referenceable target elsewhere.
    pub fn identifier(&self) -> Identifier {
        Identifier::new(self.namespace.clone(), self.name.clone())
    }

    /// The export-safe symbol name for this declaration
    pub fn exported_name(&self) -> Result<String> {
        exported_identifier(&self.name)
    }

    /// Whether two declarations with the same coordinate carry the same
    /// substantive content.
    ///
    /// `source_file` is excluded: the same declaration reached through two
    /// paths is still the same declaration. The registry uses this to tell
    /// an idempotent re-registration from a conflicting redefinition.
    pub fn same_definition(&self, other: &NamedType) -> bool {
        self == other && self.doc == other.doc && self.kind == other.kind
    }

    /// Export-safe identifiers for an enum's symbols, in declaration order.
    ///
    /// Returns an empty list for non-enum kinds.
    pub fn symbol_identifiers(&self) -> Result<Vec<String>> {
        match &self.kind {
            TypeKind::Enum { symbols, .. } => {
                symbols.iter().map(|s| exported_identifier(s)).collect()
            }
            _ => Ok(Vec::new()),
        }
    }
}

impl PartialEq for NamedType {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.name == other.name
    }
}

impl Eq for NamedType {}

impl Hash for NamedType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.name.hash(state);
    }
}
