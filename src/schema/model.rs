#![forbid(unsafe_code)]

//! In-memory schema representation
//!
//! A [`Schema`] is immutable once built. It keeps type definitions in
//! declaration order and resolves the three optional root types by name.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Names of the standard scalar types every schema contains
pub const STANDARD_SCALARS: &[&str] = &["String", "Int", "Float", "Boolean", "ID"];

/// One of the three root operation types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootOperation {
    Query,
    Mutation,
    Subscription,
}

impl RootOperation {
    /// Every root operation, in the order they are checked
    pub const ALL: [RootOperation; 3] = [
        RootOperation::Query,
        RootOperation::Mutation,
        RootOperation::Subscription,
    ];

    /// Type name used for this root when the schema has no `schema { ... }` block
    pub fn default_type_name(&self) -> &'static str {
        match self {
            RootOperation::Query => "Query",
            RootOperation::Mutation => "Mutation",
            RootOperation::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for RootOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_type_name())
    }
}

/// The kind of a named type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    /// Returns true for kinds that declare fields
    pub fn has_fields(&self) -> bool {
        matches!(
            self,
            TypeKind::Object | TypeKind::Interface | TypeKind::InputObject
        )
    }
}

/// Where a type or field name appears in the schema source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File the definition came from; None for SDL parsed from a string
    pub file: Option<PathBuf>,
    /// 1-indexed
    pub line: usize,
    /// 1-indexed
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.column),
            None => write!(f, "<input>:{}:{}", self.line, self.column),
        }
    }
}

/// A field of an object, interface, or input object type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<SourceLocation>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            location: None,
        }
    }

    /// Returns true if the field carries a non-empty description
    pub fn is_documented(&self) -> bool {
        is_documented(self.description.as_deref())
    }
}

/// A named type and, for composite kinds, its fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub name: String,
    pub kind: TypeKind,
    pub description: Option<String>,
    pub fields: Vec<FieldDefinition>,
    /// Position of the type name; None for the standard scalars
    pub location: Option<SourceLocation>,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>, kind: TypeKind, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description,
            fields: Vec::new(),
            location: None,
        }
    }

    /// Returns true if the type carries a non-empty description
    pub fn is_documented(&self) -> bool {
        is_documented(self.description.as_deref())
    }

    /// Returns true for introspection types and the standard scalars
    pub fn is_builtin(&self) -> bool {
        is_builtin_type_name(&self.name)
    }
}

/// Returns true for names reserved by GraphQL itself
pub fn is_builtin_type_name(name: &str) -> bool {
    name.starts_with("__") || STANDARD_SCALARS.contains(&name)
}

/// Only an absent or empty description counts as undocumented
fn is_documented(description: Option<&str>) -> bool {
    description.is_some_and(|d| !d.is_empty())
}

/// A fully resolved schema
#[derive(Debug, Clone, Default)]
pub struct Schema {
    types: Vec<TypeDefinition>,
    index: HashMap<String, usize>,
    query: Option<String>,
    mutation: Option<String>,
    subscription: Option<String>,
}

impl Schema {
    /// Builds a schema from types in declaration order and resolved root names
    ///
    /// Callers are responsible for the root names referring to object types
    /// in `types`; the loader enforces this.
    pub(crate) fn from_parts(
        types: Vec<TypeDefinition>,
        query: Option<String>,
        mutation: Option<String>,
        subscription: Option<String>,
    ) -> Self {
        let index = types
            .iter()
            .enumerate()
            .map(|(i, ty)| (ty.name.clone(), i))
            .collect();
        Self {
            types,
            index,
            query,
            mutation,
            subscription,
        }
    }

    /// All types, in declaration order
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.iter()
    }

    /// Number of types, including the standard scalars
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Looks up a type by name
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    /// Returns the type serving as the given root, if the schema declares one
    pub fn root_type(&self, operation: RootOperation) -> Option<&TypeDefinition> {
        let name = match operation {
            RootOperation::Query => self.query.as_deref(),
            RootOperation::Mutation => self.mutation.as_deref(),
            RootOperation::Subscription => self.subscription.as_deref(),
        };
        name.and_then(|n| self.get_type(n))
    }

    pub fn query_type(&self) -> Option<&TypeDefinition> {
        self.root_type(RootOperation::Query)
    }

    pub fn mutation_type(&self) -> Option<&TypeDefinition> {
        self.root_type(RootOperation::Mutation)
    }

    pub fn subscription_type(&self) -> Option<&TypeDefinition> {
        self.root_type(RootOperation::Subscription)
    }

    /// Returns true if the named type is one of the resolved root types
    pub fn is_root_type(&self, name: &str) -> bool {
        [&self.query, &self.mutation, &self.subscription]
            .into_iter()
            .any(|root| root.as_deref() == Some(name))
    }
}
