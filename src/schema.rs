//! GraphQL schema loading and the in-memory type graph

pub mod files;
pub mod loader;
pub mod model;

pub use loader::{load_schema, parse_schema};
pub use model::{
    FieldDefinition, RootOperation, Schema, SourceLocation, TypeDefinition, TypeKind,
};
