//! Builds a [`Schema`] from GraphQL SDL
//!
//! Every file is parsed with async-graphql-parser. Definitions from all files
//! are merged in file order: type extensions are folded into their base type
//! and the root operation types are resolved once everything is known.

use crate::error::SchemaError;
use crate::schema::files::discover_schema_files;
use crate::schema::model::{
    FieldDefinition, RootOperation, STANDARD_SCALARS, Schema, SourceLocation, TypeDefinition,
    TypeKind,
};
use async_graphql_parser::types::{
    SchemaDefinition, TypeDefinition as SdlTypeDefinition, TypeKind as SdlTypeKind,
    TypeSystemDefinition,
};
use async_graphql_parser::{Pos, Positioned};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Load a schema from a file, directory, or glob pattern
pub fn load_schema(location: &str) -> Result<Schema, SchemaError> {
    let files = discover_schema_files(location)?;

    let mut builder = SchemaBuilder::default();
    for file in &files {
        tracing::debug!(path = %file.display(), "loading schema file");
        let sdl = fs::read_to_string(file).map_err(|source| SchemaError::Io {
            path: file.clone(),
            source,
        })?;
        builder.add_document(&sdl, Some(file.as_path()))?;
    }

    let schema = builder.build()?;
    tracing::debug!(
        files = files.len(),
        types = schema.len(),
        "schema loaded"
    );
    Ok(schema)
}

/// Parse a schema from a single SDL string
pub fn parse_schema(sdl: &str) -> Result<Schema, SchemaError> {
    let mut builder = SchemaBuilder::default();
    builder.add_document(sdl, None)?;
    builder.build()
}

/// Root type names from a `schema { ... }` or `extend schema { ... }` block
#[derive(Debug, Default)]
struct RootNames {
    query: Option<String>,
    mutation: Option<String>,
    subscription: Option<String>,
}

impl RootNames {
    fn from_definition(def: &SchemaDefinition) -> Self {
        Self {
            query: def.query.as_ref().map(|n| n.node.to_string()),
            mutation: def.mutation.as_ref().map(|n| n.node.to_string()),
            subscription: def.subscription.as_ref().map(|n| n.node.to_string()),
        }
    }

    fn merge(&mut self, other: RootNames) {
        self.query = self.query.take().or(other.query);
        self.mutation = self.mutation.take().or(other.mutation);
        self.subscription = self.subscription.take().or(other.subscription);
    }

    fn get(&self, operation: RootOperation) -> Option<&str> {
        match operation {
            RootOperation::Query => self.query.as_deref(),
            RootOperation::Mutation => self.mutation.as_deref(),
            RootOperation::Subscription => self.subscription.as_deref(),
        }
    }
}

/// Fields contributed by an `extend` definition
#[derive(Debug)]
struct Extension {
    type_name: String,
    fields: Vec<FieldDefinition>,
}

/// Accumulates definitions across documents
#[derive(Debug, Default)]
struct SchemaBuilder {
    types: Vec<TypeDefinition>,
    index: HashMap<String, usize>,
    extensions: Vec<Extension>,
    schema_definition: Option<RootNames>,
    schema_extensions: Vec<RootNames>,
}

impl SchemaBuilder {
    fn add_document(&mut self, sdl: &str, path: Option<&Path>) -> Result<(), SchemaError> {
        let document =
            async_graphql_parser::parse_schema(sdl).map_err(|e| SchemaError::Syntax {
                path: path.map_or_else(|| PathBuf::from("<input>"), Path::to_path_buf),
                message: e.to_string(),
            })?;

        for definition in document.definitions {
            match definition {
                TypeSystemDefinition::Schema(def) => {
                    let roots = RootNames::from_definition(&def.node);
                    if def.node.extend {
                        self.schema_extensions.push(roots);
                    } else if self.schema_definition.is_some() {
                        return Err(SchemaError::DuplicateSchemaDefinition);
                    } else {
                        self.schema_definition = Some(roots);
                    }
                }
                TypeSystemDefinition::Type(def) => self.add_type(def.node, path)?,
                TypeSystemDefinition::Directive(_) => {}
            }
        }

        Ok(())
    }

    fn add_type(&mut self, def: SdlTypeDefinition, path: Option<&Path>) -> Result<(), SchemaError> {
        let name = def.name.node.to_string();
        let (kind, fields) = convert_kind(&def.kind, path);

        if def.extend {
            self.extensions.push(Extension {
                type_name: name,
                fields,
            });
            return Ok(());
        }

        if self.index.contains_key(&name) {
            return Err(SchemaError::DuplicateType { name });
        }

        let mut ty = TypeDefinition::new(name.clone(), kind, def.description.map(|d| d.node));
        ty.fields = fields;
        ty.location = Some(source_location(def.name.pos, path));

        self.index.insert(name, self.types.len());
        self.types.push(ty);
        Ok(())
    }

    fn build(mut self) -> Result<Schema, SchemaError> {
        for extension in std::mem::take(&mut self.extensions) {
            let Some(&i) = self.index.get(&extension.type_name) else {
                return Err(SchemaError::ExtensionOfUnknownType {
                    name: extension.type_name,
                });
            };
            self.types[i].fields.extend(extension.fields);
        }

        for scalar in STANDARD_SCALARS {
            if !self.index.contains_key(*scalar) {
                self.index.insert(scalar.to_string(), self.types.len());
                self.types
                    .push(TypeDefinition::new(*scalar, TypeKind::Scalar, None));
            }
        }

        let roots = self.resolve_roots()?;
        Ok(Schema::from_parts(
            self.types,
            roots.query,
            roots.mutation,
            roots.subscription,
        ))
    }

    /// Resolves root names from the schema block and its extensions
    ///
    /// Without a `schema { ... }` block, roots left unnamed by `extend schema`
    /// fall back to the conventional `Query`/`Mutation`/`Subscription` types.
    fn resolve_roots(&mut self) -> Result<RootNames, SchemaError> {
        let definition = self.schema_definition.take();
        let has_definition = definition.is_some();

        let mut roots = definition.unwrap_or_default();
        for extension in std::mem::take(&mut self.schema_extensions) {
            roots.merge(extension);
        }

        if !has_definition {
            let by_default = |operation: RootOperation| {
                let name = operation.default_type_name();
                self.index.contains_key(name).then(|| name.to_string())
            };
            roots.merge(RootNames {
                query: by_default(RootOperation::Query),
                mutation: by_default(RootOperation::Mutation),
                subscription: by_default(RootOperation::Subscription),
            });
        }

        for operation in RootOperation::ALL {
            let Some(name) = roots.get(operation) else {
                continue;
            };
            let Some(&i) = self.index.get(name) else {
                return Err(SchemaError::UnknownRootType {
                    operation,
                    name: name.to_string(),
                });
            };
            if self.types[i].kind != TypeKind::Object {
                return Err(SchemaError::InvalidRootType {
                    operation,
                    name: name.to_string(),
                });
            }
        }

        Ok(roots)
    }
}

fn source_location(pos: Pos, path: Option<&Path>) -> SourceLocation {
    SourceLocation {
        file: path.map(Path::to_path_buf),
        line: pos.line,
        column: pos.column,
    }
}

fn convert_field(
    name: String,
    pos: Pos,
    description: Option<&Positioned<String>>,
    path: Option<&Path>,
) -> FieldDefinition {
    FieldDefinition {
        name,
        description: description.map(|d| d.node.clone()),
        location: Some(source_location(pos, path)),
    }
}

fn convert_kind(kind: &SdlTypeKind, path: Option<&Path>) -> (TypeKind, Vec<FieldDefinition>) {
    match kind {
        SdlTypeKind::Scalar => (TypeKind::Scalar, Vec::new()),
        SdlTypeKind::Object(object) => (
            TypeKind::Object,
            object
                .fields
                .iter()
                .map(|f| {
                    convert_field(
                        f.node.name.node.to_string(),
                        f.node.name.pos,
                        f.node.description.as_ref(),
                        path,
                    )
                })
                .collect(),
        ),
        SdlTypeKind::Interface(interface) => (
            TypeKind::Interface,
            interface
                .fields
                .iter()
                .map(|f| {
                    convert_field(
                        f.node.name.node.to_string(),
                        f.node.name.pos,
                        f.node.description.as_ref(),
                        path,
                    )
                })
                .collect(),
        ),
        SdlTypeKind::Union(_) => (TypeKind::Union, Vec::new()),
        SdlTypeKind::Enum(_) => (TypeKind::Enum, Vec::new()),
        SdlTypeKind::InputObject(input) => (
            TypeKind::InputObject,
            input
                .fields
                .iter()
                .map(|f| {
                    convert_field(
                        f.node.name.node.to_string(),
                        f.node.name.pos,
                        f.node.description.as_ref(),
                        path,
                    )
                })
                .collect(),
        ),
    }
}
