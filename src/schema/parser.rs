/// SDL parsing into the schema model
///
/// Documents are parsed with the `async-graphql` parser and merged into a single
/// `Schema`. Only the parts that matter for table generation are kept: type
/// kinds, names, descriptions and field types.

use crate::error::{GqlSpansqlError, Result};
use crate::schema::types::{FieldDefinition, Schema, TypeDefinition, TypeKind, TypeRef};

use async_graphql::parser::types::{
    BaseType, FieldDefinition as GqlField, Type as GqlType, TypeDefinition as GqlTypeDefinition,
    TypeKind as GqlTypeKind, TypeSystemDefinition,
};
use async_graphql::parser::Positioned;

/// One SDL document
#[derive(Debug, Clone, Default)]
pub struct Source {
    /// File name, used in error messages
    pub name: Option<String>,
    pub input: String,
}

impl Source {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            name: None,
            input: input.into(),
        }
    }

    pub fn named(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            input: input.into(),
        }
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<stdin>")
    }
}

impl Schema {
    /// Parse and merge SDL documents into one schema
    pub fn parse(sources: &[Source]) -> Result<Schema> {
        let mut schema = Schema::new();
        // Extensions may come before the type they extend, across sources
        let mut extensions: Vec<(String, Vec<FieldDefinition>)> = Vec::new();

        for source in sources {
            if !has_definitions(&source.input) {
                tracing::warn!("{} has no definitions, skipping", source.label());
                continue;
            }
            let document = async_graphql::parser::parse_schema(&source.input).map_err(|e| {
                GqlSpansqlError::SchemaParse(format!("{}: {}", source.label(), e))
            })?;

            for definition in document.definitions {
                let TypeSystemDefinition::Type(def) = definition else {
                    continue;
                };
                let def = def.node;
                let name = def.name.node.to_string();

                if def.extend {
                    extensions.push((name, convert_fields(&def)));
                    continue;
                }

                if schema.get(&name).is_some() {
                    return Err(GqlSpansqlError::SchemaParse(format!(
                        "{}: type '{}' is defined more than once",
                        source.label(),
                        name
                    )));
                }

                tracing::debug!("Parsed type {} from {}", name, source.label());
                schema.insert(convert_type(&def, name));
            }
        }

        for (name, fields) in extensions {
            let Some(def) = schema.types.get_mut(&name) else {
                return Err(GqlSpansqlError::SchemaParse(format!(
                    "cannot extend type '{}' because it is not defined",
                    name
                )));
            };
            def.fields.extend(fields);
        }

        Ok(schema)
    }
}

/// Whether anything other than whitespace and `#` comments is present
fn has_definitions(input: &str) -> bool {
    input.lines().map(str::trim).any(|line| !line.is_empty() && !line.starts_with('#'))
}

fn convert_type(def: &GqlTypeDefinition, name: String) -> TypeDefinition {
    let kind = match &def.kind {
        GqlTypeKind::Scalar => TypeKind::Scalar,
        GqlTypeKind::Object(_) => TypeKind::Object,
        GqlTypeKind::Interface(_) => TypeKind::Interface,
        GqlTypeKind::Union(_) => TypeKind::Union,
        GqlTypeKind::Enum(_) => TypeKind::Enum,
        GqlTypeKind::InputObject(_) => TypeKind::InputObject,
    };

    TypeDefinition {
        name,
        kind,
        description: def.description.as_ref().map(|d| d.node.clone()),
        fields: convert_fields(def),
        built_in: false,
    }
}

fn convert_fields(def: &GqlTypeDefinition) -> Vec<FieldDefinition> {
    let fields: &[Positioned<GqlField>] = match &def.kind {
        GqlTypeKind::Object(object) => &object.fields,
        GqlTypeKind::Interface(interface) => &interface.fields,
        _ => &[],
    };

    fields
        .iter()
        .map(|field| FieldDefinition {
            name: field.node.name.node.to_string(),
            ty: convert_type_ref(&field.node.ty.node),
            description: field.node.description.as_ref().map(|d| d.node.clone()),
        })
        .collect()
}

fn convert_type_ref(ty: &GqlType) -> TypeRef {
    let non_null = !ty.nullable;
    match &ty.base {
        BaseType::Named(name) => TypeRef::Named {
            name: name.to_string(),
            non_null,
        },
        BaseType::List(elem) => TypeRef::List {
            elem: Box::new(convert_type_ref(elem)),
            non_null,
        },
    }
}
