/// GraphQL schema to Spanner table conversion
///
/// The `Converter` turns every object type of a schema into a `CreateTable`:
/// fields become columns, relations become foreign-key columns, and each table
/// gets a detected or synthesized primary key.

mod case;
mod field;
mod primary_key;
mod table;
mod type_mapping;

pub use case::{
    convert_case, detect_case, effective_case, normalize, to_lower_camel_case, to_snake_case,
    to_upper_camel_case, Case,
};
pub use primary_key::{DetectedKey, PK_MARKER};
pub use type_mapping::{builtin_type, custom_scalar_type};

use crate::config::ConverterConfig;
use crate::ddl::{render_statements, CreateTable};
use crate::error::Result;
use crate::schema::{Schema, TypeDefinition, TypeKind};

/// Root operation types, which never become tables
const ROOT_TYPES: [&str; 3] = ["Query", "Mutation", "Subscription"];

pub struct Converter<'a> {
    schema: &'a Schema,
    loose: bool,
    created_name: String,
    updated_name: String,
    table_case: Case,
    column_case: Case,
}

impl<'a> Converter<'a> {
    /// Create a converter, rejecting unknown casing settings up front
    pub fn new(schema: &'a Schema, config: &ConverterConfig) -> Result<Self> {
        Ok(Self {
            schema,
            loose: config.loose,
            created_name: config.created_column_name.clone(),
            updated_name: config.updated_column_name.clone(),
            table_case: config.table_case()?,
            column_case: config.column_case()?,
        })
    }

    /// Object types that become tables, sorted by name
    pub fn table_types(&self) -> Vec<&'a TypeDefinition> {
        let schema: &'a Schema = self.schema;
        let mut names: Vec<&'a String> = schema.types.keys().collect();
        names.sort();

        names
            .into_iter()
            .filter_map(|name| schema.get(name))
            .filter(|def| !def.built_in && def.kind == TypeKind::Object)
            .filter(|def| !ROOT_TYPES.contains(&def.name.as_str()))
            .collect()
    }

    /// Convert every table type; the first failure aborts the whole run
    pub fn convert_schema(&self) -> Result<Vec<CreateTable>> {
        let tables = self
            .table_types()
            .into_iter()
            .map(|def| self.convert_definition(def))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Converted {} object types to tables", tables.len());
        Ok(tables)
    }

    /// The whole schema as a DDL script, one `;\n`-terminated statement per table
    pub fn spanner_sql(&self) -> Result<String> {
        Ok(render_statements(&self.convert_schema()?))
    }
}
