use crate::converter::case::{convert_case, normalize};
use crate::converter::Converter;
use crate::ddl::{ColumnDef, ColumnType, CreateTable, TypeBase};
use crate::error::Result;
use crate::schema::TypeDefinition;

impl Converter<'_> {
    /// Build the table for one object type
    ///
    /// Columns come in this order: the synthetic key (only when no field is a
    /// key), one per declared field, then the created/updated audit columns
    /// that no field already provides.
    pub fn convert_definition(&self, def: &TypeDefinition) -> Result<CreateTable> {
        let key = self.detect_primary_key(&def.name, &def.fields);

        let mut columns = Vec::with_capacity(def.fields.len() + 3);
        if !key.found {
            columns.push(ColumnDef {
                name: key.key_parts[0].column.clone(),
                ty: ColumnType::scalar(TypeBase::String),
                not_null: false,
            });
        }

        for field in &def.fields {
            let column = self
                .convert_field(field)
                .map_err(|e| e.in_field(&def.name, &field.name))?;
            columns.push(column);
        }

        for audit in [&self.created_name, &self.updated_name] {
            if audit.is_empty() {
                continue;
            }
            let wanted = normalize(audit);
            if def.fields.iter().any(|f| normalize(&f.name) == wanted) {
                continue;
            }
            columns.push(ColumnDef {
                name: audit.clone(),
                ty: ColumnType::scalar(TypeBase::Timestamp),
                not_null: true,
            });
        }

        let table = CreateTable {
            name: convert_case(&def.name, self.table_case),
            columns,
            primary_key: key.key_parts,
        };
        tracing::debug!(
            "{} -> table {} ({} columns)",
            def.name,
            table.name,
            table.columns.len()
        );
        Ok(table)
    }
}
