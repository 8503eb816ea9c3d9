use crate::converter::case::{convert_case, effective_case};
use crate::converter::Converter;
use crate::ddl::{ColumnDef, ColumnType};
use crate::error::{GqlSpansqlError, Result};
use crate::schema::{FieldDefinition, TypeKind, TypeRef};

impl Converter<'_> {
    /// Column for one field
    ///
    /// NOT NULL follows the field itself, never the element of a list or the
    /// key of a referenced object.
    pub fn convert_field(&self, field: &FieldDefinition) -> Result<ColumnDef> {
        let ty = self.field_column_type(field, &mut Vec::new())?;
        let column = ColumnDef {
            name: self.column_name(field),
            ty,
            not_null: field.ty.non_null(),
        };
        tracing::debug!("{} -> {}", field.name, column);
        Ok(column)
    }

    /// Column name for a field
    ///
    /// A field referencing an object type stores that object's key instead, so
    /// its column is named `<Type>Id`, or `<Type>Ids` for a list.
    pub fn column_name(&self, field: &FieldDefinition) -> String {
        let named = field.ty.named_type();
        match self.schema.get(named) {
            Some(def) if def.kind == TypeKind::Object => {
                let suffix = if field.ty.is_list() { "s" } else { "" };
                let case = effective_case(self.column_case, Some(field.name.as_str()));
                convert_case(&format!("{}Id{}", named, suffix), case)
            }
            _ => convert_case(&field.name, self.column_case),
        }
    }

    /// Column type for a field, carrying the relation chain being resolved
    pub(super) fn field_column_type(
        &self,
        field: &FieldDefinition,
        visiting: &mut Vec<String>,
    ) -> Result<ColumnType> {
        match &field.ty {
            TypeRef::Named { name, .. } => Ok(ColumnType::scalar(self.resolve(name, visiting)?)),
            TypeRef::List { elem, .. } => {
                let TypeRef::Named { name, non_null } = elem.as_ref() else {
                    return Err(GqlSpansqlError::UnsupportedNestedList {
                        field: field.name.clone(),
                    });
                };
                if !non_null {
                    if !self.loose {
                        return Err(GqlSpansqlError::NullableArrayElementNotAllowed {
                            field: field.name.clone(),
                        });
                    }
                    tracing::debug!("{}: allowing nullable array element (loose)", field.name);
                }
                Ok(ColumnType::array_of(self.resolve(name, visiting)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConverterConfig;
    use crate::schema::{Schema, TypeDefinition};

    fn schema() -> Schema {
        let mut schema = Schema::new();
        schema.insert(TypeDefinition::new("State", TypeKind::Enum));
        schema.insert(TypeDefinition::object(
            "AItem",
            vec![FieldDefinition::new("aItemId", TypeRef::named_nn("ID"))],
        ));
        schema.insert(TypeDefinition::object(
            "User",
            vec![
                FieldDefinition::new("userId", TypeRef::named_nn("String")),
                FieldDefinition::new("userIds", TypeRef::list_nn(TypeRef::named_nn("String"))),
                FieldDefinition::new("aItem", TypeRef::named("AItem")),
                FieldDefinition::new("aItems", TypeRef::list(TypeRef::named_nn("AItem"))),
                FieldDefinition::new(
                    "nonNullListOfNonNullState",
                    TypeRef::list_nn(TypeRef::named_nn("State")),
                ),
                FieldDefinition::new(
                    "nonNullListOfNullState",
                    TypeRef::list_nn(TypeRef::named("State")),
                ),
                FieldDefinition::new(
                    "nullListOfNonNullState",
                    TypeRef::list(TypeRef::named_nn("State")),
                ),
                FieldDefinition::new("nullListOfNullState", TypeRef::list(TypeRef::named("State"))),
                FieldDefinition::new(
                    "matrix",
                    TypeRef::list(TypeRef::list_nn(TypeRef::named_nn("Int"))),
                ),
            ],
        ));
        schema
    }

    fn column_sql(loose: bool, field_name: &str) -> Result<String> {
        let schema = schema();
        let config = ConverterConfig {
            loose,
            ..Default::default()
        };
        let converter = Converter::new(&schema, &config)?;
        let field = schema.get("User").unwrap().field(field_name).unwrap();
        Ok(converter.convert_field(field)?.to_string())
    }

    #[test]
    fn test_named_field() {
        assert_eq!(column_sql(true, "userId").unwrap(), "userId STRING(MAX) NOT NULL");
    }

    #[test]
    fn test_non_null_list_of_non_null_element() {
        assert_eq!(
            column_sql(false, "nonNullListOfNonNullState").unwrap(),
            "nonNullListOfNonNullState ARRAY<INT64> NOT NULL"
        );
    }

    #[test]
    fn test_element_non_null_does_not_make_column_not_null() {
        assert_eq!(
            column_sql(false, "nullListOfNonNullState").unwrap(),
            "nullListOfNonNullState ARRAY<INT64>"
        );
    }

    #[test]
    fn test_nullable_element_needs_loose_mode() {
        for name in ["nonNullListOfNullState", "nullListOfNullState"] {
            let err = column_sql(false, name).unwrap_err();
            assert!(matches!(
                err,
                GqlSpansqlError::NullableArrayElementNotAllowed { ref field } if field == name
            ));
        }
        assert_eq!(
            column_sql(true, "nonNullListOfNullState").unwrap(),
            "nonNullListOfNullState ARRAY<INT64> NOT NULL"
        );
        assert_eq!(
            column_sql(true, "nullListOfNullState").unwrap(),
            "nullListOfNullState ARRAY<INT64>"
        );
    }

    #[test]
    fn test_nested_list_is_rejected() {
        let err = column_sql(true, "matrix").unwrap_err();
        assert!(matches!(err, GqlSpansqlError::UnsupportedNestedList { .. }));
    }

    #[test]
    fn test_column_names() {
        let schema = schema();
        let config = ConverterConfig::default();
        let converter = Converter::new(&schema, &config).unwrap();
        let user = schema.get("User").unwrap();
        let name = |f: &str| converter.column_name(user.field(f).unwrap());

        assert_eq!(name("aItem"), "aItemId");
        assert_eq!(name("userId"), "userId");
        assert_eq!(name("aItems"), "aItemIds");
        assert_eq!(name("userIds"), "userIds");
    }

    #[test]
    fn test_relation_column_names_follow_configured_case() {
        let schema = schema();
        let config = ConverterConfig {
            column_case: "snake".to_string(),
            ..Default::default()
        };
        let converter = Converter::new(&schema, &config).unwrap();
        let user = schema.get("User").unwrap();

        assert_eq!(converter.column_name(user.field("aItems").unwrap()), "a_item_ids");
        assert_eq!(
            converter.column_name(user.field("nullListOfNullState").unwrap()),
            "null_list_of_null_state"
        );
    }

    #[test]
    fn test_relation_column_takes_key_type() {
        let schema = schema();
        let config = ConverterConfig::default();
        let converter = Converter::new(&schema, &config).unwrap();
        let user = schema.get("User").unwrap();

        let column = converter.convert_field(user.field("aItems").unwrap()).unwrap();
        assert_eq!(column.to_string(), "aItemIds ARRAY<STRING(MAX)>");
    }
}
