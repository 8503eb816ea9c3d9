use crate::converter::case::{convert_case, effective_case, normalize};
use crate::converter::Converter;
use crate::ddl::KeyPart;
use crate::schema::FieldDefinition;

/// Marks a field as (part of) the primary key when found in its description
pub const PK_MARKER: &str = "SpannerPK";

/// Primary key of an object type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedKey<'f> {
    pub key_parts: Vec<KeyPart>,
    /// False when no field qualified and the single key part is synthetic
    pub found: bool,
    /// The fields backing `key_parts`, empty when synthetic
    pub fields: Vec<&'f FieldDefinition>,
}

impl Converter<'_> {
    /// Find the primary key among an object's fields, or synthesize `<Type>Id`
    ///
    /// Fields are scanned in order. A field whose description carries
    /// `SpannerPK` joins the key and the scan goes on, so several fields can
    /// form a composite key. Otherwise the first field named like `Id` or
    /// `<Type>Id` joins the key and ends the scan.
    pub fn detect_primary_key<'f>(
        &self,
        type_name: &str,
        fields: &'f [FieldDefinition],
    ) -> DetectedKey<'f> {
        let id = normalize("Id");
        let type_id = normalize(&format!("{}Id", type_name));

        let mut key_fields: Vec<&'f FieldDefinition> = Vec::new();
        for field in fields {
            if field.description().contains(PK_MARKER) {
                key_fields.push(field);
                continue;
            }
            let name = normalize(&field.name);
            if name == id || name == type_id {
                key_fields.push(field);
                break;
            }
        }

        if key_fields.is_empty() {
            let case = effective_case(self.column_case, fields.first().map(|f| f.name.as_str()));
            let column = convert_case(&format!("{}Id", type_name), case);
            tracing::debug!("{}: no key field found, synthesizing {}", type_name, column);
            return DetectedKey {
                key_parts: vec![KeyPart::new(column)],
                found: false,
                fields: key_fields,
            };
        }

        DetectedKey {
            key_parts: key_fields
                .iter()
                .map(|f| KeyPart::new(self.column_name(f)))
                .collect(),
            found: true,
            fields: key_fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConverterConfig;
    use crate::schema::{Schema, TypeDefinition, TypeRef};

    fn detect(schema: &Schema, config: &ConverterConfig, type_name: &str) -> (Vec<String>, bool) {
        let converter = Converter::new(schema, config).unwrap();
        let def = schema.get(type_name).unwrap();
        let key = converter.detect_primary_key(&def.name, &def.fields);
        let columns = key.key_parts.into_iter().map(|k| k.column).collect();
        (columns, key.found)
    }

    fn schema_with(defs: Vec<TypeDefinition>) -> Schema {
        let mut schema = Schema::new();
        for def in defs {
            schema.insert(def);
        }
        schema
    }

    fn field(name: &str) -> FieldDefinition {
        FieldDefinition::new(name, TypeRef::named_nn("String"))
    }

    #[test]
    fn test_id_field_is_sole_key() {
        for spelling in ["id", "Id", "ID"] {
            let schema = schema_with(vec![TypeDefinition::object(
                "HasId",
                vec![field("name"), field(spelling), field("other")],
            )]);
            let (key, found) = detect(&schema, &ConverterConfig::default(), "HasId");
            assert!(found);
            assert_eq!(key, vec![spelling.to_string()]);
        }
    }

    #[test]
    fn test_type_id_field_is_sole_key() {
        let schema = schema_with(vec![TypeDefinition::object(
            "Foo",
            vec![field("name"), field("FooId")],
        )]);
        let (key, found) = detect(&schema, &ConverterConfig::default(), "Foo");
        assert!(found);
        assert_eq!(key, vec!["FooId".to_string()]);
    }

    #[test]
    fn test_first_id_like_field_wins() {
        let schema = schema_with(vec![TypeDefinition::object(
            "User",
            vec![field("userId"), field("id")],
        )]);
        let (key, _) = detect(&schema, &ConverterConfig::default(), "User");
        assert_eq!(key, vec!["userId".to_string()]);
    }

    #[test]
    fn test_synthetic_key_follows_first_field_case() {
        let schema = schema_with(vec![
            TypeDefinition::object("Foo", vec![field("state")]),
            TypeDefinition::object("Bar", vec![field("some_state")]),
            TypeDefinition::object("Baz", vec![field("SomeState")]),
        ]);
        let config = ConverterConfig::default();

        assert_eq!(detect(&schema, &config, "Foo"), (vec!["fooId".to_string()], false));
        assert_eq!(detect(&schema, &config, "Bar"), (vec!["bar_id".to_string()], false));
        assert_eq!(detect(&schema, &config, "Baz"), (vec!["BazId".to_string()], false));
    }

    #[test]
    fn test_synthetic_key_uses_configured_case() {
        let schema = schema_with(vec![TypeDefinition::object("HasNoId", vec![field("state")])]);
        let config = ConverterConfig {
            column_case: "snake".to_string(),
            ..Default::default()
        };
        assert_eq!(
            detect(&schema, &config, "HasNoId"),
            (vec!["has_no_id_id".to_string()], false)
        );
    }

    #[test]
    fn test_synthetic_key_for_type_without_fields() {
        let schema = schema_with(vec![TypeDefinition::object("Empty", vec![])]);
        assert_eq!(
            detect(&schema, &ConverterConfig::default(), "Empty"),
            (vec!["EmptyId".to_string()], false)
        );
    }

    #[test]
    fn test_marked_fields_form_composite_key() {
        let schema = schema_with(vec![TypeDefinition::object(
            "Membership",
            vec![
                field("groupName").with_description("SpannerPK"),
                field("note"),
                field("userName").with_description("part of key: SpannerPK"),
            ],
        )]);
        let (key, found) = detect(&schema, &ConverterConfig::default(), "Membership");
        assert!(found);
        assert_eq!(key, vec!["groupName".to_string(), "userName".to_string()]);
    }

    #[test]
    fn test_id_after_marked_field_joins_and_stops_scan() {
        let schema = schema_with(vec![TypeDefinition::object(
            "Mixed",
            vec![
                field("pk").with_description("SpannerPK"),
                field("id"),
                field("late").with_description("SpannerPK"),
            ],
        )]);
        let (key, _) = detect(&schema, &ConverterConfig::default(), "Mixed");
        assert_eq!(key, vec!["pk".to_string(), "id".to_string()]);
    }

    #[test]
    fn test_key_part_follows_column_case() {
        let schema = schema_with(vec![TypeDefinition::object("User", vec![field("userId")])]);
        let config = ConverterConfig {
            column_case: "snake".to_string(),
            ..Default::default()
        };
        assert_eq!(detect(&schema, &config, "User"), (vec!["user_id".to_string()], true));
    }
}
