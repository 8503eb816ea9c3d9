/// GraphQL to Spanner type mapping
///
/// # Type Mapping Rules
///
/// - `Int` → `INT64`
/// - `ID`, `String` → `STRING`
/// - `Float` → `FLOAT64`
/// - `Boolean` → `BOOL`
/// - `Time`, `TimeStamp`, `Timestamp` → `TIMESTAMP`
/// - `Date` → `DATE`
/// - enums → `INT64`
/// - custom scalars → from a `SpannerType: <type>` line in their description,
///   `STRING` otherwise
/// - object types → the type of the referenced object's single key column

use crate::converter::Converter;
use crate::ddl::TypeBase;
use crate::error::{GqlSpansqlError, Result};
use crate::schema::{TypeDefinition, TypeKind};

use regex::Regex;
use std::sync::LazyLock;

static SPANNER_TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^SpannerType: ?(.*)$").expect("valid regex"));

/// Fixed mapping for built-in and well-known scalar names
pub fn builtin_type(name: &str) -> Option<TypeBase> {
    match name {
        "Int" => Some(TypeBase::Int64),
        "ID" | "String" => Some(TypeBase::String),
        "Float" => Some(TypeBase::Float64),
        "Boolean" => Some(TypeBase::Bool),
        "Time" | "TimeStamp" | "Timestamp" => Some(TypeBase::Timestamp),
        "Date" => Some(TypeBase::Date),
        _ => None,
    }
}

/// Column type of a custom scalar, read from its `SpannerType:` description
pub fn custom_scalar_type(description: Option<&str>) -> TypeBase {
    let Some(captures) = description.and_then(|d| SPANNER_TYPE_PATTERN.captures(d)) else {
        return TypeBase::String;
    };
    let declared = captures.get(1).map_or("", |m| m.as_str());

    if declared.contains("Int") {
        TypeBase::Int64
    } else if declared.contains("ID") || declared.contains("String") {
        TypeBase::String
    } else if declared.contains("Float") {
        TypeBase::Float64
    } else if declared.contains("Boolean") {
        TypeBase::Bool
    } else {
        TypeBase::String
    }
}

impl Converter<'_> {
    /// Column base type for a GraphQL named type
    pub fn resolve_type(&self, name: &str) -> Result<TypeBase> {
        self.resolve(name, &mut Vec::new())
    }

    /// `visiting` holds the object types whose keys are being resolved, so a
    /// relation chain that comes back to one of them is reported, not followed.
    pub(super) fn resolve(&self, name: &str, visiting: &mut Vec<String>) -> Result<TypeBase> {
        if let Some(base) = builtin_type(name) {
            return Ok(base);
        }

        let def = self
            .schema
            .get(name)
            .ok_or_else(|| GqlSpansqlError::UnknownScalar {
                type_name: name.to_string(),
            })?;

        match def.kind {
            TypeKind::Enum => Ok(TypeBase::Int64),
            TypeKind::Scalar => Ok(custom_scalar_type(def.description.as_deref())),
            TypeKind::Object => self.resolve_relation(def, visiting),
            _ => Err(GqlSpansqlError::UnknownScalar {
                type_name: name.to_string(),
            }),
        }
    }

    fn resolve_relation(&self, def: &TypeDefinition, visiting: &mut Vec<String>) -> Result<TypeBase> {
        if visiting.contains(&def.name) {
            let mut path = visiting.clone();
            path.push(def.name.clone());
            return Err(GqlSpansqlError::CyclicKeyReference {
                path: path.join(" -> "),
            });
        }

        let key = self.detect_primary_key(&def.name, &def.fields);
        if !key.found {
            return Ok(TypeBase::String);
        }
        let [key_field] = key.fields.as_slice() else {
            return Err(GqlSpansqlError::UnsupportedMultiColumnRelation {
                type_name: def.name.clone(),
            });
        };

        visiting.push(def.name.clone());
        let resolved = self
            .field_column_type(key_field, visiting)
            .map_err(|e| e.in_field(&def.name, &key_field.name));
        visiting.pop();

        Ok(resolved?.base)
    }
}
