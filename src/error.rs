use thiserror::Error;

#[derive(Error, Debug)]
pub enum GqlSpansqlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema parse error: {0}")]
    SchemaParse(String),

    #[error("scalar type {type_name} is not found")]
    UnknownScalar { type_name: String },

    #[error("{field}: spanner does not allow null elements in ARRAY")]
    NullableArrayElementNotAllowed { field: String },

    #[error("{field}: lists of lists are not supported")]
    UnsupportedNestedList { field: String },

    #[error("relation to a multi-column primary key is not supported: {type_name}")]
    UnsupportedMultiColumnRelation { type_name: String },

    #[error("cyclic primary key reference: {path}")]
    CyclicKeyReference { path: String },

    #[error("{type_name}.{field}: {source}")]
    Field {
        type_name: String,
        field: String,
        #[source]
        source: Box<GqlSpansqlError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GqlSpansqlError {
    /// Attach the field being converted, unless this error already names it.
    pub fn in_field(self, type_name: &str, field: &str) -> Self {
        let named = matches!(
            &self,
            GqlSpansqlError::Field { type_name: t, field: f, .. } if t == type_name && f == field
        );
        if named {
            return self;
        }
        GqlSpansqlError::Field {
            type_name: type_name.to_string(),
            field: field.to_string(),
            source: Box::new(self),
        }
    }

    /// Strip `Field` context layers down to the failure that caused them.
    pub fn root_cause(&self) -> &GqlSpansqlError {
        match self {
            GqlSpansqlError::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<toml::de::Error> for GqlSpansqlError {
    fn from(err: toml::de::Error) -> Self {
        GqlSpansqlError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for GqlSpansqlError {
    fn from(err: toml::ser::Error) -> Self {
        GqlSpansqlError::Serialization(format!("TOML serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, GqlSpansqlError>;
