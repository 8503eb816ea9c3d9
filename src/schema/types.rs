use indexmap::IndexMap;

/// Kind of a GraphQL named type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

/// Reference to a type from a field, with its list and non-null wrapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named { name: String, non_null: bool },
    List { elem: Box<TypeRef>, non_null: bool },
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            non_null: false,
        }
    }

    pub fn named_nn(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            non_null: true,
        }
    }

    pub fn list(elem: TypeRef) -> Self {
        TypeRef::List {
            elem: Box::new(elem),
            non_null: false,
        }
    }

    pub fn list_nn(elem: TypeRef) -> Self {
        TypeRef::List {
            elem: Box::new(elem),
            non_null: true,
        }
    }

    pub fn non_null(&self) -> bool {
        match self {
            TypeRef::Named { non_null, .. } | TypeRef::List { non_null, .. } => *non_null,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeRef::List { .. })
    }

    /// Innermost named type, looking through any list wrapping
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named { name, .. } => name,
            TypeRef::List { elem, .. } => elem.named_type(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: TypeRef,
    pub description: Option<String>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub name: String,
    pub kind: TypeKind,
    pub description: Option<String>,
    /// Declared fields, in declaration order (objects and interfaces only)
    pub fields: Vec<FieldDefinition>,
    pub built_in: bool,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            fields: Vec::new(),
            built_in: false,
        }
    }

    pub fn object(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            fields,
            ..Self::new(name, TypeKind::Object)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// GraphQL scalars every schema knows about without declaring them
pub const BUILT_IN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// A loaded GraphQL schema: every named type, keyed by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub types: IndexMap<String, TypeDefinition>,
}

impl Schema {
    /// An empty schema holding only the built-in scalars
    pub fn new() -> Self {
        let mut types = IndexMap::new();
        for name in BUILT_IN_SCALARS {
            let mut def = TypeDefinition::new(name, TypeKind::Scalar);
            def.built_in = true;
            types.insert(name.to_string(), def);
        }
        Self { types }
    }

    /// Insert or replace a type definition
    pub fn insert(&mut self, def: TypeDefinition) {
        self.types.insert(def.name.clone(), def);
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}
