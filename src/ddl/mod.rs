/// Cloud Spanner DDL model
///
/// Typed `CREATE TABLE` definitions produced by the converter, and their
/// canonical text form. Rendering follows the Spanner pretty-printer layout:
/// one column per line, each followed by a comma.

use std::fmt;

/// Column base type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeBase {
    Int64,
    String,
    Float64,
    Bool,
    Timestamp,
    Date,
}

impl fmt::Display for TypeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeBase::Int64 => "INT64",
            TypeBase::String => "STRING",
            TypeBase::Float64 => "FLOAT64",
            TypeBase::Bool => "BOOL",
            TypeBase::Timestamp => "TIMESTAMP",
            TypeBase::Date => "DATE",
        };
        f.write_str(name)
    }
}

/// Length of a STRING column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Max,
    Fixed(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnType {
    pub array: bool,
    pub base: TypeBase,
    pub len: Option<Length>,
}

impl ColumnType {
    /// Scalar column type; STRING gets an unbounded length
    pub fn scalar(base: TypeBase) -> Self {
        Self {
            array: false,
            base,
            len: (base == TypeBase::String).then_some(Length::Max),
        }
    }

    pub fn array_of(base: TypeBase) -> Self {
        Self {
            array: true,
            ..Self::scalar(base)
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.array {
            f.write_str("ARRAY<")?;
        }
        write!(f, "{}", self.base)?;
        match self.len {
            Some(Length::Max) => f.write_str("(MAX)")?,
            Some(Length::Fixed(n)) => write!(f, "({})", n)?,
            None => {}
        }
        if self.array {
            f.write_str(">")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: ColumnType,
    pub not_null: bool,
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Ident(&self.name), self.ty)?;
        if self.not_null {
            f.write_str(" NOT NULL")?;
        }
        Ok(())
    }
}

/// One column of a primary key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPart {
    pub column: String,
}

impl KeyPart {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Ident(&self.column))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub primary_key: Vec<KeyPart>,
}

impl CreateTable {
    pub fn sql(&self) -> String {
        self.to_string()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for CreateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CREATE TABLE {} (", Ident(&self.name))?;
        for column in &self.columns {
            writeln!(f, "  {},", column)?;
        }
        f.write_str(") PRIMARY KEY(")?;
        for (i, key) in self.primary_key.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", key)?;
        }
        f.write_str(")")
    }
}

/// Render statements as a script, each terminated by `;\n`
pub fn render_statements(tables: &[CreateTable]) -> String {
    tables.iter().map(|t| format!("{};\n", t)).collect()
}

// GoogleSQL reserved keywords; identifiers matching one must be quoted.
const RESERVED_KEYWORDS: &[&str] = &[
    "ALL", "AND", "ANY", "ARRAY", "AS", "ASC", "ASSERT_ROWS_MODIFIED", "AT", "BETWEEN", "BY",
    "CASE", "CAST", "COLLATE", "CONTAINS", "CREATE", "CROSS", "CUBE", "CURRENT", "DEFAULT",
    "DEFINE", "DESC", "DISTINCT", "ELSE", "END", "ENUM", "ESCAPE", "EXCEPT", "EXCLUDE", "EXISTS",
    "EXTRACT", "FALSE", "FETCH", "FOLLOWING", "FOR", "FROM", "FULL", "GROUP", "GROUPING",
    "GROUPS", "HASH", "HAVING", "IF", "IGNORE", "IN", "INNER", "INTERSECT", "INTERVAL", "INTO",
    "IS", "JOIN", "LATERAL", "LEFT", "LIKE", "LIMIT", "LOOKUP", "MERGE", "NATURAL", "NEW", "NO",
    "NOT", "NULL", "NULLS", "OF", "ON", "OR", "ORDER", "OUTER", "OVER", "PARTITION", "PRECEDING",
    "PROTO", "RANGE", "RECURSIVE", "RESPECT", "RIGHT", "ROLLUP", "ROWS", "SELECT", "SET", "SOME",
    "STRUCT", "TABLESAMPLE", "THEN", "TO", "TREAT", "TRUE", "UNBOUNDED", "UNION", "UNNEST",
    "USING", "WHEN", "WHERE", "WINDOW", "WITH", "WITHIN",
];

/// Identifier that quotes itself when rendered, if it has to
struct Ident<'a>(&'a str);

impl Ident<'_> {
    fn needs_quoting(&self) -> bool {
        let mut chars = self.0.chars();
        let plain = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };
        !plain
            || RESERVED_KEYWORDS
                .iter()
                .any(|kw| kw.eq_ignore_ascii_case(self.0))
    }
}

impl fmt::Display for Ident<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_quoting() {
            write!(f, "`{}`", self.0)
        } else {
            f.write_str(self.0)
        }
    }
}
