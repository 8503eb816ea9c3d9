pub mod config;
pub mod converter;
pub mod ddl;
pub mod error;
pub mod schema;

// Re-export commonly used types
pub use config::{ConfigOverrides, ConverterConfig};
pub use converter::{Case, Converter};
pub use ddl::{ColumnDef, ColumnType, CreateTable, KeyPart, TypeBase};
pub use error::{GqlSpansqlError, Result};
pub use schema::{Schema, Source};
