/// GraphQL schema model and loading
///
/// This module holds the typed view of a GraphQL schema that table generation
/// works from, plus the SDL parser and file/stdin loading around it.

mod loader;
mod parser;
mod types;

pub use loader::{load_sources, read_stdin};
pub use parser::Source;
pub use types::{FieldDefinition, Schema, TypeDefinition, TypeKind, TypeRef, BUILT_IN_SCALARS};
