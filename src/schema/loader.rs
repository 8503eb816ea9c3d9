use crate::error::{GqlSpansqlError, Result};
use crate::schema::parser::Source;

use std::fs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

/// Read every file matched by the given glob patterns
///
/// Each entry may itself hold several comma-separated patterns. Paths matched
/// by more than one pattern are read once, in first-seen order.
pub fn load_sources<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Source>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns
        .iter()
        .flat_map(|p| p.as_ref().split(','))
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        let paths = glob::glob(pattern).map_err(|e| {
            GqlSpansqlError::Config(format!("Invalid schema pattern '{}': {}", pattern, e))
        })?;

        let before = files.len();
        for path in paths {
            let path = path.map_err(|e| GqlSpansqlError::Io(e.into()))?;
            if !files.contains(&path) {
                files.push(path);
            }
        }
        if files.len() == before {
            tracing::warn!("Schema pattern '{}' matched no new files", pattern);
        }
    }

    files
        .into_iter()
        .map(|path| {
            let input = fs::read_to_string(&path).map_err(|e| {
                GqlSpansqlError::Config(format!(
                    "Failed to read schema file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            tracing::debug!("Loaded schema file {}", path.display());
            Ok(Source::named(path.display().to_string(), input))
        })
        .collect()
}

/// Read a schema document from standard input
///
/// An interactive terminal yields an empty document instead of blocking.
pub fn read_stdin() -> Result<Source> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        tracing::warn!("No schema files given and stdin is a terminal; reading nothing");
        return Ok(Source::new(String::new()));
    }

    let mut input = String::new();
    stdin.read_to_string(&mut input)?;
    Ok(Source::new(input))
}
