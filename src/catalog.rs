//! Course catalog loaded once at startup.
//!
//! DESIGN
//! ======
//! The catalog file is the same `courses.json` the static site ships. It is
//! validated on load (array of objects, string `id` and `title`, unique ids)
//! and then served verbatim, so extra per-course fields reach the browser
//! untouched.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use avesafe_client::net::types::Course;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog must be a JSON array of courses")]
    NotArray,
    #[error("catalog entry {index} is missing string field `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("catalog contains duplicate course id {0:?}")]
    DuplicateId(String),
}

/// Validated catalog: the raw JSON for serving plus the typed courses.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    raw: Value,
    courses: Vec<Course>,
}

impl Catalog {
    /// Read and validate the catalog file at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io { path: path.to_owned(), source })?;
        Self::parse(&text)
    }

    /// Validate catalog JSON.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let raw: Value = serde_json::from_str(text)?;
        let entries = raw.as_array().ok_or(CatalogError::NotArray)?;

        let mut seen = HashSet::new();
        let mut courses = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let id = string_field(entry, index, "id")?;
            let title = string_field(entry, index, "title")?;
            if !seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateId(id));
            }
            courses.push(Course { id, title });
        }

        Ok(Self { raw, courses })
    }

    /// Catalog JSON exactly as loaded.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

fn string_field(entry: &Value, index: usize, field: &'static str) -> Result<String, CatalogError> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(CatalogError::MissingField { index, field })
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
