//! Schema file discovery
//!
//! A schema path may name a single file, a directory, or a glob pattern.
//! Directories and globs are walked gitignore-aware using the ignore crate;
//! the matched paths are returned sorted so that type declaration order is
//! stable across runs.

use crate::error::SchemaError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// File extensions picked up when a directory is given
pub const SCHEMA_EXTENSIONS: &[&str] = &["graphql", "graphqls", "gql"];

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Resolves a schema path argument to the list of files to load
///
/// # Errors
///
/// Returns `SchemaError::Io` if a literal path does not exist,
/// `SchemaError::InvalidGlob` for malformed patterns and
/// `SchemaError::NoSchemaFiles` if a directory or glob matches nothing.
pub fn discover_schema_files(location: &str) -> Result<Vec<PathBuf>, SchemaError> {
    let path = Path::new(location);

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let files = if path.is_dir() {
        walk_matching(path, None)?
    } else if location.contains(GLOB_META) {
        let matcher = build_globset(location)?;
        walk_matching(&literal_prefix(location), Some(&matcher))?
    } else {
        return Err(SchemaError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        });
    };

    if files.is_empty() {
        return Err(SchemaError::NoSchemaFiles(location.to_string()));
    }

    Ok(files)
}

fn build_globset(pattern: &str) -> Result<GlobSet, SchemaError> {
    let glob = Glob::new(pattern).map_err(|e| SchemaError::InvalidGlob {
        pattern: pattern.to_string(),
        source: e,
    })?;
    let mut builder = GlobSetBuilder::new();
    builder.add(glob);
    builder.build().map_err(|e| SchemaError::InvalidGlob {
        pattern: pattern.to_string(),
        source: e,
    })
}

/// Returns the leading directory components of a pattern that contain no glob syntax
fn literal_prefix(pattern: &str) -> PathBuf {
    let components: Vec<&str> = pattern
        .split('/')
        .take_while(|c| !c.contains(GLOB_META))
        .collect();

    let prefix = components.join("/");
    if prefix.is_empty() {
        if pattern.starts_with('/') {
            PathBuf::from("/")
        } else {
            PathBuf::from(".")
        }
    } else {
        PathBuf::from(prefix)
    }
}

fn has_schema_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCHEMA_EXTENSIONS.contains(&ext))
}

/// Walks `root`, keeping files accepted by `matcher`, or schema-extension files when
/// there is no matcher
fn walk_matching(root: &Path, matcher: Option<&GlobSet>) -> Result<Vec<PathBuf>, SchemaError> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    let mut files = Vec::new();
    for result in walker {
        let entry = result?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let accepted = match matcher {
            Some(set) => set.is_match(path) || set.is_match(path.strip_prefix(".").unwrap_or(path)),
            None => has_schema_extension(path),
        };

        if accepted {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
