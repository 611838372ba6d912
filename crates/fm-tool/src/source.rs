use std::fs;
use std::path::{Path, PathBuf};

use fm_core::ScriptDocument;
use walkdir::WalkDir;

use crate::{FmToolError, TestCase, TESTCASE_SCHEMA_V1};

pub(crate) const SCRIPT_EXTENSION: &str = ".frame";
pub(crate) const DOCUMENT_EXTENSION: &str = ".frame.json";

pub fn collect_script_paths(root: &Path) -> Result<Vec<PathBuf>, FmToolError> {
    let mut paths = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_script_path(path))
        .collect::<Vec<_>>();

    if paths.is_empty() {
        return Err(FmToolError::SourceEmpty {
            path: root.to_path_buf(),
        });
    }

    paths.sort();
    Ok(paths)
}

/// Loads a script as a document; plain `.frame` files carry no tests.
pub fn read_document(path: &Path) -> Result<ScriptDocument, FmToolError> {
    let raw = read_file(path)?;
    if !is_document_path(path) {
        return Ok(ScriptDocument::new(raw));
    }
    ScriptDocument::from_json_str(&raw).map_err(|source| FmToolError::ParseDocument {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_script(path: &Path) -> Result<String, FmToolError> {
    read_document(path).map(|document| document.script)
}

pub fn read_test_case(case_path: &Path) -> Result<TestCase, FmToolError> {
    let raw = read_file(case_path)?;
    let parsed: TestCase = serde_json::from_str(&raw).map_err(|source| FmToolError::ParseCase {
        path: case_path.to_path_buf(),
        source,
    })?;

    if parsed.schema_version != TESTCASE_SCHEMA_V1 {
        return Err(FmToolError::InvalidSchemaVersion {
            expected: TESTCASE_SCHEMA_V1.to_string(),
            found: parsed.schema_version,
        });
    }

    Ok(parsed)
}

fn read_file(path: &Path) -> Result<String, FmToolError> {
    fs::read_to_string(path).map_err(|source| FmToolError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn is_document_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(DOCUMENT_EXTENSION)
}

fn is_script_path(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path_str.ends_with(SCRIPT_EXTENSION) || path_str.ends_with(DOCUMENT_EXTENSION)
}
