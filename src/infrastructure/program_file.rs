//! Loading affiliate programs from a JSON file.
//!
//! Two shapes are accepted:
//!
//! ```json
//! [ { "id": "amz", "merchant": "amazon", "affiliate_id": "mytag-21" } ]
//! ```
//!
//! ```json
//! { "programs": [ { "id": "amz", "merchant": "amazon", "affiliate_id": "mytag-21" } ] }
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::AffiliateProgram;
use crate::utils::code_generator::validate_program_id;

/// Errors raised while reading a programs file.
#[derive(Debug, thiserror::Error)]
pub enum ProgramFileError {
    #[error("Failed to read programs file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse programs file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid program id '{0}'")]
    InvalidId(String),

    #[error("Duplicate program id '{0}'")]
    DuplicateId(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProgramFile {
    List(Vec<AffiliateProgram>),
    Wrapped { programs: Vec<AffiliateProgram> },
}

/// Reads and validates programs from `path`.
///
/// # Errors
///
/// Returns [`ProgramFileError`] if the file cannot be read or parsed, or if
/// ids are invalid or repeated.
pub fn load_programs(path: impl AsRef<Path>) -> Result<Vec<AffiliateProgram>, ProgramFileError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|source| ProgramFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_programs(&raw).map_err(|err| match err {
        ParseFailure::Json(source) => ProgramFileError::Parse {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Invalid(err) => err,
    })
}

enum ParseFailure {
    Json(serde_json::Error),
    Invalid(ProgramFileError),
}

fn parse_programs(raw: &str) -> Result<Vec<AffiliateProgram>, ParseFailure> {
    let programs = match serde_json::from_str::<ProgramFile>(raw).map_err(ParseFailure::Json)? {
        ProgramFile::List(programs) => programs,
        ProgramFile::Wrapped { programs } => programs,
    };

    let mut seen = HashSet::new();
    for program in &programs {
        if validate_program_id(&program.id).is_err() {
            return Err(ParseFailure::Invalid(ProgramFileError::InvalidId(
                program.id.clone(),
            )));
        }
        if !seen.insert(program.id.as_str()) {
            return Err(ParseFailure::Invalid(ProgramFileError::DuplicateId(
                program.id.clone(),
            )));
        }
    }

    Ok(programs)
}
