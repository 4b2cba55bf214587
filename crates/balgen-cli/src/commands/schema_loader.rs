use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use balgen_core::utils::to_pascal_case;
use balgen_core::{Schema, SchemaError};

/// Root contract name used when nothing better is known.
pub const DEFAULT_SERVICE_NAME: &str = "Service";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),
}

/// Read and parse SDL from `path`, or stdin when `path` is `-`.
pub fn load_schema(path: &Path) -> Result<Schema, LoadError> {
    let sdl = read_source(path)?;
    tracing::info!(source = %path.display(), bytes = sdl.len(), "loaded schema");
    Ok(Schema::parse(&sdl)?)
}

pub fn read_source(path: &Path) -> Result<String, LoadError> {
    if is_stdin(path) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// PascalCase file stem, or [`DEFAULT_SERVICE_NAME`] for stdin.
pub fn default_service_name(path: &Path) -> String {
    if is_stdin(path) {
        return DEFAULT_SERVICE_NAME.to_string();
    }
    let stem = path
        .file_stem()
        .map(|s| to_pascal_case(&s.to_string_lossy()))
        .unwrap_or_default();
    if stem.is_empty() {
        DEFAULT_SERVICE_NAME.to_string()
    } else {
        stem
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
