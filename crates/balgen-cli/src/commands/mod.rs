pub mod classify;
pub mod generate;
pub mod schema_loader;


use schema_loader::LoadError;

/// Failure of a CLI command, reported as `error: <message>`.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Generation(#[from] balgen_compiler::Error),

    #[error("failed to serialize declarations: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print `error: <message>` and exit with status 1.
pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
