use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use balgen_compiler::typegen::{self, Config};
use balgen_core::Schema;

use super::schema_loader::{default_service_name, load_schema};
use super::{CommandError, fail};
use crate::cli::OutputFormat;

pub struct GenerateArgs {
    pub schema_path: PathBuf,
    pub name: Option<String>,
    pub records_forced: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let output = execute(&args).unwrap_or_else(|e| fail(e));

    if let Some(ref path) = args.output {
        fs::write(path, &output).unwrap_or_else(|e| {
            fail(format_args!("failed to write {}: {}", path.display(), e))
        });
        tracing::info!(path = %path.display(), "wrote declarations");
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        fail(format_args!("failed to write to stdout: {}", e));
    }
}

fn execute(args: &GenerateArgs) -> Result<String, CommandError> {
    let schema = load_schema(&args.schema_path)?;
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| default_service_name(&args.schema_path));
    let config = Config::new()
        .records_forced(args.records_forced)
        .colored(args.color);
    render(&schema, &name, &config, args.format)
}

/// Output text for `schema` in the requested format.
pub fn render(
    schema: &Schema,
    name: &str,
    config: &Config,
    format: OutputFormat,
) -> Result<String, CommandError> {
    match format {
        OutputFormat::Ballerina => Ok(typegen::generate(schema, name, config)?),
        OutputFormat::Json => {
            let module = typegen::compile(schema, name, config);
            let mut json = serde_json::to_string_pretty(&module)?;
            json.push('\n');
            Ok(json)
        }
    }
}
