//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, OutputFormat};
use crate::commands::classify::ClassifyArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub schema_path: PathBuf,
    pub name: Option<String>,
    pub records_forced: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            name: m.get_one::<String>("name").cloned(),
            records_forced: m.get_flag("records_forced"),
            format: parse_format(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        // Files never get escape codes.
        let color = p.output.is_none() && p.color.should_colorize();
        Self {
            schema_path: p.schema_path,
            name: p.name,
            records_forced: p.records_forced,
            format: p.format,
            output: p.output,
            color,
        }
    }
}

pub struct ClassifyParams {
    pub schema_path: PathBuf,
    pub records_forced: bool,
}

impl ClassifyParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            records_forced: m.get_flag("records_forced"),
        }
    }
}

impl From<ClassifyParams> for ClassifyArgs {
    fn from(p: ClassifyParams) -> Self {
        Self {
            schema_path: p.schema_path,
            records_forced: p.records_forced,
        }
    }
}

fn schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Ballerina,
    }
}
