//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("balgen")
        .about("Generate Ballerina service types from GraphQL schemas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(classify_command())
}

/// Generate service type declarations.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate Ballerina service types from a GraphQL schema")
        .override_usage(
            "\
  balgen generate <SCHEMA>
  balgen generate <SCHEMA> -o <FILE>
  balgen generate - -n <NAME>",
        )
        .after_help(
            r#"EXAMPLES:
  balgen generate schema.graphql                  # print Ballerina source
  balgen generate schema.graphql -o types.bal     # write to file
  balgen generate schema.graphql -r               # eligible objects as records
  balgen generate schema.graphql --format json    # declaration tree as JSON
  cat schema.graphql | balgen generate - -n Api   # stdin needs a name"#,
        )
        .arg(schema_path_arg())
        .arg(name_arg())
        .arg(records_forced_arg())
        .arg(format_arg())
        .arg(output_arg())
        .arg(color_arg())
}

/// Show the record/service decision per object type.
pub fn classify_command() -> Command {
    Command::new("classify")
        .about("Show how each object type will be represented")
        .after_help(
            r#"EXAMPLES:
  balgen classify schema.graphql      # service classes only
  balgen classify schema.graphql -r   # records where eligible"#,
        )
        .arg(schema_path_arg())
        .arg(records_forced_arg())
}
