use std::path::PathBuf;

use balgen_compiler::typegen::{Config, Representation, TypeClassifier, UnionMembership};
use balgen_core::Schema;

use super::fail;
use super::schema_loader::load_schema;

pub struct ClassifyArgs {
    pub schema_path: PathBuf,
    pub records_forced: bool,
}

pub fn run(args: ClassifyArgs) {
    let schema = load_schema(&args.schema_path).unwrap_or_else(|e| fail(e));
    let config = Config::new().records_forced(args.records_forced);
    print!("{}", report(&schema, &config));
}

/// One `<Name>  record|service` line per classified object type.
pub fn report(schema: &Schema, config: &Config) -> String {
    let membership = UnionMembership::collect(schema);
    let classification = TypeClassifier::new(schema, config).classify(&membership);
    let width = classification
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (name, representation) in classification.iter() {
        let label = match representation {
            Representation::Record => "record",
            Representation::Behavior => "service",
        };
        out.push_str(&format!("{name:<width$}  {label}\n"));
    }
    out
}
