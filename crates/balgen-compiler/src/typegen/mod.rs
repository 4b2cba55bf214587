//! Service type generation from a GraphQL schema.
//!
//! [`compile`] builds the declaration tree: the root contract first, then
//! the walker's groups. [`generate`] also renders it as Ballerina source.

mod classify;
mod config;
mod decl;
mod descriptor;
mod emit;
mod interfaces;
mod render;
mod root;
mod walk;

#[cfg(test)]
mod classify_tests;
#[cfg(test)]
mod render_tests;

use balgen_core::Schema;

pub use classify::{
    Classification, Representation, TypeClassifier, UnionMembership, is_record_eligible,
};
pub use config::Config;
pub use decl::{
    BehaviorDecl, Declaration, EnumDecl, Import, InterfaceDecl, Method, MethodKind, Module, Param,
    RecordDecl, RecordField, RootDecl, UnionAlternatives, UnionDecl,
};
pub use descriptor::{DescriptorBuilder, Primitive, TypeDescriptor};
pub use emit::DeclarationEmitter;
pub use interfaces::InterfaceResolver;
pub use render::{BallerinaFormatter, FormatError, Formatter};
pub use root::{RootContractBuilder, SERVICE_BASE};
pub use walk::SchemaWalker;

/// Build the declaration tree for `schema` with a root contract named `name`.
pub fn compile(schema: &Schema, name: &str, config: &Config) -> Module {
    let root = RootContractBuilder::new(schema).build(name);
    let mut declarations = vec![Declaration::Root(root)];
    declarations.extend(SchemaWalker::new(schema, config).walk());
    Module {
        import: Import::graphql(),
        declarations,
    }
}

/// Compile and render as Ballerina source.
pub fn generate(schema: &Schema, name: &str, config: &Config) -> crate::Result<String> {
    generate_with(
        schema,
        name,
        config,
        &BallerinaFormatter::new(config.colors()),
    )
}

pub fn generate_with(
    schema: &Schema,
    name: &str,
    config: &Config,
    formatter: &dyn Formatter,
) -> crate::Result<String> {
    let module = compile(schema, name, config);
    Ok(formatter.format(&module)?)
}
