//! The root service contract.
//!
//! Query fields become read-style resource accessors, mutation fields become
//! remote functions and subscription fields become stream-style resources.

use balgen_core::{ObjectType, Schema};

use super::decl::{Method, MethodKind, RootDecl};
use super::emit::DeclarationEmitter;

/// Base service type every root contract includes.
pub const SERVICE_BASE: &str = "graphql:Service";

#[derive(Clone, Copy, Debug)]
pub struct RootContractBuilder<'a> {
    schema: &'a Schema,
    emitter: DeclarationEmitter<'a>,
}

impl<'a> RootContractBuilder<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            emitter: DeclarationEmitter::new(schema),
        }
    }

    /// Build the contract named `name`.
    ///
    /// Missing or empty operation types contribute nothing; a schema with none
    /// yields a contract holding only the base include.
    pub fn build(&self, name: &str) -> RootDecl {
        let mut methods = Vec::new();
        if let Some(query) = self.schema.query_type() {
            methods.extend(self.members(query, MethodKind::Get));
        }
        if let Some(mutation) = self.schema.mutation_type() {
            methods.extend(self.members(mutation, MethodKind::Remote));
        }
        if let Some(subscription) = self.schema.subscription_type() {
            methods.extend(self.members(subscription, MethodKind::Subscribe));
        }

        tracing::debug!(name, methods = methods.len(), "built root contract");
        RootDecl {
            name: name.to_string(),
            base: SERVICE_BASE.to_string(),
            methods,
        }
    }

    fn members(&self, operation: &'a ObjectType, kind: MethodKind) -> impl Iterator<Item = Method> {
        let emitter = self.emitter;
        operation.fields.iter().map(move |field| {
            let mut method = emitter.method(kind, field);
            if kind == MethodKind::Subscribe {
                method.returns = method.returns.stream();
            }
            method
        })
    }
}
