//! Single pass over the named-type table.
//!
//! Every type is visited once in table order and its declaration appended to
//! the group for its kind. Groups are concatenated as inputs, interfaces,
//! enums, unions, objects; order inside a group is table order.

use balgen_core::{Schema, TypeBody, is_introspection_name};

use super::Config;
use super::classify::{Representation, TypeClassifier, UnionMembership};
use super::decl::Declaration;
use super::emit::DeclarationEmitter;

#[derive(Debug, Default)]
struct Groups {
    inputs: Vec<Declaration>,
    interfaces: Vec<Declaration>,
    enums: Vec<Declaration>,
    unions: Vec<Declaration>,
    objects: Vec<Declaration>,
}

impl Groups {
    fn concat(self) -> Vec<Declaration> {
        let mut out = self.inputs;
        out.extend(self.interfaces);
        out.extend(self.enums);
        out.extend(self.unions);
        out.extend(self.objects);
        out
    }
}

pub struct SchemaWalker<'a> {
    schema: &'a Schema,
    classifier: TypeClassifier<'a>,
    emitter: DeclarationEmitter<'a>,
}

impl<'a> SchemaWalker<'a> {
    pub fn new(schema: &'a Schema, config: &Config) -> Self {
        Self {
            schema,
            classifier: TypeClassifier::new(schema, config),
            emitter: DeclarationEmitter::new(schema),
        }
    }

    /// Declarations for every non-root, non-introspection, non-scalar type.
    pub fn walk(&self) -> Vec<Declaration> {
        let membership = UnionMembership::collect(self.schema);
        let classification = self.classifier.classify(&membership);
        let mut groups = Groups::default();

        for ty in self.schema.types() {
            let name = ty.name.as_str();
            if is_introspection_name(name) || self.schema.is_root_operation(name) {
                tracing::trace!(name, "skipped");
                continue;
            }

            if let TypeBody::Scalar = ty.body {
                tracing::trace!(name, "skipped scalar");
                continue;
            }

            tracing::debug!(name, kind = ?ty.kind(), "routing type");
            match &ty.body {
                TypeBody::Scalar => {}
                TypeBody::InputObject(input) => groups
                    .inputs
                    .push(Declaration::Record(self.emitter.input_record(name, input))),
                TypeBody::Interface(interface) => groups.interfaces.push(Declaration::Interface(
                    self.emitter.interface_contract(name, interface),
                )),
                TypeBody::Enum(enumeration) => groups
                    .enums
                    .push(Declaration::Enum(self.emitter.enumeration(name, enumeration))),
                TypeBody::Union(union) => match self.emitter.union_alias(name, union) {
                    Some(decl) => groups.unions.push(Declaration::Union(decl)),
                    None => tracing::warn!(name, "union has no members, skipped"),
                },
                TypeBody::Object(object) => {
                    let decl = match classification.get(name) {
                        Some(Representation::Record) => {
                            Declaration::Record(self.emitter.object_record(name, object))
                        }
                        Some(Representation::Behavior) | None => {
                            Declaration::Behavior(self.emitter.behavior_type(name, object))
                        }
                    };
                    groups.objects.push(decl);
                }
            }
        }

        let declarations = groups.concat();
        tracing::debug!(count = declarations.len(), "walked schema");
        declarations
    }
}
