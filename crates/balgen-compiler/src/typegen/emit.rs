//! Declaration builders for classified named types.

use balgen_core::{
    EnumType, FieldDef, InputObjectType, InputValue, InterfaceType, ObjectType, Schema, UnionType,
};

use super::decl::{
    BehaviorDecl, EnumDecl, InterfaceDecl, Method, MethodKind, Param, RecordDecl, RecordField,
    UnionAlternatives, UnionDecl,
};
use super::descriptor::DescriptorBuilder;
use super::interfaces::InterfaceResolver;

/// Builds one declaration per named type.
#[derive(Clone, Copy, Debug)]
pub struct DeclarationEmitter<'a> {
    descriptors: DescriptorBuilder<'a>,
    interfaces: InterfaceResolver<'a>,
}

impl<'a> DeclarationEmitter<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            descriptors: DescriptorBuilder::new(schema),
            interfaces: InterfaceResolver::new(schema),
        }
    }

    /// Closed record for an input object.
    pub fn input_record(&self, name: &str, input: &InputObjectType) -> RecordDecl {
        RecordDecl {
            name: name.to_string(),
            closed: true,
            fields: input
                .fields
                .iter()
                .map(|field| self.record_field(&field.name, field))
                .collect(),
        }
    }

    /// Open record for a record-eligible object type.
    pub fn object_record(&self, name: &str, object: &ObjectType) -> RecordDecl {
        RecordDecl {
            name: name.to_string(),
            closed: false,
            fields: object
                .fields
                .iter()
                .map(|field| RecordField {
                    name: field.name.clone(),
                    ty: self.descriptors.describe(&field.ty),
                })
                .collect(),
        }
    }

    pub fn interface_contract(&self, name: &str, interface: &InterfaceType) -> InterfaceDecl {
        let (includes, methods) = self.flattened_members(&interface.interfaces, &interface.fields);
        InterfaceDecl {
            name: name.to_string(),
            includes,
            methods,
        }
    }

    pub fn behavior_type(&self, name: &str, object: &ObjectType) -> BehaviorDecl {
        let (includes, methods) = self.flattened_members(&object.interfaces, &object.fields);
        BehaviorDecl {
            name: name.to_string(),
            distinct: !object.interfaces.is_empty(),
            includes,
            methods,
        }
    }

    pub fn enumeration(&self, name: &str, enumeration: &EnumType) -> EnumDecl {
        EnumDecl {
            name: name.to_string(),
            members: enumeration.values.clone(),
        }
    }

    /// `None` when the union lists no members.
    pub fn union_alias(&self, name: &str, union: &UnionType) -> Option<UnionDecl> {
        Some(UnionDecl {
            name: name.to_string(),
            alternatives: UnionAlternatives::from_members(&union.members)?,
        })
    }

    /// Read-style accessor for `field`.
    pub fn accessor(&self, field: &FieldDef) -> Method {
        self.method(MethodKind::Get, field)
    }

    pub(super) fn method(&self, kind: MethodKind, field: &FieldDef) -> Method {
        Method {
            kind,
            name: field.name.clone(),
            params: self.params(&field.arguments),
            returns: self.descriptors.describe(&field.ty),
        }
    }

    fn params(&self, arguments: &[InputValue]) -> Vec<Param> {
        arguments
            .iter()
            .map(|arg| Param {
                name: arg.name.clone(),
                ty: self.descriptors.describe(&arg.ty),
            })
            .collect()
    }

    fn record_field(&self, name: &str, value: &InputValue) -> RecordField {
        RecordField {
            name: name.to_string(),
            ty: self.descriptors.describe(&value.ty),
        }
    }

    /// Minimal includes plus accessors for the fields they do not cover.
    fn flattened_members(
        &self,
        interfaces: &[String],
        fields: &[FieldDef],
    ) -> (Vec<String>, Vec<Method>) {
        let minimal = self.interfaces.minimal_interfaces(interfaces);
        let methods = self
            .interfaces
            .minimal_fields(fields, &minimal)
            .into_iter()
            .map(|field| self.accessor(field))
            .collect();
        let includes = minimal.into_iter().map(str::to_string).collect();
        (includes, methods)
    }
}
