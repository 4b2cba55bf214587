//! SDL loading through `graphql-parser`.
//!
//! Converts a parsed schema document into the [`Schema`] model. No validation
//! happens here: unknown type references, duplicate names and bad interface
//! graphs pass through untouched.

use graphql_parser::schema::{self as ast, Definition, TypeDefinition};

use crate::{
    BUILTIN_SCALARS, EnumType, FieldDef, InputObjectType, InputValue, InterfaceType, NamedType,
    ObjectType, RootOperations, Schema, TypeBody, TypeRef, UnionType,
};

/// Error during schema loading.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("{0}")]
    Parse(#[from] ast::ParseError),
}

impl Schema {
    /// Parse a schema from GraphQL SDL text.
    pub fn parse(sdl: &str) -> Result<Self, SchemaError> {
        let document = ast::parse_schema::<String>(sdl)?;
        let mut schema = Schema::new();

        for definition in document.definitions {
            match definition {
                Definition::SchemaDefinition(def) => {
                    schema.set_roots(RootOperations {
                        query: def.query,
                        mutation: def.mutation,
                        subscription: def.subscription,
                    });
                }
                Definition::TypeDefinition(def) => {
                    schema.insert(convert_type(def));
                }
                Definition::TypeExtension(_) => {
                    tracing::debug!("skipping type extension");
                }
                Definition::DirectiveDefinition(def) => {
                    tracing::debug!(directive = %def.name, "skipping directive definition");
                }
            }
        }

        for scalar in BUILTIN_SCALARS {
            if schema.get(scalar).is_none() {
                schema.insert(NamedType::new(scalar, TypeBody::Scalar));
            }
        }

        Ok(schema)
    }
}

fn convert_type(def: TypeDefinition<'_, String>) -> NamedType {
    match def {
        TypeDefinition::Scalar(scalar) => NamedType::new(scalar.name, TypeBody::Scalar),
        TypeDefinition::Object(object) => NamedType::new(
            object.name,
            TypeBody::Object(ObjectType {
                fields: object.fields.into_iter().map(convert_field).collect(),
                interfaces: object.implements_interfaces,
            }),
        ),
        TypeDefinition::Interface(interface) => NamedType::new(
            interface.name,
            TypeBody::Interface(InterfaceType {
                fields: interface.fields.into_iter().map(convert_field).collect(),
                interfaces: interface.implements_interfaces,
            }),
        ),
        TypeDefinition::Union(union) => NamedType::new(
            union.name,
            TypeBody::Union(UnionType {
                members: union.types,
            }),
        ),
        TypeDefinition::Enum(enumeration) => NamedType::new(
            enumeration.name,
            TypeBody::Enum(EnumType {
                values: enumeration.values.into_iter().map(|v| v.name).collect(),
            }),
        ),
        TypeDefinition::InputObject(input) => NamedType::new(
            input.name,
            TypeBody::InputObject(InputObjectType {
                fields: input.fields.into_iter().map(convert_input_value).collect(),
            }),
        ),
    }
}

fn convert_field(field: ast::Field<'_, String>) -> FieldDef {
    FieldDef {
        name: field.name,
        ty: convert_type_ref(field.field_type),
        arguments: field
            .arguments
            .into_iter()
            .map(convert_input_value)
            .collect(),
    }
}

fn convert_input_value(value: ast::InputValue<'_, String>) -> InputValue {
    InputValue::new(value.name, convert_type_ref(value.value_type))
}

fn convert_type_ref(ty: ast::Type<'_, String>) -> TypeRef {
    match ty {
        ast::Type::NamedType(name) => TypeRef::Named(name),
        ast::Type::ListType(inner) => TypeRef::list(convert_type_ref(*inner)),
        ast::Type::NonNullType(inner) => TypeRef::non_null(convert_type_ref(*inner)),
    }
}
