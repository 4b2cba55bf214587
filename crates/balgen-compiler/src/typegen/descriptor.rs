//! Schema type reference → target type descriptor.
//!
//! Nullability is decided per nesting level: a descriptor is optional unless
//! the wrapper directly around it (at the same level) is `NonNull`. This keeps
//! `[T]`, `[T]!`, `[T!]` and `[T!]!` apart.

use balgen_core::{Schema, TypeKind, TypeRef};
use serde::Serialize;

/// Target primitive types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    String,
    Int,
    Float,
    Boolean,
}

impl Primitive {
    /// Map a scalar name to a primitive.
    ///
    /// `ID` shares the string representation. Unrecognized (custom) scalars
    /// fall back to string as well; this is a permissive default, not a
    /// validated mapping.
    pub fn from_scalar(name: &str) -> Self {
        match name {
            "Int" => Self::Int,
            "Float" => Self::Float,
            "Boolean" => Self::Boolean,
            "String" | "ID" => Self::String,
            _ => Self::String,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Boolean => "boolean",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor {
    Primitive(Primitive),
    /// Reference to another declaration by name.
    Named(String),
    Array(Box<TypeDescriptor>),
    Optional(Box<TypeDescriptor>),
    /// Only produced for subscription return types.
    Stream(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    pub fn array(self) -> Self {
        Self::Array(Box::new(self))
    }

    pub fn stream(self) -> Self {
        Self::Stream(Box::new(self))
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

/// Builds [`TypeDescriptor`]s against one schema.
///
/// The schema is only consulted to learn the kind of a base type name.
#[derive(Clone, Copy, Debug)]
pub struct DescriptorBuilder<'a> {
    schema: &'a Schema,
}

impl<'a> DescriptorBuilder<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Descriptor for a reference at a top-level (field, argument) position.
    pub fn describe(&self, ty: &TypeRef) -> TypeDescriptor {
        self.build(ty, false)
    }

    /// Build the descriptor for `ty`.
    ///
    /// `enclosing_non_null` tells whether the wrapper immediately around `ty`
    /// was `NonNull`; it suppresses the optional marker at this level only.
    pub fn build(&self, ty: &TypeRef, enclosing_non_null: bool) -> TypeDescriptor {
        match ty {
            TypeRef::NonNull(inner) => self.build(inner, true),
            TypeRef::List(inner) => {
                let array = self.build(inner, false).array();
                nullable(array, enclosing_non_null)
            }
            TypeRef::Named(name) => nullable(self.base(name), enclosing_non_null),
        }
    }

    fn base(&self, name: &str) -> TypeDescriptor {
        match self.schema.kind_of(name) {
            // Built-in scalars may be missing from hand-built tables.
            Some(TypeKind::Scalar) | None => {
                TypeDescriptor::Primitive(Primitive::from_scalar(name))
            }
            Some(
                TypeKind::Object
                | TypeKind::InputObject
                | TypeKind::Interface
                | TypeKind::Union
                | TypeKind::Enum,
            ) => TypeDescriptor::Named(name.to_string()),
        }
    }
}

fn nullable(descriptor: TypeDescriptor, non_null: bool) -> TypeDescriptor {
    if non_null {
        descriptor
    } else {
        descriptor.optional()
    }
}
