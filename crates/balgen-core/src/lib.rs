#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for balgen: an in-memory GraphQL schema.
//!
//! Two layers:
//! - **Loading layer** (`sdl`): SDL text → [`Schema`] through `graphql-parser`
//! - **Model layer**: the read-only schema consumed by the compiler
//!
//! The model is never mutated by the compiler. Names are assumed unique and
//! are not re-checked here.

use indexmap::IndexMap;

pub mod colors;
mod sdl;
pub mod utils;

#[cfg(test)]
mod sdl_tests;

pub use colors::Colors;
pub use sdl::SchemaError;

/// Names of the scalars every GraphQL schema provides.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

// ============================================================================
// Type References
// ============================================================================

/// Kind tag of a named schema type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Object,
    Interface,
    InputObject,
    Enum,
    Union,
    Scalar,
}

/// Reference to a type at a field, argument or input-field position.
///
/// Nullability is implicit: a position without a `NonNull` wrapper is nullable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wrap in `NonNull`. Already non-null references are returned as is.
    pub fn non_null(inner: TypeRef) -> Self {
        match inner {
            Self::NonNull(_) => inner,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Name of the innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.base_name(),
        }
    }
}

// ============================================================================
// Named Types
// ============================================================================

/// An argument or an input-object field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputValue {
    pub name: String,
    pub ty: TypeRef,
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A field of an object or interface type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub ty: TypeRef,
    /// Arguments in declaration order.
    pub arguments: Vec<InputValue>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, argument: InputValue) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectType {
    pub fields: Vec<FieldDef>,
    /// Directly implemented interfaces, by name.
    pub interfaces: Vec<String>,
}

impl ObjectType {
    pub fn has_argumented_fields(&self) -> bool {
        self.fields.iter().any(FieldDef::has_arguments)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceType {
    pub fields: Vec<FieldDef>,
    /// Interfaces this interface itself implements, by name.
    pub interfaces: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputObjectType {
    pub fields: Vec<InputValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumType {
    /// Values in source order.
    pub values: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnionType {
    /// Member object types in source order.
    pub members: Vec<String>,
}

/// Kind-specific payload of a named type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeBody {
    Object(ObjectType),
    Interface(InterfaceType),
    InputObject(InputObjectType),
    Enum(EnumType),
    Union(UnionType),
    Scalar,
}

impl TypeBody {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Object(_) => TypeKind::Object,
            Self::Interface(_) => TypeKind::Interface,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::Enum(_) => TypeKind::Enum,
            Self::Union(_) => TypeKind::Union,
            Self::Scalar => TypeKind::Scalar,
        }
    }
}

/// A schema type with a unique name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
    pub body: TypeBody,
}

impl NamedType {
    pub fn new(name: impl Into<String>, body: TypeBody) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.body.kind()
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Root operation type names.
///
/// A root whose type is absent from the table does not exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootOperations {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

impl Default for RootOperations {
    fn default() -> Self {
        Self {
            query: Some("Query".to_string()),
            mutation: Some("Mutation".to_string()),
            subscription: Some("Subscription".to_string()),
        }
    }
}

/// A fully built GraphQL schema.
///
/// The named-type table keeps insertion order; that order is the iteration
/// order every compiler pass observes.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    types: IndexMap<String, NamedType>,
    roots: RootOperations,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a type, replacing any previous type with the same name in place.
    pub fn insert(&mut self, ty: NamedType) -> Option<NamedType> {
        self.types.insert(ty.name.clone(), ty)
    }

    /// Builder-style [`Schema::insert`].
    pub fn with_type(mut self, ty: NamedType) -> Self {
        self.insert(ty);
        self
    }

    pub fn set_roots(&mut self, roots: RootOperations) {
        self.roots = roots;
    }

    pub fn roots(&self) -> &RootOperations {
        &self.roots
    }

    /// All named types in table order.
    pub fn types(&self) -> impl Iterator<Item = &NamedType> {
        self.types.values()
    }

    pub fn get(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    pub fn kind_of(&self, name: &str) -> Option<TypeKind> {
        self.get(name).map(NamedType::kind)
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceType> {
        match &self.get(name)?.body {
            TypeBody::Interface(interface) => Some(interface),
            _ => None,
        }
    }

    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        match &self.get(name)?.body {
            TypeBody::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn query_type(&self) -> Option<&ObjectType> {
        self.object(self.roots.query.as_deref()?)
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.object(self.roots.mutation.as_deref()?)
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.object(self.roots.subscription.as_deref()?)
    }

    /// Whether `name` designates the query, mutation or subscription root.
    pub fn is_root_operation(&self, name: &str) -> bool {
        [
            &self.roots.query,
            &self.roots.mutation,
            &self.roots.subscription,
        ]
        .into_iter()
        .any(|root| root.as_deref() == Some(name))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Introspection types (`__Schema`, `__Type`, ...) are never emitted.
pub fn is_introspection_name(name: &str) -> bool {
    name.starts_with("__")
}
