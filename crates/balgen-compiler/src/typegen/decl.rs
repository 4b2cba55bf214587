//! Declaration tree handed to the formatter.
//!
//! Nodes are built once per named type and never mutated afterwards.

use serde::Serialize;

use super::descriptor::TypeDescriptor;

/// Module-level import. Generated modules carry exactly one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Import {
    pub org: String,
    pub module: String,
}

impl Import {
    /// `import ballerina/graphql;`
    pub fn graphql() -> Self {
        Self {
            org: "ballerina".to_string(),
            module: "graphql".to_string(),
        }
    }
}

/// A generated source module: one import followed by the declarations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Module {
    pub import: Import,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Record(RecordDecl),
    Behavior(BehaviorDecl),
    Interface(InterfaceDecl),
    Enum(EnumDecl),
    Union(UnionDecl),
    Root(RootDecl),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Record(d) => &d.name,
            Self::Behavior(d) => &d.name,
            Self::Interface(d) => &d.name,
            Self::Enum(d) => &d.name,
            Self::Union(d) => &d.name,
            Self::Root(d) => &d.name,
        }
    }
}

/// Plain data record, one stored field per schema field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordDecl {
    pub name: String,
    /// Closed records (`record {| |}`) reject extra fields. Used for input objects.
    pub closed: bool,
    pub fields: Vec<RecordField>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordField {
    pub name: String,
    pub ty: TypeDescriptor,
}

/// Service class whose members are resolver accessors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BehaviorDecl {
    pub name: String,
    /// Set when the object implements at least one interface.
    pub distinct: bool,
    /// Included interface contracts (`*Node;`).
    pub includes: Vec<String>,
    pub methods: Vec<Method>,
}

/// Distinct service object type standing for a GraphQL interface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InterfaceDecl {
    pub name: String,
    pub includes: Vec<String>,
    pub methods: Vec<Method>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnumDecl {
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnionDecl {
    pub name: String,
    pub alternatives: UnionAlternatives,
}

/// Binary alternative tree over union member names.
///
/// `[A, B, C]` is built as `Either(Either(A, B), C)`: everything but the last
/// member nested on the left, the last member on the right.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnionAlternatives {
    Member(String),
    Either(Box<UnionAlternatives>, Box<UnionAlternatives>),
}

impl UnionAlternatives {
    /// Fold member names into an alternative tree. `None` for an empty list.
    pub fn from_members(members: &[String]) -> Option<Self> {
        match members {
            [] => None,
            [only] => Some(Self::Member(only.clone())),
            [init @ .., last] => Some(Self::Either(
                Box::new(Self::from_members(init)?),
                Box::new(Self::Member(last.clone())),
            )),
        }
    }

    /// Member names, left to right.
    pub fn members(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_members(&mut out);
        out
    }

    fn collect_members<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Member(name) => out.push(name),
            Self::Either(left, right) => {
                left.collect_members(out);
                right.collect_members(out);
            }
        }
    }
}

/// The single root contract exposing query, mutation and subscription fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RootDecl {
    pub name: String,
    /// Base service marker included by the contract (`graphql:Service`).
    pub base: String,
    /// Query members, then mutation members, then subscription members.
    pub methods: Vec<Method>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    /// Read-style `resource function get`.
    Get,
    /// Action-style `remote function`.
    Remote,
    /// Stream-style `resource function subscribe`.
    Subscribe,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Method {
    pub kind: MethodKind,
    pub name: String,
    pub params: Vec<Param>,
    pub returns: TypeDescriptor,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeDescriptor,
}
