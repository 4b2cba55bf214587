//! Representation strategy per object type.
//!
//! Runs in two phases. [`UnionMembership::collect`] first gathers an immutable
//! set of union member names; [`TypeClassifier::classify`] then decides every
//! object type against that set.
//!
//! An object is record-eligible when none of its fields take arguments, it
//! implements no interface and no union lists it. Eligible objects become
//! records only when records are forced; everything else is a service class.

use std::collections::HashSet;

use balgen_core::{ObjectType, Schema, TypeBody, is_introspection_name};
use indexmap::IndexMap;
use serde::Serialize;

use super::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    Record,
    Behavior,
}

/// Names of object types listed by at least one union.
#[derive(Clone, Debug, Default)]
pub struct UnionMembership {
    members: HashSet<String>,
}

impl UnionMembership {
    pub fn collect(schema: &Schema) -> Self {
        let members = schema
            .types()
            .filter(|ty| !is_introspection_name(&ty.name))
            .filter_map(|ty| match &ty.body {
                TypeBody::Union(union) => Some(union.members.iter().cloned()),
                _ => None,
            })
            .flatten()
            .collect();
        Self { members }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }
}

/// Decisions for every classified object type, in table order.
#[derive(Clone, Debug, Default)]
pub struct Classification {
    decisions: IndexMap<String, Representation>,
}

impl Classification {
    pub fn get(&self, name: &str) -> Option<Representation> {
        self.decisions.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Representation)> {
        self.decisions.iter().map(|(name, r)| (name.as_str(), *r))
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

pub struct TypeClassifier<'a> {
    schema: &'a Schema,
    records_forced: bool,
}

impl<'a> TypeClassifier<'a> {
    pub fn new(schema: &'a Schema, config: &Config) -> Self {
        Self {
            schema,
            records_forced: config.records_forced,
        }
    }

    /// Classify every non-root, non-introspection object type.
    pub fn classify(&self, membership: &UnionMembership) -> Classification {
        let mut decisions = IndexMap::new();
        for ty in self.schema.types() {
            let TypeBody::Object(object) = &ty.body else {
                continue;
            };
            if is_introspection_name(&ty.name) || self.schema.is_root_operation(&ty.name) {
                continue;
            }
            let decision = self.decide(&ty.name, object, membership);
            tracing::debug!(name = %ty.name, ?decision, "classified object type");
            decisions.insert(ty.name.clone(), decision);
        }
        Classification { decisions }
    }

    pub fn decide(
        &self,
        name: &str,
        object: &ObjectType,
        membership: &UnionMembership,
    ) -> Representation {
        if self.records_forced && is_record_eligible(name, object, membership) {
            Representation::Record
        } else {
            Representation::Behavior
        }
    }
}

/// Whether `object` can be a plain record regardless of configuration.
pub fn is_record_eligible(name: &str, object: &ObjectType, membership: &UnionMembership) -> bool {
    !object.has_argumented_fields() && object.interfaces.is_empty() && !membership.contains(name)
}
