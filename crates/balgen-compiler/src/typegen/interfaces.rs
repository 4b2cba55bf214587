//! Interface flattening.
//!
//! Computes which interfaces a declaration must include and which fields it
//! still has to declare itself once those includes are in place.
//!
//! Flattening looks one level deep: an interface drops out when another
//! declared interface lists it directly. Longer chains (`A: B`, `B: C`, with
//! `A` and `C` both declared) keep the redundant entry.

use std::collections::HashSet;

use balgen_core::{FieldDef, Schema};

#[derive(Clone, Copy, Debug)]
pub struct InterfaceResolver<'a> {
    schema: &'a Schema,
}

impl<'a> InterfaceResolver<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Declared interfaces minus those already implied by another declared one.
    ///
    /// Order follows `declared`. Names that do not resolve to an interface are
    /// kept but never imply anything.
    pub fn minimal_interfaces<'n>(&self, declared: &'n [String]) -> Vec<&'n str> {
        let mut remaining: HashSet<&str> = declared.iter().map(String::as_str).collect();

        for name in declared {
            let Some(interface) = self.schema.interface(name) else {
                continue;
            };
            for implied in &interface.interfaces {
                if implied != name {
                    remaining.remove(implied.as_str());
                }
            }
        }

        declared
            .iter()
            .map(String::as_str)
            .filter(|name| remaining.contains(name))
            .collect()
    }

    /// Fields not already defined by one of `interfaces`.
    ///
    /// Name equality is the only override signal: a field with the same name
    /// as an interface field is dropped, never merged.
    pub fn minimal_fields<'f>(
        &self,
        fields: &'f [FieldDef],
        interfaces: &[&str],
    ) -> Vec<&'f FieldDef> {
        let mut remaining: HashSet<&str> = fields.iter().map(|f| f.name.as_str()).collect();

        for name in interfaces {
            let Some(interface) = self.schema.interface(name) else {
                continue;
            };
            for field in &interface.fields {
                remaining.remove(field.name.as_str());
            }
        }

        fields
            .iter()
            .filter(|f| remaining.contains(f.name.as_str()))
            .collect()
    }
}
