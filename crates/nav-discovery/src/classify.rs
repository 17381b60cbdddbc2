//! Child-entity classification.
//!
//! A child exists only to be many-to-many linked from a parent and is edited
//! through the parent's embedded editor. It is recognized by two signals:
//!
//! - some other entity type points a forward many-to-many at it (or the
//!   registry hands us a reverse many-to-many descriptor on it), and
//! - nobody authored a table for it, by convention or hook.
//!
//! Route matching plays no part, so every registry entry can be classified.

use nav_core::entities::{EntityType, RelationDescriptor};
use nav_core::enums::SchemaKind;

use crate::resolve::BindingResolver;

pub struct ChildClassifier<'a> {
    all: &'a [EntityType],
    resolver: &'a BindingResolver<'a>,
}

impl<'a> ChildClassifier<'a> {
    /// `all` is the registry snapshot the classification runs against.
    #[must_use]
    pub const fn new(all: &'a [EntityType], resolver: &'a BindingResolver<'a>) -> Self {
        Self { all, resolver }
    }

    #[must_use]
    pub fn is_child(&self, entity: &EntityType) -> bool {
        self.is_many_to_many_target(entity)
            && !self.resolver.has_explicit(entity, SchemaKind::Table)
    }

    /// Targeted by a many-to-many declared on a different entity type.
    #[must_use]
    pub fn is_many_to_many_target(&self, entity: &EntityType) -> bool {
        if entity
            .declared_relations
            .iter()
            .any(RelationDescriptor::is_reverse_many_to_many)
        {
            return true;
        }

        self.all
            .iter()
            .filter(|other| {
                !(other.namespace == entity.namespace
                    && other.type_name.eq_ignore_ascii_case(&entity.type_name))
            })
            .flat_map(|other| other.forward_many_to_many())
            .any(|relation| relation.target.refers_to(&entity.namespace, &entity.type_name))
    }
}
