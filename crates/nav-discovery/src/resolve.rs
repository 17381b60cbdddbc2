//! Binding resolver: a fixed, ordered chain of strategies per schema kind.
//!
//! ```text
//! convention  <namespace>.<forms|tables|filters>.<TypeName><Suffix>
//! hook        entity.schema_hooks[kind] (direct, or a path to look up)
//! generated   synthesized from the field list (form + table only)
//! ```
//!
//! The first strategy that yields a schema wins; results are never merged.
//! Lookup failures inside a strategy are logged and fall through.

use nav_core::entities::EntityType;
use nav_core::enums::SchemaKind;
use nav_core::schema::{BindingSource, ResolvedSchema, SchemaHook};
use nav_registry::SchemaLookup;

use crate::generate;

/// One step of the resolution chain.
pub trait BindingStrategy {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Generated strategies do not count as an explicit binding.
    fn is_generated(&self) -> bool {
        false
    }

    fn resolve(
        &self,
        entity: &EntityType,
        kind: SchemaKind,
        lookup: &dyn SchemaLookup,
    ) -> Option<ResolvedSchema>;
}

/// Probe the naming-convention path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionStrategy;

impl BindingStrategy for ConventionStrategy {
    fn name(&self) -> &'static str {
        "convention"
    }

    fn resolve(
        &self,
        entity: &EntityType,
        kind: SchemaKind,
        lookup: &dyn SchemaLookup,
    ) -> Option<ResolvedSchema> {
        let path = kind.convention_path(&entity.namespace, &entity.type_name);
        match lookup.lookup_kind(&path, kind) {
            Ok(definition) => Some(ResolvedSchema::new(
                definition,
                BindingSource::Convention { path },
            )),
            Err(error) => {
                tracing::trace!(%error, "no convention schema");
                None
            }
        }
    }
}

/// Follow the entity's explicit hook for the kind, if it declares one.
#[derive(Debug, Clone, Copy, Default)]
pub struct HookStrategy;

impl BindingStrategy for HookStrategy {
    fn name(&self) -> &'static str {
        "hook"
    }

    fn resolve(
        &self,
        entity: &EntityType,
        kind: SchemaKind,
        lookup: &dyn SchemaLookup,
    ) -> Option<ResolvedSchema> {
        match entity.hook(kind)? {
            SchemaHook::Direct(definition) if definition.kind == kind => Some(
                ResolvedSchema::new(definition.clone(), BindingSource::Hook { path: None }),
            ),
            SchemaHook::Direct(definition) => {
                tracing::debug!(
                    entity = %entity.qualified_name(),
                    %kind,
                    found = %definition.kind,
                    "direct hook has the wrong kind; ignoring"
                );
                None
            }
            SchemaHook::Path(path) => match lookup.lookup_kind(path, kind) {
                Ok(definition) => Some(ResolvedSchema::new(
                    definition,
                    BindingSource::Hook {
                        path: Some(path.clone()),
                    },
                )),
                Err(error) => {
                    tracing::debug!(
                        entity = %entity.qualified_name(),
                        %kind,
                        %error,
                        "hook lookup failed; falling through"
                    );
                    None
                }
            },
        }
    }
}

/// Synthesize a default from the field list.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratedStrategy;

impl BindingStrategy for GeneratedStrategy {
    fn name(&self) -> &'static str {
        "generated"
    }

    fn is_generated(&self) -> bool {
        true
    }

    fn resolve(
        &self,
        entity: &EntityType,
        kind: SchemaKind,
        _lookup: &dyn SchemaLookup,
    ) -> Option<ResolvedSchema> {
        generate::default_for(entity, kind)
            .map(|definition| ResolvedSchema::new(definition, BindingSource::Generated))
    }
}

pub struct BindingResolver<'a> {
    lookup: &'a dyn SchemaLookup,
    strategies: Vec<Box<dyn BindingStrategy + 'a>>,
}

impl<'a> BindingResolver<'a> {
    /// Convention, then hook, then generated.
    #[must_use]
    pub fn new(lookup: &'a dyn SchemaLookup) -> Self {
        Self::with_strategies(
            lookup,
            vec![
                Box::new(ConventionStrategy),
                Box::new(HookStrategy),
                Box::new(GeneratedStrategy),
            ],
        )
    }

    #[must_use]
    pub fn with_strategies(
        lookup: &'a dyn SchemaLookup,
        strategies: Vec<Box<dyn BindingStrategy + 'a>>,
    ) -> Self {
        Self { lookup, strategies }
    }

    /// First schema produced by the chain.
    #[must_use]
    pub fn resolve(&self, entity: &EntityType, kind: SchemaKind) -> Option<ResolvedSchema> {
        self.run(entity, kind, self.strategies.iter())
    }

    /// First schema produced by a non-generated strategy.
    #[must_use]
    pub fn resolve_explicit(&self, entity: &EntityType, kind: SchemaKind) -> Option<ResolvedSchema> {
        self.run(
            entity,
            kind,
            self.strategies.iter().filter(|s| !s.is_generated()),
        )
    }

    /// Whether an authored (convention or hook) schema exists for the kind.
    #[must_use]
    pub fn has_explicit(&self, entity: &EntityType, kind: SchemaKind) -> bool {
        self.resolve_explicit(entity, kind).is_some()
    }

    /// Always yields a form, generating one if the chain comes up empty.
    #[must_use]
    pub fn form(&self, entity: &EntityType) -> ResolvedSchema {
        self.resolve(entity, SchemaKind::Form).unwrap_or_else(|| {
            ResolvedSchema::new(generate::form(entity), BindingSource::Generated)
        })
    }

    /// Always yields a table, generating one if the chain comes up empty.
    #[must_use]
    pub fn table(&self, entity: &EntityType) -> ResolvedSchema {
        self.resolve(entity, SchemaKind::Table).unwrap_or_else(|| {
            ResolvedSchema::new(generate::table(entity), BindingSource::Generated)
        })
    }

    /// Filters may legitimately be absent.
    #[must_use]
    pub fn filter(&self, entity: &EntityType) -> Option<ResolvedSchema> {
        self.resolve(entity, SchemaKind::Filter)
    }

    fn run<'s, I>(&self, entity: &EntityType, kind: SchemaKind, strategies: I) -> Option<ResolvedSchema>
    where
        I: Iterator<Item = &'s Box<dyn BindingStrategy + 'a>>,
        'a: 's,
    {
        for strategy in strategies {
            if let Some(resolved) = strategy.resolve(entity, kind, self.lookup) {
                tracing::debug!(
                    entity = %entity.qualified_name(),
                    %kind,
                    strategy = strategy.name(),
                    schema = resolved.name(),
                    "binding resolved"
                );
                return Some(resolved);
            }
        }
        None
    }
}
