//! Type-identity-keyed registry of fabrication rules.

use rand::rngs::StdRng;
use std::any::{Any, TypeId};
use std::collections::HashMap;

use super::rules;

/// Error type for fabrication lookups.
#[derive(Debug, thiserror::Error)]
pub enum FabricationError {
    /// No fabrication rule registered for the requested type.
    ///
    /// This is a programming-time defect, surfaced before any encoding or
    /// network activity takes place.
    #[error("no fabrication rule registered for type {0}")]
    NoRule(&'static str),
}

type Rule<T> = Box<dyn Fn(&mut StdRng) -> T + Send + Sync>;

/// Registry of fabrication functions keyed by type identity.
///
/// The publisher looks up the rule for `T` at publish time and fails with
/// [`FabricationError::NoRule`] when the type was never registered. The
/// registry is populated at construction; additional types can be registered
/// by callers that publish their own records.
pub struct FabricatorRegistry {
    rules: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl FabricatorRegistry {
    /// Empty registry with no rules.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registry pre-populated with the rules for all shop entity types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(rules::customer);
        registry.register(rules::delivery_address);
        registry.register(rules::line_item);
        registry.register(rules::payment);
        registry.register(rules::order);
        registry.register(rules::event);
        registry
    }

    /// Register a fabrication rule for `T`, replacing any previous rule.
    pub fn register<T, F>(&mut self, rule: F)
    where
        T: 'static,
        F: Fn(&mut StdRng) -> T + Send + Sync + 'static,
    {
        let rule: Rule<T> = Box::new(rule);
        self.rules.insert(TypeId::of::<T>(), Box::new(rule));
    }

    /// Fabricate one instance of `T` using its registered rule.
    pub fn fabricate<T: 'static>(&self, rng: &mut StdRng) -> Result<T, FabricationError> {
        let rule = self
            .rules
            .get(&TypeId::of::<T>())
            .and_then(|rule| rule.downcast_ref::<Rule<T>>())
            .ok_or_else(|| FabricationError::NoRule(std::any::type_name::<T>()))?;
        Ok(rule(rng))
    }

    /// Whether a rule is registered for `T`.
    pub fn is_registered<T: 'static>(&self) -> bool {
        self.rules.contains_key(&TypeId::of::<T>())
    }
}

impl Default for FabricatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
