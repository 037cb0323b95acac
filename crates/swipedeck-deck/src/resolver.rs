//! Identifier → entity resolution.
//!
//! - [`EntityResolver`] - the lookup contract the deck fans out over
//! - [`MemoryResolver`] - hash-map backed resolver with optional per-id latency
//!
//! A miss (`None`) is a normal outcome, not an error: the identifier simply
//! never becomes a card.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use async_trait::async_trait;

/// Resolves opaque identifiers into display-able entities.
///
/// No ordering or timeout contract: the deck issues all lookups at once and
/// waits for every one of them before showing anything.
#[async_trait(?Send)]
pub trait EntityResolver {
    type Id: Clone + std::fmt::Debug;
    type Entity;

    /// Look up one identifier. `None` means "not found".
    async fn resolve(&self, id: &Self::Id) -> Option<Self::Entity>;
}

/// In-memory resolver for tests and headless hosts.
///
/// Each id can carry an artificial latency so callers can exercise
/// out-of-order completion.
#[derive(Debug, Clone)]
pub struct MemoryResolver<I, E> {
    entries: HashMap<I, E>,
    latency: HashMap<I, Duration>,
}

impl<I, E> Default for MemoryResolver<I, E> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            latency: HashMap::new(),
        }
    }
}

impl<I, E> MemoryResolver<I, E>
where
    I: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity under `id`.
    pub fn insert(&mut self, id: I, entity: E) {
        self.entries.insert(id, entity);
    }

    /// Delay every lookup of `id` (hit or miss) by `delay`.
    pub fn set_latency(&mut self, id: I, delay: Duration) {
        self.latency.insert(id, delay);
    }

    pub fn with_entity(mut self, id: I, entity: E) -> Self {
        self.insert(id, entity);
        self
    }

    pub fn with_latency(mut self, id: I, delay: Duration) -> Self {
        self.set_latency(id, delay);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait(?Send)]
impl<I, E> EntityResolver for MemoryResolver<I, E>
where
    I: Eq + Hash + Clone + std::fmt::Debug,
    E: Clone,
{
    type Id = I;
    type Entity = E;

    async fn resolve(&self, id: &I) -> Option<E> {
        if let Some(delay) = self.latency.get(id) {
            tokio::time::sleep(*delay).await;
        }
        self.entries.get(id).cloned()
    }
}
