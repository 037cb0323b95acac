//! Card stack lifecycle.
//!
//! [`CardStackController`] owns the ordered backing list, the front index,
//! and the bounded window of mounted cards.
//!
//! ```text
//!   initialize(ids)
//!       │  fan-out: one resolve() per id (any completion order)
//!       ▼
//!   join_all ── generation check ── stale? → Superseded
//!       │
//!       ▼
//!   backing = resolved, in caller order ── empty? → onDeckEmpty
//!       │
//!       ▼
//!   mount_window → restack
//!
//!   backing:  [ A  B  C  D  E ]
//!                  ▲───────▲
//!             front_index  window (size 3) = [B C D]
//! ```
//!
//! All state lives behind one `Rc<RefCell<_>>`, so the controller is `!Send`
//! and every mutation happens on the caller's thread. The only suspension
//! point is the resolution join inside `initialize`; `dispose` or a second
//! `initialize` during that wait bumps the generation and the stale load is
//! discarded at the join.

use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use futures::future::join_all;
use swipedeck_types::{Bounds, Vec2};
use tokio::sync::broadcast;
use tracing::{Instrument, debug, info, info_span};

use crate::config::DeckConfig;
use crate::constants;
use crate::container::DeckContainer;
use crate::content::{CardContent, CardContentFactory, CardKey, CardSlot};
use crate::error::Result;
use crate::events::{DeckEvent, LoadOutcome, StackSnapshot};
use crate::gesture::{DragTransform, SwipeTarget};
use crate::resolver::EntityResolver;
use crate::transition::Transition;
use crate::visual::{CardVisual, stack_visual};

/// A mounted card: its identifier and the content built for it.
struct CardRecord<I, T> {
    key: CardKey,
    id: I,
    content: T,
}

/// A backing-list entry that resolved successfully.
struct Resolved<I, E> {
    id: I,
    entity: E,
}

struct StackState<I, E, T> {
    backing: Vec<Resolved<I, E>>,
    front_index: usize,
    window: VecDeque<CardRecord<I, T>>,
}

impl<I, E, T> Default for StackState<I, E, T> {
    fn default() -> Self {
        Self {
            backing: Vec::new(),
            front_index: 0,
            window: VecDeque::new(),
        }
    }
}

struct DeckInner<I, F: CardContentFactory, C> {
    config: DeckConfig,
    factory: F,
    container: C,
    state: StackState<I, F::Entity, F::Content>,
    bounds: Option<Bounds>,
    /// Front card visual while a drag preview is showing.
    live_front: Option<CardVisual>,
    /// Bumped by every initialize and dispose; loads compare it at the join.
    generation: u64,
    next_key: u64,
}

impl<I, F, C> DeckInner<I, F, C>
where
    I: Clone + fmt::Debug,
    F: CardContentFactory,
    C: DeckContainer,
{
    fn container_width(&self) -> f32 {
        self.bounds
            .filter(|b| !b.is_empty())
            .map(|b| b.width)
            .unwrap_or(constants::FALLBACK_CONTAINER_WIDTH)
    }

    fn front_key(&self) -> Option<CardKey> {
        self.state.window.front().map(|card| card.key)
    }

    fn resting_front(&self) -> CardVisual {
        stack_visual(0, self.state.window.len(), &self.config)
    }

    /// Mount every backing position in `[front_index, front_index + window_size)`
    /// that is not mounted yet.
    fn mount_window(&mut self) {
        let start = self.state.front_index + self.state.window.len();
        let end = (self.state.front_index + self.config.window_size).min(self.state.backing.len());

        for position in start..end {
            let key = CardKey(self.next_key);
            self.next_key += 1;

            let entry = &self.state.backing[position];
            let mut content = self.factory.build(&entry.entity);
            let id = entry.id.clone();

            self.container.attach(key);
            content.mount(CardSlot {
                key,
                bounds: self.bounds,
            });
            if let Some(bounds) = self.bounds {
                content.layout(bounds);
            }

            debug!(%key, position, ?id, "mounted card");
            self.state.window.push_back(CardRecord { key, id, content });
        }
    }

    /// Re-apply the stacking policy to the whole window.
    fn restack(&mut self, animated: bool) {
        let visible = self.state.window.len();
        for (position, card) in self.state.window.iter().enumerate() {
            let visual = stack_visual(position, visible, &self.config);
            if animated {
                self.container
                    .animate(card.key, Transition::restack(visual, &self.config));
            } else {
                self.container.apply(card.key, &visual);
            }
        }
        self.live_front = None;
    }

    /// Dismiss the front card and slide the window forward by one.
    ///
    /// Returns the advanced id, the new front index, and whether the deck is
    /// now empty. `None` if there was no front card.
    fn advance_front(&mut self) -> Option<(I, usize, bool)> {
        let from = self.live_front.take().unwrap_or_else(|| self.resting_front());
        let exit = Transition::exit(from, self.container_width(), &self.config);

        let CardRecord {
            key,
            id,
            mut content,
        } = self.state.window.pop_front()?;

        self.container.dismiss(key, exit);
        content.unmount();
        self.state.front_index += 1;

        self.mount_window();
        self.restack(true);

        debug!(
            %key,
            front_index = self.state.front_index,
            remaining = self.state.window.len(),
            "advanced past card"
        );
        Some((id, self.state.front_index, self.state.window.is_empty()))
    }

    /// Unmount every mounted card in window order and clear the backing list.
    fn teardown(&mut self) -> usize {
        let mut unmounted = 0;
        while let Some(mut card) = self.state.window.pop_front() {
            card.content.unmount();
            self.container.detach(card.key);
            unmounted += 1;
        }
        self.state.backing.clear();
        self.state.front_index = 0;
        self.live_front = None;
        unmounted
    }
}

type EmptyCallbacks = Rc<RefCell<Vec<Box<dyn FnMut()>>>>;

/// Swipeable card deck over a resolver, a content factory, and a container.
///
/// Cloning yields another handle to the same deck.
///
/// Content hooks and `on_deck_empty` callbacks run on the caller's thread.
/// Content hooks must not call back into the deck; empty callbacks may.
pub struct CardStackController<R, F, C>
where
    R: EntityResolver,
    F: CardContentFactory<Entity = R::Entity>,
{
    resolver: Rc<R>,
    inner: Rc<RefCell<DeckInner<R::Id, F, C>>>,
    empty_callbacks: EmptyCallbacks,
    events: broadcast::Sender<DeckEvent<R::Id>>,
}

impl<R, F, C> Clone for CardStackController<R, F, C>
where
    R: EntityResolver,
    F: CardContentFactory<Entity = R::Entity>,
{
    fn clone(&self) -> Self {
        Self {
            resolver: Rc::clone(&self.resolver),
            inner: Rc::clone(&self.inner),
            empty_callbacks: Rc::clone(&self.empty_callbacks),
            events: self.events.clone(),
        }
    }
}

impl<R, F, C> CardStackController<R, F, C>
where
    R: EntityResolver,
    F: CardContentFactory<Entity = R::Entity>,
    C: DeckContainer,
{
    /// Build an empty deck. Fails fast on an invalid configuration.
    pub fn new(resolver: R, factory: F, container: C, config: DeckConfig) -> Result<Self> {
        config.validate()?;
        let (events, _) = broadcast::channel(constants::EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            resolver: Rc::new(resolver),
            inner: Rc::new(RefCell::new(DeckInner {
                config,
                factory,
                container,
                state: StackState::default(),
                bounds: None,
                live_front: None,
                generation: 0,
                next_key: 0,
            })),
            empty_callbacks: Rc::new(RefCell::new(Vec::new())),
            events,
        })
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Resolve `ids` concurrently and mount the first window.
    ///
    /// Nothing is mounted until every lookup has completed. Misses are
    /// dropped silently; the rest keep the caller's order. Any cards from a
    /// previous load are unmounted first.
    pub async fn initialize(&self, ids: Vec<R::Id>) -> LoadOutcome {
        if ids.is_empty() {
            debug!("initialize with no identifiers; ignoring");
            return LoadOutcome::Rejected;
        }

        let span = info_span!("deck_initialize", requested = ids.len());
        self.load(ids).instrument(span).await
    }

    async fn load(&self, ids: Vec<R::Id>) -> LoadOutcome {
        let (generation, replaced) = {
            let mut inner = self.inner.borrow_mut();
            let replaced = inner.teardown();
            inner.generation += 1;
            (inner.generation, replaced)
        };
        if replaced > 0 {
            debug!(unmounted = replaced, "re-initializing over existing cards");
            self.emit(DeckEvent::Disposed {
                unmounted: replaced,
            });
        }

        let resolver = Rc::clone(&self.resolver);
        let results = join_all(ids.iter().map(|id| resolver.resolve(id))).await;

        let (cards, missed) = {
            let mut inner = self.inner.borrow_mut();
            if inner.generation != generation {
                debug!(
                    generation,
                    current = inner.generation,
                    "load superseded; discarding resolutions"
                );
                return LoadOutcome::Superseded;
            }

            let mut missed = 0;
            let backing: Vec<_> = ids
                .into_iter()
                .zip(results)
                .filter_map(|(id, entity)| match entity {
                    Some(entity) => Some(Resolved { id, entity }),
                    None => {
                        debug!(?id, "identifier did not resolve; dropping");
                        missed += 1;
                        None
                    }
                })
                .collect();

            let cards = backing.len();
            inner.state.backing = backing;
            inner.state.front_index = 0;
            if cards > 0 {
                inner.mount_window();
                inner.restack(false);
            }
            (cards, missed)
        };

        if cards == 0 {
            info!(missed, "no identifiers resolved; deck is empty");
            self.emit(DeckEvent::Emptied);
            self.fire_empty();
            return LoadOutcome::Empty { missed };
        }

        info!(cards, missed, "deck loaded");
        self.emit(DeckEvent::Loaded { cards, missed });
        LoadOutcome::Loaded { cards, missed }
    }

    /// Dismiss the front card and reveal the next one.
    ///
    /// Returns `false` (and does nothing) when there is no front card.
    /// The exit transition is handed to the container; the index moves now.
    pub fn advance(&self) -> bool {
        let emptied = {
            let mut inner = self.inner.borrow_mut();
            let Some((id, front_index, emptied)) = inner.advance_front() else {
                debug!("advance with no front card; ignoring");
                return false;
            };
            self.emit(DeckEvent::Advanced { id, front_index });
            emptied
        };

        if emptied {
            info!("deck emptied");
            self.emit(DeckEvent::Emptied);
            self.fire_empty();
        }
        true
    }

    /// Unmount every card and abandon any in-flight load. Idempotent.
    pub fn dispose(&self) {
        let unmounted = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.teardown()
        };

        if unmounted > 0 {
            info!(unmounted, "deck disposed");
            self.emit(DeckEvent::Disposed { unmounted });
        }
    }

    /// Forward new container bounds to every mounted card.
    ///
    /// Cards mounted later receive the same bounds on mount.
    pub fn layout(&self, bounds: Bounds) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        inner.bounds = Some(bounds);
        for card in inner.state.window.iter_mut() {
            card.content.layout(bounds);
        }
    }

    // ── Observers ────────────────────────────────────────────────────────

    /// Register a callback fired whenever the deck becomes empty.
    pub fn on_deck_empty(&self, callback: impl FnMut() + 'static) {
        self.empty_callbacks.borrow_mut().push(Box::new(callback));
    }

    /// Subscribe to deck lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<DeckEvent<R::Id>> {
        self.events.subscribe()
    }

    fn emit(&self, event: DeckEvent<R::Id>) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    fn fire_empty(&self) {
        let mut callbacks = std::mem::take(&mut *self.empty_callbacks.borrow_mut());
        for callback in callbacks.iter_mut() {
            callback();
        }
        // Keep callbacks registered while firing.
        let mut slot = self.empty_callbacks.borrow_mut();
        callbacks.append(&mut *slot);
        *slot = callbacks;
    }

    // ── Introspection ────────────────────────────────────────────────────

    pub fn front_index(&self) -> usize {
        self.inner.borrow().state.front_index
    }

    /// Number of resolved identifiers in the backing list.
    pub fn backing_len(&self) -> usize {
        self.inner.borrow().state.backing.len()
    }

    /// Identifiers of the mounted cards, front first.
    pub fn window_ids(&self) -> Vec<R::Id> {
        self.inner
            .borrow()
            .state
            .window
            .iter()
            .map(|card| card.id.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().state.window.is_empty()
    }

    pub fn snapshot(&self) -> StackSnapshot<R::Id> {
        let inner = self.inner.borrow();
        StackSnapshot {
            front_index: inner.state.front_index,
            backing_len: inner.state.backing.len(),
            window: inner
                .state
                .window
                .iter()
                .map(|card| (card.key, card.id.clone()))
                .collect(),
        }
    }

    pub fn config(&self) -> DeckConfig {
        self.inner.borrow().config.clone()
    }

    /// Borrow the container, e.g. to inspect what a test container recorded.
    pub fn container(&self) -> Ref<'_, C> {
        Ref::map(self.inner.borrow(), |inner| &inner.container)
    }
}

impl<R, F, C> SwipeTarget for CardStackController<R, F, C>
where
    R: EntityResolver,
    F: CardContentFactory<Entity = R::Entity>,
    C: DeckContainer,
{
    fn front_key(&self) -> Option<CardKey> {
        self.inner.borrow().front_key()
    }

    fn container_width(&self) -> f32 {
        self.inner.borrow().container_width()
    }

    fn preview_front(&self, key: CardKey, drag: DragTransform) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.front_key() != Some(key) {
            return false;
        }
        let resting = inner.resting_front();
        let visual = CardVisual {
            translation: Vec2::new(drag.translation_x, resting.translation.y),
            rotation: drag.rotation,
            opacity: drag.opacity,
            ..resting
        };
        inner.container.apply(key, &visual);
        inner.live_front = Some(visual);
        true
    }

    fn restore_front(&self, key: CardKey) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.front_key() != Some(key) {
            return false;
        }
        let resting = inner.resting_front();
        let snap = Transition::snap_back(resting, &inner.config);
        inner.container.animate(key, snap);
        inner.live_front = None;
        true
    }

    fn advance(&self) -> bool {
        CardStackController::advance(self)
    }
}
