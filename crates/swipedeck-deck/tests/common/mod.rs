//! Recording fakes shared by the deck integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use swipedeck_deck::{
    CardContent, CardContentFactory, CardKey, CardSlot, CardStackController, CardVisual,
    DeckConfig, DeckContainer, MemoryResolver, Transition,
};
use swipedeck_types::Bounds;

/// Content lifecycle calls, in the order they happened.
pub type Lifecycle = Rc<RefCell<Vec<String>>>;

pub struct TitleCard {
    title: String,
    log: Lifecycle,
}

impl CardContent for TitleCard {
    fn mount(&mut self, slot: CardSlot) {
        let suffix = if slot.bounds.is_some() { " (sized)" } else { "" };
        self.log
            .borrow_mut()
            .push(format!("mount {}{suffix}", self.title));
    }

    fn layout(&mut self, bounds: Bounds) {
        self.log
            .borrow_mut()
            .push(format!("layout {} {}x{}", self.title, bounds.width, bounds.height));
    }

    fn unmount(&mut self) {
        self.log.borrow_mut().push(format!("unmount {}", self.title));
    }
}

pub struct TitleFactory {
    pub log: Lifecycle,
}

impl CardContentFactory for TitleFactory {
    type Entity = String;
    type Content = TitleCard;

    fn build(&self, entity: &String) -> TitleCard {
        self.log.borrow_mut().push(format!("build {entity}"));
        TitleCard {
            title: entity.clone(),
            log: Rc::clone(&self.log),
        }
    }
}

/// Container that remembers the latest visual (applied or animated towards)
/// for every card.
#[derive(Default)]
pub struct RecordingContainer {
    pub attached: Vec<CardKey>,
    pub visuals: HashMap<CardKey, CardVisual>,
    pub animations: Vec<(CardKey, Transition)>,
    pub dismissed: Vec<CardKey>,
    pub detached: Vec<CardKey>,
}

impl RecordingContainer {
    pub fn visual(&self, key: CardKey) -> CardVisual {
        self.visuals[&key]
    }
}

impl DeckContainer for RecordingContainer {
    fn attach(&mut self, key: CardKey) {
        self.attached.push(key);
    }

    fn apply(&mut self, key: CardKey, visual: &CardVisual) {
        self.visuals.insert(key, *visual);
    }

    fn animate(&mut self, key: CardKey, transition: Transition) {
        self.visuals.insert(key, transition.target);
        self.animations.push((key, transition));
    }

    fn dismiss(&mut self, key: CardKey, exit: Transition) {
        self.visuals.insert(key, exit.target);
        self.dismissed.push(key);
    }

    fn detach(&mut self, key: CardKey) {
        self.visuals.remove(&key);
        self.detached.push(key);
    }
}

pub type TestDeck =
    CardStackController<MemoryResolver<&'static str, String>, TitleFactory, RecordingContainer>;

/// Resolver where every listed name resolves to its uppercase title.
pub fn resolver(names: &[&'static str]) -> MemoryResolver<&'static str, String> {
    let mut resolver = MemoryResolver::new();
    for name in names {
        resolver.insert(*name, name.to_uppercase());
    }
    resolver
}

/// Route deck tracing to the test harness (`RUST_LOG=swipedeck_deck=debug`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn deck_with(
    resolver: MemoryResolver<&'static str, String>,
    config: DeckConfig,
) -> (TestDeck, Lifecycle) {
    init_tracing();
    let log: Lifecycle = Rc::new(RefCell::new(Vec::new()));
    let deck = CardStackController::new(
        resolver,
        TitleFactory {
            log: Rc::clone(&log),
        },
        RecordingContainer::default(),
        config,
    )
    .expect("valid config");
    (deck, log)
}

pub fn deck(names: &[&'static str]) -> (TestDeck, Lifecycle) {
    deck_with(resolver(names), DeckConfig::default())
}

/// Lifecycle entries starting with `prefix`.
pub fn entries(log: &Lifecycle, prefix: &str) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|e| e.starts_with(prefix))
        .cloned()
        .collect()
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
