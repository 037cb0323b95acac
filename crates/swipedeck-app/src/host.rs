//! Headless deck host.
//!
//! Cards "render" as tracing events and the container logs what it would
//! animate. [`Session`] wires a [`DeckFile`] to a real
//! [`CardStackController`] and a [`SwipeGestureInterpreter`] and replays the
//! file's script against them.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use serde::Serialize;
use swipedeck_deck::{
    CardContent, CardContentFactory, CardKey, CardSlot, CardStackController, CardVisual,
    DeckContainer, LoadOutcome, MemoryResolver, SwipeGestureInterpreter, Transition,
};
use swipedeck_types::{Bounds, ChatId, ChatPreview, Vec2};
use tracing::{debug, info};

use crate::deck_file::{DeckFile, Step};

/// A chat preview card that renders into the log.
pub struct PreviewCard {
    preview: ChatPreview,
    key: Option<CardKey>,
}

impl CardContent for PreviewCard {
    fn mount(&mut self, slot: CardSlot) {
        self.key = Some(slot.key);
        info!(key = %slot.key, chat = %self.preview.id, "{}", self.preview.headline());
    }

    fn layout(&mut self, bounds: Bounds) {
        if let Some(key) = self.key {
            debug!(%key, width = bounds.width, height = bounds.height, "card layout");
        }
    }

    fn unmount(&mut self) {
        if let Some(key) = self.key.take() {
            debug!(%key, title = %self.preview.title, "card unmounted");
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PreviewFactory;

impl CardContentFactory for PreviewFactory {
    type Entity = ChatPreview;
    type Content = PreviewCard;

    fn build(&self, entity: &ChatPreview) -> PreviewCard {
        PreviewCard {
            preview: entity.clone(),
            key: None,
        }
    }
}

/// Container that traces every view operation and counts them.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct LogContainer {
    pub attached: usize,
    pub animated: usize,
    pub dismissed: usize,
    pub detached: usize,
}

impl DeckContainer for LogContainer {
    fn attach(&mut self, key: CardKey) {
        self.attached += 1;
        debug!(%key, "attach");
    }

    fn apply(&mut self, key: CardKey, visual: &CardVisual) {
        debug!(
            %key,
            x = visual.translation.x,
            y = visual.translation.y,
            rotation = visual.rotation,
            scale = visual.scale,
            opacity = visual.opacity,
            z = visual.z_order,
            "apply"
        );
    }

    fn animate(&mut self, key: CardKey, transition: Transition) {
        self.animated += 1;
        debug!(
            %key,
            easing = %transition.easing,
            ms = transition.duration.as_millis() as u64,
            x = transition.target.translation.x,
            opacity = transition.target.opacity,
            "animate"
        );
    }

    fn dismiss(&mut self, key: CardKey, exit: Transition) {
        self.dismissed += 1;
        debug!(%key, x = exit.target.translation.x, "dismiss");
    }

    fn detach(&mut self, key: CardKey) {
        self.detached += 1;
        debug!(%key, "detach");
    }
}

pub type HeadlessDeck =
    CardStackController<MemoryResolver<ChatId, ChatPreview>, PreviewFactory, LogContainer>;

/// What one script step did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: String,
    pub outcome: String,
    pub front_index: usize,
}

/// Summary of a replayed session, printed as JSON by `swipedeck run`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub load: LoadOutcome,
    pub steps: Vec<StepReport>,
    pub front_index: usize,
    pub backing_len: usize,
    /// Titles of the mounted cards, front first.
    pub window: Vec<String>,
    /// How many times the deck reported itself empty.
    pub emptied: usize,
    pub container: LogContainer,
}

/// A deck file bound to a live deck and gesture interpreter.
pub struct Session {
    file: DeckFile,
    deck: HeadlessDeck,
    gestures: SwipeGestureInterpreter,
    emptied: Rc<Cell<usize>>,
}

impl Session {
    pub fn new(file: DeckFile) -> swipedeck_deck::Result<Self> {
        let deck = CardStackController::new(
            file.resolver(),
            PreviewFactory,
            LogContainer::default(),
            file.config.clone(),
        )?;
        if let Some(bounds) = file.bounds {
            deck.layout(bounds);
        }

        let emptied = Rc::new(Cell::new(0));
        let counter = Rc::clone(&emptied);
        deck.on_deck_empty(move || {
            counter.set(counter.get() + 1);
            info!("no more chats");
        });

        let gestures = SwipeGestureInterpreter::new(file.config.clone());
        Ok(Self {
            file,
            deck,
            gestures,
            emptied,
        })
    }

    pub fn deck(&self) -> &HeadlessDeck {
        &self.deck
    }

    /// Load the deck, replay the script, and dispose.
    pub async fn run(mut self) -> Report {
        let load = self.deck.initialize(self.file.order_ids()).await;
        info!(?load, "initial load");

        let script = std::mem::take(&mut self.file.script);
        let mut steps = Vec::with_capacity(script.len());
        for step in script {
            let outcome = self.apply(&step).await;
            steps.push(StepReport {
                step: step.to_string(),
                outcome,
                front_index: self.deck.front_index(),
            });
        }

        let report = Report {
            load,
            steps,
            front_index: self.deck.front_index(),
            backing_len: self.deck.backing_len(),
            window: self
                .deck
                .window_ids()
                .into_iter()
                .map(|id| self.file.title_of(id))
                .collect(),
            emptied: self.emptied.get(),
            container: *self.deck.container(),
        };
        self.deck.dispose();
        report
    }

    /// Apply one step, returning a short description of its effect.
    pub async fn apply(&mut self, step: &Step) -> String {
        let deck = &self.deck;
        match step {
            Step::DragStart(x, y) => {
                format!("{:?}", self.gestures.on_drag_start(Vec2::new(*x, *y), deck))
            }
            Step::DragMove(x, y) => {
                format!("{:?}", self.gestures.on_drag_move(Vec2::new(*x, *y), deck))
            }
            Step::DragEnd(x, y) => {
                format!("{:?}", self.gestures.on_drag_end(Vec2::new(*x, *y), deck))
            }
            Step::Cancel => format!("{:?}", self.gestures.on_drag_cancel(deck)),
            Step::Advance => deck.advance().to_string(),
            Step::Settle => {
                let later = Instant::now() + self.file.config.snap_back_duration();
                self.gestures.tick(later).to_string()
            }
            Step::Layout(bounds) => {
                deck.layout(*bounds);
                format!("{}x{}", bounds.width, bounds.height)
            }
            Step::Reload => {
                self.gestures.reset();
                format!("{:?}", deck.initialize(self.file.order_ids()).await)
            }
            Step::Dispose => {
                self.gestures.reset();
                deck.dispose();
                "disposed".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(text: &str) -> DeckFile {
        DeckFile::from_ron_str(text).unwrap()
    }

    const CHATS: &str = r#"
        chats: [
            (handle: "alice", title: "Alice", last_message: Some("lunch?")),
            (handle: "bob", title: "Bob"),
            (handle: "carol", title: "Carol", latency_ms: Some(50)),
        ],
    "#;

    #[tokio::test(start_paused = true)]
    async fn test_swipe_script_advances_once() {
        let text = format!(
            r#"({CHATS} order: ["alice", "bob", "carol"],
               script: [DragStart(0.0, 0.0), DragMove(150.0, 0.0), DragEnd(150.0, 0.0)])"#
        );
        let report = Session::new(file(&text)).unwrap().run().await;

        assert_eq!(report.load, LoadOutcome::Loaded { cards: 3, missed: 0 });
        assert_eq!(report.front_index, 1);
        assert_eq!(report.window, vec!["Bob", "Carol"]);
        assert_eq!(report.steps[2].outcome, "Committed");
        assert_eq!(report.container.dismissed, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_drag_snaps_back_then_settles() {
        let text = format!(
            r#"({CHATS} order: ["alice", "bob"],
               script: [DragStart(0.0, 0.0), DragMove(60.0, 0.0), DragEnd(60.0, 0.0), Settle])"#
        );
        let report = Session::new(file(&text)).unwrap().run().await;

        assert_eq!(report.front_index, 0);
        assert_eq!(report.steps[2].outcome, "SnappedBack");
        assert_eq!(report.steps[3].outcome, "idle");
        assert_eq!(report.window, vec!["Alice", "Bob"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_handles_miss_and_deck_empties() {
        let text = format!(
            r#"({CHATS} order: ["ghost", "bob"], script: [Advance, Advance])"#
        );
        let report = Session::new(file(&text)).unwrap().run().await;

        assert_eq!(report.load, LoadOutcome::Loaded { cards: 1, missed: 1 });
        assert_eq!(report.steps[0].outcome, "true");
        assert_eq!(report.steps[1].outcome, "false");
        assert_eq!(report.emptied, 1);
        assert!(report.window.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reload_and_dispose_steps() {
        let text = format!(
            r#"({CHATS} order: ["alice", "carol"], script: [Advance, Reload, Dispose])"#
        );
        let report = Session::new(file(&text)).unwrap().run().await;

        assert_eq!(report.steps[0].front_index, 1);
        assert_eq!(report.steps[1].front_index, 0);
        assert!(report.steps[1].outcome.starts_with("Loaded"));
        assert_eq!(report.steps[2].outcome, "disposed");
        assert_eq!(report.backing_len, 0);
        // One card torn down by the reload, two by the dispose.
        assert_eq!(report.container.detached, 3);
    }

    #[tokio::test]
    async fn test_bounds_are_applied_before_load() {
        let text = format!(
            r#"({CHATS} order: ["alice"],
               bounds: Some((origin: (x: 0.0, y: 0.0), width: 300.0, height: 500.0)))"#
        );
        let session = Session::new(file(&text)).unwrap();
        session.deck().initialize(vec![ChatId::from_handle("alice")]).await;
        assert_eq!(session.deck().window_ids(), vec![ChatId::from_handle("alice")]);
    }
}
