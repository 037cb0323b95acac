//! Drag gesture interpretation for the front card.
//!
//! [`SwipeGestureInterpreter`] turns a pointer stream into live previews and
//! a single commit-or-snap-back decision at release:
//!
//! ```text
//!            drag_start                 drag_end / cancel
//!   Idle ─────────────────▶ Dragging ─────────────────────┐
//!    ▲                       │  ▲ drag_move               │
//!    │                       └──┘ (live preview)          │
//!    │                                                    ▼
//!    │          Δx > threshold ◀──────────────────── threshold test
//!    │◀───── advance() ┘                                  │ Δx ≤ threshold
//!    │                                                    ▼
//!    └──────────────── tick() after snap-back ──────── Settling
//! ```
//!
//! Only absolute horizontal displacement at release decides a commit;
//! vertical movement and velocity never do. The interpreter holds no
//! reference to the deck: every event receives the [`SwipeTarget`] to act
//! on, and the bound card is re-checked against the target's front card.

use std::time::{Duration, Instant};

use strum::Display;
use swipedeck_types::Vec2;
use tracing::{debug, trace};

use crate::config::DeckConfig;
use crate::constants;
use crate::content::CardKey;

/// What the interpreter drives: the deck's front card.
pub trait SwipeTarget {
    /// Current front card, if any.
    fn front_key(&self) -> Option<CardKey>;

    /// Width used to scale drag rotation.
    fn container_width(&self) -> f32;

    /// Show a live drag preview on `key`. `false` if `key` is no longer front.
    fn preview_front(&self, key: CardKey, drag: DragTransform) -> bool;

    /// Animate `key` back to its resting visual. `false` if no longer front.
    fn restore_front(&self, key: CardKey) -> bool;

    /// Commit: dismiss the front card.
    fn advance(&self) -> bool;
}

/// Live transform for the dragged front card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTransform {
    pub translation_x: f32,
    pub rotation: f32,
    pub opacity: f32,
}

impl DragTransform {
    /// Transform for horizontal displacement `dx` in a container `width` wide.
    pub fn for_displacement(dx: f32, width: f32, config: &DeckConfig) -> Self {
        let width = if width > 0.0 {
            width
        } else {
            constants::FALLBACK_CONTAINER_WIDTH
        };
        let fade = (dx.abs() / config.fade_distance).min(constants::MAX_DRAG_FADE);
        Self {
            translation_x: dx,
            rotation: dx / width * config.max_rotation,
            opacity: 1.0 - fade,
        }
    }
}

/// Gesture phase, without payload. Used for logs and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum GesturePhase {
    Idle,
    Dragging,
    Settling,
}

/// Ephemeral per-gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    card: CardKey,
    start: Vec2,
    current: Vec2,
}

impl DragState {
    fn delta(&self) -> Vec2 {
        self.current - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging(DragState),
    Settling { card: CardKey, until: Instant },
}

/// What a gesture event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// The event had no effect in the current phase.
    Ignored,
    /// A drag began on the front card.
    Started,
    /// Live preview applied.
    Preview(DragTransform),
    /// Released past the threshold; the deck advanced.
    Committed,
    /// Released short of the threshold; the card is animating back.
    SnappedBack,
    /// The bound card stopped being the front card mid-gesture.
    Lost,
}

/// Drag → preview / commit state machine for the deck's front card.
#[derive(Debug, Clone)]
pub struct SwipeGestureInterpreter {
    config: DeckConfig,
    phase: Phase,
}

impl SwipeGestureInterpreter {
    pub fn new(config: DeckConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        match self.phase {
            Phase::Idle => GesturePhase::Idle,
            Phase::Dragging(_) => GesturePhase::Dragging,
            Phase::Settling { .. } => GesturePhase::Settling,
        }
    }

    /// Current displacement from the drag start, while dragging.
    pub fn delta(&self) -> Option<Vec2> {
        match &self.phase {
            Phase::Dragging(drag) => Some(drag.delta()),
            _ => None,
        }
    }

    /// Begin a drag on whatever card is front right now.
    ///
    /// A start during settling interrupts the snap-back. A second start while
    /// already dragging is ignored (multi-touch is not interpreted).
    pub fn on_drag_start(&mut self, point: Vec2, target: &impl SwipeTarget) -> GestureOutcome {
        if matches!(self.phase, Phase::Dragging(_)) {
            return GestureOutcome::Ignored;
        }
        let Some(card) = target.front_key() else {
            return GestureOutcome::Ignored;
        };

        trace!(%card, x = point.x, y = point.y, "drag start");
        self.phase = Phase::Dragging(DragState {
            card,
            start: point,
            current: point,
        });
        GestureOutcome::Started
    }

    /// Apply the live preview for a movement sample.
    pub fn on_drag_move(&mut self, point: Vec2, target: &impl SwipeTarget) -> GestureOutcome {
        let Phase::Dragging(drag) = &mut self.phase else {
            return GestureOutcome::Ignored;
        };
        drag.current = point;
        let card = drag.card;
        let dx = drag.delta().x;

        let transform = DragTransform::for_displacement(dx, target.container_width(), &self.config);
        if !target.preview_front(card, transform) {
            debug!(%card, "dragged card is no longer front; dropping gesture");
            self.phase = Phase::Idle;
            return GestureOutcome::Lost;
        }
        GestureOutcome::Preview(transform)
    }

    /// Release at `point`: commit or snap back.
    pub fn on_drag_end(&mut self, point: Vec2, target: &impl SwipeTarget) -> GestureOutcome {
        if let Phase::Dragging(drag) = &mut self.phase {
            drag.current = point;
        }
        self.finish(target, Instant::now())
    }

    /// Cancellation is judged exactly like a release at the last sample.
    pub fn on_drag_cancel(&mut self, target: &impl SwipeTarget) -> GestureOutcome {
        self.finish(target, Instant::now())
    }

    /// Complete settling once the snap-back duration has passed.
    pub fn tick(&mut self, now: Instant) -> GesturePhase {
        if let Phase::Settling { card, until } = self.phase {
            if now >= until {
                trace!(%card, "settled");
                self.phase = Phase::Idle;
            }
        }
        self.phase()
    }

    /// Abandon any gesture in progress without touching the card.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    fn finish(&mut self, target: &impl SwipeTarget, now: Instant) -> GestureOutcome {
        let Phase::Dragging(drag) = self.phase else {
            return GestureOutcome::Ignored;
        };
        self.phase = Phase::Idle;

        if target.front_key() != Some(drag.card) {
            debug!(card = %drag.card, "released card is no longer front; ignoring");
            return GestureOutcome::Lost;
        }

        let dx = drag.delta().x;
        if dx > self.config.swipe_threshold {
            debug!(card = %drag.card, dx, "swipe committed");
            target.advance();
            return GestureOutcome::Committed;
        }

        debug!(card = %drag.card, dx, "swipe below threshold; snapping back");
        target.restore_front(drag.card);
        self.phase = Phase::Settling {
            card: drag.card,
            until: now + self.snap_back_duration(),
        };
        GestureOutcome::SnappedBack
    }

    fn snap_back_duration(&self) -> Duration {
        self.config.snap_back_duration()
    }
}
