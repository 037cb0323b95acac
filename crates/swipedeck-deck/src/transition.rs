//! Cosmetic transitions the container plays on card views.
//!
//! Transitions are descriptions, not timers: the deck hands them to the
//! [`DeckContainer`](crate::DeckContainer) and moves on. Logical state never
//! waits on them.

use std::time::Duration;

use strum::{Display, EnumString};
use swipedeck_types::Vec2;

use crate::config::DeckConfig;
use crate::constants;
use crate::visual::CardVisual;

/// Timing curve for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    /// Slight overshoot, used for snapping a card back into place.
    Spring,
}

/// Animate a card view from whatever it shows now to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub target: CardVisual,
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    /// Fly the front card off the trailing (positive-x) edge while rotating
    /// and fading it out.
    pub fn exit(from: CardVisual, container_width: f32, config: &DeckConfig) -> Self {
        let target = CardVisual {
            translation: Vec2::new(container_width * 1.5, from.translation.y),
            rotation: constants::EXIT_ROTATION,
            opacity: 0.0,
            interactive: false,
            ..from
        };
        Self {
            target,
            duration: config.exit_duration(),
            easing: Easing::EaseOut,
        }
    }

    /// Return a dragged front card to its resting visual.
    pub fn snap_back(resting: CardVisual, config: &DeckConfig) -> Self {
        Self {
            target: resting,
            duration: config.snap_back_duration(),
            easing: Easing::Spring,
        }
    }

    /// Move a card to its new stack position after the window shifts.
    pub fn restack(target: CardVisual, config: &DeckConfig) -> Self {
        Self {
            target,
            duration: config.snap_back_duration(),
            easing: Easing::EaseOut,
        }
    }
}
