//! Card visual state and the stacking policy.
//!
//! The stacking look is a pure mapping from a card's position in the window
//! to its [`CardVisual`]. Nothing about it is stored per card, so re-applying
//! it after the window shifts is always correct.

use swipedeck_types::Vec2;

use crate::config::DeckConfig;

/// Everything the container needs to draw one card.
///
/// Applied as a single value so translation, rotation, and opacity never
/// land out of step with each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    /// Translation relative to the card's resting slot.
    pub translation: Vec2,
    /// Rotation in radians (positive = clockwise).
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Higher draws on top.
    pub z_order: i32,
    /// Only the front card accepts pointer input.
    pub interactive: bool,
}

impl CardVisual {
    /// Full size, fully opaque, untransformed, on top, interactive.
    pub const IDENTITY: CardVisual = CardVisual {
        translation: Vec2::ZERO,
        rotation: 0.0,
        scale: 1.0,
        opacity: 1.0,
        z_order: 0,
        interactive: true,
    };

    /// Whether translation and rotation are both at rest.
    pub fn is_untransformed(&self) -> bool {
        self.translation == Vec2::ZERO && self.rotation == 0.0
    }
}

/// Visual for the card at `position` in a window of `visible` cards.
///
/// Position 0 is the front card: identity transform, top z-order, interactive.
/// Each step back shrinks, lifts, and fades the card, clamped at the
/// configured floors.
pub fn stack_visual(position: usize, visible: usize, config: &DeckConfig) -> CardVisual {
    let k = position as f32;
    let scale = (1.0 - config.scale_step * k).max(config.min_scale);
    let opacity = if position == 0 {
        1.0
    } else {
        (1.0 - config.opacity_step * k).max(config.min_opacity)
    };

    CardVisual {
        translation: Vec2::new(0.0, -config.offset_step * k),
        rotation: 0.0,
        scale,
        opacity,
        z_order: visible.saturating_sub(position) as i32,
        interactive: position == 0,
    }
}
