//! Deck tuning constants.
//!
//! Centralizes the numbers behind the stacking look and the swipe feel.
//! Every value here is the default for the matching [`DeckConfig`](crate::DeckConfig) field.

use std::time::Duration;

/// Number of cards mounted at once.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

// ============================================================================
// STACKING
// ============================================================================

/// Scale lost per position behind the front card.
pub const SCALE_STEP: f32 = 0.05;

/// Smallest scale a background card shrinks to.
pub const MIN_SCALE: f32 = 0.8;

/// Vertical offset per position behind the front card (negative = upward peek).
pub const OFFSET_STEP: f32 = 20.0;

/// Opacity lost per position behind the front card.
pub const OPACITY_STEP: f32 = 0.2;

/// Background cards never fade below this.
pub const MIN_OPACITY: f32 = 0.4;

// ============================================================================
// SWIPE
// ============================================================================

/// Horizontal displacement (positive x) past which a release commits.
pub const SWIPE_THRESHOLD: f32 = 100.0;

/// Drag distance at which the live fade reaches its maximum.
pub const FADE_DISTANCE: f32 = 200.0;

/// Maximum fade applied while dragging (opacity never drops below 1 - this).
pub const MAX_DRAG_FADE: f32 = 0.5;

/// Rotation (radians) for a drag spanning the full container width.
pub const MAX_ROTATION: f32 = 0.2;

/// Container width assumed before the host reports any layout.
pub const FALLBACK_CONTAINER_WIDTH: f32 = 375.0;

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Exit transition for an advanced front card.
pub const EXIT_DURATION: Duration = Duration::from_millis(250);

/// Rotation the exiting card ends at.
pub const EXIT_ROTATION: f32 = 0.3;

/// Snap-back after a release below the threshold.
pub const SNAP_BACK_DURATION: Duration = Duration::from_millis(200);

/// Capacity of the deck event broadcast channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;
