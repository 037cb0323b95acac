//! Shared identity, preview, and geometry types for swipedeck.
//!
//! This crate is the leaf of the workspace: typed chat identifiers, the
//! display-able chat preview entity, and the small 2D vocabulary the deck and
//! its hosts exchange. It has **no internal swipedeck dependencies**.
//!
//! |-------------------|----------------------------------------------|
//! | Type              | Purpose                                      |
//! |-------------------|----------------------------------------------|
//! | [`ChatId`]        | Which chat a card previews                   |
//! | [`ChatPreview`]   | Resolved, display-able chat summary          |
//! | [`Vec2`]          | Pointer positions and drag deltas            |
//! | [`Bounds`]        | Container layout rectangle                   |
//! |-------------------|----------------------------------------------|

pub mod geometry;
pub mod ids;
pub mod preview;

pub use geometry::{Bounds, Vec2};
pub use ids::ChatId;
pub use preview::ChatPreview;
