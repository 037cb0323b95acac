//! Drag gestures driving a real card stack.

mod common;

use std::time::{Duration, Instant};

use common::deck;
use swipedeck_deck::{
    CardVisual, DeckEvent, GestureOutcome, GesturePhase, SwipeGestureInterpreter,
};
use swipedeck_types::{Bounds, Vec2};

fn release_after(
    interp: &mut SwipeGestureInterpreter,
    deck: &common::TestDeck,
    dx: f32,
) -> GestureOutcome {
    let start = Vec2::new(40.0, 200.0);
    interp.on_drag_start(start, deck);
    for step in 1..=4 {
        let x = start.x + dx * step as f32 / 4.0;
        interp.on_drag_move(Vec2::new(x, start.y + step as f32), deck);
    }
    interp.on_drag_end(Vec2::new(start.x + dx, start.y + 4.0), deck)
}

#[tokio::test]
async fn test_swipe_past_threshold_advances_once() {
    let (deck, _log) = deck(&["a", "b", "c"]);
    deck.initialize(vec!["a", "b", "c"]).await;
    let mut events = deck.subscribe();
    let mut interp = SwipeGestureInterpreter::new(deck.config());

    assert_eq!(release_after(&mut interp, &deck, 150.0), GestureOutcome::Committed);

    assert_eq!(deck.front_index(), 1);
    assert_eq!(deck.window_ids(), vec!["b", "c"]);
    assert_eq!(
        events.try_recv().unwrap(),
        DeckEvent::Advanced { id: "a", front_index: 1 }
    );
    assert!(events.try_recv().is_err());
    assert_eq!(interp.phase(), GesturePhase::Idle);
}

#[tokio::test]
async fn test_short_swipe_snaps_back_to_identity() {
    let (deck, _log) = deck(&["a", "b", "c"]);
    deck.initialize(vec!["a", "b", "c"]).await;
    let front = deck.snapshot().window[0].0;
    let mut interp = SwipeGestureInterpreter::new(deck.config());

    assert_eq!(release_after(&mut interp, &deck, 60.0), GestureOutcome::SnappedBack);
    assert_eq!(deck.front_index(), 0);

    let container = deck.container();
    let visual = container.visual(front);
    assert!(visual.is_untransformed());
    assert_eq!(visual.opacity, 1.0);
    assert_eq!(visual.scale, 1.0);
    assert!(visual.interactive);

    let (key, snap) = container.animations.last().copied().unwrap();
    assert_eq!(key, front);
    assert_eq!(snap.duration, deck.config().snap_back_duration());
    drop(container);

    assert_eq!(interp.phase(), GesturePhase::Settling);
    interp.tick(Instant::now() + Duration::from_secs(1));
    assert_eq!(interp.phase(), GesturePhase::Idle);
}

#[tokio::test]
async fn test_live_preview_moves_front_card_only() {
    let (deck, _log) = deck(&["a", "b"]);
    deck.layout(Bounds::new(0.0, 0.0, 400.0, 700.0));
    deck.initialize(vec!["a", "b"]).await;
    let snap = deck.snapshot();
    let (front, back) = (snap.window[0].0, snap.window[1].0);
    let back_before = deck.container().visual(back);
    let mut interp = SwipeGestureInterpreter::new(deck.config());

    interp.on_drag_start(Vec2::new(0.0, 0.0), &deck);
    interp.on_drag_move(Vec2::new(80.0, 25.0), &deck);

    let container = deck.container();
    let visual = container.visual(front);
    assert_eq!(visual.translation.x, 80.0);
    // Vertical movement is not previewed.
    assert_eq!(visual.translation.y, 0.0);
    assert!((visual.rotation - 80.0 / 400.0 * 0.2).abs() < 1e-6);
    assert!((visual.opacity - 0.6).abs() < 1e-6);
    assert_eq!(container.visual(back), back_before);
}

#[tokio::test]
async fn test_empty_bounds_fall_back_to_default_width() {
    let (deck, _log) = deck(&["a"]);
    deck.layout(Bounds::new(0.0, 0.0, 400.0, 0.0));
    deck.initialize(vec!["a"]).await;
    let front = deck.snapshot().window[0].0;
    let mut interp = SwipeGestureInterpreter::new(deck.config());

    interp.on_drag_start(Vec2::ZERO, &deck);
    interp.on_drag_move(Vec2::new(75.0, 0.0), &deck);

    let visual = deck.container().visual(front);
    assert!((visual.rotation - 75.0 / 375.0 * 0.2).abs() < 1e-6);
}

#[tokio::test]
async fn test_commit_from_dragged_position_exits_from_there() {
    let (deck, _log) = deck(&["a", "b"]);
    deck.initialize(vec!["a", "b"]).await;
    let front = deck.snapshot().window[0].0;
    let mut interp = SwipeGestureInterpreter::new(deck.config());

    release_after(&mut interp, &deck, 220.0);

    let container = deck.container();
    assert_eq!(container.dismissed, vec![front]);
    let exit = container.visual(front);
    assert_eq!(exit.opacity, 0.0);
    assert!(!exit.interactive);
    assert_ne!(exit, CardVisual::IDENTITY);
}

#[tokio::test]
async fn test_button_advance_mid_drag_rebinds() {
    let (deck, _log) = deck(&["a", "b", "c"]);
    deck.initialize(vec!["a", "b", "c"]).await;
    let mut interp = SwipeGestureInterpreter::new(deck.config());

    interp.on_drag_start(Vec2::ZERO, &deck);
    deck.advance();
    assert_eq!(
        interp.on_drag_move(Vec2::new(30.0, 0.0), &deck),
        GestureOutcome::Lost
    );

    // The next gesture binds to the new front card.
    assert_eq!(release_after(&mut interp, &deck, 130.0), GestureOutcome::Committed);
    assert_eq!(deck.window_ids(), vec!["c"]);
}

#[tokio::test]
async fn test_gestures_on_empty_deck_do_nothing() {
    let (deck, _log) = deck(&["a"]);
    deck.initialize(vec!["a"]).await;
    deck.advance();
    let mut interp = SwipeGestureInterpreter::new(deck.config());

    assert_eq!(interp.on_drag_start(Vec2::ZERO, &deck), GestureOutcome::Ignored);
    assert_eq!(
        interp.on_drag_end(Vec2::new(500.0, 0.0), &deck),
        GestureOutcome::Ignored
    );
    assert_eq!(deck.front_index(), 1);
}

#[tokio::test]
async fn test_cancel_past_threshold_commits() {
    let (deck, _log) = deck(&["a", "b"]);
    deck.initialize(vec!["a", "b"]).await;
    let mut interp = SwipeGestureInterpreter::new(deck.config());

    interp.on_drag_start(Vec2::ZERO, &deck);
    interp.on_drag_move(Vec2::new(101.0, 0.0), &deck);
    assert_eq!(interp.on_drag_cancel(&deck), GestureOutcome::Committed);
    assert_eq!(deck.window_ids(), vec!["b"]);
}
