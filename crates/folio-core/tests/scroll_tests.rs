// Host-side tests for the scroll velocity model and its update bus.

use folio_core::scroll::{ScrollConfig, ScrollPhysics, ScrollSample, ScrollTracker, TouchDrag};
use folio_core::{DELTA_MODE_LINE, DELTA_MODE_PIXEL};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn speed_never_goes_negative() {
    let mut p = ScrollPhysics::new(ScrollConfig::default());
    let deltas = [120.0, -40.0, 3.0, -900.0, 0.5, 2000.0, -2000.0, 7.0];
    for (i, d) in deltas.iter().cycle().take(400).enumerate() {
        if i % 3 == 0 {
            p.impulse(*d);
        }
        // large and tiny steps alike
        p.step(if i % 5 == 0 { 0.25 } else { 1.0 / 60.0 });
        let s = p.sample();
        assert!(s.speed >= 0.0, "negative speed {} at step {i}", s.speed);
        assert!((0.0..=1.0).contains(&s.normalized));
        assert!((s.velocity.abs() - s.speed).abs() < 1e-3);
    }
}

#[test]
fn speed_decays_to_rest() {
    let mut p = ScrollPhysics::new(ScrollConfig::default());
    p.impulse(300.0);
    assert!(p.is_moving());
    let mut prev = p.sample().speed;
    for _ in 0..600 {
        p.step(1.0 / 60.0);
        let s = p.sample().speed;
        assert!(s <= prev, "speed increased without input");
        prev = s;
    }
    assert!(!p.is_moving());
    assert_eq!(p.sample(), ScrollSample::default());
}

#[test]
fn impulse_is_proportional_then_capped() {
    let cfg = ScrollConfig::default();
    let mut small = ScrollPhysics::new(cfg.clone());
    let mut double = ScrollPhysics::new(cfg.clone());
    small.impulse(10.0);
    double.impulse(20.0);
    assert!((double.sample().speed - 2.0 * small.sample().speed).abs() < 1e-3);

    let mut huge = ScrollPhysics::new(cfg.clone());
    huge.impulse(1.0e5);
    assert!((huge.sample().speed - cfg.max_impulse / cfg.mass).abs() < 1e-3);
}

#[test]
fn heavier_mass_accelerates_less() {
    let light = ScrollConfig::default();
    let heavy = ScrollConfig {
        mass: light.mass * 4.0,
        ..light.clone()
    };
    let mut a = ScrollPhysics::new(light);
    let mut b = ScrollPhysics::new(heavy);
    a.impulse(50.0);
    b.impulse(50.0);
    assert!(b.sample().speed < a.sample().speed);
}

#[test]
fn direction_follows_wheel_sign_and_reversal_bleeds_speed() {
    let mut p = ScrollPhysics::new(ScrollConfig::default());
    p.impulse(100.0);
    assert_eq!(p.sample().direction, 1.0);
    let before = p.sample().speed;
    p.impulse(-10.0);
    // a small opposite flick slows us down but keeps the direction
    assert!(p.sample().speed < before);
    assert_eq!(p.sample().direction, 1.0);
    p.impulse(-500.0);
    assert_eq!(p.sample().direction, -1.0);
    assert!(p.sample().velocity < 0.0);
}

#[test]
fn speed_is_bounded_by_twice_top_speed() {
    let cfg = ScrollConfig::default();
    let mut p = ScrollPhysics::new(cfg.clone());
    for _ in 0..100 {
        p.impulse(1.0e4);
    }
    assert!(p.sample().speed <= cfg.top_speed * 2.0);
    assert_eq!(p.sample().normalized, 1.0);
}

#[test]
fn tracker_emits_while_moving_and_once_at_rest() {
    let mut t = ScrollTracker::new(ScrollConfig::default());
    let samples = Rc::new(RefCell::new(Vec::<ScrollSample>::new()));
    let s = samples.clone();
    t.subscribe(move |sample| s.borrow_mut().push(*sample));

    // idle tracker stays quiet
    assert!(!t.tick(1.0 / 60.0));
    assert!(samples.borrow().is_empty());

    t.on_wheel(4.0, DELTA_MODE_LINE);
    let mut ticks = 0;
    while t.tick(1.0 / 60.0) {
        ticks += 1;
        assert!(ticks < 10_000, "tracker never settled");
    }
    let got = samples.borrow();
    assert!(got.len() >= 2);
    assert!(got[0].speed > 0.0);
    assert_eq!(got.last().map(|s| s.speed), Some(0.0));
    assert_eq!(got.iter().filter(|s| s.speed == 0.0).count(), 1);
}

#[test]
fn tracker_notifies_every_listener() {
    let mut t = ScrollTracker::new(ScrollConfig::default());
    let hits = Rc::new(RefCell::new([0u32; 3]));
    let mut ids = Vec::new();
    for i in 0..3 {
        let h = hits.clone();
        ids.push(t.subscribe(move |_| h.borrow_mut()[i] += 1));
    }
    t.on_wheel(50.0, DELTA_MODE_PIXEL);
    t.tick(0.016);
    assert_eq!(*hits.borrow(), [1, 1, 1]);

    assert!(t.unsubscribe(ids[1]));
    t.tick(0.016);
    assert_eq!(*hits.borrow(), [2, 1, 2]);
}

#[test]
fn touch_drag_feeds_the_tracker_like_a_wheel() {
    let mut drag = TouchDrag::default();
    assert_eq!(drag.move_to(300.0), None, "move without a touch start");

    drag.start(400.0);
    let mut tracker = ScrollTracker::new(ScrollConfig::default());
    let mut total = 0.0;
    for y in [380.0, 350.0, 310.0, 260.0] {
        let dy = drag.move_to(y).unwrap();
        total += dy;
        tracker.on_wheel(dy, DELTA_MODE_PIXEL);
    }
    assert_eq!(total, 140.0);
    tracker.tick(1.0 / 60.0);
    assert!(tracker.sample().velocity > 0.0, "finger up scrolls down");

    assert_eq!(drag.move_to(f32::NAN), None);
    assert!(drag.is_active());
    drag.end();
    assert_eq!(drag.move_to(100.0), None);
}
