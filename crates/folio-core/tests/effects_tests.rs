// Host-side tests for the smaller DOM effects' pure logic.

use folio_core::diffusion::{Diffusion, GLYPHS};
use folio_core::flicker::{Flicker, FlickerConfig, Lamp};
use folio_core::lightgrid::LightGrid;
use folio_core::marquee::copies_needed;
use folio_core::parallax::Parallax;
use folio_core::platform::{Browser, Platform};
use folio_core::resize::ResizeOverlay;
use folio_core::robot::{mouth_for_char, BlinkScheduler, MouthShape, RobotConfig, SpeechTrack};
use folio_core::spring::{Rumble, Spring2};
use folio_core::starfield::{StarInstance, Starfield, StarfieldConfig};
use folio_core::{STAR_DEPTH, STAR_NEAR};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn diffusion_preserves_length_and_whitespace() {
    let mut rng = StdRng::seed_from_u64(3);
    let target = "hello brave new world";
    let d = Diffusion::new(target, 20, &mut rng);
    for f in 0..20 {
        let shown = d.frame(f, &mut rng);
        assert_eq!(shown.chars().count(), target.chars().count());
        for (a, b) in shown.chars().zip(target.chars()) {
            if b == ' ' {
                assert_eq!(a, ' ');
            } else {
                assert!(a == b || GLYPHS.contains(&a));
            }
        }
    }
    assert!(d.is_done(20));
    assert_eq!(d.frame(20, &mut rng), target);
}

#[test]
fn diffusion_starts_scrambled() {
    let mut rng = StdRng::seed_from_u64(11);
    let target = "abcdefghijklmnopqrstuvwxyz";
    let d = Diffusion::new(target, 30, &mut rng);
    // lowercase letters are not glyphs, so nothing is resolved at frame 0
    assert!(d.frame(0, &mut rng).chars().all(|c| GLYPHS.contains(&c)));
}

#[test]
fn marquee_copies_cover_container() {
    for container in [0.0_f32, 1.0, 320.0, 1280.0, 2560.0, 5000.0] {
        for content in [40.0_f32, 333.0, 900.0, 6000.0] {
            let n = copies_needed(container, content);
            assert!(n >= 2);
            assert!(content * n as f32 >= container + content);
        }
    }
}

#[test]
fn starfield_stays_inside_depth_range() {
    let mut sf = Starfield::new(StarfieldConfig {
        count: 300,
        ..StarfieldConfig::default()
    });
    assert_eq!(sf.len(), 300);
    for i in 0..500 {
        sf.advance(0.05, (i % 10) as f32 / 10.0);
        assert!(sf
            .stars()
            .iter()
            .all(|s| s.z > STAR_NEAR && s.z <= STAR_DEPTH));
    }
    // huge frame hitches wrap too
    sf.advance(30.0, 1.0);
    assert!(sf.stars().iter().all(|s| s.z > STAR_NEAR && s.z <= STAR_DEPTH));
}

#[test]
fn starfield_instances_are_on_screen_and_brighter_when_near() {
    let sf = Starfield::new(StarfieldConfig::default());
    let inst = sf.instances(16.0 / 9.0);
    assert!(!inst.is_empty());
    assert!(inst
        .iter()
        .all(|s| s.pos[0].abs() <= 1.05 && s.pos[1].abs() <= 1.05));
    assert!(inst.iter().all(|s| (0.0..=1.0).contains(&s.brightness)));
}

#[test]
fn scroll_speed_moves_stars_faster() {
    let cfg = StarfieldConfig {
        count: 64,
        seed: 5,
        ..StarfieldConfig::default()
    };
    let mut slow = Starfield::new(cfg.clone());
    let mut fast = Starfield::new(cfg);
    let before: Vec<f32> = slow.stars().iter().map(|s| s.z).collect();
    slow.advance(0.01, 0.0);
    fast.advance(0.01, 1.0);
    let mut compared = 0;
    for (i, z0) in before.iter().enumerate() {
        let (zs, zf) = (slow.stars()[i].z, fast.stars()[i].z);
        // skip stars that wrapped to the back this frame
        if zs < *z0 && zf < *z0 {
            assert!(z0 - zf > z0 - zs);
            compared += 1;
        }
    }
    assert!(compared > 0);
}

#[test]
fn star_buffer_capacity_respects_device_limit() {
    // 256 MiB is the WebGPU default max buffer size
    let limit = 256 << 20;
    let fit = (limit / std::mem::size_of::<StarInstance>() as u64) as usize;
    assert_eq!(StarInstance::buffer_capacity(900, limit), 900);
    assert_eq!(StarInstance::buffer_capacity(50_000_000, limit), fit);
    assert_eq!(StarInstance::buffer_capacity(0, limit), 1);
    assert_eq!(StarInstance::buffer_capacity(10, 0), 1);
}

#[test]
fn spring_settles_after_kick() {
    let mut s = Spring2::new(420.0, 14.0);
    s.kick(Vec2::new(300.0, -120.0));
    s.step(0.016);
    assert!(!s.is_settled());
    for _ in 0..600 {
        s.step(1.0 / 60.0);
    }
    assert!(s.is_settled());
    assert_eq!(s.pos, Vec2::ZERO);
}

#[test]
fn rumble_decays_to_floor() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut r = Rumble::new(5.0);
    r.trigger(10.0);
    let first = r.sample(0.0, &mut rng);
    assert!(first.x.abs() <= 10.0 && first.y.abs() <= 10.0);
    for _ in 0..300 {
        r.sample(1.0 / 60.0, &mut rng);
    }
    assert_eq!(r.sample(1.0 / 60.0, &mut rng), Vec2::ZERO);
    r.set_floor(2.0);
    let v = r.sample(1.0 / 60.0, &mut rng);
    assert!(v.x.abs() <= 2.0 && v.y.abs() <= 2.0);
}

#[test]
fn parallax_eases_toward_pointer() {
    let mut p = Parallax::new(6.0);
    p.set_pointer(1000.0, 0.0, 1000.0, 500.0);
    assert_eq!(p.target, Vec2::new(1.0, -1.0));
    p.step(1.0 / 60.0);
    assert!(p.current.x > 0.0 && p.current.x < 1.0);
    for _ in 0..600 {
        p.step(1.0 / 60.0);
    }
    assert!((p.current - p.target).length() < 1e-3);
    let near = p.offset(0.2, 24.0);
    let far = p.offset(1.0, 24.0);
    assert!(far.x > near.x);
    p.release();
    assert_eq!(p.target, Vec2::ZERO);
}

#[test]
fn light_grid_glows_near_pointer() {
    let g = LightGrid::new(8, 4);
    let pointer = g.cell_center(1, 1);
    let near = g.intensity(1, 1, 0.0, Some(pointer));
    let without = g.intensity(1, 1, 0.0, None);
    assert!(near > without);
    assert!(g.frame(1.3, Some(pointer)).iter().all(|v| (0.0..=1.0).contains(v)));
    assert_eq!(g.frame(0.0, None).len(), 32);
}

#[test]
fn light_grid_clock_stays_within_one_period() {
    let grid = LightGrid::new(4, 4);
    let period = grid.period().unwrap();
    let mut t = 0.0_f32;
    // a week, a minute at a time
    for _ in 0..(7 * 24 * 3600 / 60) {
        t = grid.advance(t, 60.0);
    }
    assert!((0.0..=period).contains(&t), "clock drifted to {t}");

    // folding the clock leaves the picture unchanged
    let folded = grid.advance(0.0, period + 0.25);
    let a = grid.frame(0.25, None);
    let b = grid.frame(folded, None);
    for (x, y) in a.iter().zip(&b) {
        assert!((x - y).abs() < 1e-3);
    }
}

#[test]
fn flicker_segments_are_well_formed() {
    let mut f = Flicker::new(FlickerConfig::default(), 42);
    let mut dips = 0;
    for _ in 0..2000 {
        let seg = f.next_segment();
        assert!((0.0..=1.0).contains(&seg.intensity));
        assert!(seg.hold_ms > 0.0);
        if seg.intensity < 0.9 {
            dips += 1;
        }
    }
    assert!(dips > 0, "flicker never dipped");
}

#[test]
fn lamp_toggles() {
    let mut lamp = Lamp::default();
    assert_eq!(lamp.css_value(), "1");
    assert!(!lamp.toggle());
    assert_eq!(lamp.css_value(), "0");
}

#[test]
fn resize_overlay_hides_after_quiet_period() {
    let mut o = ResizeOverlay::new(250.0);
    assert!(!o.poll(0.0));
    assert!(o.on_resize(0.0));
    assert!(!o.on_resize(100.0));
    assert!(!o.poll(300.0));
    assert!(o.is_visible());
    assert!(o.poll(350.0));
    assert!(!o.is_visible());
    assert!(!o.poll(1000.0));
}

#[test]
fn blink_scheduler_blinks_briefly() {
    let cfg = RobotConfig::default();
    let mut b = BlinkScheduler::new(&cfg, 0.0, 9);
    let mut closed = 0;
    let mut t = 0.0;
    while t < 20_000.0 {
        if b.update(t) {
            closed += 1;
        }
        t += 10.0;
    }
    assert!(closed > 0);
    // eyes are shut for a small fraction of the time
    assert!(closed < 200);
}

#[test]
fn speech_mouths() {
    assert_eq!(mouth_for_char('a'), MouthShape::Wide);
    assert_eq!(mouth_for_char('E'), MouthShape::Open);
    assert_eq!(mouth_for_char('t'), MouthShape::Closed);
    assert_eq!(mouth_for_char(' '), MouthShape::Rest);
    assert_eq!(SpeechTrack::new("hi!").len(), 3);
}

#[test]
fn browser_detection() {
    let chrome = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
    let edge = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.2478.51";
    let safari_ios = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    let firefox = "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";
    let opera = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 OPR/110.0.0.0";

    assert_eq!(Platform::from_user_agent(chrome).browser, Browser::Chrome);
    assert_eq!(Platform::from_user_agent(edge).browser, Browser::Edge);
    assert_eq!(Platform::from_user_agent(firefox).browser, Browser::Firefox);
    assert_eq!(Platform::from_user_agent(opera).browser, Browser::Opera);
    let ios = Platform::from_user_agent(safari_ios);
    assert_eq!(ios.browser, Browser::Safari);
    assert!(ios.mobile);
    assert_eq!(ios.css_classes(), vec!["is-safari", "is-mobile"]);
    assert_eq!(Platform::from_user_agent("curl/8.0").browser, Browser::Other);
}
