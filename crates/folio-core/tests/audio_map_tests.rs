// Host-side tests for the velocity -> audio parameter mapping.

use folio_core::audio_map::{map_velocity, AudioConfig, Curve, Ramp, RampKind};

fn configs() -> [AudioConfig; 2] {
    [
        AudioConfig {
            curve: Curve::Linear,
            ..AudioConfig::default()
        },
        AudioConfig {
            curve: Curve::Exponential,
            ..AudioConfig::default()
        },
    ]
}

#[test]
fn endpoints_hit_configured_bounds() {
    for cfg in configs() {
        let lo = map_velocity(0.0, &cfg);
        let hi = map_velocity(1.0, &cfg);
        assert!((lo.cutoff_hz - cfg.min_cutoff_hz).abs() < 1e-2);
        assert!((hi.cutoff_hz - cfg.max_cutoff_hz).abs() < 1e-1);
        assert!((lo.sub_gain - cfg.sub_gain_min).abs() < 1e-6);
        assert!((hi.sub_gain - cfg.sub_gain_max).abs() < 1e-6);
        assert!((lo.playback_rate - cfg.pitch_min).abs() < 1e-6);
        assert!((hi.playback_rate - cfg.pitch_max).abs() < 1e-6);
    }
}

#[test]
fn mapping_is_monotonic_in_velocity() {
    for cfg in configs() {
        let mut prev = map_velocity(0.0, &cfg);
        for i in 1..=100 {
            let p = map_velocity(i as f32 / 100.0, &cfg);
            assert!(p.cutoff_hz >= prev.cutoff_hz);
            assert!(p.sub_gain >= prev.sub_gain);
            assert!(p.noise_gain >= prev.noise_gain);
            assert!(p.playback_rate >= prev.playback_rate);
            prev = p;
        }
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    let cfg = AudioConfig::default();
    assert_eq!(map_velocity(-3.0, &cfg), map_velocity(0.0, &cfg));
    assert_eq!(map_velocity(7.0, &cfg), map_velocity(1.0, &cfg));
    assert_eq!(map_velocity(f32::NAN, &cfg), map_velocity(0.0, &cfg));
}

#[test]
fn exponential_cutoff_is_geometric_midpoint() {
    let cfg = AudioConfig {
        curve: Curve::Exponential,
        ..AudioConfig::default()
    };
    let mid = map_velocity(0.5, &cfg).cutoff_hz;
    let expected = (cfg.min_cutoff_hz * cfg.max_cutoff_hz).sqrt();
    assert!((mid - expected).abs() / expected < 1e-3);
}

#[test]
fn exponential_ramp_interpolates_in_log_space() {
    let r = Ramp::plan(RampKind::Exponential, 100.0, 10_000.0, 0.0, 1.0);
    assert!((r.value_at(0.5) - 1000.0).abs() < 0.5);
    assert!(r.end > r.start);
}

#[test]
fn zero_length_ramp_still_moves_forward_in_time() {
    let r = Ramp::plan(RampKind::Linear, 0.2, 0.8, 5.0, 0.0);
    assert!(r.end > r.start);
    assert!((r.value_at(r.end) - 0.8).abs() < 1e-6);
}
