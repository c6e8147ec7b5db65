// Host-side tests for data-attribute config overrides.

use fnv::FnvHashMap;
use folio_core::audio_map::Curve;
use folio_core::theme::ThemeOverride;
use folio_core::{FolioError, SiteConfig, STAR_COUNT_MAX, VIEW_STAGGER_MAX_MS};

fn attrs(pairs: &[(&str, &str)]) -> FnvHashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn overrides_apply() {
    let (cfg, errors) = SiteConfig::from_attributes(&attrs(&[
        ("data-folio-scroll-top-speed", "1500"),
        ("data-folio-audio-curve", "linear"),
        ("data-folio-audio-enabled", "off"),
        ("data-folio-intro-skip", ""),
        ("data-folio-intro-lines", "HELLO | WORLD"),
        ("data-folio-theme", "dark"),
        ("data-folio-star-count", "120"),
        ("data-folio-clock-12h", "yes"),
    ]));
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(cfg.scroll.top_speed, 1500.0);
    assert_eq!(cfg.audio.curve, Curve::Linear);
    assert!(!cfg.audio.enabled);
    assert!(cfg.intro.skip);
    assert_eq!(cfg.intro.lines, vec!["HELLO", "WORLD"]);
    assert_eq!(cfg.theme, ThemeOverride::Dark);
    assert_eq!(cfg.starfield.count, 120);
    assert!(cfg.clock_twelve_hour);
}

#[test]
fn bad_values_keep_defaults_and_report() {
    let defaults = SiteConfig::default();
    let (cfg, errors) = SiteConfig::from_attributes(&attrs(&[
        ("data-folio-scroll-top-speed", "-3"),
        ("data-folio-audio-master-gain", "2.0"),
        ("data-folio-star-count", "lots"),
        ("data-folio-bogus", "1"),
    ]));
    assert_eq!(errors.len(), 4);
    assert!(errors.contains(&FolioError::UnknownConfigKey("bogus".into())));
    assert_eq!(cfg, defaults);
}

#[test]
fn unrelated_attributes_are_ignored() {
    let (cfg, errors) = SiteConfig::from_attributes(&attrs(&[
        ("class", "body"),
        ("data-wf-page", "123"),
    ]));
    assert!(errors.is_empty());
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn empty_ambient_url_clears_it() {
    let mut cfg = SiteConfig::default();
    cfg.apply_override("audio-ambient-url", "https://cdn.example.com/hum.mp3")
        .unwrap();
    assert!(cfg.audio.ambient_url.is_some());
    cfg.apply_override("audio-ambient-url", "  ").unwrap();
    assert!(cfg.audio.ambient_url.is_none());
}

#[test]
fn star_count_above_cap_is_rejected() {
    let (cfg, errors) =
        SiteConfig::from_attributes(&attrs(&[("data-folio-star-count", "50000000")]));
    assert_eq!(
        errors,
        vec![FolioError::InvalidConfigValue {
            key: "star-count".into(),
            value: "50000000".into(),
        }]
    );
    assert_eq!(cfg.starfield.count, SiteConfig::default().starfield.count);

    let (cfg, errors) = SiteConfig::from_attributes(&attrs(&[(
        "data-folio-star-count",
        &STAR_COUNT_MAX.to_string(),
    )]));
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(cfg.starfield.count, STAR_COUNT_MAX);
}

#[test]
fn view_stagger_above_cap_is_rejected() {
    let mut cfg = SiteConfig::default();
    assert!(matches!(
        cfg.apply_override("view-stagger", "4294967295"),
        Err(FolioError::InvalidConfigValue { .. })
    ));
    assert_eq!(cfg.views.stagger_ms, SiteConfig::default().views.stagger_ms);
    cfg.apply_override("view-stagger", &VIEW_STAGGER_MAX_MS.to_string())
        .unwrap();
    assert_eq!(cfg.views.stagger_ms, VIEW_STAGGER_MAX_MS);
}
