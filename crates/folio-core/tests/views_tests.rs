// Host-side tests for view switching.

use folio_core::views::ViewSwitcher;
use folio_core::FolioError;

fn switcher() -> ViewSwitcher {
    ViewSwitcher::new(
        vec!["work".into(), "about".into(), "lab".into(), "contact".into()],
        None,
        80,
    )
    .unwrap()
}

#[test]
fn exactly_one_view_visible_through_any_sequence() {
    let mut s = switcher();
    assert_eq!(s.visible(), vec!["work"]);
    for name in ["about", "about", "lab", "work", "contact", "lab"] {
        let _ = s.switch_to(name, 3).unwrap();
        assert_eq!(s.visible(), vec![name]);
    }
}

#[test]
fn transition_hides_all_others() {
    let mut s = switcher();
    let t = s.switch_to("lab", 0).unwrap().unwrap();
    assert_eq!(t.show, "lab");
    assert_eq!(t.hide, vec!["work", "about", "contact"]);
    assert!(!t.hide.contains(&t.show));
}

#[test]
fn widgets_are_staggered() {
    let mut s = switcher();
    let t = s.switch_to("about", 4).unwrap().unwrap();
    assert_eq!(t.widget_schedule, vec![(0, 0), (1, 80), (2, 160), (3, 240)]);
}

#[test]
fn unknown_view_leaves_state_untouched() {
    let mut s = switcher();
    s.switch_to("contact", 0).unwrap();
    assert_eq!(
        s.switch_to("blog", 0),
        Err(FolioError::UnknownView("blog".into()))
    );
    assert_eq!(s.current(), "contact");
}

#[test]
fn initial_transition_matches_initial_view() {
    let s = ViewSwitcher::new(vec!["a".into(), "b".into()], Some("b"), 10).unwrap();
    let t = s.initial_transition(2);
    assert_eq!(t.show, "b");
    assert_eq!(t.hide, vec!["a"]);
}

#[test]
fn duplicate_view_names_are_rejected() {
    let err = ViewSwitcher::new(
        vec!["work".into(), "lab".into(), "work".into()],
        None,
        80,
    )
    .unwrap_err();
    assert_eq!(err, FolioError::DuplicateView("work".into()));
}

#[test]
fn huge_stagger_saturates_instead_of_overflowing() {
    let mut s = ViewSwitcher::new(vec!["a".into(), "b".into()], None, u32::MAX).unwrap();
    let t = s.switch_to("b", 3).unwrap().unwrap();
    assert_eq!(
        t.widget_schedule,
        vec![(0, 0), (1, u32::MAX), (2, u32::MAX)]
    );
}
