//! Class-based view switching with staggered widget entry.

use crate::constants::WIDGET_STAGGER_MS;
use crate::error::{FolioError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    pub initial: Option<String>,
    pub stagger_ms: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial: None,
            stagger_ms: WIDGET_STAGGER_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewTransition {
    pub hide: Vec<String>,
    pub show: String,
    /// `(widget_index, delay_ms)` for widgets inside the shown view.
    pub widget_schedule: Vec<(usize, u32)>,
}

#[derive(Clone, Debug)]
pub struct ViewSwitcher {
    views: Vec<String>,
    current: usize,
    stagger_ms: u32,
}

impl ViewSwitcher {
    /// Starts on `initial`, or on the first view when `None`.
    pub fn new(views: Vec<String>, initial: Option<&str>, stagger_ms: u32) -> Result<Self> {
        if views.is_empty() {
            return Err(FolioError::NoViews);
        }
        for (i, name) in views.iter().enumerate() {
            if views[..i].contains(name) {
                return Err(FolioError::DuplicateView(name.clone()));
            }
        }
        let current = match initial {
            Some(name) => views
                .iter()
                .position(|v| v == name)
                .ok_or_else(|| FolioError::UnknownView(name.to_string()))?,
            None => 0,
        };
        Ok(Self {
            views,
            current,
            stagger_ms,
        })
    }

    pub fn current(&self) -> &str {
        &self.views[self.current]
    }

    pub fn views(&self) -> &[String] {
        &self.views
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.current() == name
    }

    /// Names of visible views. Always exactly one.
    pub fn visible(&self) -> Vec<&str> {
        self.views
            .iter()
            .filter(|v| self.is_visible(v))
            .map(String::as_str)
            .collect()
    }

    /// Transition for the initial paint: every other view hidden.
    pub fn initial_transition(&self, widget_count: usize) -> ViewTransition {
        self.transition_to(self.current, widget_count)
    }

    pub fn switch_to(&mut self, name: &str, widget_count: usize) -> Result<Option<ViewTransition>> {
        let idx = self
            .views
            .iter()
            .position(|v| v == name)
            .ok_or_else(|| FolioError::UnknownView(name.to_string()))?;
        if idx == self.current {
            return Ok(None);
        }
        self.current = idx;
        Ok(Some(self.transition_to(idx, widget_count)))
    }

    /// Name of the view `step` places away from the current one, wrapping.
    pub fn cycled(&self, step: isize) -> &str {
        let n = self.views.len() as isize;
        let idx = (self.current as isize + step).rem_euclid(n) as usize;
        &self.views[idx]
    }

    fn transition_to(&self, idx: usize, widget_count: usize) -> ViewTransition {
        ViewTransition {
            hide: self
                .views
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != idx)
                .map(|(_, v)| v.clone())
                .collect(),
            show: self.views[idx].clone(),
            widget_schedule: (0..widget_count)
                .map(|i| (i, (i as u32).saturating_mul(self.stagger_ms)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["work".into(), "about".into(), "contact".into()]
    }

    #[test]
    fn rejects_empty_and_unknown() {
        assert_eq!(
            ViewSwitcher::new(vec![], None, 50).unwrap_err(),
            FolioError::NoViews
        );
        assert!(matches!(
            ViewSwitcher::new(names(), Some("blog"), 50),
            Err(FolioError::UnknownView(_))
        ));
    }

    #[test]
    fn switching_to_current_is_a_no_op() {
        let mut s = ViewSwitcher::new(names(), Some("about"), 50).unwrap();
        assert_eq!(s.switch_to("about", 3).unwrap(), None);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let s = ViewSwitcher::new(names(), None, 50).unwrap();
        assert_eq!(s.cycled(1), "about");
        assert_eq!(s.cycled(-1), "contact");
        assert_eq!(s.cycled(3), "work");
    }
}
