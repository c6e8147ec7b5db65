use folio_core::views::{ViewConfig, ViewSwitcher, ViewTransition};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

use crate::dom;

const VIEW_ATTR: &str = "data-view";
const TARGET_ATTR: &str = "data-view-target";

/// DOM side of the view toggle. Cloning shares the same state.
#[derive(Clone)]
pub struct Views {
    document: web::Document,
    switcher: Rc<RefCell<ViewSwitcher>>,
    // Bumped per transition so stale stagger timers do nothing.
    generation: Rc<Cell<u32>>,
}

fn view_element(document: &web::Document, name: &str) -> Option<web::Element> {
    dom::query_all(document, &format!("[{}]", VIEW_ATTR))
        .into_iter()
        .find(|el| el.get_attribute(VIEW_ATTR).as_deref() == Some(name))
}

impl Views {
    pub fn init(document: &web::Document, config: &ViewConfig) -> anyhow::Result<Self> {
        let names: Vec<String> = dom::query_all(document, &format!("[{}]", VIEW_ATTR))
            .iter()
            .filter_map(|el| el.get_attribute(VIEW_ATTR))
            .collect();
        let switcher = ViewSwitcher::new(names, config.initial.as_deref(), config.stagger_ms)?;
        let views = Self {
            document: document.clone(),
            switcher: Rc::new(RefCell::new(switcher)),
            generation: Rc::new(Cell::new(0)),
        };

        let first = {
            let s = views.switcher.borrow();
            let n = views.widget_count(s.current());
            s.initial_transition(n)
        };
        views.apply(&first);

        for button in dom::query_all(document, &format!("[{}]", TARGET_ATTR)) {
            let Some(target) = button.get_attribute(TARGET_ATTR) else {
                continue;
            };
            let v = views.clone();
            dom::listen(&button, "click", move |_ev: web::Event| v.show(&target));
        }
        log::info!(
            "[views] {} views, showing `{}`",
            views.switcher.borrow().views().len(),
            views.switcher.borrow().current()
        );
        Ok(views)
    }

    fn widget_count(&self, name: &str) -> usize {
        view_element(&self.document, name)
            .map(|el| dom::query_all_in(&el, ".widget").len())
            .unwrap_or(0)
    }

    pub fn show(&self, name: &str) {
        let n = self.widget_count(name);
        let result = self.switcher.borrow_mut().switch_to(name, n);
        match result {
            Ok(Some(t)) => self.apply(&t),
            Ok(None) => {}
            Err(e) => log::warn!("[views] {}", e),
        }
    }

    /// Move `step` views forward (negative for back), wrapping.
    pub fn cycle(&self, step: isize) {
        let name = self.switcher.borrow().cycled(step).to_string();
        self.show(&name);
    }

    fn apply(&self, t: &ViewTransition) {
        let gen = self.generation.get().wrapping_add(1);
        self.generation.set(gen);

        for name in &t.hide {
            if let Some(el) = view_element(&self.document, name) {
                dom::set_class(&el, "is-active", false);
                let _ = el.set_attribute("aria-hidden", "true");
                for w in dom::query_all_in(&el, ".widget") {
                    dom::set_class(&w, "is-in", false);
                }
            }
        }
        for button in dom::query_all(&self.document, &format!("[{}]", TARGET_ATTR)) {
            let on = button.get_attribute(TARGET_ATTR).as_deref() == Some(t.show.as_str());
            dom::set_class(&button, "is-active", on);
        }
        let Some(shown) = view_element(&self.document, &t.show) else {
            return;
        };
        dom::set_class(&shown, "is-active", true);
        let _ = shown.set_attribute("aria-hidden", "false");

        let widgets = dom::query_all_in(&shown, ".widget");
        for &(idx, delay) in &t.widget_schedule {
            let Some(w) = widgets.get(idx).cloned() else {
                continue;
            };
            if delay == 0 {
                dom::set_class(&w, "is-in", true);
                continue;
            }
            let generation = self.generation.clone();
            dom::set_timeout(delay, move || {
                if generation.get() == gen {
                    dom::set_class(&w, "is-in", true);
                }
            });
        }
    }
}
