use folio_core::theme::{Theme, ThemeOverride};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone)]
pub struct ThemeHandle {
    root: web::Element,
    theme: Rc<Cell<Theme>>,
    // Once the visitor picks a theme, system changes stop applying.
    pinned: Rc<Cell<bool>>,
}

impl ThemeHandle {
    fn apply(&self, theme: Theme) {
        self.theme.set(theme);
        dom::set_class(&self.root, theme.other_class_name(), false);
        dom::set_class(&self.root, theme.class_name(), true);
    }

    pub fn current(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.pinned.set(true);
        let next = self.theme.get().toggled();
        self.apply(next);
        log::info!("[theme] switched to {:?}", next);
    }
}

pub fn init(
    window: &web::Window,
    document: &web::Document,
    over: ThemeOverride,
) -> anyhow::Result<ThemeHandle> {
    let root = dom::root_element(document).ok_or_else(|| anyhow::anyhow!("no <html> element"))?;
    let mql = window.match_media(DARK_QUERY).ok().flatten();
    let prefers_dark = mql.as_ref().map(|m| m.matches()).unwrap_or(false);
    let initial = Theme::detect(prefers_dark, over);

    let handle = ThemeHandle {
        root,
        theme: Rc::new(Cell::new(initial)),
        pinned: Rc::new(Cell::new(over != ThemeOverride::Auto)),
    };
    handle.apply(initial);

    if let Some(mql) = mql {
        let h = handle.clone();
        dom::listen(&mql, "change", move |ev: web::MediaQueryListEvent| {
            if !h.pinned.get() {
                h.apply(Theme::detect(ev.matches(), ThemeOverride::Auto));
            }
        });
    }
    for button in dom::query_all(document, "[data-theme-toggle]") {
        let h = handle.clone();
        dom::listen(&button, "click", move |_ev: web::Event| h.toggle());
    }
    log::info!("[theme] {:?} (override {:?})", initial, over);
    Ok(handle)
}
