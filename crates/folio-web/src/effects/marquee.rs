use folio_core::marquee::{copies_needed, duration_sec, MarqueeConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

const CLONE_ATTR: &str = "data-marquee-clone";

struct Track {
    track: web::Element,
    // Original children, cloned to fill the track.
    items: Vec<web::Node>,
}

fn content_width(items: &[web::Node]) -> f32 {
    items
        .iter()
        .filter_map(|n| n.dyn_ref::<web::Element>())
        .map(|el| el.get_bounding_client_rect().width() as f32)
        .sum()
}

impl Track {
    fn layout(&self, px_per_sec: f32) {
        for old in dom::query_all_in(&self.track, &format!("[{}]", CLONE_ATTR)) {
            old.remove();
        }
        let content = content_width(&self.items);
        if content <= 0.0 {
            return;
        }
        let container = self
            .track
            .parent_element()
            .map(|p| p.get_bounding_client_rect().width() as f32)
            .unwrap_or(0.0);
        // The originals are the first copy.
        for _ in 1..copies_needed(container, content) {
            for item in &self.items {
                let Ok(copy) = item.clone_node_with_deep(true) else {
                    continue;
                };
                if let Some(el) = copy.dyn_ref::<web::Element>() {
                    let _ = el.set_attribute(CLONE_ATTR, "");
                    let _ = el.set_attribute("aria-hidden", "true");
                }
                let _ = self.track.append_child(&copy);
            }
        }
        dom::set_css_var(
            &self.track,
            "--marquee-duration",
            &format!("{:.2}s", duration_sec(content, px_per_sec)),
        );
    }
}

/// Fill every `.marquee-track`; the returned closure re-lays them out.
pub fn init(document: &web::Document, config: &MarqueeConfig) -> anyhow::Result<impl Fn()> {
    let tracks: Vec<Track> = dom::query_all(document, ".marquee-track")
        .into_iter()
        .map(|track| {
            let children = track.child_nodes();
            let items = (0..children.length())
                .filter_map(|i| children.get(i))
                .filter(|n| n.node_type() == web::Node::ELEMENT_NODE)
                .collect();
            Track { track, items }
        })
        .collect();
    if tracks.is_empty() {
        anyhow::bail!("no .marquee-track elements");
    }
    let px_per_sec = config.px_per_sec;
    let relayout = move || {
        for t in &tracks {
            t.layout(px_per_sec);
        }
    };
    relayout();
    log::info!("[marquee] laid out");
    Ok(relayout)
}
