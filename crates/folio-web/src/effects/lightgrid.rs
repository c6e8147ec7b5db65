use folio_core::lightgrid::LightGrid;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;
use crate::events::PointerState;
use crate::frame::Effect;

struct Panel {
    root: web::Element,
    cells: Vec<web::Element>,
    grid: LightGrid,
    t: f32,
    last: Vec<f32>,
}

pub struct LightGridEffect {
    panels: Vec<Panel>,
    pointer: Rc<RefCell<PointerState>>,
}

impl Panel {
    fn pointer_in_grid(&self, pointer: Option<Vec2>) -> Option<Vec2> {
        let p = pointer?;
        let rect = self.root.get_bounding_client_rect();
        let (w, h) = (rect.width() as f32, rect.height() as f32);
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            (p.x - rect.left() as f32) / w,
            (p.y - rect.top() as f32) / h,
        ))
    }
}

impl Effect for LightGridEffect {
    fn name(&self) -> &'static str {
        "lightgrid"
    }

    fn frame(&mut self, dt_sec: f32, _now_ms: f64) {
        let pointer = self.pointer.borrow().pos;
        for panel in self.panels.iter_mut() {
            panel.t = panel.grid.advance(panel.t, dt_sec);
            let local = panel.pointer_in_grid(pointer);
            let values = panel.grid.frame(panel.t, local);
            for (i, (el, v)) in panel.cells.iter().zip(&values).enumerate() {
                // skip style writes that would not be visible
                if panel.last.get(i).map_or(true, |old| (old - v).abs() > 0.004) {
                    dom::set_css_var(el, "--light", &format!("{:.3}", v));
                }
            }
            panel.last = values;
        }
    }
}

fn grid_cols(root: &web::Element, cell_count: usize) -> usize {
    root.get_attribute("data-cols")
        .and_then(|c| c.parse::<usize>().ok())
        .filter(|c| *c > 0)
        .unwrap_or_else(|| (cell_count as f32).sqrt().ceil() as usize)
        .max(1)
}

pub fn init(
    document: &web::Document,
    pointer: Rc<RefCell<PointerState>>,
) -> anyhow::Result<LightGridEffect> {
    let panels: Vec<Panel> = dom::query_all(document, ".light-grid")
        .into_iter()
        .filter_map(|root| {
            let cells = dom::query_all_in(&root, ".light-cell");
            if cells.is_empty() {
                return None;
            }
            let cols = grid_cols(&root, cells.len());
            let rows = cells.len().div_ceil(cols);
            Some(Panel {
                root,
                cells,
                grid: LightGrid::new(cols, rows),
                t: 0.0,
                last: Vec::new(),
            })
        })
        .collect();
    if panels.is_empty() {
        anyhow::bail!("no .light-grid with .light-cell children");
    }
    log::info!("[lightgrid] {} grid(s)", panels.len());
    Ok(LightGridEffect { panels, pointer })
}
