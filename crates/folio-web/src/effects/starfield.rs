use folio_core::starfield::{Starfield, StarfieldConfig};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame::Effect;
use crate::render::StarRenderer;

const CANVAS_ID: &str = "starfield";

pub struct StarfieldEffect {
    canvas: web::HtmlCanvasElement,
    renderer: StarRenderer<'static>,
    field: Starfield,
    scroll_speed: Rc<Cell<f32>>,
    // Set by the resize effect once the window settles.
    needs_resize: Rc<Cell<bool>>,
    failed: bool,
}

impl Effect for StarfieldEffect {
    fn name(&self) -> &'static str {
        "starfield"
    }

    fn frame(&mut self, dt_sec: f32, _now_ms: f64) {
        if self.failed {
            return;
        }
        if self.needs_resize.replace(false) {
            dom::sync_canvas_backing_size(&self.canvas);
            self.renderer
                .resize_if_needed(self.canvas.width(), self.canvas.height());
        }
        let speed = self.scroll_speed.get();
        self.field.advance(dt_sec, speed);
        let aspect = self.canvas.width() as f32 / self.canvas.height().max(1) as f32;
        let stars = self.field.instances(aspect);
        match self.renderer.render(&stars, dt_sec, 0.7 + 0.3 * speed) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[starfield] out of GPU memory; disabled");
                self.failed = true;
            }
            Err(e) => log::warn!("[starfield] frame skipped: {:?}", e),
        }
    }
}

pub async fn init(
    document: &web::Document,
    config: &StarfieldConfig,
    scroll_speed: Rc<Cell<f32>>,
    needs_resize: Rc<Cell<bool>>,
) -> anyhow::Result<StarfieldEffect> {
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not a canvas", CANVAS_ID))?;
    dom::sync_canvas_backing_size(&canvas);
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let renderer = StarRenderer::new(leaked_canvas, config.count).await?;
    let field = Starfield::new(config.clone());
    log::info!("[starfield] {} stars", field.len());
    Ok(StarfieldEffect {
        canvas,
        renderer,
        field,
        scroll_speed,
        needs_resize,
        failed: false,
    })
}
