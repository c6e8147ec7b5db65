use folio_core::spring::{Rumble, ShakeConfig, Spring2};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

use crate::dom;
use crate::frame::Effect;

struct Shaker {
    el: web::Element,
    spring: Spring2,
    kicked: Rc<Cell<bool>>,
    active: bool,
}

/// Click-to-shake springs on `[data-shake]`, scroll-fed rumble on
/// `[data-rumble]`. Both write a CSS translate.
pub struct ShakeEffect {
    shakers: Vec<Shaker>,
    rumblers: Vec<web::Element>,
    rumble: Rumble,
    scroll_speed: Rc<Cell<f32>>,
    config: ShakeConfig,
    rng: StdRng,
}

fn write_offset(el: &web::Element, o: Vec2) {
    dom::set_css_var(el, "--shake-x", &format!("{:.2}px", o.x));
    dom::set_css_var(el, "--shake-y", &format!("{:.2}px", o.y));
}

impl Effect for ShakeEffect {
    fn name(&self) -> &'static str {
        "shake"
    }

    fn frame(&mut self, dt_sec: f32, _now_ms: f64) {
        for s in self.shakers.iter_mut() {
            if s.kicked.replace(false) {
                let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
                s.spring.kick(Vec2::from_angle(angle) * self.config.kick);
                s.active = true;
            }
            if !s.active {
                continue;
            }
            s.spring.step(dt_sec);
            write_offset(&s.el, s.spring.pos);
            s.active = !s.spring.is_settled();
        }
        if self.rumblers.is_empty() {
            return;
        }
        self.rumble
            .set_floor(self.scroll_speed.get() * self.config.rumble_scroll_px);
        let o = self.rumble.sample(dt_sec, &mut self.rng);
        for el in &self.rumblers {
            write_offset(el, o);
        }
    }
}

pub fn init(
    document: &web::Document,
    config: &ShakeConfig,
    scroll_speed: Rc<Cell<f32>>,
) -> anyhow::Result<ShakeEffect> {
    let shakers: Vec<Shaker> = dom::query_all(document, "[data-shake]")
        .into_iter()
        .map(|el| {
            let kicked = Rc::new(Cell::new(false));
            let k = kicked.clone();
            dom::listen(&el, "click", move |_ev: web::Event| k.set(true));
            Shaker {
                el,
                spring: Spring2::new(config.stiffness, config.damping),
                kicked,
                active: false,
            }
        })
        .collect();
    let rumblers = dom::query_all(document, "[data-rumble]");
    if shakers.is_empty() && rumblers.is_empty() {
        anyhow::bail!("no [data-shake] or [data-rumble] elements");
    }
    log::info!(
        "[shake] {} shaker(s), {} rumbler(s)",
        shakers.len(),
        rumblers.len()
    );
    Ok(ShakeEffect {
        shakers,
        rumblers,
        rumble: Rumble::new(config.rumble_decay),
        scroll_speed,
        config: config.clone(),
        rng: StdRng::seed_from_u64(dom::random_seed()),
    })
}
