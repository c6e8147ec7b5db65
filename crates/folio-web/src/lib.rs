#![cfg(target_arch = "wasm32")]
use fnv::FnvHashMap;
use folio_core::{ScrollTracker, SiteConfig, ATTRIBUTE_PREFIX};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod effects;
mod events;
mod frame;
mod intro;
mod overlay;
mod render;
mod views;

use frame::{Effect, FrameContext};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// `data-folio-*` attributes on `<body>`, merged over the defaults.
fn read_site_config(document: &web::Document) -> SiteConfig {
    let mut attrs = FnvHashMap::default();
    if let Some(body) = document.body() {
        for name in body.get_attribute_names().iter().filter_map(|n| n.as_string()) {
            if !name.starts_with(ATTRIBUTE_PREFIX) {
                continue;
            }
            if let Some(value) = body.get_attribute(&name) {
                attrs.insert(name, value);
            }
        }
    }
    let (config, errors) = SiteConfig::from_attributes(&attrs);
    for e in errors {
        log::warn!("[config] ignored override: {}", e);
    }
    config
}

/// Log-and-continue for an optional effect.
fn optional<T>(name: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[{}] disabled: {:?}", name, e);
            None
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = read_site_config(&document);

    optional("platform", effects::platform::init(&window, &document));
    let theme = optional("theme", effects::theme::init(&window, &document, config.theme));

    // Scroll model and input
    let scroll = Rc::new(RefCell::new(ScrollTracker::new(config.scroll.clone())));
    let pointer = Rc::new(RefCell::new(events::PointerState::default()));
    events::wire_wheel(&window, scroll.clone());
    events::wire_touch(&window, scroll.clone());
    events::wire_pointer(&window, pointer.clone());

    let scroll_speed = Rc::new(Cell::new(0.0_f32));
    {
        let speed = scroll_speed.clone();
        scroll.borrow_mut().subscribe(move |s| speed.set(s.normalized));
    }

    // Audio
    let audio = if config.audio.enabled {
        optional("audio", audio::AudioEngine::new(&config.audio)).map(|engine| {
            let engine = Rc::new(RefCell::new(engine));
            audio::unlock_on_gesture(&window, engine.clone());
            let e = engine.clone();
            scroll.borrow_mut().subscribe(move |s| {
                if let Ok(mut e) = e.try_borrow_mut() {
                    e.apply_velocity(s.normalized);
                }
            });
            if let Some(url) = config.audio.ambient_url.clone() {
                spawn_local(audio::load_ambient(engine.clone(), url));
            }
            engine
        })
    } else {
        log::info!("[audio] disabled by config");
        None
    };

    // Per-frame effects
    let hidden = Rc::new(Cell::new(false));
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(scroll.clone(), hidden.clone())));
    let mut effects_list: Vec<Box<dyn Effect>> = Vec::new();

    let lamp = match optional("flicker", effects::flicker::init(&document, &config.flicker)) {
        Some((lamp, flicker)) => {
            if let Some(f) = flicker {
                effects_list.push(Box::new(f));
            }
            Some(lamp)
        }
        None => None,
    };
    if let Some(e) = optional("diffusion", effects::diffusion::init(&document, &config.diffusion)) {
        effects_list.push(Box::new(e));
    }
    if let Some(e) = optional(
        "robot",
        effects::robot::init(&document, &config.robot, audio.clone()),
    ) {
        effects_list.push(Box::new(e));
    }
    if let Some(e) = optional("lightgrid", effects::lightgrid::init(&document, pointer.clone())) {
        effects_list.push(Box::new(e));
    }
    if let Some(e) = optional(
        "parallax",
        effects::parallax::init(&document, &config.parallax, pointer.clone()),
    ) {
        effects_list.push(Box::new(e));
    }
    if let Some(e) = optional(
        "shake",
        effects::shake::init(&document, &config.shake, scroll_speed.clone()),
    ) {
        effects_list.push(Box::new(e));
    }
    optional("clock", effects::clock::init(&document, config.clock_twelve_hour));

    let star_resize = Rc::new(Cell::new(false));
    let relayout_marquee = optional("marquee", effects::marquee::init(&document, &config.marquee));
    if let Some(mut e) = optional(
        "resize",
        effects::resize::init(&window, &document, config.resize_quiet_ms),
    ) {
        if let Some(relayout) = relayout_marquee {
            e.on_settled(relayout);
        }
        let flag = star_resize.clone();
        e.on_settled(move || flag.set(true));
        effects_list.push(Box::new(e));
    }
    {
        let mut ctx = frame_ctx.borrow_mut();
        for e in effects_list {
            ctx.push(e);
        }
    }

    let views = optional("views", views::Views::init(&document, &config.views));

    // Intro and shortcuts
    let intro_handle = intro::IntroHandle::default();
    events::wire_global_keydown(
        &window,
        events::KeyTargets {
            audio: audio.clone(),
            lamp,
            theme,
            views,
            intro: intro_handle.clone(),
        },
    );

    {
        let audio = audio.clone();
        frame::wire_visibility(&document, hidden, move |now_hidden| {
            if let Some(engine) = &audio {
                engine.borrow().set_suspended(now_hidden);
            }
        });
    }
    frame::start_loop(frame_ctx.clone());

    spawn_local(intro::run(
        document.clone(),
        config.intro.clone(),
        audio,
        intro_handle,
    ));

    // GPU setup is the slowest step; the page runs without it meanwhile.
    match effects::starfield::init(&document, &config.starfield, scroll_speed, star_resize).await
    {
        Ok(e) => frame_ctx.borrow_mut().push(Box::new(e)),
        Err(e) => log::warn!("[starfield] disabled: {:?}", e),
    }
    Ok(())
}
