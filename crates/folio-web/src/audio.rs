use folio_core::audio_map::{
    ambient_start_rate, map_velocity, noise_buffer, AudioConfig, AudioParams, Click, ClickMode,
    ClickSynth, Ramp, RampKind,
};
use folio_core::EXP_RAMP_FLOOR;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::dom;

const NOISE_BED_SEC: f32 = 2.0;
const CLICK_NOISE_SEC: f32 = 0.12;

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn create_noise(audio_ctx: &web::AudioContext, seconds: f32, seed: u32) -> anyhow::Result<web::AudioBuffer> {
    let sr = audio_ctx.sample_rate();
    let len = (sr * seconds).max(1.0) as u32;
    let buf = audio_ctx
        .create_buffer(1, len, sr)
        .map_err(|e| anyhow::anyhow!("noise buffer error: {:?}", e))?;
    let mut samples = noise_buffer(len as usize, seed);
    buf.copy_to_channel(&mut samples, 0)
        .map_err(|e| anyhow::anyhow!("noise copy error: {:?}", e))?;
    Ok(buf)
}

/// Procedural scroll-reactive sound: a looping noise bed through a lowpass,
/// a sub-bass sine, and an optional decoded ambience loop whose pitch follows
/// the scroll speed. Also plays typewriter/speech clicks.
pub struct AudioEngine {
    ctx: web::AudioContext,
    config: AudioConfig,
    master: web::GainNode,
    noise_filter: web::BiquadFilterNode,
    noise_gain: web::GainNode,
    sub_gain: web::GainNode,
    ambient: Option<web::AudioBufferSourceNode>,
    click_noise: web::AudioBuffer,
    rng: StdRng,
    started: bool,
    muted: bool,
    last: Option<AudioParams>,
}

impl AudioEngine {
    pub fn new(config: &AudioConfig) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let master = create_gain(&ctx, 0.0, "Master")?;
        master
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("master connect: {:?}", e))?;

        // Noise bed: looped white noise -> lowpass -> gain -> master
        let noise_src = web::AudioBufferSourceNode::new(&ctx)
            .map_err(|e| anyhow::anyhow!("AudioBufferSourceNode error: {:?}", e))?;
        noise_src.set_buffer(Some(&create_noise(&ctx, NOISE_BED_SEC, 0x1234_ABCD)?));
        noise_src.set_loop(true);
        let noise_filter = web::BiquadFilterNode::new(&ctx)
            .map_err(|e| anyhow::anyhow!("BiquadFilterNode error: {:?}", e))?;
        noise_filter.set_type(web::BiquadFilterType::Lowpass);
        noise_filter.frequency().set_value(config.min_cutoff_hz);
        noise_filter.q().set_value(0.8);
        let noise_gain = create_gain(&ctx, config.noise_gain_min, "Noise")?;
        let _ = noise_src.connect_with_audio_node(&noise_filter);
        let _ = noise_filter.connect_with_audio_node(&noise_gain);
        let _ = noise_gain.connect_with_audio_node(&master);

        // Sub-bass
        let sub_osc = web::OscillatorNode::new(&ctx)
            .map_err(|e| anyhow::anyhow!("OscillatorNode error: {:?}", e))?;
        sub_osc.set_type(web::OscillatorType::Sine);
        sub_osc.frequency().set_value(config.sub_bass_hz);
        let sub_gain = create_gain(&ctx, config.sub_gain_min, "Sub")?;
        let _ = sub_osc.connect_with_audio_node(&sub_gain);
        let _ = sub_gain.connect_with_audio_node(&master);

        let _ = noise_src.start();
        let _ = sub_osc.start();

        let click_noise = create_noise(&ctx, CLICK_NOISE_SEC, 0x7890_FEDC)?;

        log::info!("[audio] graph built at {} Hz", ctx.sample_rate());
        Ok(Self {
            ctx,
            config: config.clone(),
            master,
            noise_filter,
            noise_gain,
            sub_gain,
            ambient: None,
            click_noise,
            rng: StdRng::seed_from_u64(dom::random_seed()),
            started: false,
            muted: false,
            last: None,
        })
    }

    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }

    /// Resume after a user gesture and fade the master bus in.
    pub fn unlock(&mut self) {
        if self.started {
            return;
        }
        let _ = self.ctx.resume();
        self.started = true;
        self.ramp_master();
        log::info!("[audio] unlocked");
    }

    pub fn set_suspended(&self, suspended: bool) {
        if !self.started {
            return;
        }
        let _ = if suspended {
            self.ctx.suspend()
        } else {
            self.ctx.resume()
        };
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.ramp_master();
        log::info!("[audio] {}", if self.muted { "muted" } else { "unmuted" });
        self.muted
    }

    fn ramp_master(&self) {
        let target = if self.muted || !self.started {
            0.0
        } else {
            self.config.master_gain
        };
        ramp_param(
            &self.master.gain(),
            RampKind::Linear,
            target,
            self.ctx.current_time(),
            self.config.ramp_sec * 4.0,
        );
    }

    /// Push a new normalized scroll velocity into the graph.
    pub fn apply_velocity(&mut self, normalized: f32) {
        let p = map_velocity(normalized, &self.config);
        if self.last == Some(p) {
            return;
        }
        self.last = Some(p);
        let now = self.ctx.current_time();
        let ramp = self.config.ramp_sec;
        ramp_param(&self.noise_filter.frequency(), RampKind::Exponential, p.cutoff_hz, now, ramp);
        ramp_param(&self.noise_gain.gain(), RampKind::Linear, p.noise_gain, now, ramp);
        ramp_param(&self.sub_gain.gain(), RampKind::Linear, p.sub_gain, now, ramp);
        if let Some(src) = &self.ambient {
            ramp_param(&src.playback_rate(), RampKind::Linear, p.playback_rate, now, ramp);
        }
    }

    pub fn set_ambient(&mut self, buffer: &web::AudioBuffer) -> anyhow::Result<()> {
        let src = web::AudioBufferSourceNode::new(&self.ctx)
            .map_err(|e| anyhow::anyhow!("ambient source error: {:?}", e))?;
        src.set_buffer(Some(buffer));
        src.set_loop(true);
        src.playback_rate()
            .set_value(ambient_start_rate(self.last.as_ref(), &self.config));
        src.connect_with_audio_node(&self.master)
            .map_err(|e| anyhow::anyhow!("ambient connect: {:?}", e))?;
        src.start()
            .map_err(|e| anyhow::anyhow!("ambient start: {:?}", e))?;
        if let Some(old) = self.ambient.replace(src) {
            let _ = old.stop();
        }
        Ok(())
    }

    /// Synthesize the click for one typed character, if it makes a sound.
    pub fn click_for_char(&mut self, ch: char, mode: ClickMode) {
        if !self.started || self.muted {
            return;
        }
        if let Some(click) = ClickSynth::for_char(ch, mode, &mut self.rng) {
            if let Err(e) = self.play_click(&click) {
                log::warn!("[audio] click failed: {:?}", e);
            }
        }
    }

    fn play_click(&self, click: &Click) -> anyhow::Result<()> {
        let t0 = self.ctx.current_time() + 0.002;
        let end = t0 + click.duration_sec as f64;
        let env = create_gain(&self.ctx, 0.0, "Click")?;
        let g = env.gain();
        let _ = g.set_value_at_time(0.0, t0);
        let _ = g.linear_ramp_to_value_at_time(click.gain, t0 + 0.002);
        let _ = g.exponential_ramp_to_value_at_time(EXP_RAMP_FLOOR, end);
        env.connect_with_audio_node(&self.master)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        if click.tonal {
            let osc = web::OscillatorNode::new(&self.ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
            osc.set_type(web::OscillatorType::Triangle);
            osc.frequency().set_value(click.frequency_hz);
            let _ = osc.connect_with_audio_node(&env);
            let _ = osc.start_with_when(t0);
            let _ = osc.stop_with_when(end + 0.02);
        } else {
            let src =
                web::AudioBufferSourceNode::new(&self.ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
            src.set_buffer(Some(&self.click_noise));
            let band =
                web::BiquadFilterNode::new(&self.ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
            band.set_type(web::BiquadFilterType::Bandpass);
            band.frequency().set_value(click.frequency_hz);
            band.q().set_value(click.filter_q);
            let _ = src.connect_with_audio_node(&band);
            let _ = band.connect_with_audio_node(&env);
            let _ = src.start_with_when(t0);
            let _ = src.stop_with_when(end + 0.02);
        }
        Ok(())
    }
}

fn ramp_param(param: &web::AudioParam, kind: RampKind, target: f32, now: f64, ramp_sec: f64) {
    let r = Ramp::plan(kind, param.value(), target, now, ramp_sec);
    let _ = param.cancel_scheduled_values(now);
    let _ = param.set_value_at_time(r.from, r.start);
    let _ = match r.kind {
        RampKind::Linear => param.linear_ramp_to_value_at_time(r.to, r.end),
        RampKind::Exponential => param.exponential_ramp_to_value_at_time(r.to, r.end),
    };
}

/// Browsers keep the context suspended until a gesture; unlock on the first one.
pub fn unlock_on_gesture(window: &web::Window, engine: Rc<RefCell<AudioEngine>>) {
    for event in ["pointerdown", "keydown", "touchend"] {
        let engine = engine.clone();
        dom::listen(window, event, move |_ev: web::Event| {
            if let Ok(mut e) = engine.try_borrow_mut() {
                e.unlock();
            }
        });
    }
}

async fn fetch_and_decode(ctx: &web::AudioContext, url: &str) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let bytes = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("read body: {:?}", e))?
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|e| anyhow::anyhow!("not an ArrayBuffer: {:?}", e))?;
    let decoded = JsFuture::from(
        ctx.decode_audio_data(&bytes)
            .map_err(|e| anyhow::anyhow!("decode: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("decode: {:?}", e))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| anyhow::anyhow!("not an AudioBuffer: {:?}", e))
}

/// Fetch and loop the ambience track. Failure only disables the ambience.
pub async fn load_ambient(engine: Rc<RefCell<AudioEngine>>, url: String) {
    let ctx = engine.borrow().context().clone();
    match fetch_and_decode(&ctx, &url).await {
        Ok(buffer) => match engine.borrow_mut().set_ambient(&buffer) {
            Ok(()) => log::info!("[audio] ambience loaded from {}", url),
            Err(e) => log::warn!("[audio] ambience disabled: {:?}", e),
        },
        Err(e) => log::warn!("[audio] ambience disabled: {:?}", e),
    }
}
