#![cfg(target_arch = "wasm32")]

mod audio;
mod constants;
mod dom;
mod events;
mod input;
mod overlay;
mod timers;
mod ui;

use events::GameWiring;
use frog_core::{default_config, place_frogs, LayoutParams, RoundState};
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("frog-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let board = document
        .get_element_by_id("game-board")
        .ok_or_else(|| anyhow::anyhow!("missing #game-board"))?;

    let config = Rc::new(default_config());
    let mut rng = StdRng::from_entropy();
    let frogs = Rc::new(place_frogs(&mut rng, &config, &LayoutParams::default()));
    log::info!(
        "[layout] placed {} frogs, target `{}`",
        frogs.len(),
        config.target.name
    );

    let round = Rc::new(RefCell::new(RoundState::new()));
    let bank = audio::AudioBank::preload(&config.sound_paths(), &document)
        .map_err(|e| anyhow::anyhow!(format!("audio preload: {e:?}")))?;

    ui::set_target_label(&document, &config.target.name);
    ui::set_timer_text(&document, round.borrow().time_remaining);
    ui::set_attempts_text(&document, round.borrow().attempts_remaining);

    // The start overlay's click is the canonical unlock gesture.
    {
        let bank = Rc::clone(&bank);
        let doc = document.clone();
        dom::add_click_listener(&document, "start-overlay", move || {
            audio::AudioBank::unlock(&bank);
            overlay::hide_start(&doc);
        });
    }

    let wiring = GameWiring {
        document,
        board,
        config,
        frogs,
        round,
        bank,
        countdown: Rc::new(RefCell::new(None)),
        message_timer: Rc::new(RefCell::new(None)),
        reveal_timer: Rc::new(RefCell::new(None)),
    };
    events::wire_input_handlers(wiring.clone());

    let interval = {
        let w = wiring.clone();
        timers::Interval::new(constants::TICK_MS, move || events::on_tick(&w))
            .map_err(|e| anyhow::anyhow!(format!("countdown interval: {e:?}")))?
    };
    *wiring.countdown.borrow_mut() = Some(interval);
    Ok(())
}
