use crate::audio::AudioBank;
use crate::constants::{MESSAGE_CLEAR_MS, REVEAL_MARKERS_DELAY_MS};
use crate::timers::{Interval, Timeout};
use crate::{input, overlay, ui};
use frog_core::{
    proximity_volumes, ClickOutcome, Frog, FrogVolumes, Outcome, Phase, RoundConfig, RoundState,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct GameWiring {
    pub document: web::Document,
    pub board: web::Element,
    pub config: Rc<RoundConfig>,
    pub frogs: Rc<Vec<Frog>>,
    pub round: Rc<RefCell<RoundState>>,
    pub bank: Rc<AudioBank>,
    pub countdown: Rc<RefCell<Option<Interval>>>,
    pub message_timer: Rc<RefCell<Option<Timeout>>>,
    pub reveal_timer: Rc<RefCell<Option<Timeout>>>,
}

pub fn wire_input_handlers(w: GameWiring) {
    wire_pointermove(&w);
    wire_board_click(&w);
}

fn wire_pointermove(w: &GameWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Leaving Active silences the board; nothing to mix here.
        if w.round.borrow().phase != Phase::Active {
            return;
        }
        let Some(pos) = input::client_to_board(ev.client_x() as f64, ev.client_y() as f64, &w.board)
        else {
            return;
        };
        if !w.bank.is_unlocked() {
            // Some platforms accept a move as a gesture; try, skip this sample.
            AudioBank::unlock(&w.bank);
            return;
        }

        let mut levels = FrogVolumes::new();
        proximity_volumes(pos, &w.frogs, &mut levels);
        // Zeros first: kinds can share one sound file, and the nearest frog's
        // gain must land on the shared handle last.
        for l in levels.iter().filter(|l| l.volume == 0.0) {
            if let Some(f) = w.frogs.get(l.id as usize) {
                w.bank.set_volume(&f.sound, 0.0);
            }
        }
        for l in levels.iter().filter(|l| l.volume > 0.0) {
            if let Some(f) = w.frogs.get(l.id as usize) {
                w.bank.set_volume(&f.sound, l.volume);
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        let _ =
            wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_board_click(w: &GameWiring) {
    let w = w.clone();
    let board = w.board.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // Every click is a qualifying gesture for the autoplay gate.
        AudioBank::unlock(&w.bank);

        let Some(pos) = input::client_to_board(ev.client_x() as f64, ev.client_y() as f64, &w.board)
        else {
            return;
        };
        let result = w.round.borrow_mut().resolve_click(pos, &w.frogs);
        match result {
            ClickOutcome::Ignored | ClickOutcome::Miss => {}
            ClickOutcome::TargetFound => {
                log::info!("[click] target found");
                enter_reveal(&w);
            }
            ClickOutcome::WrongGuess {
                kind,
                attempts_left,
            } => {
                log::info!("[click] wrong guess: {kind}, {attempts_left} attempts left");
                ui::set_attempts_text(&w.document, attempts_left);
                if w.round.borrow().phase == Phase::Revealing {
                    enter_reveal(&w);
                } else {
                    show_advisory(&w, &kind, attempts_left);
                }
            }
        }
    }) as Box<dyn FnMut(_)>);

    let _ = board.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One countdown tick. Wired to the 1 Hz interval owned by the wiring.
pub fn on_tick(w: &GameWiring) {
    let transition = w.round.borrow_mut().tick_second();
    ui::set_timer_text(&w.document, w.round.borrow().time_remaining);
    match transition {
        Some(Phase::Revealing) => enter_reveal(w),
        Some(Phase::Ended) => finish_round(w),
        _ => {}
    }
}

fn show_advisory(w: &GameWiring, kind: &str, attempts_left: u32) {
    ui::set_message(
        &w.document,
        &format!(
            "That was a {kind}, not the {}. {attempts_left} tries left.",
            w.config.target.name
        ),
    );
    let document = w.document.clone();
    match Timeout::new(MESSAGE_CLEAR_MS, move || ui::clear_message(&document)) {
        // Replacing the slot cancels a previous advisory's pending clear.
        Ok(t) => *w.message_timer.borrow_mut() = Some(t),
        Err(e) => log::warn!("[round] advisory timer error: {e:?}"),
    }
}

fn enter_reveal(w: &GameWiring) {
    // Leaving Active silences the board immediately.
    w.bank.stop_all();
    // A pending advisory clear must not wipe the verdict.
    w.message_timer.borrow_mut().take();

    let outcome = w.round.borrow().outcome;
    log::info!("[round] revealing, outcome {outcome:?}");
    ui::set_message(
        &w.document,
        match outcome {
            Outcome::Win => "You found it!",
            _ => "Game over!",
        },
    );

    let document = w.document.clone();
    let frogs = Rc::clone(&w.frogs);
    match Timeout::new(REVEAL_MARKERS_DELAY_MS, move || {
        overlay::show_reveal(&document, &frogs);
    }) {
        Ok(t) => *w.reveal_timer.borrow_mut() = Some(t),
        Err(e) => log::warn!("[round] reveal timer error: {e:?}"),
    }
}

fn finish_round(w: &GameWiring) {
    let outcome = w.round.borrow().outcome;
    report_outcome(&w.board, outcome);
    log::info!("[round] ended, outcome {outcome:?}");
    // Nothing left for the countdown to drive.
    w.countdown.borrow_mut().take();
}

/// Hand the verdict to the hosting page once, as a DOM event on the board.
fn report_outcome(board: &web::Element, outcome: Outcome) {
    let init = web::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(if outcome == Outcome::Win {
        "win"
    } else {
        "lose"
    }));
    match web::CustomEvent::new_with_event_init_dict("round-ended", &init) {
        Ok(ev) => {
            let _ = board.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[round] outcome event error: {e:?}"),
    }
}
