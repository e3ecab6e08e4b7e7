//! Owns every sound handle for one round. Buffering, the gesture-gated
//! unlock step, the silent looping that keeps later volume changes
//! latency-free, and per-path volume control all go through here; nothing
//! else in the crate touches an audio element directly.

use fnv::FnvHashMap;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::overlay;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Ready,
    Failed,
}

struct AudioAsset {
    path: String,
    element: web::HtmlAudioElement,
    state: Cell<LoadState>,
}

pub struct AudioBank {
    assets: Vec<AudioAsset>,
    index: FnvHashMap<String, usize>,
    settled: Cell<usize>,
    unlocked: Cell<bool>,
    unlock_pending: Cell<bool>,
    playing: Cell<bool>,
    document: web::Document,
}

impl AudioBank {
    /// Start buffering one element per distinct path. Load results are
    /// reported through `canplaythrough`/`error` listeners; the loading
    /// overlay tracks settled-asset progress and hides once every asset has
    /// either buffered or failed.
    pub fn preload(paths: &[String], document: &web::Document) -> Result<Rc<Self>, JsValue> {
        let mut assets = Vec::with_capacity(paths.len());
        let mut index = FnvHashMap::default();
        for path in paths {
            if index.contains_key(path) {
                continue;
            }
            let element = web::HtmlAudioElement::new_with_src(path)?;
            element.set_preload("auto");
            element.set_loop(true);
            element.set_volume(0.0);
            index.insert(path.clone(), assets.len());
            assets.push(AudioAsset {
                path: path.clone(),
                element,
                state: Cell::new(LoadState::Pending),
            });
        }

        let bank = Rc::new(Self {
            assets,
            index,
            settled: Cell::new(0),
            unlocked: Cell::new(false),
            unlock_pending: Cell::new(false),
            playing: Cell::new(false),
            document: document.clone(),
        });
        overlay::set_loading_progress(document, 0, bank.assets.len());

        for i in 0..bank.assets.len() {
            let b = Rc::clone(&bank);
            let ok = Closure::wrap(Box::new(move || {
                AudioBank::asset_settled(&b, i, LoadState::Ready);
            }) as Box<dyn FnMut()>);
            let _ = bank.assets[i]
                .element
                .add_event_listener_with_callback("canplaythrough", ok.as_ref().unchecked_ref());
            ok.forget();

            let b = Rc::clone(&bank);
            let err = Closure::wrap(Box::new(move || {
                AudioBank::asset_settled(&b, i, LoadState::Failed);
            }) as Box<dyn FnMut()>);
            let _ = bank.assets[i]
                .element
                .add_event_listener_with_callback("error", err.as_ref().unchecked_ref());
            err.forget();
        }
        Ok(bank)
    }

    fn asset_settled(bank: &Rc<Self>, i: usize, state: LoadState) {
        let asset = &bank.assets[i];
        // canplaythrough can re-fire after seeks; only the first result counts
        if asset.state.get() != LoadState::Pending {
            return;
        }
        asset.state.set(state);
        bank.settled.set(bank.settled.get() + 1);
        if state == LoadState::Failed {
            log::warn!("[audio] failed to load {}; excluded from playback", asset.path);
        }

        let (done, total) = bank.progress();
        overlay::set_loading_progress(&bank.document, done, total);
        if done == total {
            overlay::hide_loading(&bank.document);
            log::info!("[audio] all {} sounds settled", total);
        }
        Self::maybe_start(bank);
    }

    /// Best-effort autoplay unlock. Must be reached from a user-gesture
    /// handler to succeed; a rejection re-arms the gate so the next gesture
    /// retries silently.
    pub fn unlock(bank: &Rc<Self>) {
        if bank.unlocked.get() || bank.unlock_pending.get() {
            return;
        }
        let Some(primer) = bank.assets.first() else {
            bank.unlocked.set(true);
            return;
        };
        bank.unlock_pending.set(true);
        primer.element.set_volume(0.0);
        match primer.element.play() {
            Ok(promise) => {
                let b = Rc::clone(bank);
                spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => {
                            let _ = b.assets[0].element.pause();
                            b.assets[0].element.set_current_time(0.0);
                            b.unlocked.set(true);
                            b.unlock_pending.set(false);
                            log::info!("[gesture] audio unlocked");
                            AudioBank::maybe_start(&b);
                        }
                        Err(_) => {
                            b.unlock_pending.set(false);
                            log::info!("[gesture] unlock rejected; waiting for another gesture");
                        }
                    }
                });
            }
            Err(e) => {
                bank.unlock_pending.set(false);
                log::warn!("[gesture] primer play error: {e:?}");
            }
        }
    }

    fn maybe_start(bank: &Rc<Self>) {
        if bank.playing.get() || !bank.unlocked.get() || !bank.is_settled() {
            return;
        }
        Self::begin_silent_playback(bank);
    }

    /// Start every buffered sound looping at zero volume. From here on a
    /// volume change is audible immediately, with no play-start latency and
    /// no further gesture requirements.
    fn begin_silent_playback(bank: &Rc<Self>) {
        bank.playing.set(true);
        let mut started = 0usize;
        for asset in &bank.assets {
            if asset.state.get() != LoadState::Ready {
                continue;
            }
            asset.element.set_volume(0.0);
            match asset.element.play() {
                Ok(promise) => {
                    started += 1;
                    let path = asset.path.clone();
                    spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::warn!("[audio] loop start rejected for {path}: {e:?}");
                        }
                    });
                }
                Err(e) => log::warn!("[audio] loop start error for {}: {e:?}", asset.path),
            }
        }
        log::info!("[audio] silent playback running on {started} sounds");
    }

    /// Apply a clamped gain to one path's handle. A no-op until silent
    /// playback is running, and for assets that failed to buffer.
    pub fn set_volume(&self, path: &str, level: f32) {
        if !self.playing.get() {
            return;
        }
        if let Some(&i) = self.index.get(path) {
            let asset = &self.assets[i];
            if asset.state.get() == LoadState::Ready {
                asset.element.set_volume(level.clamp(0.0, 1.0) as f64);
            }
        }
    }

    /// Pause, rewind and zero every handle. Later `set_volume` calls are
    /// no-ops until playback is restarted.
    pub fn stop_all(&self) {
        self.playing.set(false);
        for asset in &self.assets {
            let _ = asset.element.pause();
            asset.element.set_current_time(0.0);
            asset.element.set_volume(0.0);
        }
    }

    #[inline]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked.get()
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.settled.get() == self.assets.len()
    }

    /// (settled, total) for the loading indicator.
    #[inline]
    pub fn progress(&self) -> (usize, usize) {
        (self.settled.get(), self.assets.len())
    }
}
