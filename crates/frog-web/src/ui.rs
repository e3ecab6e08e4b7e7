use crate::dom;
use web_sys as web;

// HUD bindings. The game screen exposes #hud-timer, #hud-attempts,
// #hud-target and #message; all setters are no-ops if an element is absent.

pub fn set_timer_text(document: &web::Document, seconds: u32) {
    dom::set_text(document, "hud-timer", &format!("Time left: {seconds}s"));
}

pub fn set_attempts_text(document: &web::Document, attempts: u32) {
    dom::set_text(document, "hud-attempts", &format!("Attempts left: {attempts}"));
}

pub fn set_target_label(document: &web::Document, kind: &str) {
    dom::set_text(document, "hud-target", &format!("Find the {kind}"));
}

pub fn set_message(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id("message") {
        el.set_text_content(Some(text));
        let _ = el.set_attribute("style", "");
    }
}

pub fn clear_message(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("message") {
        el.set_text_content(Some(""));
        let _ = el.set_attribute("style", "display:none");
    }
}
