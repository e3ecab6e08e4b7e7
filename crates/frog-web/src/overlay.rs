use frog_core::Frog;
use web_sys as web;

// Full-screen overlays: #start-overlay (the unlock gesture surface),
// #loading-overlay (preload progress), #reveal-overlay (end-of-round map).

pub fn hide_start(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let _ = el.set_attribute("style", "display:none");
    }
}

pub fn set_loading_progress(document: &web::Document, done: usize, total: usize) {
    if let Some(el) = document.get_element_by_id("loading-overlay") {
        el.set_text_content(Some(&format!("Loading sounds {done}/{total}")));
    }
}

pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("loading-overlay") {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Show every frog's position as an absolutely-positioned marker, with the
/// target flagged. Markers are rebuilt from scratch each call.
pub fn show_reveal(document: &web::Document, frogs: &[Frog]) {
    let Some(overlay) = document.get_element_by_id("reveal-overlay") else {
        log::warn!("[round] missing #reveal-overlay; skipping position reveal");
        return;
    };
    overlay.set_text_content(None); // drop any markers from a previous call
    for frog in frogs {
        let class = if frog.is_target {
            "frog-marker target"
        } else {
            "frog-marker"
        };
        let label = if frog.is_target {
            format!("{} (target)", frog.kind)
        } else {
            frog.kind.clone()
        };
        if let Ok(marker) = document.create_element("div") {
            let _ = marker.set_attribute("class", class);
            let _ = marker.set_attribute(
                "style",
                &format!("left:{}%;top:{}%", frog.position.x, frog.position.y),
            );
            marker.set_text_content(Some(&label));
            let _ = overlay.append_child(&marker);
        }
    }
    let _ = overlay.set_attribute("style", "");
}
