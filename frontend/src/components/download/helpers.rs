//! DOM helpers for the download trigger: opening the granted URL and
//! showing transient feedback toasts.

/// Opens the signed URL in a new tab so the catalogue page stays put. Popup
/// blockers turn this into a toast instead of a silent no-op.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => show_toast("Your browser blocked the download window. Please allow popups."),
        Err(_) => show_toast("Could not open the download window."),
    }
}

/// Displays a temporary toast at the bottom of the page, removed again
/// after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_class_name("toast");
    // Text content, not inner_html: messages never carry markup.
    toast.set_text_content(Some(message));

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}
