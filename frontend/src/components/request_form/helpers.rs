//! DOM-facing glue for the payment request form: toast notifications and
//! the clipboard affordance. Kept behind small function seams so the update
//! logic stays free of direct DOM calls.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

/// Visual flavor of a toast.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Info,
}

/// Surfaces a per-field validation message as `"<label>: <message>"`.
pub fn notify_field(label: &str, message: &str) {
    show_toast(ToastKind::Error, &format!("{}: {}", label, message));
}

/// Displays a transient notification at the bottom of the screen and
/// removes it after a few seconds. Content is set as text, never as markup.
pub fn show_toast(kind: ToastKind, message: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_text_content(Some(message));
            toast.set_class_name(match kind {
                ToastKind::Error => "toast toast-error",
                ToastKind::Info => "toast toast-info",
            });
            let html_toast: HtmlElement = toast.unchecked_into();
            if body.append_child(&html_toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(4000).await;
                    if let Some(parent) = html_toast.parent_node() {
                        parent.remove_child(&html_toast).ok();
                    }
                });
            }
        }
    }
}

/// Copies `uri` through the async Clipboard API.
///
/// Clipboard access can be unavailable (insecure context, denied
/// permission); failure only produces a toast, the request flow is
/// unaffected.
pub fn copy_uri_to_clipboard(uri: String) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            match JsFuture::from(clipboard.write_text(&uri)).await {
                Ok(_) => show_toast(ToastKind::Info, "Link copied to clipboard"),
                Err(err) => {
                    gloo_console::error!("clipboard write failed", err);
                    show_toast(ToastKind::Error, "Could not copy the link");
                }
            }
        }
    });
}
