//! Container width observation.
//!
//! Wraps the browser `ResizeObserver` as the layout engine's
//! dimension-change event source: each notification delivers the observed
//! element's content width to the callback. Requires a browser environment,
//! so everything is gated behind `hydrate`.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Observe `target` and invoke `on_width` with its content-box width on
/// every resize notification.
///
/// Returns the observer so the caller can `disconnect()` it on unmount; the
/// callback itself is leaked for the observer's lifetime.
#[cfg(feature = "hydrate")]
pub fn observe_width(
    target: &web_sys::Element,
    mut on_width: impl FnMut(f64) + 'static,
) -> Option<web_sys::ResizeObserver> {
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<web_sys::ResizeObserverEntry>() {
                on_width(entry.content_rect().width());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let observer = web_sys::ResizeObserver::new(cb.as_ref().unchecked_ref()).ok()?;
    observer.observe(target);
    cb.forget();
    Some(observer)
}
