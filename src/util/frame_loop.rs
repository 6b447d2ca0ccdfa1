//! `requestAnimationFrame` driver with a cancellable handle.
//!
//! ARCHITECTURE
//! ============
//! [`spawn`] runs `tick(timestamp_ms)` once per rendered frame until it
//! returns `false` or the returned [`FrameHandle`] is cancelled. The
//! callback closure owns itself while the loop runs and is released when the
//! loop ends. The handle is `Send + Sync` so it can live inside signal
//! state. Outside the browser build nothing is scheduled.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Current high-resolution time in milliseconds (the `requestAnimationFrame`
/// clock). Returns 0 outside the browser.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or_else(js_sys::Date::now, |p| p.now())
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Cancellation flag shared between a running frame loop and its owner.
///
/// Dropping the handle leaves the loop running; call [`FrameHandle::cancel`]
/// to stop it. The loop checks the flag before every tick, so a cancelled
/// loop never ticks again and releases its callback on the next frame.
#[derive(Clone, Debug, Default)]
pub struct FrameHandle {
    cancelled: Arc<AtomicBool>,
}

impl FrameHandle {
    /// Stop the loop before its next tick.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(feature = "csr")]
struct LoopState {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

#[cfg(feature = "csr")]
impl LoopState {
    fn schedule(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return false;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(_) => true,
            Err(err) => {
                leptos::logging::warn!("requestAnimationFrame failed: {err:?}");
                false
            }
        }
    }

    fn release(&self) {
        self.callback.borrow_mut().take();
    }
}

/// Run `tick` on every animation frame until it returns `false` or the
/// returned handle is cancelled.
///
/// Returns `None` when no frame could be scheduled (no `window`, or outside
/// the browser build).
pub fn spawn<F>(tick: F) -> Option<FrameHandle>
where
    F: FnMut(f64) -> bool + 'static,
{
    #[cfg(feature = "csr")]
    {
        let mut tick = tick;
        let handle = FrameHandle::default();
        let flag = handle.clone();
        let state = Rc::new(LoopState { callback: RefCell::new(None) });
        let state_for_cb = Rc::clone(&state);
        let cb = Closure::wrap(Box::new(move |timestamp: f64| {
            if flag.is_cancelled() || !tick(timestamp) || !state_for_cb.schedule() {
                state_for_cb.release();
            }
        }) as Box<dyn FnMut(f64)>);
        *state.callback.borrow_mut() = Some(cb);

        if state.schedule() {
            Some(handle)
        } else {
            state.release();
            None
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(tick);
        None
    }
}
