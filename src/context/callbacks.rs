//! Methods to set callbacks on a context.
//!
//! Callbacks are boxed functions owned by the context, called when the relevant event happens during a solve.

use crate::{context::Context, trace::Trace};

/// The type of a callback for trace events.
pub type CallbackTrace = dyn FnMut(Trace);

impl Context {
    /// Sets a callback to be called with each [Trace] event of a solve.
    pub fn set_callback_trace(&mut self, callback: Box<CallbackTrace>) {
        self.callback_trace = Some(callback);
    }

    /// Removes the trace callback, if one is set.
    pub fn clear_callback_trace(&mut self) {
        self.callback_trace = None;
    }
}
