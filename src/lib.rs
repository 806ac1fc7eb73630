#![doc(test(attr(deny(warnings))))]

//! Moments Writer drives the memorial intake form from a terminal shell and
//! ships the stylesheet theming tool. The form behaviour itself lives in the
//! `moments-core` crate; this crate wires it to storage, config and the CLI.

pub mod cli;
pub mod errors;
pub mod theme;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Moments Writer tracing initialized.");
    });
}
