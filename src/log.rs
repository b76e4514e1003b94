// src/log.rs
//! Subscriber setup for the CLI. Library code only emits through the
//! `logf!`/`logd!`/`loge!` macros and never installs a subscriber itself.

use tracing::Level;

/// Install a stderr subscriber. `verbose` raises the level from WARN to INFO.
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let level = if verbose { Level::INFO } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
