#![cfg(test)]

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs a test logger once per test binary. `RUST_LOG` overrides the default level.
pub fn init_test_logger() {
    INIT.call_once_force(|_| {
        let _ = Builder::new()
            .filter_level(LevelFilter::Warn)
            .filter_module("classic_tables", LevelFilter::Debug)
            .parse_default_env()
            .is_test(true)
            .try_init();
    });
}
