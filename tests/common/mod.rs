use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("contact_table", LevelFilter::Debug)
            .is_test(true)
            .parse_default_env();

        // another test binary may have installed a logger already
        let _ = builder.try_init();
    });
}
