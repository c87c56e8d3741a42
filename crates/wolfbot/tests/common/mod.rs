#![allow(dead_code)]

use std::sync::{Mutex, Once, PoisonError};

use howl::Permissions;
use log::{Level, LevelFilter, Log, Metadata, Record};
use test_utils::{TestBuilder, TestContext, factory::*};
use wolfbot::{Config, Error, State};

pub const WOLF_ID: &str = "200000000000000001";
pub const STRANGER_ID: &str = "200000000000000002";
pub const GENERAL_ID: &str = "300000000000000001";
pub const RANDOM_ID: &str = "300000000000000002";
pub const STAFF_LOG_ID: &str = "300000000000000003";

pub fn staff_log_config() -> Config {
    Config::from_toml(&format!("[specialChannels]\nSTAFF_LOG = \"{STAFF_LOG_ID}\"\n")).unwrap()
}

/// A guild with #general, #random and #staff-log, and one member, `wolf`.
pub fn den(everyone: Permissions) -> TestBuilder {
    TestBuilder::new()
        .with_guild(create_test_guild(GUILD_ID, "Den", everyone))
        .with_channel(create_test_text_channel(GENERAL_ID, GUILD_ID, "general", 0))
        .with_channel(create_test_text_channel(RANDOM_ID, GUILD_ID, "random", 1))
        .with_channel(create_test_text_channel_with_overwrites(
            STAFF_LOG_ID,
            GUILD_ID,
            "staff-log",
            2,
            vec![deny_read(GUILD_ID)],
        ))
        .with_member(create_test_member_with_nick(
            GUILD_ID,
            create_test_tagged_user(WOLF_ID, "wolf", "0042"),
            "Alpha",
        ))
}

pub fn build(builder: TestBuilder) -> TestContext<Error, State> {
    builder.build(State::new(staff_log_config()))
}

struct CaptureLogger;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Installs a logger that keeps every record for later assertions.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Error level records mentioning `needle`.
pub fn logged_errors(needle: &str) -> Vec<String> {
    RECORDS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .filter(|(level, message)| *level == Level::Error && message.contains(needle))
        .map(|(_, message)| message.clone())
        .collect()
}
