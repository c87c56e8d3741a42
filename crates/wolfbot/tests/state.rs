use std::fs;

use wolfbot::{ChannelKey, Config, Error, State};

#[test]
fn loads_and_reloads_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wolfbot.toml");

    fs::write(&path, "[specialChannels]\nSTAFF_LOG = \"300000000000000003\"\n").unwrap();

    let state = State::load(&path).unwrap();
    let before = state.config();

    assert_eq!(
        before.special_channel(ChannelKey::StaffLog),
        Some("300000000000000003")
    );

    fs::write(&path, "[specialChannels]\nSTAFF_LOG = 300000000000000005\n").unwrap();
    state.reload_config().unwrap();

    assert_eq!(
        state.config().special_channel(ChannelKey::StaffLog),
        Some("300000000000000005")
    );
    assert_eq!(
        before.special_channel(ChannelKey::StaffLog),
        Some("300000000000000003")
    );
}

#[test]
fn failed_reload_keeps_the_current_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wolfbot.toml");

    fs::write(&path, "[specialChannels]\nSTAFF_LOG = \"300000000000000003\"\n").unwrap();

    let state = State::load(&path).unwrap();

    fs::write(&path, "[specialChannels\n").unwrap();

    assert!(matches!(state.reload_config(), Err(Error::TomlError(_))));
    assert_eq!(
        state.config().special_channel(ChannelKey::StaffLog),
        Some("300000000000000003")
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        State::load(dir.path().join("missing.toml")),
        Err(Error::IoError(_))
    ));
}

#[test]
fn in_memory_state_has_nothing_to_reload() {
    let state = State::new(Config::default());

    state.reload_config().unwrap();

    assert_eq!(state.config().special_channel(ChannelKey::StaffLog), None);
}
