use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_airwave_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("AIRWAVE_CONFIG_PATH", "/tmp/airwave-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/airwave-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("airwave")
            .join("config.toml")
    );
}

#[test]
fn default_paths_fall_back_to_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.config/airwave/config.toml")
    );
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/airwave/airwave.log")
    );
}

#[test]
fn defaults_carry_builtin_stations_and_validate() {
    let s = Settings::default();
    assert_eq!(s.stations.0.len(), 5);
    assert_eq!(s.stations.0[0].name, "Hello FM 106.4");
    assert_eq!(s.audio.initial_volume, 1.0);
    assert_eq!(s.controls.volume_step, 0.1);
    assert_eq!(s.ui.right_time_label, TimeLabel::Total);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[[stations]]
name = "Test FM"
stream_url = "http://example.invalid/test"
cover_image = "test.png"

[[stations]]
name = "Other FM"
stream_url = "http://example.invalid/other"
cover_image = "other.png"

[audio]
initial_volume = 0.4
time_update_ms = 500
buffer_bytes = 262144
connect_timeout_ms = 3000

[controls]
seek_seconds = 3
volume_step = 0.2

[ui]
header_text = "hello"
right_time_label = "remaining"

[log]
level = "debug"
file = "/tmp/airwave-test.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("AIRWAVE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("AIRWAVE__AUDIO__INITIAL_VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.stations.0.len(), 2);
    assert_eq!(s.stations.0[1].name, "Other FM");
    assert_eq!(s.stations.0[0].cover_image, "test.png");
    assert_eq!(s.audio.initial_volume, 0.4);
    assert_eq!(s.audio.time_update_ms, 500);
    assert_eq!(s.audio.prefetch_bytes, 64 * 1024);
    assert_eq!(s.audio.buffer_bytes, 256 * 1024);
    assert_eq!(s.audio.connect_timeout_ms, 3000);
    assert_eq!(s.audio.shutdown_timeout_ms, 1_000);
    assert_eq!(s.controls.seek_seconds, 3);
    assert_eq!(s.controls.volume_step, 0.2);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.right_time_label, TimeLabel::Remaining);
    assert_eq!(s.log.level, "debug");
    assert_eq!(
        s.log.file,
        Some(std::path::PathBuf::from("/tmp/airwave-test.log"))
    );
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[controls]
seek_seconds = 30
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("AIRWAVE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("AIRWAVE__CONTROLS__SEEK_SECONDS", "15");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.seek_seconds, 15);
    assert_eq!(s.stations.0.len(), 5);
}

#[test]
fn validate_rejects_empty_station_list() {
    let mut s = Settings::default();
    s.stations.0.clear();
    assert!(s.validate().is_err());
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.audio.initial_volume = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.controls.volume_step = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.time_update_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.connect_timeout_ms = 0;
    assert!(s.validate().is_err());
}

#[test]
fn validate_rejects_buffer_not_larger_than_prefetch() {
    let mut s = Settings::default();
    s.audio.buffer_bytes = s.audio.prefetch_bytes;
    assert!(s.validate().is_err());

    s.audio.buffer_bytes = s.audio.prefetch_bytes + 1;
    assert!(s.validate().is_ok());
}

#[test]
fn printed_config_lists_every_station() {
    let text = Settings::default().to_toml().unwrap();
    assert_eq!(text.matches("[[stations]]").count(), 5);
    assert!(text.contains("Suriyan FM 93.5"));
    assert!(text.contains("right_time_label = \"total\""));
}
