use super::SettingsError;
use super::load::{default_config_path, resolve_config_path};
use super::merge::{merge_values, with_defaults};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
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

fn table(src: &str) -> toml::Value {
    toml::Value::Table(src.parse::<toml::Table>().unwrap())
}

#[test]
fn merge_recurses_into_nested_tables() {
    let mut base = table(
        r#"
autoplay = false
[display]
times = true
volume_bar = true
"#,
    );
    merge_values(&mut base, table("[display]\ntimes = false\n"));

    assert_eq!(base["autoplay"].as_bool(), Some(false));
    assert_eq!(base["display"]["times"].as_bool(), Some(false));
    assert_eq!(base["display"]["volume_bar"].as_bool(), Some(true));
}

#[test]
fn merge_replaces_when_either_side_is_not_a_table() {
    let mut base = table("[animate]\ntoolbar = true\n");
    merge_values(&mut base, table("animate = false\n"));
    assert_eq!(base["animate"].as_bool(), Some(false));

    let mut base = table("volume = 1.0\n");
    merge_values(&mut base, table("[volume]\nlevel = 3\n"));
    assert_eq!(base["volume"]["level"].as_integer(), Some(3));
}

#[test]
fn merge_passes_unknown_keys_through() {
    let mut base = table("autoplay = false\n");
    merge_values(&mut base, table("skin = \"dark\"\n"));
    assert_eq!(base["skin"].as_str(), Some("dark"));

    // Unknown keys do not prevent building typed options.
    let opts: PlayerOptions = with_defaults(table("autoplay = true\nskin = \"dark\"\n")).unwrap();
    assert!(opts.autoplay);
}

#[test]
fn cinema_options_merge_keeps_untouched_defaults() {
    let opts = CinemaOptions::merged(table(
        r#"
volume = 0.25
[display]
progress_bar = false
[animate]
toolbar = false
"#,
    ))
    .unwrap();

    assert!(!opts.autoplay);
    assert_eq!(opts.volume, 0.25);
    assert!(!opts.display.progress_bar);
    assert!(opts.display.times);
    assert!(opts.display.full_screen_btn);
    assert!(opts.display.volume_bar);
    assert!(!opts.animate.toolbar);
    assert!(opts.animate.volume_bar);
}

#[test]
fn merged_options_reject_mistyped_values() {
    let err = PlayerOptions::merged(table("autoplay = \"sometimes\"\n")).unwrap_err();
    assert!(matches!(err, SettingsError::Deserialize(_)));
}

#[test]
fn validate_rejects_out_of_range_volume_and_empty_extensions() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.cinema.volume = 1.5;
    assert!(matches!(s.validate(), Err(SettingsError::Invalid(_))));

    s.cinema.volume = f64::NAN;
    assert!(s.validate().is_err());

    let s = Settings {
        library: LibrarySettings {
            extensions: vec![" ".into()],
            ..LibrarySettings::default()
        },
        ..Settings::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn resolve_config_path_prefers_playdeck_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("PLAYDECK_CONFIG_PATH", "/tmp/playdeck-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/playdeck-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("playdeck")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("playdeck")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file_merges_over_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
autoplay = true

[cinema]
volume = 0.5

[cinema.display]
times = false

[library]
extensions = ["mp3"]
recursive = false
include_hidden = false
follow_links = false
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("PLAYDECK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("PLAYDECK__CINEMA__VOLUME");

    let s = Settings::load().unwrap();
    assert!(s.player.autoplay);
    assert!(!s.cinema.autoplay);
    assert_eq!(s.cinema.volume, 0.5);
    assert!(!s.cinema.display.times);
    assert!(s.cinema.display.progress_bar);
    assert!(s.cinema.animate.toolbar);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.library.max_depth, None);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[cinema]
volume = 0.8
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("PLAYDECK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("PLAYDECK__CINEMA__VOLUME", "0.1");

    let s = Settings::load().unwrap();
    assert_eq!(s.cinema.volume, 0.1);
}

#[test]
fn settings_load_without_file_yields_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let _g1 = EnvGuard::set("PLAYDECK_CONFIG_PATH", missing.to_str().unwrap());
    let _g2 = EnvGuard::remove("PLAYDECK__CINEMA__VOLUME");

    assert_eq!(Settings::load().unwrap(), Settings::default());
}
