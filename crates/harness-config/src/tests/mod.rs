
use std::env;

use tempfile::TempDir;

/// RAII guard that sets environment variables and restores the previous
/// values on drop. Tests touching the environment must also be #[serial].
pub(crate) struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub(crate) fn set(vars: &[(&str, Option<&str>)]) -> Self {
        let mut saved = Vec::with_capacity(vars.len());
        for (name, value) in vars {
            saved.push(((*name).to_string(), env::var(name).ok()));
            unsafe {
                match value {
                    Some(value) => env::set_var(name, value),
                    None => env::remove_var(name),
                }
            }
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            unsafe {
                match value {
                    Some(value) => env::set_var(name, value),
                    None => env::remove_var(name),
                }
            }
        }
    }
}

/// Point the loader at a fresh temp directory and clear every override
/// variable so ambient environment cannot leak into a test.
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let dir = TempDir::new().expect("Failed to create temp config dir");
    let path = dir.path().to_string_lossy().to_string();
    let guard = EnvGuard::set(&[
        ("HARNESS_CONFIG_DIR", Some(path.as_str())),
        ("HARNESS_HOST", None),
        ("HARNESS_PORT", None),
        ("HARNESS_SYNC_PREFIX", None),
        ("HARNESS_INITIAL_WORKERS", None),
        ("HARNESS_LOG_LEVEL", None),
        ("HARNESS_LOG_COLORED", None),
        ("HARNESS_LOG_FILE", None),
    ]);
    (dir, guard)
}

pub(crate) fn write_config(dir: &TempDir, contents: &str) {
    std::fs::write(dir.path().join("config.toml"), contents)
        .expect("Failed to write config.toml");
}
