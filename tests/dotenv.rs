//! Port resolution through a dotenv file and the real process environment.

use std::fs;
use std::sync::Mutex;

use ai_matching::config::env::PORT_VAR;
use ai_matching::ServiceConfig;

// Both tests mutate PORT in the shared process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_dotenv(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(".env");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn dotenv_file_supplies_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::remove_var(PORT_VAR);

    let dir = tempfile::tempdir().unwrap();
    let path = write_dotenv(&dir, "PORT=9123\n");

    let (config, rejected) = ServiceConfig::from_env_file(&path);
    std::env::remove_var(PORT_VAR);

    assert_eq!(config.listener.port, 9123);
    assert!(rejected.is_none());
}

#[test]
fn existing_variable_wins_over_dotenv_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var(PORT_VAR, "7001");

    let dir = tempfile::tempdir().unwrap();
    let path = write_dotenv(&dir, "PORT=9123\n");

    let (config, _) = ServiceConfig::from_env_file(&path);
    std::env::remove_var(PORT_VAR);

    assert_eq!(config.listener.port, 7001);
}

#[test]
fn missing_dotenv_file_falls_back_to_default() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::remove_var(PORT_VAR);

    let dir = tempfile::tempdir().unwrap();
    let (config, rejected) = ServiceConfig::from_env_file(&dir.path().join(".env"));

    assert_eq!(config.listener.port, 8000);
    assert!(rejected.is_none());
}
