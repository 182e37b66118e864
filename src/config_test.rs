use super::*;

/// # Safety
/// Tests that touch these vars serialize on `ENV_LOCK` to avoid env races.
unsafe fn clear_app_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("STORE_BACKEND");
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("DB_MAX_CONNECTIONS");
        std::env::remove_var("DB_ACQUIRE_TIMEOUT_SECS");
        std::env::remove_var("PANEL_DIRECTION");
        std::env::remove_var("PANEL_SPACING");
    }
}

static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[test]
fn from_env_requires_database_url_for_postgres() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_app_env() };

    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn from_env_defaults_with_database_url() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_app_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/paintings");
    }

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(
        cfg.store,
        StoreConfig::Postgres(DatabaseConfig {
            url: "postgres://localhost/paintings".into(),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
        })
    );
    assert_eq!(cfg.panel, PanelConfig { direction: Direction::Column, spacing: DEFAULT_PANEL_SPACING });

    unsafe { clear_app_env() };
}

#[test]
fn from_env_memory_backend_needs_no_database() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_app_env();
        std::env::set_var("STORE_BACKEND", "memory");
        std::env::set_var("PORT", "8080");
        std::env::set_var("PANEL_DIRECTION", "row");
        std::env::set_var("PANEL_SPACING", "12");
    }

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.store, StoreConfig::Memory);
    assert_eq!(cfg.panel.direction, Direction::Row);
    assert_eq!(cfg.panel.spacing, 12);

    unsafe { clear_app_env() };
}

#[test]
fn from_env_rejects_unknown_backend() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_app_env();
        std::env::set_var("STORE_BACKEND", "sqlite");
    }

    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(msg) if msg.contains("sqlite")));

    unsafe { clear_app_env() };
}

#[test]
fn from_env_rejects_unknown_direction() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_app_env();
        std::env::set_var("STORE_BACKEND", "memory");
        std::env::set_var("PANEL_DIRECTION", "diagonal");
    }

    assert!(AppConfig::from_env().is_err());

    unsafe { clear_app_env() };
}

#[test]
fn from_env_rejects_unparseable_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_app_env();
        std::env::set_var("STORE_BACKEND", "memory");
        std::env::set_var("PORT", "abc");
    }

    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(msg) if msg.contains("PORT")));

    unsafe { clear_app_env() };
}

#[test]
fn parse_port_bounds() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert!(parse_port(Some("70000")).is_err());
    assert!(parse_port(Some("")).is_err());
}

#[test]
fn env_parse_invalid_falls_back_to_default() {
    unsafe { std::env::set_var("__TEST_PM_INVALID__", "notanumber") };
    let val: u32 = env_parse("__TEST_PM_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__TEST_PM_INVALID__") };
}

#[test]
fn env_parse_missing_returns_default() {
    let val: u16 = env_parse("__TEST_PM_NONEXISTENT__", 42);
    assert_eq!(val, 42);
}
