//! Configuration Tests

use containable_domain::{Directive, Error};
use containable_infrastructure::config::{ConfigLoader, ContainerConfig};
use containable_infrastructure::container::ContainerBuilder;
use figment::Jail;

#[test]
fn test_default_config() {
    let config = ContainerConfig::default();

    assert_eq!(config.separator, ".");
    assert_eq!(config.directives, vec!["cache", "fresh"]);
    assert_eq!(config.default_directive, "cache");
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert!(config.logging.file_output.is_none());
}

#[test]
fn test_register_options_from_defaults() {
    let options = ContainerConfig::default().register_options().unwrap();

    assert_eq!(options.separator, ".");
    assert_eq!(options.directives, vec![Directive::Cache, Directive::Fresh]);
    assert_eq!(options.default_directive, Directive::Cache);
}

#[test]
fn test_register_options_reject_unknown_directive() {
    let config = ContainerConfig {
        directives: vec!["cache".to_string(), "bogus".to_string()],
        ..ContainerConfig::default()
    };

    let error = config.register_options().unwrap_err();

    assert!(matches!(error, Error::InvalidDirective { .. }));
    assert!(error.to_string().starts_with("Invalid directive: :bogus."));
}

#[test]
fn test_register_options_reject_default_outside_allowed() {
    let config = ContainerConfig {
        directives: vec!["fresh".to_string()],
        default_directive: "cache".to_string(),
        ..ContainerConfig::default()
    };

    let error = config.register_options().unwrap_err();

    assert_eq!(
        error.to_string(),
        "Invalid directive: :cache. Use :fresh."
    );
}

#[test]
fn test_load_defaults_without_sources() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config, ContainerConfig::default());
        Ok(())
    });
}

#[test]
fn test_load_from_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
                separator = "::"
                default_directive = "fresh"

                [logging]
                level = "debug"
            "#,
        )?;

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.separator, "::");
        assert_eq!(config.default_directive, "fresh");
        assert_eq!(config.directives, vec!["cache", "fresh"]);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new()
            .with_config_path("absent.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config, ContainerConfig::default());
        Ok(())
    });
}

#[test]
fn test_default_config_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file("containable.toml", r#"separator = "/""#)?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.separator, "/");
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", r#"separator = "::""#)?;
        jail.set_env("CONTAINABLE__SEPARATOR", "/");
        jail.set_env("CONTAINABLE__LOGGING__LEVEL", "warn");

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.separator, "/");
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("APP__DEFAULT_DIRECTIVE", "fresh");

        let config = ConfigLoader::new()
            .with_env_prefix("APP")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.default_directive, "fresh");
        Ok(())
    });
}

#[test]
fn test_load_rejects_invalid_directive() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", r#"default_directive = "bogus""#)?;

        let result = ConfigLoader::new().with_config_path("custom.toml").load();

        assert!(matches!(result, Err(Error::InvalidDirective { .. })));
        Ok(())
    });
}

#[test]
fn test_load_rejects_empty_separator() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", r#"separator = """#)?;

        let result = ConfigLoader::new().with_config_path("custom.toml").load();

        assert!(matches!(result, Err(Error::Configuration { .. })));
        Ok(())
    });
}

#[test]
fn test_load_rejects_empty_directive_list() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "directives = []")?;

        let result = ConfigLoader::new().with_config_path("custom.toml").load();

        assert!(matches!(result, Err(Error::Configuration { .. })));
        Ok(())
    });
}

#[test]
fn test_load_rejects_invalid_log_level() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
                [logging]
                level = "loud"
            "#,
        )?;

        let result = ConfigLoader::new().with_config_path("custom.toml").load();

        let error = result.unwrap_err();
        assert!(error.to_string().contains("Invalid log level: loud"));
        Ok(())
    });
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");

    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new().with_config_path(&path);
        let config = ContainerConfig {
            separator: "::".to_string(),
            directives: vec!["fresh".to_string()],
            default_directive: "fresh".to_string(),
            ..ContainerConfig::default()
        };

        loader
            .save_to_file(&config, &path)
            .map_err(|e| e.to_string())?;
        let reloaded = loader.load().map_err(|e| e.to_string())?;

        assert_eq!(reloaded, config);
        assert_eq!(loader.config_path(), Some(path.as_path()));
        Ok(())
    });
}

#[test]
fn test_builder_from_config() {
    let config = ContainerConfig {
        separator: "::".to_string(),
        directives: vec!["fresh".to_string()],
        default_directive: "fresh".to_string(),
        ..ContainerConfig::default()
    };
    let container = ContainerBuilder::from_config(&config).unwrap().build();

    container
        .namespace("db", |db| db.register_fn("conn", || 1_u8))
        .unwrap();

    assert!(container.contains_key("db::conn").unwrap());
    let first = container.resolve("db::conn").unwrap();
    let second = container.resolve("db::conn").unwrap();
    assert!(!std::sync::Arc::ptr_eq(&first, &second));
}
