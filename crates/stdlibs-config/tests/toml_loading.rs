//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use std::path::PathBuf;

use figment::Jail;
use stdlibs_config::{ConfigError, StdlibsConfig};

#[test]
fn loads_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "stdlibs.toml",
            r#"
[paths]
cache_dir = "/tmp/stdlibs-cache"
output_dir = "generated"

[tools]
download = ["curl", "-LO"]
python = "/opt/python3.11/bin/python3"

[output]
generator = "make tables"
"#,
        )?;

        let config = StdlibsConfig::load().expect("config loads");
        assert_eq!(config.paths.cache_dir, PathBuf::from("/tmp/stdlibs-cache"));
        assert_eq!(config.paths.output_dir, PathBuf::from("generated"));
        assert_eq!(config.tools.download, ["curl", "-LO"]);
        assert_eq!(config.tools.extract, ["tar", "-xvzf"]);
        assert_eq!(config.tools.python, "/opt/python3.11/bin/python3");
        assert_eq!(config.output.generator, "make tables");
        assert!(config.output.header.contains("MIT"));
        Ok(())
    });
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("stdlibs.toml", "[output]\nheader = \"# mine\\n\"\n")?;

        let config = StdlibsConfig::load().expect("config loads");
        assert_eq!(config.output.header, "# mine\n");
        assert_eq!(config.paths.cache_dir, PathBuf::from(".cache"));
        assert_eq!(config.tools.download, ["wget", "-c"]);
        Ok(())
    });
}

#[test]
fn empty_extract_command_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("stdlibs.toml", "[tools]\nextract = []\n")?;

        let err = StdlibsConfig::load().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "tools.extract"
        ));
        Ok(())
    });
}

#[test]
fn mistyped_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("stdlibs.toml", "[paths]\ncache_dir = [1, 2]\n")?;

        let err = StdlibsConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
