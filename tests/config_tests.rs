use clap::Parser;
use std::path::PathBuf;
use walking_cube::cli::Cli;
use walking_cube::config::AppConfig;
use walking_cube::walk::{Easing, WalkMode};

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "walking-cube-{}-{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("write temp config");
    path
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config = AppConfig::from_json(
            r#"{ "walk": { "mode": "fixed", "step_degrees": 2.5 }, "render": { "shadows": false } }"#,
        )
        .unwrap();

        assert_eq!(config.walk.mode, WalkMode::Fixed);
        assert_eq!(config.walk.step_degrees, 2.5);
        assert_eq!(config.walk.duration_ms, 2000);
        assert!(!config.render.shadows);
        assert_eq!(config.render.shadow_map_size, 2048);
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn test_easing_names_are_kebab_case() {
        let config = AppConfig::from_json(r#"{ "walk": { "easing": "cubic-out" } }"#).unwrap();
        assert_eq!(config.walk.easing, Easing::CubicOut);
        assert!(AppConfig::from_json(r#"{ "walk": { "easing": "CubicOut" } }"#).is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let cases = [
            r#"{ "walk": { "duration_ms": 0 } }"#,
            r#"{ "walk": { "step_degrees": 0.0 } }"#,
            r#"{ "walk": { "step_degrees": -1.0 } }"#,
            r#"{ "window": { "width": 0 } }"#,
            r#"{ "render": { "shadow_map_size": 0 } }"#,
            r#"{ "render": { "shadow_map_size": 65536 } }"#,
            r#"{ "render": { "shadow_extent": 0.0 } }"#,
        ];
        for case in cases {
            assert!(AppConfig::from_json(case).is_err(), "accepted {}", case);
        }
    }

    #[test]
    fn test_largest_shadow_map_is_accepted() {
        let config = AppConfig::from_json(r#"{ "render": { "shadow_map_size": 16384 } }"#)
            .expect("16384 is within bounds");
        assert_eq!(config.render.shadow_map_size, 16384);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(AppConfig::from_json("{ walk: ").is_err());
    }

    #[test]
    fn test_load_reports_path_on_missing_file() {
        let path = std::env::temp_dir().join("walking-cube-does-not-exist.json");
        let err = AppConfig::load(&path).unwrap_err();
        assert!(format!("{}", err).starts_with("reading config"));
    }

    #[test]
    fn test_load_reports_path_on_bad_contents() {
        let path = temp_config("bad", "[1, 2, 3]");
        let err = AppConfig::load(&path).unwrap_err();
        assert!(format!("{}", err).starts_with("parsing config"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["walking-cube"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_cli_flags_override() {
        let cli = Cli::parse_from([
            "walking-cube",
            "--mode",
            "fixed",
            "--step-degrees",
            "3",
            "--easing",
            "quad-out",
            "--duration-ms",
            "500",
            "--no-shadows",
            "--width",
            "640",
            "--height",
            "480",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.walk.mode, WalkMode::Fixed);
        assert_eq!(config.walk.step_degrees, 3.0);
        assert_eq!(config.walk.easing, Easing::QuadOut);
        assert_eq!(config.walk.duration_ms, 500);
        assert!(!config.render.shadows);
        assert_eq!((config.window.width, config.window.height), (640, 480));
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let path = temp_config("override", r#"{ "walk": { "mode": "fixed", "duration_ms": 900 } }"#);
        let cli = Cli::parse_from([
            "walking-cube".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "--mode".to_string(),
            "tween".to_string(),
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.walk.mode, WalkMode::Tween);
        assert_eq!(config.walk.duration_ms, 900);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_cli_rejects_invalid_override() {
        let cli = Cli::parse_from(["walking-cube", "--step-degrees", "0"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["walking-cube", "--mode", "hop"]).is_err());
    }
}
