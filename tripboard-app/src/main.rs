//! # Tripboard
//!
//! Desktop entry point of the Tripboard travel dashboard: four content panels
//! (travel, calendar, weather, map) on a resizable 2×2 grid whose layout is
//! kept between sessions.
//!
//! ## Usage
//!
//! ```bash
//! # Run with the saved layout
//! tripboard
//!
//! # Start from the default layout and keep nothing on disk
//! tripboard --reset-layout --no-persist
//!
//! # Use a custom config and layout directory
//! tripboard --config ./tripboard.toml --storage-dir ./state
//! ```

use clap::{Arg, ArgMatches, Command};
use eframe::egui;
use std::path::PathBuf;
use tripboard_core::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use tripboard_core::Config;

mod app;
mod content;

/// Command line arguments for Tripboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppArgs {
    /// Config file to use instead of the default location
    pub config_path: Option<PathBuf>,
    /// Directory holding the layout slot
    pub storage_dir: Option<PathBuf>,
    /// Keep the layout in memory only
    pub no_persist: bool,
    /// Discard the saved layout on startup
    pub reset_layout: bool,
    /// Enable debug logging
    pub debug: bool,
    /// Window width
    pub width: Option<f32>,
    /// Window height
    pub height: Option<f32>,
}

fn build_cli() -> Command {
    Command::new("Tripboard")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Tripboard Team")
        .about("Travel dashboard with a resizable four-panel grid")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file to load")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("storage-dir")
                .long("storage-dir")
                .value_name("DIR")
                .help("Directory where the layout is saved")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no-persist")
                .long("no-persist")
                .help("Do not read or write the saved layout")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("reset-layout")
                .long("reset-layout")
                .help("Start from the default layout")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("PIXELS")
                .help("Initial window width")
                .value_parser(clap::value_parser!(f32)),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("PIXELS")
                .help("Initial window height")
                .value_parser(clap::value_parser!(f32)),
        )
}

fn args_from_matches(matches: &ArgMatches) -> AppArgs {
    AppArgs {
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        storage_dir: matches.get_one::<PathBuf>("storage-dir").cloned(),
        no_persist: matches.get_flag("no-persist"),
        reset_layout: matches.get_flag("reset-layout"),
        debug: matches.get_flag("debug"),
        width: matches.get_one::<f32>("width").copied(),
        height: matches.get_one::<f32>("height").copied(),
    }
}

/// Parse command line arguments
fn parse_args() -> AppArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Load the configuration and apply command line overrides.
///
/// Logging is not set up yet when this runs, so problems are returned as
/// messages for the caller to log.
fn resolve_config(args: &AppArgs) -> (Config, Vec<String>) {
    let mut warnings = Vec::new();
    let mut config = match &args.config_path {
        Some(path) => Config::load_from_file(path).unwrap_or_else(|e| {
            warnings.push(format!(
                "Ignoring config file {} ({}): {}",
                path.display(),
                e.category(),
                e
            ));
            Config::default()
        }),
        None => Config::load_or_default(),
    };

    if let Some(dir) = &args.storage_dir {
        config.storage.directory = Some(dir.clone());
    }
    if args.no_persist {
        config.storage.enabled = false;
    }
    if args.debug {
        config.advanced.debug_mode = true;
    }
    if let Some(width) = args.width {
        if width < MIN_WINDOW_WIDTH {
            warnings.push(format!("Window width {} raised to {}", width, MIN_WINDOW_WIDTH));
        }
        config.ui.window_width = width.max(MIN_WINDOW_WIDTH);
    }
    if let Some(height) = args.height {
        if height < MIN_WINDOW_HEIGHT {
            warnings.push(format!("Window height {} raised to {}", height, MIN_WINDOW_HEIGHT));
        }
        config.ui.window_height = height.max(MIN_WINDOW_HEIGHT);
    }

    if let Err(e) = config.validate() {
        warnings.push(format!("Invalid settings, using defaults: {}", e));
        config = Config::default();
    }

    (config, warnings)
}

/// Maximum log level: the configured one, at least `debug` in debug mode.
fn log_level(config: &Config) -> tracing::Level {
    let configured = config
        .advanced
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);
    if config.advanced.debug_mode {
        configured.max(tracing::Level::DEBUG)
    } else {
        configured
    }
}

/// Initialize logging at `level`
fn init_logging(level: tracing::Level) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let filter = level.to_string().to_lowercase();
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
            .try_init();
    }

    tripboard_core::init_tracing_at(level);
}

fn main() -> anyhow::Result<()> {
    let args = parse_args();
    let (config, warnings) = resolve_config(&args);
    init_logging(log_level(&config));

    tracing::info!("Starting Tripboard v{}", env!("CARGO_PKG_VERSION"));
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tripboard")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    let run_result = eframe::run_native(
        "Tripboard",
        options,
        Box::new(move |cc| {
            setup_visuals(&cc.egui_ctx, &config.ui.theme);
            Ok(Box::new(app::Dashboard::new(config, args.reset_layout)))
        }),
    );

    if let Err(e) = run_result {
        anyhow::bail!("Application exited with error: {}", e);
    }

    Ok(())
}

/// Setup visual theme for the application
fn setup_visuals(ctx: &egui::Context, theme: &str) {
    let mut visuals = match theme {
        "light" => egui::Visuals::light(),
        _ => egui::Visuals::dark(),
    };

    // Teal accent
    visuals.selection.bg_fill = egui::Color32::from_rgb(0, 128, 128);
    visuals.hyperlink_color = egui::Color32::from_rgb(64, 176, 176);

    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> AppArgs {
        let matches = build_cli().try_get_matches_from(argv).unwrap();
        args_from_matches(&matches)
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&["tripboard"]), AppArgs::default());
    }

    #[test]
    fn test_all_arguments() {
        let args = parse(&[
            "tripboard",
            "--config",
            "board.toml",
            "--storage-dir",
            "state",
            "--no-persist",
            "--reset-layout",
            "-d",
            "--width",
            "1024",
            "--height",
            "640",
        ]);

        assert_eq!(args.config_path, Some(PathBuf::from("board.toml")));
        assert_eq!(args.storage_dir, Some(PathBuf::from("state")));
        assert!(args.no_persist && args.reset_layout && args.debug);
        assert_eq!(args.width, Some(1024.0));
        assert_eq!(args.height, Some(640.0));
    }

    #[test]
    fn test_invalid_width_is_rejected() {
        assert!(build_cli()
            .try_get_matches_from(["tripboard", "--width", "wide"])
            .is_err());
    }

    #[test]
    fn test_overrides_apply_to_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let mut on_disk = Config::default();
        on_disk.ui.theme = "light".to_string();
        on_disk.save_to_file(&config_path).unwrap();

        let args = AppArgs {
            config_path: Some(config_path),
            storage_dir: Some(temp_dir.path().join("state")),
            no_persist: true,
            width: Some(900.0),
            ..Default::default()
        };
        let (config, warnings) = resolve_config(&args);

        assert!(warnings.is_empty());
        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.storage.directory, Some(temp_dir.path().join("state")));
        assert!(!config.storage.enabled);
        assert_eq!(config.ui.window_width, 900.0);
        assert_eq!(config.ui.window_height, 800.0);
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = AppArgs {
            config_path: Some(temp_dir.path().join("missing.toml")),
            ..Default::default()
        };
        let (config, warnings) = resolve_config(&args);
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("IO"));
    }

    #[test]
    fn test_small_window_overrides_are_clamped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        Config::default().save_to_file(&config_path).unwrap();

        let args = AppArgs {
            config_path: Some(config_path),
            width: Some(10.0),
            height: Some(299.0),
            ..Default::default()
        };
        let (config, warnings) = resolve_config(&args);

        assert_eq!(config.ui.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(config.ui.window_height, MIN_WINDOW_HEIGHT);
        assert_eq!(warnings.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_follows_config() {
        let mut config = Config::default();
        assert_eq!(log_level(&config), tracing::Level::INFO);

        config.advanced.log_level = "warn".to_string();
        assert_eq!(log_level(&config), tracing::Level::WARN);

        config.advanced.debug_mode = true;
        assert_eq!(log_level(&config), tracing::Level::DEBUG);

        config.advanced.log_level = "trace".to_string();
        assert_eq!(log_level(&config), tracing::Level::TRACE);
    }

    #[test]
    fn test_debug_flag_enables_debug_logging() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        Config::default().save_to_file(&config_path).unwrap();

        let args = AppArgs {
            config_path: Some(config_path),
            debug: true,
            ..Default::default()
        };
        let (config, _) = resolve_config(&args);
        assert!(config.advanced.debug_mode);
        assert_eq!(log_level(&config), tracing::Level::DEBUG);
    }
}
