use bevy::log::LogPlugin;
use bevy::prelude::*;

use refboard::board::BoardPlugin;
use refboard::config::ConfigPlugin;
use refboard::constants::{DEFAULT_LOG_FILTER, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use refboard::paths;

/// Set up file logging for debug builds
#[cfg(debug_assertions)]
fn setup_logging(config_filter: Option<&str>) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use tracing_subscriber::prelude::*;

    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        eprintln!("Failed to create logs directory");
        return None;
    }

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new().append(true).open(paths::log_file()) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Session Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    let file_appender = tracing_appender::rolling::never(&logs_dir, paths::LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // No ANSI colors in the file
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_level(true);

    // RUST_LOG wins over the config file
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(config_filter.unwrap_or(DEFAULT_LOG_FILTER))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Some(guard)
}

#[cfg(not(debug_assertions))]
fn setup_logging(_config_filter: Option<&str>) -> Option<()> {
    None
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() {
    if let Err(e) = paths::ensure_directories() {
        eprintln!("Failed to create data directories: {}", e);
    }

    let config_plugin = ConfigPlugin::load();
    // Keep the guard alive for the duration of the program
    let log_guard = setup_logging(config_plugin.config.data.log_filter.as_deref());
    if let Some(reason) = &config_plugin.config.reset_reason {
        warn!("Configuration reset to defaults: {}", reason);
    }

    let default_plugins = DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "RefBoard".into(),
            resolution: (DEFAULT_WINDOW_WIDTH as u32, DEFAULT_WINDOW_HEIGHT as u32).into(),
            ..default()
        }),
        ..default()
    });
    // Our own subscriber is already global in debug builds
    let default_plugins = if log_guard.is_some() {
        default_plugins.disable::<LogPlugin>()
    } else {
        default_plugins
    };

    App::new()
        .add_plugins(default_plugins)
        .add_plugins(config_plugin)
        .add_plugins(BoardPlugin)
        .add_systems(Startup, spawn_camera)
        .run();
}
