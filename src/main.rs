use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use gooey_background::{GooeyBackgroundPlugin, GooeyConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Animated gooey circle background")]
struct Cli {
    /// Base RON config; a sibling `.local.ron` overlay is merged on top.
    #[arg(long, default_value = "assets/config/gooey.ron")]
    config: PathBuf,
    /// Exit automatically after this many seconds (overrides config).
    #[arg(long)]
    auto_close: Option<f32>,
}

/// What happened during config loading; logged once tracing is up.
#[derive(Resource, Debug)]
struct ConfigLoadReport {
    used: Vec<String>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let local = cli.config.with_extension("local.ron");
    let (mut cfg, used, errors) = GooeyConfig::load_layered([&cli.config, &local]);
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    let warnings = cfg.validate();

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ConfigLoadReport {
            used,
            errors,
            warnings,
        })
        .insert_resource(ClearColor(Color::srgb(0.06, 0.06, 0.1)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GooeyBackgroundPlugin)
        .add_systems(Startup, report_config_load)
        .run();
}

fn report_config_load(report: Res<ConfigLoadReport>) {
    for path in &report.used {
        info!("config layer: {path}");
    }
    for err in &report.errors {
        warn!("config: {err}");
    }
    for w in &report.warnings {
        warn!("config validation: {w}");
    }
}
