use anyhow::{Context, Result};
use clap::Parser;
use neuroplay_lib::model::living::AlgorithmKind;
use neuroplay_lib::model::metrics::init_logging;
use neuroplay_lib::{AppConfig, Playground};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of training epochs to run
    #[arg(short, long, default_value_t = 200)]
    epochs: u64,

    /// Animation algorithm to run over the living graph
    #[arg(short, long)]
    algorithm: Option<AlgorithmKind>,

    /// Print the final epoch report as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(path: &str) -> Result<AppConfig> {
    if !Path::new(path).exists() {
        tracing::info!(path, "No config file found, using defaults");
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    AppConfig::from_toml(&content).with_context(|| format!("parsing {path}"))
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = load_config(&args.config)?;
    let layer_sizes = config.network.layer_sizes.clone();
    let frames_per_epoch = (config.timing.animation_fps as f32 / config.timing.training_hz)
        .round()
        .max(1.0) as u64;
    let epochs_per_aging = (config.timing.training_hz / config.timing.aging_hz)
        .round()
        .max(1.0) as u64;

    let mut playground = Playground::new(config)?;
    playground.seed_graph(&layer_sizes)?;
    if let Some(kind) = args.algorithm {
        playground.start_algorithm(kind);
    }

    let frame_time = 1.0 / playground.config().timing.animation_fps as f32;
    let mut frame = 0u64;
    for epoch in 1..=args.epochs {
        let report = playground.training_tick()?;

        // Feed the living graph the first test point of each epoch.
        let pattern = playground
            .test_points()
            .first()
            .map(|p| [(p.x / 10.0 + 0.5) as f32, (p.y / 10.0 + 0.5) as f32])
            .unwrap_or([0.5, 0.5]);
        playground.hebbian_tick(&pattern);

        if epoch % epochs_per_aging == 0 {
            playground.aging_tick();
        }
        for _ in 0..frames_per_epoch {
            playground.animation_frame_at(frame as f32 * frame_time);
            frame += 1;
        }

        if epoch % 50 == 0 {
            tracing::info!(
                epoch,
                train_loss = report.train_loss,
                test_loss = report.test_loss,
                test_accuracy = report.test_accuracy,
                "Epoch"
            );
        }
    }
    playground.stop_algorithm();

    let issues = playground.training_issues();
    if issues.is_overfitted {
        tracing::warn!("Network looks overfitted");
    }
    if issues.is_underfitted {
        tracing::warn!("Network looks underfitted");
    }

    if let Some(report) = playground.last_report() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "epoch {} | train loss {:.4} | test loss {:.4} | test accuracy {:.1}%",
                report.epoch,
                report.train_loss,
                report.test_loss,
                report.test_accuracy * 100.0
            );
        }
    }
    println!(
        "living graph: {} neurons, {} connections",
        playground.graph().len(),
        playground.graph().connections().len()
    );
    Ok(())
}
