//! SKYWARD CLI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use skyward_app::config::AppConfig;
use skyward_app::script::KeyScript;
use skyward_app::session;

#[derive(Parser)]
#[command(name = "skyward")]
#[command(about = "Arcade balloon-field flight and neon fireworks", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: ./skyward.ron)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the world and fireworks seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Override the frame rate (Hz)
    #[arg(long, global = true)]
    frame_rate: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fly a headless session driven by a key script
    Fly {
        /// Key presses, e.g. "Shift@0..2, ArrowLeft@1..3, q@4..6"
        #[arg(long, default_value = "")]
        script: String,

        /// Session length in seconds (default: config run_secs or script length)
        #[arg(long)]
        secs: Option<f64>,

        /// Write the last snapshot as JSON
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Launch fireworks and let them burn out
    Fireworks {
        /// Rocket volleys to launch
        #[arg(long, default_value = "1")]
        volleys: u32,

        /// Free-standing bursts to launch
        #[arg(long, default_value = "0")]
        bursts: u32,

        /// Canvas width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Write the final canvas as PPM
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the generated scenery as JSON
    Scene,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref());
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(frame_rate) = cli.frame_rate {
        config.frame_rate = frame_rate;
    }

    match cli.command {
        Commands::Fly {
            script,
            secs,
            snapshot,
        } => {
            let script: KeyScript = script.parse()?;
            let secs = secs.unwrap_or_else(|| config.run_secs.max(script.duration_secs()));
            let last = session::fly(&config, &script, secs)?;
            if let (Some(path), Some(last)) = (snapshot, last) {
                let json = serde_json::to_string_pretty(&last)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("writing snapshot to {:?}", path))?;
            }
        }
        Commands::Fireworks {
            volleys,
            bursts,
            width,
            height,
            output,
        } => {
            if let Some(width) = width {
                config.width = width;
            }
            if let Some(height) = height {
                config.height = height;
            }
            session::fireworks(&config, volleys, bursts, output.as_deref())?;
        }
        Commands::Scene => {
            let scene = session::scene(&config);
            println!("{}", serde_json::to_string_pretty(&scene)?);
        }
    }

    Ok(())
}
