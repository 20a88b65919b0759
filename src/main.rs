use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use kafka_viewer::app::Application;
use kafka_viewer::utils::config::Config;
use log::info;

/// Kafka Viewer - explore Kafka clusters from a desktop GUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Window width
    #[arg(long)]
    width: Option<u32>,

    /// Window height
    #[arg(long)]
    height: Option<u32>,

    /// Theme to apply at startup (light, dark, or an override file name)
    #[arg(short, long)]
    theme: Option<String>,

    /// Start with the OS native window frame
    #[arg(long)]
    system_frame: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load()?;

    let log_level = if args.debug {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting Kafka Viewer v{}", env!("CARGO_PKG_VERSION"));

    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    if let Some(theme) = args.theme {
        config.theme.name = theme;
    }
    if args.system_frame {
        config.window.use_system_frame = true;
    }

    Application::new(config)?.run()?;
    Ok(())
}
