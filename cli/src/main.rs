use anyhow::Result;
use clap::Parser;
use mazeview_core::MazePopulator;
use mazeview_core::config::{GraphConfig, PopulatorConfig, SceneConfig};
use mazeview_core::graph::GraphClient;
use mazeview_core::scene::SceneFile;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "mazeview",
    version = "0.1.0",
    about = "Spawns placeholder cube actors in an editor level from graph-database maze data",
    long_about = None
)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Graph database host (overrides config file)
    #[arg(long)]
    host: Option<String>,

    /// Graph database bolt port (overrides config file)
    #[arg(long)]
    port: Option<u16>,

    /// Graph database user (overrides config file)
    #[arg(long)]
    user: Option<String>,

    /// Graph database password (overrides config file)
    #[arg(long, env = "MAZEVIEW_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Graph database name (overrides config file)
    #[arg(long)]
    database: Option<String>,

    /// Output scene file path (overrides config file)
    #[arg(long)]
    output: Option<std::path::PathBuf>,

    /// Path to log file
    #[arg(long, default_value = "/tmp/mazeview.log")]
    log_file: std::path::PathBuf,

    /// Verbosity level (repeat for more verbose output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8, log_file: &std::path::Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let filter_level = match verbose {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(filter_level.into());

    let file_appender = tracing_appender::rolling::never(
        log_file.parent().unwrap_or(std::path::Path::new(".")),
        log_file.file_name().unwrap_or(std::ffi::OsStr::new("mazeview.log")),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::Layer::new().with_writer(std::io::stderr).with_ansi(true))
        .with(fmt::Layer::new().with_writer(non_blocking).with_ansi(false));

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

/// Merge the config file (when given) with command-line overrides.
fn resolve_config(cli: &Cli) -> Result<PopulatorConfig> {
    let mut config = match &cli.config {
        Some(path) => PopulatorConfig::from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?,
        None => {
            let (Some(user), Some(password)) = (cli.user.clone(), cli.password.clone()) else {
                anyhow::bail!("Without --config, both --user and --password are required");
            };
            PopulatorConfig {
                graph: GraphConfig {
                    host: "localhost".to_string(),
                    port: 7687,
                    user,
                    password,
                    database: "world".to_string(),
                },
                scene: SceneConfig::default(),
            }
        }
    };

    if let Some(host) = &cli.host {
        config.graph.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.graph.port = port;
    }
    if let Some(user) = &cli.user {
        config.graph.user = user.clone();
    }
    if let Some(password) = &cli.password {
        config.graph.password = password.clone();
    }
    if let Some(database) = &cli.database {
        config.graph.database = database.clone();
    }
    if let Some(output) = &cli.output {
        config.scene.output = output.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = setup_logging(cli.verbose, &cli.log_file)?;

    info!("Starting mazeview");

    let config = resolve_config(&cli)?;

    info!("Connecting to {} (database {})", config.graph.bolt_uri(), config.graph.database);
    let client = GraphClient::connect(&config.graph).await?;

    let populator = MazePopulator::new(client, config.scene.cube_asset.clone());
    let mut level = SceneFile::new();

    let summary = populator.populate(&mut level).await?;

    level.write_to(&config.scene.output)?;

    info!("--- Summary ---");
    info!("Total records: {}", summary.total_records);
    info!("Spawned: {}", summary.spawned);
    info!("Skipped (invalid center): {}", summary.skipped);
    info!("Scene written to {:?}", config.scene.output);

    info!("mazeview finished");
    Ok(())
}
