//! drover CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use drover::cli::{
    Cli, Commands, KillCommands, MonitorCommands, RestartCommands, StartCommands, StopCommands,
};
use drover::domain::models::JobKey;
use drover::{ConfigLoader, HttpSchedulerClient};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let to_json = cli.to_json;

    if let Err(err) = run(cli).await {
        drover::cli::handle_error(&err, to_json);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ConfigLoader::load(&cli.config)?;

    // Command-line flags take precedence over file and environment config.
    if let Some(addr) = cli.scheduler_addr {
        config.scheduler.addr = addr;
    }
    if let Some(username) = cli.username {
        config.scheduler.username = Some(username);
    }
    if let Some(password) = cli.password {
        config.scheduler.password = Some(password);
    }

    let level = cli.log_level.unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = HttpSchedulerClient::new(&config.scheduler)?;
    let to_json = cli.to_json;

    match cli.command {
        Commands::Start(command) => match command {
            StartCommands::Drain { targets, interval, timeout } => {
                drover::cli::commands::start::drain(&client, &targets, interval, timeout, to_json)
                    .await
            }
            StartCommands::SlaDrain {
                targets,
                count,
                percentage,
                duration,
                sla_limit,
                interval,
                timeout,
            } => {
                drover::cli::commands::start::sla_drain(
                    &client, &targets, count, percentage, duration, sla_limit, interval, timeout,
                    to_json,
                )
                .await
            }
            StartCommands::Maintenance { targets, interval, timeout } => {
                drover::cli::commands::start::maintenance(
                    &client, &targets, interval, timeout, to_json,
                )
                .await
            }
        },
        Commands::Stop(command) => match command {
            StopCommands::Drain { targets, interval, timeout } => {
                drover::cli::commands::stop::drain(&client, &targets, interval, timeout, to_json)
                    .await
            }
        },
        Commands::Monitor(command) => match command {
            MonitorCommands::Hosts { targets, statuses, interval, timeout } => {
                drover::cli::commands::monitor::hosts(
                    &client, &targets, &statuses, interval, timeout, to_json,
                )
                .await
            }
        },
        Commands::Kill(command) => match command {
            KillCommands::Instances { job, instances, monitor, interval, timeout } => {
                drover::cli::commands::kill::instances(
                    &client,
                    &JobKey::from(job),
                    &instances,
                    monitor,
                    interval,
                    timeout,
                    to_json,
                )
                .await
            }
            KillCommands::Job { job, monitor, interval, timeout } => {
                drover::cli::commands::kill::job(
                    &client,
                    &JobKey::from(job),
                    monitor,
                    interval,
                    timeout,
                    to_json,
                )
                .await
            }
        },
        Commands::Restart(command) => match command {
            RestartCommands::Job { job, monitor, interval, timeout } => {
                drover::cli::commands::restart::job(
                    &client,
                    &JobKey::from(job),
                    monitor,
                    interval,
                    timeout,
                    to_json,
                )
                .await
            }
        },
    }
}
