//! ets-setup: provisions an Elastic Transcoder demo.
//!
//! `provision` creates the buckets, uploads the video and creates the pipeline.
//! `publish` submits the job and uploads the static pages. `run` does both.

use std::process::ExitCode;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::{error, info};

mod app;
mod common;
mod config;
mod infrastructure;
mod modules;
mod state;

use common::error::SetupResult;
use config::settings::AppConfig;
use modules::provision::service::ProvisionService;
use modules::publish::preset::resolve_preset;
use modules::publish::service::PublishService;

#[derive(Parser)]
#[command(name = "ets-setup", about = "Elastic Transcoder demo provisioning")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the buckets, upload the video and create the pipeline
    Provision,
    /// Submit the transcoding job and upload index.html / error.html
    Publish {
        /// Pipeline to submit to (defaults to ETS_PIPELINE_ID, then the state file)
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        pipeline_id: Option<String>,
        /// Preset alias (e.g. 720p) or preset id
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        preset: Option<String>,
    },
    /// Provision, then publish against the new pipeline
    Run {
        /// Preset alias (e.g. 720p) or preset id
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        preset: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    match execute(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            for line in e.report() {
                error!("{}", line);
            }
            ExitCode::FAILURE
        }
    }
}

async fn execute(command: Commands) -> SetupResult<()> {
    let mut config = AppConfig::new()?;

    if let Commands::Publish {
        preset: Some(preset),
        ..
    }
    | Commands::Run {
        preset: Some(preset),
    } = &command
    {
        config.preset_id = resolve_preset(preset);
    }

    let state = app::create_state(config).await?;

    match command {
        Commands::Provision => {
            let report = ProvisionService::run(&state).await?;
            info!(
                "✅ Provisioning finished: input bucket {:?}, output bucket {:?}, video key {}",
                report.input_bucket, report.output_bucket, report.video_key
            );
            println!("{}", report.pipeline.id);
        }
        Commands::Publish { pipeline_id, .. } => {
            let pipeline_id = PublishService::resolve_pipeline_id(&state, pipeline_id).await?;
            let report = PublishService::run(&state, &pipeline_id).await?;
            info!(
                "✅ Job {} submitted ({} -> {}, preset {}), pages published: {}",
                report.job.id,
                report.request.input_key,
                report.request.output_key,
                report.request.preset_id,
                report.pages.join(", ")
            );
        }
        Commands::Run { .. } => {
            let (provisioned, report) = app::provision_and_publish(&state).await?;
            println!("{}", provisioned.pipeline.id);
            info!(
                "✅ Job {} submitted on pipeline {}",
                report.job.id, provisioned.pipeline.id
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
