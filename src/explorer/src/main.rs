#[macro_use]
extern crate log;

use std::{io, net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use axum::Router;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use explorer::{
    HubSettings, LandingConfig, PreviewSource, Report,
    demo::{self, DemoState},
    landing::{self, DEFAULT_GRADIO_URL, DEFAULT_STREAMLIT_URL},
};
use explorer_types::SleepDataset;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "explorer")]
pub struct ExplorerCli {
    #[clap(subcommand)]
    pub subcommand: ExplorerCommand,
}

#[derive(Subcommand)]
pub enum ExplorerCommand {
    ///
    /// Render the sleep dataset exploration report to a single HTML file
    ///
    Report {
        #[arg(long, env = "SLEEP_DATA", default_value = "Sleep_Efficiency.csv")]
        data: PathBuf,
        #[arg(long, env = "REPORT_OUTPUT", default_value = "sleep_report.html")]
        output: PathBuf,
    },
    ///
    /// Serve the placeholder model demo
    ///
    Demo {
        #[arg(long, env = "DEMO_BIND", default_value = "127.0.0.1:7860")]
        bind: SocketAddr,
        /// Fixed seed, every run then draws the same charts
        #[arg(long, env = "DEMO_SEED")]
        seed: Option<u64>,
    },
    ///
    /// Serve the Coastal AI Explorer landing page
    ///
    Serve {
        #[arg(long, env = "LANDING_BIND", default_value = "127.0.0.1:5000")]
        bind: SocketAddr,
        #[arg(long, env = "GRADIO_DEMO_URL", default_value = DEFAULT_GRADIO_URL)]
        gradio_url: String,
        #[arg(long, env = "STREAMLIT_DEMO_URL", default_value = DEFAULT_STREAMLIT_URL)]
        streamlit_url: String,
        #[arg(long, env = "HF_DATASET", default_value = "climate_fever")]
        hf_dataset: String,
        #[arg(long, env = "HF_CONFIG", default_value = "default")]
        hf_config: String,
        #[arg(long, env = "HF_SPLIT", default_value = "test")]
        hf_split: String,
        #[arg(
            long,
            env = "HF_ENDPOINT",
            default_value = "https://datasets-server.huggingface.co"
        )]
        hf_endpoint: String,
        /// Preview request timeout in seconds
        #[arg(long, env = "HF_TIMEOUT", default_value_t = 10)]
        hf_timeout: u64,
        /// Skip the dataset preview entirely
        #[arg(long)]
        no_preview: bool,
    },
    ///
    /// Print shell completions
    ///
    Completions { shell: Shell },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("hyper", log::LevelFilter::Warn)
        .init();

    let cli = ExplorerCli::parse();

    match cli.subcommand {
        ExplorerCommand::Report { data, output } => {
            let dataset = SleepDataset::from_path(&data)?;
            info!("loaded {} rows from {}", dataset.len(), data.display());

            let html = Report::build(&dataset).render_html()?;
            std::fs::write(&output, html)
                .with_context(|| format!("writing report to {}", output.display()))?;
            info!("report written to {}", output.display());
            Ok(())
        }
        ExplorerCommand::Demo { bind, seed } => serve(bind, demo::router(DemoState { seed })).await,
        ExplorerCommand::Serve {
            bind,
            gradio_url,
            streamlit_url,
            hf_dataset,
            hf_config,
            hf_split,
            hf_endpoint,
            hf_timeout,
            no_preview,
        } => {
            let config = LandingConfig {
                gradio_url,
                streamlit_url,
            };

            let source = if no_preview {
                PreviewSource::Disabled
            } else {
                PreviewSource::hub(HubSettings {
                    endpoint: hf_endpoint,
                    dataset: hf_dataset,
                    config: hf_config,
                    split: hf_split,
                    timeout: Duration::from_secs(hf_timeout),
                })?
            };

            serve(bind, landing::router(config, source)).await
        }
        ExplorerCommand::Completions { shell } => {
            let mut command = ExplorerCli::command();
            clap_complete::generate(shell, &mut command, "explorer", &mut io::stdout());
            Ok(())
        }
    }
}

async fn serve(bind: SocketAddr, app: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {}", bind))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
