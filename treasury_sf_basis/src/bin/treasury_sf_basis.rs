use std::path::PathBuf;

use anyhow::Result;
use bbg_history::{models::DateRange, providers::bbg_gateway::TerminalGatewayProvider};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use treasury_sf_basis::{
    config::PipelineConfig, io::read_basis_table, models::BasisTable, pipeline, plot, report,
};

#[derive(Parser)]
#[command(version, about = "Treasury / SOFR OIS basis pipeline")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Fetch vendor histories and (re)write the basis table. The default
    /// when no subcommand is given.
    Run(RunArgs),

    /// Print per-tenor summary statistics for a stored basis table.
    Summary {
        /// Table to summarize; defaults to the configured output path.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Render a stored basis table as an SVG line chart.
    Plot(PlotArgs),
}

#[derive(Args, Default)]
struct RunArgs {
    /// First vendor date to request, YYYY-MM-DD.
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last vendor date to request, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Where to write the parquet file.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Terminal gateway base URL. Overrides BBG_GATEWAY_URL.
    #[arg(long, value_name = "URL")]
    gateway_url: Option<String>,
}

#[derive(Args)]
struct PlotArgs {
    /// Table to plot; defaults to the configured output path.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Where to write the SVG.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// First date shown, YYYY-MM-DD.
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last date shown, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    end: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd.unwrap_or_else(|| Cmd::Run(RunArgs::default())) {
        Cmd::Run(args) => {
            let config = PipelineConfig::from_env().with_overrides(
                args.start,
                args.end,
                args.output,
                args.gateway_url,
            );
            let provider = TerminalGatewayProvider::with_base_url(config.gateway_url.clone())?;

            let outcome = pipeline::run(&provider, &config).await?;
            for (tenor, rows) in &outcome.rows_per_tenor {
                eprintln!("{tenor}: {rows} rows");
            }
            println!("{}", outcome.output_path.display());
        }

        Cmd::Summary { input } => {
            let table = load_table(input)?;
            print!("{}", report::render(&report::summarize(&table)));
        }

        Cmd::Plot(args) => {
            let table = load_table(args.input)?;
            let output = args
                .output
                .unwrap_or_else(|| default_sibling(plot::DEFAULT_PLOT_FILE_NAME));
            let window = DateRange::new(
                args.start.unwrap_or(plot::DEFAULT_PLOT_START),
                args.end.unwrap_or_else(|| Utc::now().date_naive()),
            )?;

            plot::render_basis_chart(&table, &output, window)?;
            println!("{}", output.display());
        }
    }

    Ok(())
}

fn load_table(input: Option<PathBuf>) -> Result<BasisTable> {
    let path = input.unwrap_or_else(|| PipelineConfig::from_env().output_path);
    Ok(read_basis_table(&path)?)
}

fn default_sibling(file_name: &str) -> PathBuf {
    PipelineConfig::from_env()
        .output_path
        .with_file_name(file_name)
}
