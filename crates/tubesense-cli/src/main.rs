mod report;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tubesense_core::{AppConfig, InputMode};
use tubesense_sentiment::{AnalysisReport, Analyzer};

#[derive(Debug, Parser)]
#[command(name = "tubesense")]
#[command(about = "Score YouTube videos by the sentiment of their comments")]
struct Cli {
    /// Print the full report as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score the comments of one video
    Video {
        /// Watch link, short link, embed link or bare 11-character ID
        link: String,
    },
    /// Search a topic and rank the matching videos by comment sentiment
    Topic {
        /// Search query
        query: String,
        /// Number of search results to score (1-50)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=50))]
        max_results: Option<u32>,
    },
    /// Decide between video and topic mode from the input
    Analyze {
        /// A video link or a search topic
        input: String,
        #[arg(long, value_enum, default_value_t = ModeArg::Auto)]
        mode: ModeArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Auto,
    Video,
    Topic,
}

impl From<ModeArg> for InputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Auto => InputMode::Auto,
            ModeArg::Video => InputMode::Video,
            ModeArg::Topic => InputMode::Topic,
        }
    }
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = tubesense_core::load_app_config()?;
    init_tracing(&config)?;
    let analyzer = Analyzer::from_app_config(&config)?;
    tracing::debug!(formula = %config.score_formula, json = cli.json, "analyzer ready");

    let report = match cli.command {
        Commands::Video { link } => AnalysisReport::Video(analyzer.analyze_video(&link).await?),
        Commands::Topic { query, max_results } => {
            let limit = max_results.unwrap_or(analyzer.config().topic_max_results);
            AnalysisReport::Topic(analyzer.rank_topic_with_limit(&query, limit).await?)
        }
        Commands::Analyze { input, mode } => analyzer.analyze(&input, mode.into()).await?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report::render(&report));
    }

    Ok(())
}
