use anyhow::Context;
use clap::{Parser, Subcommand};

use ytscrape::{Report, SearchOptions, YouTube, config};

#[derive(Parser, Debug)]
#[command(about = "Scrape video metadata from YouTube search and watch pages")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of labelled lines
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search and print the matching videos
    Search {
        /// Search terms, joined with spaces
        #[arg(required = true)]
        terms: Vec<String>,

        /// Maximum results (0 for no limit)
        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        limit: i32,
    },
    /// Print details for one video URL
    Info {
        /// Watch, embed, or youtu.be link
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let youtube = YouTube::with_config(&config::load_or_default())
        .context("failed to build HTTP client")?;

    let reports: Vec<Report> = match args.command {
        Command::Search { terms, limit } => {
            let options = SearchOptions::new(terms.join(" "), limit);
            let results = youtube
                .search(&options)
                .await
                .with_context(|| format!("search for '{}' failed", options.search_terms))?;
            results.iter().map(Report::from).collect()
        }
        Command::Info { url } => {
            let detail = youtube
                .video_info(&url)
                .await
                .with_context(|| format!("could not get video info for {url}"))?;
            vec![Report::from(&detail)]
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (idx, report) in reports.iter().enumerate() {
            if idx > 0 {
                println!();
            }
            println!("{report}");
        }
    }

    Ok(())
}
