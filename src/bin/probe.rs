use anyhow::{Context, bail};
use clap::Parser;
use serde_json::Value;

use ytscrape::yt::json::{self, Lookup};
use ytscrape::yt::{search, videos};
use ytscrape::{YouTube, config};

#[derive(Parser, Debug)]
#[command(about = "Check which ytInitialData structures a page contains")]
struct Args {
    /// Saved HTML page to inspect
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    file: Option<String>,

    /// Fetch this URL instead of reading a file
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Print the located JSON blob and stop
    #[arg(long)]
    raw: bool,

    /// Limit printed search results
    #[arg(long, default_value_t = 10)]
    limit: i32,
}

fn describe(tree: &Value) {
    let top: Vec<&str> = tree
        .get("contents")
        .and_then(Value::as_object)
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();
    println!("contents keys: {}", top.join(", "));

    for section in tree.get_array(search::SECTIONS_PATH) {
        let items = section.get_array(&["itemSectionRenderer", "contents"]);
        let videos = items.iter().filter(|i| i.exists("videoRenderer")).count();
        println!("section: {} item(s), {} videoRenderer", items.len(), videos);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    let args = Args::parse();

    let html = match (&args.file, &args.url) {
        (Some(path), _) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?
        }
        (None, Some(url)) => {
            let client = YouTube::with_config(&config::load_or_default())?;
            client.page(url).await.with_context(|| format!("fetching {url}"))?
        }
        (None, None) => bail!("pass --file or --url"),
    };

    let blob = json::locate_initial_data(&html)?;
    if args.raw {
        println!("{blob}");
        return Ok(());
    }
    println!("ytInitialData: {} bytes", blob.len());
    let tree = json::parse_tree(blob)?;
    describe(&tree);

    match search::search_results(&tree, args.limit) {
        Ok(items) => {
            for item in &items {
                println!(
                    "{} | {:>8} | {} | {}",
                    item.id(),
                    item.duration(),
                    item.channel(),
                    item.title()
                );
            }
        }
        Err(err) => println!("search results: {err}"),
    }
    match videos::video_detail(&tree) {
        Ok(detail) => println!("watch page: {} ({})", detail.title(), detail.id()),
        Err(err) => println!("watch page: {err}"),
    }

    Ok(())
}
