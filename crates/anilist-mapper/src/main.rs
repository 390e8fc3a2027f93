//! AniList mapper CLI application.

use anyhow::{Context, Result};
use anilist_mapper::{AnimeMapper, GraphqlClient, Season};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::Config;
use std::future::Future;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Page range for list commands
#[derive(clap::Args, Debug, Clone, Copy)]
struct Paging {
    /// First page to fetch
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Number of consecutive pages to collect
    #[arg(long, default_value_t = 1)]
    pages: u32,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search anime by keyword
    Search {
        keyword: String,
        #[command(flatten)]
        paging: Paging,
    },
    /// Most popular anime
    Popular {
        #[command(flatten)]
        paging: Paging,
    },
    /// Anime of one season (defaults to the current one)
    Season {
        #[arg(long)]
        season: Option<Season>,
        #[arg(long)]
        year: Option<i32>,
        #[command(flatten)]
        paging: Paging,
    },
    /// Anime of one genre
    Genre {
        genre: String,
        #[command(flatten)]
        paging: Paging,
    },
    /// Full record of one anime
    Details { id: i64 },
    /// Finished anime
    Completed {
        #[command(flatten)]
        paging: Paging,
    },
    /// Currently airing anime
    Ongoing {
        #[command(flatten)]
        paging: Paging,
    },
    /// Popular airing anime with genres
    TopAiring {
        #[command(flatten)]
        paging: Paging,
    },
    /// Anime movies
    Movies {
        #[command(flatten)]
        paging: Paging,
    },
    /// Recently updated airing anime
    Recent {
        #[command(flatten)]
        paging: Paging,
    },
    /// Anime listing for one letter
    Alphabet {
        letter: String,
        #[command(flatten)]
        paging: Paging,
    },
    /// Record backing a watch page
    Watch { id: i64 },
    /// Forum thread link
    Thread { id: u64 },
}

/// Fetch `paging.pages` consecutive pages, threading the accumulator through
async fn collect_pages<T, F, Fut>(paging: Paging, mut fetch: F) -> anilist_mapper::Result<Vec<T>>
where
    F: FnMut(u32, Vec<T>) -> Fut,
    Fut: Future<Output = anilist_mapper::Result<Vec<T>>>,
{
    let mut list = Vec::new();
    for page in paging.page..paging.page.saturating_add(paging.pages) {
        list = fetch(page, list).await?;
        info!(page = page, collected = list.len(), "Page collected");
    }
    Ok(list)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Initialize logging
    let mut log_config = shared::LogConfig::from_settings(&config.logging, "anilist-mapper");
    if args.verbose {
        log_config.default_level = tracing::Level::DEBUG;
    }
    shared::logging::init(log_config)?;

    let client = GraphqlClient::from_config(&config.anilist)
        .context("Failed to create GraphQL client")?;

    info!(
        config_file = %args.config.display(),
        endpoint = %client.endpoint(),
        "AniList mapper starting"
    );

    let mapper = AnimeMapper::new(client, config.anilist.site_url.clone());
    let mapper = &mapper;

    match args.command {
        Command::Search { keyword, paging } => {
            let keyword = keyword.as_str();
            let items = collect_pages(paging, move |page, list| async move {
                mapper.search(keyword, page, &list).await
            })
            .await
            .context("Search failed")?;
            print_json(&items)
        }
        Command::Popular { paging } => {
            let items = collect_pages(paging, move |page, list| async move {
                mapper.popular(page, &list).await
            })
            .await
            .context("Failed to fetch popular anime")?;
            print_json(&items)
        }
        Command::Season {
            season,
            year,
            paging,
        } => {
            let (current_season, current_year) = Season::current();
            let season = season.unwrap_or(current_season);
            let year = year.unwrap_or(current_year);
            let items = collect_pages(paging, move |page, list| async move {
                mapper.new_season(season, year, page, &list).await
            })
            .await
            .with_context(|| format!("Failed to fetch {} {} anime", season, year))?;
            print_json(&items)
        }
        Command::Genre { genre, paging } => {
            let genre = genre.as_str();
            let items = collect_pages(paging, move |page, list| async move {
                mapper.genre(genre, page, &list).await
            })
            .await
            .with_context(|| format!("Failed to fetch genre {}", genre))?;
            print_json(&items)
        }
        Command::Details { id } => {
            let details = mapper
                .details(id)
                .await
                .with_context(|| format!("Failed to fetch anime {}", id))?;
            print_json(&details)
        }
        Command::Completed { paging } => {
            let items = collect_pages(paging, move |page, list| async move {
                mapper.completed(page, &list).await
            })
            .await
            .context("Failed to fetch completed anime")?;
            print_json(&items)
        }
        Command::Ongoing { paging } => {
            let items = collect_pages(paging, move |page, list| async move {
                mapper.ongoing(page, &list).await
            })
            .await
            .context("Failed to fetch ongoing anime")?;
            print_json(&items)
        }
        Command::TopAiring { paging } => {
            let items = collect_pages(paging, move |page, list| async move {
                mapper.top_airing(page, &list).await
            })
            .await
            .context("Failed to fetch top airing anime")?;
            print_json(&items)
        }
        Command::Movies { paging } => {
            let items = collect_pages(paging, move |page, list| async move {
                mapper.movies(page, &list).await
            })
            .await
            .context("Failed to fetch movies")?;
            print_json(&items)
        }
        Command::Recent { paging } => {
            let items = collect_pages(paging, move |page, list| async move {
                mapper.recently_added(page, &list).await
            })
            .await
            .context("Failed to fetch recently added anime")?;
            print_json(&items)
        }
        Command::Alphabet { letter, paging } => {
            let letter = letter.as_str();
            let items = collect_pages(paging, move |page, list| async move {
                mapper.alphabetical(letter, page, &list).await
            })
            .await
            .with_context(|| format!("Failed to list anime for {}", letter))?;
            print_json(&items)
        }
        Command::Watch { id } => {
            let details = mapper
                .watch(id)
                .await
                .with_context(|| format!("Failed to fetch anime {}", id))?;
            print_json(&details)
        }
        Command::Thread { id } => print_json(&mapper.thread_url(id)),
    }
}
