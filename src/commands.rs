//! Headless subcommands: one request or one list edit, printed to stdout.

use std::io::Write;

use anyhow::{bail, Context};
use clap::Subcommand;

use crate::api::{ApiError, MovieDetail, OmdbClient};
use crate::config::Config;
use crate::flow::is_searchable;
use crate::watched::{WatchedEntry, WatchedError, WatchedList, WatchedStore};

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Search movies by title
    Search {
        /// Free-text title query
        query: String,
    },
    /// Show details for one movie
    Show {
        /// IMDb id, e.g. tt1979320
        id: String,
    },
    /// Rate a movie and add it to the watched list
    Add {
        /// IMDb id, e.g. tt1979320
        id: String,
        /// Your rating, 1 to ui.max_rating
        #[arg(short, long)]
        rating: u8,
    },
    /// Remove a movie from the watched list
    Remove {
        /// IMDb id, e.g. tt1979320
        id: String,
    },
    /// Print the watched list and its summary
    Watched,
}

pub fn execute(
    command: Command,
    config: &Config,
    store: &WatchedStore,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Search { query } => search(config, &query, out),
        Command::Show { id } => show(config, store, &id, out),
        Command::Add { id, rating } => add(config, store, &id, rating, out),
        Command::Remove { id } => remove(store, &id, out),
        Command::Watched => watched(store, out),
    }
}

fn client(config: &Config) -> anyhow::Result<OmdbClient> {
    config.require_api_key()?;
    Ok(OmdbClient::new(&config.api)?)
}

/// Drives a single request to completion on a throwaway runtime.
fn block_on<F: std::future::Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    Ok(runtime.block_on(future))
}

fn search(config: &Config, query: &str, out: &mut impl Write) -> anyhow::Result<()> {
    if !is_searchable(query, config.search.min_query_len) {
        bail!(
            "Query must be at least {} characters",
            config.search.min_query_len
        );
    }
    let client = client(config)?;
    let results = block_on(client.search(query))?.map_err(|err| {
        let message = err.search_message();
        anyhow::Error::new(err).context(message)
    })?;

    for movie in &results {
        writeln!(out, "{}\t{} ({})", movie.imdb_id, movie.title, movie.year)?;
    }
    writeln!(out, "Found {} results", results.len())?;
    Ok(())
}

fn fetch_detail(config: &Config, id: &str) -> anyhow::Result<MovieDetail> {
    let client = client(config)?;
    block_on(client.detail(id))?.map_err(|err: ApiError| {
        let message = err.detail_message();
        anyhow::Error::new(err).context(message)
    })
}

fn show(config: &Config, store: &WatchedStore, id: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let detail = fetch_detail(config, id)?;
    let list = WatchedList::from_entries(store.load()?);

    writeln!(out, "{} ({})", detail.title, detail.year)?;
    writeln!(out, "{} • {}", detail.released, detail.runtime)?;
    writeln!(out, "{}", detail.genre)?;
    writeln!(out, "⭐ {} IMDb rating", detail.imdb_rating)?;
    if let Some(entry) = list.get(&detail.imdb_id) {
        writeln!(out, "You rated this movie: {} 🌟", entry.user_rating)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", detail.plot)?;
    writeln!(out)?;
    writeln!(out, "Starring {}", detail.actors)?;
    writeln!(out, "Directed by {}", detail.director)?;
    Ok(())
}

fn add(
    config: &Config,
    store: &WatchedStore,
    id: &str,
    rating: u8,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let max_rating = config.ui.max_rating;
    // Reject bad input before spending a request on it.
    if rating == 0 || rating > max_rating {
        return Err(WatchedError::InvalidRating {
            rating,
            max: max_rating,
        }
        .into());
    }

    let mut list = WatchedList::from_entries(store.load()?);
    if list.contains(id) {
        return Err(WatchedError::AlreadyWatched {
            imdb_id: id.to_string(),
        }
        .into());
    }

    let detail = fetch_detail(config, id)?;
    let entry = WatchedEntry::from_detail(&detail, rating, max_rating)?;
    let title = entry.title.clone();
    let imdb_id = entry.imdb_id.clone();
    if !list.add(entry) {
        return Err(WatchedError::AlreadyWatched { imdb_id }.into());
    }
    store.save(list.entries())?;
    tracing::info!(imdb_id = %imdb_id, rating, "Added to watched list");

    writeln!(out, "Added {title} ({rating}/{max_rating})")?;
    Ok(())
}

fn remove(store: &WatchedStore, id: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let mut list = WatchedList::from_entries(store.load()?);
    if !list.remove(id) {
        writeln!(out, "{id} is not on the watched list")?;
        return Ok(());
    }
    store.save(list.entries())?;
    tracing::info!(imdb_id = %id, "Removed from watched list");
    writeln!(out, "Removed {id}")?;
    Ok(())
}

fn watched(store: &WatchedStore, out: &mut impl Write) -> anyhow::Result<()> {
    let list = WatchedList::from_entries(store.load()?);
    writeln!(out, "{}", list.summary())?;
    for entry in list.entries() {
        writeln!(
            out,
            "{}\t{} ({})  ⭐ {}  🌟 {}  ⏳ {} min",
            entry.imdb_id,
            entry.title,
            entry.year,
            entry.imdb_rating,
            entry.user_rating,
            entry.runtime
        )?;
    }
    Ok(())
}
