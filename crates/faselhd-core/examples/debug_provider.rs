//! Debug script walking the provider end to end against the live site
//!
//! Run with: RUST_LOG=faselhd_core=debug cargo run --example debug_provider -p faselhd-core -- "query"

use faselhd_core::{Category, DetailKind, FaselProvider};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let provider = FaselProvider::new()?;
    let query = std::env::args().nth(1);

    let entries = match query.as_deref() {
        Some(q) => {
            println!("Searching for '{}'...\n", q);
            provider.search(q).await?
        }
        None => {
            println!("Browsing first page of movies...\n");
            provider.browse_page(Category::Movies, 1).await?
        }
    };

    if entries.is_empty() {
        println!("No results found!");
        return Ok(());
    }

    for (i, entry) in entries.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, entry.title);
        println!("   URL: {}", entry.detail_url);
        if let Some(ref poster) = entry.poster_url {
            println!("   Poster: {}", poster);
        }
    }

    let entry = &entries[0];
    println!("\nLoading {}...", entry.detail_url);

    let Some(detail) = provider.load_detail(&entry.detail_url).await? else {
        println!("Detail page has no title, nothing to resolve");
        return Ok(());
    };

    println!("Title: {}", detail.title);
    if let Some(year) = detail.year {
        println!("Year: {}", year);
    }
    if let Some(rating) = detail.rating {
        println!("Rating: {}", rating);
    }

    let data_url = match &detail.kind {
        DetailKind::Movie { data_url } => data_url.clone(),
        DetailKind::Series { episodes } => {
            println!("Episodes: {}", episodes.len());
            match episodes.first() {
                Some(episode) => episode.data_url.clone(),
                None => {
                    println!("Series lists no playable episodes");
                    return Ok(());
                }
            }
        }
    };

    println!("\nResolving links for {}...\n", data_url);
    let links = provider.resolve_links(&data_url).await?;

    if links.is_empty() {
        println!("No playable links found");
    }
    for link in &links {
        let kind = if link.is_segmented_stream { "HLS" } else { "direct" };
        println!("[{}] {} ({})", link.server_label, link.url, kind);
    }

    Ok(())
}
