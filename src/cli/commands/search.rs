//! folio search - One-shot relevance-ranked search

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;
use crate::search::{self, SearchResult};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results (default from config, capped at 10)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let mut config = ctx.config.search.clone();
    if let Some(limit) = args.limit {
        config.limit = limit.min(config.limit);
    }

    let results = search::search(&ctx.catalog, &args.query, &config);

    if ctx.json_mode {
        print_json(&args.query, &results)
    } else {
        print_human(&args.query, &results);
        Ok(())
    }
}

fn print_json(query: &str, results: &[SearchResult]) -> Result<()> {
    let payload = serde_json::json!({
        "query": query,
        "count": results.len(),
        "results": results,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_human(query: &str, results: &[SearchResult]) {
    if results.is_empty() {
        println!("{}", format!("No results found for \"{query}\"").dimmed());
        return;
    }

    println!(
        "{} result{} for \"{}\"",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        query.bold()
    );
    println!();

    for result in results {
        let kind = match result.kind.as_str() {
            "blog" => "blog   ".green(),
            "project" => "project".blue(),
            _ => "page   ".dimmed(),
        };

        println!("  {} {}  {}", kind, result.title.bold(), result.url.dimmed());
        if let Some(ref secondary) = result.secondary_text {
            println!("          {}", secondary.dimmed());
        }
        if let Some(ref date) = result.date {
            println!("          {}", date.dimmed());
        }
    }
}
