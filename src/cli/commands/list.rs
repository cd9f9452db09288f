//! folio list - List loaded content

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::content::{ItemKind, SearchableItem};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by kind: page, blog, project
    #[arg(long, short)]
    pub kind: Option<KindArg>,

    /// Filter by tag (case-insensitive)
    #[arg(long, short)]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    Page,
    Blog,
    Project,
}

impl KindArg {
    const fn matches(self, kind: ItemKind) -> bool {
        matches!(
            (self, kind),
            (Self::Page, ItemKind::Page)
                | (Self::Blog, ItemKind::Blog)
                | (Self::Project, ItemKind::Project)
        )
    }
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let items: Vec<SearchableItem> = ctx
        .catalog
        .items()
        .filter(|item| args.kind.is_none_or(|k| k.matches(item.kind)))
        .filter(|item| {
            args.tag.as_ref().is_none_or(|tag| {
                item.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
            })
        })
        .collect();

    if ctx.json_mode {
        let payload: Vec<serde_json::Value> = items
            .iter()
            .map(|item| {
                serde_json::json!({
                    "kind": item.kind,
                    "title": item.title,
                    "url": item.url,
                    "tags": item.tags,
                    "date": item.date,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("{}", "No content found".dimmed());
        println!();
        println!("Expected content under: {}", ctx.root.display());
        return Ok(());
    }

    for item in &items {
        let kind = match item.kind {
            ItemKind::Blog => "blog   ".green(),
            ItemKind::Project => "project".blue(),
            ItemKind::Page => "page   ".dimmed(),
        };
        let tags = if item.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", item.tags.join(", "))
        };
        println!("  {} {}  {}{}", kind, item.title.bold(), item.url.dimmed(), tags.dimmed());
    }

    println!();
    println!("{} item{}", items.len(), if items.len() == 1 { "" } else { "s" });
    Ok(())
}
