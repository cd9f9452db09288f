//! folio palette - Interactive command palette (TUI)
//!
//! On Enter the selected URL is printed to stdout so shells can capture it,
//! e.g. `open "$(folio palette)"`. Closing with Esc prints nothing.

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::tui::run_palette_tui;

#[derive(Args, Debug)]
pub struct PaletteArgs {}

pub fn run(ctx: &AppContext, _args: &PaletteArgs) -> Result<()> {
    let selection = run_palette_tui(&ctx.catalog, &ctx.config.search)?;

    match selection {
        Some(url) => {
            if ctx.json_mode {
                println!("{}", serde_json::json!({ "url": url }));
            } else {
                println!("{url}");
            }
        }
        None => {
            if ctx.json_mode {
                println!("{}", serde_json::json!({ "url": null }));
            }
        }
    }

    Ok(())
}
