//! Terminal UI for interactive search.

pub mod palette;

pub use palette::{Action, PaletteState, PaletteTui, run_palette_tui};
