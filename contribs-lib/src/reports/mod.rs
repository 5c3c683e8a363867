//! Report generation for contribution calendars and blog posts
//!
//! Each generator writes to a [`core::fmt::Write`] so callers decide whether the output
//! goes to the terminal, a file, or a test buffer:
//! - **Console**: Heatmap drawn with colored cells (or level glyphs without colors)
//! - **HTML**: Self-contained page with statistics, month labels, grid, and legend
//! - **JSON**: Pretty-printed serialization of any serializable value
//! - **Post list**: Featured blog posts for the terminal
//!
//! Layout helpers shared by the calendar generators (month labels, row placement, number
//! formatting) live in the `common` module.

mod common;
mod console;
mod html;
mod json;
mod post_list;

pub use common::{MonthLabel, month_labels};
pub use console::{generate as generate_console, terminal_width};
pub use html::generate as generate_html;
pub use json::generate as generate_json;
pub use post_list::generate as generate_post_list;
