//! Form rendering module
//!
//! - `field_renderer`: text and list field rendering
//! - `content_entry`: the content entry form and its action panel

mod content_entry;
mod field_renderer;

pub use content_entry::draw as draw_content_entry;
