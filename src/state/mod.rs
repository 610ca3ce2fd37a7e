//! Application state module

mod app_state;
mod draft;
mod forms;
mod store;

pub use app_state::*;
pub use draft::*;
pub use forms::*;
pub use store::*;
