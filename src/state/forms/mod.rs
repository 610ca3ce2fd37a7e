//! Form domain layer
//!
//! Focus handling for the content entry form. The draft itself lives in
//! [`crate::state::FormStateStore`].

mod focus;

pub use focus::{ActionButton, FormFocus};
