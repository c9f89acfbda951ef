//! Reusable UI components

mod button;

pub use button::{render_icon_button, BUTTON_HEIGHT};
