//! Form rendering module
//!
//! - `field_renderer`: labelled inputs with inline errors
//! - `details_form`: the resume details form

mod details_form;
mod field_renderer;

pub use details_form::draw_details_form;
