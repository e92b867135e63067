//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `page_form`: Admission and contact form pages

mod field_renderer;
mod page_form;

pub use page_form::draw_form;
