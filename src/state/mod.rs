//! Application state module

mod forms;
mod page;
mod sidebar;
mod ui_area;

pub use forms::*;
pub use page::*;
pub use sidebar::*;
pub use ui_area::*;
