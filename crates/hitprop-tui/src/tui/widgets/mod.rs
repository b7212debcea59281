// Viewer widgets.

pub mod columns;
pub mod error_panel;
pub mod recommendations;
pub mod status_bar;
