// Library root for the `hitprop` binary: logging setup and the terminal
// viewer, exposed so they can be tested without a real terminal.

pub mod logging;
pub mod summary;
pub mod tui;
