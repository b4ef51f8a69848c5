//! Terminal home board.
//!
//! Feature state lives in MVI stores ([`roster`], [`activity`]); [`app::App`]
//! owns them, routes key input and hands network work to the data-source
//! worker through [`app::UiCommand`].

pub mod activity;
pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod popup;
pub mod render;
pub mod roster;
pub mod runtime;
pub mod student_list;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
