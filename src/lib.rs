//! Roll-call home board.
//!
//! The roster core ([`roster`] transforms driven by the [`ui::roster`] store)
//! is pure and synchronous; [`source`] fetches and saves over HTTP or a local
//! file, and [`ui`] puts a terminal front end on top.

pub mod config;
pub mod logging;
pub mod model;
pub mod replay;
pub mod roster;
pub mod source;
pub mod ui;
