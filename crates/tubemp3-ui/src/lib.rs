//! `TubeMp3` UI - Leptos-based user interface.
//!
//! This crate renders the conversion form and mirrors the core crate's
//! submission state machine into the DOM.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// expect_used and unwrap_used are restricted to documented cases
#![allow(clippy::expect_used)]

pub mod api;
pub mod app;
pub mod components;
pub mod sound;
pub mod theme;

pub use app::App;
