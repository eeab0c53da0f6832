//! # Arqconv - Archival Measurement Converter TUI
//!
//! A terminal user interface for converting quantities of archival material
//! between storage units (boxes, linear meters, cubic meters, kilograms,
//! tons), built with Rust and Ratatui.
//!
//! ## Architecture Overview
//!
//! The crate splits into a pure conversion core and a component-based shell:
//!
//! - **Core** ([`measures`]): the conversion table, the `convert` function
//!   and the CSV serializer. Pure functions over immutable lookup data.
//! - **Actions** ([`action`]): events that drive the application.
//! - **Components** ([`components`]): UI units that update on actions and
//!   draw themselves each frame.
//! - **App** ([`app`]): the event loop wiring keybindings, components and
//!   the one side effect (saving a CSV export).
//!
//! ## Example Usage
//!
//! ```rust
//! use arqconv::measures::{convert, Unit};
//!
//! let result = convert(2.0, Unit::MetroCubo);
//!
//! // Two cubic meters occupy 24 linear meters and weigh about 1.2 tons.
//! assert_eq!(result.get(&Unit::MetroLinear), Some(&24.0));
//! assert_eq!(result.get(&Unit::Quilograma), Some(&1200.0));
//! ```
//!
//! Conversion factors follow the Arquivo Nacional's Publicação Técnica
//! nº 40 (1985). The table is deliberately asymmetric and not transitively
//! closed; missing pairs stay missing.

#![allow(dead_code)]

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod measures;
pub mod mode;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use action::Action;
pub use app::App;
pub use measures::{convert, ConversionResult, Unit};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
