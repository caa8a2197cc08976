//! Trafficview - live plots of synthetic network traffic in the terminal.
//!
//! Trafficview generates per-second Poisson arrival series for data, voice
//! and video services and draws them, together with a histogram of the data
//! service, as multi-curve plots on a braille canvas.
//!
//! # Features
//!
//! - Multi-curve plots sharing one scale, with per-curve color, width and dash
//! - Stroke-font labels with alignment and a legibility halo
//! - Seedable traffic generation, pause and combined-load view
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use trafficview::graphics::{RecordingSurface, Rgba};
//! use trafficview::plot::{CurveStyle, Frame, Plot};
//!
//! let mut plot = Plot::new(Frame::new(10, 10, 620, 200));
//! plot.add_curve("data", CurveStyle::new(Rgba::BLACK, 1.2))?;
//! plot.update_curve("data", vec![1.0, 4.0, 2.0])?;
//!
//! let mut surface = RecordingSurface::new();
//! plot.draw(&mut surface, "intensity", "time", 4);
//! assert!(surface.text().contains("time"));
//! # Ok::<(), trafficview::TrafficViewError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod error;
pub mod graphics;
pub mod plot;
pub mod traffic;
pub mod ui;
pub mod util;

pub use error::{Result, TrafficViewError};
