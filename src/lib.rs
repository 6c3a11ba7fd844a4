//! line-chart-rs: geometry engine for smooth line and area charts.
//!
//! The crate maps a scalar sample series into frame pixels, builds straight
//! or curved path geometry (open for stroking, closed for area fill),
//! answers pointer hit-tests against that geometry and lays out gridlines and
//! labels on exact sample indices. Drawing itself is left to a [`Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LineChartConfig, LineChartEngine};
pub use error::{ChartError, ChartResult};
pub use render::Renderer;
