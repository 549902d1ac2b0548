//! axis-engine: chart axis range, interval, and label computation.
//!
//! This crate implements the numeric/temporal core of a charting axis:
//! nice-interval selection, range padding policies, zoom and auto-scroll
//! windows, and label/tick enumeration for category, numeric, date-time,
//! and date-time-category axes. Rendering, hit-testing, and layout remain
//! the host's concern; the engine exposes pure computed state.

pub mod core;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use engine::{AxisConfig, AxisKind, AxisRangeEngine, AxisState, Label, SeriesSource};
pub use error::{AxisError, AxisResult};
