pub mod calendar;
pub mod date_padding;
pub mod interval;
pub mod padding;
pub mod range;
pub mod types;
pub mod zoom;

pub use calendar::DateTimeIntervalType;
pub use date_padding::DateTimePaddingMode;
pub use padding::NumericPaddingMode;
pub use range::DoubleRange;
pub use types::{AvailableSize, AxisOrientation};
pub use zoom::{AutoScrollAnchor, AxisScale};
