use serde::{Deserialize, Serialize};

/// Layout-pass size handed to the engine by the host, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvailableSize {
    pub width: f64,
    pub height: f64,
}

impl AvailableSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis placement relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl AxisOrientation {
    /// Pixel extent the axis spans for a given layout size.
    #[must_use]
    pub fn extent(self, available: AvailableSize) -> f64 {
        match self {
            Self::Horizontal => available.width,
            Self::Vertical => available.height,
        }
    }

    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}
