pub mod axis;
pub mod config;
pub mod labels;
pub mod series;
pub mod state;
pub mod strategy;

pub use axis::{AxisKind, AxisRangeEngine, range_from_values};
pub use config::{AutoScrollConfig, AxisConfig, EdgeLabelVisibility};
pub use labels::LabelSet;
pub use series::{AxisValues, GroupedCategories, SeriesSource, group_categories};
pub use state::{AxisState, Label};
