use indexmap::IndexSet;

use crate::core::range::DoubleRange;
use crate::core::types::AxisOrientation;

/// Per-axis values exposed by a registered series.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisValues {
    Numeric(Vec<f64>),
    Category(Vec<String>),
}

impl AxisValues {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Category(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AxisValues {
    fn default() -> Self {
        Self::Numeric(Vec::new())
    }
}

/// Read-only view of one registered data series.
///
/// The host supplies these each layout pass; the engine never takes
/// ownership of series data beyond this snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSource {
    pub x_values: AxisValues,
    pub y_values: Vec<f64>,
    pub visible_x_range: DoubleRange,
    pub visible_y_range: DoubleRange,
    /// Polar-area series seed the numeric `Auto` padding special case.
    pub is_polar: bool,
}

impl SeriesSource {
    #[must_use]
    pub fn points_count(&self) -> usize {
        self.x_values.len()
    }

    #[must_use]
    pub fn visible_range(&self, orientation: AxisOrientation) -> DoubleRange {
        match orientation {
            AxisOrientation::Horizontal => self.visible_x_range,
            AxisOrientation::Vertical => self.visible_y_range,
        }
    }
}

/// Union of all series ranges targeting one axis. Empty when no series
/// contributes a usable range.
#[must_use]
pub fn aggregate_range(series: &[SeriesSource], orientation: AxisOrientation) -> DoubleRange {
    let mut aggregate = DoubleRange::EMPTY;
    for source in series {
        aggregate += source.visible_range(orientation);
    }
    aggregate
}

/// The series whose points drive category label content: the one plotting
/// the most points. First registration wins ties.
#[must_use]
pub fn active_series(series: &[SeriesSource]) -> Option<&SeriesSource> {
    let mut best: Option<&SeriesSource> = None;
    for source in series {
        match best {
            Some(current) if source.points_count() <= current.points_count() => {}
            _ => best = Some(source),
        }
    }
    best
}

/// Category values merged across all registered series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedCategories {
    /// Distinct category values, first-seen order preserved.
    pub categories: Vec<String>,
    /// Per series, the grouped index of each of its points.
    pub series_indices: Vec<Vec<usize>>,
}

/// Deduplicates every series' category values into one shared index space
/// and remaps each series' point indices into it.
#[must_use]
pub fn group_categories(series: &[SeriesSource]) -> GroupedCategories {
    let mut distinct: IndexSet<String> = IndexSet::new();
    let mut series_indices = Vec::with_capacity(series.len());

    for source in series {
        let AxisValues::Category(values) = &source.x_values else {
            series_indices.push(Vec::new());
            continue;
        };

        let mut indices = Vec::with_capacity(values.len());
        for value in values {
            let (index, _) = distinct.insert_full(value.clone());
            indices.push(index);
        }
        series_indices.push(indices);
    }

    GroupedCategories {
        categories: distinct.into_iter().collect(),
        series_indices,
    }
}
