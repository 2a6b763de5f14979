//! The fixed column layout every upload must follow.

/// Column carrying the institution name, shown alongside the components.
pub const IDENTIFIER_COLUMN: &str = "Univ";

/// Optional row id column. Dropped when present, never required.
pub const DROPPED_COLUMN: &str = "UnivID";

/// Number of numeric features the model was fit on.
pub const N_FEATURES: usize = 6;

/// Numeric feature columns, in the order the model expects them.
pub const FEATURE_COLUMNS: [&str; N_FEATURES] =
    ["SAT", "Top10", "Accept", "SFRatio", "Expenses", "GradRate"];

/// Number of SVD components produced per row.
pub const N_COMPONENTS: usize = 6;

/// Output labels for the transformed columns.
pub const COMPONENT_COLUMNS: [&str; N_COMPONENTS] = ["svd0", "svd1", "svd2", "svd3", "svd4", "svd5"];

/// Columns that must be present in an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredSchema {
    pub identifier: &'static str,
    pub features: [&'static str; N_FEATURES],
}

impl RequiredSchema {
    pub const fn universities() -> Self {
        Self {
            identifier: IDENTIFIER_COLUMN,
            features: FEATURE_COLUMNS,
        }
    }

    /// All required column names in declaration order: identifier first,
    /// then the features.
    pub fn required_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.identifier).chain(self.features.iter().copied())
    }
}

impl Default for RequiredSchema {
    fn default() -> Self {
        Self::universities()
    }
}
