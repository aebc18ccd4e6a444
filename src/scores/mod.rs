pub mod growth;
pub mod survival;

pub use growth::tumor_growth;
pub use survival::survival_percent;

/// Percent change in mean tumor volume for one treatment between its first
/// and last observed timepoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthSummary {
    pub treatment: String,
    pub first_timepoint: u32,
    pub last_timepoint: u32,
    pub first_value: f64,
    pub last_value: f64,
    /// Rounded to two decimals.
    pub percent_change: f64,
}

impl GrowthSummary {
    pub fn label(&self) -> String {
        format!("{:.2}%", self.percent_change)
    }
}
