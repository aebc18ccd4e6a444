use crate::error::TrialError;
use crate::math::stats::round_to;
use crate::scores::GrowthSummary;
use crate::table::WideTable;

/// Growth per treatment column of a mean tumor-volume table.
///
/// Endpoints are looked up by treatment name at the smallest and largest
/// timepoint where that column has a value, so the result depends neither on
/// column order nor on the order of the source rows.
pub fn tumor_growth(volume: &WideTable) -> Result<Vec<GrowthSummary>, TrialError> {
    let mut out = Vec::with_capacity(volume.treatments.len());
    for treatment in &volume.treatments {
        let present = volume.present(treatment);
        let (Some(&(first_timepoint, first_value)), Some(&(last_timepoint, last_value))) =
            (present.first(), present.last())
        else {
            return Err(TrialError::EmptyColumn(treatment.clone()));
        };
        if first_value == 0.0 {
            return Err(TrialError::DivisionByZero {
                what: "tumor growth",
                treatment: treatment.clone(),
            });
        }
        let percent_change = round_to((last_value - first_value) * 100.0 / first_value, 2);
        out.push(GrowthSummary {
            treatment: treatment.clone(),
            first_timepoint,
            last_timepoint,
            first_value,
            last_value,
            percent_change,
        });
    }
    Ok(out)
}
