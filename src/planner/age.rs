use chrono::{Datelike, NaiveDate};

use crate::models::AgeBreakdown;

use super::types::PlannerError;

/// Calendar-period age between `date_of_birth` and `reference_date`.
///
/// Counts whole months: a month is complete only once the day-of-month of
/// birth is reached, so partial months are dropped.
pub fn age_breakdown(
    date_of_birth: NaiveDate,
    reference_date: NaiveDate,
) -> Result<AgeBreakdown, PlannerError> {
    if date_of_birth > reference_date {
        return Err(PlannerError::InvalidInput(format!(
            "date of birth {date_of_birth} is after reference date {reference_date}"
        )));
    }

    let mut months = (reference_date.year() - date_of_birth.year()) * 12
        + reference_date.month() as i32
        - date_of_birth.month() as i32;
    if reference_date.day() < date_of_birth.day() {
        months -= 1;
    }

    let total = u32::try_from(months).map_err(|_| {
        PlannerError::InvalidInput(format!(
            "cannot compute age from {date_of_birth} to {reference_date}"
        ))
    })?;
    Ok(AgeBreakdown::from_total_months(total))
}

pub fn age_in_years(
    date_of_birth: NaiveDate,
    reference_date: NaiveDate,
) -> Result<u32, PlannerError> {
    Ok(age_breakdown(date_of_birth, reference_date)?.years)
}

pub fn age_in_months(
    date_of_birth: NaiveDate,
    reference_date: NaiveDate,
) -> Result<u32, PlannerError> {
    Ok(age_breakdown(date_of_birth, reference_date)?.total_months())
}
