use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use super::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
    pub next_birthday_in_days: i64,
}

// `birth` plus n months, clamped to the end of shorter months
fn anniversary(birth: NaiveDate, months: u32) -> Option<NaiveDate> {
    birth.checked_add_months(Months::new(months))
}

pub fn age(birth: NaiveDate, on: NaiveDate) -> Result<AgeBreakdown, ToolError> {
    if birth > on {
        return Err(ToolError::invalid("birth date is after the reference date"));
    }

    let span = (on.year() - birth.year()) * 12 + on.month() as i32 - birth.month() as i32;
    let mut whole_months = u32::try_from(span).unwrap_or(0);
    let mut anchor = anniversary(birth, whole_months).unwrap_or(on);
    if anchor > on {
        whole_months = whole_months.saturating_sub(1);
        anchor = anniversary(birth, whole_months).unwrap_or(birth);
    }
    let days = (on - anchor).num_days();

    let years_lived = u32::try_from(on.year() - birth.year()).unwrap_or(0);
    let mut next = anniversary(birth, years_lived * 12).unwrap_or(on);
    if next < on {
        next = anniversary(birth, (years_lived + 1) * 12).unwrap_or(on);
    }

    Ok(AgeBreakdown {
        years: whole_months / 12,
        months: whole_months % 12,
        days: u32::try_from(days).unwrap_or(0),
        total_days: (on - birth).num_days(),
        next_birthday_in_days: (next - on).num_days(),
    })
}

#[cfg(test)]
#[path = "age_test.rs"]
mod tests;
