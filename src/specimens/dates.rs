//! Collection dates as printed on specimen labels.
//!
//! A record stores the day, month and year separately since any of them may
//! be unknown. Every format is empty when the year is unknown, and a day is
//! ignored unless the month is known too.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MIN_YEAR: i32 = 2005;
pub const MAX_YEAR: i32 = 2100;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Month {
    #[sea_orm(string_value = "January")]
    January,
    #[sea_orm(string_value = "February")]
    February,
    #[sea_orm(string_value = "March")]
    March,
    #[sea_orm(string_value = "April")]
    April,
    #[sea_orm(string_value = "May")]
    May,
    #[sea_orm(string_value = "June")]
    June,
    #[sea_orm(string_value = "July")]
    July,
    #[sea_orm(string_value = "August")]
    August,
    #[sea_orm(string_value = "September")]
    September,
    #[sea_orm(string_value = "October")]
    October,
    #[sea_orm(string_value = "November")]
    November,
    #[sea_orm(string_value = "December")]
    December,
}

impl Month {
    /// Full month name, as stored.
    pub fn name(self) -> String {
        self.to_value()
    }

    /// Three-letter label form, e.g. "Jun".
    pub fn abbr(self) -> String {
        self.name().chars().take(3).collect()
    }

    /// 1 for January through 12 for December.
    pub fn number(self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
            Month::July => 7,
            Month::August => 8,
            Month::September => 9,
            Month::October => 10,
            Month::November => 11,
            Month::December => 12,
        }
    }

    /// Parses a full month name; an empty string means no month.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::try_from_value(&name.trim().to_string()).ok()
    }
}

/// "26-Jun-2006", "May 2009" or "2012".
pub fn collected_date(day: Option<i32>, month: Option<Month>, year: Option<i32>) -> String {
    let Some(year) = year else {
        return String::new();
    };

    match (day, month) {
        (Some(day), Some(month)) => format!("{day}-{}-{year}", month.abbr()),
        (_, Some(month)) => format!("{} {year}", month.abbr()),
        (_, None) => year.to_string(),
    }
}

/// "26 June 2006", "May 2009" or "2012".
pub fn full_date(day: Option<i32>, month: Option<Month>, year: Option<i32>) -> String {
    let Some(year) = year else {
        return String::new();
    };

    match (day, month) {
        (Some(day), Some(month)) => format!("{day} {} {year}", month.name()),
        (_, Some(month)) => format!("{} {year}", month.name()),
        (_, None) => year.to_string(),
    }
}

/// "2006-06-26", "2009-05" or "2012".
pub fn num_date(day: Option<i32>, month: Option<Month>, year: Option<i32>) -> String {
    let Some(year) = year else {
        return String::new();
    };

    match (day, month) {
        (Some(day), Some(month)) => format!("{year}-{:02}-{day:02}", month.number()),
        (_, Some(month)) => format!("{year}-{:02}", month.number()),
        (_, None) => year.to_string(),
    }
}

/// Checks the stored date parts. Messages lead with the offending field.
pub fn validate_date_parts(
    day: Option<i32>,
    month: Option<Month>,
    year: Option<i32>,
) -> Result<(), String> {
    if let Some(day) = day {
        if !(1..=31).contains(&day) {
            return Err(format!("day must be between 1 and 31, got {day}"));
        }
        if month.is_none() {
            return Err("month is required when a day is given".to_string());
        }
    }
    match year {
        Some(year) => validate_year("year", year),
        None if day.is_some() || month.is_some() => {
            Err("year is required when a day or month is given".to_string())
        }
        None => Ok(()),
    }
}

pub fn validate_year(field: &str, year: i32) -> Result<(), String> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(format!(
            "{field} must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sea_orm::Iterable;

    #[rstest]
    #[case(Some(26), "June", Some(2006), "26-Jun-2006", "26 June 2006", "2006-06-26")]
    #[case(None, "May", Some(2009), "May 2009", "May 2009", "2009-05")]
    #[case(None, "", Some(2012), "2012", "2012", "2012")]
    #[case(Some(5), "October", Some(2010), "5-Oct-2010", "5 October 2010", "2010-10-05")]
    #[case(Some(31), "December", Some(2100), "31-Dec-2100", "31 December 2100", "2100-12-31")]
    fn test_date_formats(
        #[case] day: Option<i32>,
        #[case] month: &str,
        #[case] year: Option<i32>,
        #[case] collected: &str,
        #[case] full: &str,
        #[case] numeric: &str,
    ) {
        let month = Month::from_name(month);
        assert_eq!(collected_date(day, month, year), collected);
        assert_eq!(full_date(day, month, year), full);
        assert_eq!(num_date(day, month, year), numeric);
    }

    #[test]
    fn test_unknown_year_formats_empty() {
        assert_eq!(collected_date(Some(3), Some(Month::May), None), "");
        assert_eq!(full_date(None, Some(Month::May), None), "");
        assert_eq!(num_date(None, None, None), "");
    }

    #[test]
    fn test_day_without_month_is_ignored() {
        assert_eq!(collected_date(Some(3), None, Some(2011)), "2011");
        assert_eq!(full_date(Some(3), None, Some(2011)), "2011");
        assert_eq!(num_date(Some(3), None, Some(2011)), "2011");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Month::from_name("September"), Some(Month::September));
        assert_eq!(Month::from_name("Sept"), None);
        assert_eq!(Month::from_name(""), None);
        assert_eq!(Month::September.abbr(), "Sep");
        assert_eq!(Month::iter().map(Month::number).sum::<u32>(), 78);
    }

    #[test]
    fn test_month_name_is_the_stored_and_json_value() {
        for month in Month::iter() {
            assert_eq!(month.name(), month.to_value());
            assert_eq!(serde_json::to_value(month).unwrap(), month.name().as_str());
            assert_eq!(Month::from_name(&month.name()), Some(month));
        }
    }

    #[rstest]
    #[case(Some(26), Some(Month::June), Some(2006), true)]
    #[case(None, None, None, true)]
    #[case(None, None, Some(2012), true)]
    #[case(Some(0), Some(Month::June), Some(2006), false)]
    #[case(Some(32), Some(Month::June), Some(2006), false)]
    #[case(Some(26), None, Some(2006), false)]
    #[case(None, Some(Month::May), None, false)]
    #[case(None, None, Some(2004), false)]
    #[case(None, None, Some(2101), false)]
    fn test_validate_date_parts(
        #[case] day: Option<i32>,
        #[case] month: Option<Month>,
        #[case] year: Option<i32>,
        #[case] valid: bool,
    ) {
        assert_eq!(validate_date_parts(day, month, year).is_ok(), valid);
    }

    #[test]
    fn test_validation_messages_name_the_field() {
        let err = validate_date_parts(Some(26), None, Some(2006)).unwrap_err();
        assert!(err.starts_with("month"));
        let err = validate_date_parts(None, Some(Month::May), None).unwrap_err();
        assert!(err.starts_with("year"));
        let err = validate_year("determined_year", 1999).unwrap_err();
        assert!(err.starts_with("determined_year"));
    }
}
