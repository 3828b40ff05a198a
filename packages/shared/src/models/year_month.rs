use chrono::{Datelike, Utc};
use std::str::FromStr;

/// One calendar month, used to address a monthly game archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Debug, PartialEq)]
pub struct InvalidYearMonth(pub String);

impl std::fmt::Display for InvalidYearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid month '{}', expected YYYY-MM", self.0)
    }
}

impl std::error::Error for InvalidYearMonth {}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidYearMonth> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(InvalidYearMonth(format!("{}-{}", year, month)));
        }
        Ok(YearMonth { year, month })
    }

    pub fn current() -> Self {
        let now = Utc::now();
        YearMonth {
            year: now.year(),
            month: now.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Path suffix of the archive endpoint, e.g. `2024/05`.
    pub fn archive_path(&self) -> String {
        format!("{:04}/{:02}", self.year, self.month)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = InvalidYearMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidYearMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        YearMonth::new(year, month).map_err(|_| invalid())
    }
}
