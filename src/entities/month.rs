//! The twelve fixed monthly buckets of the wager book.
//!
//! Bucket labels are the Portuguese month names used by the persisted
//! document (`Janeiro` .. `Dezembro`). A wager's bucket is chosen when it is
//! recorded and does not follow later edits to its date.

use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A calendar month bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    /// January
    Janeiro,
    /// February
    Fevereiro,
    /// March
    #[serde(rename = "Março")]
    Marco,
    /// April
    Abril,
    /// May
    Maio,
    /// June
    Junho,
    /// July
    Julho,
    /// August
    Agosto,
    /// September
    Setembro,
    /// October
    Outubro,
    /// November
    Novembro,
    /// December
    Dezembro,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Janeiro,
        Self::Fevereiro,
        Self::Marco,
        Self::Abril,
        Self::Maio,
        Self::Junho,
        Self::Julho,
        Self::Agosto,
        Self::Setembro,
        Self::Outubro,
        Self::Novembro,
        Self::Dezembro,
    ];

    /// The label used in the persisted document and in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Janeiro => "Janeiro",
            Self::Fevereiro => "Fevereiro",
            Self::Marco => "Março",
            Self::Abril => "Abril",
            Self::Maio => "Maio",
            Self::Junho => "Junho",
            Self::Julho => "Julho",
            Self::Agosto => "Agosto",
            Self::Setembro => "Setembro",
            Self::Outubro => "Outubro",
            Self::Novembro => "Novembro",
            Self::Dezembro => "Dezembro",
        }
    }

    /// Zero-based position in the calendar.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-based month number (January = 1).
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Month for a one-based number, `None` outside 1..=12.
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        let idx = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::ALL.get(idx).copied()
    }

    /// The bucket a date falls into.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        // chrono guarantees month() is in 1..=12
        Self::ALL[date.month0() as usize]
    }

    /// Looks a month up by its document label, ignoring case.
    ///
    /// `Marco` is accepted for `Março` so the label can be typed without the
    /// cedilla.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim().to_lowercase();
        if wanted == "marco" {
            return Some(Self::Marco);
        }
        Self::ALL
            .into_iter()
            .find(|m| m.label().to_lowercase() == wanted)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Month {
    type Err = Error;

    /// Parses a month label (`"Abril"`, `"abril"`) or number (`"4"`).
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(number) = s.trim().parse::<u32>() {
            return Self::from_number(number)
                .ok_or_else(|| Error::validation(format!("Month number out of range: {number}")));
        }
        Self::from_label(s).ok_or_else(|| Error::validation(format!("Unknown month: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_calendar_order() {
        assert_eq!(Month::ALL[0], Month::Janeiro);
        assert_eq!(Month::ALL[11], Month::Dezembro);
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
        }
    }

    #[test]
    fn test_parse_label_and_number() {
        assert_eq!("Abril".parse::<Month>().unwrap(), Month::Abril);
        assert_eq!("abril".parse::<Month>().unwrap(), Month::Abril);
        assert_eq!("Março".parse::<Month>().unwrap(), Month::Marco);
        assert_eq!("marco".parse::<Month>().unwrap(), Month::Marco);
        assert_eq!("12".parse::<Month>().unwrap(), Month::Dezembro);
        assert!("13".parse::<Month>().is_err());
        assert!("0".parse::<Month>().is_err());
        assert!("April".parse::<Month>().is_err());
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(Month::from_date(date), Month::Marco);
    }

    #[test]
    fn test_serde_uses_document_label() {
        let json = serde_json::to_string(&Month::Marco).unwrap();
        assert_eq!(json, "\"Março\"");
        let back: Month = serde_json::from_str("\"Fevereiro\"").unwrap();
        assert_eq!(back, Month::Fevereiro);
    }
}
