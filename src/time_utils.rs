// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Utc};

/// Day-first calendar date, e.g. `19/10/2026`.
pub fn format_day_month_year(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Compact day-first date used for chart axes and tables, e.g. `19/10/26`.
pub fn format_day_month_short(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_first_formats() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 18, 45, 0).unwrap();
        assert_eq!(format_day_month_year(date), "07/03/2026");
        assert_eq!(format_day_month_short(date), "07/03/26");
    }
}
