use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

// All calendar identity is computed on UTC components. A record belongs to
// the UTC day and month its timestamp falls in.

pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

pub fn is_same_month(date: DateTime<Utc>, month: NaiveDate) -> bool {
    date.year() == month.year() && date.month() == month.month()
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn previous_month(month: NaiveDate) -> NaiveDate {
    month_start(month_start(month) - Duration::days(1))
}

// Months in ascending order, ending with the month `today` falls in.
pub fn recent_months(count: usize, today: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::with_capacity(count);
    let mut cursor = month_start(today);
    for _ in 0..count {
        months.push(cursor);
        cursor = previous_month(cursor);
    }
    months.reverse();
    months
}

// "March 2025"
pub fn month_label(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

// "Mar 5, 2025"
pub fn date_label(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_ignores_time_of_day() {
        assert!(is_same_day(at(2025, 3, 5, 0), at(2025, 3, 5, 23)));
        assert!(!is_same_day(at(2025, 3, 5, 23), at(2025, 3, 6, 0)));
    }

    #[test]
    fn same_month_checks_year_and_month() {
        assert!(is_same_month(at(2025, 3, 5, 12), day(2025, 3, 1)));
        assert!(!is_same_month(at(2025, 3, 5, 12), day(2025, 4, 1)));
        assert!(!is_same_month(at(2024, 3, 5, 12), day(2025, 3, 1)));
    }

    #[test]
    fn month_start_resets_the_day() {
        assert_eq!(month_start(day(2025, 3, 17)), day(2025, 3, 1));
        assert_eq!(month_start(day(2025, 3, 1)), day(2025, 3, 1));
    }

    #[test]
    fn previous_month_crosses_year_boundary() {
        assert_eq!(previous_month(day(2025, 1, 15)), day(2024, 12, 1));
        assert_eq!(previous_month(day(2025, 3, 31)), day(2025, 2, 1));
    }

    #[test]
    fn recent_months_are_ascending_and_end_with_current() {
        let months = recent_months(3, day(2025, 2, 15));
        assert_eq!(
            months,
            vec![day(2024, 12, 1), day(2025, 1, 1), day(2025, 2, 1)]
        );
    }

    #[test]
    fn labels_match_display_formats() {
        assert_eq!(month_label(day(2025, 3, 1)), "March 2025");
        assert_eq!(date_label(at(2025, 3, 5, 12)), "Mar 5, 2025");
    }
}
