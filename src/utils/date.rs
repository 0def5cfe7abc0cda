use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First day of the month containing `d`.
pub fn month_first(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap_or(d)
}

/// Last day of the month containing `d`.
pub fn month_last(d: NaiveDate) -> NaiveDate {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };

    match NaiveDate::from_ymd_opt(y, m, 1) {
        Some(next_first) => next_first.pred_opt().unwrap_or(d),
        None => d,
    }
}

/// The `n` calendar months ending at the month of `reference`,
/// oldest first. Each window is (label "YYYY-MM", first day, last day).
pub fn month_windows(reference: NaiveDate, n: u32) -> Vec<(String, NaiveDate, NaiveDate)> {
    let mut out = Vec::with_capacity(n as usize);
    let mut first = month_first(reference);

    for _ in 0..n {
        out.push((first.format("%Y-%m").to_string(), first, month_last(first)));

        first = match month_first(first).pred_opt() {
            Some(prev_last) => month_first(prev_last),
            None => break,
        };
    }

    out.reverse();
    out
}
