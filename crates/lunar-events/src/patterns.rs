//! Date, time, and location pattern matchers.
//!
//! Each extraction is an ordered list of compiled patterns tried in
//! sequence; the first match wins. Order is part of the contract: month
//! names outrank slash dates, which outrank ISO dates.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Long-form or abbreviated month name, day, year ("February 15, 2026").
static MONTH_NAME_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?P<month>January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec)\.?\s+(?P<day>\d{1,2}),?\s+(?P<year>\d{4})\b",
    )
    .unwrap()
});

/// Numeric slash form `M/D/YY` or `M/D/YYYY`.
static SLASH_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?P<month>\d{1,2})/(?P<day>\d{1,2})/(?P<year>\d{4}|\d{2})\b").unwrap()
});

/// ISO form `YYYY-MM-DD`.
static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})\b").unwrap()
});

static TIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b\d{1,2}:\d{2}\s*(?:AM|PM)\b").unwrap(),
        Regex::new(r"(?i)\b\d{1,2}\s*(?:AM|PM)\b").unwrap(),
    ]
});

static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b(?:room|hall|building|lab|library|office)\s+\w+").unwrap(),
        Regex::new(r"\b(?i:at|in)\s+(?P<place>[\w\s]+(?:Hall|Room|Lab|Library|Building|Center))").unwrap(),
    ]
});

/// A date found in a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateToken {
    /// Byte range of the matched date text within the line.
    pub start: usize,
    pub end: usize,
}

/// Find the first date in a line, trying pattern families in priority
/// order. Returns the matched span and the parsed date; `None` for the
/// date means the text looked like a date but is not a valid calendar day
/// (e.g. February 30).
pub fn find_date(line: &str) -> Option<(DateToken, Option<NaiveDate>)> {
    if let Some(caps) = MONTH_NAME_DATE.captures(line) {
        let m = caps.get(0).unwrap();
        let date = month_number(&caps["month"]).and_then(|month| {
            build_date(
                caps["year"].parse().ok()?,
                month,
                caps["day"].parse().ok()?,
            )
        });
        return Some((span(m), date));
    }
    if let Some(caps) = SLASH_DATE.captures(line) {
        let m = caps.get(0).unwrap();
        let year: i32 = caps["year"].parse().ok()?;
        let year = if year < 100 { year + 2000 } else { year };
        let date = build_date(year, caps["month"].parse().ok()?, caps["day"].parse().ok()?);
        return Some((span(m), date));
    }
    if let Some(caps) = ISO_DATE.captures(line) {
        let m = caps.get(0).unwrap();
        let date = build_date(
            caps["year"].parse().ok()?,
            caps["month"].parse().ok()?,
            caps["day"].parse().ok()?,
        );
        return Some((span(m), date));
    }
    None
}

/// Find the first clock time in a line ("9:00 AM", "7pm").
pub fn find_time(line: &str) -> Option<String> {
    TIME_PATTERNS
        .iter()
        .find_map(|re| re.find(line))
        .map(|m| m.as_str().to_string())
}

/// Find the first location mention in a line ("Room 301", "Science Hall").
pub fn find_location(line: &str) -> Option<String> {
    for re in LOCATION_PATTERNS.iter() {
        if let Some(caps) = re.captures(line) {
            let text = caps
                .name("place")
                .map_or_else(|| caps.get(0).unwrap().as_str(), |m| m.as_str());
            return Some(text.trim().to_string());
        }
    }
    None
}

fn span(m: regex::Match<'_>) -> DateToken {
    DateToken {
        start: m.start(),
        end: m.end(),
    }
}

fn build_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.to_lowercase().chars().take(3).collect();
    match prefix.as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_date() {
        let (token, date) = find_date("Midterm Exam: February 15, 2026 at 9:00 AM").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 2, 15));
        assert_eq!(
            &"Midterm Exam: February 15, 2026 at 9:00 AM"[token.start..token.end],
            "February 15, 2026"
        );
    }

    #[test]
    fn test_abbreviated_month() {
        let (_, date) = find_date("Due Sept. 3 2026").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 9, 3));
    }

    #[test]
    fn test_slash_date_two_digit_year() {
        let (_, date) = find_date("deadline 2/1/26 at noon").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 2, 1));
    }

    #[test]
    fn test_iso_date() {
        let (_, date) = find_date("submitted on 2026-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 15));
    }

    #[test]
    fn test_month_name_outranks_other_forms() {
        let line = "January 15, 2026 same as 01/15/2026 and 2026-01-15";
        let (token, _) = find_date(line).unwrap();
        assert_eq!(&line[token.start..token.end], "January 15, 2026");
    }

    #[test]
    fn test_invalid_calendar_day() {
        let (_, date) = find_date("party on February 30, 2026").unwrap();
        assert!(date.is_none());
    }

    #[test]
    fn test_no_date() {
        assert!(find_date("just some regular text").is_none());
    }

    #[test]
    fn test_find_time() {
        assert_eq!(find_time("exam at 9:00 AM sharp").as_deref(), Some("9:00 AM"));
        assert_eq!(find_time("starts 7pm tonight").as_deref(), Some("7pm"));
        assert!(find_time("no clock here").is_none());
    }

    #[test]
    fn test_find_location_keyword() {
        assert_eq!(
            find_location("Final exam in Room 301 next week").as_deref(),
            Some("Room 301")
        );
    }

    #[test]
    fn test_find_location_capitalized_phrase() {
        assert_eq!(
            find_location("Lecture at Turing Center on Friday").as_deref(),
            Some("Turing Center")
        );
    }
}
