//! Date cleaner — turns free-text resume dates ("Sept 2015", "03/2019", "now")
//! into calendar dates.

pub mod handlers;

use chrono::NaiveDate;

/// Abbreviations seen in scraped profiles that chrono does not accept.
const MONTH_FIXUPS: &[(&str, &str)] = &[("Sept ", "Sep "), ("Febr ", "Feb "), ("Octo ", "Oct ")];

#[derive(Debug, Clone, Copy)]
enum DateFormat {
    /// Format names day, month and year.
    Full(&'static str),
    /// Month and year only; the day defaults to 1.
    MonthYear(&'static str),
    /// A bare four-digit year; resolves to 1 January.
    Year,
}

/// Tried in order; the first format that parses wins.
const DATE_FORMATS: &[DateFormat] = &[
    DateFormat::Full("%Y-%m-%d"),
    DateFormat::Full("%d/%m/%Y"),
    DateFormat::Full("%m/%d/%Y"),
    DateFormat::Full("%B %d, %Y"),
    DateFormat::Full("%b %d, %Y"),
    DateFormat::Full("%d %B %Y"),
    DateFormat::Full("%d %b %Y"),
    DateFormat::MonthYear("%B %Y"),
    DateFormat::MonthYear("%b %Y"),
    DateFormat::MonthYear("%m/%Y"),
    DateFormat::MonthYear("%m-%Y"),
    DateFormat::MonthYear("%Y-%m"),
    DateFormat::Year,
];

impl DateFormat {
    fn parse(self, text: &str) -> Option<NaiveDate> {
        match self {
            DateFormat::Full(fmt) => NaiveDate::parse_from_str(text, fmt).ok(),
            DateFormat::MonthYear(fmt) => {
                NaiveDate::parse_from_str(&format!("1 {text}"), &format!("%d {fmt}")).ok()
            }
            DateFormat::Year => {
                if text.len() != 4 || !text.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1)
            }
        }
    }
}

/// Parses a loosely formatted date. `now` (any case) resolves to `today`.
/// Returns `None` for blank or unrecognised input.
pub fn clean_datetime(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let text = text
        .trim()
        .replace("&nbsp;", " ")
        .replace("&ndash;", "-");
    let mut text = text.trim_end_matches('-').to_string();
    for (from, to) in MONTH_FIXUPS {
        text = text.replace(from, to);
    }

    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if text.eq_ignore_ascii_case("now") {
        return Some(today);
    }

    DATE_FORMATS.iter().find_map(|format| format.parse(text))
}
