use chrono::NaiveDate;

use crate::model::ScoreTier;

pub mod cards;
pub mod table;
pub mod trend;

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Lenient formatting for backend timestamps: the leading date portion is
/// formatted when it parses, anything else passes through unchanged.
pub fn format_date_raw(raw: &str) -> String {
    let prefix = raw.get(..10).unwrap_or(raw);
    match prefix.parse::<NaiveDate>() {
        Ok(date) => format_date(date),
        Err(_) => raw.to_string(),
    }
}

pub fn format_score(score: f64) -> String {
    if score.fract().abs() < f64::EPSILON {
        format!("{score:.0}%")
    } else {
        format!("{score:.1}%")
    }
}

pub fn score_badge(score: f64) -> String {
    format!("{} {}", format_score(score), ScoreTier::classify(score).label())
}
