//! French display formatting for the bill list

use chrono::{Datelike, NaiveDate};

/// Abbreviated French month names, as shown in the list view.
const MONTHS_FR: [&str; 12] = [
    "Jan.", "Fév.", "Mar.", "Avr.", "Mai", "Juin", "Juil.", "Aoû.", "Sep.", "Oct.", "Nov.", "Déc.",
];

/// Short French date: `2004-04-04` renders as `4 Avr. 04`.
///
/// Day without a leading zero, abbreviated month, two-digit year.
pub fn short_date_fr(date: NaiveDate) -> String {
    format!(
        "{} {} {:02}",
        date.day(),
        MONTHS_FR[date.month0() as usize],
        date.year().rem_euclid(100)
    )
}
