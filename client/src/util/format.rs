//! Display formatting for values coming off the wire.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Render an ISO-8601 timestamp as a medium date, e.g.
/// `Jan 15, 2024, 10:30:00 AM`. Unparseable input is returned as-is.
pub fn medium_timestamp(raw: &str) -> String {
    let parsed = OffsetDateTime::parse(raw, &Rfc3339)
        .map(|dt| PrimitiveDateTime::new(dt.date(), dt.time()))
        .or_else(|_| PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT));
    let Ok(parsed) = parsed else {
        return raw.to_owned();
    };
    let medium = format_description!(
        "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute]:[second] [period]"
    );
    parsed.format(medium).unwrap_or_else(|_| raw.to_owned())
}

/// Split a display name into first and last name on the first space.
pub fn split_display_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_owned();
    let last = parts.collect::<Vec<_>>().join(" ");
    (first, last)
}
