//! Utility functions for nujum

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the relative prefix from a generated page back to site root.
///
/// Pages nest under language and section directories
/// (`en/blog/<slug>/index.html` sits three levels deep), and asset and
/// cross-language links are emitted relative to the site root.
///
/// # Arguments
///
/// * `depth`: Directory depth of the page below the output root
///
/// # Returns
///
/// `../` repeated `depth` times
pub fn root_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Joins the configured base URL and a site-relative path.
///
/// Normalizes slashes so configuration with or without a trailing slash
/// produces the same canonical URL.
pub fn absolute_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{path}")
    }
}

/// Returns the current Gregorian year for the footer copyright line.
///
/// Computed from the epoch with the mean year length; exact to the day
/// boundaries that matter for a year stamp.
pub fn current_year() -> u64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    1970 + secs / 31_556_952
}

/// Returns today's date as an ISO `YYYY-MM-DD` string for sitemap
/// lastmod stamps.
pub fn today_iso() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    format!("{year:04}-{month:02}-{day:02}")
}

/// Converts days since the Unix epoch to a civil (year, month, day).
///
/// Standard era-based Gregorian conversion, exact over the proleptic
/// calendar.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_prefix_depths() {
        assert_eq!(root_prefix(0), "");
        assert_eq!(root_prefix(1), "../");
        assert_eq!(root_prefix(3), "../../../");
    }

    #[test]
    fn test_absolute_url_slash_handling() {
        assert_eq!(
            absolute_url("https://example.com", "en/index.html"),
            "https://example.com/en/index.html"
        );
        assert_eq!(
            absolute_url("https://example.com/", "/en/index.html"),
            "https://example.com/en/index.html"
        );
        assert_eq!(
            absolute_url("https://example.com", ""),
            "https://example.com/"
        );
    }

    #[test]
    fn test_absolute_url_with_base_path() {
        assert_eq!(
            absolute_url("https://user.github.io/site/", "ar/blog/index.html"),
            "https://user.github.io/site/ar/blog/index.html"
        );
    }

    #[test]
    fn test_current_year_sane() {
        let year = current_year();
        assert!(year >= 2024, "Year should be at least the build era");
        assert!(year < 2200, "Year should stay in a sane range");
    }

    #[test]
    fn test_civil_from_days_known_dates() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(19_723), (2024, 1, 1));
        // leap day
        assert_eq!(civil_from_days(19_782), (2024, 2, 29));
    }

    #[test]
    fn test_today_iso_shape() {
        let today = today_iso();
        assert_eq!(today.len(), 10, "ISO date is fixed width: {}", today);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }
}
