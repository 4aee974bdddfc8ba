use std::fmt;

use crate::watched::entry::WatchedEntry;

/// Arithmetic mean; an empty slice averages to 0.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Aggregate numbers shown above the watched list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    /// Minutes.
    pub avg_runtime: f64,
}

impl WatchedSummary {
    pub fn from_entries(entries: &[WatchedEntry]) -> Self {
        let imdb: Vec<f64> = entries.iter().map(|e| e.imdb_rating).collect();
        let user: Vec<f64> = entries.iter().map(|e| e.user_rating as f64).collect();
        let runtime: Vec<f64> = entries.iter().map(|e| e.runtime as f64).collect();

        Self {
            count: entries.len(),
            avg_imdb_rating: average(&imdb),
            avg_user_rating: average(&user),
            avg_runtime: average(&runtime),
        }
    }
}

impl fmt::Display for WatchedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} movies  ⭐ {:.2}  🌟 {:.2}  ⏳ {:.2} min",
            self.count, self.avg_imdb_rating, self.avg_user_rating, self.avg_runtime
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, imdb: f64, user: u8, runtime: u32) -> WatchedEntry {
        WatchedEntry {
            imdb_id: id.to_string(),
            title: id.to_string(),
            year: "2000".to_string(),
            poster: String::new(),
            imdb_rating: imdb,
            runtime,
            user_rating: user,
        }
    }

    #[test]
    fn empty_average_is_zero() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn single_average_is_value() {
        assert_eq!(average(&[7.5]), 7.5);
    }

    #[test]
    fn average_ignores_order() {
        let a = average(&[1.0, 2.0, 9.5, 4.25]);
        let b = average(&[9.5, 4.25, 1.0, 2.0]);
        assert!((a - b).abs() < 1e-12);
        assert!((a - 4.1875).abs() < 1e-12);
    }

    #[test]
    fn summary_of_empty_list_is_all_zero() {
        let summary = WatchedSummary::from_entries(&[]);
        assert_eq!(summary, WatchedSummary::default());
        assert_eq!(
            summary.to_string(),
            "0 movies  ⭐ 0.00  🌟 0.00  ⏳ 0.00 min"
        );
    }

    #[test]
    fn summary_averages_each_column() {
        let entries = vec![entry("a", 8.0, 9, 120), entry("b", 7.0, 6, 90)];
        let summary = WatchedSummary::from_entries(&entries);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.avg_imdb_rating, 7.5);
        assert_eq!(summary.avg_user_rating, 7.5);
        assert_eq!(summary.avg_runtime, 105.0);
    }

    #[test]
    fn display_uses_two_decimals() {
        let entries = vec![entry("a", 8.1, 9, 123)];
        let text = WatchedSummary::from_entries(&entries).to_string();
        assert!(text.contains("8.10"));
        assert!(text.contains("9.00"));
        assert!(text.contains("123.00 min"));
    }
}
