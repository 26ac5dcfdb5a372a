//! Keyword scanning over the scam-indicator watchlist

/// Scanner matching transcripts against a fixed watchlist
///
/// Matching is case-insensitive substring search, so multi-word phrases
/// like "wire transfer" match regardless of surrounding punctuation. The
/// scanner is deterministic and side-effect free; output order follows the
/// watchlist (presentation only, correctness does not depend on it).
#[derive(Debug, Clone)]
pub struct KeywordScanner {
    // (display form, lowercased form) pairs
    watchlist: Vec<(String, String)>,
}

impl KeywordScanner {
    /// Create a scanner from the configured watchlist
    ///
    /// Entries are trimmed; empty entries and case-insensitive duplicates
    /// are dropped, keeping the first occurrence.
    #[must_use]
    pub fn new<I, S>(watchlist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for entry in watchlist {
            let display = entry.into().trim().to_string();
            if display.is_empty() {
                continue;
            }
            let lowered = display.to_lowercase();
            if entries.iter().any(|(_, existing)| *existing == lowered) {
                continue;
            }
            entries.push((display, lowered));
        }
        Self { watchlist: entries }
    }

    /// Scan text for watchlist entries
    ///
    /// Returns the subset of watchlist entries found in the text, in
    /// watchlist order. Empty text yields an empty result.
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let haystack = text.to_lowercase();
        self.watchlist
            .iter()
            .filter(|(_, lowered)| haystack.contains(lowered))
            .map(|(display, _)| display.clone())
            .collect()
    }

    /// Number of entries in the watchlist
    #[must_use]
    pub fn watchlist_len(&self) -> usize {
        self.watchlist.len()
    }
}
