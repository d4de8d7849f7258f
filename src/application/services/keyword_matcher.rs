//! Keyword matcher - picks a canned answer for a free-text question
//!
//! Matching is plain substring containment on lowercased text: the first entry
//! (in table order) with any keyword (in stored order) contained in the
//! question wins. There is no tokenizing or ranking, so a short keyword like
//! "in" will match almost every question. Keep keywords specific.

use crate::domain::entities::ResponseTable;

/// Answer for `question`, or the table's default answer when nothing matches.
///
/// Callers reject empty questions before getting here.
pub fn find_answer<'a>(question: &str, table: &'a ResponseTable) -> &'a str {
    let question_lower = question.to_lowercase();

    table
        .entries
        .iter()
        .find(|entry| {
            entry
                .keywords
                .iter()
                .any(|keyword| question_lower.contains(&keyword.to_lowercase()))
        })
        .map(|entry| entry.answer.as_str())
        .unwrap_or(table.default_answer.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ResponseEntry;

    fn table() -> ResponseTable {
        ResponseTable::new("Ask an organizer!", "Welcome!")
            .with_entry(ResponseEntry::new(["park", "parking"], "Lot B"))
            .with_entry(ResponseEntry::new(["food", "lunch", "Dinner"], "Pizza at 6"))
            .with_entry(ResponseEntry::new(["wifi"], "Network: GullNet"))
            .with_entry(ResponseEntry::new(["parking pass"], "Passes at the front desk"))
    }

    #[test]
    fn test_matches_case_insensitively() {
        let table = table();
        assert_eq!(find_answer("Where can I PARK?", &table), "Lot B");
        assert_eq!(find_answer("when is dinner", &table), "Pizza at 6");
        assert_eq!(find_answer("WiFi password?", &table), "Network: GullNet");
    }

    #[test]
    fn test_first_entry_wins() {
        // "parking pass" also matches the later entry, but "park" comes first
        assert_eq!(find_answer("do I need a parking pass", &table()), "Lot B");
    }

    #[test]
    fn test_substring_not_token_match() {
        assert_eq!(find_answer("seafood options?", &table()), "Pizza at 6");
    }

    #[test]
    fn test_default_when_nothing_matches() {
        assert_eq!(find_answer("what is the meaning of life", &table()), "Ask an organizer!");
        let empty = ResponseTable::new("fallback", "hi");
        assert_eq!(find_answer("park", &empty), "fallback");
    }
}
