//! Live search over the support page FAQ list.

#[cfg(test)]
#[path = "faq_search_test.rs"]
mod faq_search_test;

use crate::content::faq::FaqEntry;

/// Entries whose question contains `query`, ignoring case.
///
/// Lazy and order-preserving; an empty query yields every entry. Case folding
/// uses Unicode lowercase so Vietnamese letters such as `Đ`/`đ` match.
pub fn filter_faqs<'a>(entries: &'a [FaqEntry], query: &str) -> impl Iterator<Item = &'a FaqEntry> + use<'a> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(move |entry| needle.is_empty() || entry.question.to_lowercase().contains(&needle))
}
