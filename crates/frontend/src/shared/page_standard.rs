//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_log_entry--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a001_log_entry/` directory.

/// List of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_in_use_are_valid() {
        assert!(is_valid_page_id("a001_log_entry--list"));
        assert!(is_valid_page_id("a001_log_entry--detail"));
        assert!(!is_valid_page_id("a001_log_entry"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn categories_are_distinct() {
        assert_eq!(ALL_CATEGORIES.len(), 2);
        assert_ne!(PAGE_CAT_LIST, PAGE_CAT_DETAIL);
    }
}
