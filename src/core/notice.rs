//! Notice operations.

use crate::entities::{Ledger, Notice};
use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Adds a notice.
pub fn add_notice(
    ledger: &mut Ledger,
    title: &str,
    description: &str,
    date: NaiveDate,
    is_important: bool,
) -> Result<Notice> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::Validation {
            message: "Notice title cannot be empty".to_string(),
        });
    }
    let notice = Notice::new(title.to_string(), description.to_string(), date, is_important);
    ledger.notices.push(notice.clone());
    Ok(notice)
}

/// Removes exactly the notice with the given identifier.
pub fn remove_notice(ledger: &mut Ledger, id: &str) -> Result<Notice> {
    let position = ledger
        .notices
        .iter()
        .position(|n| n.id == id)
        .ok_or_else(|| Error::RecordNotFound {
            kind: "Notice",
            id: id.to_string(),
        })?;
    Ok(ledger.notices.remove(position))
}

/// Notices newest-first, the order listings display them in.
pub fn sorted_notices(notices: &[Notice]) -> Vec<&Notice> {
    let mut sorted: Vec<&Notice> = notices.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{date, test_ledger, test_notice};

    #[test]
    fn notices_sort_newest_first() {
        let mut ledger = test_ledger();
        ledger.notices.push(test_notice("old", date(2025, 1, 1), false));
        ledger.notices.push(test_notice("new", date(2025, 6, 1), true));
        ledger.notices.push(test_notice("mid", date(2025, 3, 1), false));

        let sorted = sorted_notices(&ledger.notices);
        let titles: Vec<&str> = sorted.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["new", "mid", "old"]);
    }

    #[test]
    fn add_notice_requires_a_title() {
        let mut ledger = test_ledger();
        assert!(add_notice(&mut ledger, "  ", "", date(2025, 1, 1), false).is_err());
        add_notice(&mut ledger, "মহালয়া", "ভোর ৫টায়", date(2025, 9, 21), true).unwrap();
        assert_eq!(ledger.notices.len(), 1);
        assert!(ledger.notices[0].is_important);
    }
}
