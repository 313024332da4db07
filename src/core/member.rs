//! Member operations - create, update, remove and filter members.

use crate::entities::{Ledger, Member};
use crate::errors::{Error, Result};

/// Field updates for an existing member; `None` leaves a field unchanged.
#[derive(Debug, Default, Clone)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub photo: Option<String>,
}

/// Adds a member, generating its identifier and creation timestamp.
/// The name must be non-empty after trimming.
pub fn add_member(
    ledger: &mut Ledger,
    name: &str,
    designation: &str,
    phone: &str,
    address: &str,
) -> Result<Member> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "Member name cannot be empty".to_string(),
        });
    }
    let member = Member::new(
        name.to_string(),
        designation.to_string(),
        phone.to_string(),
        address.to_string(),
    );
    ledger.members.push(member.clone());
    Ok(member)
}

/// Updates the member with the given identifier in place.
pub fn update_member(ledger: &mut Ledger, id: &str, update: MemberUpdate) -> Result<Member> {
    let member = ledger
        .members
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| Error::RecordNotFound {
            kind: "Member",
            id: id.to_string(),
        })?;

    if let Some(name) = update.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(Error::Validation {
                message: "Member name cannot be empty".to_string(),
            });
        }
        member.name = name;
    }
    if let Some(designation) = update.designation {
        member.designation = designation;
    }
    if let Some(phone) = update.phone {
        member.phone = phone;
    }
    if let Some(address) = update.address {
        member.address = address;
    }
    if let Some(photo) = update.photo {
        member.photo = Some(photo);
    }
    Ok(member.clone())
}

/// Removes exactly the member with the given identifier.
pub fn remove_member(ledger: &mut Ledger, id: &str) -> Result<Member> {
    let position = ledger
        .members
        .iter()
        .position(|m| m.id == id)
        .ok_or_else(|| Error::RecordNotFound {
            kind: "Member",
            id: id.to_string(),
        })?;
    Ok(ledger.members.remove(position))
}

/// Case-insensitive substring filter over the name-like fields, preserving
/// list order. An empty query matches everything.
pub fn filter_members<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let query = query.to_lowercase();
    members
        .iter()
        .filter(|m| {
            query.is_empty()
                || m.name.to_lowercase().contains(&query)
                || m.designation.to_lowercase().contains(&query)
                || m.phone.contains(&query)
                || m.address.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use crate::test_utils::test_ledger;

    #[test]
    fn add_member_generates_identity_and_grows_list() {
        let mut ledger = test_ledger();
        let member =
            add_member(&mut ledger, "Example Name", "সদস্য", "01712345678", "Dhaka").unwrap();

        assert_eq!(ledger.members.len(), 1);
        assert!(!member.id.is_empty());
        assert_eq!(member.name, "Example Name");
        assert!(member.created_at <= chrono::Utc::now());
    }

    #[test]
    fn add_member_rejects_blank_name() {
        let mut ledger = test_ledger();
        let err = add_member(&mut ledger, "   ", "সদস্য", "", "").unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(ledger.members.is_empty());
    }

    #[test]
    fn update_member_changes_only_given_fields() {
        let mut ledger = test_ledger();
        let member = add_member(&mut ledger, "Example Name", "সদস্য", "017", "Dhaka").unwrap();

        let updated = update_member(
            &mut ledger,
            &member.id,
            MemberUpdate {
                phone: Some("01898765432".to_string()),
                ..MemberUpdate::default()
            },
        )
        .unwrap();

        assert_eq!(ledger.members.len(), 1);
        assert_eq!(updated.phone, "01898765432");
        assert_eq!(updated.name, member.name);
        assert_eq!(updated.id, member.id);
    }

    #[test]
    fn update_missing_member_is_not_found() {
        let mut ledger = test_ledger();
        let err = update_member(&mut ledger, "nope", MemberUpdate::default()).unwrap_err();
        assert!(matches!(err, Error::RecordNotFound { kind: "Member", .. }));
    }

    #[test]
    fn remove_member_deletes_exactly_one_even_among_duplicates() {
        let mut ledger = test_ledger();
        let first = add_member(&mut ledger, "Same Name", "সদস্য", "1", "").unwrap();
        let second = add_member(&mut ledger, "Same Name", "সদস্য", "2", "").unwrap();

        let removed = remove_member(&mut ledger, &first.id).unwrap();
        assert_eq!(removed.id, first.id);
        assert_eq!(ledger.members.len(), 1);
        assert_eq!(ledger.members[0].id, second.id);
        assert!(remove_member(&mut ledger, &first.id).is_err());
    }

    #[test]
    fn filter_is_case_insensitive_over_name_fields() {
        let mut ledger = test_ledger();
        add_member(&mut ledger, "Anita Saha", "সভাপতি", "017", "Sylhet").unwrap();
        add_member(&mut ledger, "Bidyut Das", "সদস্য", "018", "Dhaka").unwrap();

        assert_eq!(filter_members(&ledger.members, "anita").len(), 1);
        assert_eq!(filter_members(&ledger.members, "সদস্য").len(), 1);
        assert_eq!(filter_members(&ledger.members, "dhaka").len(), 1);
        assert_eq!(filter_members(&ledger.members, "").len(), 2);
        assert!(filter_members(&ledger.members, "zzz").is_empty());
    }
}
