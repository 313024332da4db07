//! Contribution operations - member dues per puja.

use crate::entities::{Contribution, Ledger, PaymentMethod, PaymentStatus};
use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Field updates for an existing contribution; `None` leaves a field
/// unchanged.
#[derive(Debug, Default, Clone)]
pub struct ContributionUpdate {
    pub amount: Option<f64>,
    pub paid_amount: Option<f64>,
    pub status: Option<PaymentStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Adds a contribution. Amounts must be non-negative; the paid amount is
/// otherwise unconstrained relative to the due amount, and the status stays
/// whatever the operator sets it to.
pub fn add_contribution(
    ledger: &mut Ledger,
    member_id: &str,
    puja_id: &str,
    amount: f64,
    paid_amount: f64,
    status: PaymentStatus,
) -> Result<Contribution> {
    if amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    if paid_amount < 0.0 {
        return Err(Error::InvalidAmount { amount: paid_amount });
    }
    let mut contribution =
        Contribution::new(member_id.to_string(), puja_id.to_string(), amount, paid_amount);
    contribution.status = status;
    ledger.contributions.push(contribution.clone());
    Ok(contribution)
}

/// Updates the contribution with the given identifier in place.
pub fn update_contribution(
    ledger: &mut Ledger,
    id: &str,
    update: ContributionUpdate,
) -> Result<Contribution> {
    let contribution = ledger
        .contributions
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| Error::RecordNotFound {
            kind: "Contribution",
            id: id.to_string(),
        })?;

    if let Some(amount) = update.amount {
        if amount < 0.0 {
            return Err(Error::InvalidAmount { amount });
        }
        contribution.amount = amount;
    }
    if let Some(paid) = update.paid_amount {
        if paid < 0.0 {
            return Err(Error::InvalidAmount { amount: paid });
        }
        contribution.paid_amount = paid;
    }
    if let Some(status) = update.status {
        contribution.status = status;
    }
    if let Some(method) = update.payment_method {
        contribution.payment_method = Some(method);
    }
    if let Some(payment_date) = update.payment_date {
        contribution.payment_date = Some(payment_date);
    }
    if let Some(notes) = update.notes {
        contribution.notes = Some(notes);
    }
    Ok(contribution.clone())
}

/// Removes exactly the contribution with the given identifier.
pub fn remove_contribution(ledger: &mut Ledger, id: &str) -> Result<Contribution> {
    let position = ledger
        .contributions
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| Error::RecordNotFound {
            kind: "Contribution",
            id: id.to_string(),
        })?;
    Ok(ledger.contributions.remove(position))
}

/// Contributions for one puja, in their original relative order.
pub fn contributions_for_puja<'a>(
    contributions: &'a [Contribution],
    puja_id: &str,
) -> Vec<&'a Contribution> {
    contributions.iter().filter(|c| c.puja_id == puja_id).collect()
}

/// Contributions from one member, in their original relative order.
pub fn contributions_for_member<'a>(
    contributions: &'a [Contribution],
    member_id: &str,
) -> Vec<&'a Contribution> {
    contributions.iter().filter(|c| c.member_id == member_id).collect()
}
