//! Puja operations.

use crate::entities::{Ledger, Puja, PujaType};
use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Field updates for an existing puja; `None` leaves a field unchanged.
#[derive(Debug, Default, Clone)]
pub struct PujaUpdate {
    pub name: Option<String>,
    pub puja_type: Option<PujaType>,
    pub budget: Option<f64>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Adds a puja. The budget must be non-negative.
pub fn add_puja(
    ledger: &mut Ledger,
    name: &str,
    puja_type: PujaType,
    budget: f64,
    date: NaiveDate,
    description: &str,
) -> Result<Puja> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "Puja name cannot be empty".to_string(),
        });
    }
    if budget < 0.0 {
        return Err(Error::InvalidAmount { amount: budget });
    }
    let puja = Puja::new(
        name.to_string(),
        puja_type,
        budget,
        date,
        description.to_string(),
    );
    ledger.pujas.push(puja.clone());
    Ok(puja)
}

/// Updates the puja with the given identifier in place.
pub fn update_puja(ledger: &mut Ledger, id: &str, update: PujaUpdate) -> Result<Puja> {
    let puja = ledger
        .pujas
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| Error::RecordNotFound {
            kind: "Puja",
            id: id.to_string(),
        })?;

    if let Some(budget) = update.budget {
        if budget < 0.0 {
            return Err(Error::InvalidAmount { amount: budget });
        }
        puja.budget = budget;
    }
    if let Some(name) = update.name {
        puja.name = name;
    }
    if let Some(puja_type) = update.puja_type {
        puja.puja_type = puja_type;
    }
    if let Some(date) = update.date {
        puja.date = date;
    }
    if let Some(description) = update.description {
        puja.description = description;
    }
    Ok(puja.clone())
}

/// Removes exactly the puja with the given identifier. Contributions and
/// expenses referencing it are left as they are; dangling references are
/// tolerated throughout.
pub fn remove_puja(ledger: &mut Ledger, id: &str) -> Result<Puja> {
    let position = ledger
        .pujas
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| Error::RecordNotFound {
            kind: "Puja",
            id: id.to_string(),
        })?;
    Ok(ledger.pujas.remove(position))
}

/// Case-insensitive substring filter over name and description.
pub fn filter_pujas<'a>(pujas: &'a [Puja], query: &str) -> Vec<&'a Puja> {
    let query = query.to_lowercase();
    pujas
        .iter()
        .filter(|p| {
            query.is_empty()
                || p.name.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
        })
        .collect()
}
