//! Income and expense operations.

use crate::entities::{Expense, ExpenseCategory, IncomeType, Ledger, OtherIncome};
use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Adds an income record. The amount must be non-negative.
pub fn add_income(
    ledger: &mut Ledger,
    income_type: IncomeType,
    source: &str,
    description: &str,
    amount: f64,
    date: NaiveDate,
) -> Result<OtherIncome> {
    if amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    let income = OtherIncome::new(
        income_type,
        source.to_string(),
        description.to_string(),
        amount,
        date,
    );
    ledger.income.push(income.clone());
    Ok(income)
}

/// Removes exactly the income record with the given identifier.
pub fn remove_income(ledger: &mut Ledger, id: &str) -> Result<OtherIncome> {
    let position = ledger
        .income
        .iter()
        .position(|i| i.id == id)
        .ok_or_else(|| Error::RecordNotFound {
            kind: "Income",
            id: id.to_string(),
        })?;
    Ok(ledger.income.remove(position))
}

/// Adds an expense record, optionally attributed to a puja and carrying a
/// receipt number. The amount must be non-negative.
pub fn add_expense(
    ledger: &mut Ledger,
    category: ExpenseCategory,
    description: &str,
    amount: f64,
    date: NaiveDate,
    receipt_no: Option<String>,
    puja_id: Option<String>,
) -> Result<Expense> {
    if amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    let mut expense = Expense::new(category, description.to_string(), amount, date);
    expense.receipt_no = receipt_no;
    expense.puja_id = puja_id;
    ledger.expenses.push(expense.clone());
    Ok(expense)
}

/// Removes exactly the expense with the given identifier.
pub fn remove_expense(ledger: &mut Ledger, id: &str) -> Result<Expense> {
    let position = ledger
        .expenses
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| Error::RecordNotFound {
            kind: "Expense",
            id: id.to_string(),
        })?;
    Ok(ledger.expenses.remove(position))
}

/// Expenses attributed to one puja, in their original relative order,
/// regardless of how listings elsewhere sort by date.
pub fn expenses_for_puja<'a>(expenses: &'a [Expense], puja_id: &str) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| e.puja_id.as_deref() == Some(puja_id))
        .collect()
}
