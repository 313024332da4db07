//! Report generation - structured rows for the four downloadable reports,
//! and their CSV rendering.
//!
//! Builders return plain row data so the surface layer decides presentation;
//! the CSV renderers turn those rows into UTF-8 files with a header row and
//! RFC-4180-style quoting.

use crate::entities::{Ledger, Member, PaymentStatus};

/// Placeholder for a reference that no longer resolves.
const UNKNOWN: &str = "অজানা";

/// One line of the member roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    pub serial: usize,
    pub name: String,
    pub designation: String,
    pub phone: String,
    pub address: String,
}

/// Full member roster in list order.
pub fn member_roster(members: &[Member]) -> Vec<RosterRow> {
    members
        .iter()
        .enumerate()
        .map(|(index, m)| RosterRow {
            serial: index + 1,
            name: m.name.clone(),
            designation: m.designation.clone(),
            phone: m.phone.clone(),
            address: m.address.clone(),
        })
        .collect()
}

/// One line of the outstanding-dues report.
#[derive(Debug, Clone, PartialEq)]
pub struct DueRow {
    pub serial: usize,
    pub member_name: String,
    pub puja_name: String,
    pub amount: f64,
    pub paid_amount: f64,
    pub pending: f64,
}

/// Contributions not marked paid, with member and puja names resolved.
/// Dangling references are reported, not dropped.
pub fn due_list(ledger: &Ledger) -> Vec<DueRow> {
    ledger
        .contributions
        .iter()
        .filter(|c| c.status != PaymentStatus::Paid)
        .enumerate()
        .map(|(index, c)| {
            let member_name = ledger
                .members
                .iter()
                .find(|m| m.id == c.member_id)
                .map_or_else(|| UNKNOWN.to_string(), |m| m.name.clone());
            let puja_name = ledger
                .pujas
                .iter()
                .find(|p| p.id == c.puja_id)
                .map_or_else(|| UNKNOWN.to_string(), |p| p.name.clone());
            DueRow {
                serial: index + 1,
                member_name,
                puja_name,
                amount: c.amount,
                paid_amount: c.paid_amount,
                pending: c.amount - c.paid_amount,
            }
        })
        .collect()
}

/// The income/expense statement: headline totals plus both detail tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub total_income: f64,
    pub total_contributions_paid: f64,
    pub total_expenses: f64,
    pub balance: f64,
    /// (date, type, source, amount)
    pub income_rows: Vec<(String, String, String, f64)>,
    /// (date, category, description, amount)
    pub expense_rows: Vec<(String, String, String, f64)>,
}

/// Builds the full statement from the current ledger.
pub fn full_statement(ledger: &Ledger) -> Statement {
    let total_income: f64 = ledger.income.iter().map(|i| i.amount).sum();
    let total_contributions_paid: f64 =
        ledger.contributions.iter().map(|c| c.paid_amount).sum();
    let total_expenses: f64 = ledger.expenses.iter().map(|e| e.amount).sum();

    Statement {
        total_income,
        total_contributions_paid,
        total_expenses,
        balance: total_income + total_contributions_paid - total_expenses,
        income_rows: ledger
            .income
            .iter()
            .map(|i| {
                (
                    i.date.to_string(),
                    i.income_type.to_string(),
                    i.source.clone(),
                    i.amount,
                )
            })
            .collect(),
        expense_rows: ledger
            .expenses
            .iter()
            .map(|e| {
                (
                    e.date.to_string(),
                    e.category.to_string(),
                    e.description.clone(),
                    e.amount,
                )
            })
            .collect(),
    }
}

/// One line of the per-member dues summary.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDuesRow {
    pub member_name: String,
    pub expected: f64,
    pub paid: f64,
    pub pending: f64,
}

/// Contributions grouped per member, in first-seen order. Contributions whose
/// member no longer exists are skipped, matching the dashboard this replaces.
pub fn dues_summary(ledger: &Ledger) -> Vec<MemberDuesRow> {
    let mut order: Vec<String> = Vec::new();
    let mut rows: Vec<MemberDuesRow> = Vec::new();

    for contribution in &ledger.contributions {
        let Some(member) = ledger.members.iter().find(|m| m.id == contribution.member_id)
        else {
            continue;
        };
        let index = match order.iter().position(|id| *id == member.id) {
            Some(index) => index,
            None => {
                order.push(member.id.clone());
                rows.push(MemberDuesRow {
                    member_name: member.name.clone(),
                    expected: 0.0,
                    paid: 0.0,
                    pending: 0.0,
                });
                rows.len() - 1
            }
        };
        rows[index].expected += contribution.amount;
        rows[index].paid += contribution.paid_amount;
        rows[index].pending += contribution.amount - contribution.paid_amount;
    }
    rows
}

/// Quotes a CSV field when it contains a delimiter, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

fn render_csv(header: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut out = csv_line(&header.iter().map(|h| (*h).to_string()).collect::<Vec<_>>());
    out.push('\n');
    for row in rows {
        out.push_str(&csv_line(&row));
        out.push('\n');
    }
    out
}

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Member roster as CSV.
pub fn roster_csv(rows: &[RosterRow]) -> String {
    render_csv(
        &["ক্রম", "নাম", "পদবি", "ফোন", "ঠিকানা"],
        rows.iter()
            .map(|r| {
                vec![
                    r.serial.to_string(),
                    r.name.clone(),
                    r.designation.clone(),
                    r.phone.clone(),
                    r.address.clone(),
                ]
            })
            .collect(),
    )
}

/// Outstanding-dues list as CSV.
pub fn due_list_csv(rows: &[DueRow]) -> String {
    render_csv(
        &["ক্রম", "সদস্য", "পূজা", "মোট চাঁদা", "পরিশোধ", "বকেয়া"],
        rows.iter()
            .map(|r| {
                vec![
                    r.serial.to_string(),
                    r.member_name.clone(),
                    r.puja_name.clone(),
                    money(r.amount),
                    money(r.paid_amount),
                    money(r.pending),
                ]
            })
            .collect(),
    )
}

/// Full statement as CSV: a summary block, then both detail tables.
pub fn statement_csv(statement: &Statement) -> String {
    let mut out = String::new();
    out.push_str(&render_csv(
        &["সারাংশ", ""],
        vec![
            vec!["মোট অন্যান্য আয়".to_string(), money(statement.total_income)],
            vec![
                "মোট চাঁদা (পরিশোধিত)".to_string(),
                money(statement.total_contributions_paid),
            ],
            vec!["মোট ব্যয়".to_string(), money(statement.total_expenses)],
            vec!["বর্তমান ব্যালেন্স".to_string(), money(statement.balance)],
        ],
    ));
    out.push('\n');
    out.push_str(&render_csv(
        &["তারিখ", "ধরন", "উৎস", "পরিমাণ"],
        statement
            .income_rows
            .iter()
            .map(|(date, kind, source, amount)| {
                vec![date.clone(), kind.clone(), source.clone(), money(*amount)]
            })
            .collect(),
    ));
    out.push('\n');
    out.push_str(&render_csv(
        &["তারিখ", "ক্যাটাগরি", "বিবরণ", "পরিমাণ"],
        statement
            .expense_rows
            .iter()
            .map(|(date, category, description, amount)| {
                vec![
                    date.clone(),
                    category.clone(),
                    description.clone(),
                    money(*amount),
                ]
            })
            .collect(),
    ));
    out
}

/// Per-member dues summary as CSV.
pub fn dues_summary_csv(rows: &[MemberDuesRow]) -> String {
    render_csv(
        &["ক্রম", "সদস্য", "মোট চাঁদা", "পরিশোধ", "বকেয়া"],
        rows.iter()
            .enumerate()
            .map(|(index, r)| {
                vec![
                    (index + 1).to_string(),
                    r.member_name.clone(),
                    money(r.expected),
                    money(r.paid),
                    money(r.pending),
                ]
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{
        date, test_contribution, test_expense, test_income, test_ledger, test_member,
    };

    fn ledger_with_dues() -> (Ledger, String, String) {
        let mut ledger = test_ledger();
        let member = test_member("Anita Saha");
        let member_id = member.id.clone();
        ledger.members.push(member);
        let puja = crate::test_utils::test_puja("দূর্গা পূজা", date(2025, 9, 28));
        let puja_id = puja.id.clone();
        ledger.pujas.push(puja);
        (ledger, member_id, puja_id)
    }

    #[test]
    fn due_list_excludes_paid_and_resolves_names() {
        let (mut ledger, member_id, puja_id) = ledger_with_dues();
        ledger.contributions.push(test_contribution(
            &member_id,
            &puja_id,
            500.0,
            500.0,
            PaymentStatus::Paid,
        ));
        ledger.contributions.push(test_contribution(
            &member_id,
            &puja_id,
            500.0,
            200.0,
            PaymentStatus::Due,
        ));
        ledger.contributions.push(test_contribution(
            "missing-member",
            "missing-puja",
            100.0,
            0.0,
            PaymentStatus::Overdue,
        ));

        let rows = due_list(&ledger);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].member_name, "Anita Saha");
        assert_eq!(rows[0].pending, 300.0);
        assert_eq!(rows[1].member_name, UNKNOWN);
        assert_eq!(rows[1].puja_name, UNKNOWN);
    }

    #[test]
    fn dues_summary_groups_per_member_in_first_seen_order() {
        let (mut ledger, member_id, puja_id) = ledger_with_dues();
        let other = test_member("Bidyut Das");
        let other_id = other.id.clone();
        ledger.members.push(other);

        ledger.contributions.push(test_contribution(
            &other_id,
            &puja_id,
            300.0,
            300.0,
            PaymentStatus::Paid,
        ));
        ledger.contributions.push(test_contribution(
            &member_id,
            &puja_id,
            500.0,
            100.0,
            PaymentStatus::Due,
        ));
        ledger.contributions.push(test_contribution(
            &other_id,
            &puja_id,
            200.0,
            0.0,
            PaymentStatus::Due,
        ));
        // Unknown member: skipped entirely.
        ledger.contributions.push(test_contribution(
            "ghost",
            &puja_id,
            999.0,
            0.0,
            PaymentStatus::Due,
        ));

        let rows = dues_summary(&ledger);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].member_name, "Bidyut Das");
        assert_eq!(rows[0].expected, 500.0);
        assert_eq!(rows[0].paid, 300.0);
        assert_eq!(rows[0].pending, 200.0);
        assert_eq!(rows[1].member_name, "Anita Saha");
        assert_eq!(rows[1].pending, 400.0);
    }

    #[test]
    fn statement_totals_match_dashboard_formula() {
        let mut ledger = test_ledger();
        ledger.income.push(test_income(1000.0, date(2025, 1, 1)));
        ledger.expenses.push(test_expense(400.0, date(2025, 1, 2), None));
        ledger
            .contributions
            .push(test_contribution("m", "p", 500.0, 250.0, PaymentStatus::Due));

        let statement = full_statement(&ledger);
        assert_eq!(statement.total_income, 1000.0);
        assert_eq!(statement.total_contributions_paid, 250.0);
        assert_eq!(statement.total_expenses, 400.0);
        assert_eq!(statement.balance, 850.0);
        assert_eq!(statement.income_rows.len(), 1);
        assert_eq!(statement.expense_rows.len(), 1);
    }

    #[test]
    fn csv_quotes_fields_containing_delimiters() {
        let rows = vec![RosterRow {
            serial: 1,
            name: "Saha, Anita".to_string(),
            designation: "সদস্য".to_string(),
            phone: "017".to_string(),
            address: "House \"3\"\nDhaka".to_string(),
        }];
        let csv = roster_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "ক্রম,নাম,পদবি,ফোন,ঠিকানা");
        assert!(csv.contains("\"Saha, Anita\""));
        assert!(csv.contains("\"House \"\"3\"\"\nDhaka\""));
    }

    #[test]
    fn roster_rows_are_serialized_in_list_order() {
        let mut ledger = test_ledger();
        ledger.members.push(test_member("First"));
        ledger.members.push(test_member("Second"));
        let rows = member_roster(&ledger.members);
        assert_eq!(rows[0].serial, 1);
        assert_eq!(rows[0].name, "First");
        assert_eq!(rows[1].serial, 2);
    }
}
