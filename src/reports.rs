use std::collections::{BTreeMap, HashMap};

use crate::models::{CategoryTotal, InstallmentRow, RecurringRow, Transaction};

// ---------------------------------------------------------------------------
// Category summary
// ---------------------------------------------------------------------------

/// Total per category, largest first. Equal totals fall back to name order.
pub fn category_summary(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&'static str, f64> = BTreeMap::new();
    for txn in transactions {
        *totals.entry(txn.category).or_default() += txn.amount;
    }
    let mut summary: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();
    summary.sort_by(|a, b| b.total.total_cmp(&a.total));
    summary
}

// ---------------------------------------------------------------------------
// Installments
// ---------------------------------------------------------------------------

pub fn installment_detail(transactions: &[Transaction]) -> Vec<InstallmentRow> {
    transactions
        .iter()
        .filter_map(|txn| {
            let installment = txn.installment?;
            Some(InstallmentRow {
                transaction: txn.clone(),
                installment,
                remaining: installment.remaining(),
                total_committed: txn.amount * installment.total as f64,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Recurring charges
// ---------------------------------------------------------------------------

/// Every transaction whose exact title shows up more than once, tagged with
/// that title's count. Most frequent titles come first; ties keep the order in
/// which the title first appeared.
pub fn recurring_detail(transactions: &[Transaction]) -> Vec<RecurringRow> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for txn in transactions {
        let count = counts.entry(txn.title.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(txn.title.as_str());
        }
        *count += 1;
    }

    let mut repeated: Vec<(&str, usize)> = first_seen
        .into_iter()
        .map(|title| (title, counts[title]))
        .filter(|(_, count)| *count > 1)
        .collect();
    repeated.sort_by(|a, b| b.1.cmp(&a.1));

    repeated
        .into_iter()
        .flat_map(|(title, frequency)| {
            transactions
                .iter()
                .filter(move |txn| txn.title == title)
                .map(move |txn| RecurringRow {
                    date: txn.date,
                    title: txn.title.clone(),
                    amount: txn.amount,
                    frequency,
                })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Full report
// ---------------------------------------------------------------------------

pub struct Report {
    pub transactions: Vec<Transaction>,
    pub summary: Vec<CategoryTotal>,
    pub installments: Vec<InstallmentRow>,
    pub recurring: Vec<RecurringRow>,
}

impl Report {
    pub fn build(transactions: Vec<Transaction>) -> Self {
        let summary = category_summary(&transactions);
        let installments = installment_detail(&transactions);
        let recurring = recurring_detail(&transactions);
        Self {
            transactions,
            summary,
            installments,
            recurring,
        }
    }
}
