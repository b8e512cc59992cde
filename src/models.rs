use chrono::NaiveDate;
use serde::Deserialize;

/// A row as it comes out of the CSV, before any type coercion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRow {
    pub date: String,
    pub title: String,
    pub amount: String,
}

/// "current/total" annotation parsed from a title such as `UBER 2/4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Installment {
    pub current: u64,
    pub total: u64,
}

impl Installment {
    pub fn remaining(&self) -> i64 {
        self.total as i64 - self.current as i64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub title: String,
    pub amount: f64,
    pub installment: Option<Installment>,
    pub category: &'static str,
}

impl Transaction {
    pub fn is_parcelado(&self) -> bool {
        self.installment.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: &'static str,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentRow {
    pub transaction: Transaction,
    pub installment: Installment,
    pub remaining: i64,
    pub total_committed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecurringRow {
    pub date: NaiveDate,
    pub title: String,
    pub amount: f64,
    pub frequency: usize,
}
