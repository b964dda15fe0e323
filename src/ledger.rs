// 💰 Salary Ledger - current salary per member + append-only history
//
// The ledger is a denormalized view of the roster's salaries. The member's own
// `base_salary` is authoritative; the facade keeps this view in step.
// Lookups on unknown ids return zero/empty values, never errors.
//
// History per member is never reordered or truncated. It is only dropped
// entirely when the member leaves the roster (the journal keeps the permanent
// record of what happened).

use crate::members::{today, MemberId, Role};
use chrono::NaiveDate;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const MONEY_DECIMAL_PLACES: u32 = 2;
const GROWTH_DECIMAL_PLACES: u32 = 4;

/// Round to 2 decimal places, half-up
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

// ============================================================================
// SALARY HISTORY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub date: NaiveDate,
    pub salary: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryHistory {
    pub member_id: MemberId,
    records: Vec<SalaryRecord>,
}

impl SalaryHistory {
    pub fn new(member_id: MemberId) -> Self {
        SalaryHistory {
            member_id,
            records: Vec::new(),
        }
    }

    fn push(&mut self, salary: Decimal, date: NaiveDate) {
        self.records.push(SalaryRecord { date, salary });
    }

    /// Last recorded salary, 0 when empty
    pub fn current_salary(&self) -> Decimal {
        self.records.last().map_or(Decimal::ZERO, |r| r.salary)
    }

    /// Second-to-last recorded salary, 0 when fewer than two entries
    pub fn previous_salary(&self) -> Decimal {
        if self.records.len() < 2 {
            return Decimal::ZERO;
        }
        self.records[self.records.len() - 2].salary
    }

    pub fn salary_change(&self) -> Decimal {
        if self.records.len() < 2 {
            return Decimal::ZERO;
        }
        self.current_salary() - self.previous_salary()
    }

    /// Change relative to the previous salary, in percent.
    /// 0 with fewer than two entries or a zero previous salary.
    pub fn salary_growth_percentage(&self) -> f64 {
        let previous = self.previous_salary();
        if self.records.len() < 2 || previous.is_zero() {
            return 0.0;
        }
        let ratio = (self.salary_change() / previous).round_dp_with_strategy(
            GROWTH_DECIMAL_PLACES,
            RoundingStrategy::MidpointAwayFromZero,
        );
        (ratio * Decimal::ONE_HUNDRED).to_f64().unwrap_or_default()
    }

    /// Every entry in the order it was recorded
    pub fn all_records(&self) -> &[SalaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// SALARY LEDGER
// ============================================================================

#[derive(Debug, Default)]
pub struct SalaryLedger {
    current: HashMap<MemberId, Decimal>,
    history: HashMap<MemberId, SalaryHistory>,
}

impl SalaryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace the current salary and append it to history
    pub fn register(&mut self, id: MemberId, salary: Decimal) {
        self.register_on(id, salary, today());
    }

    pub fn register_on(&mut self, id: MemberId, salary: Decimal, date: NaiveDate) {
        self.current.insert(id, salary);
        self.history
            .entry(id)
            .or_insert_with(|| SalaryHistory::new(id))
            .push(salary, date);
    }

    /// Replace and append for a known id.
    /// Returns false (and changes nothing) when the id has no entry.
    pub fn update(&mut self, id: MemberId, new_salary: Decimal) -> bool {
        self.update_on(id, new_salary, today())
    }

    pub fn update_on(&mut self, id: MemberId, new_salary: Decimal, date: NaiveDate) -> bool {
        if !self.current.contains_key(&id) {
            return false;
        }
        self.register_on(id, new_salary, date);
        true
    }

    /// Current salary, 0 for unknown ids
    pub fn get(&self, id: MemberId) -> Decimal {
        self.current.get(&id).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.current.contains_key(&id)
    }

    pub fn history(&self, id: MemberId) -> Option<&SalaryHistory> {
        self.history.get(&id)
    }

    /// Drop both the current value and the history. Returns false for unknown ids.
    pub fn remove(&mut self, id: MemberId) -> bool {
        let had_current = self.current.remove(&id).is_some();
        let had_history = self.history.remove(&id).is_some();
        had_current || had_history
    }

    pub fn total_budget(&self) -> Decimal {
        self.current.values().copied().sum()
    }

    /// Mean of current salaries (2 dp, half-up), 0 when empty
    pub fn average(&self) -> Decimal {
        if self.current.is_empty() {
            return Decimal::ZERO;
        }
        round_money(self.total_budget() / Decimal::from(self.current.len()))
    }

    pub fn min(&self) -> Decimal {
        self.current.values().copied().min().unwrap_or(Decimal::ZERO)
    }

    pub fn max(&self) -> Decimal {
        self.current.values().copied().max().unwrap_or(Decimal::ZERO)
    }

    /// Average current salary per role (2 dp, half-up).
    /// Ids the lookup cannot resolve are skipped.
    pub fn by_role<F>(&self, role_lookup: F) -> BTreeMap<Role, Decimal>
    where
        F: Fn(MemberId) -> Option<Role>,
    {
        let mut sums: BTreeMap<Role, (Decimal, u32)> = BTreeMap::new();

        for (id, salary) in &self.current {
            if let Some(role) = role_lookup(*id) {
                let entry = sums.entry(role).or_insert((Decimal::ZERO, 0));
                entry.0 += *salary;
                entry.1 += 1;
            }
        }

        sums.into_iter()
            .map(|(role, (sum, count))| (role, round_money(sum / Decimal::from(count))))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.history.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
