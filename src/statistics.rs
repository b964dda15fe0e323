// 📊 Statistics Engine - pure aggregates over a roster snapshot
//
// Nothing here mutates state. Every function accepts an empty roster and
// returns zero/empty results for it.
//
// Rankings sort by the metric (strictly descending unless stated) and break
// ties by ascending member id.

use crate::ledger::round_money;
use crate::members::{today, Member, Payable, Role, Trainable};
use chrono::NaiveDate;
use rust_decimal::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Min/max/average of a whole-number attribute (age, experience)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeStatistics {
    pub min: u32,
    pub max: u32,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryStatistics {
    pub min: Decimal,
    pub max: Decimal,
    pub total: Decimal,

    /// 2 dp, half-up
    pub average: Decimal,
}

/// Count/min/max/sum/average of one metric within a group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub average: f64,
}

impl SummaryStatistics {
    fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return SummaryStatistics {
                count: 0,
                min: 0.0,
                max: 0.0,
                sum: 0.0,
                average: 0.0,
            };
        }
        let sum: f64 = values.iter().sum();
        SummaryStatistics {
            count: values.len(),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            sum,
            average: sum / values.len() as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Age,
    Experience,
    Salary,
    TrainingCount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceSummary {
    pub total_salaries: Decimal,
    pub total_bonuses: Decimal,
    pub total_payments: Decimal,
    pub total_paid_to_date: Decimal,
}

// ============================================================================
// STATISTICS ENGINE
// ============================================================================

pub struct StatisticsEngine {
    /// Reference date for experience
    pub as_of: NaiveDate,
}

impl StatisticsEngine {
    pub fn new() -> Self {
        StatisticsEngine { as_of: today() }
    }

    pub fn as_of(date: NaiveDate) -> Self {
        StatisticsEngine { as_of: date }
    }

    fn experience(&self, member: &Member) -> u32 {
        member.experience_years_at(self.as_of)
    }

    fn metric(&self, member: &Member, metric: Metric) -> f64 {
        match metric {
            Metric::Age => member.age as f64,
            Metric::Experience => self.experience(member) as f64,
            Metric::Salary => member.base_salary.to_f64().unwrap_or_default(),
            Metric::TrainingCount => member.training_count() as f64,
        }
    }

    // ------------------------------------------------------------------------
    // Distributions
    // ------------------------------------------------------------------------

    pub fn role_distribution(&self, members: &[Member]) -> BTreeMap<Role, usize> {
        let mut result = BTreeMap::new();
        for member in members {
            *result.entry(member.role()).or_insert(0) += 1;
        }
        result
    }

    pub fn team_distribution(&self, members: &[Member]) -> BTreeMap<String, usize> {
        let mut result = BTreeMap::new();
        for member in members {
            *result.entry(member.team.clone()).or_insert(0) += 1;
        }
        result
    }

    /// Distinct team names, sorted
    pub fn teams(&self, members: &[Member]) -> Vec<String> {
        self.team_distribution(members).into_keys().collect()
    }

    pub fn members_by_team<'a>(&self, members: &'a [Member]) -> BTreeMap<String, Vec<&'a Member>> {
        let mut result: BTreeMap<String, Vec<&'a Member>> = BTreeMap::new();
        for member in members {
            result.entry(member.team.clone()).or_default().push(member);
        }
        result
    }

    // ------------------------------------------------------------------------
    // Per-role averages
    // ------------------------------------------------------------------------

    fn average_by_role(&self, members: &[Member], metric: Metric) -> BTreeMap<Role, f64> {
        self.summary_by_role(members, metric)
            .into_iter()
            .map(|(role, summary)| (role, summary.average))
            .collect()
    }

    pub fn average_age_by_role(&self, members: &[Member]) -> BTreeMap<Role, f64> {
        self.average_by_role(members, Metric::Age)
    }

    pub fn average_experience_by_role(&self, members: &[Member]) -> BTreeMap<Role, f64> {
        self.average_by_role(members, Metric::Experience)
    }

    pub fn average_training_count_by_role(&self, members: &[Member]) -> BTreeMap<Role, f64> {
        self.average_by_role(members, Metric::TrainingCount)
    }

    /// Average base salary per role (2 dp, half-up)
    pub fn average_salary_by_role(&self, members: &[Member]) -> BTreeMap<Role, Decimal> {
        let mut sums: BTreeMap<Role, (Decimal, u32)> = BTreeMap::new();
        for member in members {
            let entry = sums.entry(member.role()).or_insert((Decimal::ZERO, 0));
            entry.0 += member.base_salary;
            entry.1 += 1;
        }
        sums.into_iter()
            .map(|(role, (sum, count))| (role, round_money(sum / Decimal::from(count))))
            .collect()
    }

    /// Total training sessions per role
    pub fn training_count_by_role(&self, members: &[Member]) -> BTreeMap<Role, usize> {
        let mut result = BTreeMap::new();
        for member in members {
            *result.entry(member.role()).or_insert(0) += member.training_count();
        }
        result
    }

    pub fn summary_by_role(
        &self,
        members: &[Member],
        metric: Metric,
    ) -> BTreeMap<Role, SummaryStatistics> {
        let mut values: BTreeMap<Role, Vec<f64>> = BTreeMap::new();
        for member in members {
            values
                .entry(member.role())
                .or_default()
                .push(self.metric(member, metric));
        }
        values
            .into_iter()
            .map(|(role, v)| (role, SummaryStatistics::from_values(&v)))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Global statistics
    // ------------------------------------------------------------------------

    fn range(&self, values: impl Iterator<Item = u32>) -> RangeStatistics {
        let values: Vec<u32> = values.collect();
        if values.is_empty() {
            return RangeStatistics {
                min: 0,
                max: 0,
                average: 0.0,
            };
        }
        let sum: u64 = values.iter().map(|v| *v as u64).sum();
        RangeStatistics {
            min: values.iter().copied().min().unwrap_or(0),
            max: values.iter().copied().max().unwrap_or(0),
            average: sum as f64 / values.len() as f64,
        }
    }

    pub fn age_statistics(&self, members: &[Member]) -> RangeStatistics {
        self.range(members.iter().map(|m| m.age))
    }

    pub fn experience_statistics(&self, members: &[Member]) -> RangeStatistics {
        self.range(members.iter().map(|m| self.experience(m)))
    }

    pub fn salary_statistics(&self, members: &[Member]) -> SalaryStatistics {
        let total: Decimal = members.iter().map(|m| m.base_salary).sum();
        let average = if members.is_empty() {
            Decimal::ZERO
        } else {
            round_money(total / Decimal::from(members.len()))
        };
        SalaryStatistics {
            min: members.iter().map(|m| m.base_salary).min().unwrap_or(Decimal::ZERO),
            max: members.iter().map(|m| m.base_salary).max().unwrap_or(Decimal::ZERO),
            total,
            average,
        }
    }

    pub fn finance_summary(&self, members: &[Member]) -> FinanceSummary {
        let total_salaries: Decimal = members.iter().map(|m| m.base_salary).sum();
        let total_bonuses: Decimal = members
            .iter()
            .map(|m| m.calculate_bonus_at(self.as_of))
            .sum();
        FinanceSummary {
            total_salaries,
            total_bonuses,
            total_payments: total_salaries + total_bonuses,
            total_paid_to_date: members.iter().map(|m| m.total_paid()).sum(),
        }
    }

    /// Mean of every member's average session intensity
    pub fn average_intensity(&self, members: &[Member]) -> f64 {
        if members.is_empty() {
            return 0.0;
        }
        members.iter().map(|m| m.average_intensity()).sum::<f64>() / members.len() as f64
    }

    pub fn total_training_count(&self, members: &[Member]) -> usize {
        members.iter().map(|m| m.training_count()).sum()
    }

    // ------------------------------------------------------------------------
    // Rankings
    // ------------------------------------------------------------------------

    pub fn top_by_salary<'a>(&self, members: &'a [Member], limit: usize) -> Vec<&'a Member> {
        rank(members.iter().collect(), limit, |a, b| {
            b.base_salary.cmp(&a.base_salary)
        })
    }

    pub fn top_by_experience<'a>(&self, members: &'a [Member], limit: usize) -> Vec<&'a Member> {
        rank(members.iter().collect(), limit, |a, b| {
            self.experience(b).cmp(&self.experience(a))
        })
    }

    /// Oldest first, or youngest first when `ascending`
    pub fn top_by_age<'a>(
        &self,
        members: &'a [Member],
        limit: usize,
        ascending: bool,
    ) -> Vec<&'a Member> {
        rank(members.iter().collect(), limit, |a, b| {
            if ascending {
                a.age.cmp(&b.age)
            } else {
                b.age.cmp(&a.age)
            }
        })
    }

    pub fn top_by_training_count<'a>(
        &self,
        members: &'a [Member],
        limit: usize,
    ) -> Vec<&'a Member> {
        rank(members.iter().collect(), limit, |a, b| {
            b.training_count().cmp(&a.training_count())
        })
    }

    pub fn top_players_by_performance<'a>(
        &self,
        members: &'a [Member],
        limit: usize,
    ) -> Vec<&'a Member> {
        let players = members.iter().filter(|m| m.role() == Role::Player).collect();
        rank(players, limit, |a, b| {
            b.performance_rating().total_cmp(&a.performance_rating())
        })
    }

    pub fn top_coaches_by_success_rate<'a>(
        &self,
        members: &'a [Member],
        limit: usize,
    ) -> Vec<&'a Member> {
        let coaches = members.iter().filter(|m| m.role() == Role::Coach).collect();
        rank(coaches, limit, |a, b| b.success_rate().total_cmp(&a.success_rate()))
    }

    pub fn top_managers_by_contracts<'a>(
        &self,
        members: &'a [Member],
        limit: usize,
    ) -> Vec<&'a Member> {
        let managers = members.iter().filter(|m| m.role() == Role::Manager).collect();
        rank(managers, limit, |a, b| {
            b.contracts_signed().cmp(&a.contracts_signed())
        })
    }
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort by `cmp`, then ascending id, and keep the first `limit`
fn rank<'a, F>(mut members: Vec<&'a Member>, limit: usize, cmp: F) -> Vec<&'a Member>
where
    F: Fn(&Member, &Member) -> Ordering,
{
    members.sort_by(|a, b| cmp(*a, *b).then_with(|| a.id.cmp(&b.id)));
    members.truncate(limit);
    members
}

// ============================================================================
// TESTS
// ============================================================================
