// 🔎 Search & Sort - filter and order roster snapshots
//
// Filters are built up criterion by criterion; unset criteria match
// everything. Text criteria are case-insensitive substring matches.
// Sorting always falls back to ascending id so results are deterministic.

use crate::members::{today, Member, Role};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cmp::Ordering;

// ============================================================================
// MEMBER FILTER
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub role: Option<Role>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub min_experience: Option<u32>,
    pub max_experience: Option<u32>,
    pub min_salary: Option<Decimal>,
    pub max_salary: Option<Decimal>,
    pub name_contains: Option<String>,
    pub team_contains: Option<String>,

    // Role-specific criteria. Setting one also restricts to that role.
    pub position_contains: Option<String>,
    pub specialization_contains: Option<String>,
    pub department_contains: Option<String>,
}

impl MemberFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn age_between(mut self, min: u32, max: u32) -> Self {
        self.min_age = Some(min);
        self.max_age = Some(max);
        self
    }

    pub fn experience_between(mut self, min: u32, max: u32) -> Self {
        self.min_experience = Some(min);
        self.max_experience = Some(max);
        self
    }

    pub fn salary_between(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_salary = Some(min);
        self.max_salary = Some(max);
        self
    }

    pub fn name_contains(mut self, text: impl Into<String>) -> Self {
        self.name_contains = Some(text.into());
        self
    }

    pub fn team_contains(mut self, text: impl Into<String>) -> Self {
        self.team_contains = Some(text.into());
        self
    }

    pub fn position_contains(mut self, text: impl Into<String>) -> Self {
        self.position_contains = Some(text.into());
        self
    }

    pub fn specialization_contains(mut self, text: impl Into<String>) -> Self {
        self.specialization_contains = Some(text.into());
        self
    }

    pub fn department_contains(mut self, text: impl Into<String>) -> Self {
        self.department_contains = Some(text.into());
        self
    }

    /// Check one member, measuring experience at `as_of`
    pub fn matches_at(&self, member: &Member, as_of: NaiveDate) -> bool {
        if let Some(role) = self.role {
            if member.role() != role {
                return false;
            }
        }

        if !within(member.age, self.min_age, self.max_age) {
            return false;
        }

        if self.min_experience.is_some() || self.max_experience.is_some() {
            let experience = member.experience_years_at(as_of);
            if !within(experience, self.min_experience, self.max_experience) {
                return false;
            }
        }

        if !within(member.base_salary, self.min_salary, self.max_salary) {
            return false;
        }

        if !contains_opt(&member.name, &self.name_contains)
            || !contains_opt(&member.team, &self.team_contains)
        {
            return false;
        }

        if self.position_contains.is_some() {
            match member.as_player() {
                Some(p) if contains_opt(&p.position, &self.position_contains) => {}
                _ => return false,
            }
        }

        if self.specialization_contains.is_some() {
            match member.as_coach() {
                Some(c) if contains_opt(&c.specialization, &self.specialization_contains) => {}
                _ => return false,
            }
        }

        if self.department_contains.is_some() {
            match member.as_manager() {
                Some(m) if contains_opt(&m.department, &self.department_contains) => {}
                _ => return false,
            }
        }

        true
    }

    pub fn matches(&self, member: &Member) -> bool {
        self.matches_at(member, today())
    }

    /// Matching members in input order
    pub fn apply_at<'a>(&self, members: &'a [Member], as_of: NaiveDate) -> Vec<&'a Member> {
        members
            .iter()
            .filter(|m| self.matches_at(m, as_of))
            .collect()
    }

    pub fn apply<'a>(&self, members: &'a [Member]) -> Vec<&'a Member> {
        self.apply_at(members, today())
    }
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}

fn contains_opt(haystack: &str, needle: &Option<String>) -> bool {
    match needle {
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
        None => true,
    }
}

// ============================================================================
// SORTING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Age,
    Experience,
    Salary,
    JoinDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Primary key, optional secondary key, then ascending id
#[derive(Debug, Clone)]
pub struct MemberSort {
    pub key: SortKey,
    pub order: SortOrder,
    pub then: Option<(SortKey, SortOrder)>,
}

impl MemberSort {
    pub fn by(key: SortKey) -> Self {
        MemberSort {
            key,
            order: SortOrder::Ascending,
            then: None,
        }
    }

    pub fn descending(mut self) -> Self {
        self.order = SortOrder::Descending;
        self
    }

    pub fn then_by(mut self, key: SortKey, order: SortOrder) -> Self {
        self.then = Some((key, order));
        self
    }

    fn compare_key(key: SortKey, a: &Member, b: &Member, as_of: NaiveDate) -> Ordering {
        match key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Age => a.age.cmp(&b.age),
            SortKey::Experience => a
                .experience_years_at(as_of)
                .cmp(&b.experience_years_at(as_of)),
            SortKey::Salary => a.base_salary.cmp(&b.base_salary),
            SortKey::JoinDate => a.join_date.cmp(&b.join_date),
        }
    }

    fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    pub fn compare(&self, a: &Member, b: &Member, as_of: NaiveDate) -> Ordering {
        let primary = Self::directed(Self::compare_key(self.key, a, b, as_of), self.order);
        let secondary = match self.then {
            Some((key, order)) => Self::directed(Self::compare_key(key, a, b, as_of), order),
            None => Ordering::Equal,
        };
        primary.then(secondary).then_with(|| a.id.cmp(&b.id))
    }

    pub fn sort_at(&self, members: &mut [&Member], as_of: NaiveDate) {
        members.sort_by(|a, b| self.compare(a, b, as_of));
    }

    pub fn sort(&self, members: &mut [&Member]) {
        self.sort_at(members, today());
    }
}

// ============================================================================
// TESTS
// ============================================================================
