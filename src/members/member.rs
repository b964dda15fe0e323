// 🧑 Member Entity - shared base record plus role payload
//
// Identity: numeric id assigned by the roster, never reused while it runs.
// Values: name, age, team, salary, role payload (edited in place).
// Training and payment records are owned by the member.

use super::role::{CoachProfile, ManagerProfile, PlayerProfile, Role, RoleProfile};
use crate::config::ClubConfig;
use crate::error::ClubError;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type MemberId = u32;

/// Today's calendar date, the reference point for experience
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ============================================================================
// RECORDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub duration_minutes: u32,

    /// 1..=10
    pub intensity: u8,
    pub date: NaiveDate,

    /// Human-readable summary produced by `train`
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub date: NaiveDate,
    pub base_salary: Decimal,
    pub bonus: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub amount: Decimal,
    pub bonus: Decimal,
    pub date: NaiveDate,
    pub successful: bool,
    pub message: String,
}

impl PaymentResult {
    pub fn failed(date: NaiveDate, message: impl Into<String>) -> Self {
        PaymentResult {
            amount: Decimal::ZERO,
            bonus: Decimal::ZERO,
            date,
            successful: false,
            message: message.into(),
        }
    }
}

// ============================================================================
// CAPABILITIES
// ============================================================================

pub trait Trainable {
    /// Apply role side effects, append a `TrainingRecord`, return its summary
    fn train(&mut self, duration_minutes: u32, intensity: u8, date: NaiveDate) -> String;

    fn training_count(&self) -> usize;

    /// Mean intensity over all sessions, 0 when none
    fn average_intensity(&self) -> f64;

    /// Percentage change from first to last session intensity
    fn progress(&self) -> f64;

    fn training_history(&self) -> String;
}

pub trait Payable {
    fn base_salary(&self) -> Decimal;

    fn set_base_salary(&mut self, salary: Decimal);

    fn calculate_bonus(&self) -> Decimal;

    /// Always succeeds for an existing member
    fn pay_salary(&mut self, date: NaiveDate) -> PaymentResult;

    fn payment_history(&self) -> String;

    fn total_paid(&self) -> Decimal;
}

// ============================================================================
// MEMBER DRAFT
// ============================================================================

/// Attributes of a member before the roster assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDraft {
    pub name: String,
    pub age: u32,
    pub team: String,
    pub base_salary: Decimal,
    pub profile: RoleProfile,
}

impl MemberDraft {
    pub fn player(
        name: impl Into<String>,
        age: u32,
        team: impl Into<String>,
        position: impl Into<String>,
        jersey_number: u32,
        base_salary: Decimal,
    ) -> Self {
        MemberDraft {
            name: name.into(),
            age,
            team: team.into(),
            base_salary,
            profile: RoleProfile::Player(PlayerProfile::new(position, jersey_number)),
        }
    }

    pub fn coach(
        name: impl Into<String>,
        age: u32,
        team: impl Into<String>,
        specialization: impl Into<String>,
        certification: impl Into<String>,
        base_salary: Decimal,
    ) -> Self {
        MemberDraft {
            name: name.into(),
            age,
            team: team.into(),
            base_salary,
            profile: RoleProfile::Coach(CoachProfile::new(specialization, certification)),
        }
    }

    pub fn manager(
        name: impl Into<String>,
        age: u32,
        team: impl Into<String>,
        department: impl Into<String>,
        responsibilities: impl Into<String>,
        base_salary: Decimal,
    ) -> Self {
        MemberDraft {
            name: name.into(),
            age,
            team: team.into(),
            base_salary,
            profile: RoleProfile::Manager(ManagerProfile::new(department, responsibilities)),
        }
    }

    /// Age and salary must sit inside the configured bounds
    pub fn validate(&self, config: &ClubConfig) -> Result<(), ClubError> {
        config.check_age(self.age)?;
        config.check_salary(self.base_salary)?;
        Ok(())
    }
}

// ============================================================================
// MEMBER ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub age: u32,
    pub join_date: NaiveDate,
    pub team: String,
    pub base_salary: Decimal,
    pub profile: RoleProfile,

    #[serde(default)]
    pub training_records: Vec<TrainingRecord>,

    #[serde(default)]
    pub payment_records: Vec<PaymentRecord>,
}

impl Member {
    pub fn from_draft(id: MemberId, draft: MemberDraft, join_date: NaiveDate) -> Self {
        Member {
            id,
            name: draft.name,
            age: draft.age,
            join_date,
            team: draft.team,
            base_salary: draft.base_salary,
            profile: draft.profile,
            training_records: Vec::new(),
            payment_records: Vec::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.profile.role()
    }

    /// Whole years between join date and `today`; 0 for future join dates
    pub fn experience_years_at(&self, today: NaiveDate) -> u32 {
        today.years_since(self.join_date).unwrap_or(0)
    }

    pub fn experience_years(&self) -> u32 {
        self.experience_years_at(today())
    }

    pub fn as_player(&self) -> Option<&PlayerProfile> {
        match &self.profile {
            RoleProfile::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerProfile> {
        match &mut self.profile {
            RoleProfile::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_coach(&self) -> Option<&CoachProfile> {
        match &self.profile {
            RoleProfile::Coach(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_coach_mut(&mut self) -> Option<&mut CoachProfile> {
        match &mut self.profile {
            RoleProfile::Coach(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_manager(&self) -> Option<&ManagerProfile> {
        match &self.profile {
            RoleProfile::Manager(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_manager_mut(&mut self) -> Option<&mut ManagerProfile> {
        match &mut self.profile {
            RoleProfile::Manager(m) => Some(m),
            _ => None,
        }
    }

    /// No-op for non-players
    pub fn score_goal(&mut self) {
        if let Some(player) = self.as_player_mut() {
            player.goals += 1;
        }
    }

    pub fn make_assist(&mut self) {
        if let Some(player) = self.as_player_mut() {
            player.assists += 1;
        }
    }

    /// `(goals * 1.5 + assists) / max(1, trainings)`; 0 for non-players
    pub fn performance_rating(&self) -> f64 {
        match self.as_player() {
            Some(p) => {
                (p.goals as f64 * 1.5 + p.assists as f64) / self.training_count().max(1) as f64
            }
            None => 0.0,
        }
    }

    /// Successful sessions as a percentage of all sessions; 0 for non-coaches
    pub fn success_rate(&self) -> f64 {
        match self.as_coach() {
            Some(c) if !self.training_records.is_empty() => {
                c.successful_sessions as f64 / self.training_records.len() as f64 * 100.0
            }
            _ => 0.0,
        }
    }

    pub fn contracts_signed(&self) -> u32 {
        self.as_manager().map_or(0, |m| m.contracts_signed)
    }

    /// Bonus with experience measured at `today`
    pub fn calculate_bonus_at(&self, today: NaiveDate) -> Decimal {
        let experience = Decimal::from(self.experience_years_at(today));
        let base = self.base_salary * experience * Decimal::new(1, 1);

        let role_bonus = match &self.profile {
            RoleProfile::Player(p) => {
                Decimal::from(p.goals) * Decimal::from(1000)
                    + Decimal::from(p.assists) * Decimal::from(500)
            }
            RoleProfile::Coach(c) => Decimal::from(c.successful_sessions) * Decimal::from(200),
            RoleProfile::Manager(m) => {
                Decimal::from(m.contracts_signed) * Decimal::from(500)
                    + m.budget_managed * Decimal::new(1, 2)
            }
        };

        (base + role_bonus).normalize()
    }

    /// Bounds a stored member must respect: age, salary and, for players,
    /// jersey number
    pub fn validate(&self, config: &ClubConfig) -> Result<(), ClubError> {
        config.check_age(self.age)?;
        config.check_salary(self.base_salary)?;
        if let Some(player) = self.as_player() {
            config.check_jersey_number(player.jersey_number)?;
        }
        Ok(())
    }

    /// Pull bounded payload values back into range (fitness 0..=100)
    pub fn clamp_profile(&mut self) {
        if let Some(player) = self.as_player_mut() {
            let level = player.fitness_level;
            player.set_fitness_level(level);
        }
    }

    /// One-line rendering with experience measured at `as_of`
    pub fn summary_at(&self, as_of: NaiveDate) -> String {
        format!(
            "ID: {} | Name: {} | Age: {} | Role: {} | Team: {} | Experience: {} yrs | Salary: {} | {}",
            self.id,
            self.name,
            self.age,
            self.role(),
            self.team,
            self.experience_years_at(as_of),
            self.base_salary,
            self.details()
        )
    }

    /// Role-specific attributes as one line
    pub fn details(&self) -> String {
        match &self.profile {
            RoleProfile::Player(p) => format!(
                "Position: {}, Number: {}, Goals: {}, Assists: {}, Fitness: {:.1}%",
                p.position, p.jersey_number, p.goals, p.assists, p.fitness_level
            ),
            RoleProfile::Coach(c) => format!(
                "Specialization: {}, Certification: {}, Style: {}, Success rate: {:.1}%",
                c.specialization,
                c.certification,
                c.coaching_style,
                self.success_rate()
            ),
            RoleProfile::Manager(m) => format!(
                "Department: {}, Responsibilities: {}, Contracts: {}, Budget: {}",
                m.department, m.responsibilities, m.contracts_signed, m.budget_managed
            ),
        }
    }
}

impl Trainable for Member {
    fn train(&mut self, duration_minutes: u32, intensity: u8, date: NaiveDate) -> String {
        let name = self.name.clone();
        let result = match &mut self.profile {
            RoleProfile::Player(p) => {
                let increase = p.apply_training(duration_minutes, intensity);
                format!(
                    "Player training {}: {} min, intensity {}/10. Fitness: {:.1}% (+{:.1}%)",
                    name, duration_minutes, intensity, p.fitness_level, increase
                )
            }
            RoleProfile::Coach(c) => {
                c.apply_training(intensity);
                format!(
                    "Coach session {}: {} min. Successful sessions: {}",
                    name, duration_minutes, c.successful_sessions
                )
            }
            RoleProfile::Manager(_) => {
                tracing::debug!(member_id = self.id, "Manager course logged without side effects");
                format!("Management course for {}: {} min", name, duration_minutes)
            }
        };

        self.training_records.push(TrainingRecord {
            duration_minutes,
            intensity,
            date,
            result: result.clone(),
        });

        result
    }

    fn training_count(&self) -> usize {
        self.training_records.len()
    }

    fn average_intensity(&self) -> f64 {
        if self.training_records.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.training_records.iter().map(|r| r.intensity as u32).sum();
        sum as f64 / self.training_records.len() as f64
    }

    fn progress(&self) -> f64 {
        let (first, last) = match (self.training_records.first(), self.training_records.last()) {
            (Some(first), Some(last)) if self.training_records.len() >= 2 => (first, last),
            _ => return 0.0,
        };
        if first.intensity == 0 {
            return 0.0;
        }
        (last.intensity as f64 - first.intensity as f64) / first.intensity as f64 * 100.0
    }

    fn training_history(&self) -> String {
        let mut history = format!("Training history for {}:\n", self.name);
        for record in &self.training_records {
            history.push_str(&format!("{}: {}\n", record.date, record.result));
        }
        history
    }
}

impl Payable for Member {
    fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    fn set_base_salary(&mut self, salary: Decimal) {
        self.base_salary = salary;
    }

    fn calculate_bonus(&self) -> Decimal {
        self.calculate_bonus_at(today())
    }

    /// Bonus is measured with experience as of `date`
    fn pay_salary(&mut self, date: NaiveDate) -> PaymentResult {
        let bonus = self.calculate_bonus_at(date);
        let total = self.base_salary + bonus;

        self.payment_records.push(PaymentRecord {
            date,
            base_salary: self.base_salary,
            bonus,
            total,
        });

        PaymentResult {
            amount: total,
            bonus,
            date,
            successful: true,
            message: format!(
                "Paid {} (base: {}, bonus: {})",
                total, self.base_salary, bonus
            ),
        }
    }

    fn payment_history(&self) -> String {
        let mut history = format!("Payment history for {}:\n", self.name);
        for record in &self.payment_records {
            history.push_str(&format!("{}: {}\n", record.date, record.total));
        }
        history
    }

    fn total_paid(&self) -> Decimal {
        self.payment_records.iter().map(|r| r.total).sum()
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_at(today()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
