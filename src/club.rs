// 🏟️ Club Manager - coordinating facade over roster, ledger, journal and index
//
// Lifecycle operations touch several structures in a fixed order:
//
//   add     → roster → ledger.register → journal(TransferIn)
//   remove  → journal(TransferOut, pre-removal snapshot) → ledger.remove → roster
//   salary  → validate → member → ledger.update → journal(SalaryChange)
//   train   → validate → member.train → training index
//
// Steps are not transactional. Input is validated before the first step, so a
// rejected call changes nothing. Once the roster write happens it is never
// rolled back: a derived view that could not follow is reported as a
// `SyncWarning` on the outcome and logged.

use crate::config::ClubConfig;
use crate::error::{Applied, Mutation, Result, SyncWarning};
use crate::journal::{TransferJournal, TransferKind, TransferRecord};
use crate::ledger::{SalaryHistory, SalaryLedger};
use crate::report::{ReportBuilder, ReportKind};
use crate::members::{
    today, CoachProfile, ManagerProfile, Member, MemberDraft, MemberId, Payable, PaymentResult,
    PlayerProfile, Role, Trainable, TrainingRecord,
};
use crate::roster::Roster;
use crate::search::{MemberFilter, MemberSort};
use crate::training::TrainingIndex;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Headline numbers for the whole club
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStatistics {
    pub total_members: usize,
    pub average_age: f64,
    pub average_experience: f64,
    pub total_salary_budget: Decimal,
    pub average_salary: Decimal,
    pub total_trainings: usize,
    pub total_transfers: usize,
}

// ============================================================================
// CLUB MANAGER
// ============================================================================

#[derive(Debug, Default)]
pub struct ClubManager {
    config: ClubConfig,
    roster: Roster,
    ledger: SalaryLedger,
    journal: TransferJournal,
    training: TrainingIndex,
}

impl ClubManager {
    pub fn new() -> Self {
        Self::with_config(ClubConfig::default())
    }

    pub fn with_config(config: ClubConfig) -> Self {
        ClubManager {
            config,
            roster: Roster::new(),
            ledger: SalaryLedger::new(),
            journal: TransferJournal::new(),
            training: TrainingIndex::new(),
        }
    }

    pub fn config(&self) -> &ClubConfig {
        &self.config
    }

    // ========================================================================
    // ADMISSION
    // ========================================================================

    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        age: u32,
        team: impl Into<String>,
        position: impl Into<String>,
        jersey_number: u32,
        salary: Decimal,
    ) -> Result<Applied<Member>> {
        self.config.check_jersey_number(jersey_number)?;
        self.add_member(MemberDraft::player(name, age, team, position, jersey_number, salary))
    }

    pub fn add_coach(
        &mut self,
        name: impl Into<String>,
        age: u32,
        team: impl Into<String>,
        specialization: impl Into<String>,
        certification: impl Into<String>,
        salary: Decimal,
    ) -> Result<Applied<Member>> {
        self.add_member(MemberDraft::coach(name, age, team, specialization, certification, salary))
    }

    pub fn add_manager(
        &mut self,
        name: impl Into<String>,
        age: u32,
        team: impl Into<String>,
        department: impl Into<String>,
        responsibilities: impl Into<String>,
        salary: Decimal,
    ) -> Result<Applied<Member>> {
        self.add_member(MemberDraft::manager(
            name,
            age,
            team,
            department,
            responsibilities,
            salary,
        ))
    }

    pub fn add_member(&mut self, draft: MemberDraft) -> Result<Applied<Member>> {
        self.add_member_on(draft, today())
    }

    /// Admit a member who joined on `join_date`.
    /// Returns a snapshot of the member as stored.
    pub fn add_member_on(&mut self, draft: MemberDraft, join_date: NaiveDate) -> Result<Applied<Member>> {
        draft.validate(&self.config)?;

        let member = self.roster.admit(draft, join_date);
        let id = member.id;
        let salary = member.base_salary;
        let description = match member.role() {
            Role::Player => "New player joined the club",
            Role::Coach => "New coach joined the club",
            Role::Manager => "New manager joined the club",
        };

        self.ledger.register_on(id, salary, join_date);
        self.journal
            .record(member, TransferKind::TransferIn, description, salary);

        info!(member_id = id, role = %member.role(), name = %member.name, "Member added");

        Ok(Applied {
            value: member.clone(),
            warnings: Vec::new(),
        })
    }

    // ========================================================================
    // REMOVAL & BULK OPERATIONS
    // ========================================================================

    /// Journal the departure, drop the ledger entry, then drop the member.
    /// The removed member is returned.
    pub fn remove_member(&mut self, id: MemberId) -> Mutation<Member> {
        let Some(member) = self.roster.find(id) else {
            debug!(member_id = id, "Remove skipped: member not found");
            return Mutation::NotFound(id);
        };

        self.journal.record(
            member,
            TransferKind::TransferOut,
            "Left the club",
            member.base_salary,
        );

        let mut warnings = Vec::new();
        if !self.ledger.remove(id) {
            warnings.push(self.sync_warning(id));
        }

        match self.roster.remove(id) {
            Some(removed) => {
                info!(member_id = id, name = %removed.name, "Member removed");
                Mutation::with_warnings(removed, warnings)
            }
            None => Mutation::NotFound(id),
        }
    }

    /// Replace the roster wholesale. Ledger, journal and training index are
    /// left as they are; re-seeding them is the caller's decision.
    /// Fitness is clamped into range and new ids never go below ones
    /// already handed out.
    pub fn set_members(&mut self, members: Vec<Member>) {
        let count = members.len();
        self.roster.replace_all(members);
        info!(
            count,
            next_id = self.roster.peek_next_id(),
            "Roster replaced by bulk load"
        );
    }

    /// Register every roster member's current salary in the ledger
    pub fn reseed_ledger(&mut self) {
        self.ledger.clear();
        for member in self.roster.iter() {
            self.ledger.register(member.id, member.base_salary);
        }
        debug!(entries = self.ledger.len(), "Ledger re-seeded from roster");
    }

    /// Reset roster, id counter, ledger, journal and training index
    pub fn clear_all(&mut self) {
        self.roster.clear();
        self.clear_journals();
        info!("Club state cleared");
    }

    /// Reset ledger, journal and training index; the roster stays
    pub fn clear_journals(&mut self) {
        self.journal.reset();
        self.training.clear();
        self.ledger.clear();
        debug!("Derived views cleared");
    }

    /// Point the counter just past the highest id on the roster
    pub fn reset_id_counter(&mut self) {
        self.roster.reset_id_counter();
    }

    // ========================================================================
    // SALARY & PAYMENTS
    // ========================================================================

    pub fn adjust_salary(&mut self, id: MemberId, new_salary: Decimal) -> Result<Mutation<Decimal>> {
        self.adjust_salary_on(id, new_salary, today())
    }

    /// Set a new base salary, dated `date` in the ledger history.
    /// The previous salary is returned.
    pub fn adjust_salary_on(
        &mut self,
        id: MemberId,
        new_salary: Decimal,
        date: NaiveDate,
    ) -> Result<Mutation<Decimal>> {
        self.config.check_salary(new_salary)?;

        let Some(member) = self.roster.find_mut(id) else {
            return Ok(Mutation::NotFound(id));
        };
        let old_salary = member.base_salary();
        member.set_base_salary(new_salary);

        let mut warnings = Vec::new();
        if !self.ledger.update_on(id, new_salary, date) {
            warnings.push(self.sync_warning(id));
        }

        if let Some(member) = self.roster.find(id) {
            self.journal.record(
                member,
                TransferKind::SalaryChange,
                format!("Salary changed from {} to {}", old_salary, new_salary),
                new_salary,
            );
        }

        info!(member_id = id, old = %old_salary, new = %new_salary, "Salary adjusted");
        Ok(Mutation::with_warnings(old_salary, warnings))
    }

    /// Pay one member. Unknown ids give an unsuccessful result.
    pub fn pay_salary(&mut self, id: MemberId, date: NaiveDate) -> PaymentResult {
        match self.roster.find_mut(id) {
            Some(member) => {
                let result = member.pay_salary(date);
                info!(member_id = id, amount = %result.amount, "Salary paid");
                result
            }
            None => PaymentResult::failed(date, "Member not found"),
        }
    }

    // ========================================================================
    // TRAINING
    // ========================================================================

    pub fn conduct_training(
        &mut self,
        id: MemberId,
        duration_minutes: u32,
        intensity: u8,
    ) -> Result<Mutation<String>> {
        self.conduct_training_on(id, duration_minutes, intensity, today())
    }

    /// Run a session on `date` and mirror its record into the training index.
    /// Returns the session summary.
    pub fn conduct_training_on(
        &mut self,
        id: MemberId,
        duration_minutes: u32,
        intensity: u8,
        date: NaiveDate,
    ) -> Result<Mutation<String>> {
        self.config.check_training(duration_minutes, intensity)?;

        let Some(member) = self.roster.find_mut(id) else {
            return Ok(Mutation::NotFound(id));
        };
        let summary = member.train(duration_minutes, intensity, date);
        let record = member.training_records.last().cloned();

        if let Some(record) = record {
            self.training.register(id, &record);
            debug!(member_id = id, %date, "Training indexed");
        }

        Ok(Mutation::applied(summary))
    }

    // ========================================================================
    // JOURNALED EDITS
    // ========================================================================

    /// Move a member to another team. The old team is returned.
    pub fn edit_team(&mut self, id: MemberId, new_team: impl Into<String>) -> Mutation<String> {
        let new_team = new_team.into();
        let Some(member) = self.roster.find_mut(id) else {
            return Mutation::NotFound(id);
        };
        let old_team = std::mem::replace(&mut member.team, new_team.clone());

        let member = &*member;
        self.journal.record(
            member,
            TransferKind::TeamChange,
            format!("Moved from team '{}' to '{}'", old_team, new_team),
            Decimal::ZERO,
        );

        info!(member_id = id, from = %old_team, to = %new_team, "Team changed");
        Mutation::applied(old_team)
    }

    /// Change a player's position. The old position is returned.
    pub fn edit_position(&mut self, id: MemberId, new_position: impl Into<String>) -> Mutation<String> {
        let new_position = new_position.into();
        let outcome = self.edit_player(id, |player| {
            std::mem::replace(&mut player.position, new_position.clone())
        });

        if let (Some(old_position), Some(member)) = (outcome.value(), self.roster.find(id)) {
            self.journal.record(
                member,
                TransferKind::PositionChange,
                format!("Position changed from '{}' to '{}'", old_position, new_position),
                Decimal::ZERO,
            );
            info!(member_id = id, from = %old_position, to = %new_position, "Position changed");
        }
        outcome
    }

    /// Free-form journal entry, e.g. a contract extension or termination
    pub fn record_event(
        &mut self,
        id: MemberId,
        kind: TransferKind,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Mutation<u64> {
        match self.roster.find(id) {
            Some(member) => {
                let sequence = self.journal.record(member, kind, description, amount).sequence;
                Mutation::applied(sequence)
            }
            None => Mutation::NotFound(id),
        }
    }

    // ========================================================================
    // PLAIN EDITS (no journal entry)
    // ========================================================================

    pub fn edit_name(&mut self, id: MemberId, name: impl Into<String>) -> Mutation<String> {
        let name = name.into();
        self.edit_member(id, |m| std::mem::replace(&mut m.name, name))
    }

    pub fn edit_age(&mut self, id: MemberId, age: u32) -> Result<Mutation<u32>> {
        self.config.check_age(age)?;
        Ok(self.edit_member(id, |m| std::mem::replace(&mut m.age, age)))
    }

    pub fn edit_join_date(&mut self, id: MemberId, join_date: NaiveDate) -> Mutation<NaiveDate> {
        self.edit_member(id, |m| std::mem::replace(&mut m.join_date, join_date))
    }

    pub fn edit_jersey_number(&mut self, id: MemberId, number: u32) -> Result<Mutation<u32>> {
        self.config.check_jersey_number(number)?;
        Ok(self.edit_player(id, |p| std::mem::replace(&mut p.jersey_number, number)))
    }

    pub fn edit_specialization(&mut self, id: MemberId, value: impl Into<String>) -> Mutation<String> {
        let value = value.into();
        self.edit_coach(id, |c| std::mem::replace(&mut c.specialization, value))
    }

    pub fn edit_certification(&mut self, id: MemberId, value: impl Into<String>) -> Mutation<String> {
        let value = value.into();
        self.edit_coach(id, |c| std::mem::replace(&mut c.certification, value))
    }

    pub fn edit_coaching_style(&mut self, id: MemberId, value: impl Into<String>) -> Mutation<String> {
        let value = value.into();
        self.edit_coach(id, |c| std::mem::replace(&mut c.coaching_style, value))
    }

    pub fn edit_department(&mut self, id: MemberId, value: impl Into<String>) -> Mutation<String> {
        let value = value.into();
        self.edit_manager(id, |m| std::mem::replace(&mut m.department, value))
    }

    pub fn edit_responsibilities(&mut self, id: MemberId, value: impl Into<String>) -> Mutation<String> {
        let value = value.into();
        self.edit_manager(id, |m| std::mem::replace(&mut m.responsibilities, value))
    }

    /// New goal count
    pub fn record_goal(&mut self, id: MemberId) -> Mutation<u32> {
        self.edit_player(id, |p| {
            p.goals += 1;
            p.goals
        })
    }

    /// New assist count
    pub fn record_assist(&mut self, id: MemberId) -> Mutation<u32> {
        self.edit_player(id, |p| {
            p.assists += 1;
            p.assists
        })
    }

    /// New contract count
    pub fn sign_contract(&mut self, id: MemberId, value: Decimal) -> Mutation<u32> {
        self.edit_manager(id, |m| {
            m.sign_contract(value);
            m.contracts_signed
        })
    }

    fn edit_member<T>(&mut self, id: MemberId, edit: impl FnOnce(&mut Member) -> T) -> Mutation<T> {
        match self.roster.find_mut(id) {
            Some(member) => {
                let value = edit(member);
                debug!(member_id = id, "Member edited");
                Mutation::applied(value)
            }
            None => Mutation::NotFound(id),
        }
    }

    fn edit_player<T>(&mut self, id: MemberId, edit: impl FnOnce(&mut PlayerProfile) -> T) -> Mutation<T> {
        let Some(member) = self.roster.find_mut(id) else {
            return Mutation::NotFound(id);
        };
        let actual = member.role();
        match member.as_player_mut() {
            Some(player) => Mutation::applied(edit(player)),
            None => Mutation::RoleMismatch {
                id,
                expected: Role::Player,
                actual,
            },
        }
    }

    fn edit_coach<T>(&mut self, id: MemberId, edit: impl FnOnce(&mut CoachProfile) -> T) -> Mutation<T> {
        let Some(member) = self.roster.find_mut(id) else {
            return Mutation::NotFound(id);
        };
        let actual = member.role();
        match member.as_coach_mut() {
            Some(coach) => Mutation::applied(edit(coach)),
            None => Mutation::RoleMismatch {
                id,
                expected: Role::Coach,
                actual,
            },
        }
    }

    fn edit_manager<T>(
        &mut self,
        id: MemberId,
        edit: impl FnOnce(&mut ManagerProfile) -> T,
    ) -> Mutation<T> {
        let Some(member) = self.roster.find_mut(id) else {
            return Mutation::NotFound(id);
        };
        let actual = member.role();
        match member.as_manager_mut() {
            Some(manager) => Mutation::applied(edit(manager)),
            None => Mutation::RoleMismatch {
                id,
                expected: Role::Manager,
                actual,
            },
        }
    }

    fn sync_warning(&self, id: MemberId) -> SyncWarning {
        let warning = SyncWarning::LedgerEntryMissing { id };
        warn!(member_id = id, "{}", warning);
        warning
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn find_by_id(&self, id: MemberId) -> Option<&Member> {
        self.roster.find(id)
    }

    /// Owned snapshot of the roster, ascending id
    pub fn all(&self) -> Vec<Member> {
        self.roster.all()
    }

    pub fn member_count(&self) -> usize {
        self.roster.len()
    }

    pub fn search(&self, filter: &MemberFilter) -> Vec<&Member> {
        self.roster.iter().filter(|m| filter.matches(m)).collect()
    }

    pub fn sorted(&self, sort: &MemberSort) -> Vec<&Member> {
        let mut members: Vec<&Member> = self.roster.iter().collect();
        sort.sort(&mut members);
        members
    }

    pub fn overall_statistics(&self) -> OverallStatistics {
        self.overall_statistics_at(today())
    }

    pub fn overall_statistics_at(&self, as_of: NaiveDate) -> OverallStatistics {
        let count = self.roster.len();
        let (age_sum, experience_sum) = self.roster.iter().fold((0u64, 0u64), |(a, e), m| {
            (a + m.age as u64, e + m.experience_years_at(as_of) as u64)
        });
        let mean = |sum: u64| if count == 0 { 0.0 } else { sum as f64 / count as f64 };

        OverallStatistics {
            total_members: count,
            average_age: mean(age_sum),
            average_experience: mean(experience_sum),
            total_salary_budget: self.ledger.total_budget(),
            average_salary: self.ledger.average(),
            total_trainings: self.training.total_trainings(),
            total_transfers: self.journal.len(),
        }
    }

    // ------------------------------------------------------------------------
    // Ledger
    // ------------------------------------------------------------------------

    pub fn ledger(&self) -> &SalaryLedger {
        &self.ledger
    }

    pub fn salary_from_ledger(&self, id: MemberId) -> Decimal {
        self.ledger.get(id)
    }

    pub fn salary_history(&self, id: MemberId) -> Option<&SalaryHistory> {
        self.ledger.history(id)
    }

    /// Ledger salaries averaged per role of the current roster
    pub fn ledger_salary_by_role(&self) -> BTreeMap<Role, Decimal> {
        self.ledger.by_role(|id| self.roster.find(id).map(Member::role))
    }

    // ------------------------------------------------------------------------
    // Training index
    // ------------------------------------------------------------------------

    pub fn training_index(&self) -> &TrainingIndex {
        &self.training
    }

    pub fn trainings_by_date(&self, date: NaiveDate) -> &[TrainingRecord] {
        self.training.by_date(date)
    }

    pub fn most_active_members(&self, limit: usize) -> Vec<MemberId> {
        self.training.most_active_members(limit)
    }

    /// Indexed sessions per role; sessions of departed members are skipped
    pub fn training_distribution_by_role(&self) -> BTreeMap<Role, usize> {
        self.training
            .distribution_by_role(|id| self.roster.find(id).map(Member::role))
    }

    /// Mean of every member's average session intensity
    pub fn average_intensity(&self) -> f64 {
        if self.roster.is_empty() {
            return 0.0;
        }
        self.roster.iter().map(|m| m.average_intensity()).sum::<f64>() / self.roster.len() as f64
    }

    // ------------------------------------------------------------------------
    // Journal
    // ------------------------------------------------------------------------

    pub fn journal(&self) -> &TransferJournal {
        &self.journal
    }

    /// Newest first
    pub fn transfer_records(&self) -> Vec<&TransferRecord> {
        self.journal.all_records()
    }

    pub fn transfer_records_by_member(&self, id: MemberId) -> Vec<&TransferRecord> {
        self.journal.by_member(id)
    }

    pub fn generate_transfer_report(&self) -> String {
        self.journal.generate_report()
    }

    // ========================================================================
    // REPORTS
    // ========================================================================

    /// Render a roster report as of today
    pub fn generate_report(&self, kind: ReportKind) -> String {
        self.generate_report_with(kind, &ReportBuilder::new())
    }

    pub fn generate_report_with(&self, kind: ReportKind, builder: &ReportBuilder) -> String {
        builder.render(kind, &self.roster.all())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClubError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn club_with_player() -> (ClubManager, MemberId) {
        let mut club = ClubManager::new();
        let id = club
            .add_player("A", 25, "First Team", "Forward", 9, Decimal::from(50_000))
            .unwrap()
            .value
            .id;
        (club, id)
    }

    #[test]
    fn test_add_touches_all_views_in_order() {
        let (club, id) = club_with_player();

        assert_eq!(club.find_by_id(id).unwrap().name, "A");
        assert_eq!(club.salary_from_ledger(id), Decimal::from(50_000));

        let records = club.transfer_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, TransferKind::TransferIn);
        assert_eq!(records[0].amount, Decimal::from(50_000));
    }

    #[test]
    fn test_add_rejects_invalid_input_without_state_change() {
        let mut club = ClubManager::new();

        let err = club
            .add_player("A", 10, "T", "GK", 1, Decimal::from(50_000))
            .unwrap_err();
        assert!(matches!(err, ClubError::InvalidAge { age: 10, .. }));

        let err = club
            .add_player("A", 25, "T", "GK", 100, Decimal::from(50_000))
            .unwrap_err();
        assert!(matches!(err, ClubError::InvalidJerseyNumber { number: 100, .. }));

        let err = club
            .add_coach("C", 40, "T", "Tactics", "A", Decimal::from(50))
            .unwrap_err();
        assert!(matches!(err, ClubError::InvalidSalary { .. }));

        assert_eq!(club.member_count(), 0);
        assert!(club.ledger().is_empty());
        assert!(club.journal().is_empty());
    }

    #[test]
    fn test_adjust_salary_journals_old_and_new() {
        let (mut club, id) = club_with_player();

        let outcome = club.adjust_salary(id, Decimal::from(60_000)).unwrap();
        assert!(outcome.is_clean());
        assert_eq!(outcome.value(), Some(&Decimal::from(50_000)));

        assert_eq!(club.find_by_id(id).unwrap().base_salary, Decimal::from(60_000));
        assert_eq!(club.salary_from_ledger(id), Decimal::from(60_000));

        let latest = club.transfer_records()[0];
        assert_eq!(latest.kind, TransferKind::SalaryChange);
        assert_eq!(latest.description, "Salary changed from 50000 to 60000");
    }

    #[test]
    fn test_adjust_salary_validation_and_absence() {
        let (mut club, id) = club_with_player();

        assert!(club.adjust_salary(id, Decimal::from(5_000_000)).is_err());
        assert_eq!(club.salary_history(id).unwrap().len(), 1);

        let missing = club.adjust_salary(99, Decimal::from(60_000)).unwrap();
        assert_eq!(missing, Mutation::NotFound(99));
        assert_eq!(club.journal().len(), 1);
    }

    #[test]
    fn test_training_mirrors_into_index() {
        let (mut club, id) = club_with_player();
        let day = date(2024, 4, 2);

        let outcome = club.conduct_training_on(id, 60, 8, day).unwrap();
        assert!(outcome.is_applied());

        assert_eq!(club.trainings_by_date(day).len(), 1);
        assert_eq!(club.training_index().by_member(id).len(), 1);
        assert_eq!(club.find_by_id(id).unwrap().training_count(), 1);

        assert!(matches!(
            club.conduct_training(id, 5, 8),
            Err(ClubError::InvalidTrainingDuration { minutes: 5, .. })
        ));
        assert!(matches!(
            club.conduct_training(id, 60, 11),
            Err(ClubError::InvalidTrainingIntensity { intensity: 11, .. })
        ));
        assert_eq!(club.conduct_training(42, 60, 5).unwrap(), Mutation::NotFound(42));
        assert_eq!(club.training_index().total_trainings(), 1);
    }

    #[test]
    fn test_edit_team_and_position() {
        let (mut club, id) = club_with_player();
        let coach = club
            .add_coach("C", 45, "Academy", "Tactics", "UEFA A", Decimal::from(40_000))
            .unwrap()
            .value
            .id;

        assert_eq!(club.edit_team(id, "Reserves"), Mutation::applied("First Team".to_string()));
        assert_eq!(club.edit_position(id, "Winger"), Mutation::applied("Forward".to_string()));
        assert_eq!(
            club.edit_position(coach, "Winger"),
            Mutation::RoleMismatch {
                id: coach,
                expected: Role::Player,
                actual: Role::Coach
            }
        );
        assert_eq!(club.edit_team(77, "X"), Mutation::NotFound(77));

        let kinds: Vec<TransferKind> = club
            .transfer_records_by_member(id)
            .iter()
            .map(|r| r.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TransferKind::PositionChange,
                TransferKind::TeamChange,
                TransferKind::TransferIn
            ]
        );
        assert_eq!(club.find_by_id(id).unwrap().team, "Reserves");
    }

    #[test]
    fn test_plain_edits_leave_journal_alone() {
        let (mut club, id) = club_with_player();

        assert!(club.edit_name(id, "B").is_applied());
        assert!(club.edit_age(id, 26).unwrap().is_applied());
        assert!(club.edit_age(id, 80).is_err());
        assert!(club.edit_jersey_number(id, 10).unwrap().is_applied());
        assert!(club.edit_join_date(id, date(2020, 1, 1)).is_applied());
        assert!(matches!(
            club.edit_department(id, "Finance"),
            Mutation::RoleMismatch { .. }
        ));

        let member = club.find_by_id(id).unwrap();
        assert_eq!(member.name, "B");
        assert_eq!(member.age, 26);
        assert_eq!(member.as_player().unwrap().jersey_number, 10);
        assert_eq!(club.journal().len(), 1);
    }

    #[test]
    fn test_role_events() {
        let (mut club, id) = club_with_player();
        let manager = club
            .add_manager("M", 50, "Office", "Finance", "Budget", Decimal::from(70_000))
            .unwrap()
            .value
            .id;

        assert_eq!(club.record_goal(id), Mutation::applied(1));
        assert_eq!(club.record_assist(id), Mutation::applied(1));
        assert_eq!(club.sign_contract(manager, Decimal::from(10_000)), Mutation::applied(1));
        assert!(matches!(club.record_goal(manager), Mutation::RoleMismatch { .. }));

        let sequence = club
            .record_event(manager, TransferKind::ContractExtension, "Two more years", Decimal::ZERO)
            .into_value();
        assert_eq!(sequence, Some(3));
    }

    #[test]
    fn test_pay_salary() {
        let (mut club, id) = club_with_player();
        let paid = club.pay_salary(id, date(2024, 1, 31));
        assert!(paid.successful);
        assert_eq!(paid.amount, Decimal::from(50_000));

        let missing = club.pay_salary(5, date(2024, 1, 31));
        assert!(!missing.successful);
        assert_eq!(missing.message, "Member not found");
    }

    #[test]
    fn test_remove_without_ledger_entry_warns() {
        let mut club = ClubManager::new();
        let draft = MemberDraft::player("Loaded", 22, "T", "DF", 4, Decimal::from(30_000));
        club.set_members(vec![Member::from_draft(7, draft, date(2022, 1, 1))]);

        let outcome = club.remove_member(7);
        assert!(outcome.is_applied());
        assert_eq!(outcome.warnings(), &[SyncWarning::LedgerEntryMissing { id: 7 }]);
        assert!(club.find_by_id(7).is_none());
    }

    #[test]
    fn test_reseed_ledger_after_bulk_load() {
        let mut club = ClubManager::new();
        let draft = MemberDraft::coach("Loaded", 44, "T", "Fitness", "B", Decimal::from(35_000));
        club.set_members(vec![Member::from_draft(3, draft, date(2022, 1, 1))]);

        assert_eq!(club.salary_from_ledger(3), Decimal::ZERO);
        club.reseed_ledger();
        assert_eq!(club.salary_from_ledger(3), Decimal::from(35_000));
        assert!(club.adjust_salary(3, Decimal::from(36_000)).unwrap().is_clean());
    }

    #[test]
    fn test_clear_journals_keeps_roster() {
        let (mut club, id) = club_with_player();
        club.conduct_training(id, 30, 5).unwrap();

        club.clear_journals();

        assert!(club.find_by_id(id).is_some());
        assert!(club.journal().is_empty());
        assert!(club.ledger().is_empty());
        assert!(club.training_index().is_empty());
    }

    #[test]
    fn test_overall_statistics() {
        let mut club = ClubManager::new();
        let empty = club.overall_statistics();
        assert_eq!(empty.total_members, 0);
        assert_eq!(empty.average_age, 0.0);

        let as_of = date(2025, 1, 1);
        club.add_member_on(
            MemberDraft::player("A", 20, "T", "FW", 9, Decimal::from(1000)),
            date(2023, 1, 1),
        )
        .unwrap();
        club.add_member_on(
            MemberDraft::coach("B", 40, "T", "GK", "A", Decimal::from(2000)),
            date(2021, 1, 1),
        )
        .unwrap();

        let stats = club.overall_statistics_at(as_of);
        assert_eq!(stats.total_members, 2);
        assert_eq!(stats.average_age, 30.0);
        assert_eq!(stats.average_experience, 3.0);
        assert_eq!(stats.total_salary_budget, Decimal::from(3000));
        assert_eq!(stats.average_salary, Decimal::from(1500));
        assert_eq!(stats.total_transfers, 2);
    }
}
