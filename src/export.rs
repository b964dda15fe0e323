// 💾 Export / Import - roster and journal snapshots on disk
//
// Formats:
// - Roster CSV: one flat row per member, role-specific columns left empty for
//   other roles. Training and payment records are not carried.
// - Roster JSON: full members including records.
// - Journal CSV: newest first, the journal's canonical order.
//
// Import only produces members, each clamped and then checked against the
// club's bounds. Feeding them to `ClubManager::set_members` and re-seeding
// derived views is up to the caller.

use crate::config::ClubConfig;
use crate::journal::{TransferJournal, TIMESTAMP_FORMAT};
use crate::members::{
    CoachProfile, ManagerProfile, Member, MemberId, PlayerProfile, Role, RoleProfile, Trainable,
};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// ROSTER CSV
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRow {
    pub id: MemberId,
    pub name: String,
    pub age: u32,
    pub role: Role,
    pub team: String,
    pub join_date: NaiveDate,
    pub base_salary: Decimal,

    // Player
    pub position: Option<String>,
    pub jersey_number: Option<u32>,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
    pub fitness_level: Option<f64>,

    // Coach
    pub specialization: Option<String>,
    pub certification: Option<String>,
    pub coaching_style: Option<String>,
    pub successful_sessions: Option<u32>,

    // Manager
    pub department: Option<String>,
    pub responsibilities: Option<String>,
    pub contracts_signed: Option<u32>,
    pub budget_managed: Option<Decimal>,

    /// Informational; not restored on import
    pub training_count: usize,
}

impl MemberRow {
    pub fn from_member(member: &Member) -> Self {
        let mut row = MemberRow {
            id: member.id,
            name: member.name.clone(),
            age: member.age,
            role: member.role(),
            team: member.team.clone(),
            join_date: member.join_date,
            base_salary: member.base_salary,
            position: None,
            jersey_number: None,
            goals: None,
            assists: None,
            fitness_level: None,
            specialization: None,
            certification: None,
            coaching_style: None,
            successful_sessions: None,
            department: None,
            responsibilities: None,
            contracts_signed: None,
            budget_managed: None,
            training_count: member.training_count(),
        };

        match &member.profile {
            RoleProfile::Player(p) => {
                row.position = Some(p.position.clone());
                row.jersey_number = Some(p.jersey_number);
                row.goals = Some(p.goals);
                row.assists = Some(p.assists);
                row.fitness_level = Some(p.fitness_level);
            }
            RoleProfile::Coach(c) => {
                row.specialization = Some(c.specialization.clone());
                row.certification = Some(c.certification.clone());
                row.coaching_style = Some(c.coaching_style.clone());
                row.successful_sessions = Some(c.successful_sessions);
            }
            RoleProfile::Manager(m) => {
                row.department = Some(m.department.clone());
                row.responsibilities = Some(m.responsibilities.clone());
                row.contracts_signed = Some(m.contracts_signed);
                row.budget_managed = Some(m.budget_managed);
            }
        }

        row
    }

    /// Rebuild a member. The columns identifying the role payload must be present.
    pub fn into_member(self) -> Result<Member> {
        let profile = match self.role {
            Role::Player => {
                let (Some(position), Some(jersey_number)) = (self.position, self.jersey_number)
                else {
                    bail!("Player row {} is missing position or jersey_number", self.id);
                };
                let mut player = PlayerProfile::new(position, jersey_number);
                player.goals = self.goals.unwrap_or(0);
                player.assists = self.assists.unwrap_or(0);
                if let Some(level) = self.fitness_level {
                    player.set_fitness_level(level);
                }
                RoleProfile::Player(player)
            }
            Role::Coach => {
                let (Some(specialization), Some(certification)) =
                    (self.specialization, self.certification)
                else {
                    bail!("Coach row {} is missing specialization or certification", self.id);
                };
                let mut coach = CoachProfile::new(specialization, certification);
                if let Some(style) = self.coaching_style {
                    coach.coaching_style = style;
                }
                coach.successful_sessions = self.successful_sessions.unwrap_or(0);
                RoleProfile::Coach(coach)
            }
            Role::Manager => {
                let (Some(department), Some(responsibilities)) =
                    (self.department, self.responsibilities)
                else {
                    bail!("Manager row {} is missing department or responsibilities", self.id);
                };
                let mut manager = ManagerProfile::new(department, responsibilities);
                manager.contracts_signed = self.contracts_signed.unwrap_or(0);
                manager.budget_managed = self.budget_managed.unwrap_or(Decimal::ZERO);
                RoleProfile::Manager(manager)
            }
        };

        Ok(Member {
            id: self.id,
            name: self.name,
            age: self.age,
            join_date: self.join_date,
            team: self.team,
            base_salary: self.base_salary,
            profile,
            training_records: Vec::new(),
            payment_records: Vec::new(),
        })
    }
}

pub fn export_roster_csv<P: AsRef<Path>>(members: &[Member], path: P) -> Result<usize> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {:?}", path))?;

    for member in members {
        writer
            .serialize(MemberRow::from_member(member))
            .with_context(|| format!("Failed to write member {}", member.id))?;
    }
    writer.flush().context("Failed to flush roster CSV")?;

    Ok(members.len())
}

pub fn import_roster_csv<P: AsRef<Path>>(path: P, config: &ClubConfig) -> Result<Vec<Member>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path))?;

    let mut members = Vec::new();
    for result in reader.deserialize() {
        let row: MemberRow = result.context("Failed to deserialize member row")?;
        members.push(row.into_member()?);
    }
    accept_loaded(members, config, path)
}

/// Clamp payload values, then reject any member outside the club's bounds
fn accept_loaded(mut members: Vec<Member>, config: &ClubConfig, path: &Path) -> Result<Vec<Member>> {
    for member in members.iter_mut() {
        member.clamp_profile();
        member
            .validate(config)
            .with_context(|| format!("Invalid member {} in {:?}", member.id, path))?;
    }
    Ok(members)
}

// ============================================================================
// ROSTER JSON
// ============================================================================

pub fn export_roster_json<P: AsRef<Path>>(members: &[Member], path: P) -> Result<usize> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(members).context("Failed to serialize roster")?;
    fs::write(path, json).with_context(|| format!("Failed to write JSON file: {:?}", path))?;
    Ok(members.len())
}

pub fn import_roster_json<P: AsRef<Path>>(path: P, config: &ClubConfig) -> Result<Vec<Member>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    let members: Vec<Member> =
        serde_json::from_str(&content).context("Failed to parse roster JSON")?;
    accept_loaded(members, config, path)
}

// ============================================================================
// REPORTS
// ============================================================================

/// Write a rendered text report, creating or truncating the file
pub fn export_report<P: AsRef<Path>>(report: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, report).with_context(|| format!("Failed to write report: {:?}", path))?;
    Ok(())
}

// ============================================================================
// JOURNAL CSV
// ============================================================================

#[derive(Debug, Serialize)]
struct JournalRow<'a> {
    sequence: u64,
    timestamp: String,
    member_id: MemberId,
    member_name: &'a str,
    role: Role,
    team: &'a str,
    kind: &'static str,
    description: &'a str,
    amount: Decimal,
}

pub fn export_journal_csv<P: AsRef<Path>>(journal: &TransferJournal, path: P) -> Result<usize> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {:?}", path))?;

    let records = journal.all_records();
    for record in &records {
        writer
            .serialize(JournalRow {
                sequence: record.sequence,
                timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                member_id: record.member_id,
                member_name: &record.member_name,
                role: record.role,
                team: &record.team,
                kind: record.kind.description(),
                description: &record.description,
                amount: record.amount,
            })
            .with_context(|| format!("Failed to write journal entry {}", record.sequence))?;
    }
    writer.flush().context("Failed to flush journal CSV")?;

    Ok(records.len())
}

// ============================================================================
// TESTS
// ============================================================================
