// 📜 Transfer Journal - append-only record of lifecycle events
//
// Every entry snapshots the member's id, name, role and team at the moment it
// was written, so entries stay readable after the member changes or leaves.
// Entries are never edited or removed individually.
//
// Storage is insertion order (oldest first, each entry numbered). The
// canonical presentation order is the reverse: newest first.

use crate::members::{Member, MemberId, Role};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// TRANSFER KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferKind {
    TransferIn,
    TransferOut,
    ContractExtension,
    ContractTermination,
    SalaryChange,
    PositionChange,
    TeamChange,
}

impl TransferKind {
    pub fn description(&self) -> &'static str {
        match self {
            TransferKind::TransferIn => "Joined the club",
            TransferKind::TransferOut => "Left the club",
            TransferKind::ContractExtension => "Contract extension",
            TransferKind::ContractTermination => "Contract termination",
            TransferKind::SalaryChange => "Salary change",
            TransferKind::PositionChange => "Position change",
            TransferKind::TeamChange => "Team change",
        }
    }
}

// ============================================================================
// TRANSFER RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// 1-based position in insertion order
    pub sequence: u64,

    pub member_id: MemberId,
    pub member_name: String,
    pub role: Role,
    pub team: String,

    pub kind: TransferKind,
    pub description: String,

    /// Zero when the event carries no amount
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for TransferRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({}, {}) - {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind.description(),
            self.member_name,
            self.role,
            self.team,
            self.description
        )?;
        if self.amount > Decimal::ZERO {
            write!(f, " (Amount: {})", self.amount)?;
        }
        Ok(())
    }
}

// ============================================================================
// TRANSFER JOURNAL
// ============================================================================

#[derive(Debug, Default)]
pub struct TransferJournal {
    records: Vec<TransferRecord>,
}

impl TransferJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry for `member` stamped with the current time
    pub fn record(
        &mut self,
        member: &Member,
        kind: TransferKind,
        description: impl Into<String>,
        amount: Decimal,
    ) -> &TransferRecord {
        self.record_at(member, kind, description, amount, Utc::now())
    }

    pub fn record_at(
        &mut self,
        member: &Member,
        kind: TransferKind,
        description: impl Into<String>,
        amount: Decimal,
        timestamp: DateTime<Utc>,
    ) -> &TransferRecord {
        let sequence = self.records.len() as u64 + 1;
        self.records.push(TransferRecord {
            sequence,
            member_id: member.id,
            member_name: member.name.clone(),
            role: member.role(),
            team: member.team.clone(),
            kind,
            description: description.into(),
            amount,
            timestamp,
        });
        &self.records[self.records.len() - 1]
    }

    /// Newest first
    pub fn all_records(&self) -> Vec<&TransferRecord> {
        self.records.iter().rev().collect()
    }

    /// Oldest first
    pub fn insertion_order(&self) -> &[TransferRecord] {
        &self.records
    }

    pub fn by_member(&self, id: MemberId) -> Vec<&TransferRecord> {
        self.records.iter().rev().filter(|r| r.member_id == id).collect()
    }

    pub fn by_type(&self, kind: TransferKind) -> Vec<&TransferRecord> {
        self.records.iter().rev().filter(|r| r.kind == kind).collect()
    }

    /// The `count` newest entries, newest first
    pub fn recent(&self, count: usize) -> Vec<&TransferRecord> {
        self.records.iter().rev().take(count).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn generate_report(&self) -> String {
        self.generate_report_at(Utc::now())
    }

    /// Header with generation time and count, then one line per entry, newest first
    pub fn generate_report_at(&self, generated_at: DateTime<Utc>) -> String {
        let mut report = String::from("=== TRANSFER JOURNAL REPORT ===\n");
        report.push_str(&format!(
            "Generated: {}\n\n",
            generated_at.format(TIMESTAMP_FORMAT)
        ));
        report.push_str(&format!("Total records: {}\n\n", self.len()));

        for record in self.records.iter().rev() {
            report.push_str(&record.to_string());
            report.push('\n');
        }
        report
    }

    /// Drop every entry. Only the full club reset calls this.
    pub(crate) fn reset(&mut self) {
        self.records.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
