// 🚫 Error and outcome types for roster mutations
//
// Validation failures are errors. Absence is not: a mutation that targets an
// unknown id reports `Mutation::NotFound` and changes nothing. A mutation whose
// primary write succeeded but whose derived-view write did not reports
// `Mutation::Applied` with warnings attached.

use crate::members::{MemberId, Role};
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClubError>;

/// Rejected input. Raised before any state is changed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClubError {
    #[error("age {age} outside allowed range {min}..={max}")]
    InvalidAge { age: u32, min: u32, max: u32 },

    #[error("salary {salary} outside allowed range {min}..={max}")]
    InvalidSalary {
        salary: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("training duration {minutes} min outside allowed range {min}..={max}")]
    InvalidTrainingDuration { minutes: u32, min: u32, max: u32 },

    #[error("training intensity {intensity} outside allowed range {min}..={max}")]
    InvalidTrainingIntensity { intensity: u8, min: u8, max: u8 },

    #[error("jersey number {number} outside allowed range {min}..={max}")]
    InvalidJerseyNumber { number: u32, min: u32, max: u32 },
}

/// A derived view could not be brought in line with the roster.
/// The roster write stands; the caller decides whether to re-seed the view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncWarning {
    #[error("salary ledger has no entry for member {id}; ledger left unchanged")]
    LedgerEntryMissing { id: MemberId },
}

// ============================================================================
// MUTATION OUTCOME
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub value: T,
    pub warnings: Vec<SyncWarning>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<T> {
    /// The roster was changed. Warnings list derived views left out of sync.
    Applied(Applied<T>),

    /// No member with this id. Nothing changed.
    NotFound(MemberId),

    /// The edit only applies to another role. Nothing changed.
    RoleMismatch {
        id: MemberId,
        expected: Role,
        actual: Role,
    },
}

impl<T> Mutation<T> {
    pub fn applied(value: T) -> Self {
        Mutation::Applied(Applied {
            value,
            warnings: Vec::new(),
        })
    }

    pub fn with_warnings(value: T, warnings: Vec<SyncWarning>) -> Self {
        Mutation::Applied(Applied { value, warnings })
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Mutation::Applied(_))
    }

    /// True only for an applied mutation with every view in sync
    pub fn is_clean(&self) -> bool {
        matches!(self, Mutation::Applied(a) if a.warnings.is_empty())
    }

    pub fn warnings(&self) -> &[SyncWarning] {
        match self {
            Mutation::Applied(a) => &a.warnings,
            _ => &[],
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Mutation::Applied(a) => Some(&a.value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Mutation::Applied(a) => Some(a.value),
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
