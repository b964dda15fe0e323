// 🏷️ Roles - closed set of member variants with their role-specific payload
//
// Exactly three roles exist, so role behaviour is a match over `RoleProfile`
// rather than an open trait hierarchy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fitness never exceeds this level
pub const MAX_FITNESS: f64 = 100.0;

/// A coach session counts as successful above this intensity
pub const SUCCESSFUL_SESSION_INTENSITY: u8 = 7;

// ============================================================================
// ROLE TAG
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Player,
    Coach,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Player => "Player",
            Role::Coach => "Coach",
            Role::Manager => "Manager",
        }
    }

    pub fn all() -> [Role; 3] {
        [Role::Player, Role::Coach, Role::Manager]
    }

    /// Case-insensitive parse of a role name
    pub fn parse(name: &str) -> Option<Role> {
        Role::all()
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ROLE PROFILES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub position: String,
    pub jersey_number: u32,
    pub goals: u32,
    pub assists: u32,

    /// 0..=100, only raised by training
    pub fitness_level: f64,
}

impl PlayerProfile {
    pub fn new(position: impl Into<String>, jersey_number: u32) -> Self {
        PlayerProfile {
            position: position.into(),
            jersey_number,
            goals: 0,
            assists: 0,
            fitness_level: MAX_FITNESS,
        }
    }

    /// Raise fitness by `minutes * intensity / 100`, capped at 100.
    /// Returns the increase that was requested (before capping).
    pub fn apply_training(&mut self, minutes: u32, intensity: u8) -> f64 {
        let increase = (minutes as f64 * intensity as f64) / 100.0;
        self.fitness_level = (self.fitness_level + increase).min(MAX_FITNESS);
        increase
    }

    pub fn set_fitness_level(&mut self, level: f64) {
        self.fitness_level = if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, MAX_FITNESS)
        };
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachProfile {
    pub specialization: String,
    pub certification: String,
    pub coaching_style: String,
    pub successful_sessions: u32,
}

impl CoachProfile {
    pub fn new(specialization: impl Into<String>, certification: impl Into<String>) -> Self {
        CoachProfile {
            specialization: specialization.into(),
            certification: certification.into(),
            coaching_style: "Standard".to_string(),
            successful_sessions: 0,
        }
    }

    pub fn apply_training(&mut self, intensity: u8) {
        if intensity > SUCCESSFUL_SESSION_INTENSITY {
            self.successful_sessions += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerProfile {
    pub department: String,
    pub responsibilities: String,
    pub contracts_signed: u32,
    pub budget_managed: Decimal,
}

impl ManagerProfile {
    pub fn new(department: impl Into<String>, responsibilities: impl Into<String>) -> Self {
        ManagerProfile {
            department: department.into(),
            responsibilities: responsibilities.into(),
            contracts_signed: 0,
            budget_managed: Decimal::ZERO,
        }
    }

    pub fn sign_contract(&mut self, value: Decimal) {
        self.contracts_signed += 1;
        self.budget_managed += value;
    }
}

/// Role tag plus its payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum RoleProfile {
    Player(PlayerProfile),
    Coach(CoachProfile),
    Manager(ManagerProfile),
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Player(_) => Role::Player,
            RoleProfile::Coach(_) => Role::Coach,
            RoleProfile::Manager(_) => Role::Manager,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
