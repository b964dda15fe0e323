// Club Roster - Core Library
// Roster of players, coaches and managers plus the views derived from it:
// salary ledger, training index and transfer journal.

pub mod config;
pub mod error;
pub mod members;    // Member model: base record + role payload
pub mod roster;     // Authoritative member collection + id counter
pub mod ledger;     // Current salaries + per-member history
pub mod training;   // Sessions indexed by date and by member
pub mod journal;    // Append-only lifecycle events
pub mod statistics; // Pure aggregates over roster snapshots
pub mod search;     // Filters and sort orders
pub mod report;     // Plain-text club reports
pub mod club;       // Coordinating facade
pub mod export;     // CSV / JSON snapshots

// Re-export commonly used types
pub use config::{ClubConfig, CONFIG_ENV_VAR};
pub use error::{Applied, ClubError, Mutation, SyncWarning};
pub use members::{
    today, CoachProfile, ManagerProfile, Member, MemberDraft, MemberId, Payable, PaymentRecord,
    PaymentResult, PlayerProfile, Role, RoleProfile, Trainable, TrainingRecord,
};
pub use roster::Roster;
pub use ledger::{round_money, SalaryHistory, SalaryLedger, SalaryRecord};
pub use training::TrainingIndex;
pub use journal::{TransferJournal, TransferKind, TransferRecord};
pub use statistics::{
    FinanceSummary, Metric, RangeStatistics, SalaryStatistics, StatisticsEngine,
    SummaryStatistics,
};
pub use search::{MemberFilter, MemberSort, SortKey, SortOrder};
pub use report::{ReportBuilder, ReportKind};
pub use club::{ClubManager, OverallStatistics};
pub use export::{
    export_journal_csv, export_report, export_roster_csv, export_roster_json,
    import_roster_csv, import_roster_json, MemberRow,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
