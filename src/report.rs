// 📝 Reports - plain-text club reports over a roster snapshot
//
// Four reports: full member listing, finances, training and a role
// breakdown. Each starts with a title and generation time; experience and
// bonuses are measured at `as_of`, so fixed dates give fixed text.

use crate::journal::TIMESTAMP_FORMAT;
use crate::members::{today, Member, Role, Trainable};
use crate::statistics::StatisticsEngine;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Members,
    Financial,
    Training,
    Roles,
}

impl ReportKind {
    pub fn all() -> [ReportKind; 4] {
        [
            ReportKind::Members,
            ReportKind::Financial,
            ReportKind::Training,
            ReportKind::Roles,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Members => "CLUB MEMBERS REPORT",
            ReportKind::Financial => "FINANCIAL REPORT",
            ReportKind::Training => "TRAINING REPORT",
            ReportKind::Roles => "ROLE REPORT",
        }
    }

    /// Suggested file name when writing the report to disk
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportKind::Members => "members_report.txt",
            ReportKind::Financial => "financial_report.txt",
            ReportKind::Training => "training_report.txt",
            ReportKind::Roles => "role_report.txt",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportBuilder {
    /// Reference date for experience and bonuses
    pub as_of: NaiveDate,
    pub generated_at: DateTime<Utc>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        ReportBuilder {
            as_of: today(),
            generated_at: Utc::now(),
        }
    }

    pub fn at(generated_at: DateTime<Utc>, as_of: NaiveDate) -> Self {
        ReportBuilder { as_of, generated_at }
    }

    pub fn render(&self, kind: ReportKind, members: &[Member]) -> String {
        match kind {
            ReportKind::Members => self.members_report(members),
            ReportKind::Financial => self.financial_report(members),
            ReportKind::Training => self.training_report(members),
            ReportKind::Roles => self.role_report(members),
        }
    }

    fn header(&self, kind: ReportKind) -> String {
        format!(
            "=== {} ===\nGenerated: {}\n\n",
            kind.title(),
            self.generated_at.format(TIMESTAMP_FORMAT)
        )
    }

    /// Count, then one summary line per member
    pub fn members_report(&self, members: &[Member]) -> String {
        let mut report = self.header(ReportKind::Members);
        report.push_str(&format!("Total members: {}\n\n", members.len()));
        for member in members {
            report.push_str(&format!("{}\n", member.summary_at(self.as_of)));
        }
        report
    }

    /// Payroll totals, then salary and bonus per member
    pub fn financial_report(&self, members: &[Member]) -> String {
        let finance = StatisticsEngine::as_of(self.as_of).finance_summary(members);

        let mut report = self.header(ReportKind::Financial);
        report.push_str(&format!("Total salaries: {}\n", finance.total_salaries));
        report.push_str(&format!("Total bonuses: {}\n", finance.total_bonuses));
        report.push_str(&format!("Planned payments: {}\n\n", finance.total_payments));

        report.push_str("Per member:\n");
        for member in members {
            let bonus = member.calculate_bonus_at(self.as_of);
            report.push_str(&format!(
                "{} (ID: {}): Salary: {}, Bonus: {}, Total: {}\n",
                member.name,
                member.id,
                member.base_salary,
                bonus,
                member.base_salary + bonus
            ));
        }
        report
    }

    /// Session totals, then count and mean intensity per member
    pub fn training_report(&self, members: &[Member]) -> String {
        let stats = StatisticsEngine::as_of(self.as_of);

        let mut report = self.header(ReportKind::Training);
        report.push_str(&format!("Total trainings: {}\n", stats.total_training_count(members)));
        report.push_str(&format!(
            "Average intensity: {:.1}/10\n\n",
            stats.average_intensity(members)
        ));

        report.push_str("Per member:\n");
        for member in members {
            report.push_str(&format!(
                "{} (ID: {}): {} trainings, Average intensity: {:.1}\n",
                member.name,
                member.id,
                member.training_count(),
                member.average_intensity()
            ));
        }
        report
    }

    /// Members grouped under each role present, in role order
    pub fn role_report(&self, members: &[Member]) -> String {
        let mut by_role: BTreeMap<Role, Vec<&Member>> = BTreeMap::new();
        for member in members {
            by_role.entry(member.role()).or_default().push(member);
        }

        let mut report = self.header(ReportKind::Roles);
        for (role, group) in by_role {
            report.push_str(&format!("{} ({}):\n", role, group.len()));
            for member in group {
                report.push_str(&format!("  {} - {}\n", member.name, member.team));
            }
            report.push('\n');
        }
        report
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::members::MemberDraft;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn builder() -> ReportBuilder {
        let generated_at = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        ReportBuilder::at(generated_at, date(2024, 6, 30))
    }

    fn members() -> Vec<Member> {
        let mut ana = Member::from_draft(
            1,
            MemberDraft::player("Ana", 22, "First Team", "Forward", 9, Decimal::from(50_000)),
            date(2024, 1, 1),
        );
        ana.score_goal();
        ana.score_goal();
        ana.train(60, 8, date(2024, 2, 1));
        ana.train(30, 6, date(2024, 2, 2));

        let mut cleo = Member::from_draft(
            2,
            MemberDraft::coach("Cleo", 45, "Academy", "Tactics", "UEFA A", Decimal::from(60_000)),
            date(2020, 1, 1),
        );
        cleo.train(90, 9, date(2024, 2, 1));

        vec![ana, cleo]
    }

    #[test]
    fn test_members_report_lists_everyone() {
        let report = builder().members_report(&members());

        assert!(report.starts_with("=== CLUB MEMBERS REPORT ===\nGenerated: 2024-06-30 12:00:00\n\n"));
        assert!(report.contains("Total members: 2\n"));
        assert!(report.contains("ID: 1 | Name: Ana"));
        assert!(report.contains("Name: Cleo | Age: 45 | Role: Coach | Team: Academy | Experience: 4 yrs"));
    }

    #[test]
    fn test_financial_report_totals() {
        let report = builder().financial_report(&members());

        // Cleo: 60000 * 4 * 0.1 + one successful session * 200
        assert!(report.contains("Total salaries: 110000\n"));
        assert!(report.contains("Total bonuses: 26200\n"));
        assert!(report.contains("Planned payments: 136200\n"));
        assert!(report.contains("Ana (ID: 1): Salary: 50000, Bonus: 2000, Total: 52000\n"));
        assert!(report.contains("Cleo (ID: 2): Salary: 60000, Bonus: 24200, Total: 84200\n"));
    }

    #[test]
    fn test_training_report_averages() {
        let report = builder().training_report(&members());

        assert!(report.contains("Total trainings: 3\n"));
        assert!(report.contains("Average intensity: 8.0/10\n"));
        assert!(report.contains("Ana (ID: 1): 2 trainings, Average intensity: 7.0\n"));
        assert!(report.contains("Cleo (ID: 2): 1 trainings, Average intensity: 9.0\n"));
    }

    #[test]
    fn test_role_report_groups_in_role_order() {
        let mut roster = members();
        roster.reverse();
        let report = builder().role_report(&roster);

        assert_eq!(
            report,
            "=== ROLE REPORT ===\nGenerated: 2024-06-30 12:00:00\n\n\
             Player (1):\n  Ana - First Team\n\n\
             Coach (1):\n  Cleo - Academy\n\n"
        );
    }

    #[test]
    fn test_empty_roster_reports() {
        let builder = builder();
        for kind in ReportKind::all() {
            let report = builder.render(kind, &[]);
            assert!(report.starts_with(&format!("=== {} ===", kind.title())));
        }
        assert!(builder.training_report(&[]).contains("Average intensity: 0.0/10"));
        assert!(builder.financial_report(&[]).contains("Total salaries: 0\n"));
    }
}
