// Cross-view behaviour of the club facade: roster, ledger, training index
// and journal driven together.

use chrono::NaiveDate;
use chrono::{TimeZone, Utc};
use club_roster::{
    ClubError, ClubManager, Member, MemberDraft, Mutation, Payable, ReportBuilder, ReportKind,
    Role, StatisticsEngine, SyncWarning, Trainable, TransferKind,
};
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn add_player(club: &mut ClubManager, name: &str, salary: i64) -> u32 {
    club.add_player(name, 25, "First Team", "Forward", 9, Decimal::from(salary))
        .unwrap()
        .value
        .id
}

#[test]
fn test_add_player_then_find_matches_inputs() {
    let mut club = ClubManager::new();

    for (age, salary) in [(16, 100), (25, 50_000), (70, 1_000_000)] {
        let added = club
            .add_player("Edge", age, "U23", "Defender", 4, Decimal::from(salary))
            .unwrap();
        assert!(added.warnings.is_empty());

        let member = club.find_by_id(added.value.id).unwrap();
        assert_eq!(member.name, "Edge");
        assert_eq!(member.age, age);
        assert_eq!(member.team, "U23");
        assert_eq!(member.base_salary, Decimal::from(salary));
        assert_eq!(member.role(), Role::Player);
        assert_eq!(member.as_player().unwrap().position, "Defender");
        assert_eq!(member.as_player().unwrap().jersey_number, 4);
        assert_eq!(club.salary_from_ledger(member.id), Decimal::from(salary));
    }
}

#[test]
fn test_salary_history_records_every_adjustment() {
    let mut club = ClubManager::new();
    let id = add_player(&mut club, "A", 50_000);

    let raises = [52_000, 48_000, 60_000, 60_000, 75_500];
    for salary in raises {
        let outcome = club.adjust_salary(id, Decimal::from(salary)).unwrap();
        assert!(outcome.is_clean());
    }

    let history = club.salary_history(id).unwrap();
    assert_eq!(history.len(), raises.len() + 1);

    let recorded: Vec<Decimal> = history.all_records().iter().map(|r| r.salary).collect();
    let mut expected = vec![Decimal::from(50_000)];
    expected.extend(raises.iter().map(|s| Decimal::from(*s)));
    assert_eq!(recorded, expected);

    assert_eq!(history.current_salary(), Decimal::from(75_500));
    assert_eq!(club.find_by_id(id).unwrap().base_salary, Decimal::from(75_500));
    assert_eq!(
        club.journal().by_type(TransferKind::SalaryChange).len(),
        raises.len()
    );
}

#[test]
fn test_training_indexes_agree() {
    let mut club = ClubManager::new();
    let a = add_player(&mut club, "A", 40_000);
    let b = club
        .add_coach("B", 40, "First Team", "Tactics", "UEFA A", Decimal::from(60_000))
        .unwrap()
        .value
        .id;
    let c = club
        .add_manager("C", 55, "Office", "Ops", "Travel", Decimal::from(70_000))
        .unwrap()
        .value
        .id;

    let sessions = [
        (a, 60, 8, date(2024, 3, 1)),
        (a, 30, 4, date(2024, 3, 2)),
        (b, 90, 9, date(2024, 3, 1)),
        (c, 45, 2, date(2024, 3, 3)),
        (b, 15, 1, date(2024, 3, 3)),
        (a, 240, 10, date(2024, 3, 3)),
    ];
    for (id, minutes, intensity, day) in sessions {
        club.conduct_training_on(id, minutes, intensity, day).unwrap();
    }

    let index = club.training_index();
    let by_member: usize = index.count_by_member().values().sum();
    let by_date: usize = index.count_by_date().values().sum();
    assert_eq!(index.total_trainings(), sessions.len());
    assert_eq!(by_member, sessions.len());
    assert_eq!(by_date, sessions.len());

    assert_eq!(club.most_active_members(2), vec![a, b]);
    assert_eq!(index.most_active_days(1), vec![date(2024, 3, 3)]);

    let by_role = club.training_distribution_by_role();
    assert_eq!(by_role.get(&Role::Player), Some(&3));
    assert_eq!(by_role.get(&Role::Coach), Some(&2));
    assert_eq!(by_role.get(&Role::Manager), Some(&1));

    // Only the intensity-9 session counts as successful
    assert_eq!(club.find_by_id(b).unwrap().success_rate(), 50.0);
}

#[test]
fn test_remove_member_journals_pre_removal_snapshot() {
    let mut club = ClubManager::new();
    let id = add_player(&mut club, "Leaving", 45_000);
    club.edit_team(id, "Loan Squad");

    let outcome = club.remove_member(id);
    assert!(outcome.is_clean());
    assert_eq!(outcome.value().map(|m| m.name.as_str()), Some("Leaving"));

    assert!(club.find_by_id(id).is_none());
    assert_eq!(club.salary_from_ledger(id), Decimal::ZERO);
    assert!(club.salary_history(id).is_none());

    let latest = club.transfer_records()[0];
    assert_eq!(latest.kind, TransferKind::TransferOut);
    assert_eq!(latest.member_id, id);
    assert_eq!(latest.member_name, "Leaving");
    assert_eq!(latest.role, Role::Player);
    assert_eq!(latest.team, "Loan Squad");
    assert_eq!(latest.amount, Decimal::from(45_000));

    // Journal keeps the full story after the member is gone
    assert_eq!(club.transfer_records_by_member(id).len(), 3);
    assert_eq!(club.remove_member(id), Mutation::NotFound(id));
}

#[test]
fn test_clear_all_is_idempotent() {
    let mut club = ClubManager::new();
    let id = add_player(&mut club, "A", 40_000);
    club.conduct_training(id, 60, 5).unwrap();

    club.clear_all();
    let once = (
        club.member_count(),
        club.ledger().len(),
        club.journal().len(),
        club.training_index().total_trainings(),
    );
    club.clear_all();
    let twice = (
        club.member_count(),
        club.ledger().len(),
        club.journal().len(),
        club.training_index().total_trainings(),
    );

    assert_eq!(once, (0, 0, 0, 0));
    assert_eq!(once, twice);
    assert!(StatisticsEngine::new().role_distribution(&club.all()).is_empty());

    // Id counter restarts
    assert_eq!(add_player(&mut club, "B", 40_000), 1);
}

#[test]
fn test_bonus_for_fresh_player() {
    let mut club = ClubManager::new();
    let id = add_player(&mut club, "A", 50_000);

    assert_eq!(club.find_by_id(id).unwrap().calculate_bonus(), Decimal::ZERO);

    club.record_goal(id);
    assert_eq!(club.find_by_id(id).unwrap().calculate_bonus(), Decimal::from(1000));
}

#[test]
fn test_fitness_caps_at_hundred() {
    let mut club = ClubManager::new();
    let fresh = add_player(&mut club, "Fresh", 40_000);
    let tired = add_player(&mut club, "Tired", 40_000);

    club.conduct_training(fresh, 60, 8).unwrap();
    let fitness = club.find_by_id(fresh).unwrap().as_player().unwrap().fitness_level;
    assert_eq!(fitness, 100.0);

    let mut members = club.all();
    for member in members.iter_mut() {
        if member.id == tired {
            member.as_player_mut().unwrap().set_fitness_level(50.0);
        }
    }
    club.set_members(members);

    club.conduct_training(tired, 60, 8).unwrap();
    let fitness = club.find_by_id(tired).unwrap().as_player().unwrap().fitness_level;
    assert!((fitness - 54.8).abs() < 1e-9);
}

#[test]
fn test_bulk_load_leaves_views_and_surfaces_warnings() {
    let mut club = ClubManager::new();
    add_player(&mut club, "Before", 40_000);
    let journal_before = club.journal().len();

    let loaded = vec![
        Member::from_draft(
            12,
            MemberDraft::player("Imported", 27, "B Team", "Winger", 7, Decimal::from(33_000)),
            date(2020, 9, 1),
        ),
        Member::from_draft(
            20,
            MemberDraft::manager("Imported M", 44, "Office", "Legal", "Contracts", Decimal::from(90_000)),
            date(2015, 2, 1),
        ),
    ];
    club.set_members(loaded);

    assert_eq!(club.member_count(), 2);
    assert_eq!(club.journal().len(), journal_before);
    assert_eq!(club.salary_from_ledger(12), Decimal::ZERO);

    // Member write stands even though the ledger cannot follow
    let outcome = club.adjust_salary(12, Decimal::from(35_000)).unwrap();
    assert!(outcome.is_applied());
    assert!(!outcome.is_clean());
    assert_eq!(outcome.warnings(), &[SyncWarning::LedgerEntryMissing { id: 12 }]);
    assert_eq!(club.find_by_id(12).unwrap().base_salary, Decimal::from(35_000));
    assert_eq!(club.salary_from_ledger(12), Decimal::ZERO);

    // New ids continue past the loaded ones
    assert_eq!(add_player(&mut club, "After", 40_000), 21);
}

#[test]
fn test_rejected_input_changes_nothing() {
    let mut club = ClubManager::new();
    let id = add_player(&mut club, "A", 50_000);
    let journal_len = club.journal().len();

    assert!(matches!(
        club.adjust_salary(id, Decimal::from(99)),
        Err(ClubError::InvalidSalary { .. })
    ));
    assert!(matches!(
        club.conduct_training(id, 241, 5),
        Err(ClubError::InvalidTrainingDuration { .. })
    ));
    assert!(matches!(
        club.conduct_training(id, 60, 0),
        Err(ClubError::InvalidTrainingIntensity { .. })
    ));
    assert!(matches!(
        club.add_manager("M", 71, "Office", "Ops", "All", Decimal::from(50_000)),
        Err(ClubError::InvalidAge { .. })
    ));

    let member = club.find_by_id(id).unwrap();
    assert_eq!(member.base_salary, Decimal::from(50_000));
    assert_eq!(member.training_count(), 0);
    assert_eq!(club.member_count(), 1);
    assert_eq!(club.journal().len(), journal_len);
    assert_eq!(club.salary_history(id).unwrap().len(), 1);
    assert_eq!(club.training_index().total_trainings(), 0);
}

#[test]
fn test_missing_ids_are_not_errors() {
    let mut club = ClubManager::new();

    assert!(club.find_by_id(1).is_none());
    assert_eq!(club.salary_from_ledger(1), Decimal::ZERO);
    assert!(club.training_index().by_member(1).is_empty());
    assert!(club.transfer_records_by_member(1).is_empty());

    assert_eq!(club.remove_member(1), Mutation::NotFound(1));
    assert_eq!(club.edit_team(1, "X"), Mutation::NotFound(1));
    assert_eq!(club.edit_position(1, "X"), Mutation::NotFound(1));
    assert_eq!(club.adjust_salary(1, Decimal::from(1000)).unwrap(), Mutation::NotFound(1));
    assert!(!club.pay_salary(1, date(2024, 1, 1)).successful);
    assert!(club.journal().is_empty());
}

#[test]
fn test_ledger_and_roster_statistics_agree() {
    let mut club = ClubManager::new();
    add_player(&mut club, "A", 40_000);
    add_player(&mut club, "B", 45_001);
    club.add_coach("C", 50, "First Team", "GK", "B", Decimal::from(70_000))
        .unwrap();

    let from_ledger = club.ledger_salary_by_role();
    let from_roster = StatisticsEngine::new().average_salary_by_role(&club.all());
    assert_eq!(from_ledger, from_roster);
    // (40000 + 45001) / 2 = 42500.5
    assert_eq!(from_ledger.get(&Role::Player), Some(&Decimal::new(4250050, 2)));
}

#[test]
fn test_bulk_load_with_lower_ids_keeps_new_ids_fresh() {
    let mut club = ClubManager::new();
    let a = add_player(&mut club, "A", 40_000);
    add_player(&mut club, "B", 41_000);
    let c = add_player(&mut club, "C", 42_000);
    club.adjust_salary(c, Decimal::from(43_000)).unwrap();

    let kept: Vec<Member> = club.all().into_iter().filter(|m| m.id == a).collect();
    club.set_members(kept);

    let d = add_player(&mut club, "D", 50_000);
    assert!(d > c);
    assert_eq!(d, 4);

    // D starts with a clean history and journal trail
    assert_eq!(club.salary_history(d).unwrap().len(), 1);
    assert_eq!(club.salary_from_ledger(d), Decimal::from(50_000));
    let trail = club.transfer_records_by_member(d);
    assert_eq!(trail.len(), 1);
    assert!(trail.iter().all(|r| r.member_name == "D"));

    // Only a full reset restarts numbering
    club.clear_all();
    assert_eq!(add_player(&mut club, "E", 40_000), 1);
}

#[test]
fn test_bulk_load_clamps_fitness() {
    let mut club = ClubManager::new();
    let id = add_player(&mut club, "A", 40_000);

    let mut members = club.all();
    members[0].as_player_mut().unwrap().fitness_level = 150.0;
    club.set_members(members);
    assert_eq!(club.find_by_id(id).unwrap().as_player().unwrap().fitness_level, 100.0);

    club.conduct_training(id, 60, 8).unwrap();
    assert_eq!(club.find_by_id(id).unwrap().as_player().unwrap().fitness_level, 100.0);
}

#[test]
fn test_backdated_payment_bonus_uses_payment_date() {
    let mut club = ClubManager::new();
    let id = club
        .add_member_on(
            MemberDraft::manager("M", 45, "Office", "Ops", "Travel", Decimal::from(50_000)),
            date(2020, 1, 1),
        )
        .unwrap()
        .value
        .id;

    // 3 full years on the payment date: 50000 * 3 * 0.1
    let paid = club.pay_salary(id, date(2023, 1, 1));
    assert!(paid.successful);
    assert_eq!(paid.bonus, Decimal::from(15_000));
    assert_eq!(paid.amount, Decimal::from(65_000));
}

#[test]
fn test_reports_cover_current_roster() {
    let mut club = ClubManager::new();
    let a = add_player(&mut club, "Ana", 40_000);
    club.add_coach("Cleo", 40, "Academy", "Tactics", "UEFA A", Decimal::from(60_000))
        .unwrap();
    club.conduct_training_on(a, 60, 8, date(2024, 3, 1)).unwrap();

    let builder = ReportBuilder::at(
        Utc.with_ymd_and_hms(2024, 3, 2, 9, 30, 0).unwrap(),
        date(2024, 3, 2),
    );

    let members = club.generate_report_with(ReportKind::Members, &builder);
    assert!(members.starts_with("=== CLUB MEMBERS REPORT ===\nGenerated: 2024-03-02 09:30:00\n"));
    assert!(members.contains("Total members: 2\n"));

    let training = club.generate_report_with(ReportKind::Training, &builder);
    assert!(training.contains("Total trainings: 1\n"));
    assert!(training.contains("Ana (ID: 1): 1 trainings, Average intensity: 8.0\n"));

    let roles = club.generate_report_with(ReportKind::Roles, &builder);
    assert!(roles.contains("Player (1):\n  Ana - First Team\n"));
    assert!(roles.contains("Coach (1):\n  Cleo - Academy\n"));

    club.remove_member(a);
    let roles = club.generate_report_with(ReportKind::Roles, &builder);
    assert!(!roles.contains("Player"));
}
