use anyhow::{Context, Result};
use club_roster::{
    export_journal_csv, export_report, export_roster_csv, export_roster_json, import_roster_json,
    ClubConfig, ClubManager, Member, MemberDraft, ReportKind, StatisticsEngine, TransferKind,
    VERSION,
};
use rust_decimal::Decimal;
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "club_roster=info".into()),
        )
        .init();

    let config = ClubConfig::from_env()?;
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("export") => {
            let dir = args.get(2).context("Usage: club-roster export <dir>")?;
            run_export(config, Path::new(dir))?;
        }
        Some("summary") => {
            let file = args.get(2).context("Usage: club-roster summary <roster.json>")?;
            run_summary(config, Path::new(file))?;
        }
        Some("demo") | None => run_demo(config)?,
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            eprintln!("   Usage: club-roster [demo | export <dir> | summary <roster.json>]");
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Seed a small club and exercise every lifecycle path
fn seed_demo(config: ClubConfig) -> Result<ClubManager> {
    let mut club = ClubManager::with_config(config);
    let joined = |y, m, d| chrono::NaiveDate::from_ymd_opt(y, m, d).context("invalid demo date");

    let striker = club
        .add_member_on(
            MemberDraft::player("Lena Ortiz", 24, "First Team", "Striker", 9, Decimal::from(85_000)),
            joined(2021, 7, 1)?,
        )?
        .value
        .id;
    let keeper = club
        .add_member_on(
            MemberDraft::player("Tomas Berg", 31, "First Team", "Goalkeeper", 1, Decimal::from(72_000)),
            joined(2018, 7, 1)?,
        )?
        .value
        .id;
    let coach = club
        .add_member_on(
            MemberDraft::coach("Ines Maro", 46, "First Team", "Tactics", "UEFA Pro", Decimal::from(120_000)),
            joined(2016, 1, 15)?,
        )?
        .value
        .id;
    let academy = club
        .add_coach("Piet Lund", 38, "Academy", "Fitness", "UEFA B", Decimal::from(48_000))?
        .value
        .id;
    let director = club
        .add_manager("Sofia Kran", 52, "Front Office", "Sporting", "Transfers", Decimal::from(150_000))?
        .value
        .id;

    for (id, minutes, intensity) in [
        (striker, 90, 8),
        (striker, 60, 6),
        (keeper, 75, 7),
        (coach, 90, 9),
        (academy, 45, 5),
        (director, 120, 3),
    ] {
        club.conduct_training(id, minutes, intensity)?;
    }

    club.record_goal(striker);
    club.record_goal(striker);
    club.record_assist(striker);
    club.sign_contract(director, Decimal::from(400_000));

    club.adjust_salary(striker, Decimal::from(95_000))?;
    club.edit_team(academy, "Reserves");
    club.edit_position(keeper, "Sweeper Keeper");
    club.record_event(
        coach,
        TransferKind::ContractExtension,
        "Extended through 2028",
        Decimal::from(125_000),
    );

    info!(members = club.member_count(), "Demo club seeded");
    Ok(club)
}

fn run_demo(config: ClubConfig) -> Result<()> {
    println!("🏟️  Club Roster v{}", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let club = seed_demo(config)?;

    println!("\n👥 Members");
    for member in club.all() {
        println!("  {}", member);
    }

    print_statistics(&club.all());

    let overall = club.overall_statistics();
    println!("\n📈 Overall");
    println!("  Ledger budget: {}", overall.total_salary_budget);
    println!("  Ledger average: {}", overall.average_salary);
    println!("  Trainings indexed: {}", overall.total_trainings);
    println!("  Journal entries: {}", overall.total_transfers);

    println!("\n{}", club.generate_transfer_report());
    Ok(())
}

fn run_export(config: ClubConfig, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {:?}", dir))?;

    let club = seed_demo(config)?;
    let members = club.all();

    let csv_count = export_roster_csv(&members, dir.join("roster.csv"))?;
    let json_count = export_roster_json(&members, dir.join("roster.json"))?;
    let journal_count = export_journal_csv(club.journal(), dir.join("journal.csv"))?;

    println!("✓ roster.csv: {} members", csv_count);
    println!("✓ roster.json: {} members", json_count);
    println!("✓ journal.csv: {} entries", journal_count);

    for kind in ReportKind::all() {
        export_report(&club.generate_report(kind), dir.join(kind.file_name()))?;
        println!("✓ {}", kind.file_name());
    }
    Ok(())
}

fn run_summary(config: ClubConfig, file: &Path) -> Result<()> {
    let members = import_roster_json(file, &config)?;
    println!("📂 Loaded {} members from {:?}", members.len(), file);

    let mut club = ClubManager::with_config(config);
    club.set_members(members);
    club.reseed_ledger();

    print_statistics(&club.all());
    println!("\n{}", club.generate_report(ReportKind::Roles));
    Ok(())
}

fn print_statistics(members: &[Member]) {
    let stats = StatisticsEngine::new();

    println!("\n📊 Statistics");
    for (role, count) in stats.role_distribution(members) {
        println!("  {}: {} members", role, count);
    }
    for (role, salary) in stats.average_salary_by_role(members) {
        println!("  Average {} salary: {}", role, salary);
    }

    let age = stats.age_statistics(members);
    println!("  Age: min {} / max {} / avg {:.1}", age.min, age.max, age.average);

    let salary = stats.salary_statistics(members);
    println!(
        "  Salary: min {} / max {} / total {} / avg {}",
        salary.min, salary.max, salary.total, salary.average
    );

    let finance = stats.finance_summary(members);
    println!(
        "  Payroll: {} base + {} bonuses = {}",
        finance.total_salaries, finance.total_bonuses, finance.total_payments
    );

    println!("\n🏆 Top earners");
    for member in stats.top_by_salary(members, 3) {
        println!("  #{} {} ({})", member.id, member.name, member.base_salary);
    }
    println!("\n⚽ Top players");
    for member in stats.top_players_by_performance(members, 3) {
        println!("  #{} {} rating {:.2}", member.id, member.name, member.performance_rating());
    }
}
