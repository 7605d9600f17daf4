use anyhow::Context;
use clap::Parser;
use lesson_log::utils::error::{ErrorSeverity, LessonError};
use lesson_log::utils::{logger, validation::Validate};
use lesson_log::{CliConfig, RideCounter, Tour, TourConfig, TourReport};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting lesson-log");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let scenario = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading scenario from: {}", path);
            match TourConfig::from_file(path) {
                Ok(scenario) => scenario,
                Err(e) => fail(&e),
            }
        }
        None => TourConfig::default(),
    };

    if let Err(e) = scenario.validate() {
        fail(&e);
    }

    // 整個程序共用一個計數器
    let rides = RideCounter::new();
    let tour = Tour::new(scenario, rides);

    match tour.run() {
        Ok(report) => {
            if config.json {
                let json = report.to_json().context("failed to encode tour report")?;
                println!("{}", json);
            } else {
                print_report(&report);
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &LessonError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}

fn print_report(report: &TourReport) {
    let account = &report.account.snapshot;
    println!("💳 Account #{} ({})", account.id(), account.owner);
    if let Some(nickname) = &account.nickname {
        println!("   nickname: {}", nickname);
    }
    println!("   balance: {}", report.account.balance);
    println!("   tax: {}", report.account.account_tax);
    println!("   income tax: {}", report.account.income_tax);

    println!("💺 Seats");
    for (label, occupant) in report.seats.iter() {
        println!("   {}: {}", label, occupant);
    }

    println!("🎢 Rides: {} active at speed {}", report.rides.active, report.rides.speed);

    println!("🎓 People");
    for line in &report.people {
        println!("   [{}] {}: {}", line.role, line.full_name, line.activity);
    }
}

