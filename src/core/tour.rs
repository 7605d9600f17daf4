use crate::config::toml_config::TourConfig;
use crate::domain::person::{Student, Teacher};
use crate::domain::tax::income_tax;
use crate::domain::{Account, Named, Ride, RideCounter, SeatArrangement};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TourReport {
    pub generated_at: DateTime<Utc>,
    pub account: AccountSection,
    pub seats: SeatArrangement,
    pub rides: RideSection,
    pub people: Vec<PersonLine>,
}

impl TourReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountSection {
    pub snapshot: Account,
    pub balance: f64,
    pub account_tax: f64,
    pub income_tax: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RideSection {
    pub active: i64,
    pub speed: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonLine {
    pub role: &'static str,
    pub full_name: String,
    pub activity: String,
}

/// Runs each lesson once against a scenario and collects what happened.
///
/// The ride counter is injected so callers decide how far it is shared.
pub struct Tour {
    config: TourConfig,
    rides: RideCounter,
}

impl Tour {
    pub fn new(config: TourConfig, rides: RideCounter) -> Self {
        Self { config, rides }
    }

    pub fn run(&self) -> Result<TourReport> {
        tracing::info!("🚀 Starting lesson tour");

        tracing::info!("💳 Accounts...");
        let account = self.account_phase()?;
        tracing::info!("Balance after deposits: {}", account.balance);

        tracing::info!("💺 Seating...");
        let seats = self.seating_phase();
        tracing::info!("{} seats assigned", seats.len());

        tracing::info!("🎢 Rides...");
        let rides = self.ride_phase();
        tracing::info!("{} rides active", rides.active);

        tracing::info!("🎓 People...");
        let people = self.people_phase();
        tracing::info!("{} people introduced", people.len());

        tracing::info!("✅ Tour complete");

        Ok(TourReport {
            generated_at: Utc::now(),
            account,
            seats,
            rides,
            people,
        })
    }

    fn account_phase(&self) -> Result<AccountSection> {
        let cfg = &self.config.account;
        let mut account = Account::new(cfg.id, cfg.owner.clone(), cfg.opening_balance);

        // 存款失敗直接往上拋，不在這裡處理
        for amount in &cfg.deposits {
            account.deposit(*amount)?;
        }

        if let Some(nickname) = &cfg.nickname {
            account.nickname = Some(nickname.clone());
        }

        let account_tax = account.calculate_tax(self.config.tax.taxable_amount);
        let income_tax = income_tax(self.config.tax.income, self.config.tax_year());
        tracing::debug!(
            "Tax on {}: {}, income tax ({}) on {}: {}",
            self.config.tax.taxable_amount,
            account_tax,
            self.config.tax_year(),
            self.config.tax.income,
            income_tax
        );

        Ok(AccountSection {
            balance: account.balance(),
            snapshot: account,
            account_tax,
            income_tax,
        })
    }

    fn seating_phase(&self) -> SeatArrangement {
        self.config
            .seats
            .iter()
            .map(|(label, occupant)| (label.as_str(), occupant.as_str()))
            .collect()
    }

    fn ride_phase(&self) -> RideSection {
        let cfg = &self.config.rides;
        let rides: Vec<Ride> = (0..cfg.started)
            .map(|_| Ride::with_speed(&self.rides, cfg.speed))
            .collect();

        for ride in &rides {
            ride.start();
        }
        for ride in rides.iter().take(cfg.stopped as usize) {
            ride.stop();
        }

        RideSection {
            active: self.rides.active(),
            speed: rides
                .first()
                .map(Ride::speed)
                .unwrap_or_else(|| Ride::with_speed(&self.rides, cfg.speed).speed()),
        }
    }

    fn people_phase(&self) -> Vec<PersonLine> {
        let people = &self.config.people;
        let mut lines = Vec::with_capacity(people.students.len() + people.teachers.len());

        for student in &people.students {
            lines.push(student_line(student));
        }
        for teacher in &people.teachers {
            lines.push(teacher_line(teacher));
        }

        lines
    }
}

fn student_line(student: &Student) -> PersonLine {
    PersonLine {
        role: "student",
        full_name: student.full_name(),
        activity: student.take_test(),
    }
}

fn teacher_line(teacher: &Teacher) -> PersonLine {
    PersonLine {
        role: "teacher",
        full_name: teacher.full_name(),
        activity: teacher.walk().to_string(),
    }
}
