use crate::infra::{InMemoryLeaderboardStore, InMemoryScoreStore, InMemoryViolationLog};
use chrono::{Duration, Local, NaiveDate, Utc};
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use traffic_watch::engine::clock::SystemClock;
use traffic_watch::engine::fines::{
    FineCalculator, FinePolicy, FineService, FineServiceError, Severity, VehicleId, ViolationId,
    ViolationSnapshot,
};
use traffic_watch::engine::scoring::{ScoringService, UserId};
use traffic_watch::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct FineComputeArgs {
    /// Base amount for the violation class, e.g. 500.00
    #[arg(long)]
    pub(crate) base_amount: Decimal,
    /// Severity level 1-4
    #[arg(long)]
    pub(crate) severity: u8,
    /// Prior violations for the vehicle inside the repeat window
    #[arg(long, default_value_t = 0)]
    pub(crate) repeat_count: u32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Leaderboard date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

pub(crate) fn run_fine_compute(args: FineComputeArgs) -> Result<(), AppError> {
    let severity = Severity::from_level(args.severity)
        .map_err(|err| AppError::Fine(FineServiceError::Input(err.into())))?;

    let calculator = FineCalculator::new(FinePolicy::default());
    let draft = calculator
        .draft(severity, args.base_amount, args.repeat_count)
        .map_err(|err| AppError::Fine(err.into()))?;

    println!("Fine breakdown");
    println!(
        "Severity: {} (level {})",
        draft.severity.label(),
        draft.severity.level()
    );
    println!("Base amount: {}", draft.base_amount);
    println!("Severity multiplier: {}", draft.severity_multiplier);
    println!(
        "Repeat offenses in window: {} (multiplier {})",
        draft.repeat_count, draft.repeat_offender_multiplier
    );
    println!("Final amount: {}", draft.final_amount);
    if draft.discount_percentage > 0 {
        println!(
            "Rehabilitation discount: {}% -> payable {}",
            draft.discount_percentage, draft.amount_after_discount
        );
    } else {
        println!("Payable: {}", draft.amount_after_discount);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let now = Utc::now();

    println!("Traffic watch demo");

    // A vehicle with three sightings inside the repeat window.
    let history = Arc::new(InMemoryViolationLog::default());
    let repeat_vehicle = VehicleId("KA-01-AB-1234".to_string());
    for days_ago in [15, 40, 90] {
        history.record(repeat_vehicle.clone(), now - Duration::days(days_ago));
    }

    let fine_service = FineService::new(history, Arc::new(SystemClock), FinePolicy::default());
    let violation = ViolationSnapshot {
        violation_id: ViolationId("vio-demo-001".to_string()),
        vehicle: repeat_vehicle,
        severity: Severity::High,
        occurred_at: now,
        is_verified: true,
    };

    let record = fine_service
        .compute_fine(&violation, dec!(500.00))
        .map_err(AppError::Fine)?;

    println!("\nFine for {}", record.violation_id.0);
    println!(
        "- base {} x severity {} x repeat {} = {}",
        record.base_amount,
        record.severity_multiplier,
        record.repeat_offender_multiplier,
        record.final_amount
    );
    println!(
        "- discount {}%, payable {}, due {}",
        record.discount_percentage, record.amount_after_discount, record.due_date
    );

    // Reporters earning points toward the day's leaderboard.
    let scoring_service = ScoringService::new(
        Arc::new(InMemoryScoreStore::default()),
        Arc::new(InMemoryLeaderboardStore::default()),
    );

    let awards: &[(&str, &[i64])] = &[
        ("asha", &[400, 250]),
        ("bala", &[650]),
        ("chitra", &[400, 250]),
    ];
    for (id, rewards) in awards {
        let reporter = UserId(id.to_string());
        scoring_service
            .register_user(reporter.clone())
            .map_err(AppError::Scoring)?;
        for reward in rewards.iter() {
            scoring_service
                .award_report_approval(&reporter, *reward)
                .map_err(AppError::Scoring)?;
        }
        scoring_service
            .confirm_violation(&reporter)
            .map_err(AppError::Scoring)?;
    }

    let entries = scoring_service
        .generate_leaderboard(date)
        .map_err(AppError::Scoring)?;

    println!("\nLeaderboard for {date}");
    for entry in &entries {
        println!(
            "- #{} {} | {} pts | {} reports | {} verified | {}",
            entry.rank,
            entry.user_id.0,
            entry.points,
            entry.reports_submitted,
            entry.verified_reports,
            entry.badge.label()
        );
    }

    Ok(())
}
