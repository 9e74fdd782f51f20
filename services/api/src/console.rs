use std::io::{self, Write};

use crate::infra::build_service;
use clap::Args;
use hospital_referral::config::AppConfig;
use hospital_referral::error::AppError;
use hospital_referral::referral::{RecommendationReport, ReferralRequest, SeverityResult};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Free-text complaint used for triage
    #[arg(long)]
    pub(crate) complaint: String,
    /// Patient name echoed in the report
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    /// Patient age in years
    #[arg(long, default_value_t = 0)]
    pub(crate) age: u32,
    /// Requested specialty
    #[arg(long, default_value = "Umum")]
    pub(crate) specialty: String,
    /// Hour of day to evaluate (defaults to the current local hour)
    #[arg(long)]
    pub(crate) hour: Option<u32>,
    /// Seed for the simulated snapshots, overriding REFERRAL_SNAPSHOT_SEED
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print each facility's reasons and snapshot details
    #[arg(long)]
    pub(crate) verbose: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Free-text complaint to triage
    pub(crate) complaint: String,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        complaint,
        name,
        age,
        specialty,
        hour,
        seed,
        verbose,
    } = args;

    let mut config = AppConfig::load()?;
    if seed.is_some() {
        config.referral.snapshot_seed = seed;
    }

    let service = build_service(&config.referral)?;
    let request = ReferralRequest {
        name,
        age,
        complaint,
        specialty,
    };

    let report = service.recommend(&request, hour)?;
    render_report(&mut io::stdout().lock(), &report, verbose)?;
    Ok(())
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_service(&config.referral)?;
    let severity = service.classify(&args.complaint);
    render_severity(&mut io::stdout().lock(), &severity)?;
    Ok(())
}

fn render_severity<W: Write>(out: &mut W, severity: &SeverityResult) -> io::Result<()> {
    writeln!(out, "{} ({})", severity.label, severity.tier.code())
}

fn render_report<W: Write>(
    out: &mut W,
    report: &RecommendationReport,
    verbose: bool,
) -> io::Result<()> {
    let patient = &report.patient;
    writeln!(out, "Referral recommendation")?;
    if !patient.name.is_empty() {
        writeln!(out, "Patient: {} ({} yrs)", patient.name, patient.age)?;
    }
    writeln!(out, "Complaint: {}", patient.complaint)?;
    writeln!(
        out,
        "Severity: {} ({})",
        patient.severity_label,
        patient.severity_code.code()
    )?;
    writeln!(out, "Specialty: {}", patient.specialty)?;
    writeln!(out, "Generated: {}", report.timestamp.to_rfc3339())?;

    if report.recommendations.is_empty() {
        writeln!(out, "\nNo candidate hospitals")?;
        return Ok(());
    }

    writeln!(out, "\nRanked hospitals")?;
    for (rank, entry) in report.recommendations.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. [{:>3}] {} - {} ({})",
            rank + 1,
            entry.score,
            entry.hospital_name,
            entry.priority.label(),
            entry.hospital_tier.label()
        )?;

        if verbose {
            for reason in &entry.reasons {
                writeln!(out, "      - {reason}")?;
            }
            let details = &entry.details;
            writeln!(
                out,
                "      beds {} | ER waiting {} | doctors {} | specialists {} | occupancy {:.1}% | traffic {} | wait ~{} min",
                details.beds_available,
                details.er_waiting,
                details.doctors_on_duty,
                details.specialists_available,
                details.occupancy_rate,
                details.current_traffic,
                details.estimated_wait_minutes
            )?;
        }
    }
    Ok(())
}
