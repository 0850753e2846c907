use clap::{Parser, Subcommand};
use kcal_core::rollup::{cleanup_processed_logs, snapshots_to_csv_and_archive};
use kcal_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kcal")]
#[command(about = "Daily calorie target and energy expenditure estimator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show calorie target, weight trend and activity burn for a profile
    Report {
        /// Profile file (.json or .toml)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Store a snapshot of the profile
        #[arg(long)]
        save: bool,
    },

    /// Estimate calories burned by a single activity
    Burn {
        /// Activity name (e.g. Running, Walking, Swimming, Gym)
        #[arg(long)]
        activity: String,

        /// Duration in minutes
        #[arg(long)]
        minutes: u32,

        /// Body weight in kg
        #[arg(long)]
        weight: f64,

        /// Intensity (low, medium, high)
        #[arg(long, default_value = "medium")]
        intensity: String,
    },

    /// Append a weigh-in to a profile file
    LogWeight {
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Date label for the entry
        #[arg(long)]
        date: String,

        /// Weight in kg
        #[arg(long)]
        weight: f64,
    },

    /// Append an activity to a profile file
    LogActivity {
        #[arg(long)]
        profile: Option<PathBuf>,

        #[arg(long)]
        name: String,

        #[arg(long)]
        minutes: u32,

        #[arg(long, default_value = "medium")]
        intensity: String,
    },

    /// List stored profile snapshots
    History,

    /// Roll up stored snapshots to CSV
    Rollup {
        /// Clean up processed logs after rollup
        #[arg(long)]
        cleanup: bool,
    },
}

fn main() -> Result<()> {
    // Warnings only, so stdout carries just the report
    kcal_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data.data_dir.clone());
    tracing::debug!("Using data directory {:?}", data_dir);

    match cli.command {
        Commands::Report {
            profile,
            json,
            save,
        } => cmd_report(&data_dir, &config, profile, json, save),
        Commands::Burn {
            activity,
            minutes,
            weight,
            intensity,
        } => cmd_burn(&config, activity, minutes, weight, &intensity),
        Commands::LogWeight {
            profile,
            date,
            weight,
        } => cmd_log_weight(&config, profile, date, weight),
        Commands::LogActivity {
            profile,
            name,
            minutes,
            intensity,
        } => cmd_log_activity(&config, profile, name, minutes, &intensity),
        Commands::History => cmd_history(&data_dir),
        Commands::Rollup { cleanup } => cmd_rollup(&data_dir, cleanup),
    }
}

/// Profile path from the flag, else from config
fn resolve_profile_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    flag.or_else(|| config.profile.path.clone()).ok_or_else(|| {
        Error::Config("no profile given: pass --profile or set [profile] path in config".into())
    })
}

fn cmd_report(
    data_dir: &Path,
    config: &Config,
    profile_flag: Option<PathBuf>,
    json: bool,
    save: bool,
) -> Result<()> {
    let profile_path = resolve_profile_path(profile_flag, config)?;
    let profile = load_profile(&profile_path)?;
    let report = build_report(&profile, &config.met_table());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }

    if save {
        let mut store = JsonlProfileStore::new(JsonlProfileStore::log_path(data_dir));
        let snapshot = store.store(&profile)?;
        if !json {
            println!("\n✓ Snapshot {} saved", snapshot.id);
        }
    }

    Ok(())
}

fn cmd_burn(
    config: &Config,
    activity: String,
    minutes: u32,
    weight: f64,
    intensity: &str,
) -> Result<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "weight must be a positive number of kg, got {}",
            weight
        )));
    }

    let table = config.met_table();
    let entry = ActivityEntry {
        name: activity,
        duration_minutes: minutes,
        intensity: intensity.parse()?,
    };

    if !table.contains(&entry.name) {
        println!("(no coefficient for '{}', using default)", entry.name);
    }
    println!(
        "Activity: {} | Duration: {} min | Burned: {:.2} kcal",
        entry.name,
        entry.duration_minutes,
        table.expenditure(&entry, weight)
    );
    Ok(())
}

fn cmd_log_weight(
    config: &Config,
    profile_flag: Option<PathBuf>,
    date: String,
    weight: f64,
) -> Result<()> {
    let profile_path = resolve_profile_path(profile_flag, config)?;

    let updated = Profile::update(&profile_path, |profile| {
        *profile = profile.with_weight_entry(WeightLogEntry {
            date,
            weight_kg: weight,
        });
        Ok(())
    })?;

    println!("✓ Weight logged: {:.1} kg", weight);
    print_trend(&weight_trend(&updated.weight_history));
    Ok(())
}

fn cmd_log_activity(
    config: &Config,
    profile_flag: Option<PathBuf>,
    name: String,
    minutes: u32,
    intensity: &str,
) -> Result<()> {
    let profile_path = resolve_profile_path(profile_flag, config)?;

    let entry = ActivityEntry {
        name,
        duration_minutes: minutes,
        intensity: intensity.parse()?,
    };
    let met_table = config.met_table();
    let mut burned = 0.0;
    Profile::update(&profile_path, |profile| {
        burned = met_table.expenditure(&entry, profile.weight_kg);
        *profile = profile.with_activity(entry);
        Ok(())
    })?;

    println!("✓ Activity logged ({:.2} kcal)", burned);
    Ok(())
}

fn cmd_history(data_dir: &Path) -> Result<()> {
    let log_path = JsonlProfileStore::log_path(data_dir);
    let snapshots = read_snapshots(&log_path)?;

    if snapshots.is_empty() {
        println!("No stored snapshots.");
        return Ok(());
    }

    for snapshot in &snapshots {
        let profile = &snapshot.profile;
        println!(
            "{}  {}  {:.1} kg  {} kcal/day  [{}]",
            snapshot.stored_at.format("%Y-%m-%d %H:%M"),
            profile.name,
            profile.weight_kg,
            daily_calorie_target(profile),
            snapshot.id
        );
    }
    println!("\n{} snapshot(s)", snapshots.len());
    Ok(())
}

fn cmd_rollup(data_dir: &Path, cleanup: bool) -> Result<()> {
    let log_path = JsonlProfileStore::log_path(data_dir);
    let csv_path = data_dir.join("profiles.csv");

    if !log_path.exists() {
        println!("No snapshot log found - nothing to roll up.");
        return Ok(());
    }

    let count = snapshots_to_csv_and_archive(&log_path, &csv_path)?;

    println!("✓ Rolled up {} snapshots to CSV", count);
    println!("  CSV: {}", csv_path.display());

    if cleanup {
        let log_dir = log_path.parent().unwrap_or(data_dir);
        let cleaned = cleanup_processed_logs(log_dir)?;
        if cleaned > 0 {
            println!("✓ Cleaned up {} processed logs", cleaned);
        }
    }

    Ok(())
}

fn display_report(report: &EnergyReport) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  ENERGY REPORT: {}", report.name);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  BMR:             {:.2} kcal", report.bmr);
    println!("  Activity factor: {:.2}", report.activity_factor);
    println!("  Goal multiplier: {:.2}", report.goal_multiplier);
    println!();
    println!(
        "  Recommended daily calories for {}: {} kcal",
        report.name, report.daily_calories
    );
    println!();
    print_trend(&report.weight_trend);

    if !report.activities.is_empty() {
        println!();
        for burn in &report.activities {
            println!(
                "  Activity: {} | Duration: {} min | Burned: {:.2} kcal",
                burn.name, burn.duration_minutes, burn.kcal
            );
        }
        println!("  Total burned: {:.2} kcal", report.total_burned_kcal);
    }
    println!();
}

fn print_trend(trend: &WeightTrend) {
    match trend {
        WeightTrend::InsufficientData => {
            println!("  Not enough data to analyse weight change")
        }
        WeightTrend::Gained(kg) => {
            println!("  You have gained {:.1} kg since your previous weigh-in", kg)
        }
        WeightTrend::Lost(kg) => {
            println!("  You have lost {:.1} kg since your previous weigh-in", kg)
        }
        WeightTrend::Unchanged => {
            println!("  Your weight has not changed since your previous weigh-in")
        }
    }
}
