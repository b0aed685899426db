//! weekly — allocate a week of classes and print every timetable.
//!
//! ```text
//! cargo run -p weekly -- [requirements.csv] [settings.json] [seed]
//! ```
//!
//! With no arguments the embedded sample below is used with default
//! settings and a fixed seed.  `settings.json` may set any subset of the
//! `Settings` fields.  Set `RUST_LOG=debug` (or `trace`) to follow placement.

mod render;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tt_core::{ClassKey, Settings};
use tt_engine::{EngineBuilder, RequirementOutcome, RunObserver, RunResult, teacher_loads};
use tt_input::{RequirementSet, load_requirements_csv, load_requirements_reader};
use tt_output::{CsvWriter, export_run};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64  = 42;
const OUTPUT_DIR: &str = "output/weekly";

// ── Requirements CSV ──────────────────────────────────────────────────────────

// Two departments, three classes.  Carol teaches across all of them; the
// ECE circuits lab is taught jointly and shares PL1 with the CSE physics lab.
const REQUIREMENTS_CSV: &str = "\
Department,Year,Section,Subject,Teacher,PeriodsPerWeek,Type,Room\n\
CSE,2,A,Mathematics,Alice,5,theory,\n\
CSE,2,A,Physics,Bob,2,lab,PL1\n\
CSE,2,A,Data Structures,Carol,4,theory,\n\
CSE,2,A,DS Lab,Carol,2,lab,CL1\n\
CSE,2,A,English,Dave,3,theory,\n\
CSE,2,B,Mathematics,Alice,5,theory,\n\
CSE,2,B,Data Structures,Carol,4,theory,\n\
CSE,2,B,DS Lab,Carol,2,lab,CL1\n\
CSE,2,B,English,Erin,3,theory,\n\
ECE,1,A,Circuits,Frank,4,theory,\n\
ECE,1,A,Circuits Lab,\"Frank, Grace\",4,lab,PL1\n\
ECE,1,A,Programming,Carol,3,theory,\n\
ECE,1,A,Mathematics,Alice,4,theory,\n\
";

// ── Progress observer ─────────────────────────────────────────────────────────

#[derive(Default)]
struct ProgressObserver {
    started:   Option<Instant>,
    completed: usize,
    total:     usize,
}

impl RunObserver for ProgressObserver {
    fn on_run_start(&mut self, classes: usize, requirements: usize) {
        self.started = Some(Instant::now());
        self.total = requirements;
        println!("Allocating {requirements} requirements across {classes} classes...");
    }

    fn on_class_start(&mut self, class: &ClassKey, requirements: usize) {
        info!(%class, requirements, "class started");
    }

    fn on_requirement_done(&mut self, _class: &ClassKey, outcome: &RequirementOutcome) {
        self.completed += 1;
        if !outcome.is_satisfied() {
            println!(
                "  [{}/{}] {} short by {}",
                self.completed,
                self.total,
                outcome.label,
                outcome.shortfall()
            );
        }
    }

    fn on_run_end(&mut self, result: &RunResult) {
        let secs = self.started.map_or(0.0, |t| t.elapsed().as_secs_f64());
        println!(
            "Done in {secs:.3} s: {}/{} periods placed ({}%)",
            result.stats.placed_periods, result.stats.requested_periods, result.stats.success_rate
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn load_requirements(path: Option<&Path>) -> Result<RequirementSet> {
    match path {
        Some(p) => load_requirements_csv(p)
            .with_context(|| format!("loading requirements from {}", p.display())),
        None => Ok(load_requirements_reader(Cursor::new(REQUIREMENTS_CSV))?),
    }
}

fn main() -> Result<()> {
    enable_tracing();

    let mut args = std::env::args().skip(1);
    let csv_path = args.next().map(PathBuf::from);
    let settings_path = args.next().map(PathBuf::from);
    let seed = match args.next() {
        Some(s) => Some(s.parse::<u64>().with_context(|| format!("seed {s:?}"))?),
        None => None,
    };

    println!("=== weekly — class timetable allocation ===");

    // 1. Inputs.
    let mut settings = load_settings(settings_path.as_deref())?;
    settings.seed = seed.or(settings.seed).or(Some(SEED));
    let requirements = load_requirements(csv_path.as_deref())?;
    println!(
        "Loaded {} requirements for {} classes, {} teachers",
        requirements.requirement_count(),
        requirements.class_count(),
        requirements.teacher_count()
    );
    println!(
        "Week: {} days × {} periods  |  Seed: {}",
        settings.day_count(),
        settings.total_periods,
        settings.seed.unwrap_or(SEED)
    );
    println!();

    // 2. Run.
    let mut engine = EngineBuilder::new(settings, requirements).build()?;
    let mut obs = ProgressObserver::default();
    let result = engine.run(&mut obs)?;
    println!();

    // 3. Timetables.
    let timetable = engine.timetable();
    for class in &timetable.classes {
        render::print_class(&timetable, class);
        println!();
    }

    // 4. Teacher loads.
    let names = engine.requirements().teachers();
    let limit = engine.settings().max_teacher_periods as usize;
    println!("{:<16} {:>7}", "Teacher", "Periods");
    println!("{}", "-".repeat(24));
    for (teacher, load) in teacher_loads(engine.teacher_ledger()) {
        let flag = if load > limit { "  !" } else { "" };
        println!("{:<16} {:>7}{flag}", names.name_or_id(teacher), load);
    }
    println!();

    // 5. Warnings.
    if result.is_clean() {
        println!("No warnings.");
    } else {
        for w in &result.warnings {
            println!("{w}");
        }
    }

    // 6. Export.
    let mut writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    export_run(&mut writer, &timetable, &result)?;
    println!();
    println!("Wrote timetable_slots.csv, run_summary.csv, warnings.csv to {OUTPUT_DIR}/");

    Ok(())
}
