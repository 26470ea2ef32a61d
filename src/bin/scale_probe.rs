use std::time::Instant;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use terrain_path::solvers::{dp_solve, RecursiveSolver};
use terrain_path::{reconstruct_path, ElevationGrid, PathSolver};

#[derive(Parser)]
#[command(name = "scale_probe")]
#[command(about = "Scaling and cross-verification probe for the path solvers")]
struct Options {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Widest grid (in columns) to verify against the recursive solver
    #[arg(long, default_value_t = 10)]
    verify_limit: usize,
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: &'static str,
    size: String,
    cost: u64,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn main() {
    let options = Options::parse();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Terrain path scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  • every DP path is checked for shape and re-costed against the grid");
    eprintln!(
        "  • grids up to {} columns are also cross-checked with the recursive solver",
        options.verify_limit
    );
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] DP on square grids...");
    measurements.extend(run_square(&options, &mut sys));
    eprintln!();

    eprintln!("[2/2] DP vs recursive on narrow grids...");
    measurements.extend(run_narrow(&options, &mut sys));
    eprintln!();

    let failed = measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
        .count();
    if failed == 0 {
        eprintln!("✓ all verified runs passed");
    } else {
        eprintln!("✗ {failed} run(s) failed");
    }

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

fn run_square(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIDES: &[usize] = &[8, 32, 128, 512, 1024, 2048];
    SIDES
        .iter()
        .map(|&n| probe("dp_square", n, n, options, sys))
        .collect()
}

fn run_narrow(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const HEIGHT: usize = 48;
    (2..=12)
        .map(|width| probe("dp_vs_recursive", HEIGHT, width, options, sys))
        .collect()
}

fn probe(
    scenario: &'static str,
    height: usize,
    width: usize,
    options: &Options,
    sys: &mut System,
) -> Measurement {
    eprint!("      {height}x{width}... ");
    let grid = deterministic_grid(height, width);

    let before = rss_kib(sys);
    let start = Instant::now();
    let solution = dp_solve(&grid);
    let path = reconstruct_path(&solution.table, solution.start_row);
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);

    let (status, detail) = if !path.is_valid_for(height, width) {
        (
            VerificationStatus::Failed,
            Some("reconstructed path is malformed".to_string()),
        )
    } else if path.cost(&grid) != solution.cost {
        (
            VerificationStatus::Failed,
            Some(format!(
                "path costs {}, table says {}",
                path.cost(&grid),
                solution.cost
            )),
        )
    } else if width <= options.verify_limit {
        let (baseline, _) = RecursiveSolver.best_start(&grid);
        if baseline == solution.cost {
            (VerificationStatus::Passed, None)
        } else {
            (
                VerificationStatus::Failed,
                Some(format!(
                    "{} expected {baseline}, got {}",
                    RecursiveSolver.name(),
                    solution.cost
                )),
            )
        }
    } else {
        (VerificationStatus::NotChecked, None)
    };

    eprintln!(
        "{} cost={}, time={:.3}s, status={}",
        status.icon(),
        solution.cost,
        wall_s,
        status.label()
    );

    Measurement {
        scenario,
        size: format!("{height}x{width}"),
        cost: solution.cost,
        wall_s,
        rss_delta_kib: after.saturating_sub(before),
        status,
        detail,
    }
}

/// Rolling terrain with a few ridges; identical on every run.
fn deterministic_grid(height: usize, width: usize) -> ElevationGrid {
    let cells = (0..height)
        .flat_map(|row| {
            (0..width).map(move |col| {
                let ridge = ((row * 7 + col * 3) % 23) as i32;
                let bump = ((row ^ col) % 11) as i32;
                ridge * 10 + bump * bump
            })
        })
        .collect();
    match ElevationGrid::from_row_major(height, width, cells) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            std::process::exit(2);
        }
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size,cost,wall_s,rss_delta_kib,status,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size,
            m.cost,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());
    let col2 = measurements
        .iter()
        .map(|m| m.size.len())
        .max()
        .unwrap_or(0)
        .max("size".len());

    println!(
        "{:<col1$}  {:<col2$}  {:>10}  {:>10}  {:>14}  {:>12}  detail",
        "scenario", "size", "cost", "wall_s", "rss_delta_kib", "status",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>10}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size,
            m.cost,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let text = serde_json::to_string_pretty(measurements).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}
