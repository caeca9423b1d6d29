use clap::{Parser, Subcommand, ValueEnum};
use dp_core::timing::{Timer, enable_timing};
use dp_project::{ProjectError, Scene, load, save_json, save_yaml};
use dp_sim::{
    Configuration, DoublePendulum, IntegratorType, PendulumState, SimError, SimOptions,
    relative_drift, run_sim, total_energy,
};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dp-cli")]
#[command(about = "Double pendulum simulator - headless runs and scene tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default scene to a file (.json or .yaml)
    Init {
        /// Output scene path
        path: PathBuf,
    },
    /// Validate a scene file
    Validate {
        /// Path to the scene YAML/JSON file
        scene_path: PathBuf,
    },
    /// Integrate a scene headlessly and export the trajectory
    Run {
        /// Path to the scene YAML/JSON file
        scene_path: PathBuf,
        /// Number of integration steps
        #[arg(long, default_value_t = 1000)]
        steps: usize,
        /// Record every N-th step
        #[arg(long, default_value_t = 1)]
        every: usize,
        /// Integration scheme
        #[arg(long, value_enum, default_value_t = Scheme::Rk4)]
        integrator: Scheme,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print wall clock timing
        #[arg(long)]
        timing: bool,
    },
    /// Sample randomized initial conditions with the scene's reset policy
    Reset {
        /// Path to the scene YAML/JSON file
        scene_path: PathBuf,
        /// RNG seed (defaults to the scene seed, then entropy)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of samples
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scheme {
    Rk4,
    Euler,
}

impl From<Scheme> for IntegratorType {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Rk4 => IntegratorType::RK4,
            Scheme::Euler => IntegratorType::ForwardEuler,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => cmd_init(&path),
        Commands::Validate { scene_path } => cmd_validate(&scene_path),
        Commands::Run {
            scene_path,
            steps,
            every,
            integrator,
            output,
            timing,
        } => {
            if timing {
                enable_timing();
            }
            cmd_run(
                &scene_path,
                steps,
                every,
                integrator.into(),
                output.as_deref(),
            )
        }
        Commands::Reset {
            scene_path,
            seed,
            count,
        } => cmd_reset(&scene_path, seed, count),
    }
}

fn cmd_init(path: &Path) -> CliResult<()> {
    let scene = Scene::default();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => save_json(path, &scene)?,
        _ => save_yaml(path, &scene)?,
    }
    println!("✓ Wrote default scene to {}", path.display());
    Ok(())
}

fn cmd_validate(scene_path: &Path) -> CliResult<()> {
    println!("Validating scene: {}", scene_path.display());
    let scene = load(scene_path)?;
    // Also exercises state and policy construction.
    scene.initial_state()?;
    scene.reset_policy()?;
    println!("✓ Scene '{}' is valid", scene.name);
    Ok(())
}

fn cmd_run(
    scene_path: &Path,
    steps: usize,
    every: usize,
    integrator: IntegratorType,
    output: Option<&Path>,
) -> CliResult<()> {
    let scene = load(scene_path)?;
    let initial = scene.initial_state()?;
    let model = DoublePendulum::new(&initial);

    let opts = SimOptions {
        record_every: every,
        integrator,
        ..SimOptions::for_steps(initial.dt(), steps)
    };

    let timer = Timer::start("run");
    let record = run_sim(&model, &opts)?;
    let label = timer.label();
    let elapsed = timer.stop();

    let csv = trajectory_csv(&initial, &record.t, &record.x);
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            record.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    if let Some((t, last)) = record.last() {
        let final_state = initial.with_config(*last);
        eprintln!(
            "t = {:.3}s, E0 = {:.6} J, E = {:.6} J, drift = {:.3e}",
            t,
            total_energy(&initial),
            total_energy(&final_state),
            relative_drift(&initial, &final_state)
        );
        if !last.is_finite() {
            eprintln!("warning: state became non-finite");
        }
    }
    if let Some(s) = elapsed {
        eprintln!("[TIMING] {} ({} steps): {:.3}s", label, steps, s);
    }

    Ok(())
}

fn trajectory_csv(initial: &PendulumState, t: &[f64], x: &[Configuration]) -> String {
    let mut csv = String::from("time_s,theta1,theta2,omega1,omega2,energy_j\n");
    for (t, c) in t.iter().zip(x) {
        let energy = total_energy(&initial.with_config(*c));
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            t, c.theta1, c.theta2, c.omega1, c.omega2, energy
        ));
    }
    csv
}

fn cmd_reset(scene_path: &Path, seed: Option<u64>, count: usize) -> CliResult<()> {
    let scene = load(scene_path)?;
    let policy = scene.reset_policy()?;
    let mut state = scene.initial_state()?;

    let mut rng = match seed.or(scene.seed) {
        Some(seed) => Pcg64Mcg::seed_from_u64(seed),
        None => Pcg64Mcg::from_entropy(),
    };

    println!(
        "{:>10} {:>10} {:>10} {:>10} {:>8} {:>8}",
        "theta1", "theta2", "omega1", "omega2", "mass1", "mass2"
    );
    for _ in 0..count {
        state = policy.apply(&state, &mut rng);
        let c = &state.config;
        let p = state.params();
        println!(
            "{:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>8.4} {:>8.4}",
            c.theta1, c.theta2, c.omega1, c.omega2, p.mass1, p.mass2
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_rows() {
        let initial = PendulumState::default();
        let csv = trajectory_csv(&initial, &[0.0, 0.01], &[initial.config, Configuration::REST]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("time_s,theta1"));
        assert!(lines[1].starts_with("0,0.5,0.5,4,5,"));
    }

    #[test]
    fn cli_parses_run_flags() {
        let cli = Cli::try_parse_from([
            "dp-cli",
            "run",
            "scene.yaml",
            "--steps",
            "20",
            "--integrator",
            "euler",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                steps, integrator, ..
            } => {
                assert_eq!(steps, 20);
                assert_eq!(IntegratorType::from(integrator), IntegratorType::ForwardEuler);
            }
            _ => panic!("expected run command"),
        }
    }
}
