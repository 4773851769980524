use clap::{Args, Parser, Subcommand, ValueEnum};
use std::error::Error;

use projectile_kinematics::{
    FlightSolver, FlightStatistics, KinematicsError, LaunchParameters, MotionModel, Simulation,
    SimulationPhase,
};

#[derive(Parser)]
#[command(name = "projectile")]
#[command(version = "0.1.0")]
#[command(about = "Projectile motion calculator and simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Launch parameters shared by all computing subcommands
#[derive(Args)]
struct LaunchArgs {
    /// Launch speed (m/s)
    #[arg(short = 'v', long, default_value = "20.0")]
    speed: f64,

    /// Launch angle above horizontal (degrees)
    #[arg(short = 'a', long, default_value = "45.0")]
    angle: f64,

    /// Gravitational acceleration (m/s²)
    #[arg(short = 'g', long, default_value = "9.8")]
    gravity: f64,

    /// Initial height (meters)
    #[arg(long, default_value = "0.0")]
    height: f64,

    /// Motion model (planar/2d or vertical/1d)
    #[arg(short = 'm', long, default_value = "planar")]
    model: String,
}

impl LaunchArgs {
    fn to_params(&self) -> LaunchParameters {
        let model = match MotionModel::from_str(&self.model) {
            Some(model) => model,
            None => {
                eprintln!("Invalid motion model: {}. Using planar.", self.model);
                MotionModel::Planar
            }
        };

        LaunchParameters {
            speed: self.speed,
            angle_deg: self.angle,
            gravity: self.gravity,
            initial_height: self.height,
            model,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute flight statistics for a launch
    Stats {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Sample the flight path for plotting
    Trajectory {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Number of sampling intervals over the flight
        #[arg(short = 's', long, default_value = "100")]
        steps: usize,

        /// Ground-penetration tolerance (meters)
        #[arg(long, default_value = "0.1")]
        ground_tolerance: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "csv")]
        output: OutputFormat,
    },

    /// Step a launch frame by frame until it lands
    Simulate {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Frame step (seconds)
        #[arg(long, default_value = "0.016")]
        time_step: f64,

        /// Print every frame instead of the landing summary only
        #[arg(long)]
        frames: bool,
    },

    /// Display engine information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { launch, output } => {
            let params = launch.to_params();
            match FlightStatistics::compute(&params) {
                Ok(stats) => display_stats(&stats, output)?,
                Err(KinematicsError::InvalidGravity(_)) => {
                    // The front-end shows dashes for undefined statistics
                    display_undefined_stats(output)?;
                }
            }
        }

        Commands::Trajectory {
            launch,
            steps,
            ground_tolerance,
            output,
        } => {
            let mut solver = FlightSolver::new(launch.to_params());
            solver.set_step_count(steps);
            solver.set_ground_tolerance(ground_tolerance);
            let report = solver.solve()?;
            display_trajectory(&report.samples, output)?;
        }

        Commands::Simulate {
            launch,
            time_step,
            frames,
        } => {
            if time_step <= 0.0 {
                return Err(format!("time step must be positive, got {time_step} s").into());
            }
            let params = launch.to_params();
            // Statistics up front, as the panel shows them at launch time
            let stats = FlightStatistics::compute(&params)?;
            run_simulation(params, &stats, time_step, frames);
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║     PROJECTILE KINEMATICS v0.1.0       ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Closed-form projectile motion engine.  ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Flight statistics (analytic)         ║");
            println!("║ • Trajectory sampling for plotting     ║");
            println!("║ • Planar and vertical-throw models     ║");
            println!("║ • Frame-stepped flight simulation      ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_stats(stats: &FlightStatistics, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(stats)?);
        }

        OutputFormat::Csv => {
            println!("metric,value");
            println!("max_height_m,{:.2}", stats.max_height_m);
            match stats.flight_range_m {
                Some(range) => println!("flight_range_m,{range:.2}"),
                None => println!("flight_range_m,-"),
            }
            println!("flight_time_s,{:.2}", stats.flight_time_s);
            println!("impact_speed_mps,{:.2}", stats.impact_speed_mps);
        }

        OutputFormat::Table => {
            let range = match stats.flight_range_m {
                Some(range) => format!("{range:>8.2} m"),
                None => format!("{:>8} -", ""),
            };
            println!("╔════════════════════════════════════════╗");
            println!("║          FLIGHT STATISTICS             ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Max Height:        {:>8.2} m          ║", stats.max_height_m);
            println!("║ Range:             {range}          ║");
            println!("║ Flight Time:       {:>8.2} s          ║", stats.flight_time_s);
            println!("║ Impact Speed:      {:>8.2} m/s        ║", stats.impact_speed_mps);
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_undefined_stats(format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!(null));
        }
        OutputFormat::Csv => {
            println!("metric,value");
            for metric in [
                "max_height_m",
                "flight_range_m",
                "flight_time_s",
                "impact_speed_mps",
            ] {
                println!("{metric},-");
            }
        }
        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║          FLIGHT STATISTICS             ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Max Height:               -            ║");
            println!("║ Range:                    -            ║");
            println!("║ Flight Time:              -            ║");
            println!("║ Impact Speed:             -            ║");
            println!("╚════════════════════════════════════════╝");
            eprintln!("gravity must be positive");
        }
    }

    Ok(())
}

fn display_trajectory(
    samples: &[projectile_kinematics::TrajectorySample],
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(samples)?);
        }

        OutputFormat::Csv => {
            println!("time,x,y,speed");
            for s in samples {
                println!("{:.3},{:.2},{:.2},{:.2}", s.time_s, s.x_m, s.y_m, s.speed_mps);
            }
        }

        OutputFormat::Table => {
            println!("┌──────────┬──────────┬──────────┬──────────┐");
            println!("│ Time (s) │  X (m)   │  Y (m)   │ Vel(m/s) │");
            println!("├──────────┼──────────┼──────────┼──────────┤");
            for s in samples {
                println!(
                    "│ {:>8.3} │ {:>8.2} │ {:>8.2} │ {:>8.2} │",
                    s.time_s, s.x_m, s.y_m, s.speed_mps
                );
            }
            println!("└──────────┴──────────┴──────────┴──────────┘");
        }
    }

    Ok(())
}

fn run_simulation(params: LaunchParameters, stats: &FlightStatistics, dt: f64, frames: bool) {
    let mut sim = Simulation::new(params);
    sim.launch();

    if frames {
        println!("time,x,y,phase");
    }

    let mut position = sim.position();
    while sim.phase() == SimulationPhase::Running {
        position = sim.tick(dt);
        if frames {
            println!(
                "{:.3},{:.2},{:.2},{}",
                sim.elapsed(),
                position.x,
                position.y,
                sim.phase()
            );
        }
    }

    println!("Landed at x = {:.2} m after {:.2} s", position.x, sim.elapsed());
    println!(
        "Analytic flight time {:.2} s, impact speed {:.2} m/s",
        stats.flight_time_s, stats.impact_speed_mps
    );
}
