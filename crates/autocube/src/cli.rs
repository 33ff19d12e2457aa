use std::path::PathBuf;

use cubeprefs::Preferences;
use cubepuzzle_core::{CubeState, Move, ScrambleParams, moves_to_string, parse_moves};
use cubepuzzle_solver::{Solution, solve};
use cubepuzzle_view::{CubeSimulation, RunMode};
use eyre::{Context, Result, bail};
use itertools::Itertools;
use serde::Serialize;
use web_time::{Duration, Instant};

/// Frame limit for each phase of the `animate` subcommand.
const MAX_ANIMATION_FRAMES: usize = 1_000_000;

/// Autocube command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file (YAML) to layer over the defaults.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

/// Scramble options shared by several subcommands.
#[derive(clap::Args, Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ScrambleArgs {
    /// Number of random quarter turns (defaults to the preferences).
    #[arg(short, long)]
    pub length: Option<u32>,
    /// Random seed (defaults to the preferences, or else a random seed).
    #[arg(short, long)]
    pub seed: Option<u64>,
}
impl ScrambleArgs {
    fn params(&self, prefs: &Preferences) -> ScrambleParams {
        let length = self.length.unwrap_or(prefs.scramble.length);
        match self.seed.or(prefs.scramble.seed) {
            Some(seed) => ScrambleParams::with_seed(length, seed),
            None => ScrambleParams::new(length),
        }
    }
}

#[derive(clap::Subcommand, Debug, Clone, PartialEq)]
pub(crate) enum Subcommand {
    /// Print a random scramble.
    Scramble {
        #[command(flatten)]
        scramble: ScrambleArgs,
        /// Print JSON including the seed instead of plain notation.
        #[arg(long)]
        json: bool,
    },
    /// Solve a cube and print the phases and moves as JSON.
    Solve {
        /// Moves to apply to a solved cube, in standard notation (such as
        /// "R U R' U'"). If omitted, the cube is scrambled randomly.
        #[arg(short, long)]
        moves: Option<String>,
        #[command(flatten)]
        scramble: ScrambleArgs,
    },
    /// Solve many scrambles and print statistics as JSON.
    Bench {
        /// Number of scrambles to solve.
        #[arg(short = 'n', long, default_value_t = 100)]
        count: u64,
        /// Number of random quarter turns (defaults to the preferences).
        #[arg(short, long)]
        length: Option<u32>,
        /// Seed of the first scramble; each scramble uses the next seed.
        #[arg(long, default_value_t = 0)]
        first_seed: u64,
    },
    /// Scramble and then solve a cube through the animated simulation, logging
    /// each move as it starts.
    Animate {
        #[command(flatten)]
        scramble: ScrambleArgs,
        /// Simulated frame rate.
        #[arg(long, default_value_t = 60.0)]
        fps: f32,
    },
    /// Write the current preferences to a YAML file.
    SavePrefs {
        /// Output file.
        path: PathBuf,
    },
}

#[derive(Serialize, Debug)]
struct ScrambleOutput {
    params: ScrambleParams,
    moves: String,
}

#[derive(Serialize, Debug)]
struct SolveOutput {
    scramble: String,
    solution: Solution,
    moves: String,
    move_count: usize,
}

#[derive(Serialize, Debug, PartialEq)]
struct BenchOutput {
    solves: u64,
    failures: u64,
    min_moves: Option<usize>,
    max_moves: Option<usize>,
    mean_moves: Option<f64>,
    total_seconds: f64,
}

#[derive(Serialize, Debug)]
struct AnimateOutput {
    params: ScrambleParams,
    scramble_moves: usize,
    solve_moves: usize,
    frames: usize,
    solved: bool,
}

pub(crate) fn exec(subcommand: Subcommand, prefs: Preferences) -> Result<()> {
    match subcommand {
        Subcommand::Scramble { scramble, json } => {
            let params = scramble.params(&prefs);
            let moves = moves_to_string(&params.generate());
            if json {
                write_json_output(&ScrambleOutput { params, moves })
            } else {
                println!("{moves}");
                Ok(())
            }
        }

        Subcommand::Solve { moves, scramble } => {
            let scramble_moves = match moves {
                Some(notation) => parse_moves(&notation).context("error parsing moves")?,
                None => scramble.params(&prefs).generate(),
            };
            write_json_output(&solve_moves(&scramble_moves, &prefs)?)
        }

        Subcommand::Bench {
            count,
            length,
            first_seed,
        } => {
            let length = length.unwrap_or(prefs.scramble.length);
            let seeds = (0..count).map(|i| first_seed.wrapping_add(i));
            write_json_output(&bench(seeds, length, &prefs))
        }

        Subcommand::Animate { scramble, fps } => {
            let params = scramble.params(&prefs);
            write_json_output(&animate(params, fps, prefs)?)
        }

        Subcommand::SavePrefs { path } => prefs
            .save(&path)
            .wrap_err_with(|| format!("error saving preferences to {}", path.display())),
    }
}

fn solve_moves(scramble: &[Move], prefs: &Preferences) -> Result<SolveOutput> {
    let state = CubeState::new().with_moves(scramble.iter().copied());
    let solution = solve(&state, prefs.solver.max_rounds)?;
    let moves = solution.moves().collect_vec();
    Ok(SolveOutput {
        scramble: moves_to_string(scramble),
        move_count: moves.len(),
        moves: moves_to_string(&moves),
        solution,
    })
}

fn bench(seeds: impl Iterator<Item = u64>, length: u32, prefs: &Preferences) -> BenchOutput {
    let start = Instant::now();
    let mut failures = 0;
    let mut move_counts = vec![];
    for seed in seeds {
        let scramble = ScrambleParams::with_seed(length, seed).generate();
        let state = CubeState::new().with_moves(scramble);
        match solve(&state, prefs.solver.max_rounds) {
            Ok(solution) => move_counts.push(solution.move_count()),
            Err(e) => {
                log::warn!("error solving scramble with seed {seed}: {e}");
                failures += 1;
            }
        }
    }

    let (min_moves, max_moves) = move_counts.iter().copied().minmax().into_option().unzip();
    let mean_moves = (!move_counts.is_empty())
        .then(|| move_counts.iter().sum::<usize>() as f64 / move_counts.len() as f64);
    BenchOutput {
        solves: move_counts.len() as u64,
        failures,
        min_moves,
        max_moves,
        mean_moves,
        total_seconds: start.elapsed().as_secs_f64(),
    }
}

fn animate(params: ScrambleParams, fps: f32, prefs: Preferences) -> Result<AnimateOutput> {
    let frame = Duration::try_from_secs_f32(1.0 / fps)
        .wrap_err_with(|| format!("invalid frame rate {fps}"))?;
    let mut sim = CubeSimulation::new(prefs);
    let mut started = 0;
    let mut frames = 0;

    let (tx, rx) = std::sync::mpsc::channel();
    sim.set_on_move_started(move |m| {
        log::info!("move: {m}");
        // The receiver outlives the simulation.
        let _ = tx.send(m);
    });

    sim.start_scramble_with(params);
    frames += run_frames(&mut sim, frame)?;
    let scramble_moves = rx.try_iter().count();
    started += scramble_moves;

    sim.start_solve();
    frames += run_frames(&mut sim, frame)?;
    let solve_moves = rx.try_iter().count();
    started += solve_moves;

    if let Some(e) = sim.last_error() {
        bail!("error solving cube: {e}");
    }
    log::info!("{started} moves in {frames} frames");

    Ok(AnimateOutput {
        params,
        scramble_moves,
        solve_moves,
        frames,
        solved: sim.state().is_solved(),
    })
}

/// Steps the simulation with a fixed timestep until it has nothing left to
/// animate. Returns the number of frames.
fn run_frames(sim: &mut CubeSimulation, frame: Duration) -> Result<usize> {
    for frames in 0..MAX_ANIMATION_FRAMES {
        if !sim.step(frame) {
            debug_assert_eq!(sim.run_mode(), RunMode::Idle);
            return Ok(frames);
        }
    }
    bail!("simulation still running after {MAX_ANIMATION_FRAMES} frames")
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
