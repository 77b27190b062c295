use eyre::{Context, Result, bail};
use serde::Serialize;
use strum::IntoEnumIterator;
use twisty_library::{
    Algorithm, GroupedPuzzle, PuzzleKind, ScrambleParams, ScrambleType, SolveProgress,
};

/// Scrambler and solver for NxN cubes, Pyraminx, and Square-1
///
/// Every subcommand prints its result as JSON.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

/// Puzzle to operate on.
#[derive(Debug, clap::Args)]
pub(crate) struct PuzzleArgs {
    /// Kind of puzzle (`cube`, `pyraminx`, or `square1`)
    puzzle: PuzzleKind,
    /// Size of the puzzle, such as `4` for a 4x4x4
    #[arg(short, long)]
    size: Option<u16>,
}

impl PuzzleArgs {
    fn build(&self) -> Result<GroupedPuzzle> {
        let size = self.size.unwrap_or(self.puzzle.default_size());
        self.puzzle
            .new_puzzle(size)
            .wrap_err_with(|| format!("error constructing {}", self.puzzle))
    }
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print a reproducible random scramble.
    Scramble {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Seed for the scramble. A random seed is chosen if omitted.
        #[arg(long)]
        seed: Option<String>,
        /// Number of random moves instead of a full scramble.
        #[arg(short = 'n', long)]
        moves: Option<u32>,
    },
    /// Solve a puzzle and print the solution.
    Solve {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Moves to apply before solving.
        #[arg(long, conflicts_with = "seed")]
        scramble: Option<String>,
        /// Seed for a full random scramble to apply before solving.
        #[arg(long)]
        seed: Option<String>,
    },
    /// Merge redundant moves in an algorithm.
    Simplify {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Algorithm to simplify.
        algorithm: String,
    },
    /// Print every puzzle kind and the sizes it supports.
    Puzzles,
}

#[derive(Serialize, Debug)]
struct ScrambleOutput {
    puzzle: String,
    size: u16,
    params: ScrambleParams,
    scramble: String,
    move_count: usize,
}

#[derive(Serialize, Debug)]
struct SolveOutput {
    puzzle: String,
    size: u16,
    scramble: String,
    solution: String,
    move_count: usize,
    solved: bool,
}

#[derive(Serialize, Debug)]
struct SimplifyOutput {
    input: String,
    simplified: String,
    move_count: usize,
}

#[derive(Serialize, Debug)]
struct PuzzleInfo {
    id: String,
    name: &'static str,
    min_size: u16,
    max_size: u16,
    default_size: u16,
    has_solver: bool,
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Scramble {
            puzzle,
            seed,
            moves,
        } => {
            let mut p = puzzle.build()?;
            let params = scramble_params(seed, moves);
            let scramble = twisty_library::scramble(&mut p, &params)
                .wrap_err("error generating scramble")?;
            write_json_output(&ScrambleOutput {
                puzzle: puzzle.puzzle.to_string(),
                size: p.size(),
                params,
                scramble: p.format_algorithm(&scramble),
                move_count: scramble.len(),
            })
        }

        Subcommand::Solve {
            puzzle,
            scramble,
            seed,
        } => {
            let mut p = puzzle.build()?;
            let scramble = match scramble {
                Some(notation) => {
                    let alg = p
                        .parse_algorithm(&notation)
                        .wrap_err("error parsing scramble")?;
                    p.execute_algorithm(&alg).wrap_err("error applying scramble")?;
                    alg
                }
                None => twisty_library::scramble(&mut p, &scramble_params(seed, None))
                    .wrap_err("error generating scramble")?,
            };

            let progress = SolveProgress::new();
            let solution = twisty_library::solve(&mut p, &progress)
                .wrap_err_with(|| format!("error solving {}", puzzle.puzzle))?;
            log::info!("solved in {} moves", solution.len());

            write_json_output(&SolveOutput {
                puzzle: puzzle.puzzle.to_string(),
                size: p.size(),
                scramble: p.format_algorithm(&scramble),
                solution: p.format_algorithm(&solution),
                move_count: solution.len(),
                solved: p.is_solved(),
            })
        }

        Subcommand::Simplify { puzzle, algorithm } => {
            let p = puzzle.build()?;
            let alg = p
                .parse_algorithm(&algorithm)
                .wrap_err("error parsing algorithm")?;
            if alg.is_empty() && !algorithm.trim().is_empty() {
                bail!("algorithm {algorithm:?} contains no moves");
            }
            let simplified: Algorithm = alg.simplify(p.rules());
            write_json_output(&SimplifyOutput {
                input: algorithm,
                simplified: p.format_algorithm(&simplified),
                move_count: simplified.len(),
            })
        }

        Subcommand::Puzzles => {
            let puzzles: Vec<PuzzleInfo> = PuzzleKind::iter()
                .map(|kind| {
                    let rules = kind.rules();
                    PuzzleInfo {
                        id: kind.to_string(),
                        name: rules.name,
                        min_size: rules.min_size,
                        max_size: rules.max_size,
                        default_size: kind.default_size(),
                        has_solver: kind != PuzzleKind::Pyraminx,
                    }
                })
                .collect();
            write_json_output(&puzzles)
        }
    }
}

fn scramble_params(seed: Option<String>, moves: Option<u32>) -> ScrambleParams {
    let ty = match moves {
        Some(n) => ScrambleType::Partial(n),
        None => ScrambleType::Full,
    };
    match seed {
        Some(seed) => ScrambleParams::with_seed(ty, seed),
        None => ScrambleParams::new(ty),
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
