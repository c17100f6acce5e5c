use std::io::{Read, Write};
use std::path::PathBuf;

use cubepuzzle::{Cube, Step};
use cubesolver::Stage;
use eyre::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::prefs::Preferences;

/// Rubik's Cube scrambler and layer-by-layer solver
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file (YAML) to load on top of the defaults.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Args, Debug, Default, Clone, Copy)]
pub(crate) struct ScrambleArgs {
    /// Number of random turns. Defaults to the preferences.
    #[arg(short, long)]
    pub length: Option<usize>,
    /// Seed for a reproducible scramble.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print a random scramble and the resulting stickers.
    Scramble {
        #[command(flatten)]
        scramble: ScrambleArgs,
    },
    /// Solve a cube, printing each turn as it starts.
    Solve {
        /// Sticker dump to solve, use '-' for stdin. If omitted, a new
        /// scramble is generated.
        #[arg(long, value_parser, conflicts_with_all = ["length", "seed"])]
        state: Option<clio::Input>,
        #[command(flatten)]
        scramble: ScrambleArgs,
        /// Animate turns in simulated time.
        #[arg(long)]
        animate: bool,
        /// Don't print each turn.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print the stickers of a cube and which stages are complete.
    Show {
        /// Sticker dump to show, use '-' for stdin.
        #[arg(long, value_parser)]
        state: clio::Input,
    },
    /// Write a scrambled sticker dump.
    Save {
        /// File to write, use '-' for stdout.
        #[arg(long, value_parser)]
        out: clio::Output,
        #[command(flatten)]
        scramble: ScrambleArgs,
    },
    /// Print the effective preferences as YAML.
    Prefs {
        /// Write them to a file instead.
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

pub(crate) fn exec(subcommand: Subcommand, prefs: &Preferences) -> Result<()> {
    match subcommand {
        Subcommand::Scramble { scramble } => {
            let (cube, steps) = scrambled_cube(scramble, prefs);
            println!("{}", Step::format_sequence(&steps));
            println!("{}", cube.serialize());
            Ok(())
        }

        Subcommand::Solve {
            state,
            scramble,
            animate,
            quiet,
        } => {
            let cube = match state {
                Some(input) => read_cube(input)?,
                None => {
                    let (cube, steps) = scrambled_cube(scramble, prefs);
                    println!("scramble: {}", Step::format_sequence(&steps));
                    cube
                }
            };
            let animate = animate || prefs.animation.animate;
            let report = crate::driver::run(cube, prefs, animate, |step| {
                if !quiet {
                    println!("{step}");
                }
            })
            .context("error solving cube")?;
            print!("{report}");
            Ok(())
        }

        Subcommand::Show { state } => {
            let cube = read_cube(state)?;
            print!("{cube}");
            for stage in Stage::ALL {
                let status = if stage.check(&cube) { "done" } else { "-" };
                println!("{:<14} {status}", stage.name());
            }
            Ok(())
        }

        Subcommand::Save { mut out, scramble } => {
            let (cube, _) = scrambled_cube(scramble, prefs);
            writeln!(out, "{}", cube.serialize()).context("error writing cube state")?;
            out.finish().context("error writing cube state")
        }

        Subcommand::Prefs { write } => match write {
            Some(path) => prefs.save(&path),
            None => {
                print!("{}", prefs.to_yaml()?);
                Ok(())
            }
        },
    }
}

/// Scrambles a new cube, using `args` where given and the preferences
/// otherwise.
fn scrambled_cube(args: ScrambleArgs, prefs: &Preferences) -> (Cube, Vec<Step>) {
    let length = args.length.unwrap_or(prefs.scramble.length);
    let mut cube = Cube::new();
    let steps = match args.seed.or(prefs.scramble.seed) {
        Some(seed) => cube.shuffle_with_rng(length, &mut ChaCha8Rng::seed_from_u64(seed)),
        None => cube.shuffle(length),
    };
    (cube, steps)
}

fn read_cube(mut input: clio::Input) -> Result<Cube> {
    let mut buffer = String::new();
    input
        .read_to_string(&mut buffer)
        .context("error reading cube state")?;
    Cube::from_facelets(&buffer).context("error loading cube state")
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_seeded_scramble_is_reproducible() {
        let prefs = Preferences::default();
        let args = ScrambleArgs {
            length: Some(15),
            seed: Some(99),
        };
        let (a, steps_a) = scrambled_cube(args, &prefs);
        let (b, steps_b) = scrambled_cube(args, &prefs);
        assert_eq!(steps_a.len(), 15);
        assert_eq!(steps_a, steps_b);
        assert_eq!(a.serialize(), b.serialize());
    }

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from(["cubesolve", "solve", "--seed", "4", "-q"]);
        assert!(matches!(
            args.subcommand,
            Subcommand::Solve {
                state: None,
                scramble: ScrambleArgs {
                    length: None,
                    seed: Some(4),
                },
                animate: false,
                quiet: true,
            },
        ));

        let args = Args::parse_from(["cubesolve", "prefs", "--prefs", "p.yaml"]);
        assert_eq!(args.prefs, Some(PathBuf::from("p.yaml")));

        let conflicting = ["cubesolve", "solve", "--state", "-", "--seed", "1"];
        assert!(Args::try_parse_from(conflicting).is_err());
    }
}
