use std::fs;

use anyhow::Error;
use clap::{value_t, App, ArgMatches, SubCommand};
use log::info;

use varisat_bits::puzzle::{self, Factoring, SudokuGrid, CLASSIC_SUDOKU};
use varisat_bits::{Bit, Bits, Context};

pub fn puzzle_args() -> Vec<App<'static, 'static>> {
    vec![
        SubCommand::with_name("adder").about("Find inputs of a full adder with carry set"),
        SubCommand::with_name("factor")
            .about("Find two non-trivial factors of a number")
            .arg_from_usage("[width] --width=[BITS] 'Width of the factors'")
            .arg_from_usage("<product> --product=[P] 'The number to factor'"),
        SubCommand::with_name("queens")
            .about("Place non-attacking queens on a square board")
            .arg_from_usage("[size] --size=[N] 'Number of rows and columns'"),
        SubCommand::with_name("sudoku")
            .about("Complete a sudoku grid")
            .arg_from_usage(
                "[INPUT] 'Grid file with 9 rows of digits, 0 or . for empty cells (a classic \
                 puzzle if omitted)'",
            ),
    ]
}

/// The encoded variables of a puzzle, used to print the solution.
pub enum Puzzle {
    Adder([Bit; 3]),
    Factor(Factoring),
    Queens(Vec<Bits>),
    Sudoku(Vec<Vec<Bits>>),
}

/// Encode the puzzle selected by the subcommand `name`.
pub fn build(ctx: &mut Context, name: &str, matches: &ArgMatches) -> Result<Puzzle, Error> {
    Ok(match name {
        "adder" => Puzzle::Adder(puzzle::full_adder_carry(ctx)),
        "factor" => {
            let width = if matches.is_present("width") {
                value_t!(matches, "width", usize)?
            } else {
                8
            };
            let product = value_t!(matches, "product", u64)?;
            info!("Factoring {} using {} bit factors", product, width);
            Puzzle::Factor(puzzle::factor(ctx, width, product)?)
        }
        "queens" => {
            let size = if matches.is_present("size") {
                value_t!(matches, "size", usize)?
            } else {
                8
            };
            info!("Placing {} queens", size);
            Puzzle::Queens(puzzle::queens(ctx, size))
        }
        "sudoku" => {
            let grid: SudokuGrid = match matches.value_of("INPUT") {
                Some(path) => {
                    info!("Reading file '{}'", path);
                    puzzle::parse_sudoku(&fs::read_to_string(path)?)?
                }
                None => CLASSIC_SUDOKU,
            };
            Puzzle::Sudoku(puzzle::sudoku(ctx, &grid))
        }
        _ => unreachable!(),
    })
}

impl Puzzle {
    /// Print the solution found by the last successful solve.
    pub fn print(&self, ctx: &Context) {
        match self {
            Puzzle::Adder(inputs) => {
                for (name, &bit) in ["a", "b", "c"].iter().zip(inputs.iter()) {
                    println!("{}: {}", name, ctx.show(bit));
                }
            }
            Puzzle::Factor(factoring) => println!(
                "{} * {} = {}",
                ctx.value_nat(&factoring.a),
                ctx.value_nat(&factoring.b),
                ctx.value_nat(&factoring.product)
            ),
            Puzzle::Queens(board) => {
                for row in board.iter() {
                    println!("{}", ctx.show_bits(row));
                }
            }
            Puzzle::Sudoku(board) => {
                for row in board.iter() {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|cell| ctx.value_nat(cell).to_string())
                        .collect();
                    println!("{}", cells.join(" "));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_from(ctx: &mut Context, args: &[&str]) -> Result<Puzzle, Error> {
        let matches = App::new("test")
            .subcommands(puzzle_args())
            .get_matches_from(args.to_vec());
        let (name, puzzle_matches) = matches.subcommand();
        build(ctx, name, puzzle_matches.unwrap())
    }

    #[test]
    fn factor_subcommand() {
        let mut ctx = Context::new();
        let puzzle = build_from(&mut ctx, &["test", "factor", "--width", "6", "--product", "35"]).unwrap();

        assert!(ctx.solve().unwrap());
        match puzzle {
            Puzzle::Factor(factoring) => {
                assert_eq!(factoring.a.len(), 6);
                assert_eq!(ctx.value_nat(&factoring.product), 35);
            }
            _ => panic!("expected a factoring"),
        }
    }

    #[test]
    fn queens_default_size() {
        let mut ctx = Context::new();
        match build_from(&mut ctx, &["test", "queens"]).unwrap() {
            Puzzle::Queens(board) => assert_eq!(board.len(), 8),
            _ => panic!("expected a board"),
        }
    }

    #[test]
    fn invalid_number() {
        let mut ctx = Context::new();
        assert!(build_from(&mut ctx, &["test", "factor", "--product", "many"]).is_err());
    }

    #[test]
    fn product_too_large_for_width() {
        let mut ctx = Context::new();
        assert!(build_from(&mut ctx, &["test", "factor", "--product", "300"]).is_err());
        assert_eq!(ctx.stats().clauses, 0);
    }
}
