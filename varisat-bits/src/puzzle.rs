//! Reference problems encoded using the compiler.
//!
//! These are used by the command line tool and by the scenario tests.
use thiserror::Error;

use crate::bit::Bit;
use crate::bits::Bits;
use crate::context::Context;

/// Possible errors while parsing a sudoku grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("line {}: Unexpected character in sudoku input: '{}'", line, unexpected)]
    UnexpectedInput { line: usize, unexpected: char },
    #[error("line {}: Expected 9 cells, found {}", line, cells)]
    RowLength { line: usize, cells: usize },
    #[error("Expected 9 rows, found {}", rows)]
    RowCount { rows: usize },
    #[error("Product {} does not fit into {} bits", product, width)]
    ProductTooLarge { product: u64, width: usize },
}

/// A 9×9 sudoku grid, `0` denotes an empty cell.
pub type SudokuGrid = [[u8; 9]; 9];

/// A well known sudoku with a unique solution.
pub const CLASSIC_SUDOKU: SudokuGrid = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

/// Free inputs of a full adder whose carry is asserted to be set.
pub fn full_adder_carry(ctx: &mut Context) -> [Bit; 3] {
    let inputs = [ctx.new_bit(), ctx.new_bit(), ctx.new_bit()];
    let (_, carry) = ctx.full_adder(inputs[0], inputs[1], inputs[2]);
    let carry_set = ctx.equals(carry, Bit::TRUE);
    ctx.assert_all(&[carry_set]);
    inputs
}

/// Non-trivial factors of a number.
pub struct Factoring {
    pub a: Bits,
    pub b: Bits,
    pub product: Bits,
}

/// Free factors `a` and `b` of the given width with `a * b == product`, `a > 1` and `b > 1`.
///
/// Fails without emitting anything if `product` needs more than `width` bits.
pub fn factor(ctx: &mut Context, width: usize, product: u64) -> Result<Factoring, PuzzleError> {
    if width < 64 && product >> width != 0 {
        return Err(PuzzleError::ProductTooLarge { product, width });
    }

    let a = ctx.new_bits(width);
    let b = ctx.new_bits(width);
    let one = Bits::constant(width, 1);

    let a_times_b = ctx.multiply(&a, &b);
    let product_ok = ctx.bits_equal(&a_times_b, &Bits::constant(width, product));
    let a_ok = ctx.greater_than(&a, &one);
    let b_ok = ctx.greater_than(&b, &one);
    ctx.assert_all(&[product_ok, a_ok, b_ok]);

    Ok(Factoring {
        a,
        b,
        product: a_times_b,
    })
}

/// An `n`×`n` board where set bits are non-attacking queens, one per row.
pub fn queens(ctx: &mut Context, n: usize) -> Vec<Bits> {
    let board: Vec<Bits> = (0..n).map(|_| ctx.new_bits(n)).collect();

    for row in board.iter() {
        let one_per_row = ctx.exactly(1, row);
        ctx.assert_all(&[one_per_row]);
    }

    for column in 0..n {
        let cells: Vec<Bit> = board.iter().map(|row| row[column]).collect();
        let one_per_column = ctx.exactly(1, &cells);
        ctx.assert_all(&[one_per_column]);
    }

    let n = n as isize;
    for offset in -n + 1..n {
        let mut diagonal = vec![];
        let mut anti_diagonal = vec![];
        for row in 0..n {
            let column = offset + row;
            if column >= 0 && column < n {
                diagonal.push(board[row as usize][column as usize]);
                anti_diagonal.push(board[(n - row - 1) as usize][column as usize]);
            }
        }
        let diagonal_ok = ctx.at_most(1, &diagonal);
        let anti_diagonal_ok = ctx.at_most(1, &anti_diagonal);
        ctx.assert_all(&[diagonal_ok, anti_diagonal_ok]);
    }

    board
}

/// Sudoku cells as 4-bit numbers in `1..=9`, given cells are constants.
pub fn sudoku(ctx: &mut Context, grid: &SudokuGrid) -> Vec<Vec<Bits>> {
    let one = Bits::constant(4, 1);
    let nine = Bits::constant(4, 9);

    let mut board = vec![];
    for grid_row in grid.iter() {
        let mut row = vec![];
        for &given in grid_row.iter() {
            let cell = if given == 0 {
                ctx.new_bits(4)
            } else {
                Bits::constant(4, given as u64)
            };
            let low = ctx.greater_equal(&cell, &one);
            let high = ctx.less_equal(&cell, &nine);
            ctx.assert_all(&[low, high]);
            row.push(cell);
        }
        board.push(row);
    }

    let mut groups: Vec<Vec<Bits>> = board.clone();
    for column in 0..9 {
        groups.push(board.iter().map(|row| row[column].clone()).collect());
    }
    for block in 0..9 {
        let (top, left) = (block / 3 * 3, block % 3 * 3);
        groups.push(
            board[top..top + 3]
                .iter()
                .flat_map(|row| row[left..left + 3].iter().cloned())
                .collect(),
        );
    }

    for group in groups.iter() {
        let different = ctx.all_different(group);
        ctx.assert_all(&[different]);
    }

    board
}

/// Parse a sudoku grid.
///
/// The input has 9 non-empty lines of 9 cells each. A cell is a digit `1`-`9` or `0`/`.` for an
/// empty cell. Whitespace within a line is ignored.
pub fn parse_sudoku(input: &str) -> Result<SudokuGrid, PuzzleError> {
    let mut grid = [[0; 9]; 9];
    let mut rows = 0;

    for (line_index, line) in input.lines().enumerate() {
        let line_number = line_index + 1;
        let mut cells = vec![];
        for c in line.chars().filter(|c| !c.is_whitespace()) {
            match c {
                '.' => cells.push(0),
                '0'..='9' => cells.push(c as u8 - b'0'),
                _ => {
                    return Err(PuzzleError::UnexpectedInput {
                        line: line_number,
                        unexpected: c,
                    })
                }
            }
        }
        if cells.is_empty() {
            continue;
        }
        if cells.len() != 9 {
            return Err(PuzzleError::RowLength {
                line: line_number,
                cells: cells.len(),
            });
        }
        if rows < 9 {
            grid[rows].copy_from_slice(&cells);
        }
        rows += 1;
    }

    if rows != 9 {
        return Err(PuzzleError::RowCount { rows });
    }

    Ok(grid)
}
