//! End-to-end scenarios using the reference puzzles.

use varisat::dimacs::DimacsParser;
use varisat::Solver;

use varisat_bits::puzzle::{self, CLASSIC_SUDOKU};
use varisat_bits::{Bits, Context};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn full_adder_carry() {
    init_logging();
    let mut ctx = Context::new();
    let inputs = puzzle::full_adder_carry(&mut ctx);

    assert!(ctx.solve().expect("solve failed"));

    let set = inputs.iter().filter(|&&bit| ctx.value(bit)).count();
    assert!(set >= 2);
}

#[test]
fn factor_234() {
    init_logging();
    let mut ctx = Context::new();
    let factoring = puzzle::factor(&mut ctx, 8, 234).expect("product fits");

    assert!(ctx.solve().expect("solve failed"));

    let a = ctx.value_nat(&factoring.a);
    let b = ctx.value_nat(&factoring.b);
    assert_eq!(a * b, 234);
    assert!(a > 1 && b > 1);
    assert_eq!(ctx.value_nat(&factoring.product), 234);
}

#[test]
fn factor_prime() {
    init_logging();
    let mut ctx = Context::new();
    puzzle::factor(&mut ctx, 8, 251).expect("product fits");

    assert!(!ctx.solve().expect("solve failed"));
}

#[test]
fn factor_product_wider_than_factors() {
    init_logging();
    let mut ctx = Context::new();

    assert!(puzzle::factor(&mut ctx, 8, 300).is_err());

    // The same product is found once the factors are wide enough.
    let factoring = puzzle::factor(&mut ctx, 9, 300).expect("product fits");
    assert!(ctx.solve().expect("solve failed"));

    let a = ctx.value_nat(&factoring.a);
    let b = ctx.value_nat(&factoring.b);
    assert_eq!(a * b, 300);
    assert!(a > 1 && b > 1);
}

#[test]
fn factor_enumerate_all() {
    init_logging();
    let mut ctx = Context::new();
    let factoring = puzzle::factor(&mut ctx, 8, 234).expect("product fits");

    let mut found = vec![];
    while ctx.solve().expect("solve failed") {
        let a = ctx.value_nat(&factoring.a);
        let b = ctx.value_nat(&factoring.b);
        found.push((a, b));

        let same_a = ctx.bits_equal(&factoring.a, &Bits::constant(8, a));
        ctx.assert_all(&[!same_a]);
    }

    found.sort();
    let expected: Vec<(u64, u64)> = (2..=117)
        .filter(|a| 234 % a == 0)
        .map(|a| (a, 234 / a))
        .filter(|&(_, b)| b < 256)
        .collect();
    assert_eq!(found, expected);
}

fn check_queens(ctx: &Context, board: &[Bits]) {
    let n = board.len();
    let queens: Vec<(usize, usize)> = (0..n)
        .flat_map(|row| (0..n).map(move |column| (row, column)))
        .filter(|&(row, column)| ctx.value(board[row][column]))
        .collect();

    assert_eq!(queens.len(), n);
    for (index, &(row_a, column_a)) in queens.iter().enumerate() {
        for &(row_b, column_b) in queens[index + 1..].iter() {
            assert_ne!(row_a, row_b);
            assert_ne!(column_a, column_b);
            assert_ne!(
                row_a as isize - column_a as isize,
                row_b as isize - column_b as isize
            );
            assert_ne!(row_a + column_a, row_b + column_b);
        }
    }
}

#[test]
fn eight_queens() {
    init_logging();
    let mut ctx = Context::new();
    let board = puzzle::queens(&mut ctx, 8);

    assert!(ctx.solve().expect("solve failed"));
    check_queens(&ctx, &board);
}

#[test]
fn three_queens_unsat() {
    init_logging();
    let mut ctx = Context::new();
    puzzle::queens(&mut ctx, 3);

    assert!(!ctx.solve().expect("solve failed"));
}

#[test]
fn classic_sudoku() {
    init_logging();
    let mut ctx = Context::new();
    let board = puzzle::sudoku(&mut ctx, &CLASSIC_SUDOKU);

    assert!(ctx.solve().expect("solve failed"));

    let solution: Vec<Vec<u64>> = board
        .iter()
        .map(|row| row.iter().map(|cell| ctx.value_nat(cell)).collect())
        .collect();

    for (row, given_row) in solution.iter().zip(CLASSIC_SUDOKU.iter()) {
        for (&value, &given) in row.iter().zip(given_row.iter()) {
            if given != 0 {
                assert_eq!(value, given as u64);
            }
        }
    }

    let digits: Vec<u64> = (1..=9).collect();
    for i in 0..9 {
        let mut row = solution[i].clone();
        let mut column: Vec<u64> = solution.iter().map(|row| row[i]).collect();
        let mut block: Vec<u64> = (0..9)
            .map(|j| solution[i / 3 * 3 + j / 3][i % 3 * 3 + j % 3])
            .collect();
        row.sort();
        column.sort();
        block.sort();
        assert_eq!(row, digits);
        assert_eq!(column, digits);
        assert_eq!(block, digits);
    }
}

#[test]
fn recorded_formula_solves_standalone() {
    init_logging();
    let mut ctx = Context::new();
    ctx.record_formula(true);
    let board = puzzle::queens(&mut ctx, 5);

    let mut dimacs = vec![];
    ctx.write_dimacs(&mut dimacs).expect("writing dimacs failed");

    let formula = DimacsParser::parse(&dimacs[..]).expect("parsing failed");
    assert_eq!(formula.len(), ctx.stats().clauses);

    let mut solver = Solver::new();
    solver.add_formula(&formula);
    assert!(solver.solve().expect("solve failed"));

    assert!(ctx.solve().expect("solve failed"));
    check_queens(&ctx, &board);
}
