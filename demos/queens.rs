use clap::Parser;
use xcover::Matrix;

#[derive(Parser)]
struct Cmdline {
    /// Do not print solutions, just the count.
    #[clap(short, long)]
    no_print: bool,

    size: usize,
}

/// Solves the N-Queens problem: place N queens on an NxN chessboard
/// so that no queen can attack any other queen. Queens can attack
/// horizontally, vertically, or diagonally.
pub fn main() {
    let cmdline = Cmdline::parse();
    let n = cmdline.size;

    let matrix = build_matrix(n);
    let start_time = std::time::Instant::now();
    let mut count = 0;
    for solution in matrix.solve() {
        if !cmdline.no_print {
            let placements = solution.meanings(&matrix);
            let mut grid = vec![vec!['.'; n]; n];
            for &Queen { row, col } in placements {
                grid[row][col] = 'Q';
            }
            #[allow(clippy::needless_range_loop)]
            for row in 0..n {
                for col in 0..n {
                    print!("{}", grid[row][col]);
                }
                println!();
            }
            println!();
        }
        count += 1;
    }
    let elapsed = start_time.elapsed();
    println!("Found {} solutions in {:?}", count, elapsed);
}

/// The meaning of an option is the position of a queen.
pub struct Queen {
    row: usize,
    col: usize,
}

pub fn build_matrix(n: usize) -> Matrix<Queen> {
    let mut builder = Matrix::builder();

    // Primary items Ri and Ci represent a queen in row i / column j.
    // Secondary items Di and Ei represent the two diagonals; left
    // uncolored, they're each usable at most once.
    for i in 0..n {
        builder.add_primary_item(format!("R{}", i));
        builder.add_primary_item(format!("C{}", i));
    }

    for i in 0..2 * n - 1 {
        builder.add_secondary_item(format!("D{}", i));
        builder.add_secondary_item(format!("E{}", i));
    }

    for row in 0..n {
        for col in 0..n {
            let d = row + col;
            let e = n - 1 - row + col;

            builder.add_option(
                Queen { row, col },
                [
                    format!("R{}", row),
                    format!("C{}", col),
                    format!("D{}", d),
                    format!("E{}", e),
                ],
            );
        }
    }

    builder.build()
}
