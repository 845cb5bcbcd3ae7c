use std::collections::HashSet;

use clap::Parser;
use xcover::Matrix;

#[derive(Parser)]
struct Cmdline {
    /// Do not print solutions, just the count.
    #[clap(short, long)]
    no_print: bool,
}

/// Solves the pentominoes puzzle: place all 12 pentominoes into a 20x3 grid.
/// Each pentomino is a shape made of 5 connected squares, traditionally
/// named after the letter it resembles: F, I, L, N, P, T, U, V, W, X, Y, Z.
///
/// https://en.wikipedia.org/wiki/Pentomino
pub fn main() {
    let cmdline = Cmdline::parse();
    let width = 20;
    let height = 3;

    let matrix = build_matrix(width, height);
    let start_time = std::time::Instant::now();
    let mut count = 0;
    for solution in matrix.solve() {
        if !cmdline.no_print {
            let placements = solution.meanings(&matrix);
            let mut grid = vec![vec!['.'; width]; height];
            for placement in placements {
                for &(row, col) in &placement.cells {
                    grid[row][col] = placement.piece;
                }
            }
            for row in 0..height {
                for col in 0..width {
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

#[derive(Debug, Clone)]
struct Placement {
    piece: char,
    cells: Vec<(usize, usize)>,
}

fn build_matrix(width: usize, height: usize) -> Matrix<Placement> {
    let mut builder = Matrix::builder();

    for row in 0..height {
        for col in 0..width {
            builder.add_primary_item(format!("C{}_{}", row, col));
        }
    }

    let pieces = ['F', 'I', 'L', 'N', 'P', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];
    for &piece in &pieces {
        builder.add_primary_item(piece.to_string());
    }

    let shapes = vec![
        vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
        vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
        vec![(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)],
        vec![(0, 0), (1, 0), (2, 0), (2, 1), (3, 1)],
        vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
        vec![(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)],
        vec![(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)],
        vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
        vec![(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)],
        vec![(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)],
        vec![(0, 0), (1, 0), (2, 0), (2, 1), (3, 0)],
        vec![(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)],
    ];

    for (&piece, shape) in pieces.iter().zip(shapes.iter()) {
        let mut seen = HashSet::new();

        for row in 0..height {
            for col in 0..width {
                for transform in 0..8 {
                    let mut transformed = Vec::new();
                    let mut valid = true;

                    for &(dr, dc) in shape {
                        let (tr, tc) = match transform {
                            0 => (dr, dc),
                            1 => (-dr, dc),
                            2 => (dr, -dc),
                            3 => (-dr, -dc),
                            4 => (dc, dr),
                            5 => (-dc, dr),
                            6 => (dc, -dr),
                            7 => (-dc, -dr),
                            _ => unreachable!(),
                        };

                        let new_row = (row as isize + tr) as usize;
                        let new_col = (col as isize + tc) as usize;

                        if new_row >= height || new_col >= width {
                            valid = false;
                            break;
                        }

                        transformed.push((new_row, new_col));
                    }

                    if valid {
                        let mut items = vec![piece.to_string()];
                        for &(r, c) in &transformed {
                            items.push(format!("C{}_{}", r, c));
                        }

                        let mut sorted = items.clone();
                        sorted.sort();

                        if seen.insert(sorted) {
                            builder.add_option(
                                Placement {
                                    piece,
                                    cells: transformed,
                                },
                                items,
                            );
                        }
                    }
                }
            }
        }
    }

    builder.build()
}
