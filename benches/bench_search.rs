use criterion::BenchmarkId;
use criterion::Throughput;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;
use xcover::Matrix;

pub fn build_sudoku_matrix(c: &mut Criterion) {
    c.bench_function("build_sudoku_matrix", |b| {
        let puzzle = ".91.7...25.....7..3.7.4..69.4.3........59..1......42.....9....5....1.8....96..3.";
        b.iter(|| black_box(sudoku_matrix(puzzle)));
    });
}

pub fn solve_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_queens");
    group.measurement_time(Duration::from_secs(10));
    for n in [6, 7, 8] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let matrix = queens_matrix(n);
            b.iter(|| black_box(matrix.solve_all().len()));
        });
    }
}

criterion_group!(benches, build_sudoku_matrix, solve_queens);
criterion_main!(benches);

/// Isomorphic to a Sudoku-solving problem, but built fresh each iteration to
/// measure encoding cost rather than search cost.
fn sudoku_matrix(input: &str) -> Matrix<(usize, usize, u32)> {
    let mut builder = Matrix::builder();
    for row in 0..9 {
        for col in 0..9 {
            builder.add_primary_item(format!("F{row}{col}"));
        }
    }
    for row in 0..9 {
        for value in 1..10 {
            builder.add_primary_item(format!("R{row}{value}"));
        }
    }
    for col in 0..9 {
        for value in 1..10 {
            builder.add_primary_item(format!("C{col}{value}"));
        }
    }
    for box_num in 0..9 {
        for value in 1..10 {
            builder.add_primary_item(format!("B{box_num}{value}"));
        }
    }

    let chars: Vec<char> = input.chars().collect();
    for (row, cells) in chars.chunks(9).enumerate() {
        for (col, &ch) in cells.iter().enumerate() {
            let box_num = row / 3 * 3 + col / 3;
            let values: Vec<u32> = if ch == '.' {
                (1..=9).collect()
            } else {
                vec![ch.to_digit(10).expect("invalid digit")]
            };
            for value in values {
                builder.add_option(
                    (row, col, value),
                    [
                        format!("F{row}{col}"),
                        format!("R{row}{value}"),
                        format!("C{col}{value}"),
                        format!("B{box_num}{value}"),
                    ],
                );
            }
        }
    }
    builder.build()
}

fn queens_matrix(n: usize) -> Matrix<(usize, usize)> {
    let mut builder = Matrix::builder();
    for i in 0..n {
        builder.add_primary_item(format!("R{i}"));
        builder.add_primary_item(format!("C{i}"));
    }
    for i in 0..2 * n - 1 {
        builder.add_secondary_item(format!("D{i}"));
        builder.add_secondary_item(format!("E{i}"));
    }
    for row in 0..n {
        for col in 0..n {
            let d = row + col;
            let e = n - 1 - row + col;
            builder.add_option(
                (row, col),
                [
                    format!("R{row}"),
                    format!("C{col}"),
                    format!("D{d}"),
                    format!("E{e}"),
                ],
            );
        }
    }
    builder.build()
}
