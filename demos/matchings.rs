use std::collections::HashMap;
use std::time::Instant;

use xcover::{Heuristic, Matrix, ZddNode};

/// Counts all perfect matchings of the complete graph K_n by building a ZDD
/// over "pick this edge" options instead of enumerating every matching.
///
/// A perfect matching of K_n picks a set of disjoint edges covering every
/// vertex exactly once — an exact cover problem where items are vertices and
/// options are edges.
fn main() {
    let n = 16usize;
    let matrix = build_matrix(n);

    let expected = double_factorial(n - 1);
    println!("Expected solution count: {}", expected);

    let start = Instant::now();
    let direct_count = matrix.solve().count();
    println!("solve() solution count: {} ({:?})", direct_count, start.elapsed());

    let start = Instant::now();
    let nodes: Vec<ZddNode> = matrix.solve_zdd(true, Heuristic::Leftmost).collect();
    let zdd_count = count_paths_to_true(&nodes);
    println!(
        "solve_zdd() solution count: {} ({} nodes, {:?})",
        zdd_count,
        nodes.len(),
        start.elapsed()
    );
}

fn double_factorial(n: usize) -> u64 {
    let mut product = 1u64;
    let mut k = n as i64;
    while k > 0 {
        product *= k as u64;
        k -= 2;
    }
    product
}

/// Counts the number of root-to-1 paths in a ZDD given as a flat node
/// stream, without ever materializing a path. The last emitted node is the
/// diagram's root, by convention.
fn count_paths_to_true(nodes: &[ZddNode]) -> u64 {
    let by_id: HashMap<u64, &ZddNode> = nodes.iter().map(|n| (n.id, n)).collect();
    let mut memo: HashMap<u64, u64> = HashMap::new();
    memo.insert(0, 0);
    memo.insert(1, 1);

    fn count(id: u64, by_id: &HashMap<u64, &ZddNode>, memo: &mut HashMap<u64, u64>) -> u64 {
        if let Some(&cached) = memo.get(&id) {
            return cached;
        }
        let node = by_id[&id];
        let total = count(node.lo, by_id, memo) + count(node.hi, by_id, memo);
        memo.insert(id, total);
        total
    }

    match nodes.last() {
        Some(root) => count(root.id, &by_id, &mut memo),
        None => 0,
    }
}

fn build_matrix(n: usize) -> Matrix<(usize, usize)> {
    let mut builder = Matrix::builder();
    for v in 0..n {
        builder.add_primary_item(format!("v{v}"));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            builder.add_option((i, j), [format!("v{i}"), format!("v{j}")]);
        }
    }
    builder.build()
}
