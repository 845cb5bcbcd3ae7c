//! Exact cover with colors, via Knuth's dancing-cells algorithm
//!
//! This crate solves the **exact cover with colors** problem: given a set
//! of *primary items*, an optional set of *secondary items*, and a set of
//! *options* (subsets of those items), find every subcollection of options
//! that covers each primary item exactly once and colors each secondary
//! item consistently.
//!
//! Options can contain secondary items with or without colors. An
//! uncolored secondary item is used at most once (a "zero or one"
//! constraint). A colored secondary item can be used with the *same* color
//! as many times as needed, but never uncolored or with a different color.
//!
//! Two search modes are available:
//! - [`Matrix::solve`] / [`covers`] enumerate solutions directly.
//! - [`Matrix::solve_zdd`] / [`covers_zdd`] build a Zero-suppressed
//!   Decision Diagram representing the whole solution family at once,
//!   using a signature memo cache to collapse isomorphic subproblems —
//!   practical for solution counts too large to enumerate one at a time.
//!
//! The solver can be used for Sudoku-like puzzles, polyomino tilings,
//! word squares, most Nikoli puzzles, graph coloring, scheduling, and any
//! other problem that reduces to exact cover. See the `demos/` directory
//! for worked examples.

mod adapters;
mod builder;
mod color;
mod dlx_format;
mod encode;
mod error;
mod heuristic;
mod ids;
mod matrix;
pub mod samples;
mod search;
mod substrate;
mod unique;
mod verify;
mod zdd;

pub use self::adapters::{covers_bool, covers_typed, feed, swapped, Swapped, ZddSink};
pub use self::builder::Builder;
pub use self::color::ColoredItem;
pub use self::dlx_format::{read as read_dlx, write as write_dlx, DlxFile, DlxParseError};
pub use self::error::{BuildError, VerifyViolation};
pub use self::heuristic::Heuristic;
pub use self::ids::{Color, ItemId, OptionId};
pub use self::matrix::{Matrix, Solution};
pub use self::unique::Unique;
pub use self::verify::verify;
pub use self::zdd::{ZddNode, ZddSearch};

/// Solves an exact cover (with colors) problem given as raw token lists,
/// without attaching a "meaning" to each option.
///
/// `primary`/`secondary` may be empty to request inference (see
/// [`Builder`]). Set `colored` to `true` to parse `item:color` tokens;
/// otherwise a literal colon in a token is just part of the item name.
///
/// ```
/// let options = vec![
///     vec!["p".to_string(), "q".to_string()],
///     vec!["r".to_string()],
/// ];
/// let solutions: Vec<_> = xcover::covers(options, vec![], vec![], false)
///     .unwrap()
///     .collect();
/// assert_eq!(solutions, [vec![0, 1]]);
/// ```
pub fn covers(
    options: Vec<Vec<String>>,
    primary: Vec<String>,
    secondary: Vec<String>,
    colored: bool,
) -> Result<impl Iterator<Item = Vec<usize>>, BuildError> {
    let encoded = encode::encode(&primary, &secondary, &options, colored)?;
    let meanings = vec![(); options.len()];
    let matrix: Matrix<()> = Matrix::from_encoded(encoded, meanings);
    Ok(matrix
        .solve()
        .map(|solution| solution.option_numbers().to_vec()))
}

/// Builds the ZDD representing every solution of an exact cover (with
/// colors) problem given as raw token lists.
pub fn covers_zdd(
    options: Vec<Vec<String>>,
    primary: Vec<String>,
    secondary: Vec<String>,
    colored: bool,
    use_memo: bool,
    heuristic: Heuristic,
) -> Result<ZddSearch, BuildError> {
    let encoded = encode::encode(&primary, &secondary, &options, colored)?;
    let meanings = vec![(); options.len()];
    let matrix: Matrix<()> = Matrix::from_encoded(encoded, meanings);
    Ok(matrix.solve_zdd(use_memo, heuristic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_free_function_matches_builder_solve() {
        let options = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
            vec!["b".to_string(), "c".to_string()],
        ];
        let solutions: Vec<_> = covers(options, vec![], vec![], false).unwrap().collect();
        assert_eq!(solutions, [vec![0, 1]]);
    }

    #[test]
    fn covers_zdd_runs_on_a_small_problem() {
        let options = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
            vec!["a".to_string()],
            vec!["b".to_string(), "c".to_string()],
        ];
        let direct_count = covers(options.clone(), vec![], vec![], false)
            .unwrap()
            .count();

        let zdd: Vec<_> = covers_zdd(options, vec![], vec![], false, true, Heuristic::default())
            .unwrap()
            .collect();
        assert!(direct_count > 0);
        assert!(!zdd.is_empty());
    }
}
