//! Builders for some common exact-cover-with-colors problems, used by the
//! crate's own doctests and by callers exploring the API.

use crate::Matrix;

/// The toy problem from equation (49) of Knuth 7.2.2.1.
///
/// 3 primary items, `p`, `q`, `r`; 2 secondary items, `x`, `y`. The options:
/// - `p q x y:A`
/// - `p r x:A y`
/// - `p x:B`
/// - `q x:A`
/// - `r y:B`
///
/// # Example
///
/// ```
/// let matrix = xcover::samples::toy();
/// let solutions = matrix.solve_all();
/// assert_eq!(solutions.len(), 1);
/// ```
pub fn toy() -> Matrix<usize> {
    let mut builder = Matrix::builder();
    builder.add_primary_items(["p", "q", "r"]);
    builder.add_secondary_items(["x", "y"]);
    builder.add_option(1, ["p", "q", "x", "y:A"]);
    builder.add_option(2, ["p", "r", "x:A", "y"]);
    builder.add_option(3, ["p", "x:B"]);
    builder.add_option(4, ["q", "x:A"]);
    builder.add_option(5, ["r", "y:B"]);
    builder.build()
}

/// Knuth's uncolored 6-option example from Table 1 of 7.2.2.1: 7 primary
/// items `a`..`g`, no secondary items. Has a single solution.
pub fn knuth_six_option() -> Matrix<usize> {
    let mut builder = Matrix::builder();
    builder.add_primary_items(["a", "b", "c", "d", "e", "f", "g"]);
    builder.add_option(0, ["c", "e"]);
    builder.add_option(1, ["a", "d", "g"]);
    builder.add_option(2, ["b", "c", "f"]);
    builder.add_option(3, ["a", "d", "f"]);
    builder.add_option(4, ["b", "g"]);
    builder.add_option(5, ["d", "e", "g"]);
    builder.build()
}

/// The exact cover example from Wikipedia's "Exact cover" article: items
/// `1`..`7`, options `A`..`F`. Has a single solution, `{B, D, F}`.
pub fn wikipedia_example() -> Matrix<&'static str> {
    let mut builder = Matrix::builder();
    builder.add_primary_items(["1", "2", "3", "4", "5", "6", "7"]);
    builder.add_option("A", ["1", "4", "7"]);
    builder.add_option("B", ["1", "4"]);
    builder.add_option("C", ["4", "5", "7"]);
    builder.add_option("D", ["3", "5", "6"]);
    builder.add_option("E", ["2", "3", "6", "7"]);
    builder.add_option("F", ["2", "7"]);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toy_has_one_solution() {
        let matrix = toy();
        let solutions = matrix.solve_all();
        assert_eq!(solutions.len(), 1);
        let mut options = solutions[0].option_numbers().to_vec();
        options.sort_unstable();
        assert_eq!(options, [1, 3]);
    }

    #[test]
    fn knuth_six_option_solution_is_0_3_4() {
        let matrix = knuth_six_option();
        let solutions = matrix.solve_all();
        assert_eq!(solutions.len(), 1);
        let mut options = solutions[0].option_numbers().to_vec();
        options.sort_unstable();
        assert_eq!(options, [0, 3, 4]);
    }

    #[test]
    fn wikipedia_example_solution_is_b_d_f() {
        let matrix = wikipedia_example();
        let solutions = matrix.solve_all();
        assert_eq!(solutions.len(), 1);
        let mut meanings: Vec<&&str> = solutions[0].meanings(&matrix);
        meanings.sort_unstable();
        assert_eq!(meanings, [&"B", &"D", &"F"]);
    }
}
