use crate::error::BuildError;
use crate::heuristic::Heuristic;
use crate::search::Search;
use crate::substrate::Substrate;
use crate::unique::Unique;
use crate::zdd::ZddSearch;
use crate::Builder;

/// A compiled, immutable specification of an exact cover (with colors)
/// problem.
///
/// Build one with [`Matrix::builder`], or with the free functions
/// [`crate::covers`] / [`crate::covers_bool`] / [`crate::covers_zdd`] if you
/// don't need to attach a "meaning" to each option.
///
/// ```
/// use xcover::Matrix;
/// let mut builder = Matrix::builder();
/// builder.add_primary_item("a");
/// builder.add_option(1, ["a"]);
/// let matrix = builder.build();
/// ```
pub struct Matrix<T> {
    node_item: Vec<u32>,
    node_color: Vec<u32>,
    options_ptr: Vec<u32>,
    n_items: usize,
    n_primary: usize,
    item_names: Vec<String>,
    meanings: Vec<T>,
}

/// A solution: the option indices (0-based, in insertion order) that the
/// solver chose.
///
/// ```
/// let mut toy = xcover::samples::toy();
/// toy.solve_all().into_iter().for_each(|solution| {
///     println!("Solution: {:?}", solution.meanings(&toy));
/// });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    options: Vec<usize>,
}

impl Solution {
    /// The 0-based option indices chosen for this solution, in the order
    /// they were originally added to the [`Builder`].
    #[must_use]
    pub fn option_numbers(&self) -> &[usize] {
        &self.options
    }

    /// The meanings (see [`Builder::add_option`]) of the chosen options.
    #[must_use]
    pub fn meanings<'a, T>(&self, matrix: &'a Matrix<T>) -> Vec<&'a T> {
        self.options.iter().map(|&i| matrix.meaning(i)).collect()
    }
}

impl<T> Matrix<T> {
    #[must_use]
    pub fn num_items(&self) -> usize {
        self.n_items
    }

    #[must_use]
    pub fn num_primary_items(&self) -> usize {
        self.n_primary
    }

    #[must_use]
    pub fn num_options(&self) -> usize {
        self.options_ptr.len() - 1
    }

    #[must_use]
    pub fn meaning(&self, option_number: usize) -> &T {
        &self.meanings[option_number]
    }

    #[must_use]
    pub fn item_name(&self, item: usize) -> &str {
        &self.item_names[item]
    }

    /// Low-level constructor from already-encoded arrays (component A's
    /// output). Prefer [`Matrix::builder`] unless you're implementing a
    /// boundary adapter.
    pub(crate) fn from_encoded(encoded: crate::encode::Encoded, meanings: Vec<T>) -> Self {
        Matrix {
            node_item: encoded.node_item,
            node_color: encoded.node_color,
            options_ptr: encoded.options_ptr,
            n_items: encoded.n_items,
            n_primary: encoded.n_primary,
            item_names: encoded.item_names,
            meanings,
        }
    }

    /// Creates a `Builder` to configure a matrix.
    #[must_use]
    pub fn builder() -> Builder<T> {
        Builder::default()
    }

    fn substrate(&self) -> Substrate {
        Substrate::new(
            self.node_item.clone(),
            self.node_color.clone(),
            self.options_ptr.clone(),
            self.n_items,
            self.n_primary,
        )
    }

    /// Returns a lazy, resumable search over all solutions. Each solve call
    /// builds its own substrate copy, so multiple independent searches over
    /// the same `Matrix` never interfere, and the returned iterator owns
    /// that copy outright — it doesn't borrow from `self` and can outlive it.
    pub fn solve(&self) -> impl Iterator<Item = Solution> {
        Search::new(self.substrate()).map(|options| Solution { options })
    }

    /// Eagerly collects every solution.
    ///
    /// ```
    /// let matrix = xcover::samples::toy();
    /// let solutions = matrix.solve_all();
    /// assert_eq!(solutions.len(), 1);
    /// ```
    #[must_use]
    pub fn solve_all(&self) -> Vec<Solution> {
        self.solve().collect()
    }

    /// Solves the matrix, returning a unique solution if there is one, or
    /// `Unique::Ambiguous` if there are multiple solutions. If there are no
    /// solutions, `Unique::None` is returned.
    ///
    /// ```
    /// use xcover::{Matrix, Unique};
    ///
    /// let mut builder = Matrix::builder();
    /// builder.add_primary_item("x");
    /// builder.add_primary_item("y");
    /// builder.add_option("a", vec!["x", "y"]);
    /// builder.add_option("b", vec!["x", "y"]);
    /// let matrix = builder.build();
    /// assert!(matrix.solve_unique().is_ambiguous());
    /// ```
    #[must_use]
    pub fn solve_unique(&self) -> Unique<Solution> {
        let mut iter = self.solve();
        match (iter.next(), iter.next()) {
            (Some(first), Some(second)) => Unique::Ambiguous(first, second),
            (Some(first), None) => Unique::One(first),
            (None, _) => Unique::None,
        }
    }

    /// Returns the first solution found, if any, without searching for more.
    #[must_use]
    pub fn solve_once(&self) -> Option<Solution> {
        self.solve().next()
    }

    /// Returns a lazy stream of ZDD nodes representing the whole solution
    /// family (Algorithm Z). `use_memo` enables the state-signature memo
    /// cache; `heuristic` picks the branching order.
    pub fn solve_zdd(&self, use_memo: bool, heuristic: Heuristic) -> ZddSearch {
        let n_secondary = self.n_items - self.n_primary;
        ZddSearch::new(self.substrate(), n_secondary, &self.node_color, use_memo, heuristic)
    }

    /// Builds a matrix from already-compiled items and options; used by
    /// [`Builder::try_build`].
    pub(crate) fn try_from_tokens(
        primary: &[String],
        secondary: &[String],
        options: Vec<(T, Vec<String>)>,
    ) -> Result<Self, BuildError> {
        let (meanings, token_lists): (Vec<T>, Vec<Vec<String>>) = options.into_iter().unzip();
        let encoded = crate::encode::encode(primary, secondary, &token_lists, true)?;
        Ok(Matrix::from_encoded(encoded, meanings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_knuths_toy_example() {
        let mut builder = Matrix::builder();
        builder.add_primary_items(["a", "b", "c", "d", "e", "f", "g"]);
        builder.add_option(Some(0), ["c", "e"]);
        builder.add_option(Some(1), vec!["a", "d", "g"]);
        builder.add_option(Some(2), vec!["b", "c", "f"]);
        builder.add_option(Some(3), vec!["a", "d", "f"]);
        builder.add_option(Some(4), vec!["b", "g"]);
        builder.add_option(Some(5), vec!["d", "e", "g"]);

        let matrix = builder.build();
        assert_eq!(matrix.num_items(), 7);
        assert_eq!(matrix.num_primary_items(), 7);
        assert_eq!(matrix.num_options(), 6);

        let solutions = matrix.solve_all();
        assert_eq!(solutions.len(), 1);
        let mut options = solutions[0].option_numbers().to_vec();
        options.sort_unstable();
        assert_eq!(options, [0, 3, 4]);
    }

    #[test]
    fn test_colored_items() {
        let mut builder = Matrix::builder();
        builder.add_primary_items(["p", "q", "r"]);
        builder.add_secondary_items(["x", "y"]);
        builder.add_option("p q x y:A", ["p", "q", "x", "y:A"]);
        builder.add_option("p r x:A y", ["p", "r", "x:A", "y"]);
        builder.add_option("p x:B", ["p", "x:B"]);
        builder.add_option("q x:A", ["q", "x:A"]);
        builder.add_option("r y:B", ["r", "y:B"]);
        let matrix = builder.build();

        let solutions = matrix
            .solve_all()
            .into_iter()
            .map(|s| s.meanings(&matrix))
            .collect::<Vec<_>>();

        assert_eq!(solutions, [[&"q x:A", &"p r x:A y"]]);
    }

    #[test]
    fn eight_queens_has_92_solutions() {
        let matrix = queens_matrix(8);
        assert_eq!(matrix.solve_all().len(), 92);
    }

    #[test]
    fn unsolvable_problem_yields_no_solutions() {
        // 13 options, each covering a single item out of 3; no combination
        // covers all three exactly once since every option also re-covers
        // item "a", making every candidate over-cover it.
        let mut builder = Matrix::builder();
        builder.add_primary_items(["a", "b", "c"]);
        for i in 0..13 {
            builder.add_option(i, ["a", "b"]);
        }
        let matrix = builder.build();
        assert_eq!(matrix.solve_all().len(), 0);
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
}
