use std::fmt::Debug;
use std::fmt::Display;

use crate::error::BuildError;
use crate::Matrix;

/// A builder for a matrix.
///
/// The usual way to use this is to call `Matrix::builder()` to get a
/// `Builder`, call `add_primary_items()`, `add_secondary_items()`, and
/// `add_option()` to configure the matrix, and finally call `build()` to get
/// a `Matrix`.
///
/// The `add_option()` method takes a parameter of type `T`, which can carry
/// any data you want. The solver does not look at the meanings, but simply
/// returns them to you when you call `meanings()` on a `Solution`. Typically
/// this meaning is a struct or enum that helps you reconstruct a solution
/// from a chosen set of options. For example, if you are solving a Sudoku
/// puzzle, the meaning might be a struct that contains the row, column, and
/// value of a cell. See `demos/sudoku.rs` for an example.
///
/// Every option must contain at least one primary item; secondary items are
/// optional. If neither `add_primary_items` nor `add_secondary_items` is
/// ever called, every item that appears in an option is treated as primary;
/// if only one side is declared, the other is inferred by set difference
/// over the items used in the options.
///
/// # Example
/// ```
/// use xcover::Matrix;
///
/// let mut builder = Matrix::builder();
/// builder.add_primary_items(["p", "q", "r"]);
/// builder.add_secondary_items(["x", "y"]);
/// builder.add_option(1, ["p", "q", "x", "y:A"]);
/// builder.add_option(2, ["p", "r", "x:A", "y"]);
/// builder.add_option(3, ["p", "x:B"]);
/// builder.add_option(4, ["q", "x:A"]);
/// builder.add_option(5, ["r", "y:B"]);
/// let matrix = builder.build();
/// ```
#[derive(Debug, Clone)]
pub struct Builder<T> {
    primary_items: Vec<String>,
    secondary_items: Vec<String>,
    options: Vec<(T, Vec<String>)>,
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self {
            primary_items: Vec::new(),
            secondary_items: Vec::new(),
            options: Vec::new(),
        }
    }
}

impl<T> Builder<T> {
    /// Creates a new `Builder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds primary items to the matrix.
    pub fn add_primary_items<S: Display>(&mut self, items: impl IntoIterator<Item = S>) {
        self.primary_items
            .extend(items.into_iter().map(|t| t.to_string()));
    }

    /// Adds secondary items to the matrix.
    pub fn add_secondary_items<S: Display>(&mut self, items: impl IntoIterator<Item = S>) {
        self.secondary_items
            .extend(items.into_iter().map(|t| t.to_string()));
    }

    /// Adds a single primary item to the matrix.
    pub fn add_primary_item(&mut self, item: impl Display) {
        self.primary_items.push(item.to_string());
    }

    /// Adds a single secondary item to the matrix.
    pub fn add_secondary_item(&mut self, item: impl Display) {
        self.secondary_items.push(item.to_string());
    }

    /// Adds an option to the matrix. Each token is either a bare item name,
    /// or `item:color` to constrain a secondary item's color in this option.
    pub fn add_option<S: Display>(&mut self, meaning: T, items: impl IntoIterator<Item = S>) {
        let items: Vec<_> = items.into_iter().map(|i| i.to_string()).collect();
        self.options.push((meaning, items));
    }

    /// Builds the matrix. Panics if the configuration is invalid; use
    /// `try_build()` to handle the error instead.
    pub fn build(self) -> Matrix<T> {
        self.try_build().unwrap()
    }

    /// Builds the matrix, returning a `Result`.
    pub fn try_build(self) -> Result<Matrix<T>, BuildError> {
        Matrix::try_from_tokens(&self.primary_items, &self.secondary_items, self.options)
    }
}

impl<T: Debug> Builder<T> {
    /// Prints the configuration to stdout in the text format Knuth's dlx2
    /// program reads. Only available when the meaning type is `Debug`.
    pub fn dump_knuth_format(&self) {
        println!("| primary items: {}", self.primary_items.len());
        println!("| secondary items: {}", self.secondary_items.len());
        println!("| options: {}", self.options.len());
        print!("{}", self.primary_items.join(" "));
        if !self.secondary_items.is_empty() {
            print!(" | ");
            print!("{}", self.secondary_items.join(" "));
        }
        println!();
        for (i, (meaning, items)) in self.options.iter().enumerate() {
            println!("| Option {}: {:?}", i, meaning);
            println!("{}", items.join(" "));
        }
    }
}
