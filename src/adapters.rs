//! Boundary adapters (component F): alternative problem inputs, and a
//! pluggable sink for handing the ZDD node stream to a third-party library.

use crate::encode::Encoded;
use crate::ids::OptionId;
use crate::matrix::{Matrix, Solution};
use crate::zdd::ZddNode;
use crate::ColoredItem;

/// Solves a problem given directly as a boolean matrix: `matrix[row][col]`
/// true means option `row` contains item `col`. No secondary items, no
/// colors — for that, use [`crate::Builder`].
///
/// ```
/// use xcover::covers_bool;
///
/// let matrix = vec![
///     vec![true, false],
///     vec![false, true],
/// ];
/// let solutions: Vec<_> = covers_bool(&matrix).collect();
/// assert_eq!(solutions, [vec![0, 1]]);
/// ```
pub fn covers_bool(matrix: &[Vec<bool>]) -> impl Iterator<Item = Vec<usize>> {
    let n_items = matrix.iter().map(|row| row.len()).max().unwrap_or(0);

    let mut node_item = Vec::new();
    let mut options_ptr = vec![0u32];
    for row in matrix {
        for (item, &present) in row.iter().enumerate() {
            if present {
                node_item.push(item as u32);
            }
        }
        options_ptr.push(node_item.len() as u32);
    }
    let node_color = vec![0u32; node_item.len()];

    let encoded = Encoded {
        node_item,
        node_color,
        options_ptr,
        n_items,
        n_primary: n_items,
        item_names: (0..n_items).map(|i| i.to_string()).collect(),
    };
    let meanings = vec![(); matrix.len()];
    let built: Matrix<()> = Matrix::from_encoded(encoded, meanings);

    built
        .solve_all()
        .into_iter()
        .map(|solution: Solution| solution.option_numbers().to_vec())
}

/// Solves a problem given as typed cells rather than string tokens, skipping
/// the tokenizer in [`crate::encode`] entirely. Each option is a list of
/// [`ColoredItem`]s naming an item (and, for secondary items, a color) by
/// index rather than by name. Returned solutions name the chosen options by
/// [`OptionId`] instead of a raw `usize`.
///
/// ```
/// use xcover::{covers_typed, Color, ColoredItem, ItemId};
///
/// let options = vec![
///     vec![ColoredItem::new(ItemId::new(0))],
///     vec![ColoredItem::with_color(ItemId::new(1), Color::new(1))],
/// ];
/// let solutions: Vec<_> = covers_typed(2, 2, &options).collect();
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(solutions[0].len(), 2);
/// ```
pub fn covers_typed(
    n_items: usize,
    n_primary: usize,
    options: &[Vec<ColoredItem>],
) -> impl Iterator<Item = Vec<OptionId>> {
    let mut node_item = Vec::new();
    let mut node_color = Vec::new();
    let mut options_ptr = vec![0u32];
    for cells in options {
        for cell in cells {
            node_item.push(cell.item().index() as u32);
            node_color.push(cell.color().map_or(0, |color| color.index() as u32));
        }
        options_ptr.push(node_item.len() as u32);
    }

    let encoded = Encoded {
        node_item,
        node_color,
        options_ptr,
        n_items,
        n_primary,
        item_names: (0..n_items).map(|i| i.to_string()).collect(),
    };
    let meanings = vec![(); options.len()];
    let built: Matrix<()> = Matrix::from_encoded(encoded, meanings);

    built.solve_all().into_iter().map(|solution: Solution| {
        solution
            .option_numbers()
            .iter()
            .map(|&i| OptionId::new(i))
            .collect()
    })
}

/// A sink for a stream of [`ZddNode`]s, used to hand a diagram off to a
/// third-party BDD/ZDD library.
///
/// The default convention here is "low child first": `node()` receives
/// `(id, var, lo, hi)` in that order, matching the order the search engine
/// computes them in. Some libraries expect the high child first; wrap a
/// sink with [`swapped`] to flip the convention without touching the
/// producer side.
pub trait ZddSink {
    fn node(&mut self, id: u64, var: usize, lo: u64, hi: u64);
}

/// Feeds every node in `nodes` to `sink`, in the order the search produced
/// them (ascending id).
pub fn feed(nodes: impl Iterator<Item = ZddNode>, sink: &mut impl ZddSink) {
    for node in nodes {
        sink.node(node.id, node.var, node.lo, node.hi);
    }
}

/// Wraps a [`ZddSink`] so it receives `(id, var, hi, lo)` instead of
/// `(id, var, lo, hi)`.
pub struct Swapped<S>(pub S);

impl<S: ZddSink> ZddSink for Swapped<S> {
    fn node(&mut self, id: u64, var: usize, lo: u64, hi: u64) {
        self.0.node(id, var, hi, lo);
    }
}

/// Wraps `sink` to swap the low/high child convention.
pub fn swapped<S: ZddSink>(sink: S) -> Swapped<S> {
    Swapped(sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Collect(Vec<(u64, usize, u64, u64)>);
    impl ZddSink for Collect {
        fn node(&mut self, id: u64, var: usize, lo: u64, hi: u64) {
            self.0.push((id, var, lo, hi));
        }
    }

    #[test]
    fn bool_matrix_solves_trivial_cover() {
        let matrix = vec![vec![true, false], vec![false, true]];
        let solutions: Vec<_> = covers_bool(&matrix).collect();
        assert_eq!(solutions, [vec![0, 1]]);
    }

    #[test]
    fn typed_cells_respect_colors() {
        use crate::ids::{Color, ItemId};

        // Both items primary; item 1 is offered in two incompatible colors,
        // so each solution must pick exactly one of the two colored options.
        let options = vec![
            vec![ColoredItem::new(ItemId::new(0))],
            vec![ColoredItem::with_color(ItemId::new(1), Color::new(1))],
            vec![ColoredItem::with_color(ItemId::new(1), Color::new(2))],
        ];
        let solutions: Vec<Vec<OptionId>> = covers_typed(2, 2, &options).collect();
        assert_eq!(solutions.len(), 2);
        for solution in &solutions {
            assert_eq!(solution.len(), 2);
            assert_eq!(solution[0], OptionId::new(0));
        }
    }

    #[test]
    fn swapped_sink_flips_lo_and_hi() {
        let mut sink = swapped(Collect(Vec::new()));
        sink.node(2, 0, 10, 20);
        assert_eq!(sink.0 .0[0], (2, 0, 20, 10));
    }
}
