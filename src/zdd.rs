//! Algorithm Z: the same search skeleton as Algorithm C, but instead of
//! yielding solutions it emits the nodes of a Zero-suppressed Decision
//! Diagram representing the whole solution family, collapsing isomorphic
//! residual subproblems via a signature memo cache.

use std::collections::HashMap;

use fixedbitset::FixedBitSet;

use crate::heuristic::Heuristic;
use crate::substrate::{self, Substrate};

const ROOT: u32 = u32::MAX;

/// One emitted ZDD node: `lo`/`hi` are the subdiagram ids reached by not
/// choosing / choosing option `var`. Ids `0` (FALSE) and `1` (TRUE) are
/// reserved and never emitted, only referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZddNode {
    pub id: u64,
    pub var: usize,
    pub lo: u64,
    pub hi: u64,
}

#[derive(Clone)]
struct ZSnapshot {
    core: substrate::Snapshot,
    secondary_color: Vec<u32>,
}

struct ZFrame {
    item: usize,
    branch: Vec<u32>,
    snapshot: Option<ZSnapshot>,
    /// Signature captured on entry to this frame, recorded here so the
    /// memo cache can be populated with this frame's resolved `hi` once it
    /// backtracks. `None` when memoization is disabled.
    memo_key: Option<FixedBitSet>,
}

/// A lazy, resumable ZDD construction. Each call to `next()` advances the
/// search until a ZDD node is ready to be emitted, or the search is
/// exhausted.
pub struct ZddSearch {
    sub: Substrate,
    n_items: usize,
    n_primary: usize,
    n_colors: usize,
    secondary_color: Vec<u32>,
    heuristic: Heuristic,

    frames: Vec<ZFrame>,
    solution: Vec<usize>,
    zdd_acc: Vec<u64>,
    need_undo: bool,
    next_id: u64,

    use_memo: bool,
    memo_cache: HashMap<FixedBitSet, u64>,
}

impl ZddSearch {
    pub(crate) fn new(
        sub: Substrate,
        n_secondary: usize,
        node_color: &[u32],
        use_memo: bool,
        heuristic: Heuristic,
    ) -> Self {
        let n_items = sub.n_items();
        let n_primary = sub.n_primary();
        let n_colors = node_color.iter().copied().max().unwrap_or(0) as usize;
        let secondary_color = vec![0u32; n_secondary];

        let root = ZFrame {
            item: usize::MAX,
            branch: vec![ROOT],
            snapshot: Some(ZSnapshot {
                core: sub.snapshot(),
                secondary_color: secondary_color.clone(),
            }),
            memo_key: None,
        };

        let mut search = ZddSearch {
            sub,
            n_items,
            n_primary,
            n_colors,
            secondary_color,
            heuristic,
            frames: vec![root],
            solution: Vec::new(),
            zdd_acc: Vec::new(),
            need_undo: false,
            next_id: 1,
            use_memo,
            memo_cache: HashMap::new(),
        };

        if use_memo {
            // The empty subproblem (no active items left) always resolves
            // to the TRUE leaf, regardless of how it was reached.
            let empty_sig = FixedBitSet::with_capacity(search.sig_bits());
            search.memo_cache.insert(empty_sig, 1);
        }

        search
    }

    fn sig_bits(&self) -> usize {
        let n_secondary = self.secondary_color.len();
        self.n_items + n_secondary * (self.n_colors + 1)
    }

    fn signature(&self) -> FixedBitSet {
        let mut bits = FixedBitSet::with_capacity(self.sig_bits());
        for &item in self.sub.active_items() {
            let item = item as usize;
            bits.insert(item);
            if item >= self.n_primary {
                let s = item - self.n_primary;
                let color = self.secondary_color[s] as usize;
                bits.insert(self.n_items + (self.n_colors + 1) * s + color);
            }
        }
        bits
    }

    fn choose_mrv(&self) -> Option<(usize, usize)> {
        let mut chosen: Option<(usize, usize)> = None;
        for &item in self.sub.active_items() {
            let item = item as usize;
            if item >= self.n_primary {
                continue;
            }
            let len = self.sub.col_size(item);
            let better = match chosen {
                Some((_, best)) => len < best,
                None => true,
            };
            if better {
                chosen = Some((item, len));
                if len == 1 {
                    break;
                }
            }
        }
        chosen
    }

    fn choose_leftmost(&self) -> Option<(usize, usize)> {
        for item in 0..self.n_primary {
            if self.sub.is_item_active(item) {
                return Some((item, self.sub.col_size(item)));
            }
        }
        None
    }

    fn choose(&self) -> Option<(usize, usize)> {
        match self.heuristic {
            Heuristic::Mrv => self.choose_mrv(),
            Heuristic::Leftmost => self.choose_leftmost(),
        }
    }

    /// Same contract as `search::Search::hide`, plus: unconditionally record
    /// the color a secondary item is seen with in this option, even when the
    /// node isn't removed. This is what feeds the memo signature.
    fn hide(&mut self, item: usize, color: usize, initial: bool, old_active_len: usize) -> bool {
        let n_primary = self.n_primary;
        let nodes: Vec<u32> = self.sub.active_options(item).to_vec();
        for node in nodes {
            let node = node as usize;
            if color != 0 && self.sub.color_of(node) == color {
                continue;
            }
            let (start, end) = self.sub.option_range(self.sub.option_of(node));
            for k in start..end {
                let iprime = self.sub.item_of(k);
                if iprime != item && self.sub.active_pos_of(iprime) < old_active_len {
                    if !initial
                        && self.sub.col_size(iprime) == 1
                        && self.sub.is_item_active(iprime)
                        && iprime < n_primary
                    {
                        return false;
                    }
                    self.sub.remove_node(k);
                }
                if iprime >= n_primary {
                    self.secondary_color[iprime - n_primary] = self.sub.color_of(k) as u32;
                }
            }
        }
        true
    }

    fn cover(&mut self, node: usize, item: usize) -> Result<usize, ()> {
        let option = self.sub.option_of(node);
        let (start, end) = self.sub.option_range(option);
        let old_active_len = self.sub.active_len();

        for ptr in start..end {
            let itm = self.sub.item_of(ptr);
            if itm != item && self.sub.is_item_active(itm) {
                self.sub.deactivate_item(itm);
            }
        }

        let n_primary = self.n_primary;
        for ptr in start..end {
            let itm = self.sub.item_of(ptr);
            let col_hide = self.sub.color_of(ptr);
            if itm != item && (itm < n_primary || self.sub.active_pos_of(itm) < old_active_len) {
                if !self.hide(itm, col_hide, false, old_active_len) {
                    return Err(());
                }
            }
        }
        Ok(option)
    }

    fn descend(&mut self, item: usize, col_size: usize) -> Vec<u32> {
        self.sub.deactivate_item(item);
        let old_active_len = self.sub.active_len();
        self.hide(item, 0, true, old_active_len);
        let branch: Vec<u32> = self.sub.active_options(item).to_vec();
        let _ = col_size;
        branch
    }
}

impl Iterator for ZddSearch {
    type Item = ZddNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.frames.last_mut() {
            if frame.branch.is_empty() {
                // Backtrack: this frame is fully explored.
                let popped = self.frames.pop().unwrap();
                self.need_undo = true;
                if let Some(option) = self.solution.pop() {
                    let hi = self.zdd_acc.pop().unwrap();
                    if self.use_memo {
                        if let Some(key) = popped.memo_key {
                            self.memo_cache.entry(key).or_insert(hi);
                        }
                    }
                    if hi > 0 {
                        self.next_id += 1;
                        let id = self.next_id;
                        let lo = *self.zdd_acc.last().unwrap();
                        *self.zdd_acc.last_mut().unwrap() = id;
                        log::trace!("zdd: emit node {id} var={option} lo={lo} hi={hi}");
                        return Some(ZddNode {
                            id,
                            var: option,
                            lo,
                            hi,
                        });
                    }
                }
                continue;
            }

            if self.need_undo {
                let snapshot = self.frames.last().unwrap().snapshot.clone();
                if let Some(snapshot) = snapshot {
                    self.sub.restore(&snapshot.core);
                    self.secondary_color.copy_from_slice(&snapshot.secondary_color);
                }
                self.need_undo = false;
            }

            let node = self.frames.last_mut().unwrap().branch.pop().unwrap();
            let current_item = self.frames.last().unwrap().item;

            let covered = if node == ROOT {
                Ok(None)
            } else {
                self.cover(node as usize, current_item).map(Some)
            };

            match covered {
                Err(()) => {
                    self.need_undo = true;
                }
                Ok(option) => {
                    if let Some(option) = option {
                        self.solution.push(option);
                    }

                    let to_memo = if self.use_memo {
                        Some(self.signature())
                    } else {
                        None
                    };

                    if let Some(sig) = to_memo.clone() {
                        if let Some(&cached) = self.memo_cache.get(&sig) {
                            log::trace!("zdd: memo hit -> {cached}");
                            self.zdd_acc.push(cached);
                            self.frames.push(ZFrame {
                                item: usize::MAX,
                                branch: Vec::new(),
                                snapshot: None,
                                memo_key: Some(sig),
                            });
                            continue;
                        }
                    }

                    match self.choose() {
                        None => {
                            self.zdd_acc.push(1);
                            self.frames.push(ZFrame {
                                item: usize::MAX,
                                branch: Vec::new(),
                                snapshot: None,
                                memo_key: to_memo,
                            });
                        }
                        Some((item, col_size)) => {
                            let branch = self.descend(item, col_size);
                            let snapshot = if col_size == 1 {
                                None
                            } else {
                                Some(ZSnapshot {
                                    core: self.sub.snapshot(),
                                    secondary_color: self.secondary_color.clone(),
                                })
                            };
                            self.zdd_acc.push(0);
                            self.frames.push(ZFrame {
                                item,
                                branch,
                                snapshot,
                                memo_key: to_memo,
                            });
                        }
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{Heuristic, Matrix};

    use super::ZddNode;

    /// Counts root-to-TRUE paths in a flat ZDD node stream. The last emitted
    /// node is the diagram's root, by construction.
    fn count_paths(nodes: &[ZddNode]) -> u64 {
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

    fn complete_graph_matching_matrix(n: usize) -> Matrix<(usize, usize)> {
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

    #[test]
    fn counts_perfect_matchings_of_k6_via_zdd() {
        // Perfect matchings of K_n number (n-1)!! ; for K6 that's 5!! = 15.
        let matrix = complete_graph_matching_matrix(6);
        let nodes: Vec<ZddNode> = matrix.solve_zdd(true, Heuristic::Leftmost).collect();
        assert_eq!(count_paths(&nodes), 15);
        assert_eq!(matrix.solve_all().len(), 15);
    }
}
