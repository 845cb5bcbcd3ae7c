//! Algorithm C: depth-first exact cover search over the sparse-set substrate.
//!
//! The reference implementation this is ported from used a Python generator;
//! Python generators aren't available as a zero-cost abstraction here, so -
//! per the re-architecture notes - the search stack lives as plain heap data
//! inside `Search`, and `next()` resumes the same state machine a generator
//! resume would have re-entered.

use crate::substrate::{Snapshot, Substrate};

/// Sentinel node id for the root frame: popping it runs `choose()` without a
/// preceding `cover()`, matching algorithm C1's "nothing to cover yet".
const ROOT: u32 = u32::MAX;

struct Frame {
    /// The item chosen to branch on at this depth (unused for the root
    /// frame, whose only node is the `ROOT` sentinel).
    item: usize,
    /// Remaining nodes of `item` not yet tried, popped from the end.
    branch: Vec<u32>,
    /// Substrate snapshot taken right after this frame's initial hide (C4/C5).
    /// `None` for a forced move (chosen item had exactly one option): the
    /// snapshot would never be read, because any ancestor backtracking past
    /// this frame restores the *ancestor's* own snapshot instead.
    snapshot: Option<Snapshot>,
}

/// A lazy, resumable exact-cover search: each call to `next()` advances the
/// underlying depth-first search until either a new solution is found or the
/// search space is exhausted.
pub struct Search {
    sub: Substrate,
    frames: Vec<Frame>,
    solution: Vec<usize>,
    need_undo: bool,
}

impl Search {
    pub(crate) fn new(sub: Substrate) -> Self {
        let root = Frame {
            item: usize::MAX,
            branch: vec![ROOT],
            snapshot: Some(sub.snapshot()),
        };
        Search {
            sub,
            frames: vec![root],
            solution: Vec::new(),
            need_undo: false,
        }
    }

    /// C2: minimum-remaining-value heuristic. Returns `(item, col_size)` of
    /// the most-constrained active primary item, or `None` if every primary
    /// item has been covered (the current prefix is a complete solution).
    fn choose(&self) -> Option<(usize, usize)> {
        let n_primary = self.sub.n_primary();
        let mut chosen: Option<(usize, usize)> = None;
        for &item in self.sub.active_items() {
            let item = item as usize;
            if item >= n_primary {
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

    /// C7: hide all active nodes of `item` that conflict with `color`
    /// (`color == 0` means "fully cover the item" — hide everything).
    /// `initial` disables the last-chance abort (used for C4, the hide that
    /// immediately follows `choose`).
    ///
    /// Returns `false` if hiding would reduce some active primary item's
    /// `col_size` to zero; the caller must then abandon the branch.
    fn hide(&mut self, item: usize, color: usize, initial: bool, old_active_len: usize) -> bool {
        let n_primary = self.sub.n_primary();
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
            }
        }
        true
    }

    /// C6/C7: cover the option that `node` belongs to. Returns the option
    /// index on success, or `Err(())` if covering it would strand some
    /// primary item with no remaining options.
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

        let n_primary = self.sub.n_primary();
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

    /// Pushes a new frame for `item` (C3-C5): deactivates it, performs the
    /// initial hide, and records the branch list of its remaining options.
    fn descend(&mut self, item: usize, col_size: usize) {
        self.sub.deactivate_item(item);
        let old_active_len = self.sub.active_len();
        self.hide(item, 0, true, old_active_len);
        let branch: Vec<u32> = self.sub.active_options(item).to_vec();
        let snapshot = if col_size == 1 {
            None
        } else {
            Some(self.sub.snapshot())
        };
        log::trace!("search: descend into item {item} ({} options)", branch.len());
        self.frames.push(Frame {
            item,
            branch,
            snapshot,
        });
    }
}

impl Iterator for Search {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.frames.last_mut() {
            if frame.branch.is_empty() {
                // C10: backtrack.
                self.frames.pop();
                self.need_undo = true;
                self.solution.pop();
                continue;
            }

            if self.need_undo {
                // C11: restore before trying the next branch of this frame.
                let snapshot = self.frames.last().unwrap().snapshot.clone();
                if let Some(snapshot) = snapshot {
                    self.sub.restore(&snapshot);
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
                    match self.choose() {
                        None => {
                            log::trace!("search: solution of {} options", self.solution.len());
                            let result = self.solution.clone();
                            self.solution.pop();
                            self.need_undo = true;
                            return Some(result);
                        }
                        Some((item, col_size)) => {
                            self.descend(item, col_size);
                        }
                    }
                }
            }
        }
        None
    }
}
