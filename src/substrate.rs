//! The sparse-set substrate (component B): a dynamic incidence matrix with
//! O(1) deactivate/restore of items and nodes.
//!
//! This is the data structure dancing-cells is named for. Two paired
//! dense/sparse arrays give O(1) membership swap: one for the active items,
//! one (per item) for the active nodes in that item's column. Backtracking
//! never needs to touch `set`/`loc`/`active`/`active_pos` directly — restoring
//! `col_size` and `active_len` is enough, because the "inactive" suffix of
//! each array still holds the removed elements in their removal-time
//! positions.

/// A snapshot of the mutable part of a [`Substrate`], taken before descending
/// into a branch and restored on backtrack or on a failed branch.
#[derive(Clone)]
pub(crate) struct Snapshot {
    col_size: Vec<u32>,
    active_len: u32,
}

/// The flat incidence matrix plus its two sparse sets.
///
/// `node_item[n]` / `node_color[n]` / `node_option[n]` are fixed at
/// construction; everything else is mutated by `deactivate_item` and
/// `remove_node` and restored via snapshots.
pub(crate) struct Substrate {
    node_item: Vec<u32>,
    node_color: Vec<u32>,
    node_option: Vec<u32>,
    options_ptr: Vec<u32>,

    col_start: Vec<u32>,
    col_size: Vec<u32>,
    set: Vec<u32>,
    loc: Vec<u32>,

    active: Vec<u32>,
    active_pos: Vec<u32>,
    active_len: u32,

    n_items: usize,
    n_primary: usize,
}

impl Substrate {
    /// Builds a fresh substrate from the encoder's flat arrays (component A's
    /// output). `node_item`/`node_color` are indexed by node id; `options_ptr`
    /// has length `n_options + 1`.
    pub(crate) fn new(
        node_item: Vec<u32>,
        node_color: Vec<u32>,
        options_ptr: Vec<u32>,
        n_items: usize,
        n_primary: usize,
    ) -> Self {
        let n_data = node_item.len();
        let n_opts = options_ptr.len() - 1;

        let mut node_option = vec![0u32; n_data];
        for j in 0..n_opts {
            let (start, end) = (options_ptr[j] as usize, options_ptr[j + 1] as usize);
            node_option[start..end].fill(j as u32);
        }

        let mut col_size = vec![0u32; n_items];
        for &item in &node_item {
            col_size[item as usize] += 1;
        }
        let mut col_start = vec![0u32; n_items];
        let mut acc = 0u32;
        for i in 0..n_items {
            col_start[i] = acc;
            acc += col_size[i];
        }

        let mut set = vec![0u32; n_data];
        let mut loc = vec![0u32; n_data];
        let mut fill = vec![0u32; n_items];
        for (node, &item) in node_item.iter().enumerate() {
            let item = item as usize;
            let slot = col_start[item] + fill[item];
            loc[node] = slot;
            set[slot as usize] = node as u32;
            fill[item] += 1;
        }

        let active: Vec<u32> = (0..n_items as u32).collect();
        let active_pos = active.clone();

        Substrate {
            node_item,
            node_color,
            node_option,
            options_ptr,
            col_start,
            col_size,
            set,
            loc,
            active,
            active_pos,
            active_len: n_items as u32,
            n_items,
            n_primary,
        }
    }

    #[inline]
    pub(crate) fn n_items(&self) -> usize {
        self.n_items
    }

    #[inline]
    pub(crate) fn n_primary(&self) -> usize {
        self.n_primary
    }

    #[inline]
    pub(crate) fn n_options(&self) -> usize {
        self.options_ptr.len() - 1
    }

    #[inline]
    pub(crate) fn item_of(&self, node: usize) -> usize {
        self.node_item[node] as usize
    }

    #[inline]
    pub(crate) fn color_of(&self, node: usize) -> usize {
        self.node_color[node] as usize
    }

    #[inline]
    pub(crate) fn option_of(&self, node: usize) -> usize {
        self.node_option[node] as usize
    }

    /// The node range `[start, end)` of an option.
    #[inline]
    pub(crate) fn option_range(&self, option: usize) -> (usize, usize) {
        (
            self.options_ptr[option] as usize,
            self.options_ptr[option + 1] as usize,
        )
    }

    #[inline]
    pub(crate) fn col_size(&self, item: usize) -> usize {
        self.col_size[item] as usize
    }

    #[inline]
    pub(crate) fn active_pos_of(&self, item: usize) -> usize {
        self.active_pos[item] as usize
    }

    #[inline]
    pub(crate) fn active_len(&self) -> usize {
        self.active_len as usize
    }

    #[inline]
    pub(crate) fn is_item_active(&self, item: usize) -> bool {
        self.active_pos_of(item) < self.active_len()
    }

    #[inline]
    pub(crate) fn active_items(&self) -> &[u32] {
        &self.active[..self.active_len as usize]
    }

    /// The nodes currently active for `item`'s column.
    #[inline]
    pub(crate) fn active_options(&self, item: usize) -> &[u32] {
        let start = self.col_start[item] as usize;
        let size = self.col_size[item] as usize;
        &self.set[start..start + size]
    }

    fn active_insert(&mut self, item: u32, index: u32) {
        self.active[index as usize] = item;
        self.active_pos[item as usize] = index;
    }

    /// C3: remove `item` from the active-items sparse set.
    pub(crate) fn deactivate_item(&mut self, item: usize) {
        let end_index = self.active_len - 1;
        let end_item = self.active[end_index as usize];
        let index = self.active_pos[item];
        self.active_insert(end_item, index);
        self.active_insert(item as u32, end_index);
        self.active_len -= 1;
    }

    /// Remove `node` from its item's column.
    pub(crate) fn remove_node(&mut self, node: usize) {
        let item = self.node_item[node] as usize;
        let loc = self.loc[node];

        let end_loc = self.col_start[item] + self.col_size[item] - 1;
        let end_node = self.set[end_loc as usize];

        self.set[loc as usize] = end_node;
        self.set[end_loc as usize] = node as u32;
        self.loc[end_node as usize] = loc;
        self.loc[node] = end_loc;
        self.col_size[item] -= 1;
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            col_size: self.col_size.clone(),
            active_len: self.active_len,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: &Snapshot) {
        self.col_size.copy_from_slice(&snapshot.col_size);
        self.active_len = snapshot.active_len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_substrate() -> Substrate {
        // Table 1 (Knuth 7.2.2.1): items a..g (0..7), all primary.
        // options: {c,e} {a,d,g} {b,c,f} {a,d,f} {b,g} {d,e,g}
        let node_item: Vec<u32> = vec![2, 4, 0, 3, 6, 1, 2, 5, 0, 3, 5, 1, 6, 3, 4, 6];
        let options_ptr: Vec<u32> = vec![0, 2, 5, 8, 11, 13, 16];
        let node_color = vec![0u32; node_item.len()];
        Substrate::new(node_item, node_color, options_ptr, 7, 7)
    }

    #[test]
    fn initial_column_sizes() {
        let sub = toy_substrate();
        // a appears in options 1,3 => 2; b in 2,4 => 2; c in 0,2 => 2
        assert_eq!(sub.col_size(0), 2); // a
        assert_eq!(sub.col_size(1), 2); // b
        assert_eq!(sub.col_size(2), 2); // c
        assert_eq!(sub.active_len(), 7);
    }

    #[test]
    fn deactivate_then_restore_is_lossless() {
        let mut sub = toy_substrate();
        let snap = sub.snapshot();
        sub.deactivate_item(0);
        sub.deactivate_item(3);
        assert_eq!(sub.active_len(), 5);
        sub.restore(&snap);
        assert_eq!(sub.active_len(), 7);
        assert!(sub.is_item_active(0));
        assert!(sub.is_item_active(3));
    }

    #[test]
    fn remove_node_shrinks_column_and_restore_undoes_it() {
        let mut sub = toy_substrate();
        let snap = sub.snapshot();
        let node = sub.active_options(0)[0];
        sub.remove_node(node as usize);
        assert_eq!(sub.col_size(0), 1);
        sub.restore(&snap);
        assert_eq!(sub.col_size(0), 2);
    }
}
