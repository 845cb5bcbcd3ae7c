/// Branching heuristic used by [`crate::zdd::ZddSearch`] (Algorithm Z).
///
/// Algorithm C (plain solution search, see [`crate::search::Search`]) always
/// uses MRV; only the ZDD builder exposes a choice, because `Leftmost` is
/// what gives a *stable* variable ordering, a prerequisite for downstream
/// BDD-library adapters that require a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Minimum-remaining-value: branch on the active primary item with the
    /// fewest remaining options.
    Mrv,
    /// Branch on the active primary item with the lowest id.
    Leftmost,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Mrv
    }
}
