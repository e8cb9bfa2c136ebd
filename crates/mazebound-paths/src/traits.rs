use mazebound_core::Point;

/// A candidate move produced during the search: where the mover ends up and
/// the cumulative cost of being there.
///
/// `target` is usually the adjacent cell being stepped into, but a pather
/// may redirect it elsewhere (e.g. a portal that drops the mover at its
/// paired exit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub target: Point,
    pub cost: i32,
}

/// Produces candidate transitions for [`CostSearch`](crate::CostSearch).
pub trait TransitionPather {
    /// Append the accepted transitions out of `p` into `buf`, given the
    /// cumulative cost `cost` of having reached `p`. The caller clears
    /// `buf` before calling. Costs of appended transitions must be ≥ 0.
    fn transitions(&self, p: Point, cost: i32, buf: &mut Vec<Transition>);

    /// Whether `p` is a goal. The search terminates when a goal is popped
    /// from the frontier.
    fn is_goal(&self, p: Point) -> bool;
}
