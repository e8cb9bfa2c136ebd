use std::collections::BinaryHeap;

use mazebound_core::{Point, Range};

use crate::traits::{Transition, TransitionPather};

/// Sentinel value meaning "not reached" in the best-cost map.
pub const UNREACHABLE: i32 = i32::MAX;

/// Frontier entry, ordered by cost for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    cost: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first.
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Cost-relaxation shortest-path search over a grid rectangle.
///
/// `CostSearch` owns the flat best-known-cost map and the transition scratch
/// buffer so that repeated queries reuse their allocations. The search
/// itself is Dijkstra with two twists supplied by the [`TransitionPather`]:
/// edge costs depend on the destination, and a transition's target need not
/// be the adjacent cell.
pub struct CostSearch {
    rng: Range,
    width: usize,
    /// Best known cumulative cost per cell, `UNREACHABLE` if undiscovered.
    best: Vec<i32>,
    /// Scratch buffer for transition queries.
    tbuf: Vec<Transition>,
}

impl CostSearch {
    /// Create a new `CostSearch` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            best: vec![UNREACHABLE; rng.len()],
            tbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range. The best-cost map is reallocated only
    /// when the new range exceeds existing capacity.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if rng.len() > self.best.len() {
            self.best.resize(rng.len(), UNREACHABLE);
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Minimum cumulative cost from `start` to a goal of `pather`, or
    /// `None` if the frontier drains without popping a goal.
    ///
    /// Transitions whose target falls outside the search range are ignored.
    /// Relaxation is strict: a target is re-pushed only when the candidate
    /// cost improves on its best known cost, so the frontier is finite and
    /// the search always terminates.
    pub fn min_cost<P: TransitionPather>(&mut self, pather: &P, start: Point) -> Option<i32> {
        let si = self.idx(start)?;
        for v in self.best.iter_mut() {
            *v = UNREACHABLE;
        }
        self.best[si] = 0;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef { idx: si, cost: 0 });

        let mut tbuf = std::mem::take(&mut self.tbuf);
        let mut found = None;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            // Skip stale entries superseded by a cheaper relaxation.
            if current.cost > self.best[ci] {
                continue;
            }
            let cp = self.point(ci);
            if pather.is_goal(cp) {
                found = Some(current.cost);
                break;
            }

            tbuf.clear();
            pather.transitions(cp, current.cost, &mut tbuf);

            for t in tbuf.iter() {
                debug_assert!(t.cost >= 0);
                let Some(ti) = self.idx(t.target) else {
                    continue;
                };
                if t.cost < self.best[ti] {
                    self.best[ti] = t.cost;
                    open.push(NodeRef {
                        idx: ti,
                        cost: t.cost,
                    });
                }
            }
        }

        self.tbuf = tbuf;
        found
    }

    /// Best cost recorded for `p` by the last [`min_cost`](Self::min_cost)
    /// call, or [`UNREACHABLE`] if `p` is outside the range or undiscovered.
    ///
    /// Since the search stops at the first popped goal, cells it never got
    /// around to expanding report `UNREACHABLE` too.
    pub fn cost_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.best[i],
            None => UNREACHABLE,
        }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CostSearch {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CostSearch {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(CostSearch::new(range))
    }
}
