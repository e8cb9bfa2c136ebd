//! Shortest-path search for grid mazes with non-uniform transitions.
//!
//! The central type is [`CostSearch`], a Dijkstra-style cost-relaxation
//! search driven by a priority queue. Unlike a plain weighted search, edges
//! are produced by a [`TransitionPather`]: each candidate [`Transition`]
//! carries its own cumulative cost *and* its own target, so an edge may land
//! somewhere other than the adjacent cell (a teleport). The pather is also
//! free to reject a transition outright by not yielding it, which is how
//! negative-cost moves are floored away before they can break the
//! non-negative invariant Dijkstra relies on.
//!
//! [`CostSearch`] owns and reuses its internal caches so that repeated
//! queries incur no allocations after warm-up.

mod distance;
mod search;
mod traits;

pub use distance::manhattan;
pub use search::{CostSearch, UNREACHABLE};
pub use traits::{Transition, TransitionPather};
