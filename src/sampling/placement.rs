//! Random placement of non-overlapping sample regions
//!
//! Placement is first-fit rejection sampling: candidates are drawn uniformly
//! and kept only when they overlap nothing accepted so far. The attempt cap
//! bounds the runtime, so infeasible or overly dense requests fail instead of
//! spinning.

mod positions;
mod rejection;

pub use positions::{PositionSource, RandomPositions};
pub use rejection::{MAX_ATTEMPTS, place_regions};
