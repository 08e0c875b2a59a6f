//! Testing utilities for ironseq chains.
//!
//! - **Assertions**: compare drained sequences and groupings with expected
//!   results, and check fused exhaustion.
//! - **Fixtures**: pull-counting probes, guard sources that panic when
//!   over-pulled, and small sample datasets.
//! - **Debug utilities**: pass-through operators that log via `tracing`.
//!
//! # Quick Start
//!
//! ```
//! use ironseq::*;
//! use ironseq::testing::*;
//!
//! let probe = PullProbe::new();
//! let chain = probe.naturals().map(|x| x * 2).take(3);
//! assert_eq!(probe.pulls(), 0);
//!
//! assert_sequence_eq(chain, &[0, 2, 4]);
//! assert_eq!(probe.pulls(), 3);
//! ```

pub mod assertions;
pub mod debug;
pub mod fixtures;

pub use assertions::*;
pub use debug::SequenceDebugExt;
pub use fixtures::*;
