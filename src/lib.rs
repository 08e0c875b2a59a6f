//! # ironseq
//!
//! **Lazy, pull-based sequence combinators** for Rust: `chunk_by`,
//! `chunk_every`, `dedup`, `intersperse`, `map_every`, `drop_every`, grouping,
//! frequencies and the rest of the familiar `Enum`/`Stream` vocabulary, over a
//! possibly-infinite, single-pass source that is never collected up front.
//!
//! ## Key Features
//!
//! - **Pull evaluation** - nothing runs until a consumer asks, and every
//!   operator pulls its input only as often as one output element requires
//! - **Bounded state** - lookback operators keep one element; overlapping
//!   chunking keeps at most `ceil(count / step)` open windows
//! - **Short-circuiting consumers** - `any`, `all`, `find*`, `take` and `at`
//!   stop pulling as soon as the answer is known
//! - **Fused exhaustion** - once a sequence ends it stays ended and its
//!   upstream chain is released
//! - **Combiners and groupings** - fold through [`CombineFn`]s, group into
//!   insertion-ordered [`Grouping`]s that serialize with `serde`
//! - **Eager twin** - the [`eager`] module offers the same operators over
//!   ordinary collections
//!
//! ## Quick Start
//!
//! ```
//! use ironseq::*;
//! # fn main() -> anyhow::Result<()> {
//! let lines = from_vec(vec![
//!     "hello world".to_string(),
//!     "hello rust".to_string(),
//! ]);
//!
//! let counts = lines
//!     .flat_map(|line| {
//!         line.split_whitespace()
//!             .map(String::from)
//!             .collect::<Vec<_>>()
//!     })
//!     .frequencies();
//!
//! assert_eq!(counts.get("hello"), Some(&2));
//! assert_eq!(counts.keys().next().map(String::as_str), Some("hello"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Sequence
//!
//! A [`Sequence<'a, T>`] is a lazy, ordered, single-pass producer of `T`. Build
//! one from a source ([`from_vec`], [`from_iter`], [`from_fn`], [`iterate`],
//! [`from_source`] for custom [`Pull`] implementations) and chain operators on
//! it. Every operator consumes the handle and returns a new one, so a stage is
//! never shared. [`Sequence::explain`] renders the chain built so far.
//!
//! ### Operators
//!
//! #### Stateless (element-wise)
//! - [`map`](Sequence::map), [`filter`](Sequence::filter),
//!   [`reject`](Sequence::reject), [`flat_map`](Sequence::flat_map),
//!   [`inspect`](Sequence::inspect), [`concat`] / [`flatten`](Sequence::flatten)
//!
//! #### Lookback (one element of memory)
//! - [`dedup`](Sequence::dedup), [`chunk_by`](Sequence::chunk_by),
//!   [`map_every`](Sequence::map_every), [`intersperse`](Sequence::intersperse),
//!   [`map_intersperse`](Sequence::map_intersperse), [`take`](Sequence::take),
//!   [`drop`](Sequence::drop), [`drop_while`](Sequence::drop_while),
//!   [`take_while`](Sequence::take_while), [`scan`](Sequence::scan),
//!   [`zip`](Sequence::zip)
//!
//! #### Windowing
//! - [`chunk_every`](Sequence::chunk_every),
//!   [`chunk_every_step`](Sequence::chunk_every_step),
//!   [`chunk_every_with`](Sequence::chunk_every_with),
//!   [`drop_every`](Sequence::drop_every)
//!
//! #### Consumers
//! - Full consumption: [`reduce`](Sequence::reduce), [`fold`](Sequence::fold),
//!   [`min`](Sequence::min) / [`max`](Sequence::max) and their `_with` /
//!   `_by_key` forms, [`frequencies`](Sequence::frequencies),
//!   [`group_by`](Sequence::group_by), [`sort_with`](Sequence::sort_with),
//!   [`random`](Sequence::random), [`combine`](Sequence::combine)
//! - Short-circuit: [`any`](Sequence::any), [`all`](Sequence::all),
//!   [`find`](Sequence::find), [`find_index`](Sequence::find_index),
//!   [`member`](Sequence::member), [`at`](Sequence::at),
//!   [`fetch`](Sequence::fetch)
//!
//! ### Errors
//!
//! Operators taking a count, step or stride validate it when the chain is
//! built and return [`SeqError::InvalidArgument`] for zero. Fallible user
//! closures go through [`try_map`](Sequence::try_map) and the `try_*`
//! consumers.
//!
//! ## Feature Flags
//!
//! - `metrics` (default) - [`metrics::MetricsCollector`] and
//!   [`Sequence::metered`]
//!
//! ## Logging
//!
//! The crate emits `tracing` events (argument rejections, debug operators from
//! [`testing`]) and never installs a subscriber.

pub mod combiners;
pub mod eager;
pub mod error;
pub mod extensions;
pub mod grouping;
pub mod helpers;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod ops;
pub mod sequence;
pub mod testing;
pub mod window;

// General re-exports
pub use combiners::{AverageF64, CombineFn, Count, DistinctCount, PriorityReservoir, Product, Sum};
pub use error::{SeqError, SeqResult};
pub use extensions::CompositeTransform;
pub use grouping::Grouping;
pub use helpers::*;
pub use ops::concat;
pub use sequence::{Pull, Sequence, Step};
pub use window::{ChunkEvery, Leftover, WindowSet};
