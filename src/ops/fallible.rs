//! Transforms and consumers over fallible element functions.
//!
//! Caller errors pass through untouched: `try_*` return them as-is, and
//! [`Sequence::collect_fail_fast`] only adds the failing position as context.

use anyhow::{Context, Result};

use crate::sequence::{Pull, Sequence, Step};

impl<'a, T: 'a> Sequence<'a, T> {
    /// Map with a fallible `f`. Errors are emitted in place, not raised; use
    /// [`collect_fail_fast`](Sequence::collect_fail_fast) or `try_*` consumers
    /// to stop at the first one.
    pub fn try_map<O, E, F>(self, f: F) -> Sequence<'a, std::result::Result<O, E>>
    where
        O: 'a,
        E: 'a,
        F: FnMut(T) -> std::result::Result<O, E> + 'a,
    {
        self.chain("try_map", |input| super::stateless::MapOp { input, f })
    }

    /// Call `f` on each element until it fails; the error is returned as-is.
    pub fn try_for_each<E, F>(mut self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(T) -> std::result::Result<(), E>,
    {
        while let Step::Emit(v) = self.pull() {
            f(v)?;
        }
        Ok(())
    }

    /// Fold until `f` fails; the error is returned as-is and nothing further is
    /// pulled.
    ///
    /// ```
    /// use ironseq::*;
    ///
    /// let r: Result<i32, String> = from_iter(1..)
    ///     .try_fold(0, |acc, x| if x < 4 { Ok(acc + x) } else { Err(format!("hit {x}")) });
    /// assert_eq!(r, Err("hit 4".to_string()));
    /// ```
    pub fn try_fold<A, E, F>(mut self, init: A, mut f: F) -> std::result::Result<A, E>
    where
        F: FnMut(A, T) -> std::result::Result<A, E>,
    {
        let mut acc = init;
        while let Step::Emit(v) = self.pull() {
            acc = f(acc, v)?;
        }
        Ok(acc)
    }
}

// Fail-fast terminal (keeps errors ergonomic)
impl<'a, T: 'a, E> Sequence<'a, std::result::Result<T, E>>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// Collect the `Ok` values, stopping at the first `Err`.
    ///
    /// The caller's error becomes the source of the returned `anyhow::Error`,
    /// with context naming the 0-based position of the failing element, so it
    /// can still be recovered with `downcast_ref`.
    pub fn collect_fail_fast(mut self) -> Result<Vec<T>> {
        let mut ok = Vec::new();
        while let Step::Emit(r) = self.pull() {
            match r {
                Ok(v) => ok.push(v),
                Err(e) => {
                    let position = ok.len();
                    tracing::debug!(position, "collect_fail_fast stopped at error");
                    return Err(e).with_context(|| format!("element {position} failed"));
                }
            }
        }
        Ok(ok)
    }
}
