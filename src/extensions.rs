//! Extension points for custom sequence operations.
//!
//! - [`CompositeTransform`]: package a chain of operators into a reusable,
//!   named component.
//!
//! Custom sources plug in through [`from_source`](crate::from_source) and any
//! [`Pull`](crate::Pull) implementation.

use crate::Sequence;

/// A reusable, packaged chain of operators.
///
/// # Type Parameters
/// - `I`: Input element type
/// - `O`: Output element type
///
/// # Example: Email Normalization
/// ```
/// use ironseq::*;
/// use ironseq::extensions::CompositeTransform;
///
/// struct NormalizeEmails;
///
/// impl<'a> CompositeTransform<'a, String, String> for NormalizeEmails {
///     fn expand(&self, input: Sequence<'a, String>) -> Sequence<'a, String> {
///         input
///             .map(|email| email.trim().to_lowercase())
///             .filter(|email| email.contains('@'))
///             .dedup()
///     }
/// }
///
/// let emails = from_vec(vec![
///     "  Alice@EXAMPLE.com  ".to_string(),
///     "alice@example.com".to_string(),
///     "invalid".to_string(),
///     "bob@test.com".to_string(),
/// ]);
///
/// let normalized = emails.apply_composite(&NormalizeEmails).to_vec();
/// assert_eq!(normalized, vec!["alice@example.com", "bob@test.com"]);
/// ```
pub trait CompositeTransform<'a, I, O> {
    /// Build the output chain on top of `input`.
    fn expand(&self, input: Sequence<'a, I>) -> Sequence<'a, O>;
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Apply a composite transform to this sequence.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    /// use ironseq::extensions::CompositeTransform;
    ///
    /// struct Pairs;
    ///
    /// impl<'a> CompositeTransform<'a, i32, Vec<i32>> for Pairs {
    ///     fn expand(&self, input: Sequence<'a, i32>) -> Sequence<'a, Vec<i32>> {
    ///         input.chunk_by(|x| x / 2)
    ///     }
    /// }
    ///
    /// let out = from_vec(vec![0, 1, 2, 3, 4]).apply_composite(&Pairs).to_vec();
    /// assert_eq!(out, vec![vec![0, 1], vec![2, 3], vec![4]]);
    /// ```
    pub fn apply_composite<O, CT>(self, transform: &CT) -> Sequence<'a, O>
    where
        CT: CompositeTransform<'a, T, O> + ?Sized,
    {
        transform.expand(self)
    }
}
