use thiserror::Error;

/// Errors raised by `PermutationGenerator`.
///
/// There are exactly two failure modes, both synchronous:
/// - a construction precondition violation (`InvalidArgument`)
/// - a post-exhaustion call to `next` (`ExhaustedIterator`)
///
/// Neither is retryable: the caller must supply a valid size, or stop
/// calling `next` once `has_next` reports false.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
	/// The requested size is not a valid permutation length.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// All permutations have already been produced.
	#[error("iterator exhausted: all permutations have been produced")]
	ExhaustedIterator,
}
