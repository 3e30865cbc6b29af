use super::direction::Direction;
use super::error::GeneratorError;

/// Lazy generator producing every permutation of a fixed-size sequence in
/// Steinhaus–Johnson–Trotter order, using Even's speedup.
///
/// Each successful call to `next` returns one permutation and advances the
/// internal state by a single adjacent transposition: the largest value with
/// a nonzero direction swaps one index toward where it points, then every
/// larger value is reoriented toward the vacated slot. Because the inverse
/// `position` map locates the mobile value directly, no scan of the
/// permutation itself is needed.
///
/// # Responsibilities
/// - Hold the full iteration state (permutation, inverse positions, per-value
///   directions, termination flag)
/// - Produce permutations one at a time through `has_next` / `next`
/// - Present values shifted by a caller-chosen `offset`
///
/// # Invariants
/// - `permutation` is a bijection over `{0,…,n-1}` at every observable point
/// - `position` is its exact inverse: `position[permutation[i]] == i`
/// - `terminated` is absorbing; it flips exactly when no value is mobile
///
/// # Notes
/// - Instances are fully independent: no shared or static state, so callers
///   wanting concurrent iteration construct one generator each.
/// - A single instance is a plain mutable state machine and is not meant for
///   concurrent mutation.
#[derive(Debug, Clone)]
pub struct PermutationGenerator {
	/// Number of values in the permutation.
	size: usize,

	/// Shift applied to values on presentation; internal tracking stays 0-based.
	offset: i64,

	/// Current permutation: index -> value in `0..size`.
	permutation: Vec<usize>,

	/// Inverse of `permutation`: value -> its current index.
	position: Vec<usize>,

	/// Movement state of each value, indexed by value.
	direction: Vec<Direction>,

	/// Set once the last permutation has been handed out. Never unset.
	terminated: bool,
}

impl PermutationGenerator {
	/// Creates a generator over the values `0..n-1`.
	///
	/// Equivalent to `with_offset(n, 0)`.
	///
	/// # Errors
	/// Returns `GeneratorError::InvalidArgument` if `n < 0`.
	pub fn new(n: i64) -> Result<Self, GeneratorError> {
		Self::with_offset(n, 0)
	}

	/// Creates a generator over the values `offset..offset+n-1`.
	///
	/// The first call to `next` returns the identity permutation
	/// `[offset, offset+1, …, offset+n-1]`; every later call differs from
	/// its predecessor by exactly one adjacent swap.
	///
	/// # Behavior
	/// - Initializes the identity permutation and its (identity) inverse.
	/// - The smallest value starts immobile; every other value starts
	///   pointing toward the lower indices.
	/// - `n = 0` and `n = 1` are valid: each delivers exactly one
	///   permutation (the empty sequence, resp. `[offset]`) and then
	///   terminates.
	///
	/// # Errors
	/// Returns `GeneratorError::InvalidArgument` if `n < 0`.
	pub fn with_offset(n: i64, offset: i64) -> Result<Self, GeneratorError> {
		if n < 0 {
			return Err(GeneratorError::InvalidArgument(format!(
				"size must be non-negative, got {}",
				n
			)));
		}
		let size = n as usize;

		let mut direction = vec![Direction::Negative; size];
		if size > 0 {
			direction[0] = Direction::Zero;
		}

		Ok(Self {
			size,
			offset,
			permutation: (0..size).collect(),
			position: (0..size).collect(),
			direction,
			terminated: false,
		})
	}

	/// Returns the number of values in each produced permutation.
	pub fn size(&self) -> usize {
		self.size
	}

	/// Returns the presentation offset fixed at construction.
	pub fn offset(&self) -> i64 {
		self.offset
	}

	/// Returns whether another permutation is available.
	///
	/// Pure observer; never mutates state.
	pub fn has_next(&self) -> bool {
		!self.terminated
	}

	/// Returns the next permutation and advances the generator one step.
	///
	/// The returned sequence is a snapshot, independent of any later
	/// mutation of the generator. Exactly `n!` calls succeed (with
	/// `0! = 1`); every call after that fails without touching state.
	///
	/// # Errors
	/// Returns `GeneratorError::ExhaustedIterator` once `has_next` is false.
	pub fn next(&mut self) -> Result<Vec<i64>, GeneratorError> {
		if self.terminated {
			return Err(GeneratorError::ExhaustedIterator);
		}

		let snapshot = self
			.permutation
			.iter()
			.map(|&value| value as i64 + self.offset)
			.collect();
		self.advance();
		Ok(snapshot)
	}

	/// Advances the internal state by one adjacent transposition, or
	/// terminates when no value is mobile.
	fn advance(&mut self) {
		let Some(value) = self.find_mobile() else {
			self.terminated = true;
			return;
		};

		let dir = self.direction[value];
		let from = self.position[value];
		let to = dir.step(from);

		// Swap in the permutation and keep the inverse map exact.
		let neighbor = self.permutation[to];
		self.permutation.swap(from, to);
		self.position[value] = to;
		self.position[neighbor] = from;

		// The moved value stops if it reached an end of the sequence, or if
		// the next value in the same direction is greater.
		if to == 0 || to == self.size - 1 || self.permutation[dir.step(to)] > value {
			self.direction[value] = Direction::Zero;
		}

		// Every larger value now points toward the slot the swap vacated.
		for index in 0..self.size {
			if index == to {
				continue;
			}
			let other = self.permutation[index];
			if other > value {
				self.direction[other] = if index < to {
					Direction::Positive
				} else {
					Direction::Negative
				};
			}
		}
	}

	/// Finds the largest value with a nonzero direction.
	///
	/// Scans candidate values from `n-1` down to `0`; `position` then gives
	/// the chosen value's index directly, so the permutation itself never
	/// needs to be searched.
	fn find_mobile(&self) -> Option<usize> {
		(0..self.size).rev().find(|&value| self.direction[value].is_mobile())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::proptest;
	use std::collections::BTreeSet;

	/// SJT sequence for n = 4 with values presented as 1..4, matching
	/// Even's formulation: output k+1 differs from output k by one
	/// adjacent swap of the largest mobile value.
	const SJT_4: [[i64; 4]; 24] = [
		[1, 2, 3, 4],
		[1, 2, 4, 3],
		[1, 4, 2, 3],
		[4, 1, 2, 3],
		[4, 1, 3, 2],
		[1, 4, 3, 2],
		[1, 3, 4, 2],
		[1, 3, 2, 4],
		[3, 1, 2, 4],
		[3, 1, 4, 2],
		[3, 4, 1, 2],
		[4, 3, 1, 2],
		[4, 3, 2, 1],
		[3, 4, 2, 1],
		[3, 2, 4, 1],
		[3, 2, 1, 4],
		[2, 3, 1, 4],
		[2, 3, 4, 1],
		[2, 4, 3, 1],
		[4, 2, 3, 1],
		[4, 2, 1, 3],
		[2, 4, 1, 3],
		[2, 1, 4, 3],
		[2, 1, 3, 4],
	];

	fn factorial(n: usize) -> usize {
		(1..=n).product()
	}

	/// Drains the generator, asserting internal consistency after each step.
	fn drain(generator: &mut PermutationGenerator) -> Vec<Vec<i64>> {
		let mut outputs = Vec::new();
		while generator.has_next() {
			outputs.push(generator.next().unwrap());
			assert_internally_consistent(generator);
		}
		outputs
	}

	/// Checks the bijection and inverse-position invariants on the private
	/// state.
	fn assert_internally_consistent(generator: &PermutationGenerator) {
		let n = generator.size;
		assert_eq!(generator.permutation.len(), n);
		assert_eq!(generator.position.len(), n);
		assert_eq!(generator.direction.len(), n);

		let values: BTreeSet<usize> = generator.permutation.iter().copied().collect();
		assert_eq!(values.len(), n, "permutation has duplicates");
		assert!(values.iter().all(|&v| v < n), "value out of range");

		for (index, &value) in generator.permutation.iter().enumerate() {
			assert_eq!(generator.position[value], index, "position map out of sync");
		}
	}

	/// Asserts that `next` differs from `previous` by exactly one swap of
	/// two elements adjacent in `previous`.
	fn assert_adjacent_transposition(previous: &[i64], next: &[i64]) {
		let differing: Vec<usize> = (0..previous.len())
			.filter(|&i| previous[i] != next[i])
			.collect();
		assert_eq!(differing.len(), 2, "expected exactly two changed slots");
		let (a, b) = (differing[0], differing[1]);
		assert_eq!(b, a + 1, "changed slots are not adjacent");
		assert_eq!(previous[a], next[b]);
		assert_eq!(previous[b], next[a]);
	}

	#[test]
	fn first_call_returns_identity() {
		let mut generator = PermutationGenerator::with_offset(4, 1).unwrap();
		assert_eq!(generator.next().unwrap(), vec![1, 2, 3, 4]);
	}

	#[test]
	fn produces_the_full_sjt_sequence_for_four_values() {
		let mut generator = PermutationGenerator::with_offset(4, 1).unwrap();
		for (call, expected) in SJT_4.iter().enumerate() {
			assert_eq!(
				generator.next().unwrap(),
				expected.to_vec(),
				"call {} diverged",
				call + 1
			);
		}
		assert!(!generator.has_next());
		assert_eq!(generator.next(), Err(GeneratorError::ExhaustedIterator));
	}

	#[test]
	fn succeeds_exactly_factorial_times() {
		for n in 0..=6 {
			let mut generator = PermutationGenerator::new(n as i64).unwrap();
			assert_eq!(drain(&mut generator).len(), factorial(n));
		}
	}

	#[test]
	fn outputs_are_exhaustive_and_distinct() {
		let mut generator = PermutationGenerator::with_offset(5, 3).unwrap();
		let outputs = drain(&mut generator);
		assert_eq!(outputs.len(), 120);

		let distinct: BTreeSet<&Vec<i64>> = outputs.iter().collect();
		assert_eq!(distinct.len(), 120, "a permutation was produced twice");

		let expected: BTreeSet<i64> = (3..8).collect();
		for output in &outputs {
			let values: BTreeSet<i64> = output.iter().copied().collect();
			assert_eq!(values, expected, "not a permutation of 3..=7");
		}
	}

	#[test]
	fn consecutive_outputs_differ_by_one_adjacent_swap() {
		let mut generator = PermutationGenerator::new(5).unwrap();
		let outputs = drain(&mut generator);
		for pair in outputs.windows(2) {
			assert_adjacent_transposition(&pair[0], &pair[1]);
		}
	}

	#[test]
	fn exhaustion_is_stable() {
		let mut generator = PermutationGenerator::new(3).unwrap();
		let outputs = drain(&mut generator);
		assert_eq!(outputs.len(), 6);

		let frozen = generator.clone();
		for _ in 0..3 {
			assert_eq!(generator.next(), Err(GeneratorError::ExhaustedIterator));
			assert!(!generator.has_next());
		}
		assert_eq!(generator.permutation, frozen.permutation);
		assert_eq!(generator.position, frozen.position);
	}

	#[test]
	fn offset_only_shifts_the_presentation() {
		for offset in [-7, 0, 1, 42] {
			let mut base = PermutationGenerator::new(4).unwrap();
			let mut shifted = PermutationGenerator::with_offset(4, offset).unwrap();
			while base.has_next() {
				let expected: Vec<i64> =
					base.next().unwrap().iter().map(|v| v + offset).collect();
				assert_eq!(shifted.next().unwrap(), expected);
			}
			assert!(!shifted.has_next());
		}
	}

	#[test]
	fn empty_sequence_has_one_permutation() {
		let mut generator = PermutationGenerator::new(0).unwrap();
		assert!(generator.has_next());
		assert_eq!(generator.next().unwrap(), Vec::<i64>::new());
		assert!(!generator.has_next());
		assert_eq!(generator.next(), Err(GeneratorError::ExhaustedIterator));
	}

	#[test]
	fn single_value_has_one_permutation() {
		let mut generator = PermutationGenerator::with_offset(1, 9).unwrap();
		assert_eq!(generator.next().unwrap(), vec![9]);
		assert!(!generator.has_next());
		assert_eq!(generator.next(), Err(GeneratorError::ExhaustedIterator));
	}

	#[test]
	fn negative_size_is_rejected() {
		match PermutationGenerator::new(-1) {
			Err(GeneratorError::InvalidArgument(message)) => {
				assert!(message.contains("-1"));
			}
			other => panic!("expected InvalidArgument, got {:?}", other),
		}
	}

	proptest! {
		#[test]
		fn generation_invariants_hold(n in 0usize..=6, offset in -64i64..=64) {
			let mut generator =
				PermutationGenerator::with_offset(n as i64, offset).unwrap();
			let outputs = drain(&mut generator);

			assert_eq!(outputs.len(), factorial(n));

			let distinct: BTreeSet<&Vec<i64>> = outputs.iter().collect();
			assert_eq!(distinct.len(), outputs.len());

			let expected: BTreeSet<i64> =
				(0..n as i64).map(|v| v + offset).collect();
			for output in &outputs {
				let values: BTreeSet<i64> = output.iter().copied().collect();
				assert_eq!(values, expected);
			}

			for pair in outputs.windows(2) {
				assert_adjacent_transposition(&pair[0], &pair[1]);
			}

			assert_eq!(generator.next(), Err(GeneratorError::ExhaustedIterator));
		}
	}
}
