/// Movement state of a single value in the permutation.
///
/// A `Direction` records which adjacent index a value would move to if it
/// were chosen as the mobile element of a step:
/// - `Negative`: toward the lower index (`index - 1`)
/// - `Positive`: toward the higher index (`index + 1`)
/// - `Zero`: immobile, not a candidate for the next swap
///
/// ## Invariants
/// - A value with a nonzero direction always has an adjacent index on that
///   side (the step logic zeroes directions at the sequence ends)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
	Negative,
	Zero,
	Positive,
}

impl Direction {
	/// Returns whether this value is currently mobile.
	pub(crate) fn is_mobile(self) -> bool {
		self != Direction::Zero
	}

	/// Returns the adjacent index in this direction.
	///
	/// Must not be called on `Zero`; callers only step values selected by
	/// the mobile search, which excludes zero directions.
	pub(crate) fn step(self, index: usize) -> usize {
		match self {
			Direction::Negative => index - 1,
			Direction::Positive => index + 1,
			Direction::Zero => index,
		}
	}
}
