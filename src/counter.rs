//! PositionCounter: the odometer that steps the dial offsets.
//!
//! One digit per active Dial, each in `[0, A)`. After every symbol the
//! counter advances by one: the last digit (highest index) is the least
//! significant, and carries propagate toward index 0. The counter wraps
//! silently after `A^depth` steps.

use crate::dial::{check_symbol, Alphabet, Symbol};
use crate::error::RotorError;

/// Fixed-width, base-`A` odometer.
///
/// `A` must be in `1..=256`; other sizes are rejected at compile time.
///
/// ```compile_fail
/// use rotorcrypt::PositionCounter;
///
/// let mut counter = PositionCounter::<0>::zeroed(1);
/// counter.advance();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionCounter<const A: usize> {
    digits: Vec<Symbol>,
}

impl<const A: usize> PositionCounter<A> {
    /// Creates a counter from its digits.
    ///
    /// # Errors
    /// Returns [`RotorError::OutOfRange`] if any digit is not in `[0, A)`;
    /// `position` is the digit index.
    pub fn new(digits: Vec<Symbol>) -> Result<Self, RotorError> {
        let () = Alphabet::<A>::VALID;
        for (position, &digit) in digits.iter().enumerate() {
            check_symbol::<A>(digit, position)?;
        }
        Ok(PositionCounter { digits })
    }

    /// Creates an all-zero counter with `depth` digits.
    pub fn zeroed(depth: usize) -> Self {
        let () = Alphabet::<A>::VALID;
        PositionCounter {
            digits: vec![0; depth],
        }
    }

    /// Advances the odometer by one step.
    ///
    /// Scans from the last digit toward the first, incrementing modulo `A`
    /// and stopping at the first digit that does not wrap to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::PositionCounter;
    ///
    /// let mut counter = PositionCounter::<3>::new(vec![0, 2, 2]).unwrap();
    /// counter.advance();
    /// assert_eq!(counter.digits(), &[1, 0, 0]);
    /// ```
    pub fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit = ((*digit as usize + 1) % A) as Symbol;
            if *digit != 0 {
                break;
            }
        }
    }

    /// Overwrites this counter with the digits of `start`.
    ///
    /// Reuses the existing allocation.
    pub fn reset_to(&mut self, start: &PositionCounter<A>) {
        self.digits.clone_from(&start.digits);
    }

    /// Returns the offset of the Dial at stack position `index`.
    #[inline]
    pub(crate) fn digit(&self, index: usize) -> usize {
        self.digits[index] as usize
    }

    /// Returns all digits, index 0 first.
    pub fn digits(&self) -> &[Symbol] {
        &self.digits
    }

    /// Returns the number of digits.
    pub fn depth(&self) -> usize {
        self.digits.len()
    }

    /// Returns the cycle length `A^depth`, saturating at `u64::MAX`.
    pub fn period(&self) -> u64 {
        let depth = u32::try_from(self.digits.len()).unwrap_or(u32::MAX);
        (A as u64).saturating_pow(depth)
    }
}
