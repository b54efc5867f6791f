//! Dial: a fixed substitution table over the symbol alphabet.
//!
//! A Dial is the atomic unit of the rotor cipher. It is a permutation of
//! `[0, A)` where `A` is the alphabet size, stored as a lookup table from
//! input symbol to output symbol. The permutation property is checked once
//! when the Dial is built, so every `Dial` value is a valid bijection.

use crate::error::{DialProblem, RotorError};

/// Symbol type processed by the cipher. Valid symbols are `[0, A)`.
pub type Symbol = u8;

/// Compile-time bound on the alphabet size.
///
/// `A` must be in `1..=256`: zero symbols leaves nothing to permute and
/// more than 256 does not fit in a [`Symbol`]. Constructors evaluate
/// [`Alphabet::VALID`], so an out-of-range `A` fails to build.
pub(crate) struct Alphabet<const A: usize>;

impl<const A: usize> Alphabet<A> {
    pub(crate) const VALID: () = assert!(
        A != 0 && A <= 256,
        "alphabet size must be in 1..=256"
    );
}

/// Permutation table over an alphabet of `A` symbols.
///
/// `A` must be in `1..=256` so every symbol fits in a [`Symbol`]; other
/// sizes are rejected at compile time.
///
/// ```compile_fail
/// use rotorcrypt::Dial;
///
/// let _ = Dial::<300>::identity();
/// ```
///
/// ```compile_fail
/// use rotorcrypt::Dial;
///
/// let _ = Dial::<0>::new([]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dial<const A: usize> {
    table: [Symbol; A],
}

impl<const A: usize> Dial<A> {
    /// Creates a Dial from a substitution table.
    ///
    /// # Parameters
    /// - `table`: `table[i]` is the output symbol for input symbol `i`.
    ///
    /// # Errors
    /// Returns [`RotorError::InvalidDial`] if any entry is outside the
    /// alphabet or appears more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Dial;
    ///
    /// assert!(Dial::<3>::new([1, 0, 2]).is_ok());
    /// assert!(Dial::<3>::new([1, 1, 2]).is_err());
    /// ```
    pub fn new(table: [Symbol; A]) -> Result<Self, RotorError> {
        let () = Alphabet::<A>::VALID;
        let mut seen = [false; A];
        for &symbol in table.iter() {
            let slot = seen.get_mut(symbol as usize).ok_or(RotorError::InvalidDial {
                symbol,
                problem: DialProblem::OutOfAlphabet,
            })?;
            if *slot {
                return Err(RotorError::InvalidDial {
                    symbol,
                    problem: DialProblem::Duplicated,
                });
            }
            *slot = true;
        }
        Ok(Dial { table })
    }

    /// Returns the identity Dial (every symbol maps to itself).
    pub fn identity() -> Self {
        let () = Alphabet::<A>::VALID;
        let mut table = [0; A];
        for (i, item) in table.iter_mut().enumerate() {
            *item = i as Symbol;
        }
        Dial { table }
    }

    /// Returns the inverse permutation: `inverse[dial[i]] = i`.
    pub fn inverse(&self) -> Self {
        let mut table = [0; A];
        for (i, &out) in self.table.iter().enumerate() {
            table[out as usize] = i as Symbol;
        }
        Dial { table }
    }

    /// Substitutes a single symbol.
    ///
    /// The caller guarantees `symbol < A`.
    #[inline]
    pub fn apply(&self, symbol: Symbol) -> Symbol {
        self.table[symbol as usize]
    }

    /// Returns the substitution table.
    pub fn as_slice(&self) -> &[Symbol] {
        &self.table
    }
}

/// Checks that `symbol` belongs to an alphabet of `A` symbols.
///
/// # Errors
/// Returns [`RotorError::OutOfRange`] tagged with `position`.
pub(crate) fn check_symbol<const A: usize>(
    symbol: Symbol,
    position: usize,
) -> Result<(), RotorError> {
    if (symbol as usize) < A {
        Ok(())
    } else {
        Err(RotorError::OutOfRange {
            symbol,
            position,
            alphabet: A,
        })
    }
}
