//! RotorEngine: stacked Dials with odometer-stepped offsets.
//!
//! Encoding passes each symbol through the Dial stack front-to-back, adding
//! the stack position's counter digit to the symbol before each lookup.
//! Decoding walks the stack back-to-front with the inverse Dials and
//! subtracts the same digits. The counter is reset to the starting value at
//! the beginning of every call and advanced once per symbol, so encoder and
//! decoder observe the same offsets at the same stream position.

use tracing::{debug, trace};

use crate::config::RotorConfig;
use crate::counter::PositionCounter;
use crate::dial::{check_symbol, Dial, Symbol};
use crate::error::RotorError;

/// Rotor cipher engine over an alphabet of `A` symbols.
///
/// # Architecture
///
/// The engine owns copies of the selected Dials and their inverses, so it
/// does not borrow from the configuration it was built from. The live
/// [`PositionCounter`] is the only mutable state; every public encode or
/// decode call starts by restoring it from the starting counter, which makes
/// each call independent of the ones before it.
#[derive(Debug, Clone)]
pub struct RotorEngine<const A: usize> {
    dials: Vec<Dial<A>>,
    inverse_dials: Vec<Dial<A>>,
    counter: PositionCounter<A>,
    starting_counter: PositionCounter<A>,
}

impl<const A: usize> RotorEngine<A> {
    /// Builds an engine from a configuration.
    ///
    /// Copies `repository[selection[p]]` into stack position `p`, derives
    /// its inverse and captures the starting counter.
    ///
    /// # Errors
    /// - [`RotorError::EmptyStack`] if no Dials are selected.
    /// - [`RotorError::DepthMismatch`] if the counter and selection lengths differ.
    /// - [`RotorError::OutOfRange`] if a counter digit is not in `[0, A)`.
    /// - [`RotorError::InvalidIndex`] if a selection index is outside the repository.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{DialRepository, RotorConfig, RotorEngine, RotorError};
    ///
    /// let repository = DialRepository::<3>::from_tables(&[[1, 0, 2]]).unwrap();
    /// let config = RotorConfig::new(repository, vec![0], vec![1]);
    /// assert!(matches!(
    ///     RotorEngine::new(&config),
    ///     Err(RotorError::InvalidIndex { index: 1, repository_size: 1 })
    /// ));
    /// ```
    pub fn new(config: &RotorConfig<A>) -> Result<Self, RotorError> {
        config.validate()?;
        let depth = config.depth();
        let starting_counter = PositionCounter::new(config.starting_counter.clone())?;

        let mut dials = Vec::with_capacity(depth);
        let mut inverse_dials = Vec::with_capacity(depth);
        for &index in config.selection.iter() {
            let dial = *config.repository.get(index)?;
            inverse_dials.push(dial.inverse());
            dials.push(dial);
        }

        debug!(
            depth,
            alphabet = A,
            selection = ?config.selection,
            period = starting_counter.period(),
            "rotor engine built"
        );

        Ok(RotorEngine {
            dials,
            inverse_dials,
            counter: starting_counter.clone(),
            starting_counter,
        })
    }

    /// Encodes a symbol sequence.
    ///
    /// # Errors
    /// Returns [`RotorError::OutOfRange`] for the first symbol not in
    /// `[0, A)`; no output is produced in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{RotorConfig, RotorEngine};
    ///
    /// let config = RotorConfig::<3>::builder()
    ///     .dials([[1, 0, 2], [2, 0, 1], [1, 2, 0]])
    ///     .starting_counter([2, 1, 2])
    ///     .select([0, 1, 2])
    ///     .build()
    ///     .unwrap();
    /// let mut engine = RotorEngine::new(&config).unwrap();
    ///
    /// let input = [0, 1, 1, 0, 2, 2, 0, 0, 2, 1];
    /// let encoded = engine.encode(&input).unwrap();
    /// assert_eq!(encoded, vec![2, 0, 1, 0, 2, 0, 0, 2, 1, 0]);
    /// assert_eq!(engine.decode(&encoded).unwrap(), input);
    /// ```
    pub fn encode(&mut self, input: &[Symbol]) -> Result<Vec<Symbol>, RotorError> {
        let mut output = input.to_vec();
        self.encode_in_place(&mut output)?;
        Ok(output)
    }

    /// Decodes a symbol sequence produced by [`encode`](Self::encode).
    ///
    /// # Errors
    /// Returns [`RotorError::OutOfRange`] for the first symbol not in
    /// `[0, A)`; no output is produced in that case.
    pub fn decode(&mut self, input: &[Symbol]) -> Result<Vec<Symbol>, RotorError> {
        let mut output = input.to_vec();
        self.decode_in_place(&mut output)?;
        Ok(output)
    }

    /// Encodes a buffer in place.
    ///
    /// The whole buffer is checked before any symbol is touched, so on
    /// error it is left unmodified.
    ///
    /// # Errors
    /// Returns [`RotorError::OutOfRange`] for the first symbol not in `[0, A)`.
    pub fn encode_in_place(&mut self, buffer: &mut [Symbol]) -> Result<(), RotorError> {
        Self::check_input(buffer)?;
        trace!(len = buffer.len(), "encode");
        self.reset();
        for symbol in buffer.iter_mut() {
            *symbol = self.encode_symbol(*symbol);
        }
        Ok(())
    }

    /// Decodes a buffer in place.
    ///
    /// The whole buffer is checked before any symbol is touched, so on
    /// error it is left unmodified.
    ///
    /// # Errors
    /// Returns [`RotorError::OutOfRange`] for the first symbol not in `[0, A)`.
    pub fn decode_in_place(&mut self, buffer: &mut [Symbol]) -> Result<(), RotorError> {
        Self::check_input(buffer)?;
        trace!(len = buffer.len(), "decode");
        self.reset();
        for symbol in buffer.iter_mut() {
            *symbol = self.decode_symbol(*symbol);
        }
        Ok(())
    }

    /// Restores the live counter to the starting counter.
    pub fn reset(&mut self) {
        self.counter.reset_to(&self.starting_counter);
    }

    /// Number of Dials in the stack.
    pub fn depth(&self) -> usize {
        self.dials.len()
    }

    /// Live counter, as left by the last encode or decode call.
    pub fn counter(&self) -> &PositionCounter<A> {
        &self.counter
    }

    /// Counter value restored at the start of every call.
    pub fn starting_counter(&self) -> &PositionCounter<A> {
        &self.starting_counter
    }

    /// Number of symbols after which the offsets repeat (`A^depth`).
    pub fn period(&self) -> u64 {
        self.starting_counter.period()
    }

    /// Forward Dials in stack order.
    pub fn dials(&self) -> &[Dial<A>] {
        &self.dials
    }

    /// Inverse Dials in stack order.
    pub fn inverse_dials(&self) -> &[Dial<A>] {
        &self.inverse_dials
    }

    // ──────── Per-symbol transforms ────────

    fn encode_symbol(&mut self, symbol: Symbol) -> Symbol {
        let mut value = symbol as usize;
        for (idx, dial) in self.dials.iter().enumerate() {
            value = dial.apply(((self.counter.digit(idx) + value) % A) as Symbol) as usize;
        }
        self.counter.advance();
        value as Symbol
    }

    fn decode_symbol(&mut self, symbol: Symbol) -> Symbol {
        let mut value = symbol;
        for (idx, inverse) in self.inverse_dials.iter().enumerate().rev() {
            let unmapped = inverse.apply(value) as usize;
            value = ((A + unmapped - self.counter.digit(idx)) % A) as Symbol;
        }
        self.counter.advance();
        value
    }

    fn check_input(buffer: &[Symbol]) -> Result<(), RotorError> {
        buffer
            .iter()
            .enumerate()
            .try_for_each(|(position, &symbol)| check_symbol::<A>(symbol, position))
    }
}
