//! RotorConfig: the immutable description of a cipher run.
//!
//! A configuration names the dial repository, the starting counter digits
//! and the ordered selection of repository indices forming the dial stack.
//! The fields are plain data; [`RotorConfig::validate`] checks that they
//! agree, and both [`RotorConfigBuilder::build`] and
//! [`RotorEngine::new`](crate::RotorEngine::new) run it.

use crate::dial::{check_symbol, Dial, Symbol};
use crate::error::RotorError;
use crate::repository::DialRepository;

/// Description of a rotor cipher run over an alphabet of `A` symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorConfig<const A: usize> {
    /// Pool of Dials available to the stack.
    pub repository: DialRepository<A>,
    /// Initial offset digit for each stack position.
    pub starting_counter: Vec<Symbol>,
    /// Repository indices of the active Dials, in stack order.
    pub selection: Vec<usize>,
}

impl<const A: usize> RotorConfig<A> {
    /// Creates a configuration from its parts without checking them.
    ///
    /// Call [`validate`](Self::validate), or build an engine, to check
    /// consistency.
    pub fn new(
        repository: DialRepository<A>,
        starting_counter: Vec<Symbol>,
        selection: Vec<usize>,
    ) -> Self {
        RotorConfig {
            repository,
            starting_counter,
            selection,
        }
    }

    /// Starts a [`RotorConfigBuilder`].
    pub fn builder() -> RotorConfigBuilder<A> {
        RotorConfigBuilder::default()
    }

    /// Number of Dials in the stack.
    pub fn depth(&self) -> usize {
        self.selection.len()
    }

    /// Checks that the parts of the configuration agree.
    ///
    /// # Errors
    /// - [`RotorError::EmptyStack`] if no Dials are selected.
    /// - [`RotorError::DepthMismatch`] if the counter and selection lengths differ.
    /// - [`RotorError::OutOfRange`] if a counter digit is not in `[0, A)`.
    /// - [`RotorError::InvalidIndex`] if a selection index is outside the repository.
    pub fn validate(&self) -> Result<(), RotorError> {
        let depth = self.selection.len();
        if depth == 0 {
            return Err(RotorError::EmptyStack);
        }
        if self.starting_counter.len() != depth {
            return Err(RotorError::DepthMismatch {
                counter: self.starting_counter.len(),
                selection: depth,
            });
        }
        for (position, &digit) in self.starting_counter.iter().enumerate() {
            check_symbol::<A>(digit, position)?;
        }
        for &index in self.selection.iter() {
            self.repository.get(index)?;
        }
        Ok(())
    }
}

/// Incremental builder for [`RotorConfig`] from raw tables.
///
/// # Examples
///
/// ```
/// use rotorcrypt::RotorConfig;
///
/// let config = RotorConfig::<3>::builder()
///     .dial([1, 0, 2])
///     .dial([2, 0, 1])
///     .starting_counter([0, 1])
///     .select([1, 0])
///     .build()
///     .unwrap();
/// assert_eq!(config.depth(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RotorConfigBuilder<const A: usize> {
    tables: Vec<[Symbol; A]>,
    starting_counter: Vec<Symbol>,
    selection: Vec<usize>,
}

impl<const A: usize> Default for RotorConfigBuilder<A> {
    fn default() -> Self {
        RotorConfigBuilder {
            tables: Vec::new(),
            starting_counter: Vec::new(),
            selection: Vec::new(),
        }
    }
}

impl<const A: usize> RotorConfigBuilder<A> {
    /// Adds one substitution table to the repository.
    pub fn dial(mut self, table: [Symbol; A]) -> Self {
        self.tables.push(table);
        self
    }

    /// Adds several substitution tables to the repository.
    pub fn dials(mut self, tables: impl IntoIterator<Item = [Symbol; A]>) -> Self {
        self.tables.extend(tables);
        self
    }

    /// Sets the starting counter digits.
    pub fn starting_counter(mut self, digits: impl IntoIterator<Item = Symbol>) -> Self {
        self.starting_counter = digits.into_iter().collect();
        self
    }

    /// Sets the ordered repository indices forming the stack.
    pub fn select(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.selection = indices.into_iter().collect();
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// Returns [`RotorError::InvalidDial`] if a table is not a permutation,
    /// then any error from [`RotorConfig::validate`].
    pub fn build(self) -> Result<RotorConfig<A>, RotorError> {
        let repository = self
            .tables
            .into_iter()
            .map(Dial::new)
            .collect::<Result<DialRepository<A>, _>>()?;
        let config = RotorConfig::new(repository, self.starting_counter, self.selection);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_parts() {
        let config = RotorConfig::<3>::builder()
            .dials([[1, 0, 2], [2, 0, 1], [1, 2, 0]])
            .dial([0, 1, 2])
            .starting_counter([2, 1, 2])
            .select([0, 1, 2])
            .build()
            .unwrap();
        assert_eq!(config.repository.len(), 4);
        assert_eq!(config.starting_counter, vec![2, 1, 2]);
        assert_eq!(config.selection, vec![0, 1, 2]);
        assert_eq!(config.depth(), 3);
    }

    #[test]
    fn test_builder_rejects_bad_table() {
        let result = RotorConfig::<3>::builder().dial([2, 2, 0]).build();
        assert!(matches!(result, Err(RotorError::InvalidDial { .. })));
    }

    #[test]
    fn test_builder_rejects_selection_past_repository() {
        let result = RotorConfig::<3>::builder()
            .dial([1, 0, 2])
            .starting_counter([0])
            .select([9])
            .build();
        assert_eq!(
            result,
            Err(RotorError::InvalidIndex {
                index: 9,
                repository_size: 1
            })
        );
    }

    #[test]
    fn test_builder_rejects_empty_selection() {
        let result = RotorConfig::<3>::builder().dial([1, 0, 2]).build();
        assert_eq!(result, Err(RotorError::EmptyStack));
    }

    #[test]
    fn test_builder_rejects_depth_mismatch() {
        let result = RotorConfig::<3>::builder()
            .dial([1, 0, 2])
            .starting_counter([0, 0])
            .select([0])
            .build();
        assert_eq!(
            result,
            Err(RotorError::DepthMismatch {
                counter: 2,
                selection: 1
            })
        );
    }

    #[test]
    fn test_builder_rejects_counter_digit_out_of_range() {
        let result = RotorConfig::<3>::builder()
            .dial([1, 0, 2])
            .starting_counter([1, 3])
            .select([0, 0])
            .build();
        assert_eq!(
            result,
            Err(RotorError::OutOfRange {
                symbol: 3,
                position: 1,
                alphabet: 3
            })
        );
    }

    #[test]
    fn test_new_skips_checks_until_validate() {
        let config = RotorConfig::<3>::new(DialRepository::new(), vec![0], vec![0]);
        assert_eq!(config.selection, vec![0]);
        assert_eq!(
            config.validate(),
            Err(RotorError::InvalidIndex {
                index: 0,
                repository_size: 0
            })
        );
    }
}
