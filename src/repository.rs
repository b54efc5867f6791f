//! DialRepository: the fixed pool of Dials a configuration selects from.

use crate::dial::{Dial, Symbol};
use crate::error::RotorError;

/// Ordered pool of Dials, indexed from 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialRepository<const A: usize> {
    dials: Vec<Dial<A>>,
}

impl<const A: usize> Default for DialRepository<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const A: usize> DialRepository<A> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        DialRepository { dials: Vec::new() }
    }

    /// Builds a repository from raw substitution tables.
    ///
    /// # Errors
    /// Returns [`RotorError::InvalidDial`] for the first table that is not
    /// a permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::DialRepository;
    ///
    /// let repo = DialRepository::<3>::from_tables(&[[1, 0, 2], [2, 0, 1]]).unwrap();
    /// assert_eq!(repo.len(), 2);
    /// ```
    pub fn from_tables(tables: &[[Symbol; A]]) -> Result<Self, RotorError> {
        let dials = tables
            .iter()
            .map(|&table| Dial::new(table))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DialRepository { dials })
    }

    /// Appends a Dial and returns its index.
    pub fn push(&mut self, dial: Dial<A>) -> usize {
        self.dials.push(dial);
        self.dials.len() - 1
    }

    /// Returns the Dial at `index`.
    ///
    /// # Errors
    /// Returns [`RotorError::InvalidIndex`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Dial<A>, RotorError> {
        self.dials.get(index).ok_or(RotorError::InvalidIndex {
            index,
            repository_size: self.dials.len(),
        })
    }

    /// Returns the number of Dials.
    pub fn len(&self) -> usize {
        self.dials.len()
    }

    /// Returns `true` if the repository holds no Dials.
    pub fn is_empty(&self) -> bool {
        self.dials.is_empty()
    }

    /// Iterates over the Dials in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Dial<A>> {
        self.dials.iter()
    }
}

impl<const A: usize> FromIterator<Dial<A>> for DialRepository<A> {
    fn from_iter<I: IntoIterator<Item = Dial<A>>>(iter: I) -> Self {
        DialRepository {
            dials: iter.into_iter().collect(),
        }
    }
}
