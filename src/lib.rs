//! Rotor cipher engine.
//!
//! rotorcrypt encodes sequences of small-alphabet symbols through a stack
//! of substitution tables ("Dials"). Before each lookup the symbol is
//! shifted by the Dial's current offset, and the offsets step like an
//! odometer after every symbol, so the same plaintext symbol encodes
//! differently at different stream positions. Decoding runs the stack
//! backwards through the inverse Dials with the same offset trajectory.
//!
//! The alphabet size is a const generic `A` (at most 256). This crate makes
//! no claim of cryptographic security.
//!
//! # Architecture
//!
//! ```text
//! Dial             (permutation of [0, A), validated on construction)
//!     ↕ pooled
//! DialRepository   (indexed pool of Dials)
//!     ↕ selected by index, in order
//! RotorConfig      (repository + starting counter + selection)
//!     ↓ RotorEngine::new
//! RotorEngine      (forward stack + inverse stack + PositionCounter)
//! ```
//!
//! # Examples
//!
//! Encode and decode a symbol stream:
//!
//! ```
//! use rotorcrypt::{RotorConfig, RotorEngine};
//!
//! let config = RotorConfig::<3>::builder()
//!     .dials([[1, 0, 2], [2, 0, 1], [1, 2, 0]])
//!     .starting_counter([2, 1, 2])
//!     .select([0, 1, 2])
//!     .build()
//!     .unwrap();
//! let mut engine = RotorEngine::new(&config).unwrap();
//!
//! let original = [0, 1, 1, 0, 2, 2, 0, 0, 2, 1];
//! let encoded = engine.encode(&original).unwrap();
//! assert_eq!(encoded.len(), original.len());
//!
//! let decoded = engine.decode(&encoded).unwrap();
//! assert_eq!(decoded, original);
//! ```
//!
//! Symbols outside the alphabet are rejected:
//!
//! ```
//! use rotorcrypt::{RotorConfig, RotorEngine, RotorError};
//!
//! let config = RotorConfig::<3>::builder()
//!     .dial([1, 2, 0])
//!     .starting_counter([0])
//!     .select([0])
//!     .build()
//!     .unwrap();
//! let mut engine = RotorEngine::new(&config).unwrap();
//!
//! assert!(matches!(
//!     engine.encode(&[0, 5]),
//!     Err(RotorError::OutOfRange { symbol: 5, position: 1, .. })
//! ));
//! ```

#![deny(clippy::all)]

pub mod error;

mod config;
mod counter;
mod dial;
mod engine;
mod repository;

pub use config::{RotorConfig, RotorConfigBuilder};
pub use counter::PositionCounter;
pub use dial::{Dial, Symbol};
pub use engine::RotorEngine;
pub use error::{DialProblem, RotorError};
pub use repository::DialRepository;
