//! Word Quest engine
//!
//! Guess evaluation, constraint-based suggestions and a spaced review
//! scheduler for a word-guessing game.
//!
//! # Quick Start
//!
//! ```rust
//! use wordquest_engine::core::{GuessRecord, Word};
//! use wordquest_engine::suggest::Suggester;
//! use rand::SeedableRng;
//!
//! let target = Word::new("plant").unwrap();
//! let guess = Word::new("crane").unwrap();
//! let record = GuessRecord::evaluate(&guess, &target).unwrap();
//! assert_eq!(record.feedback().to_string(), "--GG-");
//!
//! let pool: Vec<Word> = ["plant", "giant", "slate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let suggestions = Suggester::default()
//!     .suggest(&pool, &[record], 5, &mut rng)
//!     .unwrap();
//! assert_eq!(suggestions.total_matches, 2);
//! ```

// Core domain types
pub mod core;

// Suggestion engine
pub mod suggest;

// Spaced review scheduling
pub mod review;

// Persistence port
pub mod storage;

// Rounds and target selection
pub mod round;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
