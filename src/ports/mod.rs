//! Port traits defining the boundaries the demo is wired through.
//!
//! Implementations live in `src/adapters/`.

pub mod id_gen;

pub use id_gen::{Id, IdGenerator};
