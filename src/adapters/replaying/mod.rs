//! Replaying adapters that serve pre-recorded values.

pub mod id_gen;

pub use id_gen::ReplayingIdGenerator;
