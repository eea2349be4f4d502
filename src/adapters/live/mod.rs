//! Live adapters used by the binary.

pub mod id_gen;
