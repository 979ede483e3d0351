pub mod argon;

pub use argon::{ArgonCredentialHasher, HashingSettings};
