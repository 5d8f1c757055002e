//! Pure numeric helpers shared across strategies.

pub mod checksum;
