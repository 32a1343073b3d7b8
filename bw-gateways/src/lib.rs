//! Implementations of the gateway ports declared in `bw-core`.

pub mod cloudinary;
pub mod json_store;
pub mod nominatim;
