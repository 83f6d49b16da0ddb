//! gallery-core
//!
//! Types, errors, configuration and the decoding/normalization boundary shared
//! by the catalog loaders and both ranking engines.

#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod data_processor;
pub mod error;
pub mod normalize;
pub mod traits;
pub mod types;
