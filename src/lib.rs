//! Welcome to simvariate, a library for generating random variates for simulations.
//!
//! Every sampler owns a deterministic multiply-with-carry bit source
//! ([rng::MultiplyWithCarry]). Seed it explicitly with a [Seed] for
//! reproducible streams, or let it take a seed from the wall clock.

/// The numeric type used throughout simvariate.
///
/// Only `f64` is supported: the open unit interval mapping of
/// [distributions::Uniform] needs more than 32 bits of mantissa.
pub type Float = f64;

pub mod test_utils;

pub mod error;
pub use error::DistributionError;

pub mod rng;
pub use rng::{GeneratorState, MultiplyWithCarry};

pub mod seed;
pub use seed::{ReseedPolicy, Seed};

pub mod distributions;

pub mod config;
pub use config::DistributionConfig;

pub mod math;
