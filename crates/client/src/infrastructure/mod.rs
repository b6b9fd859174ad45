//! Infrastructure - concrete implementations behind the domain's seams

mod rng;

pub use rng::DiceRng;
