pub mod calculation;
pub mod engine;
pub mod pool;
pub mod validation;

#[cfg(test)]
pub(crate) mod tests;

pub use engine::PokeGameRuleEngine;
pub use pool::PokedexPool;
