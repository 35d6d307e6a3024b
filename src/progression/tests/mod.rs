#[cfg(test)]
pub mod common;

#[cfg(test)]
mod test_refill_hp;


#[cfg(test)]
mod test_pokedex_draws;
