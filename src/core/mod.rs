pub mod filter;
pub mod punches;
pub mod purge;
pub mod roster;
