pub mod a001_collectible;
pub mod common;
