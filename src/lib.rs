pub mod dsu;
pub mod error;

mod io;


pub use dsu::{DisjointSets, Merge};
pub use error::Error;
