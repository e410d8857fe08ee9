//! Value types shared by the tree and its hashers

mod algorithm;
mod hash;

pub use algorithm::Algorithm;
pub use hash::Hash;
