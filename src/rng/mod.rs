pub mod xoroshiro;

pub use xoroshiro::{EmptySequence, Xoroshiro128Plus};
