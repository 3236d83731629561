//! Construction collaborators: plain, synchronous "produce one object from
//! these parameters" operations with no shared state.

pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod prototype;
