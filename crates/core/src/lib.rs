//! Domain types shared by every Glocation crate.
//!
//! Holds the primitive aliases, the domain error enum, and the pure text
//! helpers behind the project analysis endpoint. Nothing here touches the
//! database or the network.

pub mod analysis;
pub mod error;
pub mod nullable;
pub mod types;
