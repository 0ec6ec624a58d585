//! Command line front end: argument parsing and image export for the
//! automata computed by [`algo`].

pub mod export;
pub mod options;

pub use algo;
