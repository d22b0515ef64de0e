//! Conversion between internal types and upstream wire formats

pub mod google;
