//! Wire format types for the upstream generation API

pub mod google;
