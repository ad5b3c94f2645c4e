//! Fuzzy identity resolution: title scoring, slug comparison and the
//! exact-then-fuzzy selection phases repositories share.

pub mod resolution;
pub mod similarity;
pub mod slug;
