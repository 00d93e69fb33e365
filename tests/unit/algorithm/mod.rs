pub mod cache;
pub mod candidates;
pub mod scoring;
