/// Memoized line traces
pub mod cache;
/// Candidate pin filtering and sampling
pub mod candidates;
/// Pattern generator state machine and run loop
pub mod executor;
/// Error-reduction scoring for candidate lines
pub mod scoring;
