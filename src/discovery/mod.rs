//! Candidate discovery.
//!
//! Determines which directories might hold a Java runtime for a project.
//! The priority chain is:
//!
//! 1. `~/.mx/env`
//! 2. `<project>/mx.<suite>/env`
//! 3. `$JAVA_HOME`
//! 4. The host runtime

pub mod candidates;
pub mod collector;
pub mod project;

pub use candidates::{Candidate, CandidateSet, CandidateSource};
pub use collector::CandidateCollector;
pub use project::Project;
