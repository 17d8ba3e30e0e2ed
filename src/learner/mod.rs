//! Learner state supplied by upstream profile analysis

pub mod profile;

pub use profile::LearnerProfile;
