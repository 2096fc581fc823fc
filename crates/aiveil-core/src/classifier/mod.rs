//! AI-content classification.
//!
//! This module decides whether a block of post text is about AI, using the
//! layered rule tables from [`crate::rules`].

mod layered;
mod verdict;

pub use layered::Classifier;
pub use verdict::{Confidence, Verdict};
