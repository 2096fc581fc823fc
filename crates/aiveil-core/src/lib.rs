//! Aiveil Core - Rule-based detection of AI-related content in feed posts.
//!
//! This crate provides the classification engine behind the Aiveil feed
//! filter: rule tables, the layered classifier, and the post-level glue the
//! browser integration needs.
//!
//! ```
//! use aiveil_core::{Classifier, Confidence};
//!
//! let classifier = Classifier::default();
//! let verdict = classifier.classify("Excited to share my new AI-powered app!");
//! assert!(verdict.matched);
//! assert_eq!(verdict.confidence, Some(Confidence::High));
//! ```

pub mod classifier;
pub mod error;
pub mod post;
pub mod rules;

pub use classifier::{Classifier, Confidence, Verdict};
pub use error::{Error, Result};
pub use post::{OverlayNotice, PostText};
pub use rules::{RuleSet, RuleSetConfig};
