//! Tutor service: the orchestration layer around classification and
//! prompt assembly.
//!
//! Records returned here carry ids and timestamps so an outer layer can
//! persist them; this crate keeps only in-memory analytics.

mod analytics;
mod records;
mod service;

// Public exports
pub use analytics::{AnalyticsSummary, SessionAnalytics};
pub use records::{Feedback, QueryRecord, ResponseRecord, TutorReply};
pub use service::{TutorConfig, TutorService};
