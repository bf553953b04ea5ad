//! Deferred work for the session.
//!
//! After a challenge is completed the next one is presented after a short
//! delay. The delay runs as a spawned task that posts an event back to the
//! session; the session stays in charge of every state change.
//!
//! ```text
//! Session ──schedule()──▶ tokio task: select!{ sleep(delay), cancelled() }
//!    ▲                                   │
//!    └──── SessionEvent::AdvanceDue ◀────┘  (mpsc, tagged with a generation)
//! ```

mod advance;

pub use advance::{AdvanceScheduler, SessionEvent};
