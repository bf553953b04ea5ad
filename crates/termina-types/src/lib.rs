//! Pure data types for termina — command results, schemas, challenges, records.
//!
//! This crate is a leaf dependency with no async runtime and no filesystem.
//! Front-ends and persistence sinks can depend on it without pulling in the
//! kernel's tokio stack.

pub mod challenge;
pub mod error;
pub mod line;
pub mod node;
pub mod records;
pub mod result;
pub mod tool;

// Flat re-exports for convenience
pub use challenge::*;
pub use error::*;
pub use line::*;
pub use node::*;
pub use records::*;
pub use result::*;
pub use tool::*;
