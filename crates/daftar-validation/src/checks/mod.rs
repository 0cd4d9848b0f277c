//! Pure rule predicates
//!
//! Every check takes the field value (null when the field is missing) plus the
//! rule's parsed parameters and answers pass/fail. Nothing here allocates an
//! error message; that is the validator's job.

pub mod format;
pub mod iran;
pub mod size;
pub mod types;

pub use format::*;
pub use iran::*;
pub use size::*;
pub use types::*;
