//! Structured logging for the comparison pipeline
//!
//! [`init`] installs the subscriber once per process. The `log_op_*`
//! macros bracket each pipeline stage with `start`, `end` and `end_error`
//! events, and [`test_capture`] records those events for assertions.
//!
//! Output always goes to stderr, leaving stdout to the report.
//!
//! ```rust
//! use schemacmp_core::logging_facility::{init, Profile};
//!
//! init(Profile::Production);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
