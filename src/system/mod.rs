//! # System Interaction Layer
//!
//! The boundary between the command engine and the operating system.
//!
//! ## Modules
//!
//! - **`executor`**: runs a configured command line without a shell and
//!   captures its output, with the `cmd /C` fallback for Windows built-ins.

/// Runs command lines and captures their output.
pub mod executor;
