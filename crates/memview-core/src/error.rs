//! # Error Types
//!
//! General error handling for memory views.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.

use thiserror::Error;

use crate::types::Address;

/// Main error type for memory view operations
///
/// This enum represents all the ways opening a view or reading target memory
/// can fail.
///
/// ## Error Categories
///
/// 1. **Process errors**: `ProcessNotFound`
/// 2. **Permission errors**: `PermissionDenied`
/// 3. **Argument errors**: `InvalidArgument`
/// 4. **Read errors**: `BadAddress`, `ShortRead`
/// 5. **Platform errors**: `Sys` (Linux errno)
/// 6. **I/O errors**: `Io` (for `/proc` parsing, etc.)
#[derive(Error, Debug)]
pub enum MemviewError
{
    /// The process with the given PID doesn't exist or has exited
    ///
    /// This happens when:
    /// - You provide a PID no process currently holds
    /// - The process exited between when you got its PID and when you tried
    ///   to open a view on it
    #[error("Process not found: PID {0}")]
    ProcessNotFound(u32),

    /// Insufficient permissions to inspect the target process
    ///
    /// On Linux this typically means the Yama `ptrace_scope` policy rejected
    /// the access, or the target runs under a different user. Inspecting a
    /// direct child process works under the default policy; anything else may
    /// need `CAP_SYS_PTRACE`.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Invalid argument passed to a view function
    ///
    /// Examples:
    /// - PID 0 (never a valid inspection target)
    /// - A PID that doesn't fit the platform's `pid_t`
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The target address range is not readable in the target process
    ///
    /// The kernel reported that (part of) the requested range is unmapped.
    #[error("Bad address: cannot read {length} bytes at {address}")]
    BadAddress
    {
        /// Start of the requested range
        address: Address,
        /// Number of bytes requested
        length: usize,
    },

    /// The kernel satisfied only part of a read
    ///
    /// Reads are all-or-nothing at this API level; a partial transfer is
    /// reported as an error rather than returning a truncated buffer.
    #[error("Short read at {address}: wanted {wanted} bytes, got {got}")]
    ShortRead
    {
        /// Start of the requested range
        address: Address,
        /// Number of bytes requested
        wanted: usize,
        /// Number of bytes the kernel transferred
        got: usize,
    },

    /// Linux syscall error
    ///
    /// Wraps `errno` values from `process_vm_readv(2)` and friends that don't
    /// map onto a more specific variant.
    #[cfg(target_os = "linux")]
    #[error("System error: {0}")]
    Sys(#[from] crate::platform::linux::error::SysError),

    /// I/O error (for `/proc` reads, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, MemviewError>`
pub type Result<T> = std::result::Result<T, MemviewError>;
