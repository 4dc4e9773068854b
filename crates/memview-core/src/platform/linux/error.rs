//! # Linux Syscall Errors
//!
//! Error types for Linux process-inspection syscalls.
//!
//! `process_vm_readv(2)` and `kill(2)` report failure through `errno`. This
//! module converts those codes into Rust error types with descriptive
//! messages.

use thiserror::Error;

/// Linux syscall error
///
/// The `errno` values we care about:
///
/// - `ESRCH` (3): No process with the given PID
/// - `EPERM` (1) / `EACCES` (13): The kernel refused access to the target
/// - `EFAULT` (14): The remote address range is not mapped readable
/// - `EINVAL` (22): Invalid argument (bad iovec, bad flags)
/// - `ENOSYS` (38): `process_vm_readv` not available on this kernel
///
/// ## Why convert to an enum?
///
/// - **Type safety**: Can match on specific error types
/// - **Better error messages**: Descriptive strings instead of numbers
/// - **Error chaining**: Can convert to `MemviewError` automatically
///
/// ## References
///
/// - [errno(3) man page](https://man7.org/linux/man-pages/man3/errno.3.html)
#[derive(Error, Debug)]
pub enum SysError
{
    /// `ESRCH`: No process with the given PID
    #[error("ESRCH: No such process")]
    NoSuchProcess,

    /// `EPERM` or `EACCES`: Access to the target was refused
    ///
    /// Common causes on Linux:
    /// - The target runs under a different user
    /// - The Yama `ptrace_scope` policy rejects the access; under the
    ///   default policy (`/proc/sys/kernel/yama/ptrace_scope` = 1) only
    ///   direct descendants can be inspected without `CAP_SYS_PTRACE`
    #[error("EPERM: Permission denied")]
    PermissionDenied,

    /// `EFAULT`: The remote address range is outside the target's
    /// accessible address space
    #[error("EFAULT: Bad remote address")]
    BadAddress,

    /// `EINVAL`: Invalid argument
    #[error("EINVAL: Invalid argument")]
    InvalidArgument,

    /// `ENOSYS`: The kernel does not support `process_vm_readv`
    #[error("ENOSYS: process_vm_readv not supported by this kernel")]
    Unsupported,

    /// Unknown `errno` value
    ///
    /// The integer value is preserved so you can look it up.
    #[error("Unknown errno: {0}")]
    Unknown(i32),
}

impl SysError
{
    /// Capture the current `errno` as a `SysError`
    ///
    /// Call this immediately after a syscall returns -1, before anything
    /// else can clobber `errno`.
    pub fn last() -> Self
    {
        let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
        Self::from(errno)
    }
}

impl From<i32> for SysError
{
    fn from(errno: i32) -> Self
    {
        match errno {
            libc::ESRCH => SysError::NoSuchProcess,
            libc::EPERM | libc::EACCES => SysError::PermissionDenied,
            libc::EFAULT => SysError::BadAddress,
            libc::EINVAL => SysError::InvalidArgument,
            libc::ENOSYS => SysError::Unsupported,
            other => SysError::Unknown(other),
        }
    }
}
