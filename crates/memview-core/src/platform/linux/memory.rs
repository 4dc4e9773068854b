//! # Linux Memory Reads
//!
//! Memory reading using `process_vm_readv(2)`.
//!
//! `process_vm_readv` copies directly between the address spaces of two
//! processes in a single syscall, without stopping the target and without
//! going through `/proc/<pid>/mem`. The caller needs the same permission the
//! kernel requires for `ptrace` attach (`PTRACE_MODE_ATTACH_REALCREDS`),
//! which the default Yama policy grants a parent over its direct children.
//!
//! ## References
//!
//! - [process_vm_readv(2) man page](https://man7.org/linux/man-pages/man2/process_vm_readv.2.html)

use crate::error::{MemviewError, Result};
use crate::platform::linux::error::SysError;
use crate::types::{Address, ProcessId};

/// Read exactly `buf.len()` bytes at `address` in the target into `buf`
///
/// Zero-length reads succeed without entering the kernel. A partial transfer
/// is reported as `MemviewError::ShortRead`; `errno` values map to the
/// specific `MemviewError` variants (`BadAddress`, `PermissionDenied`,
/// `ProcessNotFound`).
pub(crate) fn read_into(pid: ProcessId, address: Address, buf: &mut [u8]) -> Result<()>
{
    if buf.is_empty() {
        return Ok(());
    }

    let local = libc::iovec {
        iov_base: buf.as_mut_ptr().cast::<libc::c_void>(),
        iov_len: buf.len(),
    };
    let remote = libc::iovec {
        iov_base: address.value() as usize as *mut libc::c_void,
        iov_len: buf.len(),
    };

    // SAFETY: both iovecs point at valid memory for the duration of the
    // call; `local` borrows `buf` mutably and the kernel writes at most
    // `iov_len` bytes into it. The remote iovec is only an address in the
    // target's address space and is never dereferenced locally.
    let transferred = unsafe { libc::process_vm_readv(pid.0 as libc::pid_t, &local, 1, &remote, 1, 0) };

    if transferred < 0 {
        let err = SysError::last();
        tracing::debug!(pid = pid.0, %address, length = buf.len(), %err, "process_vm_readv failed");
        return Err(match err {
            SysError::NoSuchProcess => MemviewError::ProcessNotFound(pid.0),
            SysError::PermissionDenied => {
                MemviewError::PermissionDenied(format!("cannot read memory of process {}", pid.0))
            }
            SysError::BadAddress => MemviewError::BadAddress {
                address,
                length: buf.len(),
            },
            other => MemviewError::Sys(other),
        });
    }

    let transferred = transferred as usize;
    if transferred != buf.len() {
        // The kernel stops at the first unmapped remote page, so a short
        // read means the tail of the range is not readable.
        return Err(MemviewError::ShortRead {
            address,
            wanted: buf.len(),
            got: transferred,
        });
    }

    Ok(())
}
