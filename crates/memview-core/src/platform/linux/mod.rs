//! # Linux Memory View Implementation
//!
//! Linux-specific memory view using `process_vm_readv(2)`.
//!
//! Unlike a ptrace-based debugger, a memory view never attaches to or stops
//! the target. The kernel checks the same credentials it would for a ptrace
//! attach on every read, so there is no handle to acquire or release:
//!
//! - **Open**: validate the PID and probe for existence with `kill(pid, 0)`
//! - **Read**: `process_vm_readv` straight out of the target's address space
//! - **Regions**: parse `/proc/<pid>/maps`
//! - **Close**: nothing to do; the view is plain data and just drops
//!
//! ## References
//!
//! - [process_vm_readv(2) man page](https://man7.org/linux/man-pages/man2/process_vm_readv.2.html)
//! - [kill(2) man page](https://man7.org/linux/man-pages/man2/kill.2.html)

pub mod error;
mod maps;
mod memory;

use crate::error::{MemviewError, Result};
use crate::types::{Address, MemoryRegion, ProcessId};
use crate::view::ProcessMemory;

use error::SysError;

/// Linux implementation of [`ProcessMemory`]
///
/// Holds only the validated target PID. Reads are stateless syscalls, so the
/// view is `Copy`-cheap to pass around and needs no explicit close.
#[derive(Debug, Clone)]
pub struct LinuxMemoryView
{
    pid: ProcessId,
}

impl LinuxMemoryView
{
    /// Open a view on the given process
    ///
    /// Validates the PID up front so later reads fail for interesting
    /// reasons, not trivially bad arguments:
    ///
    /// - PID 0 is rejected (`kill(0, 0)` would signal our own process group,
    ///   so it can't be used as an existence probe, and it is never a valid
    ///   inspection target)
    /// - PIDs above `pid_t::MAX` can't be represented for the syscalls
    /// - A vacant PID is reported as `ProcessNotFound`
    /// - A PID we may not signal is reported as `PermissionDenied`
    pub fn open(pid: ProcessId) -> Result<Self>
    {
        if pid.0 == 0 {
            return Err(MemviewError::InvalidArgument("PID 0 is not a valid target".to_string()));
        }
        if pid.0 > i32::MAX as u32 {
            return Err(MemviewError::InvalidArgument(format!(
                "PID {} does not fit in pid_t",
                pid.0
            )));
        }

        // Existence probe: signal 0 performs permission and existence checks
        // without delivering a signal.
        // SAFETY: kill with signal 0 only queries the kernel; it cannot
        // affect the target process.
        let rc = unsafe { libc::kill(pid.0 as libc::pid_t, 0) };
        if rc != 0 {
            return Err(match SysError::last() {
                SysError::NoSuchProcess => MemviewError::ProcessNotFound(pid.0),
                SysError::PermissionDenied => {
                    MemviewError::PermissionDenied(format!("cannot inspect process {}", pid.0))
                }
                other => MemviewError::Sys(other),
            });
        }

        tracing::debug!(pid = pid.0, "opened memory view");
        Ok(Self { pid })
    }
}

impl ProcessMemory for LinuxMemoryView
{
    fn pid(&self) -> ProcessId
    {
        self.pid
    }

    fn read(&self, address: Address, length: usize) -> Result<Vec<u8>>
    {
        let mut buf = vec![0u8; length];
        memory::read_into(self.pid, address, &mut buf)?;
        tracing::trace!(pid = self.pid.0, %address, length, "read target memory");
        Ok(buf)
    }

    fn read_exact(&self, address: Address, buf: &mut [u8]) -> Result<()>
    {
        memory::read_into(self.pid, address, buf)
    }

    fn regions(&self) -> Result<Vec<MemoryRegion>>
    {
        maps::regions(self.pid)
    }
}
