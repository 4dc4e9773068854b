//! # Process Memory Trait
//!
//! The main interface for platform-specific memory view implementations.
//!
//! This trait defines what a memory view can do, regardless of the underlying
//! platform. Each platform implements this trait using its own system APIs:
//!
//! - **Linux**: Uses `process_vm_readv(2)` and `/proc/<pid>/maps`
//! - **macOS**: Would use Mach APIs (`task_for_pid`, `mach_vm_read_overwrite`)
//! - **Windows**: Would use `OpenProcess` + `ReadProcessMemory`
//!
//! ## Why use a trait?
//!
//! Traits allow us to:
//! - Write platform-agnostic code that works on all platforms
//! - Swap implementations easily (e.g., for testing)
//! - Hide platform-specific details behind a clean interface
//!
//! ## Design Philosophy
//!
//! The view is strictly read-only. All typed readers are default methods built
//! on `read_exact`, so a backend only has to implement the raw byte path.

use crate::error::Result;
use crate::types::{Address, MemoryRegion, ProcessId};

/// Read-only view of another process's memory
///
/// ## Lifecycle
///
/// 1. Open a view on a PID: `memview_core::open(pid)?`
/// 2. Read raw bytes or typed values at addresses
/// 3. Drop the view; no explicit close is needed
///
/// ## Byte Order
///
/// Typed readers decode in native byte order. The view always inspects a
/// process on the same host, so the target's layout is the local layout.
///
/// ## Thread Safety
///
/// A view holds no mutable state, but target memory can change between
/// reads; two reads of the same address are only guaranteed to agree while
/// the target is paused.
pub trait ProcessMemory: std::fmt::Debug
{
    /// The PID this view is open on
    fn pid(&self) -> ProcessId;

    /// Read `length` bytes of target memory starting at `address`
    ///
    /// A zero-length read succeeds and returns an empty buffer without
    /// touching the target. Partial transfers are reported as
    /// `MemviewError::ShortRead` rather than returning a truncated buffer.
    ///
    /// ## Errors
    ///
    /// - `BadAddress`: (part of) the range is not mapped readable in the target
    /// - `PermissionDenied`: the kernel refused access to the target
    /// - `ProcessNotFound`: the target exited
    /// - `ShortRead`: the kernel transferred fewer bytes than requested
    fn read(&self, address: Address, length: usize) -> Result<Vec<u8>>;

    /// Read exactly `buf.len()` bytes of target memory into `buf`
    ///
    /// Same semantics as [`ProcessMemory::read`], but decodes into a
    /// caller-provided buffer.
    fn read_exact(&self, address: Address, buf: &mut [u8]) -> Result<()>;

    /// Enumerate the memory regions currently mapped in the target
    ///
    /// Regions are returned in address order with sequential IDs. The list is
    /// a snapshot; the target can remap memory at any time.
    fn regions(&self) -> Result<Vec<MemoryRegion>>;

    /// Read an `i8` (1 byte) at `address`
    fn read_i8(&self, address: Address) -> Result<i8>
    {
        let mut buf = [0u8; 1];
        self.read_exact(address, &mut buf)?;
        Ok(i8::from_ne_bytes(buf))
    }

    /// Read a `u8` (1 byte) at `address`
    fn read_u8(&self, address: Address) -> Result<u8>
    {
        let mut buf = [0u8; 1];
        self.read_exact(address, &mut buf)?;
        Ok(buf[0])
    }

    /// Read an `i16` (2 bytes, native order) at `address`
    fn read_i16(&self, address: Address) -> Result<i16>
    {
        let mut buf = [0u8; 2];
        self.read_exact(address, &mut buf)?;
        Ok(i16::from_ne_bytes(buf))
    }

    /// Read a `u16` (2 bytes, native order) at `address`
    fn read_u16(&self, address: Address) -> Result<u16>
    {
        let mut buf = [0u8; 2];
        self.read_exact(address, &mut buf)?;
        Ok(u16::from_ne_bytes(buf))
    }

    /// Read an `i32` (4 bytes, native order) at `address`
    fn read_i32(&self, address: Address) -> Result<i32>
    {
        let mut buf = [0u8; 4];
        self.read_exact(address, &mut buf)?;
        Ok(i32::from_ne_bytes(buf))
    }

    /// Read a `u32` (4 bytes, native order) at `address`
    fn read_u32(&self, address: Address) -> Result<u32>
    {
        let mut buf = [0u8; 4];
        self.read_exact(address, &mut buf)?;
        Ok(u32::from_ne_bytes(buf))
    }

    /// Read an `i64` (8 bytes, native order) at `address`
    fn read_i64(&self, address: Address) -> Result<i64>
    {
        let mut buf = [0u8; 8];
        self.read_exact(address, &mut buf)?;
        Ok(i64::from_ne_bytes(buf))
    }

    /// Read a `u64` (8 bytes, native order) at `address`
    fn read_u64(&self, address: Address) -> Result<u64>
    {
        let mut buf = [0u8; 8];
        self.read_exact(address, &mut buf)?;
        Ok(u64::from_ne_bytes(buf))
    }

    /// Read an `f32` (4 bytes, native order) at `address`
    fn read_f32(&self, address: Address) -> Result<f32>
    {
        let mut buf = [0u8; 4];
        self.read_exact(address, &mut buf)?;
        Ok(f32::from_ne_bytes(buf))
    }

    /// Read an `f64` (8 bytes, native order) at `address`
    fn read_f64(&self, address: Address) -> Result<f64>
    {
        let mut buf = [0u8; 8];
        self.read_exact(address, &mut buf)?;
        Ok(f64::from_ne_bytes(buf))
    }
}

/// Open a memory view for the current platform
///
/// This factory function selects the right backend at compile time and
/// validates the PID before handing out the view.
///
/// ## Errors
///
/// - `InvalidArgument`: PID 0, or a PID the platform's `pid_t` can't hold
/// - `ProcessNotFound`: no process with this PID exists
///
/// ## Example
///
/// ```rust,no_run
/// use memview_core::types::{Address, ProcessId};
///
/// let view = memview_core::open(ProcessId::from(12345))?;
/// let value = view.read_i32(Address::from(0x7ffd_0000_1000))?;
/// println!("read {value}");
/// # Ok::<(), memview_core::error::MemviewError>(())
/// ```
///
/// ## Platform Support
///
/// - Linux: Returns `LinuxMemoryView`
/// - Other platforms: not yet implemented
pub fn open(pid: ProcessId) -> Result<Box<dyn ProcessMemory>>
{
    #[cfg(target_os = "linux")]
    {
        Ok(Box::new(crate::platform::linux::LinuxMemoryView::open(pid)?))
    }

    #[cfg(not(target_os = "linux"))]
    {
        let _ = pid;
        Err(crate::error::MemviewError::InvalidArgument(format!(
            "Memory views not yet implemented for platform: {}",
            std::env::consts::OS
        )))
    }
}
