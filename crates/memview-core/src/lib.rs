//! # memview-core
//!
//! Read-only process memory inspection primitives for memview.
//!
//! This crate provides the foundational inspection capabilities, including:
//! - Opening a read-only view on a running process
//! - Raw and typed memory reads at arbitrary addresses
//! - Memory region enumeration
//!
//! ## Platform Support
//!
//! - **Linux**: Uses `process_vm_readv(2)` and `/proc/<pid>/maps`
//! - **macOS**: Would use Mach APIs (future)
//! - **Windows**: Would use `OpenProcess` + `ReadProcessMemory` (future)
//!
//! ## Why unsafe code is needed
//!
//! This crate requires `unsafe` code because we're calling low-level system
//! APIs that access the memory of other processes, which the kernel cannot
//! express through safe Rust. We wrap these unsafe calls in safe
//! abstractions, but the underlying syscalls themselves must be `unsafe`.

#![allow(unsafe_code)] // Required for low-level system APIs (process_vm_readv, kill)

pub mod error;
pub mod platform;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use error::{MemviewError, Result};
#[cfg(target_os = "linux")]
pub use platform::linux::LinuxMemoryView;
pub use types::{Address, MemoryRegion, ProcessId};
pub use view::{open, ProcessMemory};
