//! # Platform-Specific Implementations
//!
//! This module contains platform-specific memory view implementations.
//!
//! Each platform has its own submodule that implements the `ProcessMemory`
//! trait using that platform's native process-inspection APIs:
//!
//! - **Linux**: Uses `process_vm_readv(2)` and `/proc/<pid>/maps`
//!   - See: [process_vm_readv(2) man page](https://man7.org/linux/man-pages/man2/process_vm_readv.2.html)
//! - **macOS**: Would use Mach APIs (`task_for_pid`, `mach_vm_read_overwrite`) (future)
//! - **Windows**: Would use `OpenProcess` + `ReadProcessMemory` (future)
//!
//! ## Why separate modules?
//!
//! - **Clean separation**: Platform-specific code is isolated
//! - **Conditional compilation**: Only compile code for the current platform
//! - **Easy to extend**: Adding a new platform is just adding a new module

#[cfg(target_os = "linux")]
pub mod linux;

// Future platform modules:
// #[cfg(target_os = "macos")]
// pub mod macos;
//
// #[cfg(target_os = "windows")]
// pub mod windows;
