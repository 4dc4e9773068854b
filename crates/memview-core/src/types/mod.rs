//! # Types
//!
//! Platform-agnostic types used throughout the library.
//!
//! These types abstract away platform-specific details, allowing callers to
//! work with concepts like "process ID" and "memory address" without knowing
//! which backend satisfies the reads.

pub mod address;
pub mod process;

// Re-export all public types
pub use address::Address;
pub use process::{MemoryRegion, MemoryRegionId, ProcessId};
