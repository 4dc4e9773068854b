//! # /proc Memory Maps
//!
//! Memory region enumeration by parsing `/proc/<pid>/maps`.
//!
//! Each line of the maps file describes one mapping:
//!
//! ```text
//! 55e0a0c00000-55e0a0c21000 rw-p 00000000 08:02 131126   /usr/bin/example
//! 7ffd4c4c0000-7ffd4c4e1000 rw-p 00000000 00:00 0        [stack]
//! ```
//!
//! We keep the start/end addresses, the `rwx` half of the permission field
//! (the fourth character is the private/shared flag, which callers here do
//! not need), and the trailing pathname if present.
//!
//! ## References
//!
//! - [proc(5) man page](https://man7.org/linux/man-pages/man5/proc.5.html)

use std::io::ErrorKind;

use crate::error::{MemviewError, Result};
use crate::types::{Address, MemoryRegion, MemoryRegionId, ProcessId};

/// Enumerate the memory regions of the target process
///
/// Returns the regions in the order the kernel lists them (ascending start
/// address), with sequential IDs starting at 0.
pub(crate) fn regions(pid: ProcessId) -> Result<Vec<MemoryRegion>>
{
    let path = format!("/proc/{}/maps", pid.0);
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MemviewError::ProcessNotFound(pid.0),
        ErrorKind::PermissionDenied => MemviewError::PermissionDenied(format!("cannot read {path}")),
        _ => MemviewError::Io(e),
    })?;

    let mut result = Vec::new();
    for line in contents.lines() {
        if let Some(region) = parse_maps_line(MemoryRegionId(result.len()), line) {
            result.push(region);
        }
    }

    tracing::trace!(pid = pid.0, count = result.len(), "enumerated memory regions");
    Ok(result)
}

/// Parse a single `/proc/<pid>/maps` line into a `MemoryRegion`
///
/// Returns `None` for lines that don't match the expected format; the maps
/// file is kernel-generated, so in practice this only skips empty lines.
fn parse_maps_line(id: MemoryRegionId, line: &str) -> Option<MemoryRegion>
{
    let mut fields = line.split_whitespace();

    let range = fields.next()?;
    let (start, end) = range.split_once('-')?;
    let start = u64::from_str_radix(start, 16).ok()?;
    let end = u64::from_str_radix(end, 16).ok()?;

    let perms = fields.next()?;
    if perms.len() < 3 {
        return None;
    }
    let permissions = perms[..3].to_string();

    // offset, dev, inode
    fields.next()?;
    fields.next()?;
    fields.next()?;

    // The pathname can contain spaces; take the remainder of the line.
    let name = match fields.next() {
        Some(first) => {
            let idx = line.find(first).unwrap_or(line.len());
            Some(line[idx..].trim_end().to_string())
        }
        None => None,
    };

    Some(MemoryRegion::new(
        id,
        Address::from(start),
        Address::from(end),
        permissions,
        name,
    ))
}
