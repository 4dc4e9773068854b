//! Process and memory region types.

use super::Address;

/// Process identifier (PID)
///
/// A PID is a unique number assigned to each running process by the operating
/// system. On Unix-like systems, PIDs are typically 32-bit unsigned integers
/// from the caller's point of view.
///
/// ## Why wrap it in a struct?
///
/// Using a newtype pattern (`struct ProcessId(u32)`) instead of a raw `u32`
/// provides:
/// - **Type safety**: Prevents accidentally passing a random number where a PID is expected
/// - **Self-documenting code**: Makes it clear what the value represents
/// - **Future extensibility**: Can add methods or validation later
///
/// ## Example
///
/// ```rust,no_run
/// use memview_core::types::ProcessId;
///
/// let pid = ProcessId::from(12345);
/// let view = memview_core::open(pid)?;
/// # Ok::<(), memview_core::error::MemviewError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(pub u32);

impl From<u32> for ProcessId
{
    fn from(pid: u32) -> Self
    {
        ProcessId(pid)
    }
}

impl From<ProcessId> for u32
{
    fn from(pid: ProcessId) -> Self
    {
        pid.0
    }
}

impl std::fmt::Display for ProcessId
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

/// Identifier for memory regions
///
/// This is a stable identifier for a memory region within a process. The ID is
/// assigned sequentially when regions are enumerated (0, 1, 2, ...).
///
/// ## Stability
///
/// Memory region IDs are stable within a single enumeration, but may change
/// if the process's memory layout changes (e.g., after `malloc()` or
/// `mmap()`). Refresh the region list if you need up-to-date information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryRegionId(pub usize);

impl MemoryRegionId
{
    /// Get the raw `usize` value of this memory region identifier
    pub fn value(self) -> usize
    {
        self.0
    }
}

/// Memory region in a process
///
/// Represents a contiguous region of memory in the target process, such as
/// the stack, heap, or code segments. Each region has a start address, end
/// address, and permission flags that determine what operations are allowed
/// on that memory.
///
/// ## Examples
///
/// ```
/// use memview_core::types::{Address, MemoryRegion, MemoryRegionId};
///
/// // A readable and executable code segment
/// let code_segment = MemoryRegion::new(
///     MemoryRegionId(0),
///     Address::from(0x1000),
///     Address::from(0x2000),
///     "r-x".to_string(),
///     Some("/usr/bin/example".to_string()),
/// );
///
/// // A readable and writable heap region
/// let heap = MemoryRegion::new(
///     MemoryRegionId(1),
///     Address::from(0x2000),
///     Address::from(0x3000),
///     "rw-".to_string(),
///     Some("[heap]".to_string()),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRegion
{
    /// Stable identifier for the region.
    pub id: MemoryRegionId,

    /// Start address of the memory region (inclusive)
    pub start: Address,

    /// End address of the memory region (exclusive)
    ///
    /// The region includes addresses from `start` (inclusive) to `end`
    /// (exclusive). The size of the region is `end - start`.
    pub end: Address,

    /// Memory permissions as a string
    ///
    /// Contains characters indicating allowed operations:
    /// - `r`: Read permission
    /// - `w`: Write permission
    /// - `x`: Execute permission
    ///
    /// Examples: `"rwx"` (read, write, execute), `"r-x"` (read, execute),
    /// `"rw-"` (read, write), `"r--"` (read-only).
    pub permissions: String,

    /// Optional name/description of the region
    ///
    /// On Linux, this might be `"[heap]"`, `"[stack]"`, or a file path like
    /// `"/usr/bin/example"`. Anonymous mappings have no name.
    pub name: Option<String>,
}

impl MemoryRegion
{
    /// Create a new memory region
    ///
    /// This function does not validate that `end > start`. If `end <= start`,
    /// `size()` will return 0.
    pub fn new(id: MemoryRegionId, start: Address, end: Address, permissions: String, name: Option<String>) -> Self
    {
        Self {
            id,
            start,
            end,
            permissions,
            name,
        }
    }

    /// Get the size of the memory region in bytes
    ///
    /// Returns `end - start`, or 0 if `end <= start` (using saturating
    /// subtraction to prevent underflow).
    pub fn size(&self) -> u64
    {
        self.end.value().saturating_sub(self.start.value())
    }

    /// Check if the region is readable
    pub fn is_readable(&self) -> bool
    {
        self.permissions.contains('r')
    }

    /// Check if the region is writable
    pub fn is_writable(&self) -> bool
    {
        self.permissions.contains('w')
    }

    /// Check if the region is executable
    pub fn is_executable(&self) -> bool
    {
        self.permissions.contains('x')
    }

    /// Check if an address lies within this memory region
    ///
    /// Returns `true` if the address is greater than or equal to `start` and
    /// less than `end`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use memview_core::types::{Address, MemoryRegion, MemoryRegionId};
    ///
    /// let region = MemoryRegion::new(
    ///     MemoryRegionId(0),
    ///     Address::from(0x1000),
    ///     Address::from(0x2000),
    ///     "rw-".to_string(),
    ///     None,
    /// );
    ///
    /// assert!(region.contains(Address::from(0x1000))); // Start (inclusive)
    /// assert!(region.contains(Address::from(0x1500))); // Middle
    /// assert!(!region.contains(Address::from(0x2000))); // End (exclusive)
    /// assert!(!region.contains(Address::from(0x500))); // Before start
    /// ```
    pub fn contains(&self, address: Address) -> bool
    {
        address >= self.start && address < self.end
    }
}
