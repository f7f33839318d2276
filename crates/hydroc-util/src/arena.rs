//! Bump arena for AST nodes.
//!
//! The parser allocates every AST node out of one `Arena`. Allocation is a
//! pointer bump, addresses are stable until the arena is dropped, and the
//! whole buffer is released at once when compilation finishes. Nothing is
//! freed individually and destructors are never run, so arena-held payloads
//! must not own heap memory; node types keep to `Copy` data and borrowed
//! string slices.

use std::alloc::Layout;

use bumpalo::Bump;
use thiserror::Error;

/// Error raised when an allocation does not fit the arena's byte budget.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    /// The remaining capacity cannot satisfy the aligned request.
    #[error("arena exhausted: a {requested} byte allocation exceeds the remaining budget")]
    Exhausted {
        /// Size of the allocation that failed, in bytes.
        requested: usize,
    },
}

/// A capacity-limited bump allocator with stable addresses.
///
/// # Example
///
/// ```
/// use hydroc_util::Arena;
///
/// let arena = Arena::with_capacity(1024);
/// let value = arena.alloc(42u64).unwrap();
/// assert_eq!(*value, 42);
/// ```
pub struct Arena {
    bump: Bump,
}

impl Arena {
    /// Creates an arena that may grow up to `bytes` before allocations fail.
    ///
    /// The budget is preallocated up front; once it is spent, further
    /// requests return [`ArenaError::Exhausted`] instead of growing.
    pub fn with_capacity(bytes: usize) -> Self {
        let bump = Bump::with_capacity(bytes);
        bump.set_allocation_limit(Some(bytes));
        Self { bump }
    }

    /// Allocates `value` in the arena and returns a reference to it.
    ///
    /// The returned address never moves for the lifetime of the arena.
    pub fn alloc<T>(&self, value: T) -> Result<&mut T, ArenaError> {
        self.bump.try_alloc(value).map_err(|_| ArenaError::Exhausted {
            requested: std::mem::size_of::<T>(),
        })
    }

    /// Copies `values` into the arena and returns the arena-resident slice.
    ///
    /// Restricted to `Copy` element types: the arena never runs `Drop`, so
    /// only trivially destructible payloads may live in it.
    pub fn alloc_slice<T: Copy>(&self, values: &[T]) -> Result<&mut [T], ArenaError> {
        let layout = Layout::for_value(values);
        let ptr = self
            .bump
            .try_alloc_layout(layout)
            .map_err(|_| ArenaError::Exhausted {
                requested: layout.size(),
            })?;
        // The layout matches `[T; values.len()]` and the regions cannot
        // overlap: the source is caller memory, the destination fresh arena
        // space.
        unsafe {
            let dst = ptr.cast::<T>().as_ptr();
            std::ptr::copy_nonoverlapping(values.as_ptr(), dst, values.len());
            Ok(std::slice::from_raw_parts_mut(dst, values.len()))
        }
    }

    /// Total bytes handed out so far, including per-chunk bookkeeping.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("allocated_bytes", &self.allocated_bytes())
            .finish()
    }
}
