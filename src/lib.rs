//! # raligned - Arbitrary-Alignment Allocation on Top of Any Heap
//!
//! This crate hands out memory at addresses that are multiples of any
//! positive alignment (powers of two or not: 64, 4096, 13, ...) while only
//! asking the underlying heap for plain, unaligned bytes.
//!
//! ## Overview
//!
//! Each request over-allocates from the heap, moves forward to the first
//! suitable aligned address, and stores the heap's own pointer in the word
//! right before it. Freeing reads that word back; no lookup table exists.
//!
//! ```text
//!   One Aligned Allocation (alignment = 13, size = 42):
//!
//!   raw (from malloc)                  aligned (returned, % 13 == 0)
//!    │                                  │
//!    ▼                                  ▼
//!   ┌──────────────────────┬───────────┬──────────────────────────────┬───────┐
//!   │       padding        │  raw ptr  │          42 bytes            │ slack │
//!   └──────────────────────┴───────────┴──────────────────────────────┴───────┘
//!                           ◄─ 1 word ─►
//!   ◄──────────────────── required_allocation_size(42, 13) = 77 ─────────────►
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   raligned
//!   ├── align      - Size and offset arithmetic (chunk_count, required_allocation_size, aligned_shift)
//!   ├── block      - RawBlock / AlignedView handles and the back-pointer
//!   ├── heap       - Heap trait and the libc Malloc heap
//!   ├── aligned    - AlignedAllocator, aligned_allocate, aligned_release
//!   └── error      - AllocError
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use raligned::{aligned_allocate, aligned_release};
//!
//! let ptr = aligned_allocate(42, 13);
//! assert!(!ptr.is_null());
//! assert_eq!(ptr as usize % 13, 0);
//!
//! unsafe {
//!     ptr.write_bytes(0, 42);
//!     aligned_release(ptr);
//! }
//! ```
//!
//! Any type implementing [`Heap`] can back an [`AlignedAllocator`]:
//!
//! ```rust
//! use raligned::{AlignedAllocator, AllocError, Malloc};
//!
//! let allocator = AlignedAllocator::with_heap(Malloc);
//!
//! let view = allocator.try_allocate(1024, 4096)?;
//! assert_eq!(view.addr() % 4096, 0);
//!
//! unsafe { allocator.release_view(view) };
//! # Ok::<(), AllocError>(())
//! ```
//!
//! ## Failures
//!
//! - **Heap exhaustion** is the only recoverable failure: `allocate` returns
//!   null and `try_allocate` returns [`AllocError`]. Nothing is left allocated.
//! - **Zero alignment** is a usage bug and panics.
//! - Releasing a pointer that did not come from this crate is undefined
//!   behaviour; the back-pointer carries no tag to detect it.
//!
//! ## Limitations
//!
//! - **No reallocation**: blocks cannot be resized in place.
//! - **Over-allocation**: every block costs at least one extra word plus
//!   `alignment - 1` bytes of slack.
//! - **Thread safety** is whatever the underlying heap provides.

pub mod align;
mod aligned;
mod block;
mod error;
mod heap;

pub use aligned::{AlignedAllocator, aligned_allocate, aligned_release, print_alloc};
pub use block::{AlignedView, RawBlock};
pub use error::AllocError;
pub use heap::{Heap, Malloc};
