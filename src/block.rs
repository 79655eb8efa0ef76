use std::ptr::NonNull;

use crate::align::{POINTER_WIDTH, aligned_shift};

/// Start of a block obtained from the underlying heap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawBlock {
  ptr: NonNull<u8>,
}

impl RawBlock {
  pub const fn new(ptr: NonNull<u8>) -> Self {
    Self { ptr }
  }

  pub const fn as_ptr(self) -> *mut u8 {
    self.ptr.as_ptr()
  }

  pub fn addr(self) -> usize {
    self.ptr.addr().get()
  }

  /// Places the aligned address inside this block and stores the block's
  /// start in the word right before it.
  ///
  /// ```text
  ///   raw                      slot        aligned
  ///    │                        │             │
  ///    ▼                        ▼             ▼
  ///   ┌────────────────────────┬─────────────┬──────────────────────┬──────┐
  ///   │        padding         │ back-pointer│       payload        │ slack│
  ///   └────────────────────────┴─────────────┴──────────────────────┴──────┘
  ///                             POINTER_WIDTH
  /// ```
  ///
  /// # Safety
  ///
  /// The block must be writable for at least
  /// [`required_allocation_size`](crate::align::required_allocation_size)
  /// bytes computed with the same `alignment` and the payload size the caller
  /// intends to use.
  ///
  /// # Panics
  ///
  /// Panics if `alignment` is zero.
  pub unsafe fn align(
    self,
    alignment: usize,
  ) -> AlignedView {
    let shift = aligned_shift(self.addr(), alignment);

    unsafe {
      let aligned = self.ptr.add(shift);
      // The slot is only word aligned when `alignment` is a multiple of the word size.
      aligned
        .sub(POINTER_WIDTH)
        .cast::<*mut u8>()
        .write_unaligned(self.ptr.as_ptr());

      AlignedView { ptr: aligned }
    }
  }
}

/// Aligned address handed out to callers, backed by a [`RawBlock`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignedView {
  ptr: NonNull<u8>,
}

impl AlignedView {
  /// Re-wraps a pointer previously produced by [`RawBlock::align`].
  ///
  /// # Safety
  ///
  /// `ptr` must have come from [`RawBlock::align`] and its block must not
  /// have been released yet.
  pub const unsafe fn from_ptr(ptr: NonNull<u8>) -> Self {
    Self { ptr }
  }

  pub const fn as_ptr(self) -> *mut u8 {
    self.ptr.as_ptr()
  }

  pub const fn as_non_null(self) -> NonNull<u8> {
    self.ptr
  }

  pub fn addr(self) -> usize {
    self.ptr.addr().get()
  }

  pub const fn cast<T>(self) -> NonNull<T> {
    self.ptr.cast()
  }

  /// Reads the back-pointer stored right before this address.
  ///
  /// # Safety
  ///
  /// Same as [`AlignedView::from_ptr`]. There is no tag to validate a foreign
  /// pointer; passing one reads arbitrary memory.
  pub unsafe fn recover_raw(self) -> RawBlock {
    unsafe {
      let raw = self
        .ptr
        .sub(POINTER_WIDTH)
        .cast::<*mut u8>()
        .read_unaligned();
      debug_assert!(!raw.is_null(), "null back-pointer before {:p}", self.ptr);

      RawBlock::new(NonNull::new_unchecked(raw))
    }
  }
}
