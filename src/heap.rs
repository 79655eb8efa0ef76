use libc::c_void;

/// The unaligned allocator that aligned blocks are carved out of.
///
/// # Safety
///
/// A non-null pointer returned by [`Heap::allocate`] must be valid for reads
/// and writes of `size` bytes until it is passed to [`Heap::release`]. No
/// particular alignment is required.
pub unsafe trait Heap {
  /// Returns a block of at least `size` bytes, or null when exhausted.
  fn allocate(
    &self,
    size: usize,
  ) -> *mut u8;

  /// Gives a block back. Null must be accepted as a no-op.
  ///
  /// # Safety
  ///
  /// `ptr` must be null or a live block returned by [`Heap::allocate`] on the
  /// same heap.
  unsafe fn release(
    &self,
    ptr: *mut u8,
  );
}

/// The C heap, via `malloc(3)` and `free(3)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Malloc;

// SAFETY: malloc returns null or a block of at least `size` bytes, and free
// accepts null.
unsafe impl Heap for Malloc {
  fn allocate(
    &self,
    size: usize,
  ) -> *mut u8 {
    unsafe { libc::malloc(size) as *mut u8 }
  }

  unsafe fn release(
    &self,
    ptr: *mut u8,
  ) {
    unsafe { libc::free(ptr as *mut c_void) }
  }
}

// SAFETY: forwards to `H`.
unsafe impl<H: Heap + ?Sized> Heap for &H {
  fn allocate(
    &self,
    size: usize,
  ) -> *mut u8 {
    (**self).allocate(size)
  }

  unsafe fn release(
    &self,
    ptr: *mut u8,
  ) {
    unsafe { (**self).release(ptr) }
  }
}
