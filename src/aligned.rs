use std::ptr::{self, NonNull};

use crate::{
  align::checked_required_allocation_size,
  block::{AlignedView, RawBlock},
  error::AllocError,
  heap::{Heap, Malloc},
};

/// Prints where an aligned allocation landed and which raw block backs it.
///
/// # Safety
///
/// `view` must be live, i.e. returned by an [`AlignedAllocator`] and not yet
/// released.
pub unsafe fn print_alloc(
  view: AlignedView,
  size: usize,
  alignment: usize,
) {
  let raw = unsafe { view.recover_raw() };

  println!(
    "Allocated {} bytes aligned to {}, address = {:?} (% {} = {}), raw block = {:?} (+{})",
    size,
    alignment,
    view.as_ptr(),
    alignment,
    view.addr() % alignment,
    raw.as_ptr(),
    view.addr() - raw.addr(),
  );
}

/// Serves blocks at arbitrary alignments out of an unaligned [`Heap`].
///
/// Holds no state besides the heap itself: each block carries the pointer
/// needed to free it.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlignedAllocator<H: Heap = Malloc> {
  heap: H,
}

impl AlignedAllocator<Malloc> {
  pub const fn new() -> Self {
    Self { heap: Malloc }
  }
}

impl<H: Heap> AlignedAllocator<H> {
  pub const fn with_heap(heap: H) -> Self {
    Self { heap }
  }

  pub fn heap(&self) -> &H {
    &self.heap
  }

  /// Allocates `size` bytes at a multiple of `alignment`.
  ///
  /// Nothing is written and nothing is left allocated when this fails.
  ///
  /// # Panics
  ///
  /// Panics if `alignment` is zero.
  pub fn try_allocate(
    &self,
    size: usize,
    alignment: usize,
  ) -> Result<AlignedView, AllocError> {
    let total = checked_required_allocation_size(size, alignment)
      .ok_or(AllocError::SizeOverflow { size, alignment })?;

    let raw = NonNull::new(self.heap.allocate(total))
      .ok_or(AllocError::Exhausted { requested: total })?;

    // SAFETY: the heap hands out `total` writable bytes, which is exactly the
    // requirement of `align` for this size and alignment.
    Ok(unsafe { RawBlock::new(raw).align(alignment) })
  }

  /// Like [`AlignedAllocator::try_allocate`], returning null on any failure.
  pub fn allocate(
    &self,
    size: usize,
    alignment: usize,
  ) -> *mut u8 {
    self
      .try_allocate(size, alignment)
      .map_or(ptr::null_mut(), AlignedView::as_ptr)
  }

  /// Frees a pointer returned by [`AlignedAllocator::allocate`]. Null is
  /// forwarded to the heap, which treats it as a no-op.
  ///
  /// # Safety
  ///
  /// `ptr` must be null or a live pointer from `allocate` on this allocator.
  pub unsafe fn release(
    &self,
    ptr: *mut u8,
  ) {
    match NonNull::new(ptr) {
      Some(ptr) => unsafe { self.release_view(AlignedView::from_ptr(ptr)) },
      None => unsafe { self.heap.release(ptr) },
    }
  }

  /// Frees a block returned by [`AlignedAllocator::try_allocate`].
  ///
  /// # Safety
  ///
  /// `view` must be live and come from this allocator.
  pub unsafe fn release_view(
    &self,
    view: AlignedView,
  ) {
    unsafe {
      let raw = view.recover_raw();
      self.heap.release(raw.as_ptr());
    }
  }
}

/// Allocates `size` bytes at a multiple of `alignment` from the C heap.
/// Returns null when the heap is exhausted.
///
/// # Panics
///
/// Panics if `alignment` is zero.
pub fn aligned_allocate(
  size: usize,
  alignment: usize,
) -> *mut u8 {
  AlignedAllocator::new().allocate(size, alignment)
}

/// Frees a pointer returned by [`aligned_allocate`]. Null is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a live pointer from [`aligned_allocate`].
pub unsafe fn aligned_release(ptr: *mut u8) {
  unsafe { AlignedAllocator::new().release(ptr) }
}
