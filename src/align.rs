use std::mem;

/// Width in bytes of the back-pointer slot stored before every aligned address.
pub const POINTER_WIDTH: usize = mem::size_of::<*mut u8>();

/// Number of `alignment`-sized chunks needed to hold `size` bytes.
///
/// # Panics
///
/// Panics if `alignment` is zero.
///
/// # Examples
///
/// ```rust
/// use raligned::align::chunk_count;
///
/// assert_eq!(chunk_count(3, 2), 2);
/// assert_eq!(chunk_count(2, 3), 1);
/// assert_eq!(chunk_count(0, 7), 0);
/// ```
pub const fn chunk_count(
  size: usize,
  alignment: usize,
) -> usize {
  assert!(alignment > 0, "alignment must be positive");
  size / alignment + (size % alignment != 0) as usize
}

/// Total bytes to request from the underlying heap so that `size` bytes can be
/// served at an address that is a multiple of `alignment`, with a back-pointer
/// slot right before it.
///
/// Returns `None` if the total does not fit in `usize`.
///
/// # Panics
///
/// Panics if `alignment` is zero.
pub const fn checked_required_allocation_size(
  size: usize,
  alignment: usize,
) -> Option<usize> {
  let chunks = match chunk_count(size, alignment).checked_add(chunk_count(POINTER_WIDTH, alignment)) {
    Some(chunks) => chunks,
    None => return None,
  };

  match alignment.checked_mul(chunks) {
    Some(bytes) => bytes.checked_add(alignment - 1),
    None => None,
  }
}

/// Same as [`checked_required_allocation_size`], for sizes known to fit.
///
/// ```text
///   alignment * (ceil(size / alignment) + ceil(POINTER_WIDTH / alignment)) + alignment - 1
/// ```
///
/// # Panics
///
/// Panics if `alignment` is zero or the result overflows `usize`.
///
/// # Examples
///
/// ```rust
/// use raligned::align::{required_allocation_size, POINTER_WIDTH};
///
/// assert_eq!(required_allocation_size(POINTER_WIDTH, POINTER_WIDTH), 3 * POINTER_WIDTH - 1);
/// ```
pub const fn required_allocation_size(
  size: usize,
  alignment: usize,
) -> usize {
  match checked_required_allocation_size(size, alignment) {
    Some(total) => total,
    None => panic!("aligned allocation size overflows usize"),
  }
}

/// Offset from `raw` to the address that will be handed out for `alignment`.
///
/// The offset lands on the nearest multiple of `alignment` at or after `raw`,
/// pushed forward by whole alignment units when fewer than [`POINTER_WIDTH`]
/// bytes would remain in front of it. An already aligned `raw` is therefore
/// never returned as-is.
///
/// # Panics
///
/// Panics if `alignment` is zero.
pub const fn aligned_shift(
  raw: usize,
  alignment: usize,
) -> usize {
  assert!(alignment > 0, "alignment must be positive");

  let rest = raw % alignment;
  let has = if rest > 0 { alignment - rest } else { 0 };

  if has < POINTER_WIDTH {
    has + alignment * chunk_count(POINTER_WIDTH, alignment)
  } else {
    has
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  const W: usize = POINTER_WIDTH;

  #[test]
  fn test_chunk_count() {
    assert_eq!(chunk_count(1, 1), 1);
    assert_eq!(chunk_count(2, 1), 2);
    assert_eq!(chunk_count(3, 2), 2);
    assert_eq!(chunk_count(2, 3), 1);
    assert_eq!(chunk_count(0, 5), 0);
    assert_eq!(chunk_count(usize::MAX, 1), usize::MAX);
  }

  #[test]
  #[should_panic(expected = "alignment must be positive")]
  fn test_chunk_count_zero_alignment() {
    chunk_count(1, 0);
  }

  #[test]
  fn test_required_allocation_size() {
    assert_eq!(required_allocation_size(W - 1, W), 2 * W + W - 1);
    assert_eq!(required_allocation_size(W, W), 2 * W + W - 1);
    assert_eq!(required_allocation_size(W + 1, W), 3 * W + W - 1);
    // 42 bytes at 13: (4 + 1) chunks of 13 plus 12 bytes of slack.
    assert_eq!(required_allocation_size(42, 13), 13 * 5 + 12);
  }

  #[test]
  fn test_required_allocation_size_small_alignment_over_reserves() {
    // A whole pointer width of unit chunks is reserved even though no slack is needed.
    assert_eq!(required_allocation_size(0, 1), W);
    assert_eq!(required_allocation_size(1, 1), W + 1);
  }

  #[test]
  fn test_checked_required_allocation_size_overflow() {
    assert_eq!(checked_required_allocation_size(usize::MAX - W, 2), None);
    assert_eq!(checked_required_allocation_size(usize::MAX, usize::MAX), None);
    assert_eq!(checked_required_allocation_size(usize::MAX, 1), None);
    assert_eq!(checked_required_allocation_size(16, 8), Some(8 * 3 + 7));
  }

  #[test]
  #[should_panic(expected = "overflows")]
  fn test_required_allocation_size_panics_on_overflow() {
    required_allocation_size(usize::MAX, 4);
  }

  #[test]
  fn test_aligned_shift() {
    assert_eq!(aligned_shift(0, 1), W);
    assert_eq!(aligned_shift(0, W - 1), 2 * W - 2);
    assert_eq!(aligned_shift(W - 1, W - 1), 2 * W - 2);
    assert_eq!(aligned_shift(W - 1, W), W + 1);
    assert_eq!(aligned_shift(W - 1, W + 1), W + 3);
  }

  #[test]
  fn test_aligned_shift_keeps_large_gap() {
    // 64 - 3 = 61 bytes ahead is enough room for the back-pointer.
    assert_eq!(aligned_shift(3, 64), 61);
    assert_eq!(aligned_shift(64, 64), 64);
  }

  proptest! {
    #[test]
    fn chunk_count_is_ceil_division(size in 0usize..1 << 40, alignment in 1usize..1 << 20) {
      let chunks = chunk_count(size, alignment);
      prop_assert!(chunks * alignment >= size);
      prop_assert!(chunks == 0 || (chunks - 1) * alignment < size);
    }

    #[test]
    fn required_size_covers_payload_and_slot(size in 0usize..1 << 32, alignment in 1usize..1 << 16) {
      prop_assert!(required_allocation_size(size, alignment) >= size + W);
    }

    #[test]
    fn shift_lands_on_alignment_with_room_for_slot(raw in 0usize..1 << 48, alignment in 1usize..1 << 16) {
      let shift = aligned_shift(raw, alignment);
      prop_assert_eq!((raw + shift) % alignment, 0);
      prop_assert!(shift >= W);
    }

    #[test]
    fn shift_leaves_room_for_payload(
      raw in 0usize..1 << 48,
      size in 0usize..1 << 20,
      alignment in 1usize..1 << 16,
    ) {
      let shift = aligned_shift(raw, alignment);
      prop_assert!(shift + size <= required_allocation_size(size, alignment));
    }
  }
}
