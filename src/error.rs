//! Allocation failures reported by the aligned allocator.

use std::error::Error;
use std::fmt;

/// Recoverable failures of [`AlignedAllocator::try_allocate`](crate::AlignedAllocator::try_allocate).
///
/// Misuse such as a zero alignment is not reported here; it panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
  /// The underlying heap returned null.
  Exhausted {
    /// Bytes requested from the heap, padding included.
    requested: usize,
  },
  /// The padded request does not fit in `usize`.
  SizeOverflow {
    /// Payload size asked for by the caller.
    size: usize,
    /// Alignment asked for by the caller.
    alignment: usize,
  },
}

impl fmt::Display for AllocError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      Self::Exhausted { requested } => {
        write!(f, "heap exhausted: could not allocate {requested} bytes")
      }
      Self::SizeOverflow { size, alignment } => {
        write!(
          f,
          "allocation of {size} bytes aligned to {alignment} overflows usize"
        )
      }
    }
  }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    assert_eq!(
      AllocError::Exhausted { requested: 77 }.to_string(),
      "heap exhausted: could not allocate 77 bytes"
    );
    assert_eq!(
      AllocError::SizeOverflow { size: 5, alignment: 3 }.to_string(),
      "allocation of 5 bytes aligned to 3 overflows usize"
    );
  }
}
