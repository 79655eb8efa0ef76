use std::ptr;

use raligned::{AlignedAllocator, aligned_allocate, aligned_release, print_alloc};

fn main() {
  let allocator = AlignedAllocator::new();

  // --------------------------------------------------------------------
  // 1) The classic odd case: 42 bytes on a 13-byte boundary.
  // --------------------------------------------------------------------
  println!("[1] Allocate 42 bytes aligned to 13");
  let odd = match allocator.try_allocate(42, 13) {
    Ok(view) => view,
    Err(err) => {
      eprintln!("[1] {err}");
      return;
    }
  };

  unsafe {
    print_alloc(odd, 42, 13);
    odd.as_ptr().write_bytes(0xAB, 42);
  }

  // --------------------------------------------------------------------
  // 2) Power-of-two alignments, from cache lines to pages.
  //    The distance to the raw block is never less than one word.
  // --------------------------------------------------------------------
  println!("\n[2] Power-of-two alignments");
  let mut views = Vec::new();
  for alignment in [16, 64, 4096] {
    match allocator.try_allocate(256, alignment) {
      Ok(view) => {
        unsafe { print_alloc(view, 256, alignment) };
        views.push(view);
      }
      Err(err) => eprintln!("[2] {err}"),
    }
  }

  // --------------------------------------------------------------------
  // 3) Alignments at and just past the pointer width.
  // --------------------------------------------------------------------
  println!("\n[3] Alignments around the pointer width");
  let word = size_of::<usize>();
  for alignment in [1, word, word + 1] {
    match allocator.try_allocate(word, alignment) {
      Ok(view) => {
        unsafe { print_alloc(view, word, alignment) };
        views.push(view);
      }
      Err(err) => eprintln!("[3] {err}"),
    }
  }

  // --------------------------------------------------------------------
  // 4) Release everything, then the free-function interface.
  // --------------------------------------------------------------------
  unsafe {
    allocator.release_view(odd);
    for view in views {
      allocator.release_view(view);
    }
  }
  println!("\n[4] Released all blocks");

  let memory = aligned_allocate(100, 3);
  println!("[4] aligned_allocate(100, 3) = {:?}", memory);
  unsafe {
    aligned_release(memory);
    aligned_release(ptr::null_mut());
  }

  println!("\ndone");
}
