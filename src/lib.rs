#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use core::alloc::Layout;
use core::fmt;

pub use allocator_api2::alloc::AllocError;
pub use allocator_api2::alloc::Allocator;
pub use allocator_api2::alloc::Global;
pub use allocator_api2::boxed::Box;
pub use arena::ArenaList;
pub use list::List;
pub use list::Node;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub mod arena;

pub mod list;

pub mod recurse;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

enum Error {
  ParentAllocatorFailed(Layout),
  TooManyNodes,
}

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Error) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

// One value per line, front to back. Shared by the `Display` impls.

fn write_lines<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
  T: fmt::Display + 'a,
  I: IntoIterator<Item = &'a T>,
{
  for x in items {
    writeln!(f, "{}", x)?;
  }

  Ok(())
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Error) -> Result<T, Self> {
    match e {
      Error::ParentAllocatorFailed(layout) =>
        alloc::alloc::handle_alloc_error(layout),
      Error::TooManyNodes =>
        // Arena links are 32-bit indices, so an arena list cannot address
        // more nodes than that no matter how much memory is available.
        panic!("conslist: attempted to grow an arena list past its link space!"),
    }
  }
}

impl Fail for AllocError {
  #[inline(always)]
  fn fail<T>(_: Error) -> Result<T, Self> {
    Err(AllocError)
  }
}
