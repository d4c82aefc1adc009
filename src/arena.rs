//! A singly linked list whose nodes live in one growable buffer.
//!
//! Links are indices into the buffer rather than pointers. A new node is
//! always pushed at the end and links to the previous head, so every link
//! points strictly backwards and the chain cannot form a cycle.

use core::alloc::Layout;
use core::fmt;
use core::iter::FusedIterator;
use core::num::NonZeroU32;
use allocator_api2::alloc::AllocError;
use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::vec::Vec;
use crate::Error;
use crate::Fail;

/// A singly linked list with O(1) insertion at the front, backed by an
/// arena of nodes.

pub struct ArenaList<T, A: Allocator = Global> {
  nodes: Vec<ArenaNode<T>, A>,
  head: Option<Link>,
}

/// Front-to-back traversal of an [`ArenaList`].

pub struct Iter<'a, T> {
  nodes: &'a [ArenaNode<T>],
  next: Option<Link>,
}

struct ArenaNode<T> {
  car: T,
  cdr: Option<Link>,
}

// The index of a node, plus one. The niche makes `Option<Link>` the same size
// as a `u32`.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Link(NonZeroU32);

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// CONSTANTS                                                                  //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[cfg(not(test))]
const MAX_NODES: usize = u32::MAX as usize;

#[cfg(test)]
const MAX_NODES: usize = 8;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Link                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Link {
  #[inline(always)]
  fn new(index: usize) -> Option<Self> {
    if index >= MAX_NODES {
      return None;
    }

    let n = u32::try_from(index + 1).ok()?;
    NonZeroU32::new(n).map(Link)
  }

  #[inline(always)]
  fn index(self) -> usize {
    self.0.get() as usize - 1
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// ArenaList                                                                  //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn add_to_front<T, A, E>(list: &mut ArenaList<T, A>, value: T) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let Some(link) = Link::new(list.nodes.len()) else {
    return E::fail(Error::TooManyNodes);
  };

  if list.nodes.try_reserve(1).is_err() {
    return E::fail(Error::ParentAllocatorFailed(Layout::new::<ArenaNode<T>>()));
  }

  list.nodes.push(ArenaNode { car: value, cdr: list.head });
  list.head = Some(link);

  Ok(())
}

impl<T> ArenaList<T, Global> {
  /// An empty list backed by the global allocator. No memory is allocated
  /// until the first insertion.

  pub fn new() -> Self {
    Self::new_in(Global)
  }

  /// An empty list with room for `capacity` nodes before the arena has to
  /// grow.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity(capacity: usize) -> Self {
    Self::with_capacity_in(capacity, Global)
  }
}

impl<T, A: Allocator> ArenaList<T, A> {
  /// An empty list whose arena is allocated with the given allocator.

  pub fn new_in(allocator: A) -> Self {
    Self { nodes: Vec::new_in(allocator), head: None }
  }

  /// An empty list with room for `capacity` nodes, allocated with the given
  /// allocator.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity_in(capacity: usize, allocator: A) -> Self {
    Self { nodes: Vec::with_capacity_in(capacity, allocator), head: None }
  }

  /// Inserts a value at the front of the list. The previous first node, if
  /// any, becomes the second.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory, or if the list already holds as
  /// many nodes as a 32-bit link can address.

  #[inline(always)]
  pub fn add_to_front(&mut self, value: T) {
    crate::unwrap(add_to_front(self, value))
  }

  /// Inserts a value at the front of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory, or if the list
  /// already holds as many nodes as a 32-bit link can address. The list is
  /// left unchanged and `value` is dropped.

  #[inline(always)]
  pub fn try_add_to_front(&mut self, value: T) -> Result<(), AllocError> {
    add_to_front(self, value)
  }

  /// The number of nodes.

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Whether the list has no nodes.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// The value held by the first node.

  #[inline(always)]
  pub fn front(&self) -> Option<&T> {
    self.iter().next()
  }

  /// Drops every node. The arena keeps its memory for reuse.

  pub fn clear(&mut self) {
    self.head = None;
    self.nodes.clear();
  }

  /// Visits each value in link order, starting from the first node.

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter { nodes: &self.nodes, next: self.head }
  }

  /// Writes each value to standard output, one per line, front to back.

  #[cfg(feature = "std")]
  pub fn display(&self)
  where
    T: fmt::Display
  {
    std::print!("{}", self)
  }
}

impl<T, A: Allocator + Default> Default for ArenaList<T, A> {
  fn default() -> Self {
    Self::new_in(A::default())
  }
}

impl<'a, T, A: Allocator> IntoIterator for &'a ArenaList<T, A> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<T: fmt::Display, A: Allocator> fmt::Display for ArenaList<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    crate::write_lines(f, self)
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for ArenaList<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Iter                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<&'a T> {
    let node = &self.nodes[self.next?.index()];
    self.next = node.cdr;
    Some(&node.car)
  }
}

impl<'a, T> FusedIterator for Iter<'a, T> { }

impl<'a, T> Clone for Iter<'a, T> {
  fn clone(&self) -> Self {
    Iter { nodes: self.nodes, next: self.next }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use core::mem::size_of;

  #[test]
  fn test_link_is_niche_optimized() {
    assert!(size_of::<Option<Link>>() == size_of::<u32>());
  }

  #[test]
  fn test_link_index() {
    for i in 0 .. MAX_NODES {
      assert!(Link::new(i).map(Link::index) == Some(i));
    }
    assert!(Link::new(MAX_NODES).is_none());
  }

  #[test]
  fn test_links_point_backwards() {
    let mut list = ArenaList::new();
    for i in 0 .. MAX_NODES {
      list.add_to_front(i);
    }
    assert!(list.head.map(Link::index) == Some(MAX_NODES - 1));
    for (i, node) in list.nodes.iter().enumerate() {
      assert!(node.cdr.map_or(true, |link| link.index() < i));
    }
  }

  #[test]
  fn test_full_arena() {
    let mut list = ArenaList::new();
    for i in 0 .. MAX_NODES {
      assert!(list.try_add_to_front(i).is_ok());
    }
    assert!(list.try_add_to_front(MAX_NODES).is_err());
    assert!(list.len() == MAX_NODES);
    assert!(list.front() == Some(&(MAX_NODES - 1)));
    list.clear();
    assert!(list.try_add_to_front(0).is_ok());
  }

  #[test]
  #[should_panic]
  fn test_full_arena_panics() {
    let mut list = ArenaList::new();
    for i in 0 ..= MAX_NODES {
      list.add_to_front(i);
    }
  }
}
