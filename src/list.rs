//! A singly linked list whose links are uniquely-owning boxes.
//!
//! Every node is owned by exactly one predecessor (or by the list, for the
//! head), so the chain can never form a cycle. Insertion happens only at the
//! front.

use core::alloc::Layout;
use core::fmt;
use core::iter::FusedIterator;
use allocator_api2::alloc::AllocError;
use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::boxed::Box;
use crate::Error;
use crate::Fail;

/// A singly linked list with O(1) insertion at the front.
///
/// New nodes are allocated with `A`. A list wrapping a pre-existing chain
/// (see [`from_head_in`](Self::from_head_in)) keeps each of those nodes in
/// the allocator it was boxed with.

pub struct List<T, A: Allocator = Global> {
  head: Option<Box<Node<T, A>, A>>,
  allocator: A,
}

/// One element of the chain.

pub struct Node<T, A: Allocator = Global> {
  /// The value held by this node.
  pub car: T,
  /// The rest of the chain, or `None` at the end.
  pub cdr: Option<Box<Node<T, A>, A>>,
}

/// Front-to-back traversal of a [`List`].

pub struct Iter<'a, T, A: Allocator = Global>(Option<&'a Node<T, A>>);

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Node                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T, A: Allocator> Node<T, A> {
  /// A node with no successor.

  pub const fn new(car: T) -> Self {
    Self { car, cdr: None }
  }

  /// A node in front of the given chain.

  pub const fn cons(car: T, cdr: Option<Box<Node<T, A>, A>>) -> Self {
    Self { car, cdr }
  }
}

impl<T, A: Allocator> Drop for Node<T, A> {
  fn drop(&mut self) {
    // Unlink the successors one at a time. The default recursive drop would
    // use stack space linear in the length of the chain.

    let mut next = self.cdr.take();

    while let Some(mut node) = next {
      next = node.cdr.take();
    }
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Node<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Node").field(&self.car).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn add_to_front<T, A, E>(list: &mut List<T, A>, value: T) -> Result<(), E>
where
  A: Allocator + Clone,
  E: Fail,
{
  // The node is boxed before the current head is moved into it, so a failed
  // allocation leaves the list untouched.

  let Ok(mut node) = Box::try_new_in(Node::new(value), list.allocator.clone()) else {
    return E::fail(Error::ParentAllocatorFailed(Layout::new::<Node<T, A>>()));
  };

  node.cdr = list.head.take();
  list.head = Some(node);

  Ok(())
}

impl<T> List<T, Global> {
  /// An empty list backed by the global allocator.

  pub const fn new() -> Self {
    Self { head: None, allocator: Global }
  }

  /// A list whose first node is `head`.

  pub fn from_head(head: Box<Node<T>>) -> Self {
    Self::from_head_in(head, Global)
  }
}

impl<T, A: Allocator> List<T, A> {
  /// An empty list which allocates its nodes with the given allocator.

  pub const fn new_in(allocator: A) -> Self {
    Self { head: None, allocator }
  }

  /// A list whose first node is `head`. Nodes added later are allocated with
  /// `allocator`.

  pub fn from_head_in(head: Box<Node<T, A>, A>, allocator: A) -> Self {
    Self { head: Some(head), allocator }
  }

  /// Whether the list has no nodes.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// The value held by the first node.

  #[inline(always)]
  pub fn front(&self) -> Option<&T> {
    self.head.as_deref().map(|node| &node.car)
  }

  /// The allocator used for new nodes.

  pub fn allocator(&self) -> &A {
    &self.allocator
  }

  /// Visits each value in link order, starting from the first node.
  ///
  /// The traversal is restartable: calling `iter` again walks the chain from
  /// the first node.

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, T, A> {
    Iter(self.head.as_deref())
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

impl<T, A: Allocator + Clone> List<T, A> {
  /// Inserts a value at the front of the list. The previous first node, if
  /// any, becomes the second.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  #[inline(always)]
  pub fn add_to_front(&mut self, value: T) {
    crate::unwrap(add_to_front(self, value))
  }

  /// Inserts a value at the front of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged and `value` is dropped.

  #[inline(always)]
  pub fn try_add_to_front(&mut self, value: T) -> Result<(), AllocError> {
    add_to_front(self, value)
  }
}

impl<T, A: Allocator + Default> Default for List<T, A> {
  fn default() -> Self {
    Self::new_in(A::default())
  }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T, A>;

  fn into_iter(self) -> Iter<'a, T, A> {
    self.iter()
  }
}

impl<T: fmt::Display, A: Allocator> fmt::Display for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    crate::write_lines(f, self)
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Iter                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T, A: Allocator> Iterator for Iter<'a, T, A> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<&'a T> {
    let node = self.0?;
    self.0 = node.cdr.as_deref();
    Some(&node.car)
  }
}

impl<'a, T, A: Allocator> FusedIterator for Iter<'a, T, A> { }

impl<'a, T, A: Allocator> Clone for Iter<'a, T, A> {
  fn clone(&self) -> Self {
    Iter(self.0)
  }
}
