//! Helpers that walk a slice front to back.
//!
//! Each function peels the first element off with a slice pattern and
//! continues with the rest. Taking a subslice is O(1), so the whole walk is
//! O(n) time and O(1) stack, however long the input.

use alloc::vec::Vec;

/// The largest element of `xs`, or `None` if `xs` is empty.
///
/// If several elements compare equal to the maximum, the first of them is
/// returned.

pub fn find_biggest<T: Ord>(xs: &[T]) -> Option<&T> {
  let [first, rest @ ..] = xs else { return None; };

  let mut best = first;
  let mut xs = rest;

  while let [x, rest @ ..] = xs {
    if x > best {
      best = x;
    }

    xs = rest;
  }

  Some(best)
}

/// The index of the largest element of `xs`, or `None` if `xs` is empty.
///
/// If several elements compare equal to the maximum, the index of the last
/// of them is returned.

pub fn index_find_biggest<T: Ord>(xs: &[T]) -> Option<usize> {
  let [first, rest @ ..] = xs else { return None; };

  let mut best = (0, first);
  let mut i = 1;
  let mut xs = rest;

  while let [x, rest @ ..] = xs {
    if x >= best.1 {
      best = (i, x);
    }

    i = i + 1;
    xs = rest;
  }

  Some(best.0)
}

/// A copy of `xs` with every element equal to `item` removed. The remaining
/// elements keep their order.

pub fn del_item<T: PartialEq + Clone>(xs: &[T], item: &T) -> Vec<T> {
  let mut out = Vec::new();
  let mut xs = xs;

  while let [x, rest @ ..] = xs {
    if x != item {
      out.push(x.clone());
    }

    xs = rest;
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;

  const XS: [i64; 9] = [-1, 10, 3, 100, 541, 54, 12, -1, 42];

  #[test]
  fn test_find_biggest() {
    assert!(find_biggest(&XS) == Some(&541));
    assert!(find_biggest(&[7]) == Some(&7));
    assert!(find_biggest::<i64>(&[]).is_none());
  }

  #[test]
  fn test_find_biggest_returns_first_of_ties() {
    let xs = [(1, 'a'), (1, 'b')];
    let by_key: [_; 2] = xs.map(|(k, c)| Keyed(k, c));
    assert!(find_biggest(&by_key).map(|k| k.1) == Some('a'));
  }

  #[test]
  fn test_index_find_biggest() {
    assert!(index_find_biggest(&XS) == Some(4));
    assert!(index_find_biggest(&[7]) == Some(0));
    assert!(index_find_biggest::<i64>(&[]).is_none());
    assert!(index_find_biggest(&[5, 1, 5]) == Some(2));
  }

  #[test]
  fn test_long_slices() {
    let n = 1_000_000;
    let xs: Vec<u64> = (0 .. n).collect();
    assert!(find_biggest(&xs) == Some(&(n - 1)));
    assert!(index_find_biggest(&xs) == Some(xs.len() - 1));
    assert!(del_item(&xs, &0).len() == xs.len() - 1);
    let ys: Vec<u64> = (0 .. n).rev().collect();
    assert!(find_biggest(&ys) == Some(&(n - 1)));
    assert!(index_find_biggest(&ys) == Some(0));
  }

  #[test]
  fn test_del_item() {
    assert!(del_item(&[6, 1, 2, 6, 4, 5, 6, 6, 6, 6], &6) == [1, 2, 4, 5]);
    assert!(del_item(&[6], &6).is_empty());
    assert!(del_item(&[1], &6) == [1]);
    assert!(del_item::<i64>(&[], &6).is_empty());
  }

  // Orders by the first field only, so ties can be told apart.

  struct Keyed(i64, char);

  impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
  }

  impl Eq for Keyed { }

  impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> { Some(self.cmp(other)) }
  }

  impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering { self.0.cmp(&other.0) }
  }
}
