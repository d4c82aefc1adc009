use std::time::Instant;
use std::hint;
use conslist::ArenaList;
use conslist::List;

#[allow(dead_code)]
enum BumpList<'a, A> {
  Nil,
  Cons(&'a BumpNode<'a, A>),
}

#[allow(dead_code)]
struct BumpNode<'a, A> {
  car: A,
  cdr: BumpList<'a, A>,
}

const ITERS: usize = 5_000;
const LEN: usize = 5_000;

// Runs each case once untimed, then reports the mean cost of one front
// insertion over `ITERS` lists of `LEN` nodes.

fn report(cases: &[(&str, fn(usize, usize))]) {
  for &(name, f) in cases {
    f(hint::black_box(1), hint::black_box(LEN));

    let start = Instant::now();
    f(hint::black_box(ITERS), hint::black_box(LEN));
    let elapsed = start.elapsed().as_nanos() as f64;

    println!("{:25} {:.3} ns", name, elapsed / (ITERS * LEN) as f64);
  }
}

#[inline(never)]
fn bench_list(iters: usize, len: usize) {
  for _ in 0 .. iters {
    let mut list = List::new();
    for i in 0 .. len {
      list.add_to_front(i as u64);
    }
    let _: List<_> = hint::black_box(list);
  }
}

#[inline(never)]
fn bench_list_in_bumpalo(iters: usize, len: usize) {
  let mut arena = bumpalo::Bump::new();

  for _ in 0 .. iters {
    let mut list = List::new_in(&arena);
    for i in 0 .. len {
      list.add_to_front(i as u64);
    }
    let _: List<_, _> = hint::black_box(list);
    arena.reset();
  }
}

#[inline(never)]
fn bench_arena_list(iters: usize, len: usize) {
  let mut list = ArenaList::new();

  for _ in 0 .. iters {
    for i in 0 .. len {
      list.add_to_front(i as u64);
    }
    let _: &ArenaList<_> = hint::black_box(&list);
    list.clear();
  }
}

#[inline(never)]
fn bench_arena_list_with_capacity(iters: usize, len: usize) {
  for _ in 0 .. iters {
    let mut list = ArenaList::with_capacity(len);
    for i in 0 .. len {
      list.add_to_front(i as u64);
    }
    let _: ArenaList<_> = hint::black_box(list);
  }
}

#[inline(never)]
fn bench_bumpalo(iters: usize, len: usize) {
  #[inline(never)]
  fn make_list<'a>(arena: &'a bumpalo::Bump, len: usize) -> BumpList<'a, u64> {
    let mut r = BumpList::Nil;
    for i in 0 .. len {
      r = BumpList::Cons(arena.alloc(BumpNode { car: i as u64, cdr: r }));
    }
    r
  }

  let mut arena = bumpalo::Bump::new();

  for _ in 0 .. iters {
    let _: BumpList<_> = hint::black_box(make_list(&arena, len));
    arena.reset();
  }
}

fn main() {
  let cases: [(&str, fn(usize, usize)); 5] = [
    ("list", bench_list),
    ("list-in-bumpalo", bench_list_in_bumpalo),
    ("arena-list", bench_arena_list),
    ("arena-list-with-capacity", bench_arena_list_with_capacity),
    ("bumpalo", bench_bumpalo),
  ];

  report(&cases);

  let mut list = List::new();
  for i in 0 .. 5_u64 { list.add_to_front(i); }
  println!("{:?}", list);
}
