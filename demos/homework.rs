use conslist::List;
use conslist::recurse::del_item;
use conslist::recurse::find_biggest;
use conslist::recurse::index_find_biggest;

struct Point {
  x: i64,
  y: i64,
}

impl Point {
  fn display(&self) {
    print!("({}, {})\n", self.x, self.y);
  }
}

// Writing through the reference is visible to the caller. Rebinding the local
// name `p` is not.

fn modify(p: &mut Point) {
  p.x = 50;
  let p = Point { x: 20, y: 20 };
  let _ = p;
}

fn main() {
  let mut pt = Point { x: 10, y: 10 };
  modify(&mut pt);
  pt.display();

  let xs = [-1, 10, 3, 100, 541, 54, 12, -1, 42];

  if let Some(x) = find_biggest(&xs) {
    print!("{}\n", x);
  }

  if let Some(i) = index_find_biggest(&xs) {
    print!("{}\n", i);
  }

  print!("{:?}\n", del_item(&[6, 1, 2, 6, 4, 5, 6, 6, 6, 6], &6));

  let mut list = List::new();

  list.add_to_front(10);
  list.add_to_front(20);
  list.add_to_front(30);

  list.display();
}
