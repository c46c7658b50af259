//! Ownership, borrowing and smart pointers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::harness::{Example, ExampleError};
use crate::{check, check_eq, expect_failure};

pub const EXAMPLES: &[Example] = &[
    Example::new("test_move_semantics", test_move_semantics),
    Example::new("test_clone_vs_move", test_clone_vs_move),
    Example::new("test_borrow_kinds", test_borrow_kinds),
    Example::new("test_reborrow_through_mut", test_reborrow_through_mut),
    Example::new("test_box_ownership", test_box_ownership),
    Example::new("test_rc_shared", test_rc_shared),
    Example::new("test_weak_references", test_weak_references),
    Example::new("test_refcell_borrow_rules", test_refcell_borrow_rules),
    Example::new("test_drop_order", test_drop_order),
    Example::new("test_raw_string_literal", test_raw_string_literal),
];

// ============================================================================
// MOVE SEMANTICS
// ============================================================================

fn test_move_semantics() -> Result<(), ExampleError> {
    let p1 = Box::new(vec![1, 2, 3]);
    let p2 = p1;
    // `p1` is gone; the heap allocation was handed over without copying.
    check_eq!(*p2, vec![1, 2, 3]);
    Ok(())
}

/// Records how each value came to be.
#[derive(Debug)]
struct Tracked {
    s: String,
    last_op: &'static str,
}

impl Tracked {
    fn new(s: &str) -> Self {
        Self {
            s: s.to_string(),
            last_op: "construct",
        }
    }

    fn moved(mut self) -> Self {
        self.last_op = "move";
        self
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self {
            s: self.s.clone(),
            last_op: "clone",
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.s.clone_from(&source.s);
        self.last_op = "clone-assign";
    }
}

fn pass_through(t: Tracked) -> Tracked {
    t.moved()
}

fn test_clone_vs_move() -> Result<(), ExampleError> {
    let a0 = Tracked::new("dummy0");
    let a1 = a0.clone();
    let mut a2 = Tracked::new("dummy2");
    a2.clone_from(&a1);
    let a3 = pass_through(Tracked::new("dummy3"));
    let a4 = a0;

    check_eq!(a1.last_op, "clone");
    check_eq!(a2.last_op, "clone-assign");
    check_eq!(a2.s, "dummy0");
    check_eq!(a3.last_op, "move");
    // a plain move is a memcpy; no hook runs
    check_eq!(a4.last_op, "construct");
    Ok(())
}

// ============================================================================
// SHARED VS UNIQUE BORROWING
// ============================================================================

trait WhichBorrow {
    fn which(self) -> &'static str;
}

impl WhichBorrow for &i32 {
    fn which(self) -> &'static str {
        "shared-reference"
    }
}

impl WhichBorrow for &mut i32 {
    fn which(self) -> &'static str {
        "unique-reference"
    }
}

impl WhichBorrow for i32 {
    fn which(self) -> &'static str {
        "owned-value"
    }
}

fn test_borrow_kinds() -> Result<(), ExampleError> {
    let mut x = 0;
    check_eq!((&x).which(), "shared-reference");
    check_eq!((&mut x).which(), "unique-reference");
    check_eq!(x.which(), "owned-value");
    check_eq!(2_i32.which(), "owned-value");
    Ok(())
}

fn bump(n: &mut i32) {
    *n += 1;
}

fn test_reborrow_through_mut() -> Result<(), ExampleError> {
    let mut x = 1;
    let r = &mut x;
    bump(r); // implicit reborrow, `r` stays usable
    bump(&mut *r);
    check_eq!(*r, 3);
    check_eq!(x, 3);
    Ok(())
}

// ============================================================================
// SMART POINTERS
// ============================================================================

fn test_box_ownership() -> Result<(), ExampleError> {
    let b: Box<dyn Fn(i32) -> i32> = Box::new(|n| n * 2);
    check_eq!(b(21), 42);

    let s = Box::new(String::from("boxed"));
    let unboxed: String = *s;
    check_eq!(unboxed, "boxed");
    Ok(())
}

fn test_rc_shared() -> Result<(), ExampleError> {
    let a = Rc::new(vec![1, 2]);
    check_eq!(Rc::strong_count(&a), 1);
    {
        let b = Rc::clone(&a);
        check_eq!(Rc::strong_count(&a), 2);
        check!(Rc::ptr_eq(&a, &b));
    }
    check_eq!(Rc::strong_count(&a), 1);
    Ok(())
}

fn test_weak_references() -> Result<(), ExampleError> {
    let weak: Weak<i32>;
    {
        let strong = Rc::new(5);
        weak = Rc::downgrade(&strong);
        check_eq!(weak.upgrade().map(|v| *v), Some(5));
    }
    check!(weak.upgrade().is_none());
    Ok(())
}

fn test_refcell_borrow_rules() -> Result<(), ExampleError> {
    let cell = RefCell::new(vec![1]);
    cell.borrow_mut().push(2);
    check_eq!(*cell.borrow(), vec![1, 2]);

    let reader = cell.borrow();
    check!(cell.try_borrow_mut().is_err());
    // a second mutable borrow while `reader` is alive panics
    expect_failure!(|| {
        cell.borrow_mut().push(3);
    });
    drop(reader);
    check_eq!(cell.borrow().len(), 2);
    Ok(())
}

struct Noisy<'a> {
    id: u8,
    log: &'a RefCell<Vec<u8>>,
}

impl Drop for Noisy<'_> {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}

fn test_drop_order() -> Result<(), ExampleError> {
    let log = RefCell::new(Vec::new());
    {
        let _first = Noisy { id: 1, log: &log };
        let _second = Noisy { id: 2, log: &log };
        let moved = Noisy { id: 3, log: &log };
        drop(moved);
    }
    // locals drop in reverse declaration order
    check_eq!(*log.borrow(), vec![3, 2, 1]);
    Ok(())
}

// ============================================================================
// RAW STRING LITERALS
// ============================================================================

fn test_raw_string_literal() -> Result<(), ExampleError> {
    let msg1 = "\n    Hello,\n        \"world\"!\n    ";
    let msg2 = r#"
    Hello,
        "world"!
    "#;
    check_eq!(msg1, msg2);
    Ok(())
}
