//! Generics, traits, closures and pattern matching.

use std::collections::HashMap;
use std::fmt::Display;

use crate::harness::{Example, ExampleError};
use crate::{check, check_eq, check_ne, expect_failure};

pub const EXAMPLES: &[Example] = &[
    Example::new("test_variadic_macros", test_variadic_macros),
    Example::new("test_closure_captures", test_closure_captures),
    Example::new("test_generic_closures", test_generic_closures),
    Example::new("test_trait_bounds", test_trait_bounds),
    Example::new("test_impl_trait_return", test_impl_trait_return),
    Example::new("test_associated_consts", test_associated_consts),
    Example::new("test_const_fn", test_const_fn),
    Example::new("test_destructuring", test_destructuring),
    Example::new("test_enum_variants", test_enum_variants),
    Example::new("test_option_combinators", test_option_combinators),
    Example::new("test_result_propagation", test_result_propagation),
    Example::new("test_let_else", test_let_else),
];

// ============================================================================
// VARIADICS VIA MACRO_RULES!
// ============================================================================

macro_rules! sum {
    () => { 0 };
    ($head:expr $(, $tail:expr)*) => { $head + sum!($($tail),*) };
}

macro_rules! count {
    () => { 0usize };
    ($_head:tt $($tail:tt)*) => { 1usize + count!($($tail)*) };
}

fn test_variadic_macros() -> Result<(), ExampleError> {
    check_eq!(sum!(), 0);
    check_eq!(sum!(1, 2, 3, 4), 10);
    check_eq!(count!(a b c), 3);
    Ok(())
}

// ============================================================================
// CLOSURES
// ============================================================================

fn test_closure_captures() -> Result<(), ExampleError> {
    let base = 10;
    let add_base = |n: i32| n + base; // borrows `base`
    check_eq!(add_base(5), 15);

    let mut calls = 0;
    let mut counted = || calls += 1; // FnMut
    counted();
    counted();
    check_eq!(calls, 2);

    let owned = String::from("moved in");
    let consume = move || owned.len(); // takes ownership
    check_eq!(consume(), 8);
    Ok(())
}

fn apply_twice<F>(f: F, x: i32) -> i32
where
    F: Fn(i32) -> i32,
{
    f(f(x))
}

fn make_adder(n: i32) -> impl Fn(i32) -> i32 {
    move |x| x + n
}

fn test_generic_closures() -> Result<(), ExampleError> {
    check_eq!(apply_twice(|x| x * 3, 2), 18);
    check_eq!(apply_twice(make_adder(4), 1), 9);

    let mut adders: Vec<Box<dyn Fn(i32) -> i32>> = Vec::new();
    adders.push(Box::new(make_adder(1)));
    adders.push(Box::new(|x: i32| x - 1));
    let results: Vec<i32> = adders.iter().map(|f| f(10)).collect();
    check_eq!(results, [11, 9]);
    Ok(())
}

// ============================================================================
// TRAITS AS CONSTRAINTS
// ============================================================================

fn largest<T: PartialOrd + Copy>(items: &[T]) -> Option<T> {
    let mut iter = items.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |acc, x| if x > acc { x } else { acc }))
}

fn describe_all<T>(items: &[T]) -> String
where
    T: Display,
{
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn test_trait_bounds() -> Result<(), ExampleError> {
    check_eq!(largest(&[3, 9, 2]), Some(9));
    check_eq!(largest(&[1.5, -2.0]), Some(1.5));
    check_eq!(largest::<u8>(&[]), None);
    check_eq!(describe_all(&["a", "b"]), "a,b");
    Ok(())
}

fn evens(limit: u32) -> impl Iterator<Item = u32> {
    (0..limit).filter(|n| n % 2 == 0)
}

fn test_impl_trait_return() -> Result<(), ExampleError> {
    check_eq!(evens(7).collect::<Vec<_>>(), [0, 2, 4, 6]);
    check_eq!(evens(7).sum::<u32>(), 12);
    Ok(())
}

trait Shape {
    const SIDES: u32;

    fn sides(&self) -> u32 {
        Self::SIDES
    }
}

struct Triangle;
struct Square;

impl Shape for Triangle {
    const SIDES: u32 = 3;
}

impl Shape for Square {
    const SIDES: u32 = 4;
}

fn total_sides<A: Shape, B: Shape>() -> u32 {
    A::SIDES + B::SIDES
}

fn test_associated_consts() -> Result<(), ExampleError> {
    check_eq!(Triangle.sides(), 3);
    check_eq!(Square.sides(), 4);
    check_eq!(total_sides::<Triangle, Square>(), 7);
    Ok(())
}

// ============================================================================
// CONST FN
// ============================================================================

const fn factorial(n: u64) -> u64 {
    if n <= 1 {
        1
    } else {
        n * factorial(n - 1)
    }
}

const FACT_5: u64 = factorial(5);
const LOOKUP: [u64; 4] = [factorial(0), factorial(1), factorial(2), factorial(3)];

fn test_const_fn() -> Result<(), ExampleError> {
    check_eq!(FACT_5, 120);
    check_eq!(LOOKUP, [1, 1, 2, 6]);
    // same function, evaluated at runtime
    let n = LOOKUP.len() as u64;
    check_eq!(factorial(n), 24);
    Ok(())
}

// ============================================================================
// PATTERN MATCHING
// ============================================================================

struct Point {
    x: i32,
    y: i32,
}

fn pair(a: i32, b: f64) -> (i32, f64) {
    (a, b)
}

fn test_destructuring() -> Result<(), ExampleError> {
    let (i, j) = pair(1, 2.3);
    check_eq!(i, 1);
    check_eq!(j, 2.3);

    let Point { x, y: renamed } = Point { x: 4, y: -1 };
    check_eq!(x + renamed, 3);

    let map: HashMap<&str, i32> = HashMap::from([("a", 1), ("b", 2)]);
    let mut sum = 0;
    for (_key, val) in &map {
        sum += val;
    }
    check_eq!(sum, 3);

    let [first, .., last] = [1, 2, 3, 4];
    check_eq!((first, last), (1, 4));
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
enum Figure {
    Circle { radius: f64 },
    Rect { w: f64, h: f64 },
    Empty,
}

impl Figure {
    fn area(&self) -> f64 {
        match self {
            Figure::Circle { radius } => std::f64::consts::PI * radius * radius,
            Figure::Rect { w, h } => w * h,
            Figure::Empty => 0.0,
        }
    }
}

fn test_enum_variants() -> Result<(), ExampleError> {
    let shapes = [
        Figure::Rect { w: 2.0, h: 3.0 },
        Figure::Empty,
        Figure::Circle { radius: 1.0 },
    ];
    check_eq!(shapes[0].area(), 6.0);
    check_eq!(shapes[1].area(), 0.0);
    check!((shapes[2].area() - std::f64::consts::PI).abs() < f64::EPSILON);
    check_ne!(shapes[0], Figure::Empty);
    check!(matches!(shapes[2], Figure::Circle { radius } if radius > 0.5));
    Ok(())
}

// ============================================================================
// OPTION & RESULT
// ============================================================================

fn test_option_combinators() -> Result<(), ExampleError> {
    let some: Option<i32> = Some(4);
    let none: Option<i32> = None;
    check_eq!(some.map(|v| v * 2), Some(8));
    check_eq!(none.unwrap_or(7), 7);
    check_eq!(some.and_then(|v| 10_i32.checked_div(v)), Some(2));
    check_eq!(some.and_then(|_| 10_i32.checked_div(0)), None);
    check_eq!(none.or(Some(1)).filter(|v| *v > 0), Some(1));
    Ok(())
}

#[derive(Debug, PartialEq)]
enum ConfigError {
    Missing(&'static str),
    Invalid(std::num::ParseIntError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing key '{}'", key),
            ConfigError::Invalid(e) => write!(f, "invalid value: {}", e),
        }
    }
}

impl From<std::num::ParseIntError> for ConfigError {
    fn from(e: std::num::ParseIntError) -> Self {
        ConfigError::Invalid(e)
    }
}

fn read_port(settings: &HashMap<&'static str, &'static str>) -> Result<u16, ConfigError> {
    let raw = settings.get("port").ok_or(ConfigError::Missing("port"))?;
    Ok(raw.parse()?)
}

fn test_result_propagation() -> Result<(), ExampleError> {
    let good = HashMap::from([("port", "8080")]);
    let bad = HashMap::from([("port", "eighty")]);
    let empty = HashMap::new();

    check_eq!(read_port(&good), Ok(8080));
    check!(matches!(read_port(&bad), Err(ConfigError::Invalid(_))));
    check_eq!(read_port(&empty), Err(ConfigError::Missing("port")));
    check_eq!(
        read_port(&empty).unwrap_err().to_string(),
        "missing key 'port'"
    );
    expect_failure!(|| read_port(&bad));
    Ok(())
}

fn first_word_len(s: &str) -> Option<usize> {
    let Some(word) = s.split_whitespace().next() else {
        return None;
    };
    Some(word.len())
}

fn test_let_else() -> Result<(), ExampleError> {
    check_eq!(first_word_len("hello world"), Some(5));
    check_eq!(first_word_len("   "), None);
    Ok(())
}
