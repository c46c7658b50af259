//! Standard library helpers and literals.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::path::Path;

use once_cell::sync::Lazy;

use crate::harness::{Example, ExampleError};
use crate::{check, check_eq, check_ne, expect_failure};

pub const EXAMPLES: &[Example] = &[
    Example::new("test_number_literals", test_number_literals),
    Example::new("test_to_string_and_parse", test_to_string_and_parse),
    Example::new("test_string_slices", test_string_slices),
    Example::new("test_bit_helpers", test_bit_helpers),
    Example::new("test_checked_arithmetic", test_checked_arithmetic),
    Example::new("test_math_constants", test_math_constants),
    Example::new("test_arrays_and_slices", test_arrays_and_slices),
    Example::new("test_unordered_containers", test_unordered_containers),
    Example::new("test_map_splicing", test_map_splicing),
    Example::new("test_set_splicing", test_set_splicing),
    Example::new("test_iterator_adapters", test_iterator_adapters),
    Example::new("test_lazy_statics", test_lazy_statics),
    Example::new("test_filesystem", test_filesystem),
];

fn test_number_literals() -> Result<(), ExampleError> {
    check_eq!(0b110, 6);
    check_eq!(0o17, 15);
    check_eq!(0xff_u8, u8::MAX);
    check_eq!(1_000_000, 10_i32.pow(6));
    check_eq!(b'A', 65);
    check_eq!('\u{1F980}'.len_utf8(), 4);
    check_eq!(2.5e3_f64, 2500.0);
    Ok(())
}

fn test_to_string_and_parse() -> Result<(), ExampleError> {
    check_eq!(123_i32.to_string(), "123");
    check_eq!(format!("{:>5}|{:<3}|{:08.3}", "ab", 7, 3.14159), "   ab|7  |0003.142");
    check_eq!(format!("{:#x}", 255), "0xff");
    check_eq!("  42 ".trim().parse::<i64>().ok(), Some(42));
    expect_failure!(|| "4 2".parse::<i64>());
    expect_failure!(|| "300".parse::<u8>());
    Ok(())
}

fn test_string_slices() -> Result<(), ExampleError> {
    let owned = String::from("hello, world");
    let view: &str = &owned[7..];
    check_eq!(view, "world");
    check!(owned.starts_with("hello"));
    check!(owned.ends_with("world"));
    check!(owned.contains(", "));
    check_eq!(owned.find('w'), Some(7));
    check_eq!(owned.split(", ").collect::<Vec<_>>(), ["hello", "world"]);
    check_eq!("ß".to_uppercase(), "SS");
    // slicing in the middle of a multi-byte char is a bug, not a bad value
    let crab = "🦀";
    check!(!crab.is_char_boundary(1));
    expect_failure!(|| {
        let _half = &crab[..1];
    });
    Ok(())
}

fn test_bit_helpers() -> Result<(), ExampleError> {
    let x: u8 = 0b0001_1000;
    check_eq!(x.count_ones(), 2);
    check_eq!(x.leading_zeros(), 3);
    check_eq!(x.trailing_zeros(), 3);
    check!(!x.is_power_of_two());
    check!(16u32.is_power_of_two());
    check_eq!(17u32.next_power_of_two(), 32);
    check_eq!(0b1000_0001_u8.rotate_left(1), 0b0000_0011);
    check_eq!(0x1234_u16.swap_bytes(), 0x3412);
    check_eq!(u32::from_be_bytes([0, 0, 1, 0]), 256);
    Ok(())
}

fn test_checked_arithmetic() -> Result<(), ExampleError> {
    check_eq!(u8::MAX.checked_add(1), None);
    check_eq!(u8::MAX.wrapping_add(1), 0);
    check_eq!(u8::MAX.saturating_add(1), u8::MAX);
    check_eq!(250u8.overflowing_add(10), (4, true));
    check_eq!((-7i32).rem_euclid(3), 2);
    check_eq!(-7i32 % 3, -1);
    check_eq!(i32::MIN.checked_abs(), None);
    Ok(())
}

fn test_math_constants() -> Result<(), ExampleError> {
    use std::f64::consts::{E, PI, SQRT_2};

    check!((PI - 3.14159).abs() < 1e-5);
    check!((E.ln() - 1.0).abs() < 1e-12);
    check!((SQRT_2 * SQRT_2 - 2.0).abs() < 1e-12);
    check!(f64::NAN.is_nan());
    check_eq!(f64::INFINITY.max(1.0), f64::INFINITY);
    check_eq!((0.1_f64 + 0.2).total_cmp(&0.3), std::cmp::Ordering::Greater);
    Ok(())
}

fn test_arrays_and_slices() -> Result<(), ExampleError> {
    let mut arr = [3, 1, 2];
    check_eq!(arr.len(), 3);
    arr.sort_unstable();
    check_eq!(arr, [1, 2, 3]);
    check_eq!(arr.binary_search(&2), Ok(1));
    check_eq!(arr.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);

    let grid = [[0u8; 3]; 2];
    check_eq!(grid.len() * grid[0].len(), 6);

    let v: Vec<i32> = arr.to_vec();
    check_eq!(v.windows(2).count(), 2);
    check_eq!(v.chunks(2).map(|c| c.len()).collect::<Vec<_>>(), [2, 1]);
    check_eq!(v.get(10), None);
    expect_failure!(|| {
        let _out_of_range = v[10];
    });
    Ok(())
}

fn test_unordered_containers() -> Result<(), ExampleError> {
    let mut set: HashSet<&str> = HashSet::new();
    check!(set.insert("a"));
    check!(!set.insert("a"));
    check_eq!(set.len(), 1);

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in "mississippi".chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    check_eq!(counts[&'s'], 4);
    check_eq!(counts.get(&'z'), None);

    let mut queue: VecDeque<i32> = VecDeque::from([2]);
    queue.push_front(1);
    queue.push_back(3);
    check_eq!(queue.pop_front(), Some(1));
    check_eq!(queue, [2, 3]);
    Ok(())
}

fn test_map_splicing() -> Result<(), ExampleError> {
    let mut src: BTreeMap<i32, String> =
        BTreeMap::from([(1, "one".to_string()), (2, "two".to_string()), (3, "three".to_string())]);
    let mut dst: BTreeMap<i32, String> = BTreeMap::new();

    // move an entry between maps without cloning the value
    if let Some((key, value)) = src.remove_entry(&2) {
        dst.insert(key * 10, value);
    }
    check_eq!(src.keys().copied().collect::<Vec<_>>(), [1, 3]);
    check_eq!(dst.get(&20).map(String::as_str), Some("two"));

    // split off everything >= 3
    let tail = src.split_off(&3);
    check_eq!(src.len(), 1);
    check_eq!(tail.len(), 1);
    Ok(())
}

fn test_set_splicing() -> Result<(), ExampleError> {
    let mut a: BTreeSet<i32> = BTreeSet::from([1, 2, 3]);
    let mut b: BTreeSet<i32> = BTreeSet::from([3, 4, 5]);
    a.append(&mut b);
    check!(b.is_empty());
    check_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);

    let evens: BTreeSet<i32> = a.iter().copied().filter(|n| n % 2 == 0).collect();
    check_eq!(a.intersection(&evens).count(), 2);
    check_ne!(a, evens);
    Ok(())
}

fn test_iterator_adapters() -> Result<(), ExampleError> {
    let words = ["apple", "bob", "kayak", "rust"];
    let palindromes: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| w.chars().eq(w.chars().rev()))
        .collect();
    check_eq!(palindromes, ["bob", "kayak"]);

    let total: usize = words.iter().map(|w| w.len()).sum();
    check_eq!(total, 17);

    let (short, long): (Vec<&str>, Vec<&str>) = words.iter().partition(|w| w.len() <= 4);
    check_eq!(short, ["bob", "rust"]);
    check_eq!(long, ["apple", "kayak"]);

    let zipped: Vec<(usize, char)> = (1..).zip("ab".chars()).collect();
    check_eq!(zipped, [(1, 'a'), (2, 'b')]);
    check_eq!(words.iter().position(|w| *w == "rust"), Some(3));
    Ok(())
}

// ============================================================================
// LAZILY INITIALIZED STATICS
// ============================================================================

static PRIMES: Lazy<Vec<u32>> = Lazy::new(|| {
    (2..50u32)
        .filter(|n| (2..*n).take_while(|d| d * d <= *n).all(|d| n % d != 0))
        .collect()
});

static ROMAN: Lazy<HashMap<char, u32>> =
    Lazy::new(|| HashMap::from([('I', 1), ('V', 5), ('X', 10), ('L', 50), ('C', 100)]));

fn roman_to_int(s: &str) -> Option<u32> {
    let values: Vec<u32> = s.chars().map(|c| ROMAN.get(&c).copied()).collect::<Option<_>>()?;
    let mut total = 0;
    for (i, v) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(next) if next > v => total -= *v as i64,
            _ => total += *v as i64,
        }
    }
    u32::try_from(total).ok()
}

fn test_lazy_statics() -> Result<(), ExampleError> {
    check_eq!(PRIMES.len(), 15);
    check_eq!(PRIMES.first(), Some(&2));
    check_eq!(PRIMES.last(), Some(&47));
    check_eq!(roman_to_int("XLII"), Some(42));
    check_eq!(roman_to_int("Q"), None);
    Ok(())
}

// ============================================================================
// FILESYSTEM
// ============================================================================

fn test_filesystem() -> Result<(), ExampleError> {
    let exists = Path::new("some_cOmpLiCaTed_filename").exists();
    check!(!exists);

    let p = Path::new("dir/archive.tar.gz");
    check_eq!(p.file_name().and_then(|n| n.to_str()), Some("archive.tar.gz"));
    check_eq!(p.extension().and_then(|e| e.to_str()), Some("gz"));
    check_eq!(p.parent(), Some(Path::new("dir")));
    Ok(())
}
