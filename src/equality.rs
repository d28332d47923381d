//! Deep, content-based equality used by [`MinHeap`](crate::MinHeap) to find
//! values for `includes` and `remove`.
//!
//! Sequences compare element-wise and in order. Sets and maps compare by
//! membership, so two maps with the same entries are equal no matter in which
//! order they were filled. Floats compare by value except that `NaN` equals
//! `NaN`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use serde_json::{Number, Value};

pub trait StructuralEq {
    fn structural_eq(&self, other: &Self) -> bool;
}

/// Compares two values by content.
pub fn deep_equal<T: StructuralEq + ?Sized>(a: &T, b: &T) -> bool {
    a.structural_eq(b)
}

macro_rules! scalar_structural_eq {
    ($($t:ty),*) => {
        $(
            impl StructuralEq for $t {
                fn structural_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

scalar_structural_eq!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String, ());

macro_rules! float_structural_eq {
    ($($t:ty),*) => {
        $(
            impl StructuralEq for $t {
                fn structural_eq(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }
            }
        )*
    };
}

float_structural_eq!(f32, f64);

impl<T: StructuralEq + ?Sized> StructuralEq for &T {
    fn structural_eq(&self, other: &Self) -> bool {
        (**self).structural_eq(*other)
    }
}

impl<T: StructuralEq + ?Sized> StructuralEq for Box<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        (**self).structural_eq(&**other)
    }
}

impl<T: StructuralEq> StructuralEq for Option<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.structural_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: StructuralEq> StructuralEq for [T] {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.structural_eq(b))
    }
}

impl<T: StructuralEq, const N: usize> StructuralEq for [T; N] {
    fn structural_eq(&self, other: &Self) -> bool {
        self.as_slice().structural_eq(other.as_slice())
    }
}

impl<T: StructuralEq> StructuralEq for Vec<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.as_slice().structural_eq(other.as_slice())
    }
}

impl<T: StructuralEq> StructuralEq for VecDeque<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.structural_eq(b))
    }
}

macro_rules! tuple_structural_eq {
    ($(($($name:ident $idx:tt),+)),*) => {
        $(
            impl<$($name: StructuralEq),+> StructuralEq for ($($name,)+) {
                fn structural_eq(&self, other: &Self) -> bool {
                    $(self.$idx.structural_eq(&other.$idx))&&+
                }
            }
        )*
    };
}

tuple_structural_eq!((A 0), (A 0, B 1), (A 0, B 1, C 2), (A 0, B 1, C 2, D 3));

impl<T: Eq + Hash, S: BuildHasher> StructuralEq for HashSet<T, S> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Ord> StructuralEq for BTreeSet<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<K: Eq + Hash, V: StructuralEq, S: BuildHasher> StructuralEq for HashMap<K, V, S> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|o| value.structural_eq(o)))
    }
}

impl<K: Ord, V: StructuralEq> StructuralEq for BTreeMap<K, V> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|o| value.structural_eq(o)))
    }
}

impl StructuralEq for Value {
    fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a.structural_eq(b),
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a
                        .iter()
                        .all(|(key, value)| b.get(key).is_some_and(|o| value.structural_eq(o)))
            }
            _ => false,
        }
    }
}

// Integers compare exactly; anything else falls back to f64 so that 1 == 1.0.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a.structural_eq(&b),
        _ => false,
    }
}
