//! Algebras and a reference model shared by the integration tests.
#![allow(dead_code)]

use lazy_segment_tree::{Action, IterativeLazySegmentTree, Monoid, RecursiveLazySegmentTree};

// =============================================================================
// Count-weighted sum with range additions
// =============================================================================

/// `(sum, count)` pairs.
#[derive(Clone)]
pub struct CountedSum;

impl Monoid for CountedSum {
    type Item = (i64, i64);

    fn identity(&self) -> (i64, i64) {
        (0, 0)
    }

    fn combine(&self, lhs: &(i64, i64), rhs: &(i64, i64)) -> (i64, i64) {
        (lhs.0 + rhs.0, lhs.1 + rhs.1)
    }
}

/// Adds a constant to every element.
#[derive(Clone)]
pub struct Add;

impl Monoid for Add {
    type Item = i64;

    fn identity(&self) -> i64 {
        0
    }

    fn combine(&self, lhs: &i64, rhs: &i64) -> i64 {
        lhs + rhs
    }
}

impl Action<CountedSum> for Add {
    fn map(&self, f: &i64, x: &(i64, i64)) -> (i64, i64) {
        (x.0 + f * x.1, x.1)
    }
}

pub fn counted(values: impl IntoIterator<Item = i64>) -> Vec<(i64, i64)> {
    values.into_iter().map(|value| (value, 1)).collect()
}

pub fn counted_iterative(
    values: impl IntoIterator<Item = i64>,
) -> IterativeLazySegmentTree<CountedSum, Add> {
    IterativeLazySegmentTree::new(CountedSum, Add, counted(values)).unwrap()
}

pub fn counted_recursive(
    values: impl IntoIterator<Item = i64>,
) -> RecursiveLazySegmentTree<CountedSum, Add> {
    RecursiveLazySegmentTree::new(CountedSum, Add, counted(values)).unwrap()
}

// =============================================================================
// Concatenation with affine updates
// =============================================================================

/// Concatenation of sequences. Not commutative, so it catches swapped operands.
#[derive(Clone)]
pub struct Concat;

impl Monoid for Concat {
    type Item = Vec<u32>;

    fn identity(&self) -> Vec<u32> {
        Vec::new()
    }

    fn combine(&self, lhs: &Vec<u32>, rhs: &Vec<u32>) -> Vec<u32> {
        let mut combined = lhs.clone();
        combined.extend_from_slice(rhs);
        combined
    }
}

/// `x -> a * x + b` in wrapping arithmetic, as `(a, b)`.
pub type AffineMap = (u32, u32);

/// Affine maps applied to every element. Composition isn't commutative either.
#[derive(Clone)]
pub struct Affine;

impl Affine {
    pub fn eval(f: &AffineMap, x: u32) -> u32 {
        f.0.wrapping_mul(x).wrapping_add(f.1)
    }
}

impl Monoid for Affine {
    type Item = AffineMap;

    fn identity(&self) -> AffineMap {
        (1, 0)
    }

    fn combine(&self, f: &AffineMap, g: &AffineMap) -> AffineMap {
        (f.0.wrapping_mul(g.0), f.0.wrapping_mul(g.1).wrapping_add(f.1))
    }
}

impl Action<Concat> for Affine {
    fn map(&self, f: &AffineMap, x: &Vec<u32>) -> Vec<u32> {
        x.iter().map(|&x| Affine::eval(f, x)).collect()
    }
}

pub fn singletons(values: &[u32]) -> Vec<Vec<u32>> {
    values.iter().map(|&value| vec![value]).collect()
}

pub fn affine_iterative(values: &[u32]) -> IterativeLazySegmentTree<Concat, Affine> {
    IterativeLazySegmentTree::new(Concat, Affine, singletons(values)).unwrap()
}

pub fn affine_recursive(values: &[u32]) -> RecursiveLazySegmentTree<Concat, Affine> {
    RecursiveLazySegmentTree::new(Concat, Affine, singletons(values)).unwrap()
}

// =============================================================================
// Reference model
// =============================================================================

/// A plain `Vec` that applies every update eagerly.
pub struct Model {
    pub elements: Vec<u32>,
}

impl Model {
    pub fn set(&mut self, start: usize, end: usize, f: &AffineMap) {
        for element in &mut self.elements[start..end] {
            *element = Affine::eval(f, *element);
        }
    }

    pub fn get(&self, start: usize, end: usize) -> Vec<u32> {
        self.elements[start..end].to_vec()
    }

    pub fn update(&mut self, index: usize, element: u32) {
        self.elements[index] = element;
    }
}

/// Maps two arbitrary numbers onto a valid range of `0..=len`.
pub fn to_range(a: usize, b: usize, len: usize) -> (usize, usize) {
    let a = a % (len + 1);
    let b = b % (len + 1);
    (a.min(b), a.max(b))
}
