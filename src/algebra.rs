//! Algebras consumed by the trees.
//!
//! A tree is parameterized by two values:
//! * a value [`Monoid`] `S` that aggregates elements, and
//! * an update [`Action`] `F`, which is itself a [`Monoid`] of endomorphisms
//!   that can be mapped onto elements of `S`.
//!
//! # Composition order
//!
//! `F::combine(f, g)` composes `f` **after** `g`:
//!
//! ```text
//! map(combine(f, g), x) == map(f, map(g, x))
//! ```
//!
//! A tree stores the newest tag on the left when it stacks a tag onto a pending one.
//! Implementations that get this backwards produce wrong aggregates without any visible failure.
//!
//! # Laws
//!
//! For every `a`, `b`, `c` in `S`, and `f`, `g`, `h` in `F`:
//! * `combine(identity(), a) == a == combine(a, identity())`
//! * `combine(combine(a, b), c) == combine(a, combine(b, c))`
//! * the same two laws for `F`
//! * `map(identity(), a) == a`
//! * `map(combine(f, g), a) == map(f, map(g, a))`
//! * `map(f, combine(a, b)) == combine(map(f, a), map(f, b))`
//!
//! `combine` of `S` is not required to be commutative.

/// An associative binary operation with an identity element.
pub trait Monoid {
    type Item: Clone;

    fn identity(&self) -> Self::Item;

    fn combine(&self, lhs: &Self::Item, rhs: &Self::Item) -> Self::Item;
}

/// A [`Monoid`] of updates that acts on the items of `S`.
///
/// `self.combine(f, g)` must be the update that applies `g` first, then `f`.
pub trait Action<S: Monoid>: Monoid {
    fn map(&self, f: &Self::Item, x: &S::Item) -> S::Item;
}

/// A [`Monoid`] made from an identity value and a closure.
///
/// # Examples
///
/// ```
/// use lazy_segment_tree::algebra::{FnMonoid, Monoid};
///
/// let max = FnMonoid::new(i32::MIN, |a: &i32, b: &i32| *a.max(b));
/// assert_eq!(max.combine(&3, &max.identity()), 3);
/// ```
#[derive(Clone)]
pub struct FnMonoid<T, C> {
    identity: T,
    combine: C,
}

impl<T, C> FnMonoid<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> T,
{
    pub fn new(identity: T, combine: C) -> Self {
        FnMonoid { identity, combine }
    }
}

impl<T, C> Monoid for FnMonoid<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> T,
{
    type Item = T;

    fn identity(&self) -> T {
        self.identity.clone()
    }

    fn combine(&self, lhs: &T, rhs: &T) -> T {
        (self.combine)(lhs, rhs)
    }
}

/// An [`Action`] made from an identity update and two closures.
///
/// `compose(f, g)` must apply `g` first, then `f`.
///
/// # Examples
///
/// ```
/// use lazy_segment_tree::algebra::{Action, FnAction, FnMonoid, Monoid};
///
/// let sum = FnMonoid::new(0i64, |a: &i64, b: &i64| a + b);
/// let add = FnAction::new(0i64, |f: &i64, g: &i64| f + g, |f: &i64, x: &i64| x + f);
///
/// fn map<S: Monoid, F: Action<S>>(_: &S, action: &F, f: &F::Item, x: &S::Item) -> S::Item {
///     action.map(f, x)
/// }
///
/// let f = add.combine(&2, &3);
/// assert_eq!(map(&sum, &add, &f, &sum.identity()), 5);
/// ```
#[derive(Clone)]
pub struct FnAction<T, C, M> {
    monoid: FnMonoid<T, C>,
    map: M,
}

impl<T, C, M> FnAction<T, C, M>
where
    T: Clone,
    C: Fn(&T, &T) -> T,
{
    pub fn new(identity: T, compose: C, map: M) -> Self {
        FnAction {
            monoid: FnMonoid::new(identity, compose),
            map,
        }
    }
}

impl<T, C, M> Monoid for FnAction<T, C, M>
where
    T: Clone,
    C: Fn(&T, &T) -> T,
{
    type Item = T;

    fn identity(&self) -> T {
        self.monoid.identity()
    }

    fn combine(&self, lhs: &T, rhs: &T) -> T {
        self.monoid.combine(lhs, rhs)
    }
}

impl<S, T, C, M> Action<S> for FnAction<T, C, M>
where
    S: Monoid,
    T: Clone,
    C: Fn(&T, &T) -> T,
    M: Fn(&T, &S::Item) -> S::Item,
{
    fn map(&self, f: &T, x: &S::Item) -> S::Item {
        (self.map)(f, x)
    }
}
