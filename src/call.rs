//! Item calling conventions.
//!
//! A user function is applied to a data item in one of two ways:
//!
//! - **whole**: `f(&item)`;
//! - **expanded**: the item is a tuple and its fields become positional
//!   arguments, `f(&item.0, &item.1, ...)`.
//!
//! The convention is picked by the function's own signature through the
//! [`ItemFn`] marker parameter, never by inspecting the item at runtime. A
//! tuple item meant as a single argument simply takes a one-argument function:
//!
//! ```
//! use daprs::{map, ExecOptions};
//!
//! let pairs = vec![(1, 2), (3, 4)];
//! let opts = ExecOptions::default();
//!
//! let sums = map(|a: &i32, b: &i32| a + b, &pairs, &opts).unwrap();
//! let firsts = map(|p: &(i32, i32)| p.0, &pairs, &opts).unwrap();
//!
//! assert_eq!(sums, vec![3, 7]);
//! assert_eq!(firsts, vec![1, 3]);
//! ```
//!
//! Fallibility is the second, orthogonal choice, expressed by an [`Outcome`]
//! marker: [`Plain`] functions cannot fail, [`Fallible`] functions return a
//! `Result` whose error aborts the batch.

use anyhow::Result;
use std::marker::PhantomData;

/// Runtime description of a calling convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallMode {
    Whole,
    Expand { arity: usize },
}

/// Type-level calling convention.
pub trait Convention {
    const MODE: CallMode;
}

/// Marker: the item is passed as a single argument.
pub struct Whole;

/// Marker: the tuple item `Args` is unpacked into positional arguments.
pub struct Expand<Args>(PhantomData<fn() -> Args>);

impl Convention for Whole {
    const MODE: CallMode = CallMode::Whole;
}

/// A function that can be applied to an item of type `T` under convention `M`.
///
/// Implemented for every `Fn(&T) -> O` (with `M = Whole`) and for every
/// `Fn(&A, &B, ...) -> O` applied to `(A, B, ...)` (with `M = Expand<(A, B, ...)>`),
/// up to eight fields.
pub trait ItemFn<T, M>: Send + Sync {
    type Output;

    fn apply(&self, item: &T) -> Self::Output;
}

impl<F, T, O> ItemFn<T, Whole> for F
where
    F: Fn(&T) -> O + Send + Sync,
{
    type Output = O;

    #[inline]
    fn apply(&self, item: &T) -> O {
        self(item)
    }
}

macro_rules! impl_expand {
    ($arity:literal; $($name:ident $idx:tt),+) => {
        impl<$($name),+> Convention for Expand<($($name,)+)> {
            const MODE: CallMode = CallMode::Expand { arity: $arity };
        }

        impl<F, O, $($name),+> ItemFn<($($name,)+), Expand<($($name,)+)>> for F
        where
            F: Fn($(&$name),+) -> O + Send + Sync,
        {
            type Output = O;

            #[inline]
            fn apply(&self, item: &($($name,)+)) -> O {
                self($(&item.$idx),+)
            }
        }
    };
}

impl_expand!(1; A 0);
impl_expand!(2; A 0, B 1);
impl_expand!(3; A 0, B 1, C 2);
impl_expand!(4; A 0, B 1, C 2, D 3);
impl_expand!(5; A 0, B 1, C 2, D 3, E 4);
impl_expand!(6; A 0, B 1, C 2, D 3, E 4, G 5);
impl_expand!(7; A 0, B 1, C 2, D 3, E 4, G 5, H 6);
impl_expand!(8; A 0, B 1, C 2, D 3, E 4, G 5, H 6, J 7);

/// How a function's raw return value becomes a task result.
pub trait Outcome<O> {
    type Value;

    fn lift(out: O) -> Result<Self::Value>;
}

/// Marker: the function returns its value directly.
pub struct Plain;

/// Marker: the function returns `Result<V, E>`; an `Err` fails the batch.
pub struct Fallible;

impl<O> Outcome<O> for Plain {
    type Value = O;

    #[inline]
    fn lift(out: O) -> Result<O> {
        Ok(out)
    }
}

impl<V, E> Outcome<Result<V, E>> for Fallible
where
    E: Into<anyhow::Error>,
{
    type Value = V;

    #[inline]
    fn lift(out: Result<V, E>) -> Result<V> {
        out.map_err(Into::into)
    }
}

/// Apply `f` to `item` under convention `M` and lift the result with `K`.
#[inline]
pub(crate) fn invoke<T, M, K, F>(f: &F, item: &T) -> Result<K::Value>
where
    F: ItemFn<T, M>,
    K: Outcome<F::Output>,
{
    K::lift(f.apply(item))
}

/// The [`CallMode`] a function would be applied with.
#[must_use]
pub fn call_mode_of<T, M, F>(_f: &F) -> CallMode
where
    F: ItemFn<T, M>,
    M: Convention,
{
    M::MODE
}
