//! This crate provides type-erased callables as replacement for `Box<dyn Fn>`
//! that can store small callables inline without heap allocation.
//!
//! `TFn` is a type-erased callable that can store any `Clone` callable that implements `Send`, `Sync` and is `'static`.
//! `LTFn` is relaxed version of `TFn` that doesn't require `Send`, `Sync` bounds.
//! `TFnMut` and `LTFnMut` accept `FnMut` callables and invoke them through `&mut self`.
//!
//! Call signature is written as a function pointer type, e.g. `TFn<fn(i32, i32) -> i32>`.
//! Inline storage holds one native pointer, so function pointers and closures capturing
//! a single word are never boxed.
//!
//! ## Usage
//!
//! ```
//! use tfn::{EmptyCall, TFn};
//!
//! fn double(x: i32) -> i32 {
//!     x * 2
//! }
//!
//! // Function pointer fits inline storage, so no allocation is performed.
//! let f: TFn<fn(i32) -> i32> = TFn::new(double as fn(i32) -> i32);
//! assert_eq!(f.call(21), Ok(42));
//! assert!(!f.is_boxed());
//!
//! // Access the stored callable by its exact type.
//! assert!(f.target::<fn(i32) -> i32>().is_some());
//! assert!(f.target::<u32>().is_none());
//!
//! // Closure with larger captures is boxed.
//! let table = [1, 2, 3, 4];
//! let g: TFn<fn(usize) -> i32> = TFn::new(move |i: usize| table[i]);
//! assert!(g.is_boxed());
//!
//! // Copies are independent.
//! let h = g.clone();
//! drop(g);
//! assert_eq!(h.call(3), Ok(4));
//!
//! // Calling an empty wrapper is an error, not undefined behavior.
//! let empty: TFn<fn(i32) -> i32> = TFn::empty();
//! assert!(empty.is_empty());
//! assert_eq!(empty.call(1), Err(EmptyCall));
//! ```
//!
//! Moving out of a wrapper with `take` or `assign` always leaves the source empty.

#![no_std]

extern crate alloc;

mod descriptor;
mod error;
mod raw;
mod signature;
mod storage;
mod tfn;

pub use self::{
    error::EmptyCall,
    signature::{Callable, CallableMut, Signature},
    tfn::{LTFn, LTFnMut, TFn, TFnMut},
};
