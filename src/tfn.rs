use core::fmt;

use alloc::boxed::Box;

use crate::{
    error::EmptyCall,
    raw::RawFunction,
    signature::{Callable, CallableMut, Signature},
    storage::InlineStorage,
};

/// Type-erased callable with fixed-size inlined storage.
/// Callables that fit in the storage are stored without allocation.
/// Callables that are too large are boxed.
/// Stored callables may not implement `Send` and `Sync`.
/// For thread-safe version see [`TFn`].
///
/// `S` is the call signature, written as a function pointer type.
pub struct LTFn<S: Signature> {
    raw: RawFunction<S>,
}

impl<S: Signature> Default for LTFn<S> {
    #[inline(always)]
    fn default() -> Self {
        LTFn::empty()
    }
}

impl<S: Signature> Clone for LTFn<S> {
    #[inline]
    fn clone(&self) -> Self {
        LTFn {
            raw: self.raw.clone(),
        }
    }

    /// Clones `source` into a temporary first, then swaps it in.
    /// If cloning the callable panics, `self` is left untouched.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        let mut safe = source.clone();
        self.swap(&mut safe);
    }
}

impl<S: Signature> fmt::Debug for LTFn<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LTFn")
            .field("payload", &self.type_name())
            .field("boxed", &self.is_boxed())
            .finish()
    }
}

impl<S: Signature> LTFn<S> {
    /// Returns `true` if the callable type `T` fits and can be stored without allocation.
    /// If `true`, then `LTFn::new::<T>` is guaranteed to not allocate.
    ///
    /// # Example
    ///
    /// ```
    /// # use tfn::LTFn;
    /// assert!(LTFn::<fn(u32) -> u32>::fits::<fn(u32) -> u32>());
    /// assert!(!LTFn::<fn(u32) -> u32>::fits::<[u64; 4]>());
    /// ```
    pub const fn fits<T>() -> bool {
        InlineStorage::fits::<T>()
    }

    /// Construct new empty [`LTFn`].
    /// Calling it returns [`EmptyCall`] error.
    #[inline(always)]
    pub fn empty() -> Self {
        LTFn {
            raw: RawFunction::new(),
        }
    }

    /// Construct new [`LTFn`] with the given callable.
    ///
    /// If the type `T` fits in the storage, it is stored without allocation.
    /// Otherwise, it will be boxed.
    ///
    /// Type of callable may not implement `Send` or `Sync`.
    /// But [`LTFn`] itself does not implement `Send` and `Sync`.
    /// For `Send` and `Sync` container see [`TFn`].
    ///
    /// # Example
    ///
    /// ```
    /// # use tfn::LTFn;
    /// let f: LTFn<fn(i32) -> i32> = LTFn::new(|x: i32| x * 2);
    ///
    /// assert_eq!(f.call(21), Ok(42));
    /// ```
    #[inline]
    pub fn new<T>(callable: T) -> Self
    where
        T: Callable<S> + Clone + 'static,
    {
        LTFn {
            raw: RawFunction::from_value(callable),
        }
    }

    /// Construct new [`LTFn`] from the given boxed callable.
    ///
    /// If type fits in the storage, callable will be unboxed.
    /// Otherwise it will be stored as boxed, but no allocation will be performed.
    #[inline]
    pub fn from_box<T>(boxed: Box<T>) -> Self
    where
        T: Callable<S> + Clone + 'static,
    {
        LTFn {
            raw: RawFunction::from_box(boxed),
        }
    }

    /// Returns `true` if no callable is stored.
    ///
    /// # Example
    ///
    /// ```
    /// # use tfn::LTFn;
    /// let mut f: LTFn<fn() -> u8> = LTFn::empty();
    /// assert!(f.is_empty());
    ///
    /// f = LTFn::new(|| 7u8);
    /// assert!(!f.is_empty());
    /// ```
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns `true` if the stored callable lives on the heap.
    /// Empty wrapper is never boxed.
    #[inline(always)]
    pub fn is_boxed(&self) -> bool {
        self.raw.is_boxed()
    }

    /// Returns the type name of the stored callable, if any.
    /// Intended for diagnostics only, the exact format is unspecified.
    #[inline]
    pub fn type_name(&self) -> Option<&'static str> {
        self.raw.type_name()
    }

    /// Returns `true` if the stored callable is of type `T`.
    #[inline]
    pub fn is<T>(&self) -> bool
    where
        T: 'static,
    {
        self.raw.is::<T>()
    }

    /// Invokes the stored callable with packed arguments.
    ///
    /// Returns [`EmptyCall`] error if nothing is stored.
    /// Per-arity `call` methods accept unpacked arguments.
    ///
    /// # Example
    ///
    /// ```
    /// # use tfn::LTFn;
    /// let f: LTFn<fn(i32, i32) -> i32> = LTFn::new(|a: i32, b: i32| a - b);
    ///
    /// assert_eq!(f.invoke((50, 8)), Ok(42));
    /// ```
    #[inline(always)]
    pub fn invoke(&self, args: S::Args) -> Result<S::Output, EmptyCall> {
        self.raw.invoke(args)
    }

    /// Invokes the stored callable with packed arguments through exclusive access.
    /// Same as [`LTFn::invoke`], provided so all wrappers share one call path.
    #[inline(always)]
    pub fn invoke_mut(&mut self, args: S::Args) -> Result<S::Output, EmptyCall> {
        self.raw.invoke_mut(args)
    }

    /// Returns some reference to the stored callable if it is of type `T`.
    /// Otherwise returns none.
    ///
    /// # Example
    ///
    /// ```
    /// # use tfn::LTFn;
    /// fn double(x: u32) -> u32 {
    ///     x * 2
    /// }
    ///
    /// let f: LTFn<fn(u32) -> u32> = LTFn::new(double as fn(u32) -> u32);
    ///
    /// assert!(f.target::<fn(u32) -> u32>().is_some());
    /// assert!(f.target::<u32>().is_none());
    /// ```
    #[inline]
    pub fn target<T>(&self) -> Option<&T>
    where
        T: 'static,
    {
        self.raw.target()
    }

    /// Returns some mutable reference to the stored callable if it is of type `T`.
    /// Otherwise returns none.
    #[inline]
    pub fn target_mut<T>(&mut self) -> Option<&mut T>
    where
        T: 'static,
    {
        self.raw.target_mut()
    }

    /// Returns the stored callable if it is of type `T`.
    /// Otherwise return self back.
    ///
    /// This will unbox the callable if it was stored as boxed.
    #[inline]
    pub fn downcast<T>(self) -> Result<T, LTFn<S>>
    where
        T: 'static,
    {
        self.raw.downcast().map_err(|raw| LTFn { raw })
    }

    /// Exchanges stored callables of two wrappers.
    ///
    /// Each callable is relocated through a temporary by its own descriptor.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.raw.swap(&mut other.raw);
    }

    /// Moves the stored callable out, leaving `self` empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use tfn::{EmptyCall, LTFn};
    /// let mut f: LTFn<fn() -> u8> = LTFn::new(|| 7u8);
    /// let g = f.take();
    ///
    /// assert_eq!(g.call(), Ok(7));
    /// assert_eq!(f.call(), Err(EmptyCall));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        LTFn {
            raw: self.raw.take(),
        }
    }

    /// Moves the callable of `other` into `self`, leaving `other` empty.
    /// Previous callable of `self` is dropped.
    #[inline]
    pub fn assign(&mut self, other: &mut Self) {
        let mut safe = other.take();
        self.swap(&mut safe);
    }

    /// Stores a new callable and returns the wrapper with the previous one.
    #[inline]
    pub fn replace<T>(&mut self, callable: T) -> Self
    where
        T: Callable<S> + Clone + 'static,
    {
        let mut previous = LTFn::new(callable);
        self.swap(&mut previous);
        previous
    }

    /// Drops the stored callable, leaving `self` empty.
    #[inline(always)]
    pub fn reset(&mut self) {
        self.raw.reset();
    }
}

/// Type-erased callable with fixed-size inlined storage.
/// Callables that fit in the storage are stored without allocation.
/// Callables that are too large are boxed.
/// Requires `Send` and `Sync`.
/// For thread-local version see [`LTFn`].
pub struct TFn<S: Signature> {
    inner: LTFn<S>,
}

// Only `Send + Sync` callables can get in, and they are invoked through `&self`.
unsafe impl<S: Signature> Send for TFn<S> {}
unsafe impl<S: Signature> Sync for TFn<S> {}

impl<S: Signature> From<TFn<S>> for LTFn<S> {
    #[inline(always)]
    fn from(value: TFn<S>) -> Self {
        value.inner
    }
}

impl<S: Signature> Default for TFn<S> {
    #[inline(always)]
    fn default() -> Self {
        TFn::empty()
    }
}

impl<S: Signature> Clone for TFn<S> {
    #[inline]
    fn clone(&self) -> Self {
        TFn {
            inner: self.inner.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.inner.clone_from(&source.inner);
    }
}

impl<S: Signature> fmt::Debug for TFn<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TFn")
            .field("payload", &self.type_name())
            .field("boxed", &self.is_boxed())
            .finish()
    }
}

impl<S: Signature> TFn<S> {
    /// Returns `true` if the callable type `T` fits and can be stored without allocation.
    /// If `true`, then `TFn::new::<T>` is guaranteed to not allocate.
    pub const fn fits<T>() -> bool {
        InlineStorage::fits::<T>()
    }

    /// Construct new empty [`TFn`].
    #[inline(always)]
    pub fn empty() -> Self {
        TFn {
            inner: LTFn::empty(),
        }
    }

    /// Construct new [`TFn`] with the given callable.
    ///
    /// If the type `T` fits in the storage, it is stored without allocation.
    /// Otherwise, it will be boxed.
    ///
    /// Type of callable must implement both `Send` and `Sync`.
    /// And [`TFn`] itself implement `Send` and `Sync`.
    /// For callables that do not implement `Send` or `Sync`, use [`LTFn`].
    ///
    /// # Example
    ///
    /// ```
    /// # use tfn::TFn;
    /// let offset = 40;
    /// let f: TFn<fn(i32) -> i32> = TFn::new(move |x: i32| x + offset);
    ///
    /// let handle = std::thread::spawn(move || f.call(2));
    /// assert_eq!(handle.join().unwrap(), Ok(42));
    /// ```
    #[inline]
    pub fn new<T>(callable: T) -> Self
    where
        T: Callable<S> + Clone + Send + Sync + 'static,
    {
        TFn {
            inner: LTFn::new(callable),
        }
    }

    /// Construct new [`TFn`] from the given boxed callable.
    ///
    /// If type fits in the storage, callable will be unboxed.
    /// Otherwise it will be stored as boxed, but no allocation will be performed.
    #[inline]
    pub fn from_box<T>(boxed: Box<T>) -> Self
    where
        T: Callable<S> + Clone + Send + Sync + 'static,
    {
        TFn {
            inner: LTFn::from_box(boxed),
        }
    }

    /// Returns `true` if no callable is stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the stored callable lives on the heap.
    /// Empty wrapper is never boxed.
    #[inline(always)]
    pub fn is_boxed(&self) -> bool {
        self.inner.is_boxed()
    }

    /// Returns the type name of the stored callable, if any.
    #[inline]
    pub fn type_name(&self) -> Option<&'static str> {
        self.inner.type_name()
    }

    /// Returns `true` if the stored callable is of type `T`.
    ///
    /// # Example
    ///
    /// ```
    /// # use tfn::TFn;
    /// fn seven() -> u8 {
    ///     7
    /// }
    ///
    /// let f: TFn<fn() -> u8> = TFn::new(seven as fn() -> u8);
    ///
    /// assert!(f.is::<fn() -> u8>());
    /// assert!(!f.is::<u8>());
    /// ```
    #[inline]
    pub fn is<T>(&self) -> bool
    where
        T: 'static,
    {
        self.inner.is::<T>()
    }

    /// Invokes the stored callable with packed arguments.
    ///
    /// Returns [`EmptyCall`] error if nothing is stored.
    #[inline(always)]
    pub fn invoke(&self, args: S::Args) -> Result<S::Output, EmptyCall> {
        self.inner.invoke(args)
    }

    /// Invokes the stored callable with packed arguments through exclusive access.
    #[inline(always)]
    pub fn invoke_mut(&mut self, args: S::Args) -> Result<S::Output, EmptyCall> {
        self.inner.invoke_mut(args)
    }

    /// Returns some reference to the stored callable if it is of type `T`.
    /// Otherwise returns none.
    #[inline]
    pub fn target<T>(&self) -> Option<&T>
    where
        T: 'static,
    {
        self.inner.target()
    }

    /// Returns some mutable reference to the stored callable if it is of type `T`.
    /// Otherwise returns none.
    #[inline]
    pub fn target_mut<T>(&mut self) -> Option<&mut T>
    where
        T: 'static,
    {
        self.inner.target_mut()
    }

    /// Returns the stored callable if it is of type `T`.
    /// Otherwise return self back.
    ///
    /// # Example
    ///
    /// ```
    /// # use tfn::TFn;
    /// fn double(x: u32) -> u32 {
    ///     x * 2
    /// }
    ///
    /// let f: TFn<fn(u32) -> u32> = TFn::new(double as fn(u32) -> u32);
    /// let f = f.downcast::<u32>().unwrap_err();
    /// let double = f.downcast::<fn(u32) -> u32>().unwrap();
    ///
    /// assert_eq!(double(21), 42);
    /// ```
    #[inline]
    pub fn downcast<T>(self) -> Result<T, TFn<S>>
    where
        T: 'static,
    {
        self.inner.downcast().map_err(|inner| TFn { inner })
    }

    /// Exchanges stored callables of two wrappers.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.inner.swap(&mut other.inner);
    }

    /// Moves the stored callable out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        TFn {
            inner: self.inner.take(),
        }
    }

    /// Moves the callable of `other` into `self`, leaving `other` empty.
    /// Previous callable of `self` is dropped.
    #[inline]
    pub fn assign(&mut self, other: &mut Self) {
        self.inner.assign(&mut other.inner);
    }

    /// Stores a new callable and returns the wrapper with the previous one.
    #[inline]
    pub fn replace<T>(&mut self, callable: T) -> Self
    where
        T: Callable<S> + Clone + Send + Sync + 'static,
    {
        TFn {
            inner: self.inner.replace(callable),
        }
    }

    /// Drops the stored callable, leaving `self` empty.
    #[inline(always)]
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Type-erased callable that may change its own state when called.
///
/// Same storage as [`LTFn`], but accepts `FnMut` closures and other [`CallableMut`] types.
/// The stored callable is invoked only through `&mut self`.
/// Stored callables may not implement `Send` and `Sync`.
/// For thread-safe version see [`TFnMut`].
///
/// # Example
///
/// ```
/// # use tfn::LTFnMut;
/// let mut total = 0;
/// let mut f: LTFnMut<fn(i32) -> i32> = LTFnMut::new(move |x: i32| {
///     total += x;
///     total
/// });
///
/// assert_eq!(f.call_mut(40), Ok(40));
/// assert_eq!(f.call_mut(2), Ok(42));
/// ```
pub struct LTFnMut<S: Signature> {
    raw: RawFunction<S>,
}

// Callables invocable through `&self` are invocable through `&mut self` as well.
impl<S: Signature> From<LTFn<S>> for LTFnMut<S> {
    #[inline(always)]
    fn from(value: LTFn<S>) -> Self {
        LTFnMut { raw: value.raw }
    }
}

impl<S: Signature> Default for LTFnMut<S> {
    #[inline(always)]
    fn default() -> Self {
        LTFnMut::empty()
    }
}

impl<S: Signature> Clone for LTFnMut<S> {
    /// Clones the stored callable together with its current state.
    #[inline]
    fn clone(&self) -> Self {
        LTFnMut {
            raw: self.raw.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        let mut safe = source.clone();
        self.swap(&mut safe);
    }
}

impl<S: Signature> fmt::Debug for LTFnMut<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LTFnMut")
            .field("payload", &self.type_name())
            .field("boxed", &self.is_boxed())
            .finish()
    }
}

impl<S: Signature> LTFnMut<S> {
    /// Returns `true` if the callable type `T` fits and can be stored without allocation.
    pub const fn fits<T>() -> bool {
        InlineStorage::fits::<T>()
    }

    /// Construct new empty [`LTFnMut`].
    /// Calling it returns [`EmptyCall`] error.
    #[inline(always)]
    pub fn empty() -> Self {
        LTFnMut {
            raw: RawFunction::new(),
        }
    }

    /// Construct new [`LTFnMut`] with the given callable.
    ///
    /// If the type `T` fits in the storage, it is stored without allocation.
    /// Otherwise, it will be boxed.
    #[inline]
    pub fn new<T>(callable: T) -> Self
    where
        T: CallableMut<S> + Clone + 'static,
    {
        LTFnMut {
            raw: RawFunction::from_value_mut(callable),
        }
    }

    /// Construct new [`LTFnMut`] from the given boxed callable.
    /// If type fits in the storage, callable will be unboxed.
    #[inline]
    pub fn from_box<T>(boxed: Box<T>) -> Self
    where
        T: CallableMut<S> + Clone + 'static,
    {
        LTFnMut {
            raw: RawFunction::from_box_mut(boxed),
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[inline(always)]
    pub fn is_boxed(&self) -> bool {
        self.raw.is_boxed()
    }

    #[inline]
    pub fn type_name(&self) -> Option<&'static str> {
        self.raw.type_name()
    }

    /// Returns `true` if the stored callable is of type `T`.
    #[inline]
    pub fn is<T>(&self) -> bool
    where
        T: 'static,
    {
        self.raw.is::<T>()
    }

    /// Invokes the stored callable with packed arguments.
    ///
    /// Returns [`EmptyCall`] error if nothing is stored.
    #[inline(always)]
    pub fn invoke_mut(&mut self, args: S::Args) -> Result<S::Output, EmptyCall> {
        self.raw.invoke_mut(args)
    }

    /// Returns some reference to the stored callable if it is of type `T`.
    #[inline]
    pub fn target<T>(&self) -> Option<&T>
    where
        T: 'static,
    {
        self.raw.target()
    }

    /// Returns some mutable reference to the stored callable if it is of type `T`.
    #[inline]
    pub fn target_mut<T>(&mut self) -> Option<&mut T>
    where
        T: 'static,
    {
        self.raw.target_mut()
    }

    /// Returns the stored callable with its current state if it is of type `T`.
    /// Otherwise return self back.
    #[inline]
    pub fn downcast<T>(self) -> Result<T, LTFnMut<S>>
    where
        T: 'static,
    {
        self.raw.downcast().map_err(|raw| LTFnMut { raw })
    }

    /// Exchanges stored callables of two wrappers.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.raw.swap(&mut other.raw);
    }

    /// Moves the stored callable out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        LTFnMut {
            raw: self.raw.take(),
        }
    }

    /// Moves the callable of `other` into `self`, leaving `other` empty.
    #[inline]
    pub fn assign(&mut self, other: &mut Self) {
        let mut safe = other.take();
        self.swap(&mut safe);
    }

    /// Stores a new callable and returns the wrapper with the previous one.
    #[inline]
    pub fn replace<T>(&mut self, callable: T) -> Self
    where
        T: CallableMut<S> + Clone + 'static,
    {
        let mut previous = LTFnMut::new(callable);
        self.swap(&mut previous);
        previous
    }

    /// Drops the stored callable, leaving `self` empty.
    #[inline(always)]
    pub fn reset(&mut self) {
        self.raw.reset();
    }
}

/// Type-erased callable that may change its own state when called.
/// Requires `Send` and `Sync`.
/// For thread-local version see [`LTFnMut`].
///
/// # Example
///
/// ```
/// # use tfn::TFnMut;
/// let mut calls = 0u32;
/// let mut f: TFnMut<fn() -> u32> = TFnMut::new(move || {
///     calls += 1;
///     calls
/// });
///
/// let handle = std::thread::spawn(move || (f.call_mut(), f.call_mut()));
/// assert_eq!(handle.join().unwrap(), (Ok(1), Ok(2)));
/// ```
pub struct TFnMut<S: Signature> {
    inner: LTFnMut<S>,
}

// Only `Send + Sync` callables can get in, and shared access never invokes them.
unsafe impl<S: Signature> Send for TFnMut<S> {}
unsafe impl<S: Signature> Sync for TFnMut<S> {}

impl<S: Signature> From<TFnMut<S>> for LTFnMut<S> {
    #[inline(always)]
    fn from(value: TFnMut<S>) -> Self {
        value.inner
    }
}

impl<S: Signature> From<TFn<S>> for TFnMut<S> {
    #[inline(always)]
    fn from(value: TFn<S>) -> Self {
        TFnMut {
            inner: LTFnMut::from(value.inner),
        }
    }
}

impl<S: Signature> Default for TFnMut<S> {
    #[inline(always)]
    fn default() -> Self {
        TFnMut::empty()
    }
}

impl<S: Signature> Clone for TFnMut<S> {
    #[inline]
    fn clone(&self) -> Self {
        TFnMut {
            inner: self.inner.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.inner.clone_from(&source.inner);
    }
}

impl<S: Signature> fmt::Debug for TFnMut<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TFnMut")
            .field("payload", &self.type_name())
            .field("boxed", &self.is_boxed())
            .finish()
    }
}

impl<S: Signature> TFnMut<S> {
    /// Returns `true` if the callable type `T` fits and can be stored without allocation.
    pub const fn fits<T>() -> bool {
        InlineStorage::fits::<T>()
    }

    /// Construct new empty [`TFnMut`].
    #[inline(always)]
    pub fn empty() -> Self {
        TFnMut {
            inner: LTFnMut::empty(),
        }
    }

    /// Construct new [`TFnMut`] with the given callable.
    ///
    /// Type of callable must implement both `Send` and `Sync`.
    #[inline]
    pub fn new<T>(callable: T) -> Self
    where
        T: CallableMut<S> + Clone + Send + Sync + 'static,
    {
        TFnMut {
            inner: LTFnMut::new(callable),
        }
    }

    /// Construct new [`TFnMut`] from the given boxed callable.
    #[inline]
    pub fn from_box<T>(boxed: Box<T>) -> Self
    where
        T: CallableMut<S> + Clone + Send + Sync + 'static,
    {
        TFnMut {
            inner: LTFnMut::from_box(boxed),
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline(always)]
    pub fn is_boxed(&self) -> bool {
        self.inner.is_boxed()
    }

    #[inline]
    pub fn type_name(&self) -> Option<&'static str> {
        self.inner.type_name()
    }

    /// Returns `true` if the stored callable is of type `T`.
    #[inline]
    pub fn is<T>(&self) -> bool
    where
        T: 'static,
    {
        self.inner.is::<T>()
    }

    /// Invokes the stored callable with packed arguments.
    ///
    /// Returns [`EmptyCall`] error if nothing is stored.
    #[inline(always)]
    pub fn invoke_mut(&mut self, args: S::Args) -> Result<S::Output, EmptyCall> {
        self.inner.invoke_mut(args)
    }

    /// Returns some reference to the stored callable if it is of type `T`.
    #[inline]
    pub fn target<T>(&self) -> Option<&T>
    where
        T: 'static,
    {
        self.inner.target()
    }

    /// Returns some mutable reference to the stored callable if it is of type `T`.
    #[inline]
    pub fn target_mut<T>(&mut self) -> Option<&mut T>
    where
        T: 'static,
    {
        self.inner.target_mut()
    }

    /// Returns the stored callable if it is of type `T`.
    /// Otherwise return self back.
    #[inline]
    pub fn downcast<T>(self) -> Result<T, TFnMut<S>>
    where
        T: 'static,
    {
        self.inner.downcast().map_err(|inner| TFnMut { inner })
    }

    /// Exchanges stored callables of two wrappers.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.inner.swap(&mut other.inner);
    }

    /// Moves the stored callable out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        TFnMut {
            inner: self.inner.take(),
        }
    }

    /// Moves the callable of `other` into `self`, leaving `other` empty.
    #[inline]
    pub fn assign(&mut self, other: &mut Self) {
        self.inner.assign(&mut other.inner);
    }

    /// Stores a new callable and returns the wrapper with the previous one.
    #[inline]
    pub fn replace<T>(&mut self, callable: T) -> Self
    where
        T: CallableMut<S> + Clone + Send + Sync + 'static,
    {
        TFnMut {
            inner: self.inner.replace(callable),
        }
    }

    /// Drops the stored callable, leaving `self` empty.
    #[inline(always)]
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

macro_rules! impl_call {
    (@mut $wrapper:ident; $($arg:ident: $ty:ident),*) => {
        impl<R, $($ty),*> $wrapper<fn($($ty),*) -> R>
        where
            R: 'static,
            $($ty: 'static,)*
        {
            /// Invokes the stored callable through exclusive access.
            ///
            /// Returns [`EmptyCall`] error if nothing is stored.
            #[inline(always)]
            pub fn call_mut(&mut self, $($arg: $ty),*) -> Result<R, EmptyCall> {
                self.invoke_mut(($($arg,)*))
            }
        }
    };
    ($($arg:ident: $ty:ident),*) => {
        impl<R, $($ty),*> LTFn<fn($($ty),*) -> R>
        where
            R: 'static,
            $($ty: 'static,)*
        {
            /// Invokes the stored callable.
            ///
            /// Returns [`EmptyCall`] error if nothing is stored.
            #[inline(always)]
            pub fn call(&self, $($arg: $ty),*) -> Result<R, EmptyCall> {
                self.invoke(($($arg,)*))
            }
        }

        impl<R, $($ty),*> TFn<fn($($ty),*) -> R>
        where
            R: 'static,
            $($ty: 'static,)*
        {
            /// Invokes the stored callable.
            ///
            /// Returns [`EmptyCall`] error if nothing is stored.
            #[inline(always)]
            pub fn call(&self, $($arg: $ty),*) -> Result<R, EmptyCall> {
                self.invoke(($($arg,)*))
            }
        }

        impl_call!(@mut LTFn; $($arg: $ty),*);
        impl_call!(@mut TFn; $($arg: $ty),*);
        impl_call!(@mut LTFnMut; $($arg: $ty),*);
        impl_call!(@mut TFnMut; $($arg: $ty),*);
    };
}

impl_call!();
impl_call!(a: A);
impl_call!(a: A, b: B);
impl_call!(a: A, b: B, c: C);
impl_call!(a: A, b: B, c: C, d: D);
impl_call!(a: A, b: B, c: C, d: D, e: E);
impl_call!(a: A, b: B, c: C, d: D, e: E, f: F);
impl_call!(a: A, b: B, c: C, d: D, e: E, f: F, g: G);
impl_call!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);
