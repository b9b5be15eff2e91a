/// Call signature of a function wrapper, named by a function pointer type.
///
/// `fn(A, B) -> R` describes callables taking `A` and `B` and returning `R`.
/// Arguments are passed to the erased callable packed into the [`Signature::Args`] tuple.
///
/// Implemented for function pointer types with up to 8 parameters.
/// Higher-ranked signatures, like `fn(&str) -> usize`, are not supported,
/// all parameter and result types must be `'static`.
pub trait Signature: 'static {
    /// Tuple of parameter types.
    type Args;

    /// Result type.
    type Output;
}

/// Value that can be invoked with signature `S`.
///
/// Implemented for every closure and function matching the signature.
/// Can be implemented for custom types to make them storable in [`LTFn`](crate::LTFn) and [`TFn`](crate::TFn).
///
/// # Example
///
/// ```
/// # use tfn::{Callable, LTFn};
/// #[derive(Clone)]
/// struct Scale {
///     factor: i32,
/// }
///
/// impl Callable<fn(i32) -> i32> for Scale {
///     fn call(&self, (x,): (i32,)) -> i32 {
///         x * self.factor
///     }
/// }
///
/// let f: LTFn<fn(i32) -> i32> = LTFn::new(Scale { factor: 3 });
/// assert_eq!(f.call(14), Ok(42));
/// ```
pub trait Callable<S: Signature> {
    /// Invokes the value with packed arguments.
    fn call(&self, args: S::Args) -> S::Output;
}

/// Value that can be invoked with signature `S` and may change its own state while doing so.
///
/// Implemented for every closure and function matching the signature, including `FnMut` closures.
/// Storable in [`LTFnMut`](crate::LTFnMut) and [`TFnMut`](crate::TFnMut), which are invoked through `&mut self`.
///
/// # Example
///
/// ```
/// # use tfn::LTFnMut;
/// let mut count = 0;
/// let mut f: LTFnMut<fn() -> i32> = LTFnMut::new(move || {
///     count += 1;
///     count
/// });
///
/// assert_eq!(f.call_mut(), Ok(1));
/// assert_eq!(f.call_mut(), Ok(2));
/// ```
pub trait CallableMut<S: Signature> {
    /// Invokes the value with packed arguments.
    fn call_mut(&mut self, args: S::Args) -> S::Output;
}

macro_rules! impl_signature {
    ($($arg:ident: $ty:ident),*) => {
        impl<R, $($ty),*> Signature for fn($($ty),*) -> R
        where
            R: 'static,
            $($ty: 'static,)*
        {
            type Args = ($($ty,)*);
            type Output = R;
        }

        impl<F, R, $($ty),*> Callable<fn($($ty),*) -> R> for F
        where
            F: Fn($($ty),*) -> R,
            R: 'static,
            $($ty: 'static,)*
        {
            #[inline(always)]
            fn call(&self, ($($arg,)*): ($($ty,)*)) -> R {
                self($($arg),*)
            }
        }

        impl<F, R, $($ty),*> CallableMut<fn($($ty),*) -> R> for F
        where
            F: FnMut($($ty),*) -> R,
            R: 'static,
            $($ty: 'static,)*
        {
            #[inline(always)]
            fn call_mut(&mut self, ($($arg,)*): ($($ty,)*)) -> R {
                self($($arg),*)
            }
        }
    };
}

impl_signature!();
impl_signature!(a: A);
impl_signature!(a: A, b: B);
impl_signature!(a: A, b: B, c: C);
impl_signature!(a: A, b: B, c: C, d: D);
impl_signature!(a: A, b: B, c: C, d: D, e: E);
impl_signature!(a: A, b: B, c: C, d: D, e: E, f: G);
impl_signature!(a: A, b: B, c: C, d: D, e: E, f: G, g: H);
impl_signature!(a: A, b: B, c: C, d: D, e: E, f: G, g: H, h: I);
