use core::{
    any::type_name,
    marker::PhantomData,
    mem::{align_of, size_of},
};

use alloc::boxed::Box;

use crate::{
    descriptor::Descriptor,
    error::EmptyCall,
    signature::{Callable, CallableMut, Signature},
    storage::InlineStorage,
};

/// Type-erased storage of one callable.
///
/// Inline buffer plus the descriptor that knows how to interpret it.
/// All payload manipulation is delegated to the descriptor.
pub(crate) struct RawFunction<S: Signature> {
    pub descriptor: &'static Descriptor<S>,
    pub storage: InlineStorage,
    unsend: PhantomData<*mut u8>,
}

impl<S: Signature> Drop for RawFunction<S> {
    #[inline(always)]
    fn drop(&mut self) {
        unsafe {
            (self.descriptor.destroy)(self);
        }
    }
}

impl<S: Signature> Clone for RawFunction<S> {
    #[inline]
    fn clone(&self) -> Self {
        let mut dest = RawFunction::new();

        // Safety: `dest` is vacant and `self.descriptor` matches `self.storage`.
        unsafe {
            (self.descriptor.copy)(self, &mut dest);
        }
        dest
    }
}

impl<S: Signature> RawFunction<S> {
    #[inline(always)]
    pub fn new() -> Self {
        RawFunction {
            descriptor: Descriptor::empty(),
            storage: InlineStorage::new(),
            unsend: PhantomData,
        }
    }

    #[inline]
    pub fn from_value<T>(value: T) -> Self
    where
        T: Callable<S> + Clone + 'static,
    {
        Self::store(value, Descriptor::of::<T>())
    }

    /// Same as [`RawFunction::from_value`], but the payload may only be invoked through [`RawFunction::invoke_mut`].
    #[inline]
    pub fn from_value_mut<T>(value: T) -> Self
    where
        T: CallableMut<S> + Clone + 'static,
    {
        Self::store(value, Descriptor::of_mut::<T>())
    }

    #[inline]
    pub fn from_box<T>(boxed: Box<T>) -> Self
    where
        T: Callable<S> + Clone + 'static,
    {
        Self::store_box(boxed, Descriptor::of::<T>())
    }

    #[inline]
    pub fn from_box_mut<T>(boxed: Box<T>) -> Self
    where
        T: CallableMut<S> + Clone + 'static,
    {
        Self::store_box(boxed, Descriptor::of_mut::<T>())
    }

    /// `descriptor` must be the descriptor of `T`.
    #[inline(always)]
    fn store<T: 'static>(value: T, descriptor: &'static Descriptor<S>) -> Self {
        let mut storage = InlineStorage::new();

        if InlineStorage::fits::<T>() {
            storage.as_mut::<T>().write(value);
        } else {
            tracing::trace!(
                payload = type_name::<T>(),
                size = size_of::<T>(),
                align = align_of::<T>(),
                "payload exceeds inline storage, boxing"
            );
            storage.as_mut::<Box<T>>().write(Box::new(value));
        }

        RawFunction {
            descriptor,
            storage,
            unsend: PhantomData,
        }
    }

    /// `descriptor` must be the descriptor of `T`.
    #[inline(always)]
    fn store_box<T: 'static>(boxed: Box<T>, descriptor: &'static Descriptor<S>) -> Self {
        let mut storage = InlineStorage::new();

        if InlineStorage::fits::<T>() {
            storage.as_mut::<T>().write(*boxed);
        } else {
            storage.as_mut::<Box<T>>().write(boxed);
        }

        RawFunction {
            descriptor,
            storage,
            unsend: PhantomData,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.descriptor.is_empty()
    }

    #[inline(always)]
    pub fn is_boxed(&self) -> bool {
        self.descriptor.is_boxed()
    }

    #[inline]
    pub fn type_name(&self) -> Option<&'static str> {
        if self.is_empty() {
            None
        } else {
            Some(self.descriptor.type_name())
        }
    }

    #[inline(always)]
    pub fn is<T: 'static>(&self) -> bool {
        self.descriptor.is::<T>()
    }

    /// Must not be called on storage built with `from_value_mut` or `from_box_mut`.
    #[inline(always)]
    pub fn invoke(&self, args: S::Args) -> Result<S::Output, EmptyCall> {
        // Safety: `self.descriptor` matches `self.storage`.
        unsafe { (self.descriptor.invoke)(self, args) }
    }

    #[inline(always)]
    pub fn invoke_mut(&mut self, args: S::Args) -> Result<S::Output, EmptyCall> {
        // Safety: `self.descriptor` matches `self.storage`.
        unsafe { (self.descriptor.invoke_mut)(self, args) }
    }

    /// Moves the payload out into a new storage, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        let mut dest = RawFunction::new();

        // Safety: `dest` is vacant and `self.descriptor` matches `self.storage`.
        unsafe {
            (self.descriptor.relocate)(self, &mut dest);
        }
        dest
    }

    /// Moves the payload of `self` into `dest`, destroying the previous payload of `dest`.
    #[inline]
    pub fn relocate_into(&mut self, dest: &mut Self) {
        dest.reset();

        // Safety: `dest` is vacant now and `self.descriptor` matches `self.storage`.
        unsafe {
            (self.descriptor.relocate)(self, dest);
        }
    }

    /// Swaps payloads of two storages through a temporary holder.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        let mut temp = self.take();
        other.relocate_into(self);
        temp.relocate_into(other);
    }

    #[inline(always)]
    pub fn reset(&mut self) {
        // Safety: `self.descriptor` matches `self.storage`.
        unsafe {
            (self.descriptor.destroy)(self);
        }
    }

    #[inline]
    pub fn target<T: 'static>(&self) -> Option<&T> {
        if !self.is::<T>() {
            return None;
        }

        let payload = if InlineStorage::fits::<T>() {
            // Safety: It was initialized as `T`.
            unsafe { self.storage.as_ref::<T>().assume_init_ref() }
        } else {
            // Safety: It was initialized as `Box<T>`.
            &**unsafe { self.storage.as_ref::<Box<T>>().assume_init_ref() }
        };
        Some(payload)
    }

    #[inline]
    pub fn target_mut<T: 'static>(&mut self) -> Option<&mut T> {
        if !self.is::<T>() {
            return None;
        }

        let payload = if InlineStorage::fits::<T>() {
            // Safety: It was initialized as `T`.
            unsafe { self.storage.as_mut::<T>().assume_init_mut() }
        } else {
            // Safety: It was initialized as `Box<T>`.
            &mut **unsafe { self.storage.as_mut::<Box<T>>().assume_init_mut() }
        };
        Some(payload)
    }

    /// Returns the payload if it is of type `T`, unboxing it if needed.
    /// Otherwise returns self back.
    #[inline]
    pub fn downcast<T: 'static>(mut self) -> Result<T, Self> {
        if !self.is::<T>() {
            return Err(self);
        }

        let value = if InlineStorage::fits::<T>() {
            // Safety: It was initialized as `T`, ownership is given up below.
            unsafe { self.storage.as_ref::<T>().assume_init_read() }
        } else {
            // Safety: It was initialized as `Box<T>`, ownership is given up below.
            *unsafe { self.storage.as_ref::<Box<T>>().assume_init_read() }
        };

        // Value was read out, nothing is left to drop.
        self.descriptor = Descriptor::empty();
        Ok(value)
    }
}
