use core::any::{type_name, TypeId};

use alloc::boxed::Box;

use crate::{
    error::EmptyCall,
    raw::RawFunction,
    signature::{Callable, CallableMut, Signature},
    storage::InlineStorage,
};

/// Type identity of the empty descriptor.
/// Private and uninhabited, so no payload can ever claim it.
enum Vacant {}

fn vacant_type_name() -> &'static str {
    "<empty>"
}

unsafe fn copy_vacant<S: Signature>(src: &RawFunction<S>, dest: &mut RawFunction<S>) {
    dest.descriptor = src.descriptor;
}

unsafe fn relocate_vacant<S: Signature>(src: &mut RawFunction<S>, dest: &mut RawFunction<S>) {
    dest.descriptor = src.descriptor;
}

unsafe fn invoke_vacant<S: Signature>(
    _src: &RawFunction<S>,
    _args: S::Args,
) -> Result<S::Output, EmptyCall> {
    tracing::debug!(signature = type_name::<S>(), "empty function invoked");
    Err(EmptyCall)
}

unsafe fn destroy_vacant<S: Signature>(_src: &mut RawFunction<S>) {}

// Slot functions are shared by both placements.
// `P` is whatever lives in the buffer: the payload itself or `Box` of it.

unsafe fn copy_slot<S: Signature, P: Clone>(src: &RawFunction<S>, dest: &mut RawFunction<S>) {
    // Safety: It was initialized as `P`.
    let value = unsafe { src.storage.as_ref::<P>().assume_init_ref() }.clone();

    // Destination is touched only after `clone` returned.
    dest.storage.as_mut::<P>().write(value);
    dest.descriptor = src.descriptor;
}

unsafe fn relocate_slot<S: Signature, P>(src: &mut RawFunction<S>, dest: &mut RawFunction<S>) {
    // Safety: It was initialized as `P`, source gives up ownership below.
    let value = unsafe { src.storage.as_ref::<P>().assume_init_read() };

    dest.storage.as_mut::<P>().write(value);
    dest.descriptor = src.descriptor;
    src.descriptor = Descriptor::empty();
}

unsafe fn destroy_slot<S: Signature, P>(src: &mut RawFunction<S>) {
    // Reset first, a panicking destructor must not be able to run twice.
    src.descriptor = Descriptor::empty();

    // Safety: It was initialized as `P`.
    unsafe {
        src.storage.as_mut::<P>().assume_init_drop();
    }
}

unsafe fn invoke_inlined<S: Signature, T: Callable<S>>(
    src: &RawFunction<S>,
    args: S::Args,
) -> Result<S::Output, EmptyCall> {
    // Safety: It was initialized as `T`.
    let payload: &T = unsafe { src.storage.as_ref::<T>().assume_init_ref() };
    Ok(<T as Callable<S>>::call(payload, args))
}

unsafe fn invoke_boxed<S: Signature, T: Callable<S>>(
    src: &RawFunction<S>,
    args: S::Args,
) -> Result<S::Output, EmptyCall> {
    // Safety: It was initialized as `Box<T>`.
    let payload: &T = &**unsafe { src.storage.as_ref::<Box<T>>().assume_init_ref() };
    Ok(<T as Callable<S>>::call(payload, args))
}

unsafe fn invoke_inlined_mut<S: Signature, T: CallableMut<S>>(
    src: &mut RawFunction<S>,
    args: S::Args,
) -> Result<S::Output, EmptyCall> {
    // Safety: It was initialized as `T`.
    let payload: &mut T = unsafe { src.storage.as_mut::<T>().assume_init_mut() };
    Ok(<T as CallableMut<S>>::call_mut(payload, args))
}

unsafe fn invoke_boxed_mut<S: Signature, T: CallableMut<S>>(
    src: &mut RawFunction<S>,
    args: S::Args,
) -> Result<S::Output, EmptyCall> {
    // Safety: It was initialized as `Box<T>`.
    let payload: &mut T = &mut **unsafe { src.storage.as_mut::<Box<T>>().assume_init_mut() };
    Ok(<T as CallableMut<S>>::call_mut(payload, args))
}

/// Exclusive access is enough for payloads callable through shared access.
unsafe fn invoke_shared_by_mut<S: Signature>(
    src: &mut RawFunction<S>,
    args: S::Args,
) -> Result<S::Output, EmptyCall> {
    // Safety: Forwarded from the caller.
    unsafe { (src.descriptor.invoke)(src, args) }
}

unsafe fn invoke_exclusive_by_ref<S: Signature>(
    _src: &RawFunction<S>,
    _args: S::Args,
) -> Result<S::Output, EmptyCall> {
    unreachable!("`FnMut` payloads are only invoked through exclusive access")
}

/// Operation table for one payload type under one signature.
///
/// Every storage holding the same payload type shares the same table.
/// Storage never inspects the payload type itself, it only calls through here.
pub(crate) struct Descriptor<S: Signature> {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    boxed: bool,

    /// Clones the payload of the first storage into the second, vacant, storage.
    pub copy: unsafe fn(&RawFunction<S>, &mut RawFunction<S>),

    /// Moves the payload of the first storage into the second, vacant, storage.
    /// The first storage is left empty.
    pub relocate: unsafe fn(&mut RawFunction<S>, &mut RawFunction<S>),

    /// Calls the payload through shared access, or fails with `EmptyCall` for the empty descriptor.
    /// Must not be used with descriptors built by [`Descriptor::of_mut`].
    pub invoke: unsafe fn(&RawFunction<S>, S::Args) -> Result<S::Output, EmptyCall>,

    /// Calls the payload through exclusive access, or fails with `EmptyCall` for the empty descriptor.
    pub invoke_mut: unsafe fn(&mut RawFunction<S>, S::Args) -> Result<S::Output, EmptyCall>,

    /// Drops the payload and leaves the storage empty.
    pub destroy: unsafe fn(&mut RawFunction<S>),
}

impl<S: Signature> Descriptor<S> {
    /// Returns the descriptor of the empty state.
    #[inline(always)]
    pub fn empty() -> &'static Self {
        &Descriptor {
            type_id: TypeId::of::<Vacant>,
            type_name: vacant_type_name,
            boxed: false,
            copy: copy_vacant::<S>,
            relocate: relocate_vacant::<S>,
            invoke: invoke_vacant::<S>,
            invoke_mut: invoke_shared_by_mut::<S>,
            destroy: destroy_vacant::<S>,
        }
    }

    /// Returns the descriptor for payload type `T`.
    /// Placement is decided here, it must agree with [`InlineStorage::fits`].
    #[inline(always)]
    pub fn of<T>() -> &'static Self
    where
        T: Callable<S> + Clone + 'static,
    {
        if InlineStorage::fits::<T>() {
            &Descriptor {
                type_id: TypeId::of::<T>,
                type_name: type_name::<T>,
                boxed: false,
                copy: copy_slot::<S, T>,
                relocate: relocate_slot::<S, T>,
                invoke: invoke_inlined::<S, T>,
                invoke_mut: invoke_shared_by_mut::<S>,
                destroy: destroy_slot::<S, T>,
            }
        } else {
            &Descriptor {
                type_id: TypeId::of::<T>,
                type_name: type_name::<T>,
                boxed: true,
                copy: copy_slot::<S, Box<T>>,
                relocate: relocate_slot::<S, Box<T>>,
                invoke: invoke_boxed::<S, T>,
                invoke_mut: invoke_shared_by_mut::<S>,
                destroy: destroy_slot::<S, Box<T>>,
            }
        }
    }

    /// Returns the descriptor for payload type `T` that may mutate itself when called.
    /// Storage holding it must never be invoked through shared access.
    #[inline(always)]
    pub fn of_mut<T>() -> &'static Self
    where
        T: CallableMut<S> + Clone + 'static,
    {
        if InlineStorage::fits::<T>() {
            &Descriptor {
                type_id: TypeId::of::<T>,
                type_name: type_name::<T>,
                boxed: false,
                copy: copy_slot::<S, T>,
                relocate: relocate_slot::<S, T>,
                invoke: invoke_exclusive_by_ref::<S>,
                invoke_mut: invoke_inlined_mut::<S, T>,
                destroy: destroy_slot::<S, T>,
            }
        } else {
            &Descriptor {
                type_id: TypeId::of::<T>,
                type_name: type_name::<T>,
                boxed: true,
                copy: copy_slot::<S, Box<T>>,
                relocate: relocate_slot::<S, Box<T>>,
                invoke: invoke_exclusive_by_ref::<S>,
                invoke_mut: invoke_boxed_mut::<S, T>,
                destroy: destroy_slot::<S, Box<T>>,
            }
        }
    }

    /// Returns `true` if this descriptor describes payload type `T`.
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        (self.type_id)() == TypeId::of::<T>()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is::<Vacant>()
    }

    #[inline]
    pub fn is_boxed(&self) -> bool {
        self.boxed
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }
}
