use core::mem::{align_of, size_of, MaybeUninit};

const INLINE_STORAGE_SIZE: usize = size_of::<*mut ()>();
const INLINE_STORAGE_ALIGN: usize = align_of::<*mut ()>();

/// Storage type that can hold any value not larger than one native pointer
/// whose alignment divides the alignment of a pointer.
#[repr(C)]
#[derive(Clone, Copy)]
pub(crate) struct InlineStorage {
    pub storage: MaybeUninit<*mut ()>,
}

impl InlineStorage {
    /// Construct new storage without initializing any value in it.
    pub const fn new() -> Self {
        InlineStorage {
            storage: MaybeUninit::uninit(),
        }
    }

    /// Returns `true` if the type `T` fits into the storage.
    pub const fn fits<T>() -> bool {
        size_of::<T>() <= INLINE_STORAGE_SIZE && INLINE_STORAGE_ALIGN % align_of::<T>() == 0
    }

    /// Returns reference to the potentially uninitialized value.
    /// Type must fit into the storage, see [`InlineStorage::fits`].
    ///
    /// The caller is responsible to ensure that the type is correct and the value is initialized before accessing it.
    pub fn as_ref<T>(&self) -> &MaybeUninit<T> {
        // Not const, descriptor functions for boxed payloads still instantiate the inline path.
        assert!(Self::fits::<T>());

        // Safety: This cast is safe due to the size and alignment constraints.
        unsafe { &*self.storage.as_ptr().cast() }
    }

    /// Returns mutable reference to the potentially uninitialized value.
    /// Type must fit into the storage, see [`InlineStorage::fits`].
    ///
    /// The caller is responsible to ensure that the type is correct and the value is initialized before accessing it.
    pub fn as_mut<T>(&mut self) -> &mut MaybeUninit<T> {
        assert!(Self::fits::<T>());

        // Safety: This cast is safe due to the size and alignment constraints.
        unsafe { &mut *self.storage.as_mut_ptr().cast() }
    }
}
