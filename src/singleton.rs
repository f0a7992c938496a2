//! Singleton: one instance, several ways to hold it.
//!
//! - [`eager`]: a module-level instance per package version. Two copies of
//!   the package mean two "singletons".
//! - [`GlobalSlot`]: process-wide storage that must be installed before use.
//! - [`RefCountedSingleton`]: an explicit holder with acquire/release counts.
//!   Dropping the count to zero clears the instance.
//! - [`WeakSingleton`]: the holder keeps only a [`Weak`] reference, so the
//!   instance goes away as soon as its last user drops it.
//!
//! Holders are plain values passed to whoever needs them; nothing but
//! [`GlobalSlot`] lives in a `static`.

use crate::error::PatternError;
use std::cell::{Cell, RefCell};
use std::ops::Deref;
use std::rc::{Rc, Weak};
use std::sync::OnceLock;
use uuid::Uuid;

/// The thing everyone wants exactly one of.
#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    id: Uuid,
}

impl Service {
    pub fn new() -> Self {
        let service = Self { id: Uuid::new_v4() };
        tracing::debug!(id = %service.id, "service constructed");
        service
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn some_method(&self) -> &'static str {
        "Singleton method called"
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Bad: eager module-level instances
// ============================================================================

pub mod eager {
    use lazy_static::lazy_static;
    use uuid::Uuid;

    #[derive(Debug)]
    pub struct Instance {
        pub version: &'static str,
        pub id: Uuid,
    }

    impl Instance {
        fn new(version: &'static str) -> Self {
            Self {
                version,
                id: Uuid::new_v4(),
            }
        }
    }

    // Two installed versions of the same package, each with "the" instance.
    lazy_static! {
        pub static ref V1_0_0: Instance = Instance::new("v1.0.0");
        pub static ref V1_0_1: Instance = Instance::new("v1.0.1");
    }
}

// ============================================================================
// Process-wide slot
// ============================================================================

/// A `static`-friendly slot holding at most one value for the whole process.
pub struct GlobalSlot<T> {
    cell: OnceLock<T>,
    type_name: &'static str,
}

impl<T> GlobalSlot<T> {
    pub const fn new(type_name: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            type_name,
        }
    }

    pub fn install(&self, value: T) -> Result<&T, PatternError> {
        self.cell.set(value).map_err(|_| PatternError::AlreadyInstalled {
            type_name: self.type_name,
        })?;
        self.get()
    }

    pub fn get(&self) -> Result<&T, PatternError> {
        self.cell.get().ok_or(PatternError::GlobalObjectUnavailable {
            type_name: self.type_name,
        })
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(init)
    }

    pub fn is_installed(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// The classic accessor: the first call builds the instance, every later call
/// returns it.
pub fn global_service() -> &'static Service {
    static INSTANCE: GlobalSlot<Service> = GlobalSlot::new("Service");
    INSTANCE.get_or_init(Service::new)
}

// ============================================================================
// Reference-counted holder
// ============================================================================

pub struct RefCountedSingleton<T> {
    slot: RefCell<Option<Rc<T>>>,
    refs: Cell<usize>,
    init: Box<dyn Fn() -> T>,
}

impl<T> RefCountedSingleton<T> {
    pub fn new(init: impl Fn() -> T + 'static) -> Self {
        Self {
            slot: RefCell::new(None),
            refs: Cell::new(0),
            init: Box::new(init),
        }
    }

    /// Builds the instance if needed and counts one more reference.
    pub fn get_instance(&self) -> Rc<T> {
        let instance = {
            let mut slot = self.slot.borrow_mut();
            match slot.as_ref() {
                Some(instance) => Rc::clone(instance),
                None => {
                    let instance = Rc::new((self.init)());
                    *slot = Some(Rc::clone(&instance));
                    tracing::debug!("singleton initialized");
                    instance
                }
            }
        };
        self.retain();
        instance
    }

    pub fn retain(&self) {
        self.refs.set(self.refs.get() + 1);
    }

    /// Drops one reference; the last one clears the stored instance.
    pub fn release(&self) {
        match self.refs.get() {
            0 => tracing::warn!("release() without a matching acquire, ignored"),
            1 => {
                self.refs.set(0);
                self.slot.borrow_mut().take();
                tracing::debug!("singleton reclaimed");
            }
            n => self.refs.set(n - 1),
        }
    }

    /// Like [`get_instance`](Self::get_instance), but the reference is
    /// released when the lease drops.
    pub fn acquire(&self) -> Lease<'_, T> {
        Lease {
            instance: self.get_instance(),
            holder: self,
        }
    }

    pub fn ref_count(&self) -> usize {
        self.refs.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

/// Scoped use of a [`RefCountedSingleton`]'s instance.
pub struct Lease<'a, T> {
    instance: Rc<T>,
    holder: &'a RefCountedSingleton<T>,
}

impl<T> Lease<'_, T> {
    pub fn instance(&self) -> &Rc<T> {
        &self.instance
    }
}

impl<T> Deref for Lease<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.instance
    }
}

impl<T> Drop for Lease<'_, T> {
    fn drop(&mut self) {
        self.holder.release();
    }
}

// ============================================================================
// Weak-reference holder
// ============================================================================

pub struct WeakSingleton<T> {
    slot: RefCell<Weak<T>>,
    init: Box<dyn Fn() -> T>,
}

impl<T> WeakSingleton<T> {
    pub fn new(init: impl Fn() -> T + 'static) -> Self {
        Self {
            slot: RefCell::new(Weak::new()),
            init: Box::new(init),
        }
    }

    /// Returns the live instance, or builds a new one if the last user has
    /// already dropped the previous one.
    pub fn get_instance(&self) -> Rc<T> {
        if let Some(instance) = self.slot.borrow().upgrade() {
            return instance;
        }
        let instance = Rc::new((self.init)());
        *self.slot.borrow_mut() = Rc::downgrade(&instance);
        tracing::debug!("weak singleton (re)initialized");
        instance
    }

    /// Forgets the current instance even if someone still holds it.
    pub fn clear(&self) {
        *self.slot.borrow_mut() = Weak::new();
    }

    pub fn is_alive(&self) -> bool {
        self.slot.borrow().strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eager_versions_are_different_instances() {
        assert_ne!(eager::V1_0_0.id, eager::V1_0_1.id);
        assert_eq!(eager::V1_0_0.version, "v1.0.0");
        assert!(std::ptr::eq(&*eager::V1_0_0, &*eager::V1_0_0));
    }

    #[test]
    fn test_global_slot_unavailable_until_installed() {
        let slot: GlobalSlot<Service> = GlobalSlot::new("Service");
        assert_eq!(
            slot.get().unwrap_err(),
            PatternError::GlobalObjectUnavailable { type_name: "Service" }
        );

        let installed = slot.install(Service::new()).unwrap();
        let id = installed.id();
        assert_eq!(slot.get().unwrap().id(), id);
        assert!(slot.is_installed());
    }

    #[test]
    fn test_global_slot_install_twice() {
        let slot: GlobalSlot<u8> = GlobalSlot::new("u8");
        slot.install(1).unwrap();
        assert_eq!(
            slot.install(2),
            Err(PatternError::AlreadyInstalled { type_name: "u8" })
        );
        assert_eq!(slot.get(), Ok(&1));
    }

    #[test]
    fn test_global_service_is_shared() {
        let a = global_service();
        let b = global_service();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.some_method(), "Singleton method called");
    }

    #[test]
    fn test_ref_counted_same_instance() {
        let holder = RefCountedSingleton::new(Service::new);
        let first = holder.get_instance();
        let second = holder.get_instance();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(holder.ref_count(), 2);
    }

    #[test]
    fn test_ref_counted_retain_release_keeps_instance() {
        let holder = RefCountedSingleton::new(Service::new);
        let instance1 = holder.get_instance();
        holder.retain();
        assert_eq!(instance1.some_method(), "Singleton method called");
        holder.release();

        let instance2 = holder.get_instance();
        assert!(Rc::ptr_eq(&instance1, &instance2));
        assert_eq!(holder.ref_count(), 2);
    }

    #[test]
    fn test_ref_counted_reclaims_at_zero() {
        let holder = RefCountedSingleton::new(Service::new);
        let old = holder.get_instance();
        holder.release();
        assert!(!holder.is_initialized());

        let new = holder.get_instance();
        assert!(!Rc::ptr_eq(&old, &new));
        assert_ne!(old.id(), new.id());
    }

    #[test]
    fn test_release_without_acquire_is_ignored() {
        let holder = RefCountedSingleton::new(Service::new);
        holder.release();
        assert_eq!(holder.ref_count(), 0);
        let instance = holder.get_instance();
        assert_eq!(holder.ref_count(), 1);
        assert!(holder.is_initialized());
        drop(instance);
    }

    #[test]
    fn test_lease_releases_on_drop() {
        let holder = RefCountedSingleton::new(Service::new);
        let id = {
            let lease = holder.acquire();
            assert_eq!(holder.ref_count(), 1);
            lease.id()
        };
        assert_eq!(holder.ref_count(), 0);
        assert!(!holder.is_initialized());
        assert_ne!(holder.get_instance().id(), id);
    }

    #[test]
    fn test_nested_leases_share_instance() {
        let holder = RefCountedSingleton::new(Service::new);
        let outer = holder.acquire();
        {
            let inner = holder.acquire();
            assert!(Rc::ptr_eq(outer.instance(), inner.instance()));
            assert_eq!(holder.ref_count(), 2);
        }
        assert!(holder.is_initialized());
        drop(outer);
        assert!(!holder.is_initialized());
    }

    #[test]
    fn test_lease_released_on_early_return() {
        fn use_service(holder: &RefCountedSingleton<Service>, fail: bool) -> Result<(), PatternError> {
            let _lease = holder.acquire();
            if fail {
                return Err(PatternError::NoBuilderConfigured);
            }
            Ok(())
        }

        let holder = RefCountedSingleton::new(Service::new);
        assert!(use_service(&holder, true).is_err());
        assert_eq!(holder.ref_count(), 0);
    }

    #[test]
    fn test_weak_same_instance_while_alive() {
        let holder = WeakSingleton::new(Service::new);
        let a = holder.get_instance();
        let b = holder.get_instance();
        assert!(Rc::ptr_eq(&a, &b));
        assert!(holder.is_alive());
    }

    #[test]
    fn test_weak_reclaimed_when_last_user_drops() {
        let holder = WeakSingleton::new(Service::new);
        let old_id = holder.get_instance().id();
        assert!(!holder.is_alive());
        assert_ne!(holder.get_instance().id(), old_id);
    }

    #[test]
    fn test_weak_clear_forces_new_instance() {
        let holder = WeakSingleton::new(Service::new);
        let old = holder.get_instance();
        holder.clear();
        let new = holder.get_instance();
        assert!(!Rc::ptr_eq(&old, &new));
    }
}
