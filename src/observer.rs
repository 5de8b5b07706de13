//! Observer registry: lets a subject broadcast state changes to display
//! components without coupling to a concrete display type.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::common::ObserverError;

/// Receives synchronous state-change notifications from a subject.
pub trait Observer<S> {
    fn update(&mut self, subject: &S);
}

/// Shared, non-owning handle to an observer. The registry holds one strong
/// count per subscription but never controls observer lifetime exclusively.
pub type ObserverHandle<S> = Rc<RefCell<dyn Observer<S>>>;

/// Ordered collection of observer subscriptions for a subject of type `S`.
pub struct Subject<S> {
    observers: Vec<ObserverHandle<S>>,
}

impl<S> Subject<S> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer. Duplicate registration is allowed; each attach
    /// adds a distinct subscription.
    pub fn attach(&mut self, observer: ObserverHandle<S>) {
        self.observers.push(observer);
    }

    /// Remove the first subscription matching `observer` by handle identity.
    pub fn detach(&mut self, observer: &ObserverHandle<S>) -> Result<(), ObserverError> {
        let position = self
            .observers
            .iter()
            .position(|attached| handle_eq(attached, observer))
            .ok_or(ObserverError::NotAttached)?;
        self.observers.remove(position);
        Ok(())
    }

    /// Invoke every attached observer's update callback with `subject`,
    /// synchronously, in attachment order. Iterates over a snapshot of the
    /// subscription list, so callbacks that alter the registry take effect
    /// only on the next notify pass.
    pub fn notify(&self, subject: &S) {
        let snapshot: Vec<ObserverHandle<S>> = self.observers.clone();
        for observer in snapshot {
            observer.borrow_mut().update(subject);
        }
    }

    /// Number of current subscriptions.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<S> Default for Subject<S> {
    fn default() -> Self {
        Self::new()
    }
}

// Identity on the data pointer only; comparing fat pointers would also
// compare vtables, which is not stable across codegen units.
fn handle_eq<S>(a: &ObserverHandle<S>, b: &ObserverHandle<S>) -> bool {
    core::ptr::eq(
        Rc::as_ptr(a) as *const u8,
        Rc::as_ptr(b) as *const u8,
    )
}
