//! Reference-counted string interning.
//!
//! Every textually identical string interned through a given [`Engine`] is
//! represented by exactly one record with a reference count. A record is
//! reachable from the engine's index for as long as its count is above
//! zero; the last [`StringHandle`] to drop erases it.
//!
//! Handles hold a clone of the engine's shared inner state plus the
//! content key, rather than a raw pointer into the engine — this sidesteps
//! the forward-declaration cycle between string/engine/handle that the
//! original C++ relies on (see the design notes) without needing an
//! explicit integer engine id, since nothing outside this module ever
//! needs to compare two engines by identity.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A string-interning engine.
///
/// Non-copyable, movable: there is no `Clone` impl, matching the lifecycle
/// in §3 ("Engine: for the whole embed session. Non-copyable, movable.").
/// Every handle produced by this engine keeps its index alive independently
/// through `Rc`, so handles may safely outlive the `Engine` value itself.
#[derive(Default)]
pub struct Engine {
    inner: Rc<RefCell<EngineInner>>,
}

#[derive(Default)]
struct EngineInner {
    records: HashMap<Rc<str>, u32>,
}

impl Engine {
    /// Creates a fresh, empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `bytes`; if present, increments its reference count and
    /// returns a handle to it, otherwise allocates a record with count 1.
    ///
    /// No copy of `bytes` is kept beyond the record itself.
    pub fn intern(&self, bytes: &str) -> StringHandle {
        let mut inner = self.inner.borrow_mut();
        let key = match inner.records.get_key_value(bytes) {
            Some((key, _)) => key.clone(),
            None => Rc::from(bytes),
        };
        let count = inner.records.entry(key.clone()).or_insert(0);
        *count += 1;
        drop(inner);
        StringHandle {
            engine: Rc::clone(&self.inner),
            key,
        }
    }

    /// Pure query: true if a record for `bytes` is currently live. Does not
    /// change any reference count.
    pub fn exists(&self, bytes: &str) -> bool {
        self.inner.borrow().records.contains_key(bytes)
    }

    /// Removes the record for `bytes` unconditionally. Intended to be
    /// called only by a handle's `Drop` once its count has reached zero;
    /// calling it directly on a record with live handles leaves those
    /// handles referencing an erased record, which violates §3's
    /// reachability invariant.
    pub fn erase(&self, bytes: &str) {
        self.inner.borrow_mut().records.remove(bytes);
    }

}

fn release(inner: &RefCell<EngineInner>, key: &str) {
    let mut inner = inner.borrow_mut();
    if let Some(count) = inner.records.get_mut(key) {
        *count -= 1;
        if *count == 0 {
            inner.records.remove(key);
        }
    }
}

/// An opaque, reference-counted handle to an interned string.
///
/// Construction (via [`Engine::intern`] or [`Clone`]) increments the
/// record's count; destruction decrements it, erasing the record on the
/// last release. A moved-from handle is never observable in Rust (the move
/// either transfers ownership or the compiler rejects the use), so the
/// "null after move" caveat in §3 does not apply here.
pub struct StringHandle {
    engine: Rc<RefCell<EngineInner>>,
    key: Rc<str>,
}

impl StringHandle {
    /// Borrows the interned content.
    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl Clone for StringHandle {
    fn clone(&self) -> Self {
        let mut inner = self.engine.borrow_mut();
        if let Some(count) = inner.records.get_mut(self.key.as_ref()) {
            *count += 1;
        }
        drop(inner);
        StringHandle {
            engine: Rc::clone(&self.engine),
            key: Rc::clone(&self.key),
        }
    }
}

impl Drop for StringHandle {
    fn drop(&mut self) {
        release(&self.engine, self.key.as_ref());
    }
}

impl PartialEq for StringHandle {
    /// Handle equality is content equality, per the interning invariant
    /// (§4.1: "handle-equality ⇔ content-equality").
    fn eq(&self, other: &Self) -> bool {
        self.key.as_ref() == other.key.as_ref()
    }
}

impl Eq for StringHandle {}

impl fmt::Debug for StringHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StringHandle").field(&self.key.as_ref()).finish()
    }
}

impl fmt::Display for StringHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_lifetime() {
        let engine = Engine::new();
        assert!(!engine.exists("hello"));
        {
            let _handle = engine.intern("hello");
            assert!(engine.exists("hello"));
        }
        assert!(!engine.exists("hello"));
    }

    #[test]
    fn equality() {
        let engine = Engine::new();
        let a = engine.intern("hello");
        let b = engine.intern("hello");
        assert_eq!(a, b);
    }

    #[test]
    fn clone_increments_and_drop_decrements() {
        let engine = Engine::new();
        let a = engine.intern("hello");
        let b = a.clone();
        assert!(engine.exists("hello"));
        drop(a);
        assert!(engine.exists("hello"));
        drop(b);
        assert!(!engine.exists("hello"));
    }

    #[test]
    fn move_does_not_touch_count() {
        let engine = Engine::new();
        let a = engine.intern("hello");
        let moved = a;
        assert!(engine.exists("hello"));
        drop(moved);
        assert!(!engine.exists("hello"));
    }

    #[test]
    fn distinct_content_distinct_records() {
        let engine = Engine::new();
        let a = engine.intern("hello");
        let b = engine.intern("world");
        assert_ne!(a, b);
        assert!(engine.exists("hello"));
        assert!(engine.exists("world"));
    }

    #[test]
    fn separate_engines_are_independent() {
        let e1 = Engine::new();
        let e2 = Engine::new();
        let _h1 = e1.intern("shared");
        assert!(e1.exists("shared"));
        assert!(!e2.exists("shared"));
    }

    #[quickcheck_macros::quickcheck]
    fn interning_twice_yields_equal_handles(s: String) -> bool {
        let engine = Engine::new();
        let a = engine.intern(&s);
        let b = engine.intern(&s);
        a == b
    }
}
