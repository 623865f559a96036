//! Lexical environments.
//!
//! An `Environment` is a shared handle to one scope: a table of bindings
//! plus an optional parent. The global environment is created by the
//! caller and reused across programs (the REPL evaluates every line in
//! the same one). Each function call gets a fresh scope whose parent is
//! the callee's captured environment, never the caller's.
//!
//! Blocks (`if` arms) do not open a scope, so a `let` inside one binds in
//! the enclosing environment.
//!
//! Closures hold their defining environment, and a function bound by
//! `let` in that same environment forms a reference cycle. Such cycles
//! live until the process exits.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Value;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through `LocalScope::new`. `Rc` (not `Arc`)
/// because evaluation runs on one thread.
#[repr(transparent)]
struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Bindings of one scope.
struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

/// Shared handle to a scope and, through it, its ancestors.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// Create an empty top-level environment.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }))
    }

    /// Create an empty scope whose lookups fall back to `outer`.
    pub fn enclosed(outer: &Environment) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(outer.clone()),
        }))
    }

    /// Look `name` up here, then in each ancestor in turn.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut scope = self.0.clone();
        loop {
            let parent = {
                let current = scope.borrow();
                if let Some(value) = current.bindings.get(name) {
                    return Some(value.clone());
                }
                current.parent.clone()?
            };
            scope = parent.0;
        }
    }

    /// Bind `name` in this scope, replacing any binding it already has
    /// here. Outer scopes are never touched.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0 .0, &other.0 .0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Bindings may hold closures that capture this environment; print names
// only.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}
