//! Stack safety for the recursive parser and evaluator.
//!
//! Two tools, used together:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand (via
//!   `stacker`) so that deeply nested but finite programs never overflow.
//! - [`DepthLimiter`] bounds the number of nested calls, so that runaway
//!   recursion in a user program becomes an ordinary error value instead
//!   of growing the stack until memory runs out.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: no-op passthrough (WASM manages its own stack).

/// Minimum stack space to keep available (128KB red zone).
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// Wrap each recursive entry point (expression parsing, node evaluation):
///
/// ```text
/// fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Returned by [`DepthLimiter::enter`] when the limit is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("maximum recursion depth exceeded (limit: {limit})")]
pub struct DepthExceeded {
    pub limit: usize,
}

/// Counts nesting depth against an optional limit.
///
/// `enter` before descending, `leave` after returning. On overflow the
/// depth is left unchanged, so the caller must not call `leave`.
#[derive(Clone, Debug, Default)]
pub struct DepthLimiter {
    depth: usize,
    limit: Option<usize>,
}

impl DepthLimiter {
    /// `None` means unlimited.
    pub fn new(limit: Option<usize>) -> Self {
        DepthLimiter { depth: 0, limit }
    }

    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if let Some(limit) = self.limit {
            if self.depth >= limit {
                return Err(DepthExceeded { limit });
            }
        }
        self.depth = self.depth.saturating_add(1);
        Ok(())
    }

    pub fn leave(&mut self) {
        debug_assert!(self.depth > 0, "DepthLimiter::leave() without enter()");
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }
}
