//! Stack growth for the recursive descent parser.
//!
//! Nested groups, prefix operators and right associative chains each recurse
//! a few frames per level. Every cycle of that recursion passes through a
//! function wrapped in [`ensure_sufficient_stack`], so input nesting is bounded
//! by available memory instead of the thread's stack size.

/// If less than this remains, the stack is grown before recursing.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
