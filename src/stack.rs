//! Fixed-capacity LIFO stack shared by the converter and the evaluator.
//!
//! The stack offers two faces over the same buffer:
//! - a *tagged* API ([`BoundedStack::try_push`], [`BoundedStack::try_pop`]) that reports
//!   overflow and underflow as [`StackError`];
//! - a *permissive* API ([`BoundedStack::push`], [`BoundedStack::pop`]) that silently drops
//!   elements pushed onto a full stack and returns the element type's [`Sentinel`]
//!   when popping an empty one.

use crate::error::StackError;

/// Default number of slots of every stack used by the expression pipeline.
pub const STACK_CAPACITY: usize = 9;

/// Value returned by a permissive pop on an empty stack.
pub trait Sentinel: Copy {
    const SENTINEL: Self;
}

impl Sentinel for char {
    const SENTINEL: Self = '\0';
}

impl Sentinel for i64 {
    const SENTINEL: Self = 0;
}

/// A LIFO container backed by an inline array of `N` slots and a cursor.
///
/// Example
/// ```
/// use postfix_calc::stack::BoundedStack;
///
/// let mut stack: BoundedStack<i64, 2> = BoundedStack::new();
/// assert!(stack.push(1));
/// assert!(stack.push(2));
/// assert!(!stack.push(3)); // full: dropped
/// assert_eq!(stack.pop(), 2);
/// assert_eq!(stack.pop(), 1);
/// assert_eq!(stack.pop(), 0); // empty: sentinel
/// ```
#[derive(Debug, Clone)]
pub struct BoundedStack<T: Sentinel, const N: usize = STACK_CAPACITY> {
    slots: [T; N],
    len: usize,
}

impl<T: Sentinel, const N: usize> BoundedStack<T, N> {
    pub fn new() -> Self {
        Self {
            slots: [T::SENTINEL; N],
            len: 0,
        }
    }

    /// Push `value`, failing with [`StackError::Overflow`] when every slot is taken.
    pub fn try_push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow { capacity: N });
        }
        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the top element, failing with [`StackError::Underflow`] when empty.
    pub fn try_pop(&mut self) -> Result<T, StackError> {
        if self.is_empty() {
            return Err(StackError::Underflow);
        }
        self.len -= 1;
        Ok(self.slots[self.len])
    }

    /// Push `value` if there is room. Returns `false` when the value was dropped.
    pub fn push(&mut self, value: T) -> bool {
        self.try_push(value).is_ok()
    }

    /// Pop the top element, or [`Sentinel::SENTINEL`] when the stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().unwrap_or(T::SENTINEL)
    }

    pub fn peek(&self) -> Option<T> {
        self.len.checked_sub(1).map(|top| self.slots[top])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T: Sentinel, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
