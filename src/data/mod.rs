//! Tagged stack storage.
//!
//! A [`Stack`] is a singly-linked, last-in-first-out list of nodes.
//! Each node carries its payload and its depth position:
//! 0 at the bottom, increasing toward the top.
//! The top node's position is therefore always `len() - 1`,
//! which is what [`Stack::to_text`] uses to size its buffer and to put each
//! byte back in insertion order while it un-stacks the nodes.
//!
//! All nodes in one stack share a [`Tag`]. For the concrete payloads
//! (`Stack<u8>`, `Stack<Token>`, `Stack<f64>`) the type system guarantees this.
//! A `Stack<Value>` carries its tag at runtime, and pushing a different variant
//! onto it fails with [`StackErr::ValueMismatch`].

mod tag;
mod value;

pub use tag::Tag;
pub use value::{Payload, Value};

/// Reasons a stack operation can fail.
///
/// A failed operation never changes the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackErr {
    /// The stack has no head node to operate on.
    #[error("stack is empty")]
    NullHead,
    /// Storage for a new node or buffer could not be obtained.
    #[error("could not allocate stack storage")]
    AllocationFailure,
    /// The value or requested tag does not match the stack's tag.
    #[error("value does not match the stack's tag")]
    ValueMismatch,
}

/// The main result type for stack operations.
pub type StackResult<T> = Result<T, StackErr>;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    pos: usize,
    next: Link<T>,
}

/// A LIFO stack of values sharing one tag.
pub struct Stack<T> {
    head: Link<T>,
    /// Maximum number of nodes, if storage is bounded.
    limit: Option<usize>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack {
            head: None,
            limit: None,
        }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack that can hold at most `limit` nodes.
    /// Pushes beyond that fail with [`StackErr::AllocationFailure`].
    pub fn with_limit(limit: usize) -> Self {
        Stack {
            head: None,
            limit: Some(limit),
        }
    }

    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |node| node.pos + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate over the values from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes().map(|node| &node.value)
    }

    /// Remove and release every node.
    ///
    /// Walks the links in a loop; dropping a long chain recursively could
    /// exhaust the call stack.
    pub fn drain_all(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Payload> Stack<T> {
    /// The tag shared by all values on the stack; `None` if empty.
    pub fn tag(&self) -> Option<Tag> {
        self.head.as_ref().map(|node| node.value.tag())
    }

    /// Push a value onto the stack, one position above the current top.
    pub fn push(&mut self, value: T) -> StackResult<()> {
        if self.tag().is_some_and(|tag| tag != value.tag()) {
            return Err(StackErr::ValueMismatch);
        }
        let pos = self.len();
        if self.limit.is_some_and(|limit| pos >= limit) {
            return Err(StackErr::AllocationFailure);
        }
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, pos, next }));
        Ok(())
    }

    /// Get a copy of the top value.
    pub fn peek(&self, tag: Tag) -> StackResult<T> {
        self.top(tag).map(|node| node.value.clone())
    }

    /// Remove the top value and return it.
    pub fn pop(&mut self, tag: Tag) -> StackResult<T> {
        self.top(tag)?;
        let node = self.head.take().ok_or(StackErr::NullHead)?;
        let Node { value, next, .. } = *node;
        self.head = next;
        Ok(value)
    }

    /// Un-stack a byte stack into the string it spells, bottom node first.
    ///
    /// On success the stack is empty.
    /// Fails without touching the stack if it is empty, not byte-tagged,
    /// does not hold UTF-8, or the buffer cannot be allocated.
    pub fn to_text(&mut self) -> StackResult<String> {
        let count = self.len();
        if count == 0 {
            return Err(StackErr::NullHead);
        }
        if self.tag() != Some(Tag::Byte) {
            return Err(StackErr::ValueMismatch);
        }

        let mut buffer: Vec<u8> = Vec::new();
        buffer
            .try_reserve_exact(count)
            .map_err(|_| StackErr::AllocationFailure)?;
        buffer.resize(count, 0);
        // Nodes come out top first; each one's position is its insertion index.
        for node in self.nodes() {
            buffer[node.pos] = node.value.as_byte().ok_or(StackErr::ValueMismatch)?;
        }
        let text = String::from_utf8(buffer).map_err(|_| StackErr::ValueMismatch)?;

        self.drain_all();
        Ok(text)
    }

    fn top(&self, tag: Tag) -> StackResult<&Node<T>> {
        let node = self.head.as_deref().ok_or(StackErr::NullHead)?;
        if node.value.tag() != tag {
            return Err(StackErr::ValueMismatch);
        }
        Ok(node)
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.drain_all();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

struct Nodes<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}
