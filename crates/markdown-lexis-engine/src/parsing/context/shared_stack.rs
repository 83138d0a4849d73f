use std::rc::Rc;

struct Node<T> {
    value: T,
    next: Option<Rc<Node<T>>>,
}

/// Persistent stack with structural sharing.
///
/// Cloning is O(1): a clone shares every node with the original, and a push
/// or pop on one copy never affects the other. State frames rely on this to
/// snapshot their nesting stacks on every push without copying them.
pub struct SharedStack<T> {
    head: Option<Rc<Node<T>>>,
    len: usize,
}

impl<T> SharedStack<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Rc::new(Node { value, next }));
        self.len += 1;
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|n| &n.value)
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Clone> SharedStack<T> {
    pub fn pop(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next.clone();
        self.len -= 1;
        Some(node.value.clone())
    }
}

impl<T> Clone for SharedStack<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for SharedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Bottom-up, matching how a Vec-backed stack would print.
        let mut items: Vec<&T> = self.iter().collect();
        items.reverse();
        f.debug_list().entries(items).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}
