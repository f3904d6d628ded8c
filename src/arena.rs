//! Slot allocator that hands out copyable indices instead of references.

use std::mem;
use std::ops::{Index, IndexMut};

/// A handle to an object stored in an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

enum Slot<T> {
    Occupied(T),
    Vacant(Option<NodeId>),
}

/// A slot allocator for a single type of object.
///
/// Objects are addressed by `NodeId`, which is `Copy`, so structures with back-references such as
/// parent links can be expressed without reference cycles. Freed slots are threaded onto a free
/// list and reused by later allocations. All objects are dropped when the arena is dropped.
///
/// # Examples
///
/// ```
/// use balanced_sets::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct Arena<T> {
    head: Option<NodeId>,
    slots: Vec<Slot<T>>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    pub fn new() -> Self {
        Arena {
            head: None,
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Allocates an object and returns its handle, reusing the most recently freed slot if there
    /// is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// arena.free(x);
    /// assert_eq!(arena.allocate(1), x);
    /// ```
    pub fn allocate(&mut self, value: T) -> NodeId {
        self.len += 1;

        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId(self.slots.len() - 1)
            },
            Some(id) => {
                let vacant_slot = mem::replace(&mut self.slots[id.0], Slot::Occupied(value));
                match vacant_slot {
                    Slot::Vacant(next) => {
                        self.head = next;
                        id
                    },
                    Slot::Occupied(_) => panic!("Expected a vacant slot on the free list."),
                }
            },
        }
    }

    /// Deallocates an object and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `id` refers to a vacant or out of bounds slot.
    pub fn free(&mut self, id: NodeId) -> T {
        if id.0 >= self.slots.len() {
            panic!("Error: attempting to free invalid slot.");
        }
        let old_slot = mem::replace(&mut self.slots[id.0], Slot::Vacant(self.head));
        match old_slot {
            Slot::Vacant(next) => {
                self.slots[id.0] = Slot::Vacant(next);
                panic!("Error: attempting to free vacant slot.");
            },
            Slot::Occupied(value) => {
                self.len -= 1;
                self.head = Some(id);
                value
            },
        }
    }

    /// Returns an immutable reference to an object. Returns `None` if `id` does not refer to a live
    /// object.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(ref value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object. Returns `None` if `id` does not refer to a live
    /// object.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(ref mut value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live objects.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object and forgets every slot. Previously issued handles become invalid.
    pub fn clear(&mut self) {
        self.head = None;
        self.slots.clear();
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Error: handle does not refer to a live object.")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Error: handle does not refer to a live object.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, NodeId};

    #[test]
    #[should_panic]
    fn test_free_invalid_slot() {
        let mut arena: Arena<u32> = Arena::new();
        arena.free(NodeId(0));
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_slot() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.free(x);
        arena.free(x);
    }

    #[test]
    fn test_allocate() {
        let mut arena = Arena::new();
        assert_eq!(arena.allocate(0), NodeId(0));
        assert_eq!(arena.allocate(0), NodeId(1));
        assert_eq!(arena.allocate(0), NodeId(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_slots_last_in_first_out() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        let y = arena.allocate(1);
        assert_eq!(arena.free(x), 0);
        assert_eq!(arena.free(y), 1);
        assert_eq!(arena.allocate(2), y);
        assert_eq!(arena.allocate(3), x);
        assert_eq!(arena.allocate(4), NodeId(2));
    }

    #[test]
    fn test_get() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        assert_eq!(arena.get(x), Some(&0));
        assert_eq!(arena.get(NodeId(1)), None);
        arena.free(x);
        assert_eq!(arena.get(x), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        *arena.get_mut(x).unwrap() = 1;
        assert_eq!(arena[x], 1);
        arena.free(x);
        assert_eq!(arena.get_mut(x), None);
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.allocate(1);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(x), None);
        assert_eq!(arena.allocate(2), NodeId(0));
    }
}
