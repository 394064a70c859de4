extern crate alloc;

use alloc::fmt;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::mem;
use core::num::NonZeroUsize;

/// Slot index of the head sigil.
const HEAD: usize = 0;
/// Slot index of the tail sigil.
const TAIL: usize = 1;
/// Number of sigil slots at the start of the arena.
const SIGILS: usize = 2;

/// A stable handle to an entry in a [`List`].
///
/// Handles are plain slot indices. A handle stays valid until its entry is
/// removed; other insertions and removals never move it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A slot in the arena.
///
/// Contains a value and the slot indices of the previous and next entries.
/// Sigil slots and free slots carry no value.
struct Slot<T> {
    val: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Slot<T> {
    fn new(val: T) -> Self {
        Slot {
            val: Some(val),
            prev: HEAD,
            next: TAIL,
        }
    }

    fn new_sigil() -> Self {
        Slot {
            val: None,
            prev: HEAD,
            next: TAIL,
        }
    }
}

/// A doubly linked list with fixed capacity, stored in a slot arena.
///
/// The list maintains a fixed capacity specified at creation time and provides
/// O(1) operations for adding, removing, and reordering elements. Two sigil
/// slots mark the head and tail so linking never has to special-case the ends.
/// Removed slots are recycled through a free list, so once the arena has grown
/// to capacity no further allocation happens.
///
/// # Examples
///
/// ```ignore
/// use core::num::NonZeroUsize;
///
/// let mut list = List::new(NonZeroUsize::new(3).unwrap());
///
/// let node1 = list.add(10).unwrap();
/// let _node2 = list.add(20).unwrap();
///
/// list.move_to_front(node1);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20]);
/// ```
pub struct List<T> {
    /// Maximum number of items the list can hold.
    cap: NonZeroUsize,
    /// Current number of items in the list.
    len: usize,
    /// Sigils followed by entry slots.
    slots: Vec<Slot<T>>,
    /// Indices of vacated slots available for reuse.
    free: Vec<usize>,
}

impl<T> List<T> {
    /// Creates a new List that holds at most `cap` items.
    pub fn new(cap: NonZeroUsize) -> List<T> {
        let mut slots = Vec::with_capacity(cap.get() + SIGILS);
        slots.push(Slot::new_sigil());
        slots.push(Slot::new_sigil());
        List {
            cap,
            len: 0,
            slots,
            free: Vec::with_capacity(cap.get()),
        }
    }

    /// Returns the maximum number of items the list can hold.
    pub fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    /// Returns the current number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list is at capacity.
    pub fn is_full(&self) -> bool {
        self.len == self.cap.get()
    }

    /// Returns true if `idx` addresses a slot currently holding a value.
    fn is_live(&self, idx: usize) -> bool {
        idx >= SIGILS && self.slots.get(idx).is_some_and(|slot| slot.val.is_some())
    }

    /// Unlinks a slot from its neighbours without touching its value.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }

    /// Links a slot directly after the head sigil.
    fn attach(&mut self, idx: usize) {
        let first = self.slots[HEAD].next;
        self.slots[idx].prev = HEAD;
        self.slots[idx].next = first;
        self.slots[first].prev = idx;
        self.slots[HEAD].next = idx;
    }

    /// Detaches a live slot, frees it and hands back its value.
    fn take(&mut self, idx: usize) -> Option<T> {
        if !self.is_live(idx) {
            return None;
        }
        self.detach(idx);
        self.len -= 1;
        self.free.push(idx);
        self.slots[idx].val.take()
    }

    /// Adds a value to the front of the list.
    ///
    /// Returns the handle of the new entry, or `None` if the list is full.
    pub fn add(&mut self, v: T) -> Option<NodeId> {
        if self.is_full() {
            return None;
        }
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx].val = Some(v);
                idx
            }
            None => {
                self.slots.push(Slot::new(v));
                self.slots.len() - 1
            }
        };
        self.attach(idx);
        self.len += 1;
        Some(NodeId(idx))
    }

    /// Removes the given entry from the list and returns its value.
    ///
    /// Returns `None` if the handle does not refer to a live entry.
    pub fn remove(&mut self, node: NodeId) -> Option<T> {
        self.take(node.0)
    }

    /// Removes the last (least recently used) item from the list.
    pub fn remove_last(&mut self) -> Option<T> {
        let last = self.slots[TAIL].prev;
        self.take(last)
    }

    /// Moves an entry to the front of the list.
    ///
    /// Does nothing if the handle does not refer to a live entry.
    pub fn move_to_front(&mut self, node: NodeId) {
        if !self.is_live(node.0) || self.slots[HEAD].next == node.0 {
            return;
        }
        self.detach(node.0);
        self.attach(node.0);
    }

    /// Replaces the value of the given entry, returning the previous value.
    ///
    /// The entry keeps its position. Returns `None` and drops `v` if the handle
    /// does not refer to a live entry.
    pub fn update(&mut self, node: NodeId, v: T) -> Option<T> {
        let slot = self.get_mut(node)?;
        Some(mem::replace(slot, v))
    }

    /// Gets a reference to the value stored in the entry.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        if node.0 < SIGILS {
            return None;
        }
        self.slots.get(node.0)?.val.as_ref()
    }

    /// Gets a mutable reference to the value stored in the entry.
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        if node.0 < SIGILS {
            return None;
        }
        self.slots.get_mut(node.0)?.val.as_mut()
    }

    /// Clears the list, removing all entries.
    ///
    /// The arena keeps its allocation so the list can be refilled without
    /// allocating again.
    pub fn clear(&mut self) {
        self.slots.truncate(SIGILS);
        self.slots[HEAD].next = TAIL;
        self.slots[TAIL].prev = HEAD;
        self.free.clear();
        self.len = 0;
    }

    /// Returns an iterator over the values from front (most recent) to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            front: self.slots[HEAD].next,
            back: self.slots[TAIL].prev,
            remaining: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("capacity", &self.cap)
            .field("length", &self.len)
            .finish()
    }
}

/// Front-to-back iterator over the values of a [`List`].
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = &self.slots[self.front];
        self.front = slot.next;
        self.remaining -= 1;
        slot.val.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = &self.slots[self.back];
        self.back = slot.prev;
        self.remaining -= 1;
        slot.val.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
