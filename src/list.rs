extern crate alloc;

use crate::{Key, Value};
use alloc::vec::Vec;
use core::fmt;

/// Position of a node inside the list's arena.
pub(crate) type Slot = usize;

/// Slot of the head sentinel. Its `next` is the most recently used entry.
const HEAD: Slot = 0;
/// Slot of the tail sentinel. Its `prev` is the least recently used entry.
const TAIL: Slot = 1;
/// Link value of a node that is not part of the chain.
const DETACHED: Slot = usize::MAX;

/// A node in the doubly linked list.
///
/// Holds one cached entry and the slots of its neighbours. Sentinel nodes
/// carry a zeroed key and value that are never read.
#[derive(Debug, Clone, Copy)]
struct Node {
    key: Key,
    value: Value,
    prev: Slot,
    next: Slot,
}

impl Node {
    fn new(key: Key, value: Value) -> Self {
        Node {
            key,
            value,
            prev: DETACHED,
            next: DETACHED,
        }
    }

    fn is_linked(&self) -> bool {
        self.prev != DETACHED && self.next != DETACHED
    }
}

/// A doubly linked list stored in a growable arena.
///
/// Nodes live in `nodes` and refer to each other by slot, so unlinking and
/// relinking are O(1) and never invalidate the slot of another live node.
/// Slots 0 and 1 hold the head and tail sentinels, which are linked to each
/// other when the list is empty and are never released. Released slots are
/// kept on `free` and handed out again by the next [`List::push_front`].
///
/// The list does not enforce a capacity; the owning cache decides when to
/// call [`List::pop_back`].
pub(crate) struct List {
    /// Arena holding the sentinels followed by live and released nodes.
    nodes: Vec<Node>,
    /// Released slots, reused before the arena grows.
    free: Vec<Slot>,
    /// Number of linked entries, sentinels excluded.
    len: usize,
}

impl List {
    /// Creates an empty list with room for `capacity` entries before the
    /// arena has to grow.
    pub(crate) fn with_capacity(capacity: usize) -> List {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(2));
        nodes.push(Node::new(0, 0));
        nodes.push(Node::new(0, 0));

        let mut list = List {
            nodes,
            free: Vec::new(),
            len: 0,
        };
        list.link_sentinels();
        list
    }

    fn link_sentinels(&mut self) {
        self.nodes[HEAD].prev = HEAD;
        self.nodes[HEAD].next = TAIL;
        self.nodes[TAIL].prev = HEAD;
        self.nodes[TAIL].next = TAIL;
    }

    /// Returns the current number of entries in the list.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no entries.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores a new entry and links it right after the head sentinel.
    ///
    /// Returns the slot of the new node.
    pub(crate) fn push_front(&mut self, key: Key, value: Value) -> Slot {
        let slot = self.alloc(Node::new(key, value));
        self.attach(slot);
        self.len += 1;
        slot
    }

    /// Moves a linked node to the front of the list.
    ///
    /// A detached node is simply attached, and a node that is already first
    /// is left alone.
    pub(crate) fn move_to_front(&mut self, slot: Slot) {
        debug_assert!(slot != HEAD && slot != TAIL, "sentinels never move");
        if self.nodes[HEAD].next == slot {
            return;
        }
        if self.nodes[slot].is_linked() {
            self.detach(slot);
        }
        self.attach(slot);
    }

    /// Unlinks the last entry (the one just before the tail sentinel),
    /// releases its slot, and returns its key and value.
    ///
    /// Returns `None` if the list is empty.
    pub(crate) fn pop_back(&mut self) -> Option<(Key, Value)> {
        if self.is_empty() {
            return None;
        }
        let last = self.nodes[TAIL].prev;
        debug_assert!(last != HEAD, "non-empty list with no entries");
        Some(self.remove(last))
    }

    /// Unlinks the node at `slot`, releases it, and returns its contents.
    ///
    /// The slot must belong to a live entry. After this call it is only valid
    /// again once a later `push_front` hands it back out.
    pub(crate) fn remove(&mut self, slot: Slot) -> (Key, Value) {
        debug_assert!(slot != HEAD && slot != TAIL, "sentinels are never removed");
        self.detach(slot);
        self.len -= 1;
        let node = self.nodes[slot];
        self.free.push(slot);
        (node.key, node.value)
    }

    /// Slot of the most recently used entry.
    pub(crate) fn front(&self) -> Option<Slot> {
        let first = self.nodes[HEAD].next;
        (first != TAIL).then_some(first)
    }

    /// Slot of the least recently used entry.
    pub(crate) fn back(&self) -> Option<Slot> {
        let last = self.nodes[TAIL].prev;
        (last != HEAD).then_some(last)
    }

    /// Key and value stored at a live slot.
    pub(crate) fn entry(&self, slot: Slot) -> (Key, Value) {
        let node = &self.nodes[slot];
        (node.key, node.value)
    }

    pub(crate) fn value(&self, slot: Slot) -> Value {
        self.nodes[slot].value
    }

    pub(crate) fn value_mut(&mut self, slot: Slot) -> &mut Value {
        &mut self.nodes[slot].value
    }

    /// Removes every entry. The sentinels are relinked and the arena keeps
    /// its allocation.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(2);
        self.free.clear();
        self.len = 0;
        self.link_sentinels();
    }

    /// Iterates entries from most to least recently used.
    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.nodes[HEAD].next,
            remaining: self.len,
        }
    }

    fn alloc(&mut self, node: Node) -> Slot {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Links a detached node directly after the head sentinel.
    fn attach(&mut self, slot: Slot) {
        let first = self.nodes[HEAD].next;
        self.nodes[slot].prev = HEAD;
        self.nodes[slot].next = first;
        self.nodes[first].prev = slot;
        self.nodes[HEAD].next = slot;
    }

    /// Splices a linked node out of the chain and marks it detached.
    fn detach(&mut self, slot: Slot) {
        let Node { prev, next, .. } = self.nodes[slot];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[slot].prev = DETACHED;
        self.nodes[slot].next = DETACHED;
    }

    /// Walks the chain in both directions and checks that every link is
    /// mirrored and that the walk length matches `len`.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let mut count = 0;
        let mut slot = self.nodes[HEAD].next;
        let mut prev = HEAD;
        while slot != TAIL {
            assert_eq!(self.nodes[slot].prev, prev, "broken back-link at {}", slot);
            assert_eq!(self.nodes[prev].next, slot, "broken forward-link at {}", prev);
            prev = slot;
            slot = self.nodes[slot].next;
            count += 1;
            assert!(count <= self.len, "cycle in recency list");
        }
        assert_eq!(self.nodes[TAIL].prev, prev);
        assert_eq!(count, self.len);
        assert_eq!(self.nodes.len(), 2 + self.len + self.free.len());
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("len", &self.len)
            .field("slots", &self.nodes.len())
            .field("free", &self.free.len())
            .finish()
    }
}

/// Iterator over list entries, most recently used first.
pub(crate) struct Iter<'a> {
    list: &'a List,
    cursor: Slot,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == TAIL {
            return None;
        }
        let node = &self.list.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
