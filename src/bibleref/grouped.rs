//! Grouped list
//!
//! A doubly-linked list whose elements are also partitioned into contiguous
//! groups. Nodes live in an arena (`Vec<Option<Node<T>>>` plus a free list) and
//! refer to each other by `NodeId`. Two intrusive chains run through the arena:
//!
//!     element chain   prev / next        every node, in list order
//!     head chain      prev_head / next_head   only the first node of each group
//!
//! A group is a head node plus every following node up to the next head. The
//! first node of a non-empty list is always a head, so every element belongs to
//! exactly one group.
//!
//! Read-only views over groups live in `grouped/views.rs`. They borrow the list,
//! so a view can never observe a list that changed underneath it.

mod views;

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::RangeBounds;

use super::error::{BibleRefError, BibleRefResult};

pub use views::{Group, GroupIter, Groups, GroupsIter, Iter};

/// Handle to a node in a [`GroupedList`]'s arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
    is_head: bool,
    prev_head: Option<NodeId>,
    next_head: Option<NodeId>,
}

impl<T> Node<T> {
    fn clear_head(&mut self) {
        self.is_head = false;
        self.prev_head = None;
        self.next_head = None;
    }
}

/// A linked list of values partitioned into contiguous groups
#[derive(Clone)]
pub struct GroupedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    first: Option<NodeId>,
    last: Option<NodeId>,
    first_head: Option<NodeId>,
    last_head: Option<NodeId>,
    len: usize,
    group_count: usize,
}

impl<T> Default for GroupedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GroupedList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            first: None,
            last: None,
            first_head: None,
            last_head: None,
            len: 0,
            group_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.first, self.last, self.len)
    }

    /// Read-only view of the groups
    pub fn groups(&self) -> Groups<'_, T> {
        Groups::new(self)
    }

    pub fn first(&self) -> Option<&T> {
        self.first.map(|id| &self.node(id).value)
    }

    pub fn last(&self) -> Option<&T> {
        self.last.map(|id| &self.node(id).value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|id| &self.node(id).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let id = self.node_at(index)?;
        Some(&mut self.node_mut(id).value)
    }

    /// Replace the value at `index`, returning the old one
    pub fn set(&mut self, index: isize, value: T) -> BibleRefResult<T> {
        let index = self.conform_index(index)?;
        match self.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(index_error(index as isize)),
        }
    }

    /// Insert `value` at the front; with `new_group` it forms a group of its own
    pub fn prepend(&mut self, value: T, new_group: bool) {
        match self.first {
            None => self.insert_first(value),
            Some(first) => {
                self.insert_before(first, value, new_group);
            }
        }
    }

    /// Insert `value` at the back; with `new_group` it starts a new group
    pub fn append(&mut self, value: T, new_group: bool) {
        match self.last {
            None => self.insert_first(value),
            Some(last) => {
                self.insert_after(last, value, new_group);
            }
        }
    }

    /// Append every value as one new group
    pub fn append_group(&mut self, values: impl IntoIterator<Item = T>) {
        for (i, value) in values.into_iter().enumerate() {
            self.append(value, i == 0);
        }
    }

    /// Insert `value` so that it ends up at `index`, joining the surrounding group.
    ///
    /// Negative indexes count from the end, so `-1` inserts before the last element;
    /// `len()` appends.
    pub fn insert(&mut self, index: isize, value: T) -> BibleRefResult<()> {
        let resolved = if index < 0 {
            index + self.len as isize
        } else {
            index
        };
        if resolved < 0 || resolved as usize > self.len {
            return Err(index_error(index));
        }
        let resolved = resolved as usize;
        if resolved == 0 {
            self.prepend(value, false);
        } else if resolved == self.len {
            self.append(value, false);
        } else {
            let node = self.node_at(resolved).ok_or_else(|| index_error(index))?;
            self.insert_before(node, value, false);
        }
        Ok(())
    }

    /// Make the element at `index` the start of a new group
    pub fn insert_group_at(&mut self, index: isize) -> BibleRefResult<()> {
        let index = self.conform_index(index)?;
        if let Some(node) = self.node_at(index) {
            self.start_group_at(node);
        }
        Ok(())
    }

    /// Remove and return the element at `index` (negative counts from the end)
    pub fn pop(&mut self, index: isize) -> BibleRefResult<T> {
        let index = self.conform_index(index)?;
        let node = self
            .node_at(index)
            .ok_or_else(|| index_error(index as isize))?;
        Ok(self.pop_node(node))
    }

    pub fn pop_last(&mut self) -> Option<T> {
        let last = self.last?;
        Some(self.pop_node(last))
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Drop every group boundary, leaving one group holding everything
    pub fn clear_groups(&mut self) {
        let mut cursor = self.first;
        while let Some(id) = cursor {
            let node = self.node_mut(id);
            node.clear_head();
            cursor = node.next;
        }
        self.setup_single_group();
    }

    /// Reverse in place; groups are cleared
    pub fn reverse(&mut self) {
        let mut cursor = self.first;
        while let Some(id) = cursor {
            let node = self.node_mut(id);
            std::mem::swap(&mut node.prev, &mut node.next);
            node.clear_head();
            cursor = node.prev;
        }
        std::mem::swap(&mut self.first, &mut self.last);
        self.setup_single_group();
    }

    /// Compare element-wise, and group-wise as well when `compare_groups` is set
    pub fn equals(&self, other: &GroupedList<T>, compare_groups: bool) -> bool
    where
        T: PartialEq,
    {
        if self.len != other.len {
            return false;
        }
        if compare_groups {
            self.group_count == other.group_count
                && self
                    .groups()
                    .iter()
                    .zip(other.groups().iter())
                    .all(|(a, b)| a.len() == b.len() && a.iter().eq(b.iter()))
        } else {
            self.iter().eq(other.iter())
        }
    }

    /// Position of the first `value` whose index lies in `bounds`
    pub fn index_of(&self, value: &T, bounds: impl RangeBounds<usize>) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter()
            .enumerate()
            .find(|(i, item)| bounds.contains(i) && *item == value)
            .map(|(i, _)| i)
    }

    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|item| *item == value).count()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Remove the first occurrence of `value`
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut cursor = self.first;
        while let Some(id) = cursor {
            if self.node(id).value == *value {
                return Some(self.pop_node(id));
            }
            cursor = self.node(id).next;
        }
        None
    }

    /// Stable sort; groups are cleared into one
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        let mut values = self.take_values();
        values.sort();
        self.extend(values);
    }

    /// Copy out as one vector per group
    pub fn to_nested_vecs(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.groups()
            .iter()
            .map(|group| group.iter().cloned().collect())
            .collect()
    }

    // Node-level operations, for algorithms that edit the list while walking it.

    pub(crate) fn first_node(&self) -> Option<NodeId> {
        self.first
    }

    pub(crate) fn next_node(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    pub(crate) fn value(&self, id: NodeId) -> &T {
        &self.node(id).value
    }

    pub(crate) fn value_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.node_mut(id).value
    }

    /// Insert before `node`; returns the new node's id
    pub(crate) fn insert_before(&mut self, node: NodeId, value: T, new_group: bool) -> NodeId {
        let inserting_first = self.first == Some(node);
        let prev = self.node(node).prev;
        let new = self.alloc(value, prev, Some(node));
        if let Some(prev) = prev {
            self.node_mut(prev).next = Some(new);
        }
        self.node_mut(node).prev = Some(new);
        if inserting_first {
            self.first = Some(new);
        }
        self.len += 1;

        if new_group {
            if inserting_first {
                // Stand-alone group in front of the existing first group
                self.new_group_before_head(new, true);
            } else {
                self.start_group_at(new);
            }
        } else if self.node(node).is_head {
            // The new node takes over as head of the group it joined
            self.new_group_before_head(new, false);
        }
        new
    }

    /// Insert after `node`; returns the new node's id
    pub(crate) fn insert_after(&mut self, node: NodeId, value: T, new_group: bool) -> NodeId {
        let next = self.node(node).next;
        let new = self.alloc(value, Some(node), next);
        if let Some(next) = next {
            self.node_mut(next).prev = Some(new);
        }
        self.node_mut(node).next = Some(new);
        if self.last == Some(node) {
            self.last = Some(new);
        }
        self.len += 1;

        if new_group {
            self.start_group_at(new);
        }
        new
    }

    /// Unlink `node` and return its value, handing group headship on if needed
    pub(crate) fn pop_node(&mut self, node: NodeId) -> T {
        let (prev, next) = {
            let n = self.node(node);
            (n.prev, n.next)
        };
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.first = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.last = prev,
        }
        self.len -= 1;

        let (is_head, prev_head, next_head) = {
            let n = self.node(node);
            (n.is_head, n.prev_head, n.next_head)
        };
        if is_head {
            let successor = next.filter(|&id| !self.node(id).is_head);
            let (next_link, prev_link) = match successor {
                Some(successor) => {
                    // Push headship forward one node
                    let n = self.node_mut(successor);
                    n.is_head = true;
                    n.prev_head = prev_head;
                    n.next_head = next_head;
                    (Some(successor), Some(successor))
                }
                None => {
                    // The group is now empty
                    self.group_count -= 1;
                    (next_head, prev_head)
                }
            };
            if self.first_head == Some(node) {
                self.first_head = next_link;
            }
            if self.last_head == Some(node) {
                self.last_head = prev_link;
            }
            if let Some(prev_head) = prev_head {
                self.node_mut(prev_head).next_head = next_link;
            }
            if let Some(next_head) = next_head {
                self.node_mut(next_head).prev_head = prev_link;
            }
        }
        self.release(node)
    }

    pub(crate) fn pop_after(&mut self, node: NodeId) -> Option<T> {
        let next = self.node(node).next?;
        Some(self.pop_node(next))
    }

    /// Split the group containing `node` so that `node` heads a new group
    pub(crate) fn start_group_at(&mut self, node: NodeId) {
        if self.first == Some(node) || self.node(node).is_head {
            return;
        }
        let Some(prev_head) = self.node(node).prev.and_then(|prev| self.find_head(prev)) else {
            return;
        };
        let after = self.node(prev_head).next_head;
        {
            let n = self.node_mut(node);
            n.is_head = true;
            n.prev_head = Some(prev_head);
            n.next_head = after;
        }
        if let Some(after) = after {
            self.node_mut(after).prev_head = Some(node);
        }
        self.node_mut(prev_head).next_head = Some(node);
        if self.last_head == Some(prev_head) {
            self.last_head = Some(node);
        }
        self.group_count += 1;
    }

    fn new_group_before_head(&mut self, node: NodeId, keep_existing_head: bool) {
        let Some(old_head) = self.node(node).next else {
            return;
        };
        let old_prev_head = self.node(old_head).prev_head;
        {
            let n = self.node_mut(node);
            n.is_head = true;
            n.prev_head = old_prev_head;
        }
        if let Some(prev_head) = old_prev_head {
            self.node_mut(prev_head).next_head = Some(node);
        }

        if keep_existing_head {
            self.node_mut(node).next_head = Some(old_head);
            self.node_mut(old_head).prev_head = Some(node);
            self.group_count += 1;
        } else {
            let old_next_head = self.node(old_head).next_head;
            self.node_mut(node).next_head = old_next_head;
            match old_next_head {
                Some(next_head) => self.node_mut(next_head).prev_head = Some(node),
                None => {
                    if self.last_head == Some(old_head) {
                        self.last_head = Some(node);
                    }
                }
            }
            self.node_mut(old_head).clear_head();
        }
        if self.first_head == Some(old_head) {
            self.first_head = Some(node);
        }
    }

    fn find_head(&self, from: NodeId) -> Option<NodeId> {
        let mut cursor = Some(from);
        while let Some(id) = cursor {
            let node = self.node(id);
            if node.is_head {
                return Some(id);
            }
            cursor = node.prev;
        }
        None
    }

    fn insert_first(&mut self, value: T) {
        let id = self.alloc(value, None, None);
        self.first = Some(id);
        self.last = Some(id);
        self.len += 1;
        self.setup_single_group();
    }

    fn setup_single_group(&mut self) {
        match self.first {
            Some(first) => {
                let node = self.node_mut(first);
                node.is_head = true;
                node.prev_head = None;
                node.next_head = None;
                self.first_head = Some(first);
                self.last_head = Some(first);
                self.group_count = 1;
            }
            None => {
                self.first_head = None;
                self.last_head = None;
                self.group_count = 0;
            }
        }
    }

    fn take_values(&mut self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.len);
        let mut cursor = self.first;
        while let Some(id) = cursor {
            order.push(id);
            cursor = self.node(id).next;
        }
        let mut slots = std::mem::take(&mut self.slots);
        self.clear();
        order
            .into_iter()
            .filter_map(|id| slots[id.0].take().map(|node| node.value))
            .collect()
    }

    fn conform_index(&self, index: isize) -> BibleRefResult<usize> {
        let resolved = if index < 0 {
            index + self.len as isize
        } else {
            index
        };
        if resolved < 0 || resolved as usize >= self.len {
            return Err(index_error(index));
        }
        Ok(resolved as usize)
    }

    fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            let mut cursor = self.first;
            for _ in 0..index {
                cursor = cursor.and_then(|id| self.node(id).next);
            }
            cursor
        } else {
            let mut cursor = self.last;
            for _ in 0..(self.len - index - 1) {
                cursor = cursor.and_then(|id| self.node(id).prev);
            }
            cursor
        }
    }

    fn alloc(&mut self, value: T, prev: Option<NodeId>, next: Option<NodeId>) -> NodeId {
        let node = Node {
            value,
            prev,
            next,
            is_head: false,
            prev_head: None,
            next_head: None,
        };
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> T {
        match self.slots[id.0].take() {
            Some(node) => {
                self.free.push(id.0);
                node.value
            }
            None => unreachable!("node {} released twice", id.0),
        }
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.0] {
            Some(node) => node,
            None => unreachable!("stale node id {}", id.0),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Some(node) => node,
            None => unreachable!("stale node id {}", id.0),
        }
    }
}

fn index_error(index: isize) -> BibleRefError {
    BibleRefError::invalid_argument(format!("List index {} out of range", index))
}

impl<T: PartialEq> PartialEq for GroupedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, true)
    }
}

impl<T: Eq> Eq for GroupedList<T> {}

impl<T> FromIterator<T> for GroupedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for GroupedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value, false);
        }
    }
}

impl<'a, T> IntoIterator for &'a GroupedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for GroupedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.groups().iter()).finish()
    }
}

impl<T: Serialize> Serialize for GroupedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.groups().iter())
    }
}
