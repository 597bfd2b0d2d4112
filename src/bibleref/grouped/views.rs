//! Borrowing iterators and group views

use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::FusedIterator;

use super::{GroupedList, NodeId};

/// Iterator over every value of a [`GroupedList`], front to back
pub struct Iter<'a, T> {
    list: &'a GroupedList<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(
        list: &'a GroupedList<T>,
        front: Option<NodeId>,
        back: Option<NodeId>,
        remaining: usize,
    ) -> Self {
        Self {
            list,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
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
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// The groups of a [`GroupedList`], indexable and iterable
pub struct Groups<'a, T> {
    list: &'a GroupedList<T>,
}

impl<'a, T> Groups<'a, T> {
    pub(super) fn new(list: &'a GroupedList<T>) -> Self {
        Self { list }
    }

    pub fn len(&self) -> usize {
        self.list.group_count
    }

    pub fn is_empty(&self) -> bool {
        self.list.group_count == 0
    }

    pub fn get(&self, index: usize) -> Option<Group<'a, T>> {
        self.iter().nth(index)
    }

    pub fn iter(&self) -> GroupsIter<'a, T> {
        GroupsIter {
            list: self.list,
            next_head: self.list.first_head,
        }
    }
}

impl<'a, T> IntoIterator for Groups<'a, T> {
    type Item = Group<'a, T>;
    type IntoIter = GroupsIter<'a, T>;

    fn into_iter(self) -> GroupsIter<'a, T> {
        self.iter()
    }
}

/// Iterator over the groups of a [`GroupedList`]
pub struct GroupsIter<'a, T> {
    list: &'a GroupedList<T>,
    next_head: Option<NodeId>,
}

impl<'a, T> Iterator for GroupsIter<'a, T> {
    type Item = Group<'a, T>;

    fn next(&mut self) -> Option<Group<'a, T>> {
        let head = self.next_head?;
        self.next_head = self.list.node(head).next_head;
        Some(Group {
            list: self.list,
            head,
        })
    }
}

/// One group: its head node and everything up to the next head
pub struct Group<'a, T> {
    list: &'a GroupedList<T>,
    head: NodeId,
}

impl<'a, T> Group<'a, T> {
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.iter().nth(index)
    }

    pub fn first(&self) -> &'a T {
        &self.list.node(self.head).value
    }

    pub fn iter(&self) -> GroupIter<'a, T> {
        GroupIter {
            list: self.list,
            next: Some(self.head),
            started: false,
        }
    }
}

impl<'a, T> IntoIterator for Group<'a, T> {
    type Item = &'a T;
    type IntoIter = GroupIter<'a, T>;

    fn into_iter(self) -> GroupIter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Group<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for Group<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Iterator over the values of one [`Group`]
pub struct GroupIter<'a, T> {
    list: &'a GroupedList<T>,
    next: Option<NodeId>,
    started: bool,
}

impl<'a, T> Iterator for GroupIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.next?;
        let node = self.list.node(id);
        // Stop at the head of the following group
        if self.started && node.is_head {
            self.next = None;
            return None;
        }
        self.started = true;
        self.next = node.next;
        Some(&node.value)
    }
}
