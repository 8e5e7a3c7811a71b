// Copyright (c) 2025 vivo Mobile Communication Co., Ltd.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The list container.

use crate::{
    cursor::{Cursor, CursorMut},
    debugging::check_len,
    error::ListError,
    iter::{Iter, IterMut},
    node::{self, Link},
};
use alloc::vec::Vec;
use core::{fmt, mem};

/// A singly linked list with an inline sentinel head.
///
/// Every structural change is an insert or erase right after some position,
/// and the sentinel is the position before the first element. That makes
/// the front just another position: [`push_front`](Self::push_front) is an
/// insert after the sentinel, [`pop_front`](Self::pop_front) an erase after
/// it. Interior edits go through [`CursorMut`].
pub struct ForwardList<T> {
    // The sentinel. Never holds a value, only the link to the first node.
    head: Link<T>,
    len: usize,
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ForwardList<T> {
    /// Creates an empty list. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the list is empty. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first element.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns the first element for modification.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Adds an element to the front of the list. O(1).
    pub fn push_front(&mut self, value: T) {
        node::splice(&mut self.head, value);
        self.len += 1;
        check_len(&self.head, self.len, "push_front");
    }

    /// Removes and returns the first element. O(1).
    ///
    /// Fails with [`ListError::OutOfRange`] on an empty list.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let value =
            node::unlink(&mut self.head).ok_or_else(|| ListError::OutOfRange.logged("pop_front"))?;
        self.len -= 1;
        check_len(&self.head, self.len, "pop_front");
        Ok(value)
    }

    /// Removes every element. O(n), without recursion.
    pub fn clear(&mut self) {
        let released = node::release(&mut self.head);
        self.len = 0;
        check_len(&self.head, self.len, "clear");
        log::trace!("forward_list: cleared {} nodes", released);
    }

    /// Exchanges the contents of two lists. O(1), no element is touched.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
        check_len(&self.head, self.len, "swap");
        check_len(&other.head, other.len, "swap");
        log::trace!("forward_list: swapped lists of {} and {}", self.len, other.len);
    }

    /// Cursor at the sentinel, the anchor for editing the front.
    #[inline]
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::before_begin(&self.head, &self.len)
    }

    /// Mutable cursor at the sentinel.
    #[inline]
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        let Self { head, len } = self;
        CursorMut::before_begin(head, len)
    }

    /// Cursor at the first element, equal to [`end`](Self::end) when empty.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::first(&self.head, &self.len)
    }

    /// Mutable cursor at the first element.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let Self { head, len } = self;
        CursorMut::first(head, len)
    }

    /// Cursor one past the last element. O(1).
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end(&self.len)
    }

    /// Mutable cursor one past the last element.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::end(&mut self.len)
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head, self.len)
    }

    /// Returns an iterator that allows modifying each element.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.head, self.len)
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        node::release(&mut self.head);
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    // The replacement chain is complete before `self` is touched, so a
    // panicking `T::clone` leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap(&mut replacement);
        log::trace!("forward_list: assigned {} elements", self.len);
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for ForwardList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Appends in iteration order, walking to the tail once per call.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let Self { head, len } = self;
        let mut link = head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        for value in iter {
            link = &mut node::splice(link, value).next;
            *len += 1;
        }
        check_len(&self.head, self.len, "extend");
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
