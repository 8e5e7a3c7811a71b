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

//! Forward-only positions inside a [`ForwardList`](crate::ForwardList).
//!
//! A cursor sits at one of three kinds of positions:
//! - before-begin: the list's sentinel, which holds no value
//! - a node: one element of the chain
//! - end: one past the last node
//!
//! [`Cursor`] reads the list and is `Copy`. [`CursorMut`] holds the list
//! exclusively and can insert or erase the node right after its position.
//! Both are the same [`BasicCursor`] type, parameterised by an [`Access`]
//! mode, and a `CursorMut` converts into a `Cursor` but not the other way.

use crate::{
    debugging::check_tail,
    error::ListError,
    node::{self, Link, Node},
};
use core::{fmt, mem};

mod sealed {
    pub trait Sealed {}
}

/// Borrow mode of a [`BasicCursor`].
///
/// Implemented by [`Shared`] and [`Exclusive`] only.
pub trait Access: sealed::Sealed {
    /// Reference through which the cursor reaches the chain.
    type Ref<'a, U: 'a>;

    #[doc(hidden)]
    fn get<'r, 'a: 'r, U: 'a>(r: &'r Self::Ref<'a, U>) -> &'r U;
}

/// Read-only access, see [`Cursor`].
#[derive(Debug)]
pub enum Shared {}

/// Exclusive access, see [`CursorMut`].
#[derive(Debug)]
pub enum Exclusive {}

impl sealed::Sealed for Shared {}
impl sealed::Sealed for Exclusive {}

impl Access for Shared {
    type Ref<'a, U: 'a> = &'a U;

    #[inline]
    fn get<'r, 'a: 'r, U: 'a>(r: &'r &'a U) -> &'r U {
        *r
    }
}

impl Access for Exclusive {
    type Ref<'a, U: 'a> = &'a mut U;

    #[inline]
    fn get<'r, 'a: 'r, U: 'a>(r: &'r &'a mut U) -> &'r U {
        &**r
    }
}

enum Position<'a, T: 'a, A: Access> {
    BeforeBegin(A::Ref<'a, Link<T>>),
    At(A::Ref<'a, Node<T>>),
    End,
}

impl<'a, T: 'a> Position<'a, T, Shared> {
    /// The node `link` owns, or end when the link is empty.
    fn after(link: &'a Link<T>) -> Self {
        match link.as_deref() {
            Some(node) => Position::At(node),
            None => Position::End,
        }
    }
}

impl<'a, T: 'a> Position<'a, T, Exclusive> {
    fn after_mut(link: &'a mut Link<T>) -> Self {
        match link.as_deref_mut() {
            Some(node) => Position::At(node),
            None => Position::End,
        }
    }
}

impl<T> Clone for Position<'_, T, Shared> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<'_, T, Shared> {}

// Identity of a position, used for cursor equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Sentinel(usize),
    Node(usize),
    End,
}

/// A forward cursor over a [`ForwardList`](crate::ForwardList).
///
/// Use the [`Cursor`] and [`CursorMut`] aliases rather than naming the access
/// mode directly.
pub struct BasicCursor<'a, T: 'a, A: Access> {
    position: Position<'a, T, A>,
    // Nodes at or before the position: 0 before-begin, the list length at end.
    passed: usize,
    len: A::Ref<'a, usize>,
}

/// Read-only cursor. Cheap to copy.
pub type Cursor<'a, T> = BasicCursor<'a, T, Shared>;

/// Cursor holding its list exclusively; it can edit the chain after itself.
pub type CursorMut<'a, T> = BasicCursor<'a, T, Exclusive>;

impl<'a, T: 'a, A: Access> BasicCursor<'a, T, A> {
    /// Is the cursor at the sentinel?
    #[inline]
    pub fn is_before_begin(&self) -> bool {
        matches!(self.position, Position::BeforeBegin(_))
    }

    /// Is the cursor one past the last node?
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    /// Returns the element at the cursor.
    ///
    /// Fails with [`ListError::InvalidOperation`] before-begin and with
    /// [`ListError::OutOfRange`] at end.
    pub fn current(&self) -> Result<&T, ListError> {
        match &self.position {
            Position::BeforeBegin(_) => Err(ListError::InvalidOperation.logged("current")),
            Position::At(node) => Ok(&A::get(node).value),
            Position::End => Err(ListError::OutOfRange.logged("current")),
        }
    }

    /// Returns the element right after the cursor, if there is one.
    pub fn peek_next(&self) -> Option<&T> {
        self.next_link()
            .and_then(|link| link.as_deref())
            .map(|node| &node.value)
    }

    /// Number of elements in the list the cursor walks.
    #[inline]
    pub fn list_len(&self) -> usize {
        *A::get(&self.len)
    }

    fn next_link(&self) -> Option<&Link<T>> {
        match &self.position {
            Position::BeforeBegin(link) => Some(A::get(link)),
            Position::At(node) => Some(&A::get(node).next),
            Position::End => None,
        }
    }

    fn check(&self, op: &str) {
        if let Some(tail) = self.next_link() {
            check_tail(tail, self.passed, self.list_len(), op);
        }
    }

    fn slot(&self) -> Slot {
        match &self.position {
            Position::BeforeBegin(link) => {
                Slot::Sentinel(A::get(link) as *const Link<T> as usize)
            }
            Position::At(node) => Slot::Node(A::get(node) as *const Node<T> as usize),
            Position::End => Slot::End,
        }
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn before_begin(head: &'a Link<T>, len: &'a usize) -> Self {
        Self {
            position: Position::BeforeBegin(head),
            passed: 0,
            len,
        }
    }

    pub(crate) fn first(head: &'a Link<T>, len: &'a usize) -> Self {
        Self {
            passed: usize::from(head.is_some()),
            position: Position::after(head),
            len,
        }
    }

    pub(crate) fn end(len: &'a usize) -> Self {
        Self {
            position: Position::End,
            passed: *len,
            len,
        }
    }

    /// Advances to the next position.
    ///
    /// Fails with [`ListError::OutOfRange`] at end, leaving the cursor there.
    pub fn move_next(&mut self) -> Result<(), ListError> {
        self.position = match self.position {
            Position::BeforeBegin(link) => Position::after(link),
            Position::At(node) => Position::after(&node.next),
            Position::End => return Err(ListError::OutOfRange.logged("move_next")),
        };
        if !self.is_end() {
            self.passed += 1;
        }
        Ok(())
    }

    /// Returns a cursor at the next position and leaves `self` where it is.
    pub fn following(&self) -> Result<Self, ListError> {
        let mut next = *self;
        next.move_next()?;
        Ok(next)
    }

    /// Like [`current`](BasicCursor::current), but the reference lives as
    /// long as the list borrow rather than the cursor.
    pub fn get(&self) -> Result<&'a T, ListError> {
        match self.position {
            Position::BeforeBegin(_) => Err(ListError::InvalidOperation.logged("get")),
            Position::At(node) => Ok(&node.value),
            Position::End => Err(ListError::OutOfRange.logged("get")),
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn before_begin(head: &'a mut Link<T>, len: &'a mut usize) -> Self {
        Self {
            position: Position::BeforeBegin(head),
            passed: 0,
            len,
        }
    }

    pub(crate) fn first(head: &'a mut Link<T>, len: &'a mut usize) -> Self {
        Self {
            passed: usize::from(head.is_some()),
            position: Position::after_mut(head),
            len,
        }
    }

    pub(crate) fn end(len: &'a mut usize) -> Self {
        Self {
            position: Position::End,
            passed: *len,
            len,
        }
    }

    /// Advances to the next position.
    ///
    /// Fails with [`ListError::OutOfRange`] at end, leaving the cursor there.
    pub fn move_next(&mut self) -> Result<(), ListError> {
        self.position = match mem::replace(&mut self.position, Position::End) {
            Position::BeforeBegin(link) => Position::after_mut(link),
            Position::At(node) => Position::after_mut(&mut node.next),
            Position::End => return Err(ListError::OutOfRange.logged("move_next")),
        };
        if !self.is_end() {
            self.passed += 1;
        }
        Ok(())
    }

    /// Returns the element at the cursor for modification.
    ///
    /// Fails like [`current`](BasicCursor::current).
    pub fn current_mut(&mut self) -> Result<&mut T, ListError> {
        match &mut self.position {
            Position::BeforeBegin(_) => Err(ListError::InvalidOperation.logged("current_mut")),
            Position::At(node) => Ok(&mut node.value),
            Position::End => Err(ListError::OutOfRange.logged("current_mut")),
        }
    }

    /// Inserts `value` right after the cursor and moves the cursor onto it.
    ///
    /// Before-begin inserts at the front of the list. Fails with
    /// [`ListError::InvalidOperation`] at end, since nothing can follow it.
    pub fn insert_after(&mut self, value: T) -> Result<(), ListError> {
        let link = match mem::replace(&mut self.position, Position::End) {
            Position::BeforeBegin(link) => link,
            Position::At(node) => &mut node.next,
            Position::End => return Err(ListError::InvalidOperation.logged("insert_after")),
        };
        self.position = Position::At(node::splice(link, value));
        self.passed += 1;
        *self.len += 1;
        self.check("insert_after");
        Ok(())
    }

    /// Removes the node right after the cursor and returns its value.
    ///
    /// The cursor stays put, so the node that followed the removed one is
    /// now next. Fails with [`ListError::OutOfRange`] when nothing follows the
    /// cursor and with [`ListError::InvalidOperation`] at end.
    pub fn erase_after(&mut self) -> Result<T, ListError> {
        let link = match &mut self.position {
            Position::BeforeBegin(link) => &mut **link,
            Position::At(node) => &mut node.next,
            Position::End => return Err(ListError::InvalidOperation.logged("erase_after")),
        };
        let value =
            node::unlink(link).ok_or_else(|| ListError::OutOfRange.logged("erase_after"))?;
        *self.len -= 1;
        self.check("erase_after");
        Ok(value)
    }

    /// Reborrows as a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        let position: Position<'_, T, Shared> = match &self.position {
            Position::BeforeBegin(link) => Position::BeforeBegin(&**link),
            Position::At(node) => Position::At(&**node),
            Position::End => Position::End,
        };
        BasicCursor {
            position,
            passed: self.passed,
            len: &*self.len,
        }
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        let BasicCursor {
            position,
            passed,
            len,
        } = cursor;
        let position: Position<'a, T, Shared> = match position {
            Position::BeforeBegin(link) => Position::BeforeBegin(&*link),
            Position::At(node) => Position::At(&*node),
            Position::End => Position::End,
        };
        BasicCursor {
            position,
            passed,
            len: &*len,
        }
    }
}

/// Cursors are equal when they sit at the same position, whatever their
/// access mode. End cursors of different lists compare equal, while their
/// before-begin cursors do not.
impl<'a, 'b, T, A: Access, B: Access> PartialEq<BasicCursor<'b, T, B>>
    for BasicCursor<'a, T, A>
{
    fn eq(&self, other: &BasicCursor<'b, T, B>) -> bool {
        self.slot() == other.slot()
    }
}

impl<T, A: Access> Eq for BasicCursor<'_, T, A> {}

impl<T: fmt::Debug, A: Access> fmt::Debug for BasicCursor<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            Position::BeforeBegin(_) => f.write_str("Cursor(BeforeBegin)"),
            Position::At(node) => f.debug_tuple("Cursor").field(&A::get(node).value).finish(),
            Position::End => f.write_str("Cursor(End)"),
        }
    }
}
