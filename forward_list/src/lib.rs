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

//! A singly linked list with an inline sentinel head and forward cursors.
//!
//! [`ForwardList`] owns a chain of boxed nodes. Positions inside the chain
//! are [`Cursor`]s (read-only) and [`CursorMut`]s (editing); a cursor can sit
//! before the first element, which makes inserting or erasing at the front
//! the same operation as anywhere else.
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([10, 20, 30]);
//! let mut cursor = list.begin_mut();
//! cursor.move_next()?;
//! cursor.insert_after(25)?;
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 20, 25, 30]);
//!
//! assert_eq!(list.begin_mut().erase_after()?, 20);
//! assert_eq!(list.len(), 3);
//! # Ok::<(), forward_list::ListError>(())
//! ```
//!
//! Misuse such as popping an empty list or dereferencing the end position
//! is reported as a [`ListError`] and leaves the list unchanged.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod cmp;
pub mod cursor;
mod debugging;
mod error;
pub mod iter;
mod list;
mod node;

pub use cmp::swap;
pub use cursor::{Access, BasicCursor, Cursor, CursorMut, Exclusive, Shared};
pub use error::ListError;
pub use list::ForwardList;
