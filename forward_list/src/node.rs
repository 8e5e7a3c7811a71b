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

//! Chain links of the list.
//!
//! A [`Link`] is the owning pointer to the rest of the chain. The list keeps
//! one inline link as its sentinel and every node owns the link to its
//! successor, so ownership runs strictly forward: node N owns node N+1.

use alloc::boxed::Box;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    const fn new(value: T, next: Link<T>) -> Self {
        Self { value, next }
    }
}

/// Inserts `value` right after `link`, taking over what `link` pointed to.
///
/// Returns the new node, which is now owned by `link`.
pub(crate) fn splice<T>(link: &mut Link<T>, value: T) -> &mut Node<T> {
    let next = link.take();
    link.insert(Box::new(Node::new(value, next)))
}

/// Detaches the node owned by `link` and hands back its value.
///
/// `link` is retargeted to the detached node's successor. Returns `None`
/// when `link` is the end of the chain.
pub(crate) fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.take()?;
    let Node { value, next } = *node;
    *link = next;
    Some(value)
}

/// Drops every node reachable from `link` without recursing.
///
/// Returns the number of released nodes.
pub(crate) fn release<T>(link: &mut Link<T>) -> usize {
    let mut released = 0;
    let mut current = link.take();
    while let Some(mut node) = current {
        current = node.next.take();
        released += 1;
    }
    released
}

/// Counts the nodes reachable from `link`.
#[cfg(any(test, feature = "debugging_list"))]
pub(crate) fn chain_len<T>(link: &Link<T>) -> usize {
    let mut count = 0;
    let mut current = link.as_deref();
    while let Some(node) = current {
        count += 1;
        current = node.next.as_deref();
    }
    count
}
