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

//! Optional self-checks, enabled with the `debugging_list` feature.

use crate::node::Link;

/// Walks the chain after `op` and panics if `len` disagrees with it. Does
/// nothing without the `debugging_list` feature.
#[inline]
pub(crate) fn check_len<T>(head: &Link<T>, len: usize, op: &str) {
    check_tail(head, 0, len, op);
}

cfg_if::cfg_if! {
    if #[cfg(feature = "debugging_list")] {
        /// Like [`check_len`], for the part of the chain after `passed` nodes.
        pub(crate) fn check_tail<T>(tail: &Link<T>, passed: usize, len: usize, op: &str) {
            let chain = passed + crate::node::chain_len(tail);
            log::trace!("forward_list: {} checked, len {} chain {}", op, len, chain);
            assert_eq!(chain, len, "forward_list: {} broke the length invariant", op);
        }
    } else {
        #[inline(always)]
        pub(crate) fn check_tail<T>(_tail: &Link<T>, _passed: usize, _len: usize, _op: &str) {}
    }
}

#[cfg(all(test, feature = "debugging_list"))]
mod tests {
    use super::*;
    use crate::node::splice;

    fn chain(values: &[i32]) -> Link<i32> {
        let mut head = None;
        for value in values.iter().rev() {
            splice(&mut head, *value);
        }
        head
    }

    #[test]
    fn test_consistent_chain_passes() {
        let head = chain(&[1, 2, 3]);
        check_len(&head, 3, "test");
        check_tail(&head.as_ref().unwrap().next, 1, 3, "test");
        check_len::<i32>(&None, 0, "test");
    }

    #[test]
    #[should_panic(expected = "broke the length invariant")]
    fn test_len_too_large() {
        let head = chain(&[1, 2]);
        check_len(&head, 3, "test");
    }

    #[test]
    #[should_panic(expected = "broke the length invariant")]
    fn test_tail_disagrees() {
        let head = chain(&[1, 2, 3]);
        check_tail(&head.as_ref().unwrap().next, 2, 3, "test");
    }
}
