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

use forward_list::{swap, Cursor, ForwardList, ListError};

fn contents<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_round_trip() {
    let inputs: [&[i32]; 4] = [&[], &[1], &[3, 1, 2], &[5, 5, 5, 0, -1]];
    for input in inputs {
        let list: ForwardList<i32> = input.iter().copied().collect();
        assert_eq!(list.len(), input.len());
        assert_eq!(contents(&list), input);
    }
}

#[test]
fn test_edit_scenario() {
    let mut list = ForwardList::from([10, 20, 30]);

    let mut at_twenty = list.begin_mut();
    at_twenty.move_next().unwrap();
    assert_eq!(at_twenty.current(), Ok(&20));
    at_twenty.insert_after(25).unwrap();
    assert_eq!(contents(&list), [10, 20, 25, 30]);
    assert_eq!(list.len(), 4);

    let mut at_ten = list.begin_mut();
    assert_eq!(at_ten.erase_after(), Ok(20));
    assert_eq!(contents(&list), [10, 25, 30]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_front_editing_through_sentinel() {
    let mut list: ForwardList<String> = ForwardList::new();
    let mut cursor = list.before_begin_mut();
    cursor.insert_after("b".to_string()).unwrap();
    drop(cursor);
    list.before_begin_mut().insert_after("a".to_string()).unwrap();
    assert_eq!(contents(&list), ["a", "b"]);

    assert_eq!(list.before_begin_mut().erase_after().as_deref(), Ok("a"));
    assert_eq!(list.pop_front().as_deref(), Ok("b"));
    assert_eq!(list.pop_front(), Err(ListError::OutOfRange));
    assert!(list.is_empty());
}

#[test]
fn test_misuse_is_reported() {
    let mut list = ForwardList::from([1]);

    let end = list.end();
    assert_eq!(end.current(), Err(ListError::OutOfRange));
    assert_eq!(list.before_begin().current(), Err(ListError::InvalidOperation));

    let mut cursor = list.end_mut();
    assert_eq!(cursor.move_next(), Err(ListError::OutOfRange));
    assert_eq!(cursor.insert_after(2), Err(ListError::InvalidOperation));
    assert_eq!(cursor.erase_after(), Err(ListError::InvalidOperation));

    let mut last = list.begin_mut();
    assert_eq!(last.erase_after(), Err(ListError::OutOfRange));

    assert_eq!(contents(&list), [1]);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_clear_resets_positions() {
    let mut list: ForwardList<u8> = (0..=255).collect();
    assert_eq!(list.len(), 256);
    list.clear();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.begin(), list.end());
}

#[test]
fn test_copies_are_isolated() {
    let original = ForwardList::from([vec![1], vec![2, 3]]);
    let mut copy = original.clone();
    copy.front_mut().unwrap().push(9);
    copy.pop_front().unwrap();

    let mut assigned = ForwardList::from([vec![0]]);
    assigned.clone_from(&original);
    assigned.begin_mut().current_mut().unwrap().clear();

    assert_eq!(contents(&original), [vec![1], vec![2, 3]]);
    assert_eq!(contents(&copy), [vec![2, 3]]);
    assert_eq!(contents(&assigned), [vec![], vec![2, 3]]);
}

#[test]
fn test_swap_twice_restores() {
    let mut a = ForwardList::from(['x', 'y']);
    let mut b = ForwardList::new();
    swap(&mut a, &mut b);
    assert!(a.is_empty());
    assert_eq!(contents(&b), ['x', 'y']);
    swap(&mut a, &mut b);
    assert_eq!(contents(&a), ['x', 'y']);
    assert!(b.is_empty());
}

#[test]
fn test_ordering() {
    let l = |values: &[i32]| values.iter().copied().collect::<ForwardList<i32>>();
    assert!(l(&[1, 2]) < l(&[1, 2, 3]));
    assert!(l(&[1, 2, 3]) < l(&[1, 3]));
    assert!(l(&[]) < l(&[1]));
    assert!(l(&[1, 2]) < l(&[2, 1]));
    assert!(!(l(&[]) < l(&[])));
    assert_ne!(l(&[1, 2]), l(&[1, 2, 3]));
    assert_ne!(l(&[1, 2]), l(&[2, 1]));
}

#[test]
fn test_read_only_walk() {
    let list = ForwardList::from([1, 2, 3]);
    let mut cursor: Cursor<'_, i32> = list.before_begin();
    let mut sum = 0;
    while let Some(next) = cursor.peek_next() {
        sum += next;
        cursor.move_next().unwrap();
    }
    assert_eq!(sum, 6);
    assert_eq!(cursor.get(), Ok(&3));
    assert!(cursor.following().unwrap().is_end());

    cursor.move_next().unwrap();
    assert!(cursor.is_end());
    assert_eq!(cursor, list.end());
    assert_eq!(cursor.following(), Err(ListError::OutOfRange));
}
