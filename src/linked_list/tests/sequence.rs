use alloc::{collections::VecDeque, rc::Rc};
use core::fmt::Debug;
use std::{format, vec, vec::Vec};

use proptest::prelude::*;

use crate::{error::CollectionError, linked_list::sequence::Sequence};

/// Checks that both traversals agree with each other and with `len`, and
/// returns the values from tail to head.
fn linked<T: Clone + PartialEq + Debug>(seq: &Sequence<T>) -> Vec<T> {
    let forward: Vec<T> = seq.walk_next().into_iter().cloned().collect();
    let mut backward: Vec<T> = seq.walk_prev().into_iter().cloned().collect();
    backward.reverse();
    assert_eq!(forward.len(), seq.len());
    assert_eq!(backward.len(), seq.len());
    assert_eq!(seq.is_empty(), seq.len() == 0);
    assert_eq!(forward, backward);
    forward
}

#[test]
fn test_push_pop_head_reverses() {
    let mut seq = Sequence::new();
    for value in 1..=4 {
        seq.push_head(value);
    }
    assert_eq!(linked(&seq), vec![1, 2, 3, 4]);

    let drained: Vec<_> = (0..4).map(|_| seq.pop_head().unwrap()).collect();
    assert_eq!(drained, vec![4, 3, 2, 1]);
    assert!(seq.is_empty());
}

#[test]
fn test_push_pop_tail_reverses() {
    let mut seq = Sequence::new();
    for value in 1..=4 {
        seq.push_tail(value);
    }
    assert_eq!(linked(&seq), vec![4, 3, 2, 1]);

    let drained: Vec<_> = (0..4).map(|_| seq.pop_tail().unwrap()).collect();
    assert_eq!(drained, vec![4, 3, 2, 1]);
    assert!(seq.is_empty());
}

#[test]
fn test_cross_end_keeps_order() {
    let mut seq = Sequence::new();
    for value in ["a", "b", "c"] {
        seq.push_tail(value);
    }
    assert_eq!(seq.pop_head(), Ok("a"));
    assert_eq!(seq.pop_head(), Ok("b"));
    assert_eq!(seq.pop_head(), Ok("c"));
}

#[test]
fn test_empty_errors() {
    let mut seq = Sequence::<i32>::new();
    assert_eq!(seq.pop_head(), Err(CollectionError::Empty));
    assert_eq!(seq.pop_tail(), Err(CollectionError::Empty));
    assert_eq!(seq.peek_head(), Err(CollectionError::Empty));
    assert_eq!(seq.peek_tail(), Err(CollectionError::Empty));
    assert_eq!(seq.remove(&1), Err(CollectionError::Empty));

    seq.push_head(1);
    seq.push_tail(2);
    seq.pop_tail().unwrap();
    seq.pop_tail().unwrap();

    assert_eq!(seq.pop_head(), Err(CollectionError::Empty));
    assert_eq!(seq.remove(&1), Err(CollectionError::Empty));
}

#[test]
fn test_single_element() {
    let mut seq = Sequence::new();
    seq.push_tail(42);
    assert_eq!(seq.peek_head(), Ok(&42));
    assert_eq!(seq.peek_tail(), Ok(&42));
    assert_eq!(linked(&seq), vec![42]);

    assert_eq!(seq.pop_head(), Ok(42));
    assert_eq!(seq.peek_tail(), Err(CollectionError::Empty));
    assert_eq!(seq.pop_tail(), Err(CollectionError::Empty));

    seq.push_head(7);
    assert_eq!(seq.pop_tail(), Ok(7));
    assert_eq!(seq.peek_head(), Err(CollectionError::Empty));
}

#[test]
fn test_remove_middle() {
    let mut seq = Sequence::new();
    for value in ['A', 'B', 'C'] {
        seq.push_tail(value);
    }
    assert_eq!(seq.peek_head(), Ok(&'A'));
    assert_eq!(seq.peek_tail(), Ok(&'C'));

    assert_eq!(seq.remove(&'B'), Ok('B'));
    assert_eq!(linked(&seq), vec!['C', 'A']);
    assert_eq!(seq.remove(&'B'), Err(CollectionError::NotFound));

    assert_eq!(seq.pop_head(), Ok('A'));
    assert_eq!(seq.pop_tail(), Ok('C'));
    assert!(seq.is_empty());
}

#[test]
fn test_remove_missing() {
    let mut seq = Sequence::new();
    seq.push_head(1);
    seq.push_head(2);
    assert_eq!(seq.remove(&3), Err(CollectionError::NotFound));
    assert_eq!(linked(&seq), vec![1, 2]);
}

// Removing an end node re-points that end, so head and tail always name a
// linked node.
#[test]
fn test_remove_at_ends_repoints_head_and_tail() {
    let mut seq = Sequence::new();
    for value in 1..=4 {
        seq.push_tail(value);
    }
    // tail -> head: 4 3 2 1

    assert_eq!(seq.remove(&1), Ok(1));
    assert_eq!(seq.peek_head(), Ok(&2));
    assert_eq!(linked(&seq), vec![4, 3, 2]);

    assert_eq!(seq.remove(&4), Ok(4));
    assert_eq!(seq.peek_tail(), Ok(&3));
    assert_eq!(linked(&seq), vec![3, 2]);

    assert_eq!(seq.pop_head(), Ok(2));
    assert_eq!(seq.remove(&3), Ok(3));
    assert!(seq.is_empty());
    assert_eq!(seq.peek_head(), Err(CollectionError::Empty));
    assert_eq!(seq.peek_tail(), Err(CollectionError::Empty));

    seq.push_head(5);
    assert_eq!(linked(&seq), vec![5]);
}

#[test]
fn test_remove_first_match_from_tail() {
    let mut seq = Sequence::new();
    seq.push_tail((1, "near head"));
    seq.push_tail((2, "middle"));
    seq.push_tail((1, "near tail"));

    assert_eq!(seq.remove_by(|(id, _)| *id == 1), Ok((1, "near tail")));
    assert_eq!(seq.remove_by(|(id, _)| *id == 1), Ok((1, "near head")));
    assert_eq!(seq.len(), 1);
}

#[test]
fn test_remove_by_identity() {
    let a = Rc::new(5);
    let b = Rc::new(5);
    let mut seq = Sequence::new();
    seq.push_tail(Rc::clone(&a));
    seq.push_tail(Rc::clone(&b));

    // Equal by value, so `remove` takes the first one scanned from the tail.
    let removed = seq.remove_by(|v| Rc::ptr_eq(v, &a)).unwrap();
    assert!(Rc::ptr_eq(&removed, &a));
    assert!(Rc::ptr_eq(seq.peek_head().unwrap(), &b));
}

#[test]
fn test_debug_lists_tail_to_head() {
    let mut seq = Sequence::with_capacity(4);
    seq.push_head(2);
    seq.push_head(3);
    seq.push_tail(1);
    assert_eq!(format!("{:?}", seq), "[1, 2, 3]");
}

#[derive(Debug, Clone)]
enum Op {
    PushHead(u8),
    PushTail(u8),
    PopHead,
    PopTail,
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::PushHead),
        any::<u8>().prop_map(Op::PushTail),
        Just(Op::PopHead),
        Just(Op::PopTail),
        (0u8..16).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_push_head_pop_head_reverses(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut seq = Sequence::new();
        for value in &values {
            seq.push_head(*value);
        }
        let mut drained = Vec::new();
        while let Ok(value) = seq.pop_head() {
            drained.push(value);
        }
        drained.reverse();
        prop_assert_eq!(drained, values);
    }

    #[test]
    fn prop_push_tail_pop_head_keeps_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut seq = Sequence::new();
        for value in &values {
            seq.push_tail(*value);
        }
        let mut drained = Vec::new();
        while let Ok(value) = seq.pop_head() {
            drained.push(value);
        }
        prop_assert_eq!(drained, values);
    }

    // Model: front of the deque is the tail, back is the head.
    #[test]
    fn prop_matches_deque_model(ops in prop::collection::vec(op(), 0..128)) {
        let mut seq = Sequence::new();
        let mut model: VecDeque<u8> = VecDeque::new();
        let (mut pushes, mut removals) = (0usize, 0usize);

        for op in ops {
            match op {
                Op::PushHead(v) => {
                    seq.push_head(v);
                    model.push_back(v);
                    pushes += 1;
                }
                Op::PushTail(v) => {
                    seq.push_tail(v);
                    model.push_front(v);
                    pushes += 1;
                }
                Op::PopHead => {
                    let expected = model.pop_back().ok_or(CollectionError::Empty);
                    prop_assert_eq!(seq.pop_head(), expected);
                    removals += usize::from(expected.is_ok());
                }
                Op::PopTail => {
                    let expected = model.pop_front().ok_or(CollectionError::Empty);
                    prop_assert_eq!(seq.pop_tail(), expected);
                    removals += usize::from(expected.is_ok());
                }
                Op::Remove(v) => {
                    let expected = if model.is_empty() {
                        Err(CollectionError::Empty)
                    } else {
                        match model.iter().position(|x| *x == v) {
                            Some(pos) => Ok(model.remove(pos).unwrap()),
                            None => Err(CollectionError::NotFound),
                        }
                    };
                    prop_assert_eq!(seq.remove(&v), expected);
                    removals += usize::from(expected.is_ok());
                }
            }

            prop_assert_eq!(seq.len(), pushes - removals);
            prop_assert_eq!(linked(&seq), model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(seq.peek_tail().ok(), model.front());
            prop_assert_eq!(seq.peek_head().ok(), model.back());
        }
    }
}
