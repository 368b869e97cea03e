use std::collections::VecDeque;

use bounded_deque::{BoundedDeque, DequeError, OverflowPolicy};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::PushBack),
        3 => any::<i32>().prop_map(Op::PushFront),
        2 => Just(Op::PopBack),
        2 => Just(Op::PopFront),
        1 => Just(Op::Clear),
    ]
}

fn policy_strategy() -> impl Strategy<Value = OverflowPolicy> {
    prop_oneof![Just(OverflowPolicy::EvictOldest), Just(OverflowPolicy::RaiseOnFull)]
}

/// Reference behaviour expressed on an unbounded `VecDeque`.
struct Model {
    items: VecDeque<i32>,
    capacity: usize,
    policy: OverflowPolicy,
}

impl Model {
    fn push_back(&mut self, x: i32) -> Result<Option<i32>, DequeError> {
        if self.items.len() == self.capacity {
            match self.policy {
                OverflowPolicy::RaiseOnFull => return Err(DequeError::Full),
                OverflowPolicy::EvictOldest if self.capacity == 0 => return Ok(Some(x)),
                OverflowPolicy::EvictOldest => {
                    let evicted = self.items.pop_front();
                    self.items.push_back(x);
                    return Ok(evicted);
                }
            }
        }
        self.items.push_back(x);
        Ok(None)
    }

    fn push_front(&mut self, x: i32) -> Result<Option<i32>, DequeError> {
        if self.items.len() == self.capacity {
            match self.policy {
                OverflowPolicy::RaiseOnFull => return Err(DequeError::Full),
                OverflowPolicy::EvictOldest if self.capacity == 0 => return Ok(Some(x)),
                OverflowPolicy::EvictOldest => {
                    let evicted = self.items.pop_back();
                    self.items.push_front(x);
                    return Ok(evicted);
                }
            }
        }
        self.items.push_front(x);
        Ok(None)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_model(
        capacity in 0usize..6,
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut deque: BoundedDeque<i32> = BoundedDeque::with_policy(capacity, policy);
        let mut model = Model { items: VecDeque::new(), capacity, policy };

        for op in ops {
            match op {
                Op::PushBack(x) => prop_assert_eq!(deque.push_back(x), model.push_back(x)),
                Op::PushFront(x) => prop_assert_eq!(deque.push_front(x), model.push_front(x)),
                Op::PopBack => {
                    let expected = model.items.pop_back().ok_or(DequeError::Empty);
                    prop_assert_eq!(deque.pop_back(), expected);
                }
                Op::PopFront => {
                    let expected = model.items.pop_front().ok_or(DequeError::Empty);
                    prop_assert_eq!(deque.pop_front(), expected);
                }
                Op::Clear => {
                    deque.clear();
                    model.items.clear();
                }
            }
            prop_assert!(deque.len() <= deque.capacity());
            prop_assert_eq!(deque.len(), model.items.len());
            prop_assert_eq!(deque.is_empty(), model.items.is_empty());
            prop_assert!(deque.iter().eq(model.items.iter()));
        }
    }

    #[test]
    fn prop_indexing_matches_next_pops(
        capacity in 1usize..8,
        values in prop::collection::vec(any::<i32>(), 1..20),
    ) {
        let mut deque: BoundedDeque<i32> = BoundedDeque::new(capacity);
        deque.extend(values);
        let len = deque.len();
        let first = *deque.at(0).unwrap();
        let last = *deque.at(len - 1).unwrap();
        prop_assert_eq!(deque.get_signed(-1).copied(), Ok(last));
        prop_assert_eq!(deque.len(), len);
        prop_assert_eq!(deque.pop_front(), Ok(first));
        if len > 1 {
            prop_assert_eq!(deque.pop_back(), Ok(last));
        }
    }

    #[test]
    fn prop_push_pop_back_round_trip(
        capacity in 1usize..8,
        prefill in prop::collection::vec(any::<i32>(), 0..8),
        x in any::<i32>(),
    ) {
        let mut deque: BoundedDeque<i32> =
            BoundedDeque::with_policy(capacity, OverflowPolicy::RaiseOnFull);
        for v in prefill.into_iter().take(capacity - 1) {
            deque.push_back(v).unwrap();
        }
        let before = deque.len();
        prop_assert_eq!(deque.push_back(x), Ok(None));
        prop_assert_eq!(deque.pop_back(), Ok(x));
        prop_assert_eq!(deque.len(), before);
    }

    #[test]
    fn prop_window_keeps_newest(
        capacity in 0usize..8,
        values in prop::collection::vec(any::<i32>(), 0..32),
    ) {
        let deque: BoundedDeque<i32> =
            BoundedDeque::from_source(values.iter().copied(), capacity as isize, 0).unwrap();
        let skip = values.len().saturating_sub(capacity);
        prop_assert!(deque.iter().eq(values[skip..].iter()));
    }
}
