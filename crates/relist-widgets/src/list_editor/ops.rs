#![forbid(unsafe_code)]

//! Pure sequence transforms behind the list editor.
//!
//! Each function reads the current sequence and returns a fresh vector; the
//! input is never modified. Transforms that can legitimately do nothing
//! (`swapped_up` on the first element, `moved` onto itself, ...) return
//! `Ok(None)` so the caller can skip publishing.
//!
//! # Invariants
//!
//! 1. `appended` grows the length by one, `removed` shrinks it by one; every
//!    other transform preserves it.
//! 2. Elements not named by the operation keep their relative order.
//! 3. Out-of-range indices fail with [`ListEditError::IndexOutOfRange`].

use crate::error::{EditOp, ListEditError};

fn check<T>(seq: &[T], op: EditOp, index: usize) -> Result<(), ListEditError> {
    if index < seq.len() {
        Ok(())
    } else {
        Err(ListEditError::IndexOutOfRange {
            op,
            index,
            len: seq.len(),
        })
    }
}

/// `seq ++ [value]`.
#[must_use]
pub fn appended<T: Clone>(seq: &[T], value: T) -> Vec<T> {
    let mut next = Vec::with_capacity(seq.len() + 1);
    next.extend_from_slice(seq);
    next.push(value);
    next
}

/// `seq` without the element at `index`.
pub fn removed<T: Clone>(seq: &[T], index: usize) -> Result<Vec<T>, ListEditError> {
    check(seq, EditOp::Remove, index)?;
    let mut next = seq.to_vec();
    next.remove(index);
    Ok(next)
}

/// Swap `index` with its predecessor. `None` when `index == 0`.
pub fn swapped_up<T: Clone>(seq: &[T], index: usize) -> Result<Option<Vec<T>>, ListEditError> {
    check(seq, EditOp::MoveUp, index)?;
    if index == 0 {
        return Ok(None);
    }
    let mut next = seq.to_vec();
    next.swap(index - 1, index);
    Ok(Some(next))
}

/// Swap `index` with its successor. `None` when `index` is the last element.
pub fn swapped_down<T: Clone>(seq: &[T], index: usize) -> Result<Option<Vec<T>>, ListEditError> {
    check(seq, EditOp::MoveDown, index)?;
    if index + 1 == seq.len() {
        return Ok(None);
    }
    let mut next = seq.to_vec();
    next.swap(index, index + 1);
    Ok(Some(next))
}

/// Take the element at `from` out and reinsert it at `to` in the shortened
/// sequence. `None` when `from == to`.
pub fn moved<T: Clone>(seq: &[T], from: usize, to: usize) -> Result<Option<Vec<T>>, ListEditError> {
    check(seq, EditOp::Reorder, from)?;
    check(seq, EditOp::Reorder, to)?;
    if from == to {
        return Ok(None);
    }
    let mut next = seq.to_vec();
    let item = next.remove(from);
    next.insert(to, item);
    Ok(Some(next))
}

/// `seq` with the element at `index` replaced by `value`.
pub fn replaced<T: Clone>(seq: &[T], index: usize, value: T) -> Result<Vec<T>, ListEditError> {
    check(seq, EditOp::Update, index)?;
    let mut next = seq.to_vec();
    next[index] = value;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_to_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(appended(&empty, 7), vec![7]);
    }

    #[test]
    fn remove_middle() {
        assert_eq!(removed(&[1, 2, 3], 1).unwrap(), vec![1, 3]);
    }

    #[test]
    fn remove_out_of_range() {
        assert_eq!(
            removed(&[1, 2, 3], 3),
            Err(ListEditError::IndexOutOfRange {
                op: EditOp::Remove,
                index: 3,
                len: 3
            })
        );
    }

    #[test]
    fn move_up_then_down_scenario() {
        let s = [1, 2, 3, 4, 5];
        let up = swapped_up(&s, 2).unwrap().unwrap();
        assert_eq!(up, vec![1, 3, 2, 4, 5]);
        let down = swapped_down(&up, 1).unwrap().unwrap();
        assert_eq!(down, s.to_vec());
    }

    #[test]
    fn boundary_swaps_are_noops() {
        assert_eq!(swapped_up(&[1, 2], 0).unwrap(), None);
        assert_eq!(swapped_down(&[1, 2], 1).unwrap(), None);
    }

    #[test]
    fn swaps_reject_out_of_range() {
        assert!(swapped_up(&[1, 2], 2).is_err());
        assert!(swapped_down(&[1, 2], 5).is_err());
        let empty: [u8; 0] = [];
        assert!(swapped_down(&empty, 0).is_err());
    }

    #[test]
    fn reorder_first_to_last() {
        assert_eq!(moved(&[1, 2, 3], 0, 2).unwrap(), Some(vec![2, 3, 1]));
    }

    #[test]
    fn reorder_last_to_first() {
        assert_eq!(moved(&[1, 2, 3], 2, 0).unwrap(), Some(vec![3, 1, 2]));
    }

    #[test]
    fn reorder_onto_itself_is_noop() {
        assert_eq!(moved(&['a', 'b'], 1, 1).unwrap(), None);
    }

    #[test]
    fn reorder_checks_both_indices() {
        let err = moved(&[1, 2, 3], 0, 3).unwrap_err();
        assert_eq!(
            err,
            ListEditError::IndexOutOfRange {
                op: EditOp::Reorder,
                index: 3,
                len: 3
            }
        );
        assert!(moved(&[1, 2, 3], 9, 0).is_err());
    }

    #[test]
    fn replace_in_place() {
        assert_eq!(replaced(&["a", "b"], 1, "z").unwrap(), vec!["a", "z"]);
        assert!(replaced(&["a"], 1, "z").is_err());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn seq_and_index() -> impl Strategy<Value = (Vec<i32>, usize)> {
            proptest::collection::vec(any::<i32>(), 1..24)
                .prop_flat_map(|v| {
                    let n = v.len();
                    (Just(v), 0..n)
                })
        }

        fn sorted(mut v: Vec<i32>) -> Vec<i32> {
            v.sort_unstable();
            v
        }

        proptest! {
            #[test]
            fn append_grows_by_one(seq in proptest::collection::vec(any::<i32>(), 0..24), v in any::<i32>()) {
                let next = appended(&seq, v);
                prop_assert_eq!(next.len(), seq.len() + 1);
                prop_assert_eq!(next[seq.len()], v);
                prop_assert_eq!(&next[..seq.len()], &seq[..]);
            }

            #[test]
            fn remove_deletes_exactly_one((seq, i) in seq_and_index()) {
                let next = removed(&seq, i).unwrap();
                let mut expected = seq.clone();
                expected.remove(i);
                prop_assert_eq!(next, expected);
            }

            #[test]
            fn move_up_then_down_is_identity((seq, i) in seq_and_index()) {
                prop_assume!(i > 0);
                let up = swapped_up(&seq, i).unwrap().unwrap();
                let back = swapped_down(&up, i - 1).unwrap().unwrap();
                prop_assert_eq!(back, seq);
            }

            #[test]
            fn reorder_conserves_elements((seq, from) in seq_and_index(), to_seed in any::<usize>()) {
                let to = to_seed % seq.len();
                let next = moved(&seq, from, to).unwrap().unwrap_or_else(|| seq.clone());
                prop_assert_eq!(next.len(), seq.len());
                prop_assert_eq!(next[to], seq[from]);
                prop_assert_eq!(sorted(next.clone()), sorted(seq.clone()));

                let mut rest_before = seq.clone();
                rest_before.remove(from);
                let mut rest_after = next;
                rest_after.remove(to);
                prop_assert_eq!(rest_after, rest_before);
            }

            #[test]
            fn rewrite_with_same_value_is_unchanged((seq, i) in seq_and_index()) {
                let next = replaced(&seq, i, seq[i]).unwrap();
                prop_assert_eq!(next, seq);
            }
        }
    }
}
