use chainseq::{Sequence, SequenceError};
use rand::Rng;

use crate::helpers::{random_values, rng, values};

#[test]
fn construction_round_trip() {
    let source = vec![4, 8, 15, 16, 23, 42];
    let seq: Sequence<i32> = source.iter().copied().collect();
    assert_eq!(values(&seq), source);
    assert_eq!(seq.len(), source.len());

    let single = Sequence::from_value(vec![1, 2]);
    assert_eq!(single.len(), 1);
    assert_eq!(single.get(0), Ok(&vec![1, 2]));
}

#[test]
fn empty_sequence() {
    let seq: Sequence<i32> = Sequence::from_elements([]);
    assert_eq!(seq.len(), 0);
    assert!(seq.is_empty());
    assert_eq!(
        seq.get(0),
        Err(SequenceError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(seq.to_string(), "[]");
}

#[test]
fn concat_and_extend_append_in_order() {
    let mut seq = Sequence::from_value(1);
    seq.concat([2, 3]);
    seq.extend(vec![4]);
    seq.append(5);
    assert_eq!(values(&seq), vec![1, 2, 3, 4, 5]);
}

#[test]
fn get_out_of_range_reports_index_and_len() {
    let seq = Sequence::from_elements([1, 2, 3]);
    let err = seq.get(5).unwrap_err();
    assert_eq!(err, SequenceError::IndexOutOfRange { index: 5, len: 3 });
    assert_eq!(
        err.to_string(),
        "index 5 is out of range for sequence of length 3"
    );
}

#[test]
fn out_of_range_rejected_by_every_positional_operation() {
    let mut seq = Sequence::from_elements([1, 2, 3]);
    let past_end = SequenceError::IndexOutOfRange { index: 3, len: 3 };
    let before_start = SequenceError::IndexOutOfRange { index: -4, len: 3 };

    assert_eq!(seq.get(3), Err(past_end));
    assert_eq!(seq.get(-4), Err(before_start));
    assert_eq!(seq.set(3, 9), Err(past_end));
    assert_eq!(seq.set(-4, 9), Err(before_start));
    assert_eq!(seq.delete(3), Err(past_end));
    assert_eq!(seq.delete(-4), Err(before_start));
    assert_eq!(seq.swap(0, 3), Err(past_end));
    assert_eq!(
        seq.insert(4, 9),
        Err(SequenceError::IndexOutOfRange { index: 4, len: 3 })
    );
    assert_eq!(seq.insert(-4, 9), Err(before_start));

    assert_eq!(values(&seq), vec![1, 2, 3]);
}

#[test]
fn set_then_get_returns_value() {
    let mut r = rng(21);
    for len in 1..20 {
        let mut seq = Sequence::from_elements(random_values(&mut r, len));
        let index = r.gen_range(-(len as isize)..len as isize);
        let previous = *seq.get(index).unwrap();

        assert_eq!(seq.set(index, 100), Ok(previous));
        assert_eq!(seq.get(index), Ok(&100));
        assert_eq!(seq.len(), len);
    }
}

#[test]
fn delete_preserves_relative_order() {
    let mut r = rng(5);
    for len in 1..20 {
        let source = random_values(&mut r, len);
        let mut seq = Sequence::from_elements(source.clone());
        let index = r.gen_range(-(len as isize)..len as isize);
        let pos = index.rem_euclid(len as isize) as usize;

        let mut expected = source.clone();
        let removed = expected.remove(pos);

        assert_eq!(seq.delete(index), Ok(removed));
        assert_eq!(seq.len(), len - 1);
        assert_eq!(values(&seq), expected);
    }
}

#[test]
fn insert_then_delete_restores_sequence() {
    let mut r = rng(9);
    for len in 1..20 {
        let source = random_values(&mut r, len);
        let mut seq = Sequence::from_elements(source.clone());
        let index = r.gen_range(0..=len as isize);

        seq.insert(index, 77).unwrap();
        assert_eq!(seq.len(), len + 1);
        assert_eq!(seq.delete(index), Ok(77));
        assert_eq!(values(&seq), source);
    }
}

#[test]
fn insert_positions() {
    let mut seq = Sequence::from_elements([1, 3]);
    seq.insert(1, 2).unwrap();
    seq.insert(0, 0).unwrap();
    seq.insert(4, 4).unwrap();
    seq.insert(-1, 35).unwrap();
    assert_eq!(values(&seq), vec![0, 1, 2, 3, 35, 4]);
}

#[test]
fn insert_at_len_then_delete_front() {
    let mut seq = Sequence::from_elements([1]);
    seq.insert(1, 2).unwrap();
    assert_eq!(values(&seq), vec![1, 2]);
    seq.delete(0).unwrap();
    assert_eq!(values(&seq), vec![2]);
}

#[test]
fn insert_into_empty() {
    let mut seq = Sequence::new();
    seq.insert(0, "only").unwrap();
    assert_eq!(values(&seq), vec!["only"]);
}

#[test]
fn delete_until_empty_then_reuse() {
    let mut seq = Sequence::from_elements(0..4);
    while !seq.is_empty() {
        seq.delete(-1).unwrap();
    }
    assert_eq!(seq.iter().count(), 0);
    seq.append(10);
    assert_eq!(values(&seq), vec![10]);
}

#[test]
fn swap_scenario() {
    let mut seq = Sequence::from_elements([3, 1, 2]);
    assert_eq!(seq.get(0), Ok(&3));
    seq.swap(0, 1).unwrap();
    assert_eq!(seq.get(0), Ok(&1));
    assert_eq!(seq.get(1), Ok(&3));
    seq.swap(-1, 0).unwrap();
    assert_eq!(values(&seq), vec![2, 3, 1]);
}

#[test]
fn index_operators() {
    let mut seq = Sequence::from_elements([10, 20, 30]);
    seq[1] += 5;
    seq[-1] = 0;
    assert_eq!(seq[0], 10);
    assert_eq!(values(&seq), vec![10, 25, 0]);
}

#[test]
#[should_panic(expected = "index 3 is out of range for sequence of length 3")]
fn index_operator_panics_out_of_range() {
    let seq = Sequence::from_elements([1, 2, 3]);
    let _value = &seq[3];
}

#[test]
fn slices_copy_values() {
    let seq = Sequence::from_elements(0..10);
    assert_eq!(seq.slice(None, None, 1), Ok((0..10).collect::<Vec<_>>()));
    assert_eq!(seq.slice(Some(2), Some(8), 3), Ok(vec![2, 5]));
    assert_eq!(seq.slice(Some(-3), None, 1), Ok(vec![7, 8, 9]));
    assert_eq!(seq.slice(None, None, -4), Ok(vec![9, 5, 1]));
    assert_eq!(seq.slice(Some(20), Some(30), 1), Ok(vec![]));
    assert_eq!(seq.slice(None, None, 0), Err(SequenceError::ZeroStep));

    assert_eq!(seq.slice(Some(1), None, isize::MAX), Ok(vec![1]));
    assert_eq!(seq.slice(None, None, isize::MIN), Ok(vec![9]));

    let mut copy = seq.slice(Some(0), Some(1), 1).unwrap();
    copy[0] = 99;
    assert_eq!(seq.get(0), Ok(&0));
}

#[test]
fn display_renders_in_order() {
    let seq = Sequence::from_elements(["a", "b"]);
    assert_eq!(seq.to_string(), "[a, b]");
    assert_eq!(format!("{seq:?}"), "[\"a\", \"b\"]");
}

#[test]
fn iteration_is_restartable() {
    let seq = Sequence::from_elements([1, 2, 3]);
    let mut first = seq.iter();
    assert_eq!(first.next(), Some(&1));

    let second: Vec<_> = (&seq).into_iter().copied().collect();
    assert_eq!(second, vec![1, 2, 3]);
    assert_eq!(first.next(), Some(&2));

    let mut sum = 0;
    for value in &seq {
        sum += value;
    }
    assert_eq!(sum, 6);
}

#[test]
fn equality_is_elementwise() {
    let a = Sequence::from_elements([1, 2]);
    let mut b = Sequence::from_elements([2, 1]);
    assert_ne!(a, b);
    b.swap(0, 1).unwrap();
    assert_eq!(a, b);
}
