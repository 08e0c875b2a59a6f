use anyhow::Result;
use ironseq::testing::*;
use ironseq::{eager, ChunkEvery, Leftover, SeqError};

#[test]
fn eager_chunking() -> Result<()> {
    assert_eq!(eager::chunk_every(1..=5, 2)?, vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert_eq!(
        eager::chunk_every_step(vec!['a', 'b', 'c'], 2, 1)?,
        vec![vec!['a', 'b'], vec!['b', 'c'], vec!['c']]
    );
    assert_eq!(
        eager::chunk_every_with(1..=5, ChunkEvery::new(2).leftover(Leftover::Discard))?,
        vec![vec![1, 2], vec![3, 4]]
    );
    assert_eq!(eager::chunk_by(["a", "b", "bb", "c"], |s| s.len()), vec![vec!["a", "b"], vec!["bb"], vec!["c"]]);
    Ok(())
}

#[test]
fn eager_strides() -> Result<()> {
    assert_eq!(eager::drop_every(1..=6, 3)?, vec![2, 3, 5, 6]);
    assert_eq!(eager::take_every(1..=6, 3)?, vec![1, 4]);
    assert_eq!(eager::map_every(1..=6, 3, |x| x * 10)?, vec![1, 2, 30, 4, 5, 60]);
    assert!(matches!(
        eager::take_every(1..=6, 0),
        Err(SeqError::InvalidArgument { op: "take_every", .. })
    ));
    Ok(())
}

#[test]
fn eager_element_ops() -> Result<()> {
    assert_eq!(eager::map(vec![1, 2], |x| x + 1), vec![2, 3]);
    assert_eq!(eager::filter(1..10, |x| x % 4 == 0), vec![4, 8]);
    assert_eq!(eager::dedup([1, 1, 2, 1]), vec![1, 2, 1]);
    assert_eq!(eager::dedup_by([10, 11, 20, 12], |x| x / 10), vec![10, 20, 12]);
    assert_eq!(eager::uniq([1, 2, 1, 3]), vec![1, 2, 3]);
    assert_eq!(eager::intersperse([1, 2], 0), vec![1, 0, 2]);
    assert_eq!(eager::map_intersperse([1, 2], "|".to_string(), |x| x.to_string()), vec!["1", "|", "2"]);
    Ok(())
}

#[test]
fn eager_transforms() -> Result<()> {
    assert_eq!(eager::reject(1..=6, |x| x % 3 == 0), vec![1, 2, 4, 5]);
    assert_eq!(eager::flat_map(["ab", "c"], |s| s.chars().collect::<Vec<_>>()), vec!['a', 'b', 'c']);
    assert_eq!(eager::concat(vec![vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
    assert_eq!(eager::flatten(vec![vec!["x"], vec!["y", "z"]]), vec!["x", "y", "z"]);

    let mut seen = Vec::new();
    assert_eq!(eager::inspect([3, 4], |x| seen.push(*x)), vec![3, 4]);
    assert_eq!(seen, vec![3, 4]);
    Ok(())
}

#[test]
fn eager_stateful_ops() -> Result<()> {
    assert_eq!(eager::with_index(['a', 'b']), vec![(0, 'a'), (1, 'b')]);
    assert_eq!(eager::scan(1..=4, 0, |acc, x| acc + x), vec![1, 3, 6, 10]);
    assert_eq!(eager::uniq_by(["apple", "avocado", "banana"], |s| s.len()), vec!["apple", "avocado", "banana"]);
    assert_eq!(eager::uniq_by([1, -1, 2, -2, 3], |x: &i32| x.abs()), vec![1, 2, 3]);
    assert_eq!(eager::zip(1..=3, ["one", "two"]), vec![(1, "one"), (2, "two")]);
    Ok(())
}

#[test]
fn eager_slicing() -> Result<()> {
    assert_eq!(eager::take(0.., 3), vec![0, 1, 2]);
    assert_eq!(eager::drop(0..5, 3), vec![3, 4]);
    assert_eq!(eager::take_while(0.., |x| *x < 2), vec![0, 1]);
    assert_eq!(eager::drop_while(0..5, |x| *x < 3), vec![3, 4]);
    Ok(())
}

#[test]
fn eager_aggregates_agree_with_lazy() -> Result<()> {
    let data = vec![4, 1, 4, 2, 1, 4];
    assert_grouping_eq(&eager::frequencies(data.clone()), &[(4, 3), (1, 2), (2, 1)]);
    assert_grouping_eq(&eager::group_by(data.clone(), |x| x % 2), &[(0, vec![4, 4, 2, 4]), (1, vec![1, 1])]);
    assert_eq!(eager::sort_with(data.clone(), |a, b| a >= b), vec![4, 4, 4, 2, 1, 1]);
    assert_grouping_eq(&eager::frequencies_by(data.clone(), |x| *x > 1), &[(true, 4), (false, 2)]);
    assert_grouping_eq(
        &eager::group_by_with(data.clone(), |x| x % 2, |x| x * 10),
        &[(0, vec![40, 40, 20, 40]), (1, vec![10, 10])],
    );
    assert_eq!(eager::min_max(data), Some((1, 4)));
    assert_eq!(eager::min_max(Vec::<i32>::new()), None);
    Ok(())
}
