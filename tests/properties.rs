//! Algebraic properties that hold for every input, checked over a spread of
//! sizes and parameters.

use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

fn inputs() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![7],
        vec![1, 1, 1],
        vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
        (0..40).map(|n| (n * 7) % 5).collect(),
    ]
}

#[test]
fn take_then_drop_reassembles_the_input() -> Result<()> {
    for input in inputs() {
        for n in 0..=input.len() + 2 {
            let mut joined = from_vec(input.clone()).take(n).to_vec();
            joined.extend(from_vec(input.clone()).drop(n));
            assert_eq!(joined, input, "n = {n}");
        }
    }
    Ok(())
}

#[test]
fn tiling_chunks_reassemble_the_input() -> Result<()> {
    for input in inputs() {
        for count in 1..6 {
            let chunks = from_vec(input.clone()).chunk_every(count)?.to_vec();
            assert_all(&chunks, |c| !c.is_empty() && c.len() <= count);
            assert_eq!(chunks.concat(), input, "count = {count}");
        }
    }
    Ok(())
}

#[test]
fn dedup_is_idempotent() -> Result<()> {
    for input in inputs() {
        let once = from_vec(input).dedup().to_vec();
        let twice = from_vec(once.clone()).dedup().to_vec();
        assert_eq!(once, twice);
    }
    Ok(())
}

#[test]
fn chunk_by_reassembles_and_alternates_keys() -> Result<()> {
    for input in inputs() {
        let groups = from_vec(input.clone()).chunk_by(|x| x % 2).to_vec();
        assert_eq!(groups.concat(), input);
        for pair in groups.windows(2) {
            assert_ne!(pair[0][0] % 2, pair[1][0] % 2);
        }
    }
    Ok(())
}

#[test]
fn intersperse_length_and_positions() -> Result<()> {
    for input in inputs() {
        let out = from_vec(input.clone()).intersperse(-1).to_vec();
        assert_eq!(out.len(), (2 * input.len()).saturating_sub(1));
        let evens: Vec<i32> = out.iter().step_by(2).copied().collect();
        assert_eq!(evens, input);
    }
    Ok(())
}

#[test]
fn frequencies_sum_to_the_length() -> Result<()> {
    for input in inputs() {
        let len = input.len();
        let freq = from_vec(input).frequencies();
        assert_eq!(freq.values().sum::<usize>(), len);
    }
    Ok(())
}

#[test]
fn sort_with_default_sorter_matches_sort() -> Result<()> {
    for input in inputs() {
        let a = from_vec(input.clone()).sort();
        let b = from_vec(input).sort_with(|x, y| x <= y);
        assert_eq!(a, b);
    }
    Ok(())
}

#[test]
fn worked_examples() -> Result<()> {
    assert_grouping_eq(&from_vec(vec![1, 1, 2, 3, 3, 3]).frequencies(), &[(1, 2), (2, 1), (3, 3)]);
    assert_grouping_eq(
        &from_iter(1..=6).group_by(|x| x % 2),
        &[(1, vec![1, 3, 5]), (0, vec![2, 4, 6])],
    );
    assert_eq!(
        from_iter(1..=5).chunk_every_step(2, 1)?.to_vec(),
        vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5], vec![5]]
    );
    assert_sequence_eq(from_vec(vec![1, 2, 3]).intersperse(0), &[1, 0, 2, 0, 3]);
    assert_sequence_eq(from_iter(1..=6).drop_every(3)?, &[2, 3, 5, 6]);
    assert_sequence_eq(from_iter(1..=6).map_every(3, |x| x * 10)?, &[1, 2, 30, 4, 5, 60]);
    assert_eq!(empty::<i32>().fold(9, |a, x| a + x), 9);
    assert_eq!(empty::<i32>().reduce(|a, x| a + x), None);
    Ok(())
}

#[test]
fn laziness_over_infinite_sources() -> Result<()> {
    let probe = PullProbe::new();
    let chain = probe
        .naturals()
        .dedup()
        .chunk_every_step(3, 2)?
        .map(|c| c.len())
        .intersperse(0);
    assert_eq!(probe.pulls(), 0);

    assert_eq!(chain.take(3).to_vec(), vec![3, 0, 3]);
    // two windows of three with step two need five elements
    assert_eq!(probe.pulls(), 5);

    probe.reset();
    assert!(probe.naturals().any(|x| *x == 9));
    assert_eq!(probe.pulls(), 10);
    Ok(())
}
