use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

#[test]
fn map_runs_once_per_pulled_element() -> Result<()> {
    let mut calls = 0;
    let out = from_vec(vec![1, 2, 3, 4])
        .map(|x| {
            calls += 1;
            x * 10
        })
        .take(2)
        .to_vec();
    assert_eq!(out, vec![10, 20]);
    assert_eq!(calls, 2);
    Ok(())
}

#[test]
fn filter_and_reject_partition_the_input() -> Result<()> {
    let kept = from_iter(1..=10).filter(|x| x % 3 == 0).to_vec();
    let dropped = from_iter(1..=10).reject(|x| x % 3 == 0).to_vec();
    assert_collections_equal(&kept, &[3, 6, 9]);
    assert_collections_equal(&dropped, &[1, 2, 4, 5, 7, 8, 10]);
    Ok(())
}

#[test]
fn filter_then_map_commutes_with_map_then_composed_filter() -> Result<()> {
    let p = |x: &i32| x % 2 == 0;
    let f = |x: i32| x * 3 + 1;
    let input: Vec<i32> = (-20..20).collect();

    let a = from_vec(input.clone()).filter(p).map(f).to_vec();
    // map first, carrying the predicate result alongside the mapped value
    let b = from_vec(input)
        .map(|x| (p(&x), f(x)))
        .filter(|(keep, _)| *keep)
        .map(|(_, y)| y)
        .to_vec();
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn flat_map_drains_inner_before_next_outer() -> Result<()> {
    let probe = PullProbe::new();
    let mut seq = probe.source(vec![2, 3]).flat_map(|n| vec![n; n]);

    assert_eq!(seq.pull(), Step::Emit(2));
    assert_eq!(seq.pull(), Step::Emit(2));
    assert_eq!(probe.pulls(), 1);
    assert_eq!(seq.pull(), Step::Emit(3));
    assert_eq!(probe.pulls(), 2);
    assert_eq!(seq.to_vec(), vec![3, 3]);
    Ok(())
}

#[test]
fn flat_map_accepts_sequences_and_skips_empty_inners() -> Result<()> {
    let out = from_iter(0..4)
        .flat_map(|n| from_iter(0..n).map(move |i| (n, i)))
        .to_vec();
    assert_eq!(out, vec![(1, 0), (2, 0), (2, 1), (3, 0), (3, 1), (3, 2)]);
    Ok(())
}

#[test]
fn concat_and_flatten_keep_outer_order() -> Result<()> {
    let joined = concat(vec![from_vec(vec!['a']), empty(), from_vec(vec!['b', 'c'])]);
    assert_eq!(joined.to_vec(), vec!['a', 'b', 'c']);

    let nested = from_vec(vec![from_iter(1..3), from_iter(5..7)]).flatten();
    assert_eq!(nested.explain(), "from_vec -> flatten");
    assert_eq!(nested.to_vec(), vec![1, 2, 5, 6]);
    Ok(())
}

#[test]
fn concat_is_lazy_over_infinite_inners() -> Result<()> {
    let out = concat(vec![from_iter(0..2), naturals().map(|n| n as i32 * 100)])
        .take(4)
        .to_vec();
    assert_eq!(out, vec![0, 1, 0, 100]);
    Ok(())
}

#[test]
fn inspect_observes_without_changing() -> Result<()> {
    let mut seen = Vec::new();
    let out = from_vec(vec!["a", "b"]).inspect(|s| seen.push(s.to_uppercase())).to_vec();
    assert_eq!(out, vec!["a", "b"]);
    assert_eq!(seen, vec!["A", "B"]);
    Ok(())
}

#[test]
fn building_a_chain_pulls_nothing() -> Result<()> {
    let probe = PullProbe::new();
    let _chain = probe
        .naturals()
        .map(|x| x + 1)
        .filter(|x| x % 2 == 0)
        .flat_map(|x| vec![x, x]);
    assert_eq!(probe.pulls(), 0);
    Ok(())
}
