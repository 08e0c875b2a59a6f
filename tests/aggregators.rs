use anyhow::Result;
use ironseq::combiners::{AverageF64, Count, DistinctCount, PriorityReservoir};
use ironseq::testing::*;
use ironseq::*;


#[test]
fn reduce_and_fold_seeds() -> Result<()> {
    assert_eq!(from_iter(1..=5).reduce(|a, b| a + b), Some(15));
    assert_eq!(empty::<i32>().reduce(|a, b| a + b), None);
    assert_eq!(from_vec(vec!["b", "c"]).fold("a".to_string(), |acc, s| acc + s), "abc");
    assert_eq!(empty::<i32>().fold(42, |acc, x| acc + x), 42);
    Ok(())
}

#[test]
fn min_and_max_tie_rules() -> Result<()> {
    let people = vec![("ann", 30), ("bob", 25), ("cid", 30), ("dee", 25)];

    // ties: min keeps the first seen, max takes the last seen
    assert_eq!(from_vec(people.clone()).min_by_key(|p| p.1), Some(("bob", 25)));
    assert_eq!(from_vec(people.clone()).max_by_key(|p| p.1), Some(("cid", 30)));

    assert_eq!(from_vec(people.clone()).min_with(|a, b| a.1 <= b.1), Some(("bob", 25)));
    assert_eq!(from_vec(people).max_with(|a, b| a.1 <= b.1), Some(("cid", 30)));

    assert_eq!(from_vec(vec![3, 1, 2]).min(), Some(1));
    assert_eq!(from_vec(vec![3, 1, 2]).max(), Some(3));
    assert_eq!(empty::<i32>().min(), None);
    Ok(())
}

#[test]
fn custom_sorter_reverses_the_sense() -> Result<()> {
    // with `>=`, the "min" is the largest element
    assert_eq!(from_vec(vec![4, 9, 2]).min_with(|a, b| a >= b), Some(9));
    assert_eq!(from_vec(vec![4, 9, 2]).max_with(|a, b| a >= b), Some(2));
    Ok(())
}

#[test]
fn min_max_in_one_pass() -> Result<()> {
    assert_eq!(from_vec(vec![5, 3, 8, 1, 9, 2]).min_max(), Some((1, 9)));
    assert_eq!(from_vec(vec![7]).min_max(), Some((7, 7)));
    assert_eq!(empty::<u8>().min_max(), None);

    let words = from_vec(vec!["bb", "a", "cc", "d"]);
    assert_eq!(words.min_max_by_key(|w| w.len()), Some(("a", "cc")));
    Ok(())
}

#[test]
fn sum_product_and_count() -> Result<()> {
    assert_eq!(from_iter(1..=4).sum(), 10);
    assert_eq!(from_iter(1..=4).product(), 24);
    assert_eq!(empty::<i64>().sum(), 0);
    assert_eq!(empty::<i64>().product(), 1);
    assert_approx_eq!(from_vec(vec![0.5f64, 0.25]).sum(), 0.75);
    assert_eq!(from_iter(0..100).filter(|x| x % 7 == 0).count(), 15);
    Ok(())
}

#[test]
fn frequencies_preserve_first_encounter_order() -> Result<()> {
    let freq = from_vec(vec![1, 1, 2, 3, 3, 3]).frequencies();
    assert_grouping_eq(&freq, &[(1, 2), (2, 1), (3, 3)]);

    let by_len = from_vec(vec!["aa", "b", "cc", "ddd", "e"]).frequencies_by(|s| s.len());
    assert_grouping_eq(&by_len, &[(2, 2), (1, 2), (3, 1)]);
    Ok(())
}

#[test]
fn word_count_over_fixture() -> Result<()> {
    let counts = word_count_data()
        .flat_map(|line| line.split_whitespace().map(String::from).collect::<Vec<_>>())
        .frequencies();
    assert_eq!(counts.get("the"), Some(&3));
    assert_eq!(counts.get("dog"), Some(&2));
    assert_eq!(counts.keys().next().map(String::as_str), Some("the"));
    Ok(())
}

#[test]
fn group_by_keeps_encounter_order_within_keys() -> Result<()> {
    let groups = from_iter(1..=6).group_by(|x| x % 2);
    assert_grouping_eq(&groups, &[(1, vec![1, 3, 5]), (0, vec![2, 4, 6])]);

    let paths = sample_log_entries().group_by_with(|e| e.path.clone(), |e| e.status);
    assert_eq!(paths.get("/api/users"), Some(&vec![200, 201, 404]));
    assert_eq!(paths.get("/api/posts"), Some(&vec![200, 500]));
    Ok(())
}

#[test]
fn grouping_serializes_as_a_json_map() -> Result<()> {
    let freq = from_vec(vec!["b", "a", "b"]).frequencies();
    assert_eq!(serde_json::to_string(&freq)?, r#"{"b":2,"a":1}"#);
    Ok(())
}

#[test]
fn sorting_is_stable() -> Result<()> {
    assert_eq!(from_vec(vec![3, 1, 2]).sort(), vec![1, 2, 3]);

    let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
    let by_key = from_vec(pairs.clone()).sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(by_key, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);

    let desc = from_vec(pairs).sort_with(|a, b| a.0 >= b.0);
    assert_eq!(desc, vec![(2, 'a'), (2, 'c'), (1, 'b'), (1, 'd')]);
    Ok(())
}

#[test]
fn sort_numeric_handles_nan() -> Result<()> {
    let v = from_vec(vec![3.5, -0.5, f64::NAN, 1.0]).sort_numeric();
    assert_all_approx_eq!(v[..3], [-0.5, 1.0, 3.5]);
    assert!(v[3].is_nan());
    Ok(())
}

#[test]
fn random_is_seeded_and_total() -> Result<()> {
    let a = from_iter(0..1000).random(7);
    let b = from_iter(0..1000).random(7);
    assert_eq!(a, b);
    assert!(a.is_some_and(|x| (0..1000).contains(&x)));
    assert_eq!(empty::<i32>().random(7), None);
    assert_eq!(once(5).random(123), Some(5));
    Ok(())
}

#[test]
fn random_reaches_every_element() -> Result<()> {
    let mut hits = [0usize; 4];
    for seed in 0..400 {
        if let Some(i) = from_iter(0..4usize).random(seed) {
            hits[i] += 1;
        }
    }
    assert!(hits.iter().all(|&h| h > 40), "skewed picks: {hits:?}");
    Ok(())
}

#[test]
fn take_random_samples_without_replacement() -> Result<()> {
    let sample = from_iter(0..50).take_random(10, 99);
    assert_eq!(sample.len(), 10);
    let mut distinct = sample.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(distinct.len(), 10);

    assert_eq!(sample, from_iter(0..50).take_random(10, 99));
    assert!(from_iter(0..50).take_random(0, 1).is_empty());
    assert_eq!(from_iter(0..3).take_random(10, 1).len(), 3);
    Ok(())
}

#[test]
fn combine_through_builtin_combiners() -> Result<()> {
    assert_approx_eq!(from_vec(vec![1u32, 2, 3, 4]).combine(AverageF64), 2.5);
    assert_approx_eq!(empty::<u32>().combine(AverageF64), 0.0);
    assert_eq!(from_iter((0..100u32).map(|n| n % 7)).combine(DistinctCount::new()), 7);
    assert_eq!(from_vec(vec!['x', 'y']).combine(Count), 2);
    assert_eq!(from_iter(0..20).combine(PriorityReservoir::new(4, 3)).len(), 4);
    Ok(())
}

struct Longest;

impl CombineFn<String, Option<String>, String> for Longest {
    fn create(&self) -> Option<String> {
        None
    }

    fn add_input(&self, acc: &mut Option<String>, v: String) {
        if acc.as_ref().is_none_or(|cur| v.len() > cur.len()) {
            *acc = Some(v);
        }
    }

    fn finish(&self, acc: Option<String>) -> String {
        acc.unwrap_or_default()
    }
}

#[test]
fn combine_with_a_custom_combiner() -> Result<()> {
    let longest = word_count_data()
        .flat_map(|l| l.split_whitespace().map(String::from).collect::<Vec<_>>())
        .combine(Longest);
    assert_eq!(longest, "quick");
    Ok(())
}
