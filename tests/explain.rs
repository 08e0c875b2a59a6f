use anyhow::Result;
use ironseq::*;

#[test]
fn sources_start_the_lineage() -> Result<()> {
    assert_eq!(from_vec(vec![1]).explain(), "from_vec");
    assert_eq!(from_iter(0..1).explain(), "from_iter");
    assert_eq!(from_fn(|| Some(1)).explain(), "from_fn");
    assert_eq!(iterate(0, |x| x + 1).explain(), "iterate");
    assert_eq!(repeat(1).explain(), "repeat");
    assert_eq!(once(1).explain(), "once");
    assert_eq!(empty::<i32>().explain(), "empty");
    assert_eq!(concat(vec![once(1)]).explain(), "concat");
    Ok(())
}

#[test]
fn every_operator_appends_its_name() -> Result<()> {
    let seq = from_iter(0..100)
        .map(|x| x + 1)
        .filter(|x| x % 2 == 0)
        .dedup()
        .map_every(2, |x| x * 10)?
        .take_every(1)?
        .intersperse(0)
        .take(10);
    assert_eq!(
        seq.lineage(),
        &["from_iter", "map", "filter", "dedup", "map_every", "take_every", "intersperse", "take"]
    );
    assert_eq!(
        seq.explain(),
        "from_iter -> map -> filter -> dedup -> map_every -> take_every -> intersperse -> take"
    );
    Ok(())
}

#[test]
fn lineage_survives_consumption() -> Result<()> {
    let mut seq = from_vec(vec![1, 2]).chunk_by(|x| *x).drop(1);
    let _ = seq.pull();
    let _ = seq.pull();
    assert!(seq.is_exhausted());
    assert_eq!(seq.explain(), "from_vec -> chunk_by -> drop");
    Ok(())
}

#[test]
fn debug_format_shows_lineage() -> Result<()> {
    let seq = from_vec(vec!['a']).uniq().with_index();
    let shown = format!("{seq:?}");
    assert!(shown.contains(r#"["from_vec", "uniq", "with_index"]"#), "{shown}");
    assert!(shown.contains("exhausted: false"));
    Ok(())
}
