use anyhow::Result;
use daprs::testing::*;
use daprs::{ExecOptions, Filter, Transformer, filter, try_filter};
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn filter_is_an_ordered_subsequence() -> Result<()> {
    let data: Vec<u32> = (0..200).map(|i| (i * 37) % 101).collect();
    for n_jobs in [1, 3, 8] {
        let kept = filter(|x: &u32| x % 3 == 0, data.clone(), &ExecOptions::parallel(n_jobs))?;
        assert_subsequence(&kept, &data);
        assert_all(&kept, |x| x % 3 == 0);
        assert_eq!(kept.len(), data.iter().filter(|x| *x % 3 == 0).count());
    }
    Ok(())
}

#[test]
fn every_item_is_evaluated() -> Result<()> {
    let calls = AtomicUsize::new(0);
    let kept = filter(
        |_: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            false
        },
        vec![1, 2, 3, 4, 5],
        &ExecOptions::parallel(2),
    )?;
    assert!(kept.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 5);
    Ok(())
}

#[test]
fn expanded_predicate_on_pairs() -> Result<()> {
    let pairs = vec![(1, 1), (1, 2), (3, 3)];
    let same = filter(|a: &i32, b: &i32| a == b, pairs, &ExecOptions::default())?;
    assert_eq!(same, vec![(1, 1), (3, 3)]);
    Ok(())
}

#[test]
fn items_are_moved_not_cloned() -> Result<()> {
    struct NoClone(u8);
    let data = vec![NoClone(1), NoClone(2)];
    let kept = filter(|x: &NoClone| x.0 > 1, data, &ExecOptions::default())?;
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].0, 2);
    Ok(())
}

#[test]
fn try_filter_accepts_result_predicates() -> Result<()> {
    let kept = try_filter(
        |s: &String| s.parse::<i32>().map(|n| n > 0),
        vec!["5".to_string(), "-1".to_string(), "7".to_string()],
        &ExecOptions::parallel(2),
    )?;
    assert_eq!(kept, vec!["5", "7"]);
    Ok(())
}

#[test]
fn filter_adapter_reports_expand_mode() -> Result<()> {
    let f = Filter::new(|a: &u8, b: &u8| a < b);
    assert_eq!(f.call_mode(), daprs::CallMode::Expand { arity: 2 });
    assert_eq!(f.transform(vec![(1, 2), (2, 1)])?, vec![(1, 2)]);
    Ok(())
}
