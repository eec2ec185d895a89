use anyhow::Result;
use daprs::testing::*;
use daprs::{Backend, CallMode, ExecOptions, Mapper, Transformer, map, try_map};

#[test]
fn map_preserves_length_and_order() -> Result<()> {
    let data = TestDataBuilder::<i64>::new().add_range(1..=100).build();
    for n_jobs in [1, 2, 4, 7] {
        let out = map(|x: &i64| x * x, &data, &ExecOptions::parallel(n_jobs))?;
        assert_collection_size(&out, 100);
        assert_collections_equal(&out, &data.iter().map(|x| x * x).collect::<Vec<_>>());
    }
    Ok(())
}

#[test]
fn expanded_convention_unpacks_pairs() -> Result<()> {
    let pairs = vec![(1, 10), (2, 20), (3, 30)];
    let out = map(|a: &i32, b: &i32| a + b, &pairs, &ExecOptions::parallel(3))?;
    assert_eq!(out, vec![11, 22, 33]);
    Ok(())
}

#[test]
fn whole_convention_sees_the_tuple() -> Result<()> {
    let pairs = vec![("a", 1), ("b", 2)];
    let out = map(|p: &(&str, i32)| format!("{p:?}"), &pairs, &ExecOptions::default())?;
    assert_eq!(out, vec![r#"("a", 1)"#, r#"("b", 2)"#]);
    Ok(())
}

#[test]
fn three_field_items() -> Result<()> {
    let rows = vec![(1u8, 'x', true), (2u8, 'y', false)];
    let out = map(
        |n: &u8, c: &char, flag: &bool| format!("{n}{c}{}", u8::from(*flag)),
        &rows,
        &ExecOptions::default(),
    )?;
    assert_eq!(out, vec!["1x1", "2y0"]);
    Ok(())
}

#[test]
fn empty_input_gives_empty_output() -> Result<()> {
    let empty: Vec<u32> = Vec::new();
    assert!(map(|x: &u32| x + 1, &empty, &ExecOptions::parallel(4))?.is_empty());
    Ok(())
}

#[test]
fn global_backend_with_batch_size() -> Result<()> {
    let data: Vec<u64> = (0..1_000).collect();
    let opts = ExecOptions::parallel(4)
        .with_backend(Backend::Global)
        .with_batch_size(64);
    let out = map(|x: &u64| x + 1, &data, &opts)?;
    assert_eq!(out.first(), Some(&1));
    assert_eq!(out.last(), Some(&1_000));
    assert_eq!(out.len(), 1_000);
    Ok(())
}

#[test]
fn try_map_collects_ok_values() -> Result<()> {
    let raw = vec!["1", "22", "333"];
    let out = try_map(|s: &&str| s.parse::<u32>(), &raw, &ExecOptions::parallel(2))?;
    assert_eq!(out, vec![1, 22, 333]);
    Ok(())
}

#[test]
fn mapper_is_reusable() -> Result<()> {
    let lengths = Mapper::new(|s: &String| s.len()).n_jobs(2);
    assert_eq!(lengths.call_mode(), CallMode::Whole);
    assert_eq!(lengths.transform(vec!["ab".to_string(), "c".to_string()])?, vec![2, 1]);
    assert_eq!(lengths.transform(vec!["xyz".to_string()])?, vec![3]);
    Ok(())
}

#[test]
fn verbose_runs_produce_the_same_values() -> Result<()> {
    daprs::logging::init();
    let data: Vec<i32> = (0..50).collect();
    let quiet = map(|x: &i32| x - 1, &data, &ExecOptions::parallel(3))?;
    let loud = map(|x: &i32| x - 1, &data, &ExecOptions::parallel(3).with_verbose(11))?;
    assert_eq!(quiet, loud);
    Ok(())
}
