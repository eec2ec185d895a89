use anyhow::Result;
use daprs::testing::*;
use daprs::{ExecOptions, Splitter, Transformer, split, split_labeled, try_split_labeled};

#[test]
fn groups_are_aligned_with_labels() -> Result<()> {
    let words = vec!["apple", "avocado", "banana", "blueberry", "cherry", "apricot"];
    let (groups, labels) = split_labeled(
        |w: &&str| w.chars().next(),
        words.clone(),
        &ExecOptions::parallel(3),
    )?;
    assert_eq!(labels, vec![Some('a'), Some('b'), Some('c')]);
    assert_groups_equal(
        &groups,
        &labels,
        &[
            (Some('c'), vec!["cherry"]),
            (Some('a'), vec!["apple", "avocado", "apricot"]),
            (Some('b'), vec!["banana", "blueberry"]),
        ],
    );

    let rejoined: Vec<&str> = groups.into_iter().flatten().collect();
    assert_collections_unordered_equal(&rejoined, &words);
    Ok(())
}

#[test]
fn split_without_labels() -> Result<()> {
    let groups = split(|x: &u32| *x >= 10, vec![12, 3, 40, 5], &ExecOptions::default())?;
    assert_eq!(groups, vec![vec![12, 40], vec![3, 5]]);
    Ok(())
}

#[test]
fn split_empty_input() -> Result<()> {
    let groups = split(|x: &u8| *x, Vec::<u8>::new(), &ExecOptions::parallel(2))?;
    assert!(groups.is_empty());
    Ok(())
}

#[test]
fn labeled_split_with_fallible_discriminator() -> Result<()> {
    let (groups, labels) = try_split_labeled(
        |s: &String| s.parse::<i32>().map(|n| n.signum()),
        ["-4", "0", "9", "-1"].map(String::from).to_vec(),
        &ExecOptions::default(),
    )?;
    assert_eq!(labels, vec![-1, 0, 1]);
    assert_eq!(groups[0], vec!["-4", "-1"]);
    Ok(())
}

#[test]
fn splitter_with_labels_on_pairs() -> Result<()> {
    let by_key = Splitter::new(|k: &char, _v: &u32| *k).with_labels().n_jobs(2);
    assert!(by_key.returns_labels());
    let (groups, labels) = by_key.transform(vec![('x', 1), ('y', 2), ('x', 3)])?;
    assert_eq!(labels, vec!['x', 'y']);
    assert_eq!(groups, vec![vec![('x', 1), ('x', 3)], vec![('y', 2)]]);
    Ok(())
}
