use anyhow::Result;
use daprs::{ExecOptions, Expander, Transformer, expand, try_expand};

#[test]
fn output_count_is_sum_of_parts() -> Result<()> {
    let data: Vec<usize> = (0..40).map(|i| i % 5).collect();
    let expected: usize = data.iter().sum();
    for n_jobs in [1, 4] {
        let out = expand(|n: &usize| 0..*n, &data, &ExecOptions::parallel(n_jobs))?;
        assert_eq!(out.len(), expected);
    }
    Ok(())
}

#[test]
fn parallel_expand_keeps_input_order() -> Result<()> {
    let words = vec!["ab", "", "cde"];
    let seq = expand(|w: &&str| w.chars().collect::<Vec<_>>(), &words, &ExecOptions::default())?;
    let par = expand(|w: &&str| w.chars().collect::<Vec<_>>(), &words, &ExecOptions::parallel(3))?;
    assert_eq!(seq, vec!['a', 'b', 'c', 'd', 'e']);
    assert_eq!(seq, par);
    Ok(())
}

#[test]
fn only_one_level_is_removed() -> Result<()> {
    let out = expand(|n: &u8| vec![vec![*n], vec![*n, *n]], &[1, 2], &ExecOptions::default())?;
    assert_eq!(out, vec![vec![1], vec![1, 1], vec![2], vec![2, 2]]);
    Ok(())
}

#[test]
fn expanded_convention() -> Result<()> {
    let ranges = vec![(0u32, 3u32), (10, 12)];
    let out = expand(|lo: &u32, hi: &u32| *lo..*hi, &ranges, &ExecOptions::default())?;
    assert_eq!(out, vec![0, 1, 2, 10, 11]);
    Ok(())
}

#[test]
fn fallible_expand() -> Result<()> {
    let lines = vec!["1,2", "3"];
    let out = try_expand(
        |line: &&str| {
            line.split(',')
                .map(str::parse::<i32>)
                .collect::<Result<Vec<_>, _>>()
        },
        &lines,
        &ExecOptions::default(),
    )?;
    assert_eq!(out, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn expander_honours_its_parallelism() -> Result<()> {
    let e = Expander::new(|s: &String| {
        s.split_whitespace()
            .map(String::from)
            .collect::<Vec<_>>()
    })
    .n_jobs(4);
    assert_eq!(e.options().n_jobs, 4);
    let out = e.transform(vec!["a b".to_string(), "c".to_string()])?;
    assert_eq!(out, vec!["a", "b", "c"]);
    Ok(())
}
