//! Group words by length across several documents at once.
//!
//! Each document goes through its own branch of a `Union`; every branch is a
//! `Pipeline` that tokenizes, normalizes, drops stop words and groups what is
//! left. Run with `RUST_LOG=daprs=debug` to see dispatch decisions.

use anyhow::Result;
use daprs::{
    ExecOptions, Expander, Filter, Manipulator, Mapper, Pipeline, Splitter, Transformer, Union,
    logging,
};

const STOP_WORDS: &[&str] = &["a", "an", "and", "the", "of", "on", "in"];

type Groups = Vec<(usize, Vec<String>)>;

fn document_pipeline(opts: ExecOptions) -> Pipeline<Vec<String>, Groups> {
    Pipeline::<Vec<String>>::new()
        .then(
            Expander::new(|line: &String| {
                line.split(|c: char| !c.is_alphanumeric())
                    .filter(|w| !w.is_empty())
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
            })
            .with_options(opts),
        )
        .then(Filter::new(|w: &String| !STOP_WORDS.contains(&w.as_str())).with_options(opts))
        .then(Splitter::new(|w: &String| w.chars().count()).with_labels())
        .then(Manipulator::new(
            |(groups, labels): (Vec<Vec<String>>, Vec<usize>)| {
                let mut out: Groups = labels.into_iter().zip(groups).collect();
                out.sort_by_key(|(len, _)| *len);
                out
            },
        ))
        .verbose(1)
}

fn main() -> Result<()> {
    logging::init();

    let documents: Vec<Vec<String>> = vec![
        vec![
            "The quick brown fox".to_string(),
            "jumps over the lazy dog.".to_string(),
        ],
        vec![
            "Rust makes parallel data processing".to_string(),
            "safe and fast, in theory and in practice".to_string(),
        ],
    ];

    let opts = ExecOptions::parallel(2).with_verbose(1);
    let per_document: Union<Vec<String>, Groups> = Union::new()
        .branch(document_pipeline(opts))
        .branch(document_pipeline(opts))
        .with_options(opts);

    let summary = Mapper::new(|groups: &Groups| {
        groups
            .iter()
            .map(|(len, words)| format!("{len}: {}", words.join(" ")))
            .collect::<Vec<_>>()
            .join(" | ")
    });

    for (i, line) in summary.transform(per_document.transform(documents)?)?.iter().enumerate() {
        println!("document {i}: {line}");
    }
    Ok(())
}
