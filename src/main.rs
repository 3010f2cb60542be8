use std::path::PathBuf;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;
use syntax_decider::{Decider, ModelConfig};

#[macro_use]
extern crate log;

mod cli;

/// Directory of the running executable, where the default corpora live.
fn program_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("could not locate the running executable")?;
    Ok(exe.parent().map(PathBuf::from).unwrap_or_default())
}

/// Fills in the missing corpus paths from the directory `dir` returns.
/// `dir` is only called when a path is missing.
fn corpus_paths<F>(
    good: Option<PathBuf>,
    bad: Option<PathBuf>,
    dir: F,
) -> anyhow::Result<(PathBuf, PathBuf)>
where
    F: FnOnce() -> anyhow::Result<PathBuf>,
{
    match (good, bad) {
        (Some(good), Some(bad)) => Ok((good, bad)),
        (good, bad) => {
            let dir = dir()?;
            Ok((
                good.unwrap_or_else(|| dir.join("good.txt")),
                bad.unwrap_or_else(|| dir.join("bad.txt")),
            ))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opt = cli::Opt::from_args();
    debug!("cli args\n{:#?}", opt);

    let config = ModelConfig::with_divisor(opt.order, opt.threshold_divisor)?;
    let (good_path, bad_path) = corpus_paths(opt.good, opt.bad, program_dir)?;
    let rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut decider = Decider::from_corpus_files(good_path.clone(), bad_path.clone(), config, rng)
        .await
        .with_context(|| {
            format!(
                "could not train from {} and {}",
                good_path.display(),
                bad_path.display()
            )
        })?;

    decider
        .run(&opt.input, &opt.output)
        .await
        .with_context(|| {
            format!(
                "could not decide {} into {}",
                opt.input.display(),
                opt.output.display()
            )
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_corpora_skip_program_dir() {
        let paths = corpus_paths(
            Some(PathBuf::from("g.txt")),
            Some(PathBuf::from("b.txt")),
            || anyhow::bail!("program dir must not be resolved"),
        )
        .unwrap();
        assert_eq!(paths, (PathBuf::from("g.txt"), PathBuf::from("b.txt")));
    }

    #[test]
    fn missing_corpora_resolve_once() {
        let mut calls = 0;
        let paths = corpus_paths(None, None, || {
            calls += 1;
            Ok(PathBuf::from("/opt/decider"))
        })
        .unwrap();
        assert_eq!(calls, 1);
        assert_eq!(
            paths,
            (
                PathBuf::from("/opt/decider/good.txt"),
                PathBuf::from("/opt/decider/bad.txt")
            )
        );
    }

    #[test]
    fn one_missing_corpus_uses_program_dir() {
        let paths = corpus_paths(None, Some(PathBuf::from("b.txt")), || {
            Ok(PathBuf::from("/opt/decider"))
        })
        .unwrap();
        assert_eq!(
            paths,
            (PathBuf::from("/opt/decider/good.txt"), PathBuf::from("b.txt"))
        );
    }
}
