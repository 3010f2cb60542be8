//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "syntax-decider",
    about = "Writes 1 for each input line judged well-formed, 0 otherwise."
)]
pub struct Opt {
    #[structopt(parse(from_os_str), help = "file with one sentence per line")]
    pub input: PathBuf,
    #[structopt(parse(from_os_str), help = "verdicts destination (truncated)")]
    pub output: PathBuf,
    #[structopt(
        long = "good",
        parse(from_os_str),
        help = "well-formed training corpus [default: good.txt next to the executable]"
    )]
    pub good: Option<PathBuf>,
    #[structopt(
        long = "bad",
        parse(from_os_str),
        help = "ill-formed training corpus [default: bad.txt next to the executable]"
    )]
    pub bad: Option<PathBuf>,
    #[structopt(long = "order", short = "n", default_value = "6", help = "n-gram length")]
    pub order: usize,
    #[structopt(
        long = "threshold-divisor",
        default_value = "1600",
        help = "words rarer than corpus size / divisor are collapsed"
    )]
    pub threshold_divisor: usize,
    #[structopt(long = "seed", help = "seed for the tie-break random generator")]
    pub seed: Option<u64>,
}
