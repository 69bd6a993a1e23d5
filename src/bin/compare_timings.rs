//! Times the reservoir samplers on exponential populations of growing size
//! and prints one CSV row per algorithm and population size.
//!
//! ```text
//! compare_timings --sample-size 2000 --sizes 100000,1000000 --algorithms r,l
//! ```
//!
//! Set `RUST_LOG=debug` to see per-run details.

use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};

use reservoir_algos::harness::{self, HarnessConfig, TimingRow};
use reservoir_algos::Algorithm;

fn parse_list<T, F>(raw: &str, what: &str, parse: F) -> Result<Vec<T>, anyhow::Error>
where
    F: Fn(&str) -> Result<T, anyhow::Error>,
{
    let items = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse(s).with_context(|| format!("invalid entry {:?} in {}", s, what)))
        .collect::<Result<Vec<T>, anyhow::Error>>()?;
    if items.is_empty() {
        return Err(anyhow!("{} must not be empty", what));
    }
    Ok(items)
}

fn parse_config(matches: &ArgMatches) -> Result<HarnessConfig, anyhow::Error> {
    log::debug!("in parse_config");

    let mut config = HarnessConfig::default();
    if let Some(k) = matches.get_one::<usize>("sample_size") {
        config.sample_size = *k;
    }
    if let Some(rate) = matches.get_one::<f64>("rate") {
        config.rate = *rate;
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = *seed;
    }
    if let Some(sizes) = matches.get_one::<String>("sizes") {
        config.population_sizes = parse_list(sizes, "--sizes", |s| {
            s.replace('_', "").parse::<usize>().map_err(anyhow::Error::from)
        })?;
    }
    if let Some(algorithms) = matches.get_one::<String>("algorithms") {
        config.algorithms = parse_list(algorithms, "--algorithms", |s| {
            s.parse::<Algorithm>().map_err(anyhow::Error::from)
        })?;
    }
    config.sorted = !matches.get_flag("unsorted");

    Ok(config)
}

fn command() -> Command {
    Command::new("compare_timings")
        .about("Compare reservoir sampling algorithms on exponential populations")
        .arg(
            Arg::new("sample_size")
                .long("sample-size")
                .short('k')
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("reservoir size, default 2000"),
        )
        .arg(
            Arg::new("rate")
                .long("rate")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(f64))
                .help("rate of the exponential population, default 0.1"),
        )
        .arg(
            Arg::new("sizes")
                .long("sizes")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("comma separated population sizes"),
        )
        .arg(
            Arg::new("algorithms")
                .long("algorithms")
                .short('a')
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("comma separated algorithms among r, l, max-key"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(u64))
                .help("seed for populations and sampling, default 42"),
        )
        .arg(
            Arg::new("unsorted")
                .long("unsorted")
                .action(ArgAction::SetTrue)
                .help("do not sort populations before sampling"),
        )
}

pub fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_default_env().init();

    let matches = command().get_matches();
    let config = parse_config(&matches)?;
    log::info!("running with {:?}", config);

    let rows = harness::run(&config)?;
    println!("{}", TimingRow::csv_header());
    for row in &rows {
        println!("{}", row.to_csv());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let matches = command()
            .try_get_matches_from([
                "compare_timings",
                "-k",
                "50",
                "--sizes",
                "1_000, 2000",
                "-a",
                "l,max-key",
                "--unsorted",
            ])
            .unwrap();
        let config = parse_config(&matches).unwrap();
        assert_eq!(config.sample_size, 50);
        assert_eq!(config.population_sizes, vec![1000, 2000]);
        assert_eq!(config.algorithms, vec![Algorithm::L, Algorithm::MaxKey]);
        assert!(!config.sorted);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_parse_config_rejects_unknown_algorithm() {
        let matches = command()
            .try_get_matches_from(["compare_timings", "-a", "r,z"])
            .unwrap();
        assert!(parse_config(&matches).is_err());
    }
}
