extern crate clap;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Arg, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use winpath::filepath::{base_name, is_path_absolute, volume_name_len};

/// What gets printed for every input path.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Report {
    // <path>\t<absolute>\t<base name>
    Full,
    Absolute,
    Base,
    // <absolute>\t<base name>
    Both,
}

impl Report {
    fn from_flags(absolute: bool, base: bool) -> Self {
        match (absolute, base) {
            (true, true) => Report::Both,
            (true, false) => Report::Absolute,
            (false, true) => Report::Base,
            (false, false) => Report::Full,
        }
    }
}

fn cli() -> Command<'static> {
    Command::new("winpath")
        .version("0.1.0")
        .about("Inspects Windows paths without touching the filesystem")
        .arg(
            Arg::new("absolute")
                .short('a')
                .long("absolute")
                .help("Only print whether each path is absolute"),
        )
        .arg(
            Arg::new("base")
                .short('b')
                .long("base")
                .help("Only print the base name of each path"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug output to stderr"),
        )
        .arg(
            Arg::new("paths")
                .help("Paths to inspect")
                .required(true)
                .multiple_values(true),
        )
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    // RUST_LOG wins over --verbose.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    init_logging(matches.is_present("verbose"));

    let report = Report::from_flags(matches.is_present("absolute"), matches.is_present("base"));
    let paths: Vec<&str> = matches
        .values_of("paths")
        .map(|values| values.collect())
        .unwrap_or_default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out, &paths, report).context("Failed to write report to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn run<W: Write>(out: &mut W, paths: &[&str], report: Report) -> io::Result<()> {
    for path in paths {
        let absolute = is_path_absolute(path);
        let base = base_name(path);
        debug!(
            path = %path,
            volume_len = volume_name_len(path),
            absolute,
            base = %base,
            "inspected path"
        );

        match report {
            Report::Full => writeln!(out, "{}\t{}\t{}", path, absolute, base)?,
            Report::Absolute => writeln!(out, "{}", absolute)?,
            Report::Base => writeln!(out, "{}", base)?,
            Report::Both => writeln!(out, "{}\t{}", absolute, base)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{cli, run, Report};

    fn render(paths: &[&str], report: Report) -> String {
        let mut out = Vec::new();
        run(&mut out, paths, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_from_flags() {
        assert_eq!(Report::from_flags(false, false), Report::Full);
        assert_eq!(Report::from_flags(true, false), Report::Absolute);
        assert_eq!(Report::from_flags(false, true), Report::Base);
        assert_eq!(Report::from_flags(true, true), Report::Both);
    }

    #[test]
    fn full_report_keeps_input_order() {
        let output = render(&["C:\\tools\\app.exe", "relative\\cmd.exe"], Report::Full);
        assert_eq!(
            output,
            "C:\\tools\\app.exe\ttrue\tapp.exe\nrelative\\cmd.exe\tfalse\tcmd.exe\n"
        );
    }

    #[test]
    fn single_column_reports() {
        let paths = ["PRN", "\\\\server\\share"];
        assert_eq!(render(&paths, Report::Absolute), "true\nfalse\n");
        assert_eq!(render(&paths, Report::Base), "PRN\n\n");
        assert_eq!(render(&paths, Report::Both), "true\tPRN\nfalse\t\n");
    }

    #[test]
    fn duplicates_are_reported_each_time() {
        let output = render(&["a\\b", "a\\b"], Report::Base);
        assert_eq!(output, "b\nb\n");
    }

    #[test]
    fn cli_requires_paths() {
        assert!(cli().try_get_matches_from(vec!["winpath"]).is_err());

        let matches = cli()
            .try_get_matches_from(vec!["winpath", "-a", "C:\\x", "y"])
            .unwrap();
        assert!(matches.is_present("absolute"));
        assert!(!matches.is_present("base"));
        assert_eq!(matches.values_of("paths").unwrap().count(), 2);
    }

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }
}
