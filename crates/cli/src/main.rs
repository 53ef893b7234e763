use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

const USAGE: &str = "\
Usage: gear-calculator

  After invoking gear-calculator, type the position of each peg,
  followed by [ENTER]. When you have entered all the peg positions, enter 0,
  then [ENTER].
";

/// Takes no arguments at all; help and version flags are off so that any
/// argument is a usage error.
#[derive(Parser)]
#[command(name = "gear-calculator")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cmd {}

fn main() -> Result<ExitCode> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let code = run(
        std::env::args_os(),
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr(),
    )?;
    Ok(ExitCode::from(code))
}

/// Parse `args`, read pegs from `input`, write `[n, d]` to `out`.
///
/// Returns the process exit status: 1 with the usage text on `err` for any
/// argument or an empty peg list, 0 otherwise.
fn run<I, T, R, W, E>(args: I, input: R, out: &mut W, err: &mut E) -> Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
    E: Write,
{
    if Cmd::try_parse_from(args).is_err() {
        err.write_all(USAGE.as_bytes())?;
        return Ok(1);
    }

    let pegs = input::read_pegs(input)?;
    if pegs.is_empty() {
        err.write_all(USAGE.as_bytes())?;
        return Ok(1);
    }

    let fraction = gears::answer(&pegs)?;
    tracing::debug!(pegs = ?pegs, %fraction, "answer");
    writeln!(out, "{fraction}")?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(args: &[&str], stdin: &str) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), Cursor::new(stdin), &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn prints_reduced_fraction_line() {
        let (code, out, err) = run_with(&["gear-calculator"], "4\n30\n50\n0\n");
        assert_eq!(code, 0);
        assert_eq!(out, "[12, 1]\n");
        assert!(err.is_empty());

        let (code, out, _) = run_with(&["gear-calculator"], "1\n504\n1224\n0\n");
        assert_eq!(code, 0);
        assert_eq!(out, "[-1, -1]\n");
    }

    #[test]
    fn empty_peg_list_prints_usage() {
        let (code, out, err) = run_with(&["gear-calculator"], "0\n");
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, USAGE);
    }

    #[test]
    fn any_argument_prints_usage() {
        for arg in ["--help", "-h", "--version", "-V", "foo"] {
            let (code, out, err) = run_with(&["gear-calculator", arg], "4\n8\n0\n");
            assert_eq!(code, 1, "arg {arg}");
            assert!(out.is_empty(), "arg {arg}");
            assert_eq!(err, USAGE, "arg {arg}");
        }
    }

    #[test]
    fn single_peg_is_an_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = run(["gear-calculator"], Cursor::new("7\n0\n"), &mut out, &mut err);
        assert!(res.is_err());
        assert!(out.is_empty());
    }
}
