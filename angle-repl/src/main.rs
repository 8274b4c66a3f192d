//! Simple command line tool to convert angles between degrees and radians.
//!
//! Type a conversion in the form: `<rad|deg> <value>`, e.g. `rad 180°20'13''` to convert degrees
//! to radians, or `deg 1.234e1` to convert radians to degrees.
//!
//! The value can be a plain decimal number, text in DMS notation, or text in scientific notation.
//! Run with `--precision <bits>` to change the working precision, and with a file name (or piped
//! input) to convert every line of it.

mod error;

use angle_convert::{Converter, Direction, Input, Precision};
use error::Error;
use log::{debug, info};
use rug::Float;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}};

/// The number of significant digits to print results with.
const DIGITS: usize = 50;

/// Options read from the command line.
#[derive(Debug, Default, PartialEq)]
struct Options {
    /// The working precision of every conversion.
    precision: Precision,

    /// A file to read conversions from, one per line.
    file: Option<String>,
}

/// Reads the options from the given command line arguments, without the program name.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, Error> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--precision" | "-p" => {
                let bits = args.next().ok_or(Error::MissingPrecision)?;
                options.precision = Precision::new(bits.parse()?);
            },
            _ if arg.starts_with('-') => return Err(Error::UnknownArg(arg)),
            _ if options.file.is_none() => options.file = Some(arg),
            _ => return Err(Error::UnknownArg(arg)),
        }
    }
    Ok(options)
}

/// Splits a line into the direction of the conversion and the value to convert.
fn parse_line(line: &str) -> Result<(Direction, &str), Error> {
    let (command, value) = line.trim().split_once(char::is_whitespace).ok_or(Error::Line)?;
    let direction = match command {
        "rad" => Direction::ToRadians,
        "deg" => Direction::ToDegrees,
        _ => return Err(Error::Line),
    };
    Ok((direction, value.trim()))
}

/// Turns the value typed by the user into an [`Input`].
///
/// Plain decimal numbers are read as numbers at the working precision; anything else is passed
/// along as text, to be parsed by the converter.
fn to_input(value: &str, precision: Precision) -> Input<'_> {
    let plain = !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit() || b == b'.' || b == b'-');
    if plain {
        if let Ok(n) = Float::parse(value) {
            return Input::Float(Float::with_val(precision.bits(), n));
        }
    }
    Input::from(value)
}

/// Converts the value on the given line, returning the formatted result.
fn convert(line: &str, converter: &Converter) -> Result<String, Error> {
    let (direction, value) = parse_line(line)?;
    debug!("converting `{}` to {}", value, direction);

    let result = converter.convert(to_input(value, converter.precision()), direction)?;
    Ok(format!("{} {}", result.to_string_radix(10, Some(DIGITS)), direction))
}

/// Converts the given line, printing the success or failure.
fn read_eval(line: &str, converter: &Converter) {
    if line.trim().is_empty() {
        return;
    }

    match convert(line, converter) {
        Ok(res) => println!("{}", res),
        Err(err) => {
            // conversion errors point into the value, not the whole line
            let value = parse_line(line).map(|(_, value)| value).unwrap_or(line);
            err.report_to_stderr(value);
        },
    }
}

/// Converts every line of the given source.
fn execute(source: &str, converter: &Converter) {
    for line in source.lines() {
        read_eval(line, converter);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        },
    };
    info!("working precision: {} bits", options.precision.bits());
    let converter = Converter::from(options.precision);

    if let Some(filename) = options.file {
        // convert every line of the file
        match fs::read_to_string(&filename) {
            Ok(source) => execute(&source, &converter),
            Err(err) => {
                eprintln!("{}: {}", filename, err);
                std::process::exit(1);
            },
        }
    } else if !io::stdin().is_terminal() {
        // read conversions from stdin
        let mut source = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut source) {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        execute(&source, &converter);
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            },
        };

        fn process_line(rl: &mut DefaultEditor, converter: &Converter) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            rl.add_history_entry(&input)?;
            read_eval(&input, converter);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &converter) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use angle_convert::{UnsupportedFormat, UnsupportedType};
    use pretty_assertions::assert_eq;
    use super::*;

    fn args(args: &[&str]) -> impl Iterator<Item = String> + '_ {
        args.iter().map(|arg| arg.to_string())
    }

    #[test]
    fn default_options() {
        assert_eq!(parse_args(args(&[])).unwrap(), Options::default());
    }

    #[test]
    fn precision_and_file() {
        let options = parse_args(args(&["--precision", "128", "angles.txt"])).unwrap();
        assert_eq!(options, Options {
            precision: Precision::new(128),
            file: Some("angles.txt".to_string()),
        });
    }

    #[test]
    fn bad_args() {
        assert!(matches!(parse_args(args(&["--precision"])), Err(Error::MissingPrecision)));
        assert!(matches!(parse_args(args(&["-p", "many"])), Err(Error::Precision(_))));
        assert!(matches!(parse_args(args(&["--verbose"])), Err(Error::UnknownArg(_))));
        assert!(matches!(parse_args(args(&["a.txt", "b.txt"])), Err(Error::UnknownArg(_))));
    }

    #[test]
    fn lines() {
        assert_eq!(parse_line("rad 180°20'13''").unwrap(), (Direction::ToRadians, "180°20'13''"));
        assert_eq!(parse_line("  deg   1.234e1 ").unwrap(), (Direction::ToDegrees, "1.234e1"));
        assert!(matches!(parse_line("rad"), Err(Error::Line)));
        assert!(matches!(parse_line("grad 10"), Err(Error::Line)));
    }

    #[test]
    fn plain_numbers_are_numeric() {
        let precision = Precision::default();
        assert!(matches!(to_input("180.57", precision), Input::Float(_)));
        assert!(matches!(to_input("-3", precision), Input::Float(_)));
        assert!(matches!(to_input("1.8e2", precision), Input::Text(_)));
        assert!(matches!(to_input("1.2.3", precision), Input::Text(_)));
    }

    #[test]
    fn converts_lines() {
        let converter = Converter::default();
        let radians = convert("rad 180", &converter).unwrap();
        assert!(radians.starts_with("3.14159265358979323846"), "{radians}");
        assert!(radians.ends_with(" radians"));

        let degrees = convert("deg 1.8E2", &converter).unwrap();
        assert!(degrees.ends_with(" degrees"));
    }

    #[test]
    fn conversion_errors() {
        let converter = Converter::default();
        let Err(Error::Conversion(err)) = convert("rad 1.8E2", &converter) else {
            panic!("expected a conversion error");
        };
        assert!(err.is::<UnsupportedFormat>());

        // plain text that is not a number or notation is rejected by format, never by type
        let Err(Error::Conversion(err)) = convert("rad abc", &converter) else {
            panic!("expected a conversion error");
        };
        assert!(!err.is::<UnsupportedType>());
    }
}
