use angle_convert::ConversionError;
use ariadne::Source;
use std::num::ParseIntError;

/// Utility enum to package any error that can occur while reading arguments or converting.
#[derive(Debug)]
pub enum Error {
    /// The line is not of the form `<rad|deg> <value>`.
    Line,

    /// An unknown command line argument.
    UnknownArg(String),

    /// The `--precision` flag is missing its value.
    MissingPrecision,

    /// The value of the `--precision` flag is not a number.
    Precision(ParseIntError),

    /// The conversion failed.
    Conversion(ConversionError),
}

impl Error {
    /// Report this error to stderr.
    ///
    /// Conversion errors are rendered as reports that point into `input`, the value that was
    /// being converted. The `ariadne` crate's [`Report`] type does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: ariadne::Report
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Conversion(err) => {
                let report = err.build_report("input");
                if let Err(io_err) = report.eprint(("input", Source::from(input))) {
                    log::error!("failed to print report: {}", io_err);
                    eprintln!("{}", err);
                }
            },
            _ => eprintln!("{}", self),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line => write!(f, "Format: <rad|deg> <value>, e.g. rad 180°20'13'' or deg 1.234e1"),
            Self::UnknownArg(arg) => write!(f, "unknown argument `{}`; usage: angle-repl [--precision <bits>] [FILE]", arg),
            Self::MissingPrecision => write!(f, "`--precision` requires a number of bits"),
            Self::Precision(err) => write!(f, "invalid precision: {}", err),
            Self::Conversion(err) => write!(f, "{}", err),
        }
    }
}

impl From<ParseIntError> for Error {
    fn from(error: ParseIntError) -> Self {
        Self::Precision(error)
    }
}

impl From<ConversionError> for Error {
    fn from(error: ConversionError) -> Self {
        Self::Conversion(error)
    }
}
