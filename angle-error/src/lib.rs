//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs a kind with the regions of input it refers to.

// lets `#[derive(ErrorKind)]` refer to this crate by name from within it
extern crate self as angle_error;

use ariadne::{Color, Report};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns this error as [`Any`], so that the concrete kind can be inspected.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing this error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from. This is empty if the
    /// input that caused the error was not text.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn kind<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind::<K>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use angle_attrs::ErrorKind;
    use ariadne::Source;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("`{}` is not an angle", self.text),
        labels = ["this value"],
        help = "write the angle as `10°30'0''`",
    )]
    struct NotAnAngle {
        text: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "nothing to convert")]
    struct Empty;

    /// Renders the report for the given error into a string, without colors.
    fn render(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(input)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn display_uses_message() {
        let err = Error::new(vec![0..3], NotAnAngle { text: "abc".to_string() });
        assert_eq!(err.to_string(), "`abc` is not an angle");
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..3], NotAnAngle { text: "abc".to_string() });
        assert!(err.is::<NotAnAngle>());
        assert!(!err.is::<Empty>());
        assert_eq!(err.kind::<NotAnAngle>().unwrap().text, "abc");
    }

    #[test]
    fn report_contains_message_label_and_help() {
        let input = "abc";
        let err = Error::new(vec![0..3], NotAnAngle { text: input.to_string() });
        let report = render(&err, input);
        assert!(report.contains("`abc` is not an angle"));
        assert!(report.contains("this value"));
        assert!(report.contains("10°30'0''"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::new(Vec::new(), Empty);
        let report = render(&err, "");
        assert!(report.contains("nothing to convert"));
    }
}
