use acram_attrs::ErrorKind;
use acram_error::{Error, ErrorKind};
use ariadne::Source;

/// Test error pointing at a single operand.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("bad operand at position {}", acram_error::offset(spans)),
    labels = ["this operand"],
    help = format!("try `{}` instead", replacement),
    note = "operands are numbers or names",
)]
pub struct BadOperand {
    pub replacement: &'static str,
}

/// Test error without any fields.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "nothing to see", labels = [""])]
pub struct Empty;

/// Renders the report of the error to a string without color codes.
fn render(error: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    error.build_report("input")
        .write(("input", Source::from(input)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn report_contains_message_label_and_help() {
    let error = Error::new(vec![4..5], BadOperand { replacement: "y" });
    let report = render(&error, "1 + $");

    assert!(report.contains("bad operand at position 4"));
    assert!(report.contains("this operand"));
    assert!(report.contains("try `y` instead"));
    assert!(report.contains("operands are numbers or names"));
}

#[test]
fn downcast_to_concrete_kind() {
    let error = Error::new(vec![0..1], Empty);
    assert!(error.is::<Empty>());
    assert!(!error.is::<BadOperand>());
    assert_eq!(error.downcast_ref::<Empty>(), Some(&Empty));
    assert_eq!(error.offset(), 0);
}

#[test]
fn empty_label_only_marks_span() {
    let error = Error::new(vec![0..1], Empty);
    let report = render(&error, "x");
    assert!(report.contains("nothing to see"));
    assert!(!report.contains("Help"));
}
