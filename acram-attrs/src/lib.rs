mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives `acram_error::ErrorKind` for a unit struct or a struct with named fields.
///
/// The report is described by the `error` attribute:
/// ```
/// use acram_attrs::ErrorKind;
/// use acram_error::{Error, ErrorKind};
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("missing operand at position {}", acram_error::offset(spans)),
///     labels = ["I expected to see an operand here"],
///     help = format!("the argument of `{}` goes in parentheses", name),
///     note = "named functions take exactly one argument",
/// )]
/// pub struct MissingArgument {
///     pub name: String,
/// }
///
/// let error = Error::new(vec![5..8], MissingArgument { name: String::from("sin") });
/// assert_eq!(error.downcast_ref::<MissingArgument>().map(|kind| kind.name.as_str()), Some("sin"));
///
/// let mut report = Vec::new();
/// error.build_report("input")
///     .write(("input", ariadne::Source::from("f(x)=sin x")), &mut report)
///     .unwrap();
/// let report = String::from_utf8_lossy(&report);
/// assert!(report.contains("missing operand at position 5"));
/// assert!(report.contains("the argument of `sin` goes in parentheses"));
/// assert!(report.contains("named functions take exactly one argument"));
/// ```
///
/// | Tag       | Required | Description                                                       |
/// | --------- | -------- | ----------------------------------------------------------------- |
/// | `message` | yes      | The headline of the report.                                       |
/// | `labels`  | yes      | One label per span of the error, in order. Empty labels only mark |
/// |           |          | their span.                                                       |
/// | `help`    | no       | What the user can do to fix the error.                            |
/// | `note`    | no       | Additional context shown below the help.                          |
///
/// Every tag is an expression evaluated inside `build_report`, with the struct's fields and the
/// `spans` slice in scope. The generated code names `ariadne` and `acram_error`, so the deriving
/// crate must depend on both and have the `ErrorKind` trait in scope.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
