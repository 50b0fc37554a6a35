use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// One `tag = expression` pair inside the `error` attribute.
struct Tag {
    name: Ident,
    value: Expr,
}

impl Parse for Tag {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        Ok(Self { name, value: input.parse()? })
    }
}

/// The tags of the `error` attribute.
#[derive(Default)]
struct ErrorArgs {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
    note: Option<Expr>,
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = Self::default();
        for tag in Punctuated::<Tag, Token![,]>::parse_terminated(input)? {
            let slot = match tag.name.to_string().as_str() {
                "message" => &mut args.message,
                "labels" => &mut args.labels,
                "help" => &mut args.help,
                "note" => &mut args.note,
                other => {
                    return Err(syn::Error::new_spanned(&tag.name, format!("unknown tag `{}`", other)));
                },
            };
            if slot.replace(tag.value).is_some() {
                return Err(syn::Error::new_spanned(&tag.name, "duplicate tag"));
            }
        }
        Ok(args)
    }
}

/// The struct to derive `ErrorKind` for.
pub struct ErrorKindTarget {
    pub name: Ident,
    fields: Fields,
    message: Expr,
    labels: Expr,
    help: Option<Expr>,
    note: Option<Expr>,
}

impl ErrorKindTarget {
    /// Brings the named fields of the struct into scope. Unit structs have nothing to bring.
    fn bind_fields(&self) -> Result<TokenStream2> {
        let name = &self.name;
        match &self.fields {
            Fields::Named(fields) => {
                let fields = fields.named.iter().map(|field| &field.ident);
                Ok(quote! { let #name { #(#fields),* } = self; })
            },
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                name,
                "`ErrorKind` cannot be derived for tuple structs",
            )),
            Fields::Unit => Ok(quote! {}),
        }
    }
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let attributes = input.call(Attribute::parse_outer)?;
        let item = input.parse::<ItemStruct>()?;

        let args = match attributes.iter().find(|attr| attr.path().is_ident("error")) {
            Some(attr) => attr.parse_args::<ErrorArgs>()?,
            None => ErrorArgs::default(),
        };
        let missing = |tag: &str| syn::Error::new(
            Span::call_site(),
            format!("`#[error(..)]` on `{}` needs a `{}` tag", item.ident, tag),
        );

        Ok(Self {
            message: args.message.ok_or_else(|| missing("message"))?,
            labels: args.labels.ok_or_else(|| missing("labels"))?,
            help: args.help,
            note: args.note,
            name: item.ident,
            fields: item.fields,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bind_fields = match self.bind_fields() {
            Ok(bind_fields) => bind_fields,
            Err(err) => return tokens.extend(err.to_compile_error()),
        };
        let (message, labels) = (&self.message, &self.labels);
        let help = self.help.as_ref().map(|help| quote! { builder.set_help(#help); });
        let note = self.note.as_ref().map(|note| quote! { builder.set_note(#note); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #bind_fields

                // labels are paired with spans in order; an empty label only highlights its span
                let labels = #labels
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(acram_error::EXPR);
                        let text = text.to_string();
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    })
                    .collect::<Vec<_>>();

                let mut builder = ariadne::Report::build(
                    ariadne::ReportKind::Error,
                    src_id,
                    acram_error::offset(spans),
                )
                    .with_message(#message)
                    .with_labels(labels);
                #help
                #note
                builder.finish()
            }
        });
    }
}
