use quote::{format_ident, quote};
use syn::{
    Ident, LitInt, Result,
    parse::{Parse, ParseStream},
    parse_macro_input,
    token::Comma,
};

struct AllTuples {
    macro_ident: Ident,
    start: usize,
    end: usize,
    prefix: Ident,
}

impl Parse for AllTuples {
    fn parse(input: ParseStream) -> Result<Self> {
        let macro_ident = input.parse::<Ident>()?;
        input.parse::<Comma>()?;
        let start_lit = input.parse::<LitInt>()?;
        let start = start_lit.base10_parse()?;
        input.parse::<Comma>()?;
        let end_lit = input.parse::<LitInt>()?;
        let end = end_lit.base10_parse()?;

        if start > end {
            return Err(syn::Error::new(
                end_lit.span(),
                "tuple range end must not be smaller than its start",
            ));
        }

        // Optional identifier prefix for the generated type parameters.
        let prefix = if input.peek(Comma) {
            input.parse::<Comma>()?;
            input.parse::<Ident>()?
        } else {
            format_ident!("T")
        };

        Ok(AllTuples {
            macro_ident,
            start,
            end,
            prefix,
        })
    }
}

/// Invokes `macro_ident!` once per tuple arity in `start..=end`.
///
/// `all_tuples!(impl_bundle, 1, 3, C)` expands to:
///
/// ```ignore
/// impl_bundle!(C0);
/// impl_bundle!(C0, C1);
/// impl_bundle!(C0, C1, C2);
/// ```
///
/// The prefix defaults to `T` when omitted.
#[proc_macro]
pub fn all_tuples(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as AllTuples);
    let idents: Vec<Ident> = (0..input.end)
        .map(|i| format_ident!("{}{}", input.prefix, i))
        .collect();

    let macro_ident = &input.macro_ident;
    let invocations = (input.start..=input.end).map(|arity| {
        let params = &idents[..arity];

        quote! {
            #macro_ident!(#(#params),*);
        }
    });

    quote! {
        #(
            #invocations
        )*
    }
    .into()
}
