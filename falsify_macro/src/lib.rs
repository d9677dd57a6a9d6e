#![forbid(unsafe_code)]

mod property;
mod utility;

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use std::mem::{replace, take};
use syn::{parse_macro_input, ItemFn, Visibility};

/// Turns a function of one parameter into a test that searches for a minimal
/// value of that parameter's type on which the function fails.
///
/// ```ignore
/// #[property(seed = 7, removal = "sweep")]
/// fn reverse_twice(items: &Vec<i64>) -> bool {
///     let mut copy = items.clone();
///     copy.reverse();
///     copy.reverse();
///     &copy == items
/// }
/// ```
#[proc_macro_attribute]
pub fn property(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let property: property::Property = parse_macro_input!(attribute);
    let mut function: ItemFn = parse_macro_input!(item);
    let name = replace(&mut function.sig.ident, format_ident!("property"));
    let visibility = replace(&mut function.vis, Visibility::Inherited);
    let mut attributes = take(&mut function.attrs);
    let mut duplicate = None;
    attributes.retain(|attribute| match property::Property::try_from(attribute) {
        Ok(_) => {
            duplicate.get_or_insert_with(|| {
                utility::error(attribute, |attribute| {
                    format!("duplicate attribute '{attribute}'\nonly one '#[property]' is allowed per function")
                })
            });
            false
        }
        Err(_) => true,
    });
    if let Some(error) = duplicate {
        return error.to_compile_error().into();
    }
    let run = match property.run(&function) {
        Ok(run) => run,
        Err(error) => return error.to_compile_error().into(),
    };
    quote! {
        #(#attributes)*
        #[test]
        #visibility fn #name() {
            #function
            #run;
        }
    }
    .into()
}
