use crate::utility;
use core::fmt;
use proc_macro2::{Span, TokenStream};
use quote::quote_spanned;
use std::{collections::HashSet, ops::Deref};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    token::Comma,
    Attribute, Error, Expr, ExprAssign, ExprLit, ExprPath, FnArg, Ident, ItemFn, Lit, Meta,
    PatType, Type, TypeReference,
};

pub struct Property {
    pub span: Span,
    pub settings: Vec<(Key, Expr, TokenStream)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Seed,
    Size,
    Shrinks,
    Removal,
}

impl Key {
    const KEYS: [Key; 4] = [Key::Seed, Key::Size, Key::Shrinks, Key::Removal];
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        Key::into(*self)
    }
}

impl Deref for Key {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        Key::into(*self)
    }
}

impl From<Key> for &'static str {
    fn from(value: Key) -> Self {
        match value {
            Key::Seed => "seed",
            Key::Size => "size",
            Key::Shrinks => "shrinks",
            Key::Removal => "removal",
        }
    }
}

impl TryFrom<&Ident> for Key {
    type Error = Error;

    fn try_from(value: &Ident) -> Result<Self, Self::Error> {
        for key in Self::KEYS {
            if value == &key {
                return Ok(key);
            }
        }
        Err(utility::error(value, |key| {
            format!(
                "unrecognized key '{key}'\nmust be one of [{}]",
                utility::join(", ", Self::KEYS)
            )
        }))
    }
}

impl TryFrom<&Expr> for Key {
    type Error = Error;

    fn try_from(value: &Expr) -> Result<Self, Self::Error> {
        if let Expr::Path(ExprPath { path, .. }) = value {
            Key::try_from(path.require_ident()?)
        } else {
            Err(utility::error(value, |key| {
                format!(
                    "invalid expression '{key}'\nmust be a key in [{}]",
                    utility::join(", ", Self::KEYS)
                )
            }))
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

const REMOVALS: [(&str, &str); 3] = [("random", "Random"), ("last", "Last"), ("sweep", "Sweep")];

fn removal(right: &Expr) -> Result<TokenStream, Error> {
    match right {
        Expr::Lit(ExprLit {
            lit: Lit::Str(literal),
            ..
        }) => {
            let value = literal.value();
            match REMOVALS
                .into_iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(value.trim()))
            {
                Some((_, variant)) => {
                    let variant = Ident::new(variant, literal.span());
                    Ok(quote_spanned!(right.span() => ::falsify::Removal::#variant))
                }
                None => Err(utility::error(literal, |literal| {
                    format!(
                        "invalid removal strategy {literal}\nmust be one of [{}]",
                        utility::join(", ", REMOVALS.map(|(name, _)| name))
                    )
                })),
            }
        }
        right => Ok(quote_spanned!(right.span() => { #right })),
    }
}

impl Property {
    pub fn new(span: Span) -> Self {
        Self {
            span,
            settings: Vec::new(),
        }
    }

    pub fn run(&self, function: &ItemFn) -> Result<TokenStream, Error> {
        let mut parameters = function.sig.inputs.iter();
        let (parameter, rest) = (parameters.next(), parameters.next());
        let ty = match (parameter, rest) {
            (Some(FnArg::Typed(PatType { ty, .. })), None) => ty.as_ref(),
            (Some(parameter @ FnArg::Receiver(_)), None) => {
                return Err(utility::error(parameter, |parameter| {
                    format!("invalid parameter '{parameter}'")
                }))
            }
            (None, _) => {
                return Err(utility::error(&function.sig, |_| {
                    "missing parameter\na property takes exactly one parameter".into()
                }))
            }
            (Some(_), Some(rest)) => {
                return Err(utility::error(rest, |rest| {
                    format!("excess parameter '{rest}'\na property takes exactly one parameter")
                }))
            }
        };
        let (ty, argument) = match ty {
            Type::Reference(TypeReference {
                elem,
                mutability: None,
                ..
            }) => (elem.as_ref(), quote_spanned!(ty.span() => _0)),
            ty => (ty, quote_spanned!(ty.span() => ::core::clone::Clone::clone(_0))),
        };

        let mut updates = Vec::new();
        for (key, left, right) in self.settings.iter() {
            updates.push(match key {
                Key::Seed => quote_spanned!(left.span() => _falsifier.seed = #right;),
                Key::Size => quote_spanned!(left.span() => _falsifier.sizes.limit = #right;),
                Key::Shrinks => quote_spanned!(left.span() => _falsifier.shrinks = #right;),
                Key::Removal => quote_spanned!(left.span() => _falsifier.removal = #right;),
            });
        }

        let name = &function.sig.ident;
        Ok(quote_spanned!(self.span => ::falsify::run::default::<#ty, _, _, _>(
            |_falsifier| { #(#updates)* },
            |_0: &<#ty as ::falsify::FullGenerate>::Item| #name(#argument)
        )))
    }
}

impl Parse for Property {
    fn parse(input: ParseStream) -> Result<Self, Error> {
        let mut property = Property::new(input.span());
        let mut keys = Key::KEYS.into_iter().collect::<HashSet<_>>();
        for expression in Punctuated::<Expr, Comma>::parse_terminated(input)? {
            match expression {
                Expr::Assign(ExprAssign { left, right, .. }) => {
                    let key = Key::try_from(left.as_ref())?;
                    if !keys.remove(&key) {
                        return Err(utility::error(left, |left| {
                            format!("duplicate key '{left}'")
                        }));
                    }
                    let right = match key {
                        Key::Seed => quote_spanned!(right.span() => { #right } as u64),
                        Key::Size => quote_spanned!(right.span() => { #right } as usize),
                        Key::Shrinks => quote_spanned!(right.span() => { #right } as usize),
                        Key::Removal => removal(&right)?,
                    };
                    property.settings.push((key, *left, right));
                }
                expression => {
                    return Err(utility::error(expression, |expression| {
                        format!("invalid expression '{expression}'\nonly configuration assignments of the form 'key = value' are allowed")
                    }))
                }
            }
        }
        Ok(property)
    }
}

impl TryFrom<&Attribute> for Property {
    type Error = Error;

    fn try_from(value: &Attribute) -> Result<Self, Self::Error> {
        const PATHS: [&[&str]; 2] = [&["falsify", "property"], &["property"]];

        let path = value.path();
        if PATHS.into_iter().any(|legal| utility::is(path, legal)) {
            if matches!(value.meta, Meta::Path(_)) {
                Ok(Property::new(value.span()))
            } else {
                value.meta.require_list()?.parse_args()
            }
        } else {
            Err(utility::error(path, |path| {
                let paths = PATHS.into_iter().map(|path| utility::join("::", path));
                format!(
                    "invalid attribute path '{path}'\nmust be one of [{}]",
                    utility::join(", ", paths)
                )
            }))
        }
    }
}
