//! RSX tree! macro: parse `<TreeNode>` markup and generate `TreeItem` builder code.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, Lit, LitBool, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A parsed attribute: `name="value"`, `name=true` or a bare `name`.
#[derive(Clone)]
pub(crate) struct Attribute {
    pub name: Ident,
    pub value: Lit,
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match &self.value {
            Lit::Str(s) => s.value(),
            Lit::Bool(b) => b.value.to_string(),
            _ => "<literal>".to_owned(),
        };
        f.debug_struct("Attribute")
            .field("name", &self.name.to_string())
            .field("value", &value)
            .finish()
    }
}

/// A parsed node: `<TreeNode attrs... />` or `<TreeNode attrs...> children </TreeNode>`.
#[derive(Clone)]
pub(crate) struct Element {
    pub tag: Ident,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Element>,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag.to_string())
            .field("attrs", &self.attrs)
            .field("children", &self.children)
            .finish()
    }
}

/// The top-level tree! input: a forest of nodes.
#[derive(Debug)]
struct TreeInput {
    elements: Vec<Element>,
}

// ---------------------------------------------------------------------------
// Attribute tables
// ---------------------------------------------------------------------------

const TAG: &str = "TreeNode";

/// String attributes, mapped to `with_<name>` builder calls.
const STRING_ATTRS: &[&str] = &["title", "value"];

/// Flag attributes, mapped to `<name>(bool)` builder calls.
const FLAG_ATTRS: &[&str] = &["disabled", "checkable", "selectable", "leaf"];

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for TreeInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut elements = Vec::new();
        while !input.is_empty() {
            elements.push(parse_element(input)?);
        }
        Ok(TreeInput { elements })
    }
}

/// Parse one `<TreeNode>` element and its children.
pub(crate) fn parse_element(input: ParseStream) -> Result<Element> {
    input.parse::<Token![<]>()?;

    let tag: Ident = input.parse()?;
    if tag != TAG {
        return Err(Error::new(
            tag.span(),
            format!("unknown element `<{tag}>`, expected `<{TAG}>`"),
        ));
    }

    let mut attrs = Vec::new();
    loop {
        if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            input.parse::<Token![>]>()?;
            return Ok(Element {
                tag,
                attrs,
                children: Vec::new(),
            });
        }
        if input.peek(Token![>]) {
            input.parse::<Token![>]>()?;
            break;
        }

        let name: Ident = input.parse()?;
        let value = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            input.parse::<Lit>()?
        } else {
            // Bare flag: `<TreeNode key="a" disabled />`.
            Lit::Bool(LitBool::new(true, name.span()))
        };
        attrs.push(Attribute { name, value });
    }

    let mut children = Vec::new();
    loop {
        if input.peek(Token![<]) && input.peek2(Token![/]) {
            input.parse::<Token![<]>()?;
            input.parse::<Token![/]>()?;
            let closing_tag: Ident = input.parse()?;
            if closing_tag != tag {
                return Err(Error::new(
                    closing_tag.span(),
                    format!("mismatched closing tag: expected `</{tag}>`, found `</{closing_tag}>`"),
                ));
            }
            input.parse::<Token![>]>()?;
            break;
        }

        if input.peek(Token![<]) {
            children.push(parse_element(input)?);
        } else {
            return Err(input.error("expected `<` to start a child node or `</` to close the parent"));
        }
    }

    Ok(Element {
        tag,
        attrs,
        children,
    })
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Generate the builder expression for one element.
fn generate_element(elem: &Element) -> Result<TokenStream> {
    let key = elem
        .attrs
        .iter()
        .find(|a| a.name == "key")
        .ok_or_else(|| Error::new(elem.tag.span(), "`<TreeNode>` requires a `key` attribute"))?;
    let key = match &key.value {
        Lit::Str(s) => s,
        other => return Err(Error::new(other.span(), "`key` must be a string literal")),
    };

    let mut builder_calls = Vec::new();
    for attr in &elem.attrs {
        let name = attr.name.to_string();
        if name == "key" {
            continue;
        }
        match (&attr.value, name.as_str()) {
            (Lit::Str(val), n) if STRING_ATTRS.contains(&n) => {
                let method = Ident::new(&format!("with_{n}"), attr.name.span());
                builder_calls.push(quote! { .#method(#val) });
            }
            (Lit::Bool(val), n) if FLAG_ATTRS.contains(&n) => {
                let method = &attr.name;
                builder_calls.push(quote! { .#method(#val) });
            }
            (_, n) if STRING_ATTRS.contains(&n) => {
                return Err(Error::new(attr.value.span(), format!("`{n}` must be a string literal")));
            }
            (_, n) if FLAG_ATTRS.contains(&n) => {
                return Err(Error::new(attr.value.span(), format!("`{n}` must be `true` or `false`")));
            }
            (_, n) => {
                return Err(Error::new(attr.name.span(), format!("unknown attribute `{n}`")));
            }
        }
    }

    for child in &elem.children {
        let child_code = generate_element(child)?;
        builder_calls.push(quote! { .with_child(#child_code) });
    }

    Ok(quote! {
        ::canopy::registry::TreeItem::new(#key) #(#builder_calls)*
    })
}

/// Entry point: generate code for the entire tree! macro.
pub(crate) fn tree_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: TreeInput = syn::parse2(input)?;

    if parsed.elements.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "tree! macro requires at least one node",
        ));
    }

    let items = parsed
        .elements
        .iter()
        .map(generate_element)
        .collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        {
            let __items: ::std::vec::Vec<::canopy::registry::TreeItem> = ::std::vec![#(#items),*];
            __items
        }
    })
}

// ===========================================================================
// Tests
// ===========================================================================
