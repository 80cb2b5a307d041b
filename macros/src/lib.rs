//! Proc macros for canopy: `tree!` declarative node composition.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature on `canopy`.

use proc_macro::TokenStream;

mod tree_macro;

/// RSX-style tree declaration macro.
///
/// Transforms `<TreeNode>` markup into a `Vec<canopy::registry::TreeItem>`
/// built with the `TreeItem` builder API.
///
/// # Syntax
///
/// - `<TreeNode key="k" />`: node without children
/// - `<TreeNode key="k"> ... </TreeNode>`: node with children
///
/// # Attributes
///
/// - `key="..."` (required) becomes the `TreeItem::new()` argument
/// - `title="..."` and `value="..."` become `.with_title(..)` / `.with_value(..)`
/// - `disabled`, `checkable`, `selectable` and `leaf` take `true` / `false`;
///   a bare flag means `true`
///
/// # Example
///
/// ```ignore
/// let items = tree! {
///     <TreeNode key="0-0" title="parent">
///         <TreeNode key="0-0-0" title="disabled child" disabled />
///         <TreeNode key="0-0-1" title="leaf" leaf=true />
///     </TreeNode>
/// };
/// ```
#[proc_macro]
pub fn tree(input: TokenStream) -> TokenStream {
    tree_macro::tree_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
