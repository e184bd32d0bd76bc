// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel for pre-trusted markup.
//!
//! Some translation entries (keys ending in `_html`) carry inline markup that
//! must reach the DOM unescaped. Wrapping them in [`TrustedHtml`] keeps that
//! content apart from plain text, which Yew always escapes. Nothing here
//! sanitizes: whoever authors the translation catalog owns that.

use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedHtml(AttrValue);

impl TrustedHtml {
    pub fn new(markup: impl Into<AttrValue>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Inject the markup verbatim into the virtual DOM.
    pub fn to_html(&self) -> Html {
        Html::from_html_unchecked(self.0.clone())
    }
}

impl From<String> for TrustedHtml {
    fn from(markup: String) -> Self {
        Self::new(markup)
    }
}

impl From<&'static str> for TrustedHtml {
    fn from(markup: &'static str) -> Self {
        Self::new(markup)
    }
}
