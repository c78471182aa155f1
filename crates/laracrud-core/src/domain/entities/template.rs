//! Stub templates and the token substitution engine.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Template (Entity)                                          │
//! │  ├── kind: ArtifactKind       which artifact it renders     │
//! │  ├── origin: TemplateOrigin   built-in or a file on disk    │
//! │  └── source: TemplateSource   the stub text                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Token substitution: {{singular}} -> "Invoice"          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Token syntax
//!
//! - `{{name}}` is replaced when `name` is a known token. No whitespace is
//!   allowed inside the braces, so Blade echoes such as `{{ $invoice->id }}`
//!   pass through untouched.
//! - Unknown tokens are left exactly as written.
//! - `\{{` emits a literal `{{` and suppresses substitution of what follows.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use crate::domain::{
    entities::{artifact::ArtifactKind, names::NameSet},
    error::DomainError,
    value_objects::NamingStrategy,
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const ESCAPE: char = '\\';

/// The fixed token set every stub may use.
pub mod tokens {
    pub const SINGULAR: &str = "singular";
    pub const PLURAL: &str = "plural";
    pub const SNAKE_PLURAL: &str = "snakePlural";
    pub const MODEL: &str = "model";
    pub const VARIABLE: &str = "variable";
    /// `lcfirst(plural)`, for collection variables.
    pub const PLURAL_VARIABLE: &str = "pluralVariable";
    pub const NAMESPACE: &str = "namespace";
    pub const BASE_NAMESPACE_CAPITAL: &str = "base_namespace_capital";
    pub const BASE_NAMESPACE_SMALL: &str = "base_namespace_small";
    /// Controller namespace segment, spelled per the naming strategy.
    pub const CONTROLLER_NAMESPACE: &str = "controller_namespace";

    pub const ALL: [&str; 10] = [
        SINGULAR,
        PLURAL,
        SNAKE_PLURAL,
        MODEL,
        VARIABLE,
        PLURAL_VARIABLE,
        NAMESPACE,
        BASE_NAMESPACE_CAPITAL,
        BASE_NAMESPACE_SMALL,
        CONTROLLER_NAMESPACE,
    ];
}

// ── Template ─────────────────────────────────────────────────────────────────

/// Stub text, either compiled into the binary or loaded at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

/// Where a stub came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A stub for one artifact kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub kind: ArtifactKind,
    pub origin: TemplateOrigin,
    pub source: TemplateSource,
}

impl Template {
    pub fn builtin(kind: ArtifactKind, text: &'static str) -> Self {
        Self {
            kind,
            origin: TemplateOrigin::Builtin,
            source: TemplateSource::Static(text),
        }
    }

    pub fn from_file(kind: ArtifactKind, path: impl Into<PathBuf>, text: String) -> Self {
        Self {
            kind,
            origin: TemplateOrigin::File(path.into()),
            source: TemplateSource::Owned(text),
        }
    }

    pub fn text(&self) -> &str {
        self.source.as_str()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.text().trim().is_empty() {
            return Err(DomainError::EmptyTemplate {
                template: self.kind.stub_name().into(),
            });
        }
        Ok(())
    }
}

// ── RenderContext ────────────────────────────────────────────────────────────

/// Token → value map used to render stubs.
///
/// Immutable once built; `with_variable` returns a new context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

/// Tokens found in a template, split by whether the context knows them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub known: BTreeSet<String>,
    pub unknown: BTreeSet<String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard context for a generator run.
    ///
    /// `root_namespace` is the application's root PHP namespace, `App\` in a
    /// stock Laravel install.
    pub fn for_names(names: &NameSet, naming: NamingStrategy, root_namespace: &str) -> Self {
        Self::new()
            .with_variable(tokens::SINGULAR, &names.singular)
            .with_variable(tokens::PLURAL, &names.plural)
            .with_variable(tokens::SNAKE_PLURAL, &names.snake_plural)
            .with_variable(tokens::MODEL, &names.model)
            .with_variable(tokens::VARIABLE, &names.variable)
            .with_variable(tokens::PLURAL_VARIABLE, &names.plural_variable)
            .with_variable(tokens::NAMESPACE, root_namespace)
            .with_variable(tokens::BASE_NAMESPACE_CAPITAL, &names.namespace_capitalized)
            .with_variable(tokens::BASE_NAMESPACE_SMALL, &names.namespace_lowercased)
            .with_variable(tokens::CONTROLLER_NAMESPACE, names.controller_segment(naming))
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Substitute known tokens; everything else is copied verbatim.
    pub fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.walk(text, |piece| out.push_str(piece), |_| {});
        out
    }

    /// Like [`Self::render`] but fails on identifier-shaped tokens the
    /// context does not know.
    pub fn render_strict(&self, template: &str, text: &str) -> Result<String, DomainError> {
        let usage = self.scan(text);
        if let Some(token) = usage.unknown.into_iter().next() {
            return Err(DomainError::UnknownToken {
                template: template.into(),
                token,
            });
        }
        Ok(self.render(text))
    }

    /// Report which tokens a template uses.
    ///
    /// Only identifier-shaped tokens count; Blade expressions are ignored.
    pub fn scan(&self, text: &str) -> TokenUsage {
        let mut usage = TokenUsage::default();
        self.walk(
            text,
            |_| {},
            |token| {
                if self.variables.contains_key(token) {
                    usage.known.insert(token.to_string());
                } else if is_identifier(token) {
                    usage.unknown.insert(token.to_string());
                }
            },
        );
        usage
    }

    /// Single pass over `text`.
    ///
    /// `emit` receives output pieces; `seen` receives every candidate token.
    fn walk<'a>(&'a self, text: &'a str, mut emit: impl FnMut(&'a str), mut seen: impl FnMut(&'a str)) {
        let mut rest = text;

        while let Some(open) = rest.find(OPEN) {
            let (before, after_open) = (&rest[..open], &rest[open + OPEN.len()..]);

            if before.ends_with(ESCAPE) {
                emit(&before[..before.len() - ESCAPE.len_utf8()]);
                emit(OPEN);
                rest = after_open;
                continue;
            }

            emit(before);

            match after_open.find(CLOSE) {
                Some(close) => {
                    let token = &after_open[..close];
                    seen(token);
                    if let Some(value) = self.get(token) {
                        emit(value);
                        rest = &after_open[close + CLOSE.len()..];
                    } else {
                        // Unknown: keep the braces and rescan from inside, so a
                        // nested known token still gets replaced.
                        emit(OPEN);
                        rest = after_open;
                    }
                }
                None => {
                    emit(OPEN);
                    rest = after_open;
                }
            }
        }

        emit(rest);
    }
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::names::GenerationRequest;

    fn invoice_ctx() -> RenderContext {
        let names = NameSet::derive(&GenerationRequest::new("Invoice", "Billing").unwrap());
        RenderContext::for_names(&names, NamingStrategy::Lowercase, "App\\")
    }

    #[test]
    fn substitutes_the_fixed_token_set() {
        let out = invoice_ctx().render(
            "{{namespace}}Http\\Controllers\\{{base_namespace_small}} \
             {{singular}} {{plural}} {{snakePlural}} {{model}} ${{variable}} \
             {{base_namespace_capital}}",
        );
        assert_eq!(
            out,
            "App\\Http\\Controllers\\billing Invoice Invoices invoices Invoice $invoice Billing"
        );
    }

    #[test]
    fn plural_variable_uses_the_inflected_plural() {
        let names = NameSet::derive(&GenerationRequest::new("Category", "Shop").unwrap());
        let ctx = RenderContext::for_names(&names, NamingStrategy::Lowercase, "App\\");
        assert_eq!(ctx.render("${{pluralVariable}}"), "$categories");
    }

    #[test]
    fn controller_namespace_follows_naming_strategy() {
        let names = NameSet::derive(&GenerationRequest::new("Invoice", "Billing").unwrap());
        let ctx = RenderContext::for_names(&names, NamingStrategy::Capitalized, "App\\");
        assert_eq!(ctx.render("{{controller_namespace}}"), "Billing");
    }

    #[test]
    fn leaves_blade_echoes_untouched() {
        let text = "<td>{{ ${{variable}}->name }}</td>";
        assert_eq!(invoice_ctx().render(text), "<td>{{ $invoice->name }}</td>");
    }

    #[test]
    fn unknown_tokens_are_left_in_place() {
        assert_eq!(invoice_ctx().render("a {{unknown}} b"), "a {{unknown}} b");
    }

    #[test]
    fn unterminated_open_is_copied() {
        assert_eq!(invoice_ctx().render("x {{singular"), "x {{singular");
    }

    #[test]
    fn escaped_open_is_literal() {
        assert_eq!(invoice_ctx().render("\\{{singular}}"), "{{singular}}");
    }

    #[test]
    fn nested_known_token_is_still_replaced() {
        assert_eq!(
            invoice_ctx().render("{{ {{singular}} }}"),
            "{{ Invoice }}"
        );
    }

    #[test]
    fn scan_separates_known_and_unknown() {
        let usage = invoice_ctx().scan("{{singular}} {{mystery}} {{ $x }}");
        assert!(usage.known.contains("singular"));
        assert!(usage.unknown.contains("mystery"));
        assert_eq!(usage.unknown.len(), 1);
    }

    #[test]
    fn strict_render_rejects_unknown_tokens() {
        let err = invoice_ctx()
            .render_strict("controller", "{{singlar}}")
            .unwrap_err();
        assert!(matches!(err, DomainError::UnknownToken { token, .. } if token == "singlar"));
    }

    #[test]
    fn rendering_is_pure() {
        let ctx = invoice_ctx();
        let text = "class {{singular}}Controller {}";
        assert_eq!(ctx.render(text), ctx.render(text));
    }

    #[test]
    fn empty_template_fails_validation() {
        let template = Template::builtin(ArtifactKind::Model, "   \n");
        assert!(matches!(
            template.validate(),
            Err(DomainError::EmptyTemplate { .. })
        ));
    }
}
