//! Generation input and the naming variants derived from it.
//!
//! ```text
//! GenerationRequest { "OrderItem", "Billing" }
//!        │
//!        ▼  NameSet::derive
//! singular      OrderItem          variable              orderItem
//! plural        OrderItems         namespace_capitalized Billing
//! snake_plural  order-items        namespace_lowercased  billing
//! ```
//!
//! Inflection only touches the last word of a PascalCase name and keeps the
//! caller's casing for the unchanged prefix, so `HTTPRequest` becomes
//! `HTTPRequests` rather than `Httprequests`.

use inflector::Inflector;
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError, validation::DomainValidator, value_objects::NamingStrategy,
};

/// Irregular nouns applied before falling back to the rule-based inflector.
/// Also holds `-us` singulars whose Latin plural Laravel does not use.
///
/// Stored lower-case as `(singular, plural)`.
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("leaf", "leaves"),
    ("criterion", "criteria"),
    ("bus", "buses"),
    ("bonus", "bonuses"),
    ("campus", "campuses"),
    ("census", "censuses"),
    ("octopus", "octopuses"),
    ("radius", "radiuses"),
    ("status", "statuses"),
    ("virus", "viruses"),
];

/// Nouns whose singular and plural are spelled the same.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "metadata",
    "news",
    "series",
    "sheep",
    "species",
];

/// Immutable user input for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    model_name: String,
    namespace: String,
}

impl GenerationRequest {
    /// Build a validated request.
    ///
    /// Both parts are trimmed, must be non-empty and identifier-like
    /// (they end up in PHP class names and file paths).
    pub fn new(
        model_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let model_name = model_name.into().trim().to_string();
        let namespace = namespace.into().trim().to_string();

        if model_name.is_empty() {
            return Err(DomainError::EmptyModelName);
        }
        if namespace.is_empty() {
            return Err(DomainError::EmptyNamespace);
        }
        DomainValidator::validate_identifier("model name", &model_name)?;
        DomainValidator::validate_identifier("namespace", &namespace)?;

        Ok(Self {
            model_name,
            namespace,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// Every spelling of the model and namespace the templates and paths need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSet {
    /// Model name exactly as given.
    pub model: String,
    pub singular: String,
    pub plural: String,
    /// Kebab-cased plural used in URLs and route names.
    pub snake_plural: String,
    /// `lcfirst(singular)`
    pub variable: String,
    /// `lcfirst(plural)`
    pub plural_variable: String,
    pub namespace_capitalized: String,
    pub namespace_lowercased: String,
}

impl NameSet {
    /// Derive all variants. Pure: the same request always yields the same set.
    pub fn derive(request: &GenerationRequest) -> Self {
        let model = request.model_name().to_string();
        let singular = singularize(&model);
        let plural = pluralize(&model);
        let snake_plural = plural.to_kebab_case();
        let variable = lcfirst(&singular);
        let plural_variable = lcfirst(&plural);

        let lowered = request.namespace().to_lowercase();

        Self {
            model,
            singular,
            plural,
            snake_plural,
            variable,
            plural_variable,
            namespace_capitalized: ucfirst(&lowered),
            namespace_lowercased: lcfirst(&lowered),
        }
    }

    /// Directory/namespace segment for controllers under the given strategy.
    pub fn controller_segment(&self, strategy: NamingStrategy) -> &str {
        match strategy {
            NamingStrategy::Lowercase => &self.namespace_lowercased,
            NamingStrategy::Capitalized => &self.namespace_capitalized,
        }
    }

    /// `InvoiceController`
    pub fn controller_class(&self) -> String {
        format!("{}Controller", self.singular)
    }

    /// `InvoiceRepository`
    pub fn repository_class(&self) -> String {
        format!("{}Repository", self.singular)
    }

    /// `InvoiceRepositoryInterface`
    pub fn repository_interface(&self) -> String {
        format!("{}RepositoryInterface", self.singular)
    }
}

// ── Inflection ───────────────────────────────────────────────────────────────

/// Pluralize the last word of `word`, keeping the caller's casing.
pub fn pluralize(word: &str) -> String {
    inflect_last_word(word, |lower| {
        if is_uncountable(lower) {
            return lower.to_string();
        }
        match irregular(lower) {
            Some((_, plural)) => plural.to_string(),
            None => lower.to_plural(),
        }
    })
}

/// Singularize the last word of `word`, keeping the caller's casing.
pub fn singularize(word: &str) -> String {
    inflect_last_word(word, |lower| {
        if is_uncountable(lower) {
            return lower.to_string();
        }
        match irregular(lower) {
            Some((singular, _)) => singular.to_string(),
            None => lower.to_singular(),
        }
    })
}

fn is_uncountable(lower: &str) -> bool {
    UNCOUNTABLE.iter().any(|word| *word == lower)
}

fn irregular(lower: &str) -> Option<(&'static str, &'static str)> {
    IRREGULARS
        .iter()
        .find(|(singular, plural)| *singular == lower || *plural == lower)
        .copied()
}

fn inflect_last_word(word: &str, inflect: impl Fn(&str) -> String) -> String {
    let split = last_word_start(word);
    let (head, tail) = word.split_at(split);
    if tail.is_empty() {
        return word.to_string();
    }

    let lower = tail.to_lowercase();
    let inflected = inflect(&lower);
    format!("{head}{}", transfer_case(tail, &inflected))
}

/// Byte index where the last word of a PascalCase / snake_case name starts.
fn last_word_start(word: &str) -> usize {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut start = 0;

    for i in 1..chars.len() {
        let (idx, c) = chars[i];
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|(_, n)| *n);

        if prev == '_' {
            start = idx;
        } else if c.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next.is_some_and(char::is_lowercase)))
        {
            start = idx;
        }
    }

    start
}

/// Re-apply the original casing to the part the inflector left unchanged.
///
/// `Category` + `categories` → `Categories`; `Person` + `people` → `People`.
fn transfer_case(original: &str, inflected: &str) -> String {
    let lower = original.to_lowercase();
    let common = lower
        .chars()
        .zip(inflected.chars())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .sum::<usize>();

    let mut out = String::with_capacity(inflected.len());
    if common > 0 && original.is_char_boundary(common) {
        out.push_str(&original[..common]);
        out.push_str(&inflected[common..]);
    } else if original.starts_with(char::is_uppercase) {
        out.push_str(&ucfirst(inflected));
    } else {
        out.push_str(inflected);
    }
    out
}

pub(crate) fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(model: &str, namespace: &str) -> NameSet {
        NameSet::derive(&GenerationRequest::new(model, namespace).unwrap())
    }

    #[test]
    fn invoice_billing_end_to_end_names() {
        let n = names("Invoice", "Billing");
        assert_eq!(n.singular, "Invoice");
        assert_eq!(n.plural, "Invoices");
        assert_eq!(n.snake_plural, "invoices");
        assert_eq!(n.variable, "invoice");
        assert_eq!(n.namespace_capitalized, "Billing");
        assert_eq!(n.namespace_lowercased, "billing");
        assert_eq!(n.controller_class(), "InvoiceController");
    }

    #[test]
    fn irregular_plurals() {
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("Child"), "Children");
        assert_eq!(singularize("People"), "Person");
        assert_eq!(singularize("Categories"), "Category");
    }

    #[test]
    fn latin_looking_singulars_are_kept() {
        assert_eq!(singularize("Campus"), "Campus");
        assert_eq!(singularize("Status"), "Status");
        assert_eq!(pluralize("Campus"), "Campuses");
        assert_eq!(pluralize("Virus"), "Viruses");
        assert_eq!(pluralize("Octopus"), "Octopuses");
        assert_eq!(singularize("Viruses"), "Virus");
        assert_eq!(pluralize("OrderStatus"), "OrderStatuses");
        assert_eq!(singularize("Menus"), "Menu");
    }

    #[test]
    fn uncountable_nouns_are_unchanged() {
        assert_eq!(singularize("Data"), "Data");
        assert_eq!(pluralize("Data"), "Data");
        assert_eq!(singularize("Media"), "Media");
        assert_eq!(pluralize("Media"), "Media");
        assert_eq!(pluralize("SensorData"), "SensorData");
    }

    #[test]
    fn campus_names_every_artifact_after_itself() {
        let n = names("Campus", "School");
        assert_eq!(n.singular, "Campus");
        assert_eq!(n.plural, "Campuses");
        assert_eq!(n.snake_plural, "campuses");
        assert_eq!(n.controller_class(), "CampusController");
    }

    #[test]
    fn compound_names_inflect_last_word_only() {
        assert_eq!(pluralize("OrderItem"), "OrderItems");
        assert_eq!(pluralize("SalesPerson"), "SalesPeople");
        assert_eq!(pluralize("ProductCategory"), "ProductCategories");
    }

    #[test]
    fn snake_plural_is_hyphenated() {
        assert_eq!(names("OrderItem", "Shop").snake_plural, "order-items");
        assert_eq!(names("Category", "Shop").snake_plural, "categories");
    }

    #[test]
    fn plural_input_is_singularized() {
        let n = names("Invoices", "Billing");
        assert_eq!(n.singular, "Invoice");
        assert_eq!(n.plural, "Invoices");
        assert_eq!(n.model, "Invoices");
    }

    #[test]
    fn namespace_case_folding() {
        let n = names("Invoice", "ADMIN");
        assert_eq!(n.namespace_capitalized, "Admin");
        assert_eq!(n.namespace_lowercased, "admin");
        assert_eq!(n.controller_segment(NamingStrategy::Lowercase), "admin");
        assert_eq!(n.controller_segment(NamingStrategy::Capitalized), "Admin");
    }

    #[test]
    fn variable_is_lcfirst_singular() {
        assert_eq!(names("OrderItem", "Shop").variable, "orderItem");
    }

    #[test]
    fn plural_variable_is_lcfirst_plural() {
        assert_eq!(names("Person", "Hr").plural_variable, "people");
        assert_eq!(names("ProductCategory", "Shop").plural_variable, "productCategories");
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(names("Person", "Hr"), names("Person", "Hr"));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(
            GenerationRequest::new("  ", "Billing"),
            Err(DomainError::EmptyModelName)
        );
        assert_eq!(
            GenerationRequest::new("Invoice", ""),
            Err(DomainError::EmptyNamespace)
        );
    }

    #[test]
    fn path_like_inputs_are_rejected() {
        assert!(GenerationRequest::new("../Invoice", "Billing").is_err());
        assert!(GenerationRequest::new("Invoice", "Billing/Admin").is_err());
        assert!(GenerationRequest::new("Order Item", "Billing").is_err());
    }

    #[test]
    fn last_word_boundaries() {
        assert_eq!(last_word_start("Invoice"), 0);
        assert_eq!(last_word_start("OrderItem"), 5);
        assert_eq!(last_word_start("HTTPRequest"), 4);
        assert_eq!(last_word_start("order_item"), 6);
    }
}
