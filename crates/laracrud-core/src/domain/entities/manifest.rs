//! The host project's `composer.json`, reduced to what the generator touches.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// One PSR-4 namespace → directory mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Psr4Entry {
    pub namespace: String,
    pub path: String,
}

impl Psr4Entry {
    /// The two mappings generated repositories and requests need.
    pub fn required(root_namespace: &str) -> [Self; 2] {
        [
            Self {
                namespace: format!("{root_namespace}Repositories\\"),
                path: "app/Repositories/".into(),
            },
            Self {
                namespace: format!("{root_namespace}Http\\Requests\\"),
                path: "app/Http/Requests/".into(),
            },
        ]
    }
}

/// An ordered JSON document; key order survives a load/save cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoloadManifest {
    document: Value,
}

impl AutoloadManifest {
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let document: Value =
            serde_json::from_str(text).map_err(|e| DomainError::MalformedManifest {
                reason: e.to_string(),
            })?;
        Self::from_value(document)
    }

    pub fn from_value(document: Value) -> Result<Self, DomainError> {
        if !document.is_object() {
            return Err(DomainError::MalformedManifest {
                reason: "top-level value is not an object".into(),
            });
        }
        Ok(Self { document })
    }

    pub fn as_value(&self) -> &Value {
        &self.document
    }

    /// Current `autoload.psr-4` mapping, if any.
    pub fn psr4(&self) -> Option<&Map<String, Value>> {
        self.document
            .get("autoload")
            .and_then(|a| a.get("psr-4"))
            .and_then(Value::as_object)
    }

    pub fn has_psr4(&self, namespace: &str) -> bool {
        self.psr4().is_some_and(|m| m.contains_key(namespace))
    }

    /// Add every missing entry; return the ones actually added.
    ///
    /// Missing `autoload` / `psr-4` objects are created. Existing keys keep
    /// their value and position.
    pub fn ensure_psr4(&mut self, entries: &[Psr4Entry]) -> Result<Vec<Psr4Entry>, DomainError> {
        let missing: Vec<Psr4Entry> = entries
            .iter()
            .filter(|e| !self.has_psr4(&e.namespace))
            .cloned()
            .collect();
        if missing.is_empty() {
            return Ok(missing);
        }

        let psr4 = self.psr4_mut()?;
        for entry in &missing {
            psr4.insert(entry.namespace.clone(), Value::String(entry.path.clone()));
        }
        Ok(missing)
    }

    fn psr4_mut(&mut self) -> Result<&mut Map<String, Value>, DomainError> {
        let root = self
            .document
            .as_object_mut()
            .ok_or_else(|| malformed("top-level value is not an object"))?;

        let autoload = root
            .entry("autoload")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| malformed("\"autoload\" is not an object"))?;

        autoload
            .entry("psr-4")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| malformed("\"autoload.psr-4\" is not an object"))
    }

    /// Pretty JSON with four-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, DomainError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.document
            .serialize(&mut ser)
            .map_err(|e| malformed(&e.to_string()))?;

        let mut text = String::from_utf8(buf).map_err(|e| malformed(&e.to_string()))?;
        text.push('\n');
        Ok(text)
    }
}

fn malformed(reason: &str) -> DomainError {
    DomainError::MalformedManifest {
        reason: reason.to_string(),
    }
}
