//! The twelve artifacts a CRUD scaffold consists of.
//!
//! Each [`ArtifactKind`] knows the stub it is rendered from and where the
//! rendered file lands inside a Laravel project.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::names::NameSet, error::DomainError, value_objects::NamingStrategy,
};

/// A generated artifact kind, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArtifactKind {
    Controller,
    Repository,
    RepositoryInterface,
    Model,
    Migration,
    StoreRequest,
    UpdateRequest,
    IndexView,
    CreateView,
    EditView,
    ShowView,
    ArchiveView,
}

impl ArtifactKind {
    pub const ALL: [Self; 12] = [
        Self::Controller,
        Self::Repository,
        Self::RepositoryInterface,
        Self::Model,
        Self::Migration,
        Self::StoreRequest,
        Self::UpdateRequest,
        Self::IndexView,
        Self::CreateView,
        Self::EditView,
        Self::ShowView,
        Self::ArchiveView,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Controller => "Controller",
            Self::Repository => "Repository",
            Self::RepositoryInterface => "RepositoryInterface",
            Self::Model => "Model",
            Self::Migration => "Migration",
            Self::StoreRequest => "StoreRequest",
            Self::UpdateRequest => "UpdateRequest",
            Self::IndexView => "IndexView",
            Self::CreateView => "CreateView",
            Self::EditView => "EditView",
            Self::ShowView => "ShowView",
            Self::ArchiveView => "ArchiveView",
        }
    }

    /// Stub file stem: the snake_case of the kind name.
    pub const fn stub_name(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Repository => "repository",
            Self::RepositoryInterface => "repository_interface",
            Self::Model => "model",
            Self::Migration => "migration",
            Self::StoreRequest => "store_request",
            Self::UpdateRequest => "update_request",
            Self::IndexView => "index_view",
            Self::CreateView => "create_view",
            Self::EditView => "edit_view",
            Self::ShowView => "show_view",
            Self::ArchiveView => "archive_view",
        }
    }

    /// `controller.stub`
    pub fn stub_file_name(&self) -> String {
        format!("{}.stub", self.stub_name())
    }

    pub const fn is_view(&self) -> bool {
        matches!(
            self,
            Self::IndexView | Self::CreateView | Self::EditView | Self::ShowView | Self::ArchiveView
        )
    }

    /// Output path pattern with placeholders, for listings.
    pub const fn path_pattern(&self) -> &'static str {
        match self {
            Self::Controller => "app/Http/Controllers/{ns}/{Singular}Controller.php",
            Self::Repository => "app/Repositories/{Singular}Repository.php",
            Self::RepositoryInterface => {
                "app/Repositories/Interfaces/{Singular}RepositoryInterface.php"
            }
            Self::Model => "app/Models/{Singular}.php",
            Self::Migration => "database/migrations/{timestamp}_create_{snake_plural}_table.php",
            Self::StoreRequest => "app/Http/Requests/{Singular}/Store{Singular}Request.php",
            Self::UpdateRequest => "app/Http/Requests/{Singular}/Update{Singular}Request.php",
            Self::IndexView => "resources/views/{ns_lower}/{snake_plural}/index.blade.php",
            Self::CreateView => "resources/views/{ns_lower}/{snake_plural}/create.blade.php",
            Self::EditView => "resources/views/{ns_lower}/{snake_plural}/edit.blade.php",
            Self::ShowView => "resources/views/{ns_lower}/{snake_plural}/show.blade.php",
            Self::ArchiveView => "resources/views/{ns_lower}/{snake_plural}/archive.blade.php",
        }
    }

    /// Concrete output path relative to the project root.
    ///
    /// `timestamp` is only used by [`ArtifactKind::Migration`].
    pub fn output_path(
        &self,
        names: &NameSet,
        naming: NamingStrategy,
        timestamp: &str,
    ) -> PathBuf {
        let singular = &names.singular;
        match self {
            Self::Controller => controllers_dir(names, naming).join(format!("{singular}Controller.php")),
            Self::Repository => repositories_dir().join(format!("{singular}Repository.php")),
            Self::RepositoryInterface => {
                interfaces_dir().join(format!("{singular}RepositoryInterface.php"))
            }
            Self::Model => models_dir().join(format!("{singular}.php")),
            Self::Migration => migrations_dir().join(format!(
                "{timestamp}_create_{}_table.php",
                names.snake_plural
            )),
            Self::StoreRequest => requests_dir(names).join(format!("Store{singular}Request.php")),
            Self::UpdateRequest => requests_dir(names).join(format!("Update{singular}Request.php")),
            Self::IndexView => views_dir(names).join("index.blade.php"),
            Self::CreateView => views_dir(names).join("create.blade.php"),
            Self::EditView => views_dir(names).join("edit.blade.php"),
            Self::ShowView => views_dir(names).join("show.blade.php"),
            Self::ArchiveView => views_dir(names).join("archive.blade.php"),
        }
    }

    /// Directories that must exist before any artifact is written.
    pub fn required_directories(names: &NameSet, naming: NamingStrategy) -> Vec<PathBuf> {
        vec![
            controllers_dir(names, naming),
            repositories_dir(),
            interfaces_dir(),
            requests_dir(names),
            models_dir(),
            migrations_dir(),
            views_dir(names),
        ]
    }
}

fn controllers_dir(names: &NameSet, naming: NamingStrategy) -> PathBuf {
    PathBuf::from("app/Http/Controllers").join(names.controller_segment(naming))
}

fn repositories_dir() -> PathBuf {
    PathBuf::from("app/Repositories")
}

fn interfaces_dir() -> PathBuf {
    repositories_dir().join("Interfaces")
}

fn requests_dir(names: &NameSet) -> PathBuf {
    PathBuf::from("app/Http/Requests").join(&names.singular)
}

fn models_dir() -> PathBuf {
    PathBuf::from("app/Models")
}

fn migrations_dir() -> PathBuf {
    PathBuf::from("database/migrations")
}

fn views_dir(names: &NameSet) -> PathBuf {
    PathBuf::from("resources/views")
        .join(&names.namespace_lowercased)
        .join(&names.snake_plural)
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s) || k.stub_name() == s)
            .ok_or_else(|| DomainError::UnknownVariant {
                field: "artifact kind",
                value: s.into(),
                expected: "Controller, Repository, RepositoryInterface, Model, Migration, \
                           StoreRequest, UpdateRequest, IndexView, CreateView, EditView, \
                           ShowView, ArchiveView",
            })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::domain::entities::names::GenerationRequest;

    fn invoice() -> NameSet {
        NameSet::derive(&GenerationRequest::new("Invoice", "Billing").unwrap())
    }

    #[test]
    fn twelve_kinds_with_unique_stubs() {
        let mut stubs: Vec<_> = ArtifactKind::ALL.iter().map(|k| k.stub_name()).collect();
        stubs.sort_unstable();
        stubs.dedup();
        assert_eq!(stubs.len(), 12);
    }

    #[test]
    fn controller_path_follows_naming_strategy() {
        let names = invoice();
        assert_eq!(
            ArtifactKind::Controller.output_path(&names, NamingStrategy::Lowercase, "x"),
            Path::new("app/Http/Controllers/billing/InvoiceController.php")
        );
        assert_eq!(
            ArtifactKind::Controller.output_path(&names, NamingStrategy::Capitalized, "x"),
            Path::new("app/Http/Controllers/Billing/InvoiceController.php")
        );
    }

    #[test]
    fn migration_path_embeds_timestamp() {
        let path = ArtifactKind::Migration.output_path(
            &invoice(),
            NamingStrategy::Lowercase,
            "20240131_120000",
        );
        assert_eq!(
            path,
            Path::new("database/migrations/20240131_120000_create_invoices_table.php")
        );
    }

    #[test]
    fn migration_name_uses_snake_plural() {
        let names = NameSet::derive(&GenerationRequest::new("OrderItem", "Shop").unwrap());
        let path = ArtifactKind::Migration.output_path(&names, NamingStrategy::Lowercase, "t");
        assert!(path.ends_with("t_create_order-items_table.php"));
    }

    #[test]
    fn views_always_use_lowercase_namespace() {
        let path = ArtifactKind::ArchiveView.output_path(
            &invoice(),
            NamingStrategy::Capitalized,
            "x",
        );
        assert_eq!(
            path,
            Path::new("resources/views/billing/invoices/archive.blade.php")
        );
    }

    #[test]
    fn requests_are_grouped_per_model() {
        let names = invoice();
        assert_eq!(
            ArtifactKind::StoreRequest.output_path(&names, NamingStrategy::Lowercase, "x"),
            Path::new("app/Http/Requests/Invoice/StoreInvoiceRequest.php")
        );
    }

    #[test]
    fn every_output_lives_in_a_required_directory() {
        let names = invoice();
        let dirs = ArtifactKind::required_directories(&names, NamingStrategy::Lowercase);
        for kind in ArtifactKind::ALL {
            let path = kind.output_path(&names, NamingStrategy::Lowercase, "t");
            let parent = path.parent().unwrap();
            assert!(dirs.iter().any(|d| d == parent), "{kind} not covered");
        }
    }

    #[test]
    fn parses_kind_and_stub_names() {
        assert_eq!(
            "store_request".parse::<ArtifactKind>().unwrap(),
            ArtifactKind::StoreRequest
        );
        assert_eq!(
            "indexview".parse::<ArtifactKind>().unwrap(),
            ArtifactKind::IndexView
        );
        assert!("Seeder".parse::<ArtifactKind>().is_err());
    }
}
