//! Stubs compiled into the binary.

use laracrud_core::{
    application::ports::TemplateStore,
    domain::{ArtifactKind, Template},
    error::CrudResult,
};

/// The built-in stub set. Always complete: every kind has a stub.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStore;

impl BuiltinStore {
    pub fn new() -> Self {
        Self
    }

    pub const fn stub_text(kind: ArtifactKind) -> &'static str {
        match kind {
            ArtifactKind::Controller => include_str!("../../stubs/controller.stub"),
            ArtifactKind::Repository => include_str!("../../stubs/repository.stub"),
            ArtifactKind::RepositoryInterface => {
                include_str!("../../stubs/repository_interface.stub")
            }
            ArtifactKind::Model => include_str!("../../stubs/model.stub"),
            ArtifactKind::Migration => include_str!("../../stubs/migration.stub"),
            ArtifactKind::StoreRequest => include_str!("../../stubs/store_request.stub"),
            ArtifactKind::UpdateRequest => include_str!("../../stubs/update_request.stub"),
            ArtifactKind::IndexView => include_str!("../../stubs/index_view.stub"),
            ArtifactKind::CreateView => include_str!("../../stubs/create_view.stub"),
            ArtifactKind::EditView => include_str!("../../stubs/edit_view.stub"),
            ArtifactKind::ShowView => include_str!("../../stubs/show_view.stub"),
            ArtifactKind::ArchiveView => include_str!("../../stubs/archive_view.stub"),
        }
    }
}

impl TemplateStore for BuiltinStore {
    fn load(&self, kind: ArtifactKind) -> CrudResult<Template> {
        Ok(Template::builtin(kind, Self::stub_text(kind)))
    }

    fn source_name(&self) -> String {
        "built-in stubs".into()
    }
}

#[cfg(test)]
mod tests {
    use laracrud_core::domain::{
        tokens, GenerationRequest, NameSet, NamingStrategy, RenderContext,
    };

    use super::*;

    fn context() -> RenderContext {
        let names = NameSet::derive(&GenerationRequest::new("Invoice", "Billing").unwrap());
        RenderContext::for_names(&names, NamingStrategy::Lowercase, "App\\")
    }

    #[test]
    fn every_stub_is_non_empty_and_uses_only_known_tokens() {
        let ctx = context();
        for kind in ArtifactKind::ALL {
            let template = BuiltinStore.load(kind).unwrap();
            template.validate().unwrap();
            let usage = ctx.scan(template.text());
            assert!(usage.unknown.is_empty(), "{kind}: {:?}", usage.unknown);
            assert!(!usage.known.is_empty(), "{kind} uses no tokens");
        }
        assert_eq!(tokens::ALL.len(), 10);
    }

    #[test]
    fn controller_stub_renders_invoice_controller() {
        let text = context().render(BuiltinStore::stub_text(ArtifactKind::Controller));
        assert!(text.contains("namespace App\\Http\\Controllers\\billing;"));
        assert!(text.contains("class InvoiceController extends Controller"));
        assert!(text.contains("view('billing.invoices.index'"));
        assert!(text.contains("compact('invoices')"));
    }

    #[test]
    fn views_keep_blade_echoes() {
        let text = context().render(BuiltinStore::stub_text(ArtifactKind::IndexView));
        assert!(text.contains("{{ $invoice->name }}"));
        assert!(text.contains("{{ route('invoices.create') }}"));
        assert!(!text.contains("{{snakePlural}}"));
    }

    #[test]
    fn migration_creates_snake_plural_table() {
        let text = context().render(BuiltinStore::stub_text(ArtifactKind::Migration));
        assert!(text.contains("Schema::create('invoices'"));
        assert!(text.contains("$table->softDeletes();"));
    }
}
