//! Route definitions for one generated resource.

use serde::Serialize;

use crate::domain::{entities::names::NameSet, value_objects::NamingStrategy};

/// Header written to a routes file that does not exist yet.
pub const ROUTES_FILE_HEADER: &str = "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n";

/// The route text for one model: `use` imports, a commented container
/// binding and five route declarations (no `show`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteBlock {
    text: String,
    resource_line: String,
}

impl RouteBlock {
    pub fn build(names: &NameSet, naming: NamingStrategy, root_namespace: &str) -> Self {
        let singular = &names.singular;
        let slug = &names.snake_plural;
        let controller = names.controller_class();

        let controller_fqcn = format!(
            "{root_namespace}Http\\Controllers\\{}\\{controller}",
            names.controller_segment(naming)
        );
        let interface_fqcn = format!(
            "{root_namespace}Repositories\\Interfaces\\{}",
            names.repository_interface()
        );
        let repository_fqcn = format!("{root_namespace}Repositories\\{}", names.repository_class());

        let resource_line =
            format!("Route::resource('{slug}', {controller}::class)->except('show');");

        let text = format!(
            "\n// {singular} Routes\n\
             use {controller_fqcn};\n\
             use {interface_fqcn};\n\
             use {repository_fqcn};\n\
             \n\
             // Binding (uncomment to use):\n\
             // app()->bind({interface_fqcn}::class, {repository_fqcn}::class);\n\
             \n\
             {resource_line}\n\
             Route::get('{slug}-archive', [{controller}::class, 'archive'])->name('{slug}.archive');\n\
             Route::post('{slug}-restore/{{uuid}}', [{controller}::class, 'restore'])->name('{slug}.restore');\n\
             Route::delete('{slug}-force-delete/{{uuid}}', [{controller}::class, 'forceDelete'])->name('{slug}.forceDelete');\n\
             Route::patch('{slug}-change-status/{{id}}', [{controller}::class, 'changeActive'])->name('{slug}.change.active');\n"
        );

        Self {
            text,
            resource_line,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The `Route::resource(...)` line, used to detect an earlier append.
    pub fn resource_line(&self) -> &str {
        &self.resource_line
    }

    pub fn route_count(&self) -> usize {
        self.text
            .lines()
            .filter(|line| line.trim_start().starts_with("Route::"))
            .count()
    }

    /// Whether `routes_file` already carries this block.
    pub fn is_present_in(&self, routes_file: &str) -> bool {
        routes_file
            .lines()
            .any(|line| line.trim() == self.resource_line)
    }
}
