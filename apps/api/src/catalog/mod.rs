pub mod definition;
pub mod models;
pub mod validation;

use bytes::Bytes;

pub use models::Template;
pub use validation::CatalogError;

/// The served catalog: the static definition plus its JSON rendering.
///
/// The body is rendered once, so every response carries identical bytes.
#[derive(Debug)]
pub struct Catalog {
    templates: &'static [Template],
    body: Bytes,
}

impl Catalog {
    /// Checks the integrity of `templates` and renders the response body.
    pub fn load(templates: &'static [Template]) -> Result<Self, CatalogError> {
        validation::validate(templates)?;
        let body =
            serde_json::to_vec(templates).map_err(|e| CatalogError::Render(e.to_string()))?;
        Ok(Self {
            templates,
            body: Bytes::from(body),
        })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load(definition::TEMPLATES)
    }

    pub fn templates(&self) -> &'static [Template] {
        self.templates
    }

    /// JSON array of all templates, in definition order.
    pub fn body(&self) -> Bytes {
        self.body.clone()
    }
}
