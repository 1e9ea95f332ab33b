use std::collections::HashSet;

use thiserror::Error;

use super::models::{FieldKind, Template};

/// Integrity problems in the catalog definition. Raised at startup only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Template id '{0}' is not a slug (lowercase letters, digits, '_')")]
    InvalidId(String),

    #[error("Duplicate template id '{0}'")]
    DuplicateId(String),

    #[error("Template '{0}' has no fields")]
    NoFields(String),

    #[error("Template '{template}' declares field '{field}' more than once")]
    DuplicateField { template: String, field: String },

    #[error("Select field '{field}' in template '{template}' has no options")]
    EmptyOptions { template: String, field: String },

    #[error("Failed to render catalog as JSON: {0}")]
    Render(String),
}

/// Checks the invariants the catalog must hold before it is served.
/// Stops at the first violation.
pub fn validate(templates: &[Template]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();

    for template in templates {
        if !is_slug(template.id) {
            return Err(CatalogError::InvalidId(template.id.to_string()));
        }
        if !ids.insert(template.id) {
            return Err(CatalogError::DuplicateId(template.id.to_string()));
        }
        if template.fields.is_empty() {
            return Err(CatalogError::NoFields(template.id.to_string()));
        }

        let mut names = HashSet::new();
        for field in template.fields {
            if !names.insert(field.name) {
                return Err(CatalogError::DuplicateField {
                    template: template.id.to_string(),
                    field: field.name.to_string(),
                });
            }
            if let FieldKind::Select { options } = field.kind {
                if options.is_empty() {
                    return Err(CatalogError::EmptyOptions {
                        template: template.id.to_string(),
                        field: field.name.to_string(),
                    });
                }
            }
        }
    }

    Ok(())
}

fn is_slug(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{Field, Severity};

    const ONE_FIELD: &[Field] = &[Field::text("hostname", "Hostname")];

    fn template(id: &'static str, fields: &'static [Field]) -> Template {
        Template {
            id,
            name: "Test",
            description: "Test template",
            category: "Testing",
            severity_default: Severity::Low,
            fields,
        }
    }

    #[test]
    fn test_pass_with_valid_catalog() {
        let templates = [template("a", ONE_FIELD), template("b_2", ONE_FIELD)];
        assert_eq!(validate(&templates), Ok(()));
    }

    #[test]
    fn test_pass_with_empty_catalog() {
        assert_eq!(validate(&[]), Ok(()));
    }

    #[test]
    fn test_fail_on_duplicate_id() {
        let templates = [template("dup", ONE_FIELD), template("dup", ONE_FIELD)];
        assert_eq!(
            validate(&templates),
            Err(CatalogError::DuplicateId("dup".to_string()))
        );
    }

    #[test]
    fn test_fail_on_non_slug_id() {
        for id in ["", "Server", "server-reboot", "server reboot"] {
            assert_eq!(
                validate(&[template(id, ONE_FIELD)]),
                Err(CatalogError::InvalidId(id.to_string())),
                "id {id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_fail_on_template_without_fields() {
        assert_eq!(
            validate(&[template("empty", &[])]),
            Err(CatalogError::NoFields("empty".to_string()))
        );
    }

    #[test]
    fn test_fail_on_duplicate_field_name() {
        const FIELDS: &[Field] = &[
            Field::text("hostname", "Hostname"),
            Field::number("hostname", "Host number"),
        ];
        assert_eq!(
            validate(&[template("reboot", FIELDS)]),
            Err(CatalogError::DuplicateField {
                template: "reboot".to_string(),
                field: "hostname".to_string(),
            })
        );
    }

    #[test]
    fn test_same_field_name_allowed_across_templates() {
        let templates = [template("a", ONE_FIELD), template("b", ONE_FIELD)];
        assert!(validate(&templates).is_ok());
    }

    #[test]
    fn test_fail_on_select_without_options() {
        const FIELDS: &[Field] = &[Field::select("role", "Role", &[])];
        let err = validate(&[template("access", FIELDS)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Select field 'role' in template 'access' has no options"
        );
    }
}
