use super::models::{Field, Severity, Template};

/// The full catalog in rendering order. Fixed at build time.
pub static TEMPLATES: &[Template] = &[
    Template {
        id: "server_reboot",
        name: "Server Reboot Request",
        description: "Request a reboot for a specific server instance. Requires Ops approval.",
        category: "Infrastructure",
        severity_default: Severity::High,
        fields: &[
            Field::text("hostname", "Hostname"),
            Field::text("reason", "Reason for Reboot"),
        ],
    },
    Template {
        id: "access_request",
        name: "Access Request",
        description: "Request temporary or permanent access to a system/repo.",
        category: "IAM",
        severity_default: Severity::Medium,
        fields: &[
            Field::text("system_name", "System Name"),
            Field::select("role", "Role Required", &["Read-Only", "Developer", "Admin"]),
            Field::number("duration", "Duration (Hours)"),
        ],
    },
    Template {
        id: "ci_pipeline_failure",
        name: "CI/CD Pipeline Incident",
        description: "Report a stuck or failed critical pipeline.",
        category: "DevOps",
        severity_default: Severity::Critical,
        fields: &[
            Field::text("pipeline_url", "Pipeline URL"),
            Field::text("error_log", "Error Log Snippet"),
        ],
    },
];
