use crate::model::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Checkbox,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Metrics,
    Pipeline,
    Advanced,
    Maturity,
    Checklist,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Metrics => "DORA Metrics",
            Section::Pipeline => "Pipeline",
            Section::Advanced => "Advanced Delivery",
            Section::Maturity => "Maturity",
            Section::Checklist => "Checklist",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub section: Section,
}

/// Maturity levels shared by all four DORA scale questions.
pub const SCALE_LEVELS: [&str; 4] = ["Low", "Medium", "High", "Elite"];

const fn scale(key: &'static str, label: &'static str) -> FieldDef {
    FieldDef {
        key,
        label,
        kind: FieldKind::Scale,
        section: Section::Metrics,
    }
}

const fn check(key: &'static str, label: &'static str, section: Section) -> FieldDef {
    FieldDef {
        key,
        label,
        kind: FieldKind::Checkbox,
        section,
    }
}

const CICD_FIELDS: &[FieldDef] = &[
    scale("deployment_frequency", "Deployment frequency"),
    scale("lead_time_for_changes", "Lead time for changes"),
    scale("mean_time_to_recovery", "Mean time to recovery"),
    scale("change_failure_rate", "Change failure rate"),
    check(
        "automated_build",
        "Builds run automatically on every commit",
        Section::Pipeline,
    ),
    check(
        "automated_unit_tests",
        "Unit tests gate the pipeline",
        Section::Pipeline,
    ),
    check(
        "pipeline_as_code",
        "Pipeline definition lives in version control",
        Section::Pipeline,
    ),
    check(
        "artifact_versioning",
        "Build artifacts are versioned and traceable",
        Section::Pipeline,
    ),
    check(
        "static_analysis_gate",
        "Static analysis gates merges",
        Section::Pipeline,
    ),
    check(
        "single_build_promotion",
        "One artifact is promoted across environments",
        Section::Pipeline,
    ),
    check(
        "blue_green_deployments",
        "Blue/green deployments",
        Section::Advanced,
    ),
    check("canary_releases", "Canary releases", Section::Advanced),
    check("feature_flags", "Feature flags decouple deploy from release", Section::Advanced),
    check("automated_rollback", "Rollback is automated", Section::Advanced),
    check(
        "infrastructure_as_code",
        "Infrastructure is declared as code",
        Section::Advanced,
    ),
    check(
        "trunk_based_development",
        "Trunk-based development",
        Section::Maturity,
    ),
    check(
        "automated_release_approval",
        "Release approvals are automated by policy",
        Section::Maturity,
    ),
    check(
        "post_deploy_verification",
        "Deployments are verified automatically after rollout",
        Section::Maturity,
    ),
    check(
        "on_demand_environments",
        "Environments are created on demand",
        Section::Maturity,
    ),
    check(
        "continuous_compliance",
        "Compliance checks run continuously",
        Section::Maturity,
    ),
];

const AUTOMATION_FIELDS: &[FieldDef] = &[
    check(
        "scripted_provisioning",
        "Provisioning is scripted end to end",
        Section::Checklist,
    ),
    check(
        "config_management",
        "Configuration is managed centrally",
        Section::Checklist,
    ),
    check(
        "automated_testing",
        "Test suites run without manual steps",
        Section::Checklist,
    ),
    check(
        "scheduled_jobs_automated",
        "Recurring jobs are scheduled, not run by hand",
        Section::Checklist,
    ),
    check(
        "self_service_environments",
        "Teams can self-serve environments",
        Section::Checklist,
    ),
    check(
        "automated_reporting",
        "Operational reports generate themselves",
        Section::Checklist,
    ),
    check(
        "runbook_automation",
        "Runbooks are executable",
        Section::Checklist,
    ),
    check(
        "dependency_updates_automated",
        "Dependency updates are raised automatically",
        Section::Checklist,
    ),
];

const PERFORMANCE_FIELDS: &[FieldDef] = &[
    check(
        "load_testing",
        "Load tests run before release",
        Section::Checklist,
    ),
    check(
        "performance_budgets",
        "Performance budgets are defined and enforced",
        Section::Checklist,
    ),
    check(
        "apm_in_place",
        "Application performance monitoring is in place",
        Section::Checklist,
    ),
    check(
        "capacity_planning",
        "Capacity is planned from measured demand",
        Section::Checklist,
    ),
    check(
        "caching_strategy",
        "A deliberate caching strategy exists",
        Section::Checklist,
    ),
    check(
        "regression_alerts",
        "Performance regressions raise alerts",
        Section::Checklist,
    ),
];

const SECURITY_FIELDS: &[FieldDef] = &[
    check(
        "dependency_scanning",
        "Dependencies are scanned for known vulnerabilities",
        Section::Checklist,
    ),
    check(
        "static_security_analysis",
        "Static security analysis runs in CI",
        Section::Checklist,
    ),
    check(
        "secrets_management",
        "Secrets live in a managed vault",
        Section::Checklist,
    ),
    check(
        "least_privilege_access",
        "Access follows least privilege",
        Section::Checklist,
    ),
    check(
        "security_reviews",
        "Changes receive security review",
        Section::Checklist,
    ),
    check(
        "penetration_testing",
        "Penetration tests run on a schedule",
        Section::Checklist,
    ),
    check(
        "incident_response_plan",
        "An incident response plan is rehearsed",
        Section::Checklist,
    ),
    check(
        "security_training",
        "Engineers receive security training",
        Section::Checklist,
    ),
    check(
        "audit_logging",
        "Sensitive actions are audit-logged",
        Section::Checklist,
    ),
    check(
        "encryption_at_rest",
        "Data is encrypted at rest",
        Section::Checklist,
    ),
];

pub fn fields_for(category: Category) -> &'static [FieldDef] {
    match category {
        Category::Automation => AUTOMATION_FIELDS,
        Category::Performance => PERFORMANCE_FIELDS,
        Category::Security => SECURITY_FIELDS,
        Category::Cicd => CICD_FIELDS,
    }
}

/// Name-based lookup used by the form view: an unknown category yields an
/// empty field list rather than an error.
pub fn fields_for_name(name: &str) -> &'static [FieldDef] {
    match name.parse::<Category>() {
        Ok(category) => fields_for(category),
        Err(_) => &[],
    }
}
