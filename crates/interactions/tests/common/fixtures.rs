//! Test fixtures for classification testing.
//!
//! Provides the request scenarios every suite runs, each of which is expected
//! to classify the same with or without a mount prefix.

use helios_interactions::InteractionInfo;

/// Prefixes the scenarios are mounted under.
pub const MOUNT_PATHS: &[&str] = &["", "/subapi"];

/// Additional prefixes for mount-path invariance checks.
pub const EXTRA_MOUNT_PATHS: &[&str] = &["/fhir", "/api/v1/fhir", "/tenant-1/r4", "/a/b/c/d"];

/// A request and the classification it must produce.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Short description, used in assertion messages.
    pub name: &'static str,
    /// HTTP method.
    pub method: &'static str,
    /// Path relative to the mount point.
    pub path: String,
    /// Expected classification.
    pub expected: InteractionInfo,
}

impl Scenario {
    fn new(name: &'static str, method: &'static str, path: impl Into<String>) -> Self {
        Self {
            name,
            method,
            path: path.into(),
            expected: InteractionInfo::empty(),
        }
    }

    fn expect(mut self, expected: InteractionInfo) -> Self {
        self.expected = expected;
        self
    }

    /// The scenario's path under `mount_path`.
    pub fn mounted_path(&self, mount_path: &str) -> String {
        format!("{}{}", mount_path, self.path)
    }
}

/// Generates a random, valid FHIR resource id.
pub fn generate_fhir_resource_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Scenarios that classify as an interaction.
pub fn recognized_scenarios() -> Vec<Scenario> {
    let read_id = generate_fhir_resource_id();
    let vread_id = generate_fhir_resource_id();
    let version_id = generate_fhir_resource_id();
    let update_id = generate_fhir_resource_id();
    let patch_id = generate_fhir_resource_id();
    let delete_id = generate_fhir_resource_id();
    let longest_id = "a".repeat(64);
    let longest_version_id = "v".repeat(64);

    vec![
        Scenario::new("capabilities", "GET", "/metadata").expect(InteractionInfo::capabilities()),
        Scenario::new("create", "POST", "/Patient").expect(InteractionInfo::create("Patient")),
        Scenario::new("read", "GET", format!("/Patient/{read_id}"))
            .expect(InteractionInfo::read("Patient", &read_id)),
        Scenario::new(
            "vread",
            "GET",
            format!("/Patient/{vread_id}/_history/{version_id}"),
        )
        .expect(InteractionInfo::vread("Patient", &vread_id, &version_id)),
        Scenario::new("search-type", "GET", "/Patient")
            .expect(InteractionInfo::search_type("Patient")),
        Scenario::new("search-type post", "POST", "/Patient/_search")
            .expect(InteractionInfo::search_type("Patient")),
        Scenario::new("update", "PUT", format!("/Patient/{update_id}"))
            .expect(InteractionInfo::update("Patient", &update_id)),
        Scenario::new("patch", "PATCH", format!("/Patient/{patch_id}"))
            .expect(InteractionInfo::patch("Patient", &patch_id)),
        Scenario::new("delete", "DELETE", format!("/Patient/{delete_id}"))
            .expect(InteractionInfo::delete("Patient", &delete_id)),
        Scenario::new("read with 64 character id", "GET", format!("/Patient/{longest_id}"))
            .expect(InteractionInfo::read("Patient", &longest_id)),
        Scenario::new(
            "vread with 64 character version id",
            "GET",
            format!("/Patient/1/_history/{longest_version_id}"),
        )
        .expect(InteractionInfo::vread("Patient", "1", &longest_version_id)),
    ]
}

/// Scenarios that must classify as the empty result.
pub fn unrecognized_scenarios() -> Vec<Scenario> {
    let id = generate_fhir_resource_id();
    let too_long = "1".repeat(65);

    vec![
        Scenario::new("read unrecognized resource type", "GET", format!("/FakeResource/{id}")),
        Scenario::new(
            "vread unrecognized resource type",
            "GET",
            format!("/FakeResource/{id}/_history/1"),
        ),
        Scenario::new("search unrecognized resource type", "GET", "/FakeResource"),
        Scenario::new("unrecognized GET path", "GET", format!("/Patient/{id}/extra")),
        Scenario::new("create unrecognized resource type", "POST", "/FakeResource"),
        Scenario::new("search POST unrecognized resource type", "POST", "/FakeResource/_search"),
        Scenario::new("unrecognized POST path", "POST", "/FakeResource/extra"),
        Scenario::new("update unrecognized resource type", "PUT", format!("/FakeResource/{id}")),
        Scenario::new("unrecognized PUT path", "PUT", format!("/FakeResource/{id}/extra")),
        Scenario::new(
            "patch unrecognized resource type",
            "PATCH",
            format!("/FakeResource/{id}"),
        ),
        Scenario::new(
            "delete unrecognized resource type",
            "DELETE",
            format!("/FakeResource/{id}"),
        ),
        Scenario::new("unsupported HTTP method", "HEAD", format!("/Patient/{id}/extra")),
        Scenario::new("unsupported HTTP method on read path", "HEAD", format!("/Patient/{id}")),
        Scenario::new("lowercase resource type", "GET", format!("/patient/{id}")),
        Scenario::new("read with 65 character id", "GET", format!("/Patient/{too_long}")),
        Scenario::new("update with 65 character id", "PUT", format!("/Patient/{too_long}")),
        Scenario::new("patch with 65 character id", "PATCH", format!("/Patient/{too_long}")),
        Scenario::new("delete with 65 character id", "DELETE", format!("/Patient/{too_long}")),
        Scenario::new(
            "vread with 65 character version id",
            "GET",
            format!("/Patient/{id}/_history/{}", "v".repeat(65)),
        ),
        Scenario::new("resource id with invalid character", "GET", "/Patient/12_34"),
        Scenario::new("trailing slash", "GET", "/Patient/"),
        Scenario::new("history without version", "GET", format!("/Patient/{id}/_history")),
        Scenario::new("lowercase method", "get", format!("/Patient/{id}")),
    ]
}

/// Every scenario.
pub fn all_scenarios() -> Vec<Scenario> {
    let mut scenarios = recognized_scenarios();
    scenarios.extend(unrecognized_scenarios());
    scenarios
}
