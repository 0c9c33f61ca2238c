//! The classification result handed to the route-handling layer.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseInteractionKindError;

/// The FHIR REST interactions the classifier recognizes.
///
/// Serialized as the FHIR interaction code (`read`, `search-type`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionKind {
    /// `GET [base]/metadata`
    Capabilities,
    /// `GET [base]/[type]/[id]`
    Read,
    /// `GET [base]/[type]/[id]/_history/[vid]`
    Vread,
    /// `POST [base]/[type]`
    Create,
    /// `GET [base]/[type]` or `POST [base]/[type]/_search`
    SearchType,
    /// `PUT [base]/[type]/[id]`
    Update,
    /// `PATCH [base]/[type]/[id]`
    Patch,
    /// `DELETE [base]/[type]/[id]`
    Delete,
}

impl InteractionKind {
    /// Every interaction, in classifier priority order.
    pub const ALL: [InteractionKind; 8] = [
        InteractionKind::Capabilities,
        InteractionKind::Read,
        InteractionKind::Vread,
        InteractionKind::Create,
        InteractionKind::SearchType,
        InteractionKind::Update,
        InteractionKind::Patch,
        InteractionKind::Delete,
    ];

    /// The FHIR interaction code.
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Capabilities => "capabilities",
            InteractionKind::Read => "read",
            InteractionKind::Vread => "vread",
            InteractionKind::Create => "create",
            InteractionKind::SearchType => "search-type",
            InteractionKind::Update => "update",
            InteractionKind::Patch => "patch",
            InteractionKind::Delete => "delete",
        }
    }

    /// Returns `true` for interactions addressed to a single resource instance.
    pub fn is_instance_level(&self) -> bool {
        matches!(
            self,
            InteractionKind::Read
                | InteractionKind::Vread
                | InteractionKind::Update
                | InteractionKind::Patch
                | InteractionKind::Delete
        )
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionKind {
    type Err = ParseInteractionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InteractionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseInteractionKindError(s.to_string()))
    }
}

/// Outcome of classifying one request.
///
/// Either empty (nothing matched) or carrying an interaction kind plus the
/// identifiers the path supplied. Only [`InteractionInfo::empty`] lacks an
/// interaction; every other constructor names one, together with exactly the
/// identifiers that interaction addresses.
///
/// ```rust
/// use helios_interactions::{InteractionInfo, InteractionKind};
///
/// let info = InteractionInfo::read("Patient", "123");
///
/// assert_eq!(info.interaction(), Some(InteractionKind::Read));
/// assert_eq!(info.resource_id(), Some("123"));
/// assert!(InteractionInfo::empty().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    interaction: Option<InteractionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_id: Option<String>,
}

impl InteractionInfo {
    /// The canonical "no interaction recognized" value.
    pub const fn empty() -> Self {
        Self {
            interaction: None,
            resource_type: None,
            resource_id: None,
            version_id: None,
        }
    }

    /// Starts a result for `kind` with no identifiers.
    pub(crate) fn new(kind: InteractionKind) -> Self {
        Self {
            interaction: Some(kind),
            ..Self::empty()
        }
    }

    pub(crate) fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub(crate) fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub(crate) fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    fn instance(
        kind: InteractionKind,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self::new(kind)
            .with_resource_type(resource_type)
            .with_resource_id(resource_id)
    }

    /// `capabilities`: fetch the server's CapabilityStatement.
    pub fn capabilities() -> Self {
        Self::new(InteractionKind::Capabilities)
    }

    /// `read` of one resource instance.
    pub fn read(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self::instance(InteractionKind::Read, resource_type, resource_id)
    }

    /// `vread` of one version of a resource instance.
    pub fn vread(
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        version_id: impl Into<String>,
    ) -> Self {
        Self::instance(InteractionKind::Vread, resource_type, resource_id)
            .with_version_id(version_id)
    }

    /// `create` of a new resource of `resource_type`.
    pub fn create(resource_type: impl Into<String>) -> Self {
        Self::new(InteractionKind::Create).with_resource_type(resource_type)
    }

    /// `search-type` across all resources of `resource_type`.
    pub fn search_type(resource_type: impl Into<String>) -> Self {
        Self::new(InteractionKind::SearchType).with_resource_type(resource_type)
    }

    /// `update` of one resource instance.
    pub fn update(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self::instance(InteractionKind::Update, resource_type, resource_id)
    }

    /// `patch` of one resource instance.
    pub fn patch(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self::instance(InteractionKind::Patch, resource_type, resource_id)
    }

    /// `delete` of one resource instance.
    pub fn delete(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self::instance(InteractionKind::Delete, resource_type, resource_id)
    }

    /// The recognized interaction, if any.
    pub fn interaction(&self) -> Option<InteractionKind> {
        self.interaction
    }

    /// The resource type named in the path.
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    /// The resource id, for instance-level interactions.
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    /// The version id, for vread.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// Returns `true` if no interaction was recognized.
    pub fn is_empty(&self) -> bool {
        self.interaction.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        assert_eq!(InteractionKind::SearchType.to_string(), "search-type");
        assert_eq!(InteractionKind::Vread.as_str(), "vread");

        for kind in InteractionKind::ALL {
            assert_eq!(kind.as_str().parse::<InteractionKind>(), Ok(kind));
        }
        assert!("history-instance".parse::<InteractionKind>().is_err());
        assert!("READ".parse::<InteractionKind>().is_err());
    }

    #[test]
    fn test_instance_level() {
        let instance: Vec<_> = InteractionKind::ALL
            .into_iter()
            .filter(InteractionKind::is_instance_level)
            .collect();

        assert_eq!(
            instance,
            vec![
                InteractionKind::Read,
                InteractionKind::Vread,
                InteractionKind::Update,
                InteractionKind::Patch,
                InteractionKind::Delete,
            ]
        );
    }

    #[test]
    fn test_empty() {
        let empty = InteractionInfo::empty();

        assert!(empty.is_empty());
        assert_eq!(empty, InteractionInfo::default());
        assert_eq!(empty.resource_type(), None);
        assert_eq!(empty.resource_id(), None);
        assert_eq!(empty.version_id(), None);
    }

    #[test]
    fn test_serialize_vread() {
        let info = InteractionInfo::vread("Patient", "123", "2");

        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            serde_json::json!({
                "interaction": "vread",
                "resourceType": "Patient",
                "resourceId": "123",
                "versionId": "2"
            })
        );
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let info = InteractionInfo::capabilities();
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            r#"{"interaction":"capabilities"}"#
        );
        assert_eq!(serde_json::to_string(&InteractionInfo::empty()).unwrap(), "{}");
    }

    #[test]
    fn test_only_empty_lacks_an_interaction() {
        let built = [
            InteractionInfo::capabilities(),
            InteractionInfo::read("Patient", "1"),
            InteractionInfo::vread("Patient", "1", "2"),
            InteractionInfo::create("Patient"),
            InteractionInfo::search_type("Patient"),
            InteractionInfo::update("Patient", "1"),
            InteractionInfo::patch("Patient", "1"),
            InteractionInfo::delete("Patient", "1"),
        ];

        for (info, kind) in built.iter().zip(InteractionKind::ALL) {
            assert!(!info.is_empty());
            assert_eq!(info.interaction(), Some(kind));
            assert_eq!(info.resource_id().is_some(), kind.is_instance_level());
            assert_eq!(info.version_id().is_some(), kind == InteractionKind::Vread);
            assert_eq!(
                info.resource_type().is_some(),
                kind != InteractionKind::Capabilities
            );
        }
    }
}
