//! FHIR resource-type tables and the resource-type oracle.
//!
//! The classifier never decides on its own whether a path segment names a
//! resource. It asks a [`ResourceTypeOracle`], which for production use is a
//! [`StaticResourceTypes`] backed by one of the name tables below. Each table
//! is compiled in only when the cargo feature of the same name is enabled.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

/// A FHIR release whose resource types the oracle can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FhirVersion {
    /// FHIR R4 (4.0.1).
    #[default]
    R4,
    /// FHIR R4B (4.3.0).
    R4B,
    /// FHIR R5 (5.0.0).
    R5,
    /// FHIR R6 (6.0.0-ballot).
    R6,
}

impl FhirVersion {
    /// All releases, oldest first.
    pub const ALL: [FhirVersion; 4] = [
        FhirVersion::R4,
        FhirVersion::R4B,
        FhirVersion::R5,
        FhirVersion::R6,
    ];

    /// Short release name (`R4`, `R4B`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            FhirVersion::R4 => "R4",
            FhirVersion::R4B => "R4B",
            FhirVersion::R5 => "R5",
            FhirVersion::R6 => "R6",
        }
    }

    /// Full version string, as used in CapabilityStatement.fhirVersion.
    pub fn release(&self) -> &'static str {
        match self {
            FhirVersion::R4 => "4.0.1",
            FhirVersion::R4B => "4.3.0",
            FhirVersion::R5 => "5.0.0",
            FhirVersion::R6 => "6.0.0-ballot",
        }
    }

    /// Returns `true` if this build carries the resource-type table for the release.
    pub fn is_enabled(&self) -> bool {
        !resource_type_names(*self).is_empty()
    }
}

impl fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FhirVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R4" | "4.0" | "4.0.1" => Ok(FhirVersion::R4),
            "R4B" | "4.3" | "4.3.0" => Ok(FhirVersion::R4B),
            "R5" | "5.0" | "5.0.0" => Ok(FhirVersion::R5),
            "R6" | "6.0" | "6.0.0-BALLOT" => Ok(FhirVersion::R6),
            _ => Err(ConfigError::InvalidFhirVersion(s.to_string())),
        }
    }
}

// Tables are kept in ASCII order so lookups can binary search.

#[cfg(feature = "R4")]
const R4_RESOURCE_TYPES: &[&str] = &[
    "Account", "ActivityDefinition", "AdverseEvent", "AllergyIntolerance", "Appointment",
    "AppointmentResponse", "AuditEvent",
    "Basic", "Binary", "BiologicallyDerivedProduct", "BodyStructure", "Bundle",
    "CapabilityStatement", "CarePlan", "CareTeam", "CatalogEntry", "ChargeItem",
    "ChargeItemDefinition", "Claim", "ClaimResponse", "ClinicalImpression", "CodeSystem",
    "Communication", "CommunicationRequest", "CompartmentDefinition", "Composition",
    "ConceptMap", "Condition", "Consent", "Contract", "Coverage", "CoverageEligibilityRequest",
    "CoverageEligibilityResponse",
    "DetectedIssue", "Device", "DeviceDefinition", "DeviceMetric", "DeviceRequest",
    "DeviceUseStatement", "DiagnosticReport", "DocumentManifest", "DocumentReference",
    "EffectEvidenceSynthesis", "Encounter", "Endpoint", "EnrollmentRequest",
    "EnrollmentResponse", "EpisodeOfCare", "EventDefinition", "Evidence", "EvidenceVariable",
    "ExampleScenario", "ExplanationOfBenefit",
    "FamilyMemberHistory", "Flag",
    "Goal", "GraphDefinition", "Group", "GuidanceResponse",
    "HealthcareService",
    "ImagingStudy", "Immunization", "ImmunizationEvaluation", "ImmunizationRecommendation",
    "ImplementationGuide", "InsurancePlan", "Invoice",
    "Library", "Linkage", "List", "Location",
    "Measure", "MeasureReport", "Media", "Medication", "MedicationAdministration",
    "MedicationDispense", "MedicationKnowledge", "MedicationRequest", "MedicationStatement",
    "MedicinalProduct", "MedicinalProductAuthorization", "MedicinalProductContraindication",
    "MedicinalProductIndication", "MedicinalProductIngredient", "MedicinalProductInteraction",
    "MedicinalProductManufactured", "MedicinalProductPackaged",
    "MedicinalProductPharmaceutical", "MedicinalProductUndesirableEffect", "MessageDefinition",
    "MessageHeader", "MolecularSequence",
    "NamingSystem", "NutritionOrder",
    "Observation", "ObservationDefinition", "OperationDefinition", "OperationOutcome",
    "Organization", "OrganizationAffiliation",
    "Parameters", "Patient", "PaymentNotice", "PaymentReconciliation", "Person",
    "PlanDefinition", "Practitioner", "PractitionerRole", "Procedure", "Provenance",
    "Questionnaire", "QuestionnaireResponse",
    "RelatedPerson", "RequestGroup", "ResearchDefinition", "ResearchElementDefinition",
    "ResearchStudy", "ResearchSubject", "RiskAssessment", "RiskEvidenceSynthesis",
    "Schedule", "SearchParameter", "ServiceRequest", "Slot", "Specimen", "SpecimenDefinition",
    "StructureDefinition", "StructureMap", "Subscription", "Substance", "SubstanceNucleicAcid",
    "SubstancePolymer", "SubstanceProtein", "SubstanceReferenceInformation",
    "SubstanceSourceMaterial", "SubstanceSpecification", "SupplyDelivery", "SupplyRequest",
    "Task", "TerminologyCapabilities", "TestReport", "TestScript",
    "ValueSet", "VerificationResult", "ViewDefinition", "VisionPrescription",
];

#[cfg(feature = "R4B")]
const R4B_RESOURCE_TYPES: &[&str] = &[
    "Account", "ActivityDefinition", "AdministrableProductDefinition", "AdverseEvent",
    "AllergyIntolerance", "Appointment", "AppointmentResponse", "AuditEvent",
    "Basic", "Binary", "BiologicallyDerivedProduct", "BodyStructure", "Bundle",
    "CapabilityStatement", "CarePlan", "CareTeam", "CatalogEntry", "ChargeItem",
    "ChargeItemDefinition", "Citation", "Claim", "ClaimResponse", "ClinicalImpression",
    "ClinicalUseDefinition", "CodeSystem", "Communication", "CommunicationRequest",
    "CompartmentDefinition", "Composition", "ConceptMap", "Condition", "Consent", "Contract",
    "Coverage", "CoverageEligibilityRequest", "CoverageEligibilityResponse",
    "DetectedIssue", "Device", "DeviceDefinition", "DeviceMetric", "DeviceRequest",
    "DeviceUseStatement", "DiagnosticReport", "DocumentManifest", "DocumentReference",
    "Encounter", "Endpoint", "EnrollmentRequest", "EnrollmentResponse", "EpisodeOfCare",
    "EventDefinition", "Evidence", "EvidenceReport", "EvidenceVariable", "ExampleScenario",
    "ExplanationOfBenefit",
    "FamilyMemberHistory", "Flag",
    "Goal", "GraphDefinition", "Group", "GuidanceResponse",
    "HealthcareService",
    "ImagingStudy", "Immunization", "ImmunizationEvaluation", "ImmunizationRecommendation",
    "ImplementationGuide", "Ingredient", "InsurancePlan", "Invoice",
    "Library", "Linkage", "List", "Location",
    "ManufacturedItemDefinition", "Measure", "MeasureReport", "Media", "Medication",
    "MedicationAdministration", "MedicationDispense", "MedicationKnowledge",
    "MedicationRequest", "MedicationStatement", "MedicinalProductDefinition",
    "MessageDefinition", "MessageHeader", "MolecularSequence",
    "NamingSystem", "NutritionOrder", "NutritionProduct",
    "Observation", "ObservationDefinition", "OperationDefinition", "OperationOutcome",
    "Organization", "OrganizationAffiliation",
    "PackagedProductDefinition", "Parameters", "Patient", "PaymentNotice",
    "PaymentReconciliation", "Person", "PlanDefinition", "Practitioner", "PractitionerRole",
    "Procedure", "Provenance",
    "Questionnaire", "QuestionnaireResponse",
    "RegulatedAuthorization", "RelatedPerson", "RequestGroup", "ResearchDefinition",
    "ResearchElementDefinition", "ResearchStudy", "ResearchSubject", "RiskAssessment",
    "Schedule", "SearchParameter", "ServiceRequest", "Slot", "Specimen", "SpecimenDefinition",
    "StructureDefinition", "StructureMap", "Subscription", "SubscriptionStatus",
    "SubscriptionTopic", "Substance", "SubstanceDefinition", "SupplyDelivery", "SupplyRequest",
    "Task", "TerminologyCapabilities", "TestReport", "TestScript",
    "ValueSet", "VerificationResult", "ViewDefinition", "VisionPrescription",
];

/// Shared by R5 and the R6 ballot, which has not changed the resource list yet.
#[cfg(any(feature = "R5", feature = "R6"))]
const R5_RESOURCE_TYPES: &[&str] = &[
    "Account", "ActivityDefinition", "ActorDefinition", "AdministrableProductDefinition",
    "AdverseEvent", "AllergyIntolerance", "Appointment", "AppointmentResponse",
    "ArtifactAssessment", "AuditEvent",
    "Basic", "Binary", "BiologicallyDerivedProduct", "BiologicallyDerivedProductDispense",
    "BodyStructure", "Bundle",
    "CapabilityStatement", "CarePlan", "CareTeam", "ChargeItem", "ChargeItemDefinition",
    "Citation", "Claim", "ClaimResponse", "ClinicalImpression", "ClinicalUseDefinition",
    "CodeSystem", "Communication", "CommunicationRequest", "CompartmentDefinition",
    "Composition", "ConceptMap", "Condition", "ConditionDefinition", "Consent", "Contract",
    "Coverage", "CoverageEligibilityRequest", "CoverageEligibilityResponse",
    "DetectedIssue", "Device", "DeviceAssociation", "DeviceDefinition", "DeviceDispense",
    "DeviceMetric", "DeviceRequest", "DeviceUsage", "DiagnosticReport", "DocumentReference",
    "Encounter", "EncounterHistory", "Endpoint", "EnrollmentRequest", "EnrollmentResponse",
    "EpisodeOfCare", "EventDefinition", "Evidence", "EvidenceReport", "EvidenceVariable",
    "ExampleScenario", "ExplanationOfBenefit",
    "FamilyMemberHistory", "Flag", "FormularyItem",
    "GenomicStudy", "Goal", "GraphDefinition", "Group", "GuidanceResponse",
    "HealthcareService",
    "ImagingSelection", "ImagingStudy", "Immunization", "ImmunizationEvaluation",
    "ImmunizationRecommendation", "ImplementationGuide", "Ingredient", "InsurancePlan",
    "InventoryItem", "InventoryReport", "Invoice",
    "Library", "Linkage", "List", "Location",
    "ManufacturedItemDefinition", "Measure", "MeasureReport", "Medication",
    "MedicationAdministration", "MedicationDispense", "MedicationKnowledge",
    "MedicationRequest", "MedicationStatement", "MedicinalProductDefinition",
    "MessageDefinition", "MessageHeader", "MolecularSequence",
    "NamingSystem", "NutritionIntake", "NutritionOrder", "NutritionProduct",
    "Observation", "ObservationDefinition", "OperationDefinition", "OperationOutcome",
    "Organization", "OrganizationAffiliation",
    "PackagedProductDefinition", "Parameters", "Patient", "PaymentNotice",
    "PaymentReconciliation", "Permission", "Person", "PlanDefinition", "Practitioner",
    "PractitionerRole", "Procedure", "Provenance",
    "Questionnaire", "QuestionnaireResponse",
    "RegulatedAuthorization", "RelatedPerson", "RequestOrchestration", "Requirements",
    "ResearchStudy", "ResearchSubject", "RiskAssessment",
    "Schedule", "SearchParameter", "ServiceRequest", "Slot", "Specimen", "SpecimenDefinition",
    "StructureDefinition", "StructureMap", "Subscription", "SubscriptionStatus",
    "SubscriptionTopic", "Substance", "SubstanceDefinition", "SubstanceNucleicAcid",
    "SubstancePolymer", "SubstanceProtein", "SubstanceReferenceInformation",
    "SubstanceSourceMaterial", "SupplyDelivery", "SupplyRequest",
    "Task", "TerminologyCapabilities", "TestPlan", "TestReport", "TestScript", "Transport",
    "ValueSet", "VerificationResult", "ViewDefinition", "VisionPrescription",
];

/// Returns the resource type names of `version`, or an empty slice when the
/// version's feature is not enabled.
pub fn resource_type_names(version: FhirVersion) -> &'static [&'static str] {
    match version {
        #[cfg(feature = "R4")]
        FhirVersion::R4 => R4_RESOURCE_TYPES,
        #[cfg(feature = "R4B")]
        FhirVersion::R4B => R4B_RESOURCE_TYPES,
        #[cfg(feature = "R5")]
        FhirVersion::R5 => R5_RESOURCE_TYPES,
        #[cfg(feature = "R6")]
        FhirVersion::R6 => R5_RESOURCE_TYPES,
        #[allow(unreachable_patterns)]
        _ => &[],
    }
}

/// Checks if `type_name` is a resource type of `version`.
///
/// The comparison is case-sensitive: `patient` is not `Patient`.
pub fn is_valid_resource_type(version: FhirVersion, type_name: &str) -> bool {
    resource_type_names(version).binary_search(&type_name).is_ok()
}

/// Answers whether a string names a resource type of the active FHIR release.
///
/// Implementations must be pure and safe for concurrent reads. Any
/// `Fn(&str) -> bool` closure is an oracle, which keeps classifier tests free
/// of the real tables.
pub trait ResourceTypeOracle: Send + Sync {
    /// Returns `true` if `name` is a known resource type.
    fn is_known_resource_type(&self, name: &str) -> bool;
}

impl<F> ResourceTypeOracle for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_known_resource_type(&self, name: &str) -> bool {
        self(name)
    }
}

/// Oracle backed by the static name table of a single FHIR release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticResourceTypes {
    version: FhirVersion,
    names: &'static [&'static str],
}

impl StaticResourceTypes {
    /// Creates the oracle for `version`.
    ///
    /// Fails when the table for `version` is not compiled in; an oracle that
    /// knows no resource types would turn every classification into the
    /// empty result.
    pub fn new(version: FhirVersion) -> ConfigResult<Self> {
        let names = resource_type_names(version);
        if names.is_empty() {
            return Err(ConfigError::EmptyResourceTypeTable { version });
        }
        Ok(Self { version, names })
    }

    /// The release this oracle answers for.
    pub fn version(&self) -> FhirVersion {
        self.version
    }

    /// All resource type names known to this oracle.
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }
}

impl ResourceTypeOracle for StaticResourceTypes {
    fn is_known_resource_type(&self, name: &str) -> bool {
        self.names.binary_search(&name).is_ok()
    }
}
