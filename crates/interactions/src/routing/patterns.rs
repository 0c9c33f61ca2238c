//! Path shapes for the FHIR REST interactions.
//!
//! Every pattern is anchored on the end of the path only, so whatever mount
//! prefix precedes the FHIR base (`/fhir`, `/subapi/r4`, ...) is ignored.
//! A match is the leftmost occurrence, which for these shapes is always the
//! trailing segments of the path.

use once_cell::sync::Lazy;
use regex::Regex;

/// A resource type segment: ASCII letters. Empty captures are rejected by the matchers.
const RESOURCE_TYPE: &str = r"(?P<resource_type>[A-Za-z]*)";

/// A FHIR `id`: 1 to 64 of `[A-Za-z0-9.-]`.
const RESOURCE_ID: &str = r"(?P<resource_id>[A-Za-z0-9\-\.]{1,64})";

const VERSION_ID: &str = r"(?P<version_id>[A-Za-z0-9\-\.]{1,64})";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid interaction pattern {pattern}: {e}"))
}

/// `/metadata` anywhere in the path.
pub(crate) static METADATA: Lazy<Regex> = Lazy::new(|| compile(r"/metadata"));

/// `.../[type]/[id]` (read, update, patch, delete).
pub(crate) static INSTANCE: Lazy<Regex> =
    Lazy::new(|| compile(&format!("/{RESOURCE_TYPE}/{RESOURCE_ID}$")));

/// `.../[type]/[id]/_history/[vid]` (vread).
pub(crate) static INSTANCE_VERSION: Lazy<Regex> =
    Lazy::new(|| compile(&format!("/{RESOURCE_TYPE}/{RESOURCE_ID}/_history/{VERSION_ID}$")));

/// `.../[type]` (create, search-type via GET).
pub(crate) static TYPE: Lazy<Regex> = Lazy::new(|| compile(&format!("/{RESOURCE_TYPE}$")));

/// `.../[type]/_search` (search-type via POST).
pub(crate) static TYPE_SEARCH: Lazy<Regex> =
    Lazy::new(|| compile(&format!("/{RESOURCE_TYPE}/_search$")));
