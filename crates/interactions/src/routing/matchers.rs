//! One path matcher per FHIR interaction.
//!
//! A matcher checks the HTTP method first, then the path shape, and returns
//! `None` (declines) unless both fit and the captured resource type is known
//! to the oracle. Matchers never construct the empty result; that is the
//! classifier's fallback.

use regex::{Captures, Regex};

use super::patterns;
use crate::fhir_types::ResourceTypeOracle;
use crate::interaction::{InteractionInfo, InteractionKind};

/// Signature shared by every matcher: `(oracle, method, path)`.
pub(crate) type MatchFn = fn(&dyn ResourceTypeOracle, &str, &str) -> Option<InteractionInfo>;

/// An entry of the matcher table.
#[derive(Clone, Copy)]
pub(crate) struct PathMatcher {
    pub(crate) kind: InteractionKind,
    pub(crate) matches: MatchFn,
}

/// All matchers, in the order the classifier tries them.
///
/// Capabilities must precede read so that `GET .../metadata` is never taken
/// for a resource type named `metadata`.
pub(crate) const PATH_MATCHERS: [PathMatcher; 8] = [
    PathMatcher {
        kind: InteractionKind::Capabilities,
        matches: match_capabilities,
    },
    PathMatcher {
        kind: InteractionKind::Read,
        matches: match_read,
    },
    PathMatcher {
        kind: InteractionKind::Vread,
        matches: match_vread,
    },
    PathMatcher {
        kind: InteractionKind::Create,
        matches: match_create,
    },
    PathMatcher {
        kind: InteractionKind::SearchType,
        matches: match_search_type,
    },
    PathMatcher {
        kind: InteractionKind::Update,
        matches: match_update,
    },
    PathMatcher {
        kind: InteractionKind::Patch,
        matches: match_patch,
    },
    PathMatcher {
        kind: InteractionKind::Delete,
        matches: match_delete,
    },
];

/// Builds a result from a pattern match, declining when the resource type is
/// missing or unknown.
fn from_captures(
    oracle: &dyn ResourceTypeOracle,
    captures: Option<Captures<'_>>,
    kind: InteractionKind,
) -> Option<InteractionInfo> {
    let captures = captures?;

    let resource_type = captures
        .name("resource_type")
        .map(|m| m.as_str())
        .filter(|name| !name.is_empty() && oracle.is_known_resource_type(name))?;

    let mut info = InteractionInfo::new(kind).with_resource_type(resource_type);
    if let Some(id) = captures.name("resource_id") {
        info = info.with_resource_id(id.as_str());
    }
    if let Some(vid) = captures.name("version_id") {
        info = info.with_version_id(vid.as_str());
    }
    Some(info)
}

fn match_pattern(
    oracle: &dyn ResourceTypeOracle,
    pattern: &Regex,
    path: &str,
    kind: InteractionKind,
) -> Option<InteractionInfo> {
    from_captures(oracle, pattern.captures(path), kind)
}

fn match_capabilities(
    _oracle: &dyn ResourceTypeOracle,
    method: &str,
    path: &str,
) -> Option<InteractionInfo> {
    if method != "GET" || !patterns::METADATA.is_match(path) {
        return None;
    }
    Some(InteractionInfo::capabilities())
}

fn match_read(
    oracle: &dyn ResourceTypeOracle,
    method: &str,
    path: &str,
) -> Option<InteractionInfo> {
    if method != "GET" {
        return None;
    }
    match_pattern(oracle, &patterns::INSTANCE, path, InteractionKind::Read)
}

fn match_vread(
    oracle: &dyn ResourceTypeOracle,
    method: &str,
    path: &str,
) -> Option<InteractionInfo> {
    if method != "GET" {
        return None;
    }
    match_pattern(
        oracle,
        &patterns::INSTANCE_VERSION,
        path,
        InteractionKind::Vread,
    )
}

fn match_create(
    oracle: &dyn ResourceTypeOracle,
    method: &str,
    path: &str,
) -> Option<InteractionInfo> {
    if method != "POST" {
        return None;
    }
    match_pattern(oracle, &patterns::TYPE, path, InteractionKind::Create)
}

fn match_search_type(
    oracle: &dyn ResourceTypeOracle,
    method: &str,
    path: &str,
) -> Option<InteractionInfo> {
    let pattern = match method {
        "GET" => &patterns::TYPE,
        "POST" => &patterns::TYPE_SEARCH,
        _ => return None,
    };
    match_pattern(oracle, pattern, path, InteractionKind::SearchType)
}

fn match_update(
    oracle: &dyn ResourceTypeOracle,
    method: &str,
    path: &str,
) -> Option<InteractionInfo> {
    if method != "PUT" {
        return None;
    }
    match_pattern(oracle, &patterns::INSTANCE, path, InteractionKind::Update)
}

fn match_patch(
    oracle: &dyn ResourceTypeOracle,
    method: &str,
    path: &str,
) -> Option<InteractionInfo> {
    if method != "PATCH" {
        return None;
    }
    match_pattern(oracle, &patterns::INSTANCE, path, InteractionKind::Patch)
}

fn match_delete(
    oracle: &dyn ResourceTypeOracle,
    method: &str,
    path: &str,
) -> Option<InteractionInfo> {
    if method != "DELETE" {
        return None;
    }
    match_pattern(oracle, &patterns::INSTANCE, path, InteractionKind::Delete)
}
