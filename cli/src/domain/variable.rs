//! Variable identifiers, batch requests, and per-item removal outcomes.
//!
//! Pure functions only — no I/O, no async.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use fleet_common::VarResource;
use regex::Regex;
use serde::Serialize;

use crate::domain::error::EnvError;

/// A single ID token: decimal digits only, no sign, no whitespace.
static ID_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[0-9]+$").expect("valid regex")
});

/// A variable's numeric database ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VariableId(u64);

impl VariableId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for VariableId {
    type Err = EnvError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if !ID_TOKEN_RE.is_match(token) {
            return Err(EnvError::InvalidId(token.to_string()));
        }
        token
            .parse::<u64>()
            .map(Self)
            .map_err(|_| EnvError::InvalidId(token.to_string()))
    }
}

/// Ordered, non-empty list of IDs from one invocation.
///
/// Order and duplicates are kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdList(Vec<VariableId>);

impl IdList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a list built by [`parse_id_list`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.0.iter().copied()
    }
}

impl<'a> IntoIterator for &'a IdList {
    type Item = VariableId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, VariableId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl FromStr for IdList {
    type Err = EnvError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_id_list(raw)
    }
}

/// Split a raw `id` argument on `,` and parse every token.
///
/// # Errors
///
/// Returns [`EnvError::EmptyIdList`] for an empty argument and
/// [`EnvError::InvalidId`] naming the first token that is not an integer.
pub fn parse_id_list(raw: &str) -> Result<IdList, EnvError> {
    if raw.is_empty() {
        return Err(EnvError::EmptyIdList);
    }
    let ids = raw
        .split(',')
        .map(VariableId::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(IdList(ids))
}

/// Confirmation question shown once before a batch is deleted.
#[must_use]
pub fn confirmation_prompt(ids: &IdList) -> String {
    match ids.0.as_slice() {
        [id] => format!("Are you sure you want to delete environment variable {id}?"),
        _ => format!(
            "Are you sure you want to delete {} environment variables?",
            ids.len()
        ),
    }
}

/// Everything the batch deleter needs for one invocation.
#[derive(Debug, Clone)]
pub struct RemovalRequest {
    pub ids: IdList,
    pub resource: VarResource,
    /// `--yes`: do not ask before deleting.
    pub skip_confirmation: bool,
}

/// Result of one delete attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum DeletionOutcome {
    Deleted { id: VariableId },
    Failed { id: VariableId, message: String },
}

impl DeletionOutcome {
    #[must_use]
    pub fn id(&self) -> VariableId {
        match self {
            Self::Deleted { id } | Self::Failed { id, .. } => *id,
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Per-item outcomes of a batch, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalReport {
    pub resource: VarResource,
    pub outcomes: Vec<DeletionOutcome>,
}

impl RemovalReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(DeletionOutcome::is_failure)
    }

    pub fn failures(&self) -> impl Iterator<Item = &DeletionOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    /// Process exit code for this batch: 0 when every deletion succeeded.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(self.has_failures())
    }
}

/// How a removal invocation ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RemovalOutcome {
    /// The user answered "no"; nothing was attempted.
    Declined,
    Completed(RemovalReport),
}

impl RemovalOutcome {
    /// Declining is not a failure, so it exits 0 like a clean batch.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Declined => 0,
            Self::Completed(report) => report.exit_code(),
        }
    }
}
