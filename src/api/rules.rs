//! Rule value containers
//!
//! Plain data holders for road rules and their possible states. Rule
//! evaluation, registries, and state providers live elsewhere; these types
//! only carry the identifiers, severities, and zone extents that those
//! collaborators exchange.

use std::collections::BTreeMap;
use std::fmt;

use super::{LaneSRoute, UniqueId};

/// A unique identifier for a rule instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(String);

impl RuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn string(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A unique identifier for a rule type
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleTypeId(String);

impl RuleTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn string(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How strictly a rule state binds traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    /// Must always be obeyed
    #[default]
    Strict,
    /// Should be obeyed when safe to do so
    BestEffort,
}

/// Rules related to a state, grouped by an application-defined key
pub type RelatedRules = BTreeMap<String, Vec<RuleId>>;

/// Unique entity ids related to a state, grouped by an application-defined key
pub type RelatedUniqueIds = BTreeMap<String, Vec<UniqueId>>;

/// One possible state of a discrete-value rule
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscreteValue {
    pub severity: Severity,
    pub related_rules: RelatedRules,
    pub related_unique_ids: RelatedUniqueIds,
    pub value: String,
}

impl DiscreteValue {
    pub fn new(
        severity: Severity,
        related_rules: RelatedRules,
        related_unique_ids: RelatedUniqueIds,
        value: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            related_rules,
            related_unique_ids,
            value: value.into(),
        }
    }
}

/// One possible state of a range-value rule: a [min, max] band of some
/// continuous quantity, e.g. a speed limit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeValue {
    pub severity: Severity,
    pub related_rules: RelatedRules,
    pub related_unique_ids: RelatedUniqueIds,
    pub description: String,
    pub min: f64,
    pub max: f64,
}

impl RangeValue {
    pub fn new(
        severity: Severity,
        related_rules: RelatedRules,
        related_unique_ids: RelatedUniqueIds,
        description: impl Into<String>,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            severity,
            related_rules,
            related_unique_ids,
            description: description.into(),
            min,
            max,
        }
    }
}

impl PartialOrd for RangeValue {
    /// Orders bands by (min, max) first so listings are deterministic;
    /// remaining fields break ties to stay consistent with equality
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        (self.min, self.max)
            .partial_cmp(&(other.min, other.max))
            .map(|ordering| {
                ordering
                    .then_with(|| self.description.cmp(&other.description))
                    .then_with(|| self.severity.cmp(&other.severity))
                    .then_with(|| self.related_rules.cmp(&other.related_rules))
                    .then_with(|| self.related_unique_ids.cmp(&other.related_unique_ids))
            })
    }
}

/// A rule whose states are drawn from a discrete set of string values
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteValueRule {
    id: RuleId,
    type_id: RuleTypeId,
    zone: LaneSRoute,
    values: Vec<DiscreteValue>,
}

impl DiscreteValueRule {
    pub fn new(
        id: RuleId,
        type_id: RuleTypeId,
        zone: LaneSRoute,
        values: Vec<DiscreteValue>,
    ) -> Self {
        Self {
            id,
            type_id,
            zone,
            values,
        }
    }

    pub fn id(&self) -> &RuleId {
        &self.id
    }

    pub fn type_id(&self) -> &RuleTypeId {
        &self.type_id
    }

    /// The zone of the road network the rule applies to
    pub fn zone(&self) -> &LaneSRoute {
        &self.zone
    }

    pub fn values(&self) -> &[DiscreteValue] {
        &self.values
    }
}

/// A rule whose states are continuous bands of a numeric quantity
#[derive(Debug, Clone, PartialEq)]
pub struct RangeValueRule {
    id: RuleId,
    type_id: RuleTypeId,
    zone: LaneSRoute,
    ranges: Vec<RangeValue>,
}

impl RangeValueRule {
    pub fn new(id: RuleId, type_id: RuleTypeId, zone: LaneSRoute, ranges: Vec<RangeValue>) -> Self {
        Self {
            id,
            type_id,
            zone,
            ranges,
        }
    }

    pub fn id(&self) -> &RuleId {
        &self.id
    }

    pub fn type_id(&self) -> &RuleTypeId {
        &self.type_id
    }

    /// The zone of the road network the rule applies to
    pub fn zone(&self) -> &LaneSRoute {
        &self.zone
    }

    pub fn ranges(&self) -> &[RangeValue] {
        &self.ranges
    }
}
