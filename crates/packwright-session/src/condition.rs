//! Guard conditions, looked up by id.

use std::collections::BTreeMap;
use tracing::warn;

pub trait ConditionEngine {
    fn evaluate(&self, condition_id: &str) -> bool;
}

impl<F> ConditionEngine for F
where
    F: Fn(&str) -> bool,
{
    fn evaluate(&self, condition_id: &str) -> bool { self(condition_id) }
}

/// Conditions with values fixed up front. Unknown ids evaluate to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticConditions {
    values: BTreeMap<String, bool>,
}

impl StaticConditions {
    pub const fn new() -> Self { Self { values: BTreeMap::new() } }

    pub fn with(mut self, condition_id: impl Into<String>, value: bool) -> Self {
        self.values.insert(condition_id.into(), value);
        self
    }
}

impl FromIterator<(String, bool)> for StaticConditions {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl ConditionEngine for StaticConditions {
    fn evaluate(&self, condition_id: &str) -> bool {
        match self.values.get(condition_id) {
            Some(value) => *value,
            None => {
                warn!(condition_id, "unknown condition, treating as false");
                false
            }
        }
    }
}
