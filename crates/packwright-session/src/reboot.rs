use crate::condition::ConditionEngine;
use packwright_model::{ApplicationInfo, RebootAction};
use tracing::debug;

/// Downgrades the reboot action to [`RebootAction::Ignore`] when its guard
/// condition evaluates false. Returns the effective action.
pub fn resolve_reboot_action(info: &mut ApplicationInfo, conditions: &dyn ConditionEngine) -> RebootAction {
    if let Some(id) = info.reboot_action_condition.as_deref() {
        if !conditions.evaluate(id) {
            debug!(condition = id, "reboot guard false, ignoring reboot");
            info.reboot_action = RebootAction::Ignore;
        }
    }
    info.reboot_action
}
