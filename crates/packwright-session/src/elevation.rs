//! Deciding whether to relaunch the installer with administrator rights.

use crate::condition::ConditionEngine;
use crate::notify::{self, Notifier};
use packwright_model::ApplicationInfo;
use packwright_platform::elevate::Elevator;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationOutcome {
    /// Keep bootstrapping in this process.
    Continue,
    /// An elevated copy ran the installation and exited successfully. This
    /// process must exit with code 0.
    HandOff,
}

pub struct ElevationResolver<'a> {
    elevator:   &'a dyn Elevator,
    conditions: &'a dyn ConditionEngine,
    notifier:   &'a dyn Notifier,
}

impl<'a> ElevationResolver<'a> {
    pub fn new(elevator: &'a dyn Elevator, conditions: &'a dyn ConditionEngine, notifier: &'a dyn Notifier) -> Self {
        Self {
            elevator,
            conditions,
            notifier,
        }
    }

    /// Never fails; every problem is reported through the notifier and the
    /// bootstrap goes on unprivileged.
    pub fn resolve(&self, info: &ApplicationInfo) -> ElevationOutcome {
        if self.elevator.is_privileged_relaunch() {
            debug!("running as privileged relaunch");
            return ElevationOutcome::Continue;
        }
        if !info.require_privileged_execution {
            return ElevationOutcome::Continue;
        }

        let should_elevate = match info.privileged_execution_condition.as_deref() {
            Some(id) => self.conditions.evaluate(id),
            None => true,
        };

        if !self.elevator.is_platform_supported() {
            self.notifier.warn(notify::ELEVATION_UNSUPPORTED);
            return ElevationOutcome::Continue;
        }
        if !self.elevator.is_elevation_needed() || !should_elevate {
            debug!(should_elevate, "no elevation required");
            return ElevationOutcome::Continue;
        }

        info!("relaunching installer with administrator rights");
        match self.elevator.relaunch_elevated() {
            Ok(0) => ElevationOutcome::HandOff,
            Ok(code) => {
                warn!(code, "elevated installer exited with failure");
                self.notifier.warn(notify::ELEVATION_FAILED);
                ElevationOutcome::Continue
            }
            Err(e) => {
                warn!(error = %e, "failed to relaunch elevated");
                self.notifier.warn(notify::ELEVATION_FAILED);
                ElevationOutcome::Continue
            }
        }
    }
}
