//! Scenario runner
//!
//! The demonstration flow as a first-class value: an admin, a set of users,
//! and a scripted step sequence executed against a door system.

use crate::access::Principal;
use crate::simulation::{SimulationError, SimulationResult};
use crate::system::DoorSystem;
use crate::types::LockState;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A single scripted step of a scenario
#[derive(Debug, Clone)]
pub enum ScenarioStep {
    /// The admin registers every scenario user in the directory
    RegisterUsers,
    /// The admin opens the door (unlock + auto-relock)
    AdminOpensDoor,
    /// Explicit relock request
    ExplicitRelock,
    /// A user enters a PIN at the keypad
    UserOpensDoor {
        /// Index into the scenario's user list
        user_index: usize,
        /// The PIN the user enters (not necessarily their own)
        entered_pin: String,
    },
    /// A user attempts access over the remote channel
    UserTriesRemoteAccess {
        /// Index into the scenario's user list
        user_index: usize,
    },
}

/// A scripted demonstration run
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Human-readable scenario name
    pub name: String,
    admin: Principal,
    users: Vec<Principal>,
    steps: Vec<ScenarioStep>,
}

/// Summary of a completed scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,
    /// Number of steps executed
    pub steps_executed: usize,
    /// Number of users registered in the directory
    pub registered_users: usize,
    /// Lock state when the scenario finished
    pub final_lock_state: LockState,
    /// Granted access decisions recorded in the audit trail
    pub granted: usize,
    /// Denied access decisions recorded in the audit trail
    pub denied: usize,
    /// Ignored (already-unlocked) decisions recorded in the audit trail
    pub ignored: usize,
}

impl ScenarioReport {
    /// One-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Scenario '{}': {} steps, {} users registered, door {}; {} granted, {} denied, {} ignored",
            self.name,
            self.steps_executed,
            self.registered_users,
            self.final_lock_state,
            self.granted,
            self.denied,
            self.ignored
        )
    }
}

impl Scenario {
    /// Create a scenario from its parts
    pub fn new(
        name: impl Into<String>,
        admin: Principal,
        users: Vec<Principal>,
        steps: Vec<ScenarioStep>,
    ) -> Self {
        Self { name: name.into(), admin, users, steps }
    }

    /// The canonical demonstration flow
    ///
    /// Admin Sarim registers users Zara and Sara, opens the door himself
    /// (unlock + auto-relock), requests an explicit relock (a no-op by then),
    /// Zara opens with her correct PIN, Sara fails with a wrong PIN, and
    /// Sara finally tries the remote channel.
    pub fn standard() -> Self {
        Self::new(
            "standard demonstration",
            Principal::admin("Sarim", "S001"),
            vec![
                Principal::user("Zara", "Z101", "8585"),
                Principal::user("Sara", "S102", "1234"),
            ],
            vec![
                ScenarioStep::RegisterUsers,
                ScenarioStep::AdminOpensDoor,
                ScenarioStep::ExplicitRelock,
                ScenarioStep::UserOpensDoor { user_index: 0, entered_pin: "8585".to_string() },
                ScenarioStep::UserOpensDoor { user_index: 1, entered_pin: "5678".to_string() },
                ScenarioStep::UserTriesRemoteAccess { user_index: 1 },
            ],
        )
    }

    /// The scenario's users, in registration order
    pub fn users(&self) -> &[Principal] {
        &self.users
    }

    /// Number of scripted steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Execute the scripted steps against the given door system
    pub fn run(&self, system: &mut DoorSystem) -> SimulationResult<ScenarioReport> {
        info!(scenario = %self.name, steps = self.steps.len(), "Running scenario");

        let mut steps_executed = 0;
        for step in &self.steps {
            debug!(?step, "Executing scenario step");
            self.execute_step(step, system)?;
            steps_executed += 1;
        }

        let report = ScenarioReport {
            name: self.name.clone(),
            steps_executed,
            registered_users: system.directory().len(),
            final_lock_state: system.lock_state(),
            granted: system.audit().granted_count(),
            denied: system.audit().denied_count(),
            ignored: system.audit().ignored_count(),
        };

        info!("{}", report.summary());
        Ok(report)
    }

    fn execute_step(&self, step: &ScenarioStep, system: &mut DoorSystem) -> SimulationResult<()> {
        match step {
            ScenarioStep::RegisterUsers => {
                for user in &self.users {
                    if !self.admin.register_user(system.directory_mut(), user.clone()) {
                        return Err(SimulationError::scenario_error(format!(
                            "registration refused for user {}",
                            user.identity
                        )));
                    }
                }
            }
            ScenarioStep::AdminOpensDoor => {
                self.admin.open_door(system, None);
            }
            ScenarioStep::ExplicitRelock => {
                system.lock_door_again();
            }
            ScenarioStep::UserOpensDoor { user_index, entered_pin } => {
                let user = self.user_at(*user_index)?;
                user.open_door(system, Some(entered_pin));
            }
            ScenarioStep::UserTriesRemoteAccess { user_index } => {
                let user = self.user_at(*user_index)?;
                user.try_remote_access(system);
            }
        }
        Ok(())
    }

    fn user_at(&self, index: usize) -> SimulationResult<&Principal> {
        self.users.get(index).ok_or_else(|| {
            SimulationError::scenario_error(format!(
                "step references user index {} but the scenario has {} users",
                index,
                self.users.len()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_system() -> DoorSystem {
        DoorSystem::with_relock_delay(Duration::ZERO)
    }

    #[test]
    fn test_standard_scenario_shape() {
        let scenario = Scenario::standard();
        assert_eq!(scenario.users().len(), 2);
        assert_eq!(scenario.step_count(), 6);
    }

    #[test]
    fn test_standard_scenario_report() {
        let scenario = Scenario::standard();
        let mut system = test_system();

        let report = scenario.run(&mut system).unwrap();

        assert_eq!(report.steps_executed, 6);
        assert_eq!(report.registered_users, 2);
        // Zara's unlock is the last state change; Sara's failures touch nothing
        assert_eq!(report.final_lock_state, LockState::Unlocked);
        assert_eq!(report.granted, 2); // admin + Zara
        assert_eq!(report.denied, 2); // wrong PIN + remote
        assert_eq!(report.ignored, 0);
    }

    #[test]
    fn test_step_with_bad_user_index_fails() {
        let scenario = Scenario::new(
            "bad index",
            Principal::admin("Sarim", "S001"),
            vec![],
            vec![ScenarioStep::UserOpensDoor { user_index: 0, entered_pin: "0000".to_string() }],
        );
        let mut system = test_system();

        let result = scenario.run(&mut system);
        assert!(matches!(result, Err(SimulationError::ScenarioError(_))));
    }

    #[test]
    fn test_report_summary_mentions_counts() {
        let scenario = Scenario::standard();
        let mut system = test_system();

        let report = scenario.run(&mut system).unwrap();
        let summary = report.summary();

        assert!(summary.contains("2 granted"));
        assert!(summary.contains("2 denied"));
        assert!(summary.contains("UNLOCKED"));
    }
}
