//! The employee database examination lives outside this crate. This module
//! only knows how to hand control over to it.

use std::process::Command;

/// The opaque employee subsystem
pub trait EmployeeExaminer {
    fn examine_employees(&mut self);
}

/// Launches the employee subsystem as an external command line
#[derive(Debug, Clone, Default)]
pub struct ExternalEmployees {
    command: Option<String>,
}

impl ExternalEmployees {
    pub fn new(command: Option<String>) -> ExternalEmployees {
        ExternalEmployees { command }
    }
}

impl EmployeeExaminer for ExternalEmployees {
    fn examine_employees(&mut self) {
        let Some(command) = self.command.as_deref() else {
            tracing::warn!("no employee subsystem configured, set EMPLOYEES_COMMAND to enable it");
            return;
        };
        let mut words = command.split_whitespace();
        let Some(program) = words.next() else {
            tracing::warn!("EMPLOYEES_COMMAND is empty");
            return;
        };

        tracing::info!(%command, "starting the employee subsystem");
        match Command::new(program).args(words).status() {
            Ok(status) if status.success() => tracing::info!("employee subsystem finished"),
            Ok(status) => tracing::error!(%status, "employee subsystem failed"),
            Err(err) => tracing::error!(error = %err, %program, "could not start the employee subsystem"),
        }
    }
}
