//! Check backend liveness.

use vanakkam_client::{ClientConfig, HealthProbe};

use super::CommandError;

/// Probe the backend and report its liveness; exits nonzero when unhealthy.
pub async fn check() -> Result<(), CommandError> {
    let config = ClientConfig::from_env()?;
    let probe = HealthProbe::new(&config)?;

    if probe.probe().await {
        print_status("healthy");
        Ok(())
    } else {
        Err(CommandError::Unhealthy)
    }
}

#[allow(clippy::print_stdout)]
fn print_status(status: &str) {
    println!("{status}");
}
