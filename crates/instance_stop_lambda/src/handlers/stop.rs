use instance_stop_core::config::StopperConfig;
use serde_json::json;

use crate::adapters::compute::InstanceStopper;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopHandlerError {
    pub message: String,
}

pub fn handle_stop_event(
    config: &StopperConfig,
    stopper: &impl InstanceStopper,
) -> Result<(), StopHandlerError> {
    let instance_ids = config.instance_ids();

    if let Err(error) = stopper.stop_instances(&instance_ids) {
        log_stop_error(
            "stop_request_failed",
            json!({
                "region": config.region.clone(),
                "instance_ids": instance_ids,
                "error": error.clone(),
            }),
        );
        return Err(StopHandlerError { message: error });
    }

    log_stop_info(
        "instances_stopping",
        json!({
            "region": config.region.clone(),
            "instance_ids": instance_ids,
        }),
    );

    Ok(())
}

fn log_stop_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "stop_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_stop_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "stop_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct RecordingStopper {
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl RecordingStopper {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().expect("poisoned mutex").clone()
        }
    }

    impl InstanceStopper for RecordingStopper {
        fn stop_instances(&self, instance_ids: &[String]) -> Result<(), String> {
            self.calls
                .lock()
                .expect("poisoned mutex")
                .push(instance_ids.to_vec());
            Ok(())
        }
    }

    struct FailingStopper;

    impl InstanceStopper for FailingStopper {
        fn stop_instances(&self, _instance_ids: &[String]) -> Result<(), String> {
            Err("UnauthorizedOperation: not allowed to stop instances".to_string())
        }
    }

    fn sample_config() -> StopperConfig {
        StopperConfig {
            region: "us-east-1".to_string(),
            instance_id: "i-0123456789abcdef0".to_string(),
        }
    }

    #[test]
    fn issues_exactly_one_stop_request_for_the_configured_instance() {
        let stopper = RecordingStopper::new();

        handle_stop_event(&sample_config(), &stopper).expect("stop should succeed");

        let calls = stopper.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec!["i-0123456789abcdef0"]);
    }

    #[test]
    fn propagates_compute_api_error_unchanged() {
        let error = handle_stop_event(&sample_config(), &FailingStopper)
            .expect_err("stop should fail");

        assert_eq!(
            error.message,
            "UnauthorizedOperation: not allowed to stop instances"
        );
    }

    #[test]
    fn repeated_invocations_issue_one_request_each() {
        let stopper = RecordingStopper::new();
        let config = sample_config();

        handle_stop_event(&config, &stopper).expect("stop should succeed");
        handle_stop_event(&config, &stopper).expect("stop should succeed");

        let calls = stopper.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls
            .iter()
            .all(|ids| ids == &vec!["i-0123456789abcdef0".to_string()]));
    }
}
