use aws_config::{BehaviorVersion, Region};
use instance_stop_core::config::StopperConfig;
use instance_stop_lambda::adapters::compute::InstanceStopper;
use instance_stop_lambda::handlers::stop::handle_stop_event;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

struct Ec2InstanceStopper {
    ec2_client: aws_sdk_ec2::Client,
}

impl InstanceStopper for Ec2InstanceStopper {
    fn stop_instances(&self, instance_ids: &[String]) -> Result<(), String> {
        let ids = instance_ids.to_vec();
        let client = self.ec2_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .stop_instances()
                    .set_instance_ids(Some(ids))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to stop ec2 instances: {error}"))
            })
        })
    }
}

async fn handle_request(
    _event: LambdaEvent<Value>,
    config: &StopperConfig,
    stopper: &Ec2InstanceStopper,
) -> Result<(), Error> {
    // The scheduled-event payload carries no routing information; every
    // invocation stops the same configured instance.
    handle_stop_event(config, stopper).map_err(|error| Error::from(error.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config =
        StopperConfig::from_env().map_err(|error| Error::from(error.message().to_string()))?;

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;
    let stopper = Ec2InstanceStopper {
        ec2_client: aws_sdk_ec2::Client::new(&aws_config),
    };

    let config_ref = &config;
    let stopper_ref = &stopper;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(event, config_ref, stopper_ref).await
    }))
    .await
}
