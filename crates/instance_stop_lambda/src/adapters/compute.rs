pub trait InstanceStopper {
    fn stop_instances(&self, instance_ids: &[String]) -> Result<(), String>;
}
