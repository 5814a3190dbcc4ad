/// Runtime resource statistics reported for one instance.
///
/// CPU is a fraction of one core's capacity; it is passed through unscaled.
/// All other fields are byte counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstanceStatus {
    pub cpu: f64,
    pub disk: u64,
    pub disk_quota: u64,
    pub memory: u64,
    pub memory_quota: u64,
}
