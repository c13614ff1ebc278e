use prometheus::{
    register_int_counter_vec_with_registry, register_int_counter_with_registry, IntCounter,
    IntCounterVec, Registry,
};

#[derive(Clone)]
pub struct HostMetrics {
    pub actions: IntCounterVec,
    pub action_errors: IntCounterVec,
    pub demo_sessions: IntCounter,
}

impl HostMetrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let actions = register_int_counter_vec_with_registry!(
            "farm_actions_total",
            "farm_actions_total",
            &["action"],
            registry
        )?;

        let action_errors = register_int_counter_vec_with_registry!(
            "farm_action_errors_total",
            "farm_action_errors_total",
            &["kind"],
            registry
        )?;

        let demo_sessions = register_int_counter_with_registry!(
            "farm_demo_sessions_total",
            "farm_demo_sessions_total",
            registry
        )?;

        Ok(Self {
            actions,
            action_errors,
            demo_sessions,
        })
    }
}
