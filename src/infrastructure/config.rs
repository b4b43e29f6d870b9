use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    pub controls: ControlSettings,
    pub sessions: SessionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ControlSettings {
    /// Payload slider step in kilograms; marks are placed on multiples of it
    pub payload_step: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    /// Sessions untouched for this long are dropped
    pub idle_timeout_secs: u64,
    pub max_sessions: usize,
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_from("config/dashboard")
}

fn load_from(name: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8050")?
        .set_default("dataset.path", "spacex_launch_dash.csv")?
        .set_default("controls.payload_step", 1000.0)?
        .set_default("sessions.idle_timeout_secs", 1800)?
        .set_default("sessions.max_sessions", 1024)?
        .add_source(config::File::with_name(name).required(false))
        .build()?;

    let config: DashboardConfig = settings.try_deserialize()?;
    if !(config.controls.payload_step.is_finite() && config.controls.payload_step > 0.0) {
        anyhow::bail!(
            "controls.payload_step must be a positive number, got {}",
            config.controls.payload_step
        );
    }

    if config.sessions.max_sessions == 0 || config.sessions.idle_timeout_secs == 0 {
        anyhow::bail!("sessions.max_sessions and sessions.idle_timeout_secs must be positive");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("dashboard");

        let config = load_from(missing.to_str().unwrap()).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8050");
        assert_eq!(config.dataset.path, "spacex_launch_dash.csv");
        assert_eq!(config.controls.payload_step, 1000.0);
        assert_eq!(config.sessions.idle_timeout_secs, 1800);
        assert_eq!(config.sessions.max_sessions, 1024);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[dataset]\npath = \"data/launches.csv\"\n\n[controls]\npayload_step = 2500.0").unwrap();

        let name = dir.path().join("dashboard");
        let config = load_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config.dataset.path, "data/launches.csv");
        assert_eq!(config.controls.payload_step, 2500.0);
        assert_eq!(config.server.bind, "0.0.0.0:8050");
    }

    #[test]
    fn test_non_positive_step_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(&path, "[controls]\npayload_step = 0\n").unwrap();

        let name = dir.path().join("dashboard");
        assert!(load_from(name.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_zero_session_capacity_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(&path, "[sessions]\nmax_sessions = 0\n").unwrap();

        let name = dir.path().join("dashboard");
        assert!(load_from(name.to_str().unwrap()).is_err());
    }
}
