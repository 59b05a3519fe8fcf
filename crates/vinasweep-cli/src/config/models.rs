use vinasweep::engine::config::SweepConfig;
use vinasweep::workflows::sweep::RunMode;

#[derive(Debug)]
pub struct AppConfig {
    pub core_config: SweepConfig,
    pub mode: RunMode,
}
