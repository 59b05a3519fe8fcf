use vinasweep::engine::config::DEFAULT_ENGINE_EXECUTABLE;

pub struct DefaultsConfig {
    pub engine_executable: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            engine_executable: DEFAULT_ENGINE_EXECUTABLE.to_string(),
        }
    }
}
