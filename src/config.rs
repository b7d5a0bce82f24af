use std::env;
use std::path::PathBuf;

pub struct Config {
    /// Root of the engine's share directory (loadable packages).
    pub share_dir: Option<PathBuf>,
    /// Demo files; the share directory is searched when unset.
    pub demo_dir: Option<PathBuf>,
    /// Completion events buffered per subscriber before it starts lagging.
    pub event_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            share_dir: None,
            demo_dir: None,
            event_capacity: 64,
        }
    }
}

impl Config {
    /// Defaults overridden by `MAXIMA_SHAREDIR` and `MAXIMA_DEMODIR`.
    pub fn from_env() -> Self {
        let dir = |name: &str| env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            share_dir: dir("MAXIMA_SHAREDIR"),
            demo_dir: dir("MAXIMA_DEMODIR"),
            ..Self::default()
        }
    }
}
