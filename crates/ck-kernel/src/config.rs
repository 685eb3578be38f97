//! Kernel configuration, loadable from YAML.

use std::path::Path;

use ck_solver::NewtonConfig;
use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

/// Tunables of a `Kernel`. Missing YAML keys fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub newton: NewtonConfig,
}

impl KernelConfig {
    pub fn from_yaml_str(yaml: &str) -> KernelResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| KernelError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> KernelResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| KernelError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&text)
    }

    pub fn to_yaml_string(&self) -> KernelResult<String> {
        serde_yaml::to_string(self).map_err(|e| KernelError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "newton:\n  max_iterations: 25\n  bracket_fallback: true\n";
        let cfg = KernelConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.newton.max_iterations, 25);
        assert!(cfg.newton.bracket_fallback);
        assert_eq!(cfg.newton.abs_tol, NewtonConfig::default().abs_tol);
    }

    #[test]
    fn empty_document_is_default() {
        let cfg = KernelConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, KernelConfig::default());
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = KernelConfig {
            newton: NewtonConfig {
                temperature_tol: 1e-8,
                ..NewtonConfig::default()
            },
        };
        let text = cfg.to_yaml_string().unwrap();
        assert_eq!(KernelConfig::from_yaml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn bad_yaml_is_config_error() {
        let err = KernelConfig::from_yaml_str("newton: [1, 2").unwrap_err();
        assert!(matches!(err, KernelError::Config(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = KernelConfig::load(Path::new("/nonexistent/kernel.yaml")).unwrap_err();
        assert!(matches!(err, KernelError::Config(_)));
    }
}
