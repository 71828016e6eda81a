//! AI 配置文件
//!
//! JSON 格式，缺省字段使用默认值

use std::path::Path;

use thiserror::Error;
use tracing::debug;
use ttt_ai::AiConfig;

/// 配置加载错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 解析错误
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// 配置值无效
    #[error("Invalid config: {reason}")]
    Invalid { reason: String },
}

/// 从 JSON 文件加载 AI 配置
pub fn load_config(path: &Path) -> Result<AiConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: AiConfig = serde_json::from_str(&content)?;

    if !(config.horizon.is_finite() && config.horizon > 0.0) {
        return Err(ConfigError::Invalid {
            reason: format!("horizon must be positive, got {}", config.horizon),
        });
    }

    debug!("已加载配置 {}: {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use ttt_ai::Expansion;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_temp(r#"{"cutoff_depth": 3, "horizon": 5.0, "expansion": "alternating"}"#);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.cutoff_depth, 3);
        assert_eq!(config.horizon, 5.0);
        assert_eq!(config.expansion, Expansion::Alternating);
    }

    #[test]
    fn test_load_partial_config() {
        let file = write_temp(r#"{"expansion": "self_play"}"#);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config, AiConfig::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_temp("not json");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_invalid_horizon() {
        let file = write_temp(r#"{"horizon": 0.0}"#);
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(load_config(&path), Err(ConfigError::Io(_))));
    }
}
