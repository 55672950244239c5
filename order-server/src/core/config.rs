use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// 配置错误 - 启动阶段致命
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置文件 {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("环境变量 {key} 的值无效: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("secret 不能为空")]
    EmptySecret,

    #[error("secret 只能包含字母、数字、'-' 和 '_'")]
    InvalidSecret,

    #[error("持久化存储不能使用顺序编号 (重启后会重复)")]
    SequentialIdsNotDurable,
}

/// 订单存储模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreMode {
    /// 进程内存，重启即清空
    #[default]
    Memory,
    /// redb 持久化
    Durable,
}

impl StoreMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Durable => "durable",
        }
    }
}

impl fmt::Display for StoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "durable" | "redb" => Ok(Self::Durable),
            _ => Err(ConfigError::InvalidValue {
                key: "STORE_MODE",
                value: s.to_string(),
            }),
        }
    }
}

/// 订单编号策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// 1, 2, 3, ...
    Sequential,
    /// 随机唯一令牌
    Token,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Token => "token",
        }
    }

    /// 存储模式对应的默认策略
    pub fn default_for(mode: StoreMode) -> Self {
        match mode {
            StoreMode::Memory => Self::Sequential,
            StoreMode::Durable => Self::Token,
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "token" => Ok(Self::Token),
            _ => Err(ConfigError::InvalidValue {
                key: "ID_STRATEGY",
                value: s.to_string(),
            }),
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./work_dir | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | STORE_MODE | memory | memory / durable |
/// | ID_STRATEGY | memory: sequential, durable: token | 订单编号策略 |
/// | APP_CONFIG_PATH | ./config.json | 店铺配置 (传真账号、secret) |
/// | CATALOG_MARKUP_PERCENT | 0 | 菜单规格价格加价百分比 |
/// | FAX_ENDPOINT | https://api.sipgate.com/v2/sessions/fax | 传真接口 |
/// | FAX_LINE_ID | f0 | 传真线路 |
/// | FAX_TIMEOUT_MS | 15000 | 传真请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// STORE_MODE=durable HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub store_mode: StoreMode,
    pub id_strategy: IdStrategy,
    /// config.json 路径
    pub app_config_path: String,
    pub catalog_markup_percent: u32,
    pub fax_endpoint: String,
    pub fax_line_id: String,
    pub fax_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "./work_dir".into(),
            http_port: 3000,
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            store_mode: StoreMode::Memory,
            id_strategy: IdStrategy::Sequential,
            app_config_path: "./config.json".into(),
            catalog_markup_percent: 0,
            fax_endpoint: "https://api.sipgate.com/v2/sessions/fax".into(),
            fax_line_id: "f0".into(),
            fax_timeout_ms: 15000,
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；设置了但无法解析的变量返回错误。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置 (测试用)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let store_mode = match lookup("STORE_MODE") {
            Some(v) => v.parse()?,
            None => defaults.store_mode,
        };
        let id_strategy = match lookup("ID_STRATEGY") {
            Some(v) => v.parse()?,
            None => IdStrategy::default_for(store_mode),
        };

        let config = Self {
            work_dir: lookup("WORK_DIR").unwrap_or(defaults.work_dir),
            http_port: parse_var(&lookup, "HTTP_PORT", defaults.http_port)?,
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: parse_var(&lookup, "LOG_JSON", defaults.log_json)?,
            store_mode,
            id_strategy,
            app_config_path: lookup("APP_CONFIG_PATH").unwrap_or(defaults.app_config_path),
            catalog_markup_percent: parse_var(
                &lookup,
                "CATALOG_MARKUP_PERCENT",
                defaults.catalog_markup_percent,
            )?,
            fax_endpoint: lookup("FAX_ENDPOINT").unwrap_or(defaults.fax_endpoint),
            fax_line_id: lookup("FAX_LINE_ID").unwrap_or(defaults.fax_line_id),
            fax_timeout_ms: parse_var(&lookup, "FAX_TIMEOUT_MS", defaults.fax_timeout_ms)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// 组合校验
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_mode == StoreMode::Durable && self.id_strategy == IdStrategy::Sequential {
            return Err(ConfigError::SequentialIdsNotDurable);
        }
        Ok(())
    }

    /// 数据库目录: work_dir/database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 订单数据库文件
    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("orders.redb")
    }

    /// 日志目录: work_dir/logs
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.log_dir())?;
        if self.store_mode == StoreMode::Durable {
            std::fs::create_dir_all(self.database_dir())?;
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}

/// 店铺配置 (config.json)
///
/// 进程启动时读取一次，之后只读。同时接受旧版首字母大写的字段名：
///
/// ```json
/// { "Username": "...", "Password": "...", "Phone": "+49...", "Secret": "s3cr3t" }
/// ```
///
/// `secret` 只用于拼接管理路由 (`/admin<secret>` 等)。
#[derive(Clone, Deserialize)]
pub struct AppConfig {
    /// 传真服务账号
    #[serde(alias = "Username")]
    pub username: String,
    #[serde(alias = "Password")]
    pub password: String,
    /// 传真接收号码 (厨房)
    #[serde(alias = "Phone")]
    pub phone: String,
    #[serde(alias = "Secret")]
    pub secret: String,
    /// 小票抬头的地址行
    #[serde(default, alias = "Address")]
    pub address: Vec<String>,
    /// 小票备注
    #[serde(default, alias = "Remark")]
    pub remark: Option<String>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("phone", &self.phone)
            .field("secret", &"***")
            .field("address", &self.address)
            .field("remark", &self.remark)
            .finish()
    }
}

impl AppConfig {
    /// 读取并校验配置文件
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// secret 会直接拼进路由路径，必须非空且只含路径安全字符
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        let path_safe = self
            .secret
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !path_safe {
            return Err(ConfigError::InvalidSecret);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.store_mode, StoreMode::Memory);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.catalog_markup_percent, 0);
        assert_eq!(config.fax_line_id, "f0");
    }

    #[test]
    fn test_durable_defaults_to_token_ids() {
        let config = Config::from_lookup(lookup(&[("STORE_MODE", "durable")])).unwrap();
        assert_eq!(config.store_mode, StoreMode::Durable);
        assert_eq!(config.id_strategy, IdStrategy::Token);
    }

    #[test]
    fn test_durable_rejects_sequential_ids() {
        let err = Config::from_lookup(lookup(&[
            ("STORE_MODE", "durable"),
            ("ID_STRATEGY", "sequential"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::SequentialIdsNotDurable));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = Config::from_lookup(lookup(&[("HTTP_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "HTTP_PORT", .. }));

        let err = Config::from_lookup(lookup(&[("STORE_MODE", "cloud")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "STORE_MODE", .. }));
    }

    #[test]
    fn test_app_config_legacy_keys() {
        let config = AppConfig::from_json(
            r#"{"Username":"u","Password":"p","Phone":"+4930123","Secret":"abc_123"}"#,
        )
        .unwrap();
        assert_eq!(config.username, "u");
        assert_eq!(config.phone, "+4930123");
        assert_eq!(config.secret, "abc_123");
        assert!(config.address.is_empty());
    }

    #[test]
    fn test_app_config_rejects_bad_secret() {
        let empty = AppConfig::from_json(
            r#"{"username":"u","password":"p","phone":"1","secret":""}"#,
        );
        assert!(matches!(empty, Err(ConfigError::EmptySecret)));

        let slash = AppConfig::from_json(
            r#"{"username":"u","password":"p","phone":"1","secret":"a/b"}"#,
        );
        assert!(matches!(slash, Err(ConfigError::InvalidSecret)));
    }

    #[test]
    fn test_app_config_missing_file() {
        let err = AppConfig::load("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_app_config_debug_masks_credentials() {
        let config = AppConfig::from_json(
            r#"{"username":"u","password":"hunter2","phone":"1","secret":"topsecret"}"#,
        )
        .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("topsecret"));
    }
}
