use gymdesk_client::ClientConfig;

use crate::payroll::DEFAULT_WORKING_DAYS;

/// 应用配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | GYMDESK_API_URL | http://localhost:5000 | 后端地址 |
/// | GYMDESK_API_TOKEN | - | Bearer token |
/// | GYMDESK_TOKEN_EXPIRES_AT | - | token 过期时间 (RFC 3339) |
/// | GYMDESK_TIMEOUT_SECS | 30 | 请求超时(秒) |
/// | GYMDESK_LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | GYMDESK_LOG_JSON | false | JSON 格式日志 |
/// | GYMDESK_LOG_DIR | - | 日志文件目录 |
/// | GYMDESK_WORKING_DAYS | 30 | 工资周期工作日 |
///
/// # 示例
///
/// ```ignore
/// GYMDESK_API_URL=https://api.example.com GYMDESK_LOG_LEVEL=debug gymdesk bios
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 后端连接配置
    pub client: ClientConfig,
    pub log_level: String,
    pub log_json: bool,
    /// 日志目录，未设置时只输出到控制台
    pub log_dir: Option<String>,
    /// 默认工作日 (presentDays 缺省值)
    pub working_days: u32,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            client: ClientConfig::from_env(),
            log_level: std::env::var("GYMDESK_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("GYMDESK_LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("GYMDESK_LOG_DIR")
                .ok()
                .filter(|d| !d.trim().is_empty()),
            working_days: std::env::var("GYMDESK_WORKING_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|d| *d > 0)
                .unwrap_or(DEFAULT_WORKING_DAYS),
        }
    }

    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            working_days: DEFAULT_WORKING_DAYS,
        }
    }
}
