use serde::{Deserialize, Serialize};

/// 企业微信机器人 webhook 默认基础地址，接收方的 key 直接拼接在其后。
pub const WEWORK_WEBHOOK_URL: &str = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=";

/// 全局告警通知配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlerterConfig {
    #[serde(default)]
    pub wework: WeWorkConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeWorkConfig {
    pub webhook_url: String,
    // 单次 HTTP 请求超时 (秒)
    pub timeout_secs: u64,
}

impl Default for WeWorkConfig {
    fn default() -> Self {
        Self {
            webhook_url: WEWORK_WEBHOOK_URL.to_string(),
            timeout_secs: 10,
        }
    }
}
