use alerter_core::config::AlerterConfig;
use alerter_core::notify::entity::{AlertEvent, NotifyReceiver};
use alerter_core::notify::port::AlertNotifyHandler;
use alerter_notify::WeWorkNotifyHandler;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// 配置文件路径的环境变量，缺省读取当前目录下的 `alerter.toml`。
const ENV_CONFIG_PATH: &str = "ALERTER_CONFIG";

/// 测试通知所需的全部配置
#[derive(Debug, Deserialize)]
struct AppConfig {
    #[serde(default)]
    alerter: AlerterConfig,
    receiver: NotifyReceiver,
}

/// # Summary
/// 分层加载配置：配置文件 (可选) → `ALERTER__` 前缀环境变量。
///
/// # Returns
/// * 成功返回 `AppConfig`，缺少接收方或格式错误时返回 `ConfigError`。
fn load_config() -> Result<AppConfig, ConfigError> {
    let path = std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| "alerter".to_string());

    Config::builder()
        .add_source(File::with_name(&path).required(false))
        .add_source(Environment::with_prefix("ALERTER").separator("__"))
        .build()?
        .try_deserialize()
}

/// # Summary
/// 向配置的接收方发送一条测试告警。
///
/// # Logic
/// 1. 初始化全局日志 (`RUST_LOG`，默认 info)。
/// 2. 加载配置并构造企业微信通知处理器。
/// 3. 渲染测试消息并发送，失败时记录错误并以非零状态退出。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("Alerter test notification starting...");

    // 2. 加载配置并实例化处理器
    let config = load_config()?;
    let handler = WeWorkNotifyHandler::from_config(&config.alerter.wework)?;

    // 3. 发送测试告警
    let alert = AlertEvent {
        target: "alerter-app".to_string(),
        content: "This is a test notification from alerter".to_string(),
    };
    let rendered = format!(
        "**[Test Notification]**\n> Target: {}\n> {}",
        alert.target, alert.content
    );

    if let Err(e) = handler.send(&config.receiver, &rendered, &alert).await {
        error!(retryable = e.is_retryable(), "{}", e);
        return Err(e.into());
    }

    info!("Test notification delivered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alerter_core::config::WEWORK_WEBHOOK_URL;
    use config::FileFormat;

    #[test]
    fn test_example_config_parses() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(
                include_str!("../alerter.example.toml"),
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.alerter.wework.webhook_url, WEWORK_WEBHOOK_URL);
        assert_eq!(config.receiver.webhook_token, "your-robot-key");
        assert!(config.receiver.needs_mention());
    }

    #[test]
    fn test_alerter_section_defaults() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(
                "[receiver]\nwebhook_token = \"abc\"\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.alerter, AlerterConfig::default());
        assert!(config.receiver.phone_numbers.is_empty());
        assert!(!config.receiver.needs_mention());
    }
}
