use thiserror::Error;

/// # Summary
/// 通知服务错误枚举，是通知处理器对外暴露的唯一错误类型。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
/// - 渠道相关的变体统一以 `[渠道标签]` 作为消息前缀，调用方无需检查内部结构即可记录日志。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// 网络连接、非 200 状态码或响应体无法解析
    #[error("[{channel}] {cause}")]
    Transport { channel: &'static str, cause: String },

    /// 推送平台返回 HTTP 200 但业务码非 0
    #[error("[{channel}] {reason}")]
    Rejected { channel: &'static str, reason: String },

    /// 构造、序列化或渲染过程中的其他错误
    #[error("[{channel}] {cause}")]
    Unexpected { channel: &'static str, cause: String },

    /// 配置错误 (如 HTTP 客户端无法构建)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NotifyError {
    /// # Summary
    /// 是否值得由上层重试。
    ///
    /// # Logic
    /// 只有传输层失败可能是暂时性的；平台拒绝 (如 key 无效) 重试无意义。
    ///
    /// # Returns
    /// * `Transport` 返回 `true`，其余返回 `false`。
    pub fn is_retryable(&self) -> bool {
        matches!(self, NotifyError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_tag_prefix() {
        let err = NotifyError::Transport {
            channel: "WeWork Notify Error",
            cause: "Http StatusCode 500".to_string(),
        };
        assert_eq!(err.to_string(), "[WeWork Notify Error] Http StatusCode 500");
        assert!(err.is_retryable());

        let err = NotifyError::Rejected {
            channel: "WeWork Notify Error",
            reason: "invalid webhook url".to_string(),
        };
        assert_eq!(err.to_string(), "[WeWork Notify Error] invalid webhook url");
        assert!(!err.is_retryable());
    }
}
