use crate::notify::entity::{AlertEvent, NotifyReceiver};
use crate::notify::error::NotifyError;
use async_trait::async_trait;

/// # Summary
/// 告警通知处理器接口，每个实现对应一种通知渠道。
///
/// # Invariants
/// - 实现必须是 `Send` 和 `Sync` 以支持并发调用。
/// - 一次 `send` 即一次投递尝试，内部不做重试。
#[async_trait]
pub trait AlertNotifyHandler: Send + Sync {
    /// # Summary
    /// 通知渠道类型编码，供外部注册表按类型选择处理器。
    fn channel_type(&self) -> u8;

    /// # Summary
    /// 将已渲染的告警内容投递给接收方。
    ///
    /// # Arguments
    /// * `receiver` - 接收方配置。
    /// * `rendered` - 由外部模板引擎渲染好的消息正文。
    /// * `alert` - 触发的告警事件。
    ///
    /// # Returns
    /// * 成功返回 `Ok(())`。
    /// * 失败返回带渠道标签的 `Err(NotifyError)`。
    async fn send(
        &self,
        receiver: &NotifyReceiver,
        rendered: &str,
        alert: &AlertEvent,
    ) -> Result<(), NotifyError>;
}

/// # Summary
/// 通知模板渲染接口，将告警事件转为消息正文。
///
/// # Invariants
/// - 渲染引擎本身不属于本系统，此处只定义接入点。
pub trait NoticeRenderer: Send + Sync {
    /// 渲染失败时返回可读的错误描述。
    fn render(&self, alert: &AlertEvent) -> Result<String, String>;
}
