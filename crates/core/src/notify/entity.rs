use serde::{Deserialize, Serialize};

/// # Summary
/// 通知接收方，描述一次投递的目标 webhook 及需要 @ 的人员。
///
/// # Invariants
/// - `webhook_token` 原样拼接在 webhook 基础地址之后。
/// - `phone_numbers` 与 `im_user_ids` 为英文逗号分隔的原始字符串，可为空白。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyReceiver {
    // webhook 的 key
    pub webhook_token: String,
    // 需要 @ 的手机号列表 (例如: "13800000001, 13800000002")
    #[serde(default)]
    pub phone_numbers: String,
    // 需要 @ 的 IM 用户 ID 列表
    #[serde(default)]
    pub im_user_ids: String,
}

impl NotifyReceiver {
    /// # Summary
    /// 判断是否需要额外发送一条 @ 提醒消息。
    ///
    /// # Logic
    /// 手机号或用户 ID 任一非空白即需要。
    ///
    /// # Returns
    /// * 需要提醒返回 `true`。
    pub fn needs_mention(&self) -> bool {
        !is_blank(&self.phone_numbers) || !is_blank(&self.im_user_ids)
    }
}

/// # Summary
/// 已触发的告警事件，由上游告警评估流程产生。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEvent {
    // 告警对象 (被监控的目标)
    pub target: String,
    // 告警详情
    pub content: String,
}

/// 空串或仅包含空白字符视为空白。
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}
