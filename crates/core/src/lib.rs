//! 告警通知领域核心：实体、错误、端口与配置。

pub mod config;
pub mod notify;
