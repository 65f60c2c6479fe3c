use bon::Builder;
use serde::{Deserialize, Serialize};

/// 业务上下文信息
///
/// 承载一次调用的横切信息（链路追踪、审计主体、操作因果），
/// 由调用方在入口处构造并透传，本层不做任何解释。
#[derive(Builder, Default, Debug, Clone, Serialize, Deserialize)]
pub struct BusinessContext {
    /// 关联ID
    correlation_id: Option<String>,
    /// 因果ID
    causation_id: Option<String>,
    /// 触发操作的主体类型（如用户、系统等）
    actor_type: Option<String>,
    /// 触发操作的主体ID
    actor_id: Option<String>,
}

impl BusinessContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn causation_id(&self) -> Option<&str> {
        self.causation_id.as_deref()
    }

    pub fn actor_type(&self) -> Option<&str> {
        self.actor_type.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }
}
