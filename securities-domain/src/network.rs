use bon::Builder;
use serde::{Deserialize, Serialize};

/// 网络配置
///
/// 描述账本侧的接入环境，供轮询器/SDK 适配器读取；核心层只定义形状，
/// 不负责加载（从文件或环境变量加载由应用入口完成）。
#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// 环境名（如 mainnet / testnet / previewnet）
    environment: String,
    /// 镜像节点 URL（只读查询）
    mirror_node_url: String,
    /// JSON-RPC 中继 URL（EVM 交互）
    rpc_relay_url: String,
    /// 轮询间隔（毫秒）
    #[builder(default = 5_000)]
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    5_000
}

impl NetworkConfig {
    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn mirror_node_url(&self) -> &str {
        &self.mirror_node_url
    }

    pub fn rpc_relay_url(&self) -> &str {
        &self.rpc_relay_url
    }

    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
    }
}
