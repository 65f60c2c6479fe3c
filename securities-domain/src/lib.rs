//! 证券通证化领域层基础库（securities-domain）
//!
//! 为基于外部账本（Hedera 网络或 EVM 兼容链）的证券通证化产品提供领域层构件：
//! - 统一错误分类（`error`）：带稳定错误码与错误类别的闭合错误集合
//! - 校验谓词（`validation`）与值对象（`value_object`）：账户/证券标识、金额等
//! - 只读视图（`view`）：面向查询返回的类型化读模型
//! - 领域端口（`ports`）：证券操作、资产信息查询、资产登记与区块链轮询生命周期
//! - 业务上下文（`context`）与网络配置（`network`）
//!
//! 本 crate 不包含任何账本实现：所有对外部账本的访问都通过 `ports` 中的
//! 接口完成，由基础设施层（SDK 适配器、轮询器等）提供具体实现。
//!
pub mod context;
pub mod error;
pub mod network;
pub mod ports;
pub mod validation;
pub mod value_object;
pub mod view;
