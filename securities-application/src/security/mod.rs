//! 证券用例（security）
//!
//! 证券生命周期（暂停/恢复、控制名单）与只读查询（最大供应量、持仓、
//! 基础信息）。处理器只做一次端口委托，不追加业务逻辑。
//!
pub mod command;
pub mod handler;
pub mod query;
pub mod request;

pub use command::{
    AddToControlListCommand, AddToControlListCommandResponse, PauseCommand, PauseCommandResponse,
    RemoveFromControlListCommand, RemoveFromControlListCommandResponse, UnpauseCommand,
    UnpauseCommandResponse,
};
pub use handler::{
    AddToControlListHandler, GetBalanceOfHandler, GetMaxSupplyHandler, GetSecurityInfoHandler,
    PauseHandler, RemoveFromControlListHandler, UnpauseHandler,
};
pub use query::{
    BalanceDto, GetBalanceOfQuery, GetMaxSupplyQuery, GetSecurityInfoQuery, MaxSupplyDto,
    SecurityInfoDto,
};
pub use request::{
    AddToControlListRequest, GetBalanceOfRequest, GetMaxSupplyRequest, GetSecurityInfoRequest,
    PauseRequest, RemoveFromControlListRequest, UnpauseRequest,
};
