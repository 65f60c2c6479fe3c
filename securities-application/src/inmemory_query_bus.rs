use crate::{
    context::AppContext,
    error::AppError,
    middleware::{BoxAnySend, DispatchInfo, DispatchKind, ErasedHandlerFn, Middleware, Next},
    query::Query,
    query_bus::QueryBus,
    query_handler::QueryHandler,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::any::{TypeId, type_name};
use std::sync::Arc;

/// 查询处理器注册表
///
/// 与 [`CommandHandlerMap`](crate::inmemory_command_bus::CommandHandlerMap) 同构：
/// 引导期显式填充，传入总线后只读；每个查询类型至多一个处理器。
pub struct QueryHandlerMap {
    handlers: DashMap<TypeId, (&'static str, ErasedHandlerFn)>,
}

impl Default for QueryHandlerMap {
    fn default() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }
}

impl QueryHandlerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册查询处理器
    pub fn register<Q, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        let key = TypeId::of::<Q>();

        if self.handlers.contains_key(&key) {
            return Err(AppError::AlreadyRegisteredQuery { query: Q::NAME });
        }

        let f: ErasedHandlerFn = {
            let handler = handler.clone();

            Arc::new(move |boxed_q, ctx| {
                let handler = handler.clone();

                Box::pin(async move {
                    match boxed_q.downcast::<Q>() {
                        Ok(q) => {
                            let dto = handler.handle(ctx, *q).await?;
                            Ok(Box::new(dto) as BoxAnySend)
                        }
                        Err(_) => Err(AppError::TypeMismatch {
                            expected: Q::NAME,
                            found: "unknown",
                        }),
                    }
                })
            })
        };

        self.handlers.insert(key, (Q::NAME, f));

        Ok(())
    }

    /// 已注册的查询名列表（只读视图）
    pub fn registered_queries(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| e.value().0).collect()
    }

    fn get(&self, key: &TypeId) -> Option<ErasedHandlerFn> {
        self.handlers.get(key).map(|e| e.value().1.clone())
    }
}

/// 基于内存的 QueryBus 实现
/// - 注册表与中间件链在构造时给定，运行期只读
/// - 以类型擦除方式调度，并在调用端进行结果还原
pub struct InMemoryQueryBus {
    handlers: QueryHandlerMap,
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl InMemoryQueryBus {
    /// 以注册表构造（无中间件）
    pub fn new(handlers: QueryHandlerMap) -> Self {
        Self::with_middlewares(handlers, Vec::new())
    }

    /// 以注册表与有序中间件链构造
    pub fn with_middlewares(
        handlers: QueryHandlerMap,
        middlewares: Vec<Arc<dyn Middleware>>,
    ) -> Self {
        Self {
            handlers,
            middlewares,
        }
    }
}

#[async_trait]
impl QueryBus for InMemoryQueryBus {
    async fn dispatch<Q>(&self, ctx: &AppContext, q: Q) -> Result<Q::Dto, AppError>
    where
        Q: Query,
    {
        let Some(f) = self.handlers.get(&TypeId::of::<Q>()) else {
            return Err(AppError::HandlerNotFound(Q::NAME));
        };

        let info = DispatchInfo {
            name: Q::NAME,
            kind: DispatchKind::Query,
        };
        let out = Next::new(&f, &self.middlewares)
            .run(ctx, info, Box::new(q))
            .await?;

        match out.downcast::<Q::Dto>() {
            Ok(dto) => Ok(*dto),
            Err(_) => Err(AppError::TypeMismatch {
                expected: type_name::<Q::Dto>(),
                found: "unknown",
            }),
        }
    }
}
