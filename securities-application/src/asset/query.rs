use serde::Serialize;

use securities_domain::view::AssetView;

use crate::dto::Dto;
use crate::query::Query;

/// 列出全部已登记资产
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAssetsQuery;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetsDto(pub Vec<AssetView>);

impl Dto for AssetsDto {}

impl Query for ListAssetsQuery {
    const NAME: &'static str = "asset.list";
    type Dto = AssetsDto;
}
