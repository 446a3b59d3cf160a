//! 服务层 - 页面数据装配
//!
//! # 服务列表
//!
//! - [`DashboardService`] - 各仪表盘页面的数据加载、聚合与写操作

pub mod dashboard;

pub use dashboard::{
    AssetOverview, DashboardService, FollowUpBoard, LeadOverview, ProductionOverview, RecipeCost,
    TransactionBoard, VoucherOverview,
};
