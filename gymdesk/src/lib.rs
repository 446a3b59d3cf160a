//! GymDesk - 健身房管理后台数据聚合层
//!
//! # 架构概述
//!
//! - **洞察** (`insights`): 纯函数聚合 (BiOS、资产、跟进、线索、凭证)
//! - **工资** (`payroll`): Decimal 精度的工资周期计算
//! - **向导** (`workflow`): 跟进自动化创建向导状态机
//! - **服务** (`services`): 并发加载、容错降级与写操作
//! - **CLI** (`cli`): 命令行入口
//!
//! # 模块结构
//!
//! ```text
//! gymdesk/src/
//! ├── core/          # 配置
//! ├── insights/      # 仪表盘聚合
//! ├── payroll/       # 工资计算
//! ├── services/      # 页面数据装配
//! ├── utils/         # 错误、日志
//! ├── workflow.rs    # 向导
//! └── cli.rs         # 命令行
//! ```

pub mod cli;
pub mod core;
pub mod insights;
pub mod payroll;
pub mod services;
pub mod utils;
pub mod workflow;

// Re-export 公共类型
pub use core::Config;
pub use payroll::{PayrollCycle, PayrollError};
pub use services::DashboardService;
pub use utils::{AppError, AppResult};
pub use workflow::{WizardError, WizardStep, WorkflowWizard};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// 设置运行环境: 初始化日志 (.env 由调用方预先加载)
///
/// 必须在第一次记录日志之前调用
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    tracing::debug!(base_url = %config.client.base_url, "Environment ready");
    Ok(())
}
