//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `library/`, `reso/`, `storage/`, `utils/`
//! - 子模块: elements, sigmas, resos, plot

pub mod elements;
pub mod plot;
pub mod resos;
pub mod sigmas;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Elements(args) => elements::execute(args),
        Commands::Sigmas(args) => sigmas::execute(args),
        Commands::Resos(args) => resos::execute(args),
        Commands::Plot(args) => plot::execute(args),
    }
}
