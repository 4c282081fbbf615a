//! # resoscan - 中子截面共振峰分析工具
//!
//! 从核数据库检索元素及同位素的中子截面，寻找超过阈值的共振峰，
//! 整理为按同位素和能量索引的共振表。
//!
//! ## 子命令
//! - `elements` - 列出核数据库中的元素
//! - `sigmas`   - 检索截面并保存快照
//! - `resos`    - 提取共振峰
//! - `plot`     - 绘制截面曲线
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── library/   (核数据库读取)
//!   │     ├── reso/      (截面检索、寻峰、绘图)
//!   │     ├── storage/   (快照)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod library;
mod models;
mod reso;
mod storage;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
