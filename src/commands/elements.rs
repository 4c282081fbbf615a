//! # elements 命令实现
//!
//! 读取元素目录并按行打印元素符号。
//!
//! ## 依赖关系
//! - 使用 `cli/elements.rs` 定义的参数
//! - 使用 `library/catalog.rs`

use crate::cli::elements::ElementsArgs;
use crate::error::Result;
use crate::library;
use crate::utils::output;

/// 执行 elements 命令
pub fn execute(args: ElementsArgs) -> Result<()> {
    output::print_header("Available Elements");

    let elements = library::read_elements(&args.library.library, &args.library.catalog)?;

    if elements.is_empty() {
        output::print_warning(&format!(
            "Catalog '{}' lists no elements",
            args.library.catalog
        ));
        return Ok(());
    }

    for row in elements.chunks(args.per_line.max(1)) {
        println!("  {}", row.join("  "));
    }

    output::print_separator();
    output::print_success(&format!(
        "{} elements in '{}'",
        elements.len(),
        args.library.library.display()
    ));

    Ok(())
}
