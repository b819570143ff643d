//! JSON 互操作
//!
//! 命令序列直接以 serde 的外部标记表示序列化，例如
//! `{"commands":[{"MoveTo":[0.0,0.0]},{"LineTo":[1.0,0.0]}]}`。

use crate::error::Result;
use std::path::Path as FilePath;
use zpath_core::path::Path;

pub fn to_string(path: &Path) -> Result<String> {
    Ok(serde_json::to_string_pretty(path)?)
}

/// 解析并检查命令序列
pub fn from_str(text: &str) -> Result<Path> {
    let path: Path = serde_json::from_str(text)?;
    path.validate()?;
    Ok(path)
}

pub fn save(path: &Path, file: &FilePath) -> Result<()> {
    std::fs::write(file, to_string(path)?)?;
    tracing::info!("Saved {} commands to {}", path.len(), file.display());
    Ok(())
}

pub fn load(file: &FilePath) -> Result<Path> {
    let path = from_str(&std::fs::read_to_string(file)?)?;
    tracing::info!("Loaded {} commands from {}", path.len(), file.display());
    Ok(path)
}
