//! ZPath原生文件格式（.zpath）
//!
//! 16 字节文件头之后是 Zstd 压缩的 MessagePack 数据：
//! - 魔数 `ZPTH`
//! - 格式版本（u32 LE）
//! - 标志位（u32 LE，预留）
//! - 压缩后数据长度（u32 LE）

use crate::error::{FileError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use zpath_core::path::Path;

/// 文件魔数 "ZPTH"
const MAGIC: &[u8; 4] = b"ZPTH";

/// 当前文件格式版本
const FORMAT_VERSION: u32 = 1;

/// Zstd 压缩级别（1-22，3 是默认值，平衡速度和压缩比）
const COMPRESSION_LEVEL: i32 = 3;

/// 文件头（16 字节）
#[derive(Debug)]
struct FileHeader {
    magic: [u8; 4],
    version: u32,
    /// 标志位（预留）
    flags: u32,
    compressed_size: u32,
}

impl FileHeader {
    fn new(compressed_size: u32) -> Self {
        Self {
            magic: *MAGIC,
            version: FORMAT_VERSION,
            flags: 0,
            compressed_size,
        }
    }

    fn write(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writer.write_all(&self.magic)?;
        writer.write_all(&self.version.to_le_bytes())?;
        writer.write_all(&self.flags.to_le_bytes())?;
        writer.write_all(&self.compressed_size.to_le_bytes())?;
        Ok(())
    }

    fn read(reader: &mut impl Read) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;

        if &magic != MAGIC {
            return Err(FileError::InvalidFormat(
                "Invalid magic number, not a ZPath file".to_string(),
            ));
        }

        let mut buf = [0u8; 4];

        reader.read_exact(&mut buf)?;
        let version = u32::from_le_bytes(buf);

        reader.read_exact(&mut buf)?;
        let flags = u32::from_le_bytes(buf);

        reader.read_exact(&mut buf)?;
        let compressed_size = u32::from_le_bytes(buf);

        Ok(Self {
            magic,
            version,
            flags,
            compressed_size,
        })
    }
}

/// 可序列化的文件内容
#[derive(Debug, Serialize, Deserialize)]
struct FileContent {
    path: Path,
}

/// 编码为原生格式字节流
pub fn write(path: &Path, writer: &mut impl Write) -> Result<usize> {
    let content = FileContent { path: path.clone() };
    let msgpack_data = rmp_serde::to_vec(&content)?;
    let compressed_data = zstd::encode_all(msgpack_data.as_slice(), COMPRESSION_LEVEL)?;

    let compressed_size = u32::try_from(compressed_data.len()).map_err(|_| {
        FileError::InvalidFormat(format!(
            "compressed data of {} bytes does not fit the header",
            compressed_data.len()
        ))
    })?;

    FileHeader::new(compressed_size).write(writer)?;
    writer.write_all(&compressed_data)?;
    Ok(compressed_data.len())
}

/// 从原生格式字节流解码，并检查命令序列
pub fn read(reader: &mut impl Read) -> Result<Path> {
    let header = FileHeader::read(reader)?;

    if header.version > FORMAT_VERSION {
        return Err(FileError::UnsupportedVersion(format!(
            "File version {} is newer than supported version {}",
            header.version, FORMAT_VERSION
        )));
    }

    let mut compressed_data = vec![0u8; header.compressed_size as usize];
    reader.read_exact(&mut compressed_data)?;

    let msgpack_data = zstd::decode_all(compressed_data.as_slice())?;
    let content: FileContent = rmp_serde::from_slice(&msgpack_data)?;

    content.path.validate()?;
    Ok(content.path)
}

/// 保存命令序列到文件
pub fn save(path: &Path, file: &std::path::Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(file)?);
    let compressed = write(path, &mut writer)?;
    writer.flush()?;

    tracing::info!(
        "Saved {} commands to {} ({} bytes compressed)",
        path.len(),
        file.display(),
        compressed
    );

    Ok(())
}

/// 从文件加载命令序列
pub fn load(file: &std::path::Path) -> Result<Path> {
    let mut reader = BufReader::new(File::open(file)?);
    let path = read(&mut reader)?;

    tracing::info!("Loaded {} commands from {}", path.len(), file.display());

    Ok(path)
}
