//! ZPath 命令行工具
//!
//! ```text
//! zpath [-v] info <file>
//! zpath [-v] offset <in> <distance> <out>
//! zpath [-v] reverse <in> <out>
//! zpath [-v] dump <file>
//! ```
//!
//! 扩展名为 `.json` 的文件按 JSON 读写，其他按原生格式读写。

use anyhow::{anyhow, bail, Context, Result};
use std::path::Path as FilePath;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use zpath_core::path::Path;
use zpath_core::segment::Segment;
use zpath_file::{dump, json, native};

const USAGE: &str = "\
usage: zpath [-v] <command> [args]

commands:
  info <file>                     segment count, extents and length
  offset <in> <distance> <out>    offset every segment
  reverse <in> <out>              reverse every segment
  dump <file>                     list commands per segment";

fn is_json(file: &FilePath) -> bool {
    file.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn load(file: &FilePath) -> Result<Path> {
    let path = if is_json(file) {
        json::load(file)
    } else {
        native::load(file)
    };
    path.with_context(|| format!("Failed to open file: {}", file.display()))
}

fn save(path: &Path, file: &FilePath) -> Result<()> {
    let result = if is_json(file) {
        json::save(path, file)
    } else {
        native::save(path, file)
    };
    result.with_context(|| format!("Failed to save file: {}", file.display()))
}

fn segments(path: &Path) -> Result<Vec<Segment>> {
    Ok(path.segments().collect::<zpath_core::error::Result<Vec<_>>>()?)
}

fn info(file: &FilePath) -> Result<()> {
    let path = load(file)?;
    let segments = segments(&path)?;

    println!("{}: {} commands, {} segments", file.display(), path.len(), segments.len());
    for (index, segment) in segments.iter().enumerate() {
        let extents = segment.extents();
        let max = extents.max();
        println!(
            "  segment {}: {} primitives, {}, length {:.6}, extents ({}, {}) - ({}, {})",
            index,
            segment.len(),
            if segment.is_closed() { "closed" } else { "open" },
            segment.length(),
            extents.origin.x,
            extents.origin.y,
            max.x,
            max.y
        );
    }

    let extents = path.extents()?;
    if extents.is_defined {
        let center = extents.center();
        println!(
            "  extents: origin ({}, {}), size ({}, {}), center ({}, {})",
            extents.origin.x, extents.origin.y, extents.size.x, extents.size.y, center.x, center.y
        );
    } else {
        println!("  extents: undefined");
    }
    Ok(())
}

fn offset(input: &FilePath, distance: f64, output: &FilePath) -> Result<()> {
    let path = load(input)?;
    let offsets = segments(&path)?
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            segment
                .offset(distance)
                .with_context(|| format!("Failed to offset segment {}", index))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(segments = offsets.len(), distance, "offset complete");
    save(&Path::from_segments(&offsets), output)
}

fn reverse(input: &FilePath, output: &FilePath) -> Result<()> {
    let path = load(input)?;
    let reversed: Vec<Segment> = segments(&path)?.iter().map(Segment::reverse).collect();
    save(&Path::from_segments(&reversed), output)
}

fn run(args: &[String]) -> Result<()> {
    let arg = |index: usize| -> Result<&str> {
        args.get(index)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("missing argument\n{}", USAGE))
    };

    match arg(0)? {
        "info" => info(FilePath::new(arg(1)?)),
        "dump" => {
            let path = load(FilePath::new(arg(1)?))?;
            print!("{}", dump::dump_path(&path)?);
            Ok(())
        }
        "offset" => {
            let text = arg(2)?;
            let distance: f64 = text
                .parse()
                .with_context(|| format!("Invalid distance: {}", text))?;
            offset(FilePath::new(arg(1)?), distance, FilePath::new(arg(3)?))
        }
        "reverse" => reverse(FilePath::new(arg(1)?), FilePath::new(arg(2)?)),
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    }
}

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.first().is_some_and(|a| a == "-v");
    if verbose {
        args.remove(0);
    }

    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    info!("Starting ZPath...");
    run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zpath_core::math::Point2;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_offset_and_reverse_files() {
        let dir = std::env::temp_dir();
        let input = dir.join("zpath_app_input.json");
        let offset_out = dir.join("zpath_app_offset.zpath");
        let reverse_out = dir.join("zpath_app_reverse.json");

        let mut path = Path::new();
        path.move_to(Point2::new(0.0, 0.0)).line_to(Point2::new(10.0, 0.0));
        json::save(&path, &input).unwrap();

        run(&args(&["offset", input.to_str().unwrap(), "2", offset_out.to_str().unwrap()])).unwrap();
        let offset = native::load(&offset_out).unwrap();
        assert_eq!(offset.commands()[0], zpath_core::path::Command::MoveTo(Point2::new(0.0, 2.0)));

        run(&args(&["reverse", input.to_str().unwrap(), reverse_out.to_str().unwrap()])).unwrap();
        let reversed = json::load(&reverse_out).unwrap();
        assert_eq!(reversed.commands()[0], zpath_core::path::Command::MoveTo(Point2::new(10.0, 0.0)));

        for file in [input, offset_out, reverse_out] {
            std::fs::remove_file(file).ok();
        }
    }

    #[test]
    fn test_bad_arguments() {
        assert!(run(&args(&[])).is_err());
        assert!(run(&args(&["frobnicate"])).is_err());
        assert!(run(&args(&["offset", "a.json", "wide", "b.json"])).is_err());
    }
}
