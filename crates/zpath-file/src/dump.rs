//! 文本转储
//!
//! 按分段列出命令，便于调试：
//!
//! ```text
//! segment 0 (closed, 4 primitives)
//!   move to (0, 0)
//!   line to (10, 0)
//!   ...
//! ```

use crate::error::Result;
use zpath_core::path::Path;

pub fn dump_path(path: &Path) -> Result<String> {
    let mut out = String::new();
    for (index, segment) in path.segments().enumerate() {
        let segment = segment?;
        let state = if segment.is_closed() { "closed" } else { "open" };
        out.push_str(&format!(
            "segment {} ({}, {} primitives)\n",
            index,
            state,
            segment.len()
        ));
        for line in segment.to_string().lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zpath_core::math::Point2;

    #[test]
    fn test_dump() {
        let mut path = Path::new();
        path.move_to(Point2::new(0.0, 0.0))
            .line_to(Point2::new(2.0, 0.0))
            .line_to(Point2::new(2.0, 2.0))
            .close()
            .move_to(Point2::new(5.0, 5.0))
            .curve_to(
                Point2::new(6.0, 6.0),
                Point2::new(7.0, 6.0),
                Point2::new(8.0, 5.0),
            );

        let text = dump_path(&path).unwrap();
        let expected = "\
segment 0 (closed, 3 primitives)
  move to (0, 0)
  line to (2, 0)
  line to (2, 2)
  line to (0, 0)
  close path
segment 1 (open, 1 primitives)
  move to (5, 5)
  curve to (6, 6) (7, 6) (8, 5)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_dump_clockwise_circle() {
        let mut path = Path::new();
        path.move_to(Point2::new(1.0, 0.0))
            .arc_to_with_sweep(
                Point2::new(-1.0, 0.0),
                Point2::new(1.0, 0.0),
                zpath_core::primitive::Sweep::Clockwise,
            );

        let text = dump_path(&path).unwrap();
        assert!(text.starts_with("segment 0 (open, 1 primitives)\n"));
        assert!(text.lines().nth(2).unwrap().ends_with("clockwise"));
    }

    #[test]
    fn test_dump_reports_errors() {
        let path = Path::from_commands(vec![zpath_core::path::Command::ClosePath]);
        assert!(dump_path(&path).is_err());
    }
}
