//! 绘图命令序列
//!
//! 外部绘图引擎与本库之间唯一的数据交换格式：一个有序的命令列表。
//! 语法：
//! - `MoveTo` 开始一个新的子路径
//! - `LineTo` / `CurveTo` / `ArcTo` 从当前点画到新的端点，之前必须有当前点
//! - `ClosePath` 闭合当前子路径，当前点回到子路径起点
//!
//! 命令序列按 `MoveTo` 切分为 [`Segment`]，见 [`SegmentCursor`]。

use crate::error::{GeometryError, Result};
use crate::extents::Extents;
use crate::math::Point2;
use crate::primitive::Sweep;
use crate::segment::{Segment, SegmentCursor, Segments};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 绘图命令
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    MoveTo(Point2),
    LineTo(Point2),
    /// 两个控制点和终点
    CurveTo(Point2, Point2, Point2),
    /// 圆弧在 t = 0.5 处经过的点、终点和扫掠方向
    ///
    /// 方向只对起点与终点重合的整圆起作用。
    ArcTo(Point2, Point2, Sweep),
    ClosePath,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::MoveTo(_) => "move to",
            Command::LineTo(_) => "line to",
            Command::CurveTo(..) => "curve to",
            Command::ArcTo(..) => "arc to",
            Command::ClosePath => "close path",
        }
    }

    /// 命令携带的点
    pub fn points(&self) -> Vec<Point2> {
        match *self {
            Command::MoveTo(p) | Command::LineTo(p) => vec![p],
            Command::CurveTo(c1, c2, end) => vec![c1, c2, end],
            Command::ArcTo(through, end, _) => vec![through, end],
            Command::ClosePath => Vec::new(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        for point in self.points() {
            write!(f, " ({}, {})", point.x, point.y)?;
        }
        if let Command::ArcTo(_, _, Sweep::Clockwise) = self {
            f.write_str(" clockwise")?;
        }
        Ok(())
    }
}

/// 命令序列
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// 把若干分段重新序列化为一个命令序列
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> Self {
        let commands = segments
            .into_iter()
            .flat_map(|segment| segment.to_commands())
            .collect();
        Self { commands }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn move_to(&mut self, point: Point2) -> &mut Self {
        self.push(Command::MoveTo(point))
    }

    pub fn line_to(&mut self, point: Point2) -> &mut Self {
        self.push(Command::LineTo(point))
    }

    pub fn curve_to(&mut self, control1: Point2, control2: Point2, end: Point2) -> &mut Self {
        self.push(Command::CurveTo(control1, control2, end))
    }

    /// 圆弧，整圆按逆时针处理
    pub fn arc_to(&mut self, through: Point2, end: Point2) -> &mut Self {
        self.arc_to_with_sweep(through, end, Sweep::CounterClockwise)
    }

    pub fn arc_to_with_sweep(&mut self, through: Point2, end: Point2, sweep: Sweep) -> &mut Self {
        self.push(Command::ArcTo(through, end, sweep))
    }

    pub fn close(&mut self) -> &mut Self {
        self.push(Command::ClosePath)
    }

    /// 从头开始切分分段的游标
    pub fn cursor(&self) -> SegmentCursor<'_> {
        SegmentCursor::new(&self.commands)
    }

    /// 按顺序惰性产生全部分段
    pub fn segments(&self) -> Segments<'_> {
        self.cursor().into_iter()
    }

    /// 检查命令语法和每个图元的几何有效性
    pub fn validate(&self) -> Result<()> {
        if self.commands.is_empty() {
            return Err(GeometryError::EmptyInput("path has no commands".to_string()));
        }
        for segment in self.segments() {
            segment?;
        }
        Ok(())
    }

    /// 全部分段包围盒的并集
    pub fn extents(&self) -> Result<Extents> {
        let mut extents = Extents::new();
        for segment in self.segments() {
            extents.add(&segment?.extents());
        }
        Ok(extents)
    }
}

impl FromIterator<Command> for Path {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
