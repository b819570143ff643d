//! 分段
//!
//! 分段是命令序列中两个 `MoveTo` 之间连续的图元序列，满足
//! `primitives[i].origin() == primitives[i - 1].endpoint()`。
//!
//! [`SegmentCursor`] 从命令序列头部开始逐个切分分段，可以通过
//! [`SegmentCursor::reset`] 回到头部重新遍历。

use crate::error::{GeometryError, Result};
use crate::extents::Extents;
use crate::math::{points_coincide, Point2, Tolerance, Vector2, EPSILON};
use crate::path::Command;
use crate::primitive::{dedup_points, Line, Primitive};
use crate::transform::Transform2D;
use std::fmt;
use tracing::{debug, trace};

/// 分段求交时合并交点的距离
const INTERSECTION_MERGE_DISTANCE: f64 = 10.0 * EPSILON;

/// 连续图元序列
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    primitives: Vec<Primitive>,
    closed: bool,
}

impl Segment {
    /// 构造分段，图元序列不能为空且首尾相接
    pub fn new(primitives: Vec<Primitive>, closed: bool) -> Result<Self> {
        if primitives.is_empty() {
            return Err(GeometryError::EmptyInput(
                "segment has no primitives".to_string(),
            ));
        }
        for (i, pair) in primitives.windows(2).enumerate() {
            if !points_coincide(&pair[0].endpoint(), &pair[1].origin(), EPSILON) {
                return Err(GeometryError::MalformedSequence(format!(
                    "primitive {} does not start at the end of primitive {}",
                    i + 1,
                    i
                )));
            }
        }
        Ok(Self { primitives, closed })
    }

    /// 命令序列中的第一个分段
    pub fn from_commands(commands: &[Command]) -> Result<Self> {
        SegmentCursor::new(commands)
            .next_segment()?
            .ok_or_else(|| GeometryError::EmptyInput("no segment in command sequence".to_string()))
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn origin(&self) -> Point2 {
        self.primitives[0].origin()
    }

    pub fn endpoint(&self) -> Point2 {
        self.primitives[self.primitives.len() - 1].endpoint()
    }

    /// 包围盒，空分段时未定义
    pub fn extents(&self) -> Extents {
        let mut extents = Extents::new();
        for primitive in &self.primitives {
            extents.add(&primitive.extents());
        }
        extents
    }

    pub fn length(&self) -> f64 {
        self.length_with(&Tolerance::default())
    }

    pub fn length_with(&self, tolerance: &Tolerance) -> f64 {
        self.primitives.iter().map(|p| p.length_with(tolerance)).sum()
    }

    /// `pos` 均匀分配到各图元：第 `floor(pos·n)` 个图元上的局部参数
    fn locate(&self, pos: f64) -> (&Primitive, f64) {
        let n = self.primitives.len();
        let scaled = pos.clamp(0.0, 1.0) * n as f64;
        let index = (scaled.floor() as usize).min(n - 1);
        (&self.primitives[index], scaled - index as f64)
    }

    pub fn pair_at(&self, pos: f64) -> Point2 {
        let (primitive, t) = self.locate(pos);
        primitive.pair_at(t)
    }

    pub fn vector_at(&self, pos: f64) -> Vector2 {
        let (primitive, t) = self.locate(pos);
        primitive.vector_at(t)
    }

    /// 反转图元顺序及每个图元的方向
    pub fn reverse(&self) -> Segment {
        Segment {
            primitives: self.primitives.iter().rev().map(Primitive::reverse).collect(),
            closed: self.closed,
        }
    }

    pub fn transform(&self, transform: &Transform2D) -> Result<Segment> {
        let primitives = self
            .primitives
            .iter()
            .map(|p| p.transform(transform))
            .collect::<Result<Vec<_>>>()?;
        Ok(Segment {
            primitives,
            closed: self.closed,
        })
    }

    /// 偏移每个图元，再用 [`Primitive::join`] 把相邻图元连接起来
    ///
    /// 闭合分段的最后一个图元也与第一个图元连接。
    pub fn offset(&self, distance: f64) -> Result<Segment> {
        debug!(
            primitives = self.primitives.len(),
            distance, "offsetting segment"
        );

        let mut offsets = self.primitives.iter().map(|p| p.offset(distance));
        let mut current = match offsets.next() {
            Some(first) => first?,
            None => {
                return Err(GeometryError::EmptyInput(
                    "cannot offset an empty segment".to_string(),
                ))
            }
        };

        let mut primitives = Vec::with_capacity(self.primitives.len());
        for next in offsets {
            let mut next = next?;
            let bridge = current.join(&mut next)?;
            primitives.push(current);
            if let Some(line) = bridge {
                primitives.push(Primitive::Line(line));
            }
            current = next;
        }
        primitives.push(current);

        if self.closed && primitives.len() >= 2 {
            let last = primitives.len() - 1;
            let (head, tail) = primitives.split_at_mut(last);
            if let Some(line) = tail[0].join(&mut head[0])? {
                primitives.push(Primitive::Line(line));
            }
        }

        trace!(primitives = primitives.len(), "segment offset stitched");
        Ok(Segment {
            primitives,
            closed: self.closed,
        })
    }

    pub fn intersections(&self, other: &Segment) -> Vec<Point2> {
        self.intersections_with(other, &Tolerance::default())
    }

    /// 所有图元对的交点，距离很近的交点合并为一个
    pub fn intersections_with(&self, other: &Segment, tolerance: &Tolerance) -> Vec<Point2> {
        let mut points = Vec::new();
        for a in &self.primitives {
            for b in &other.primitives {
                points.extend(a.intersections_with(b, tolerance));
            }
        }
        dedup_points(points, INTERSECTION_MERGE_DISTANCE)
    }

    /// 重新序列化为命令：`MoveTo` 开头，闭合时以 `ClosePath` 结尾
    pub fn to_commands(&self) -> Vec<Command> {
        let mut commands = Vec::with_capacity(self.primitives.len() + 2);
        if let Some(first) = self.primitives.first() {
            commands.push(Command::MoveTo(first.origin()));
        }
        commands.extend(self.primitives.iter().map(Primitive::to_command));
        if self.closed {
            commands.push(Command::ClosePath);
        }
        commands
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in self.to_commands() {
            writeln!(f, "{}", command)?;
        }
        Ok(())
    }
}

/// 分段游标
///
/// 记录在命令序列中的位置。闭合之后没有 `MoveTo` 就继续绘制时，
/// 新分段从上一个子路径的起点开始。
#[derive(Debug, Clone)]
pub struct SegmentCursor<'a> {
    commands: &'a [Command],
    position: usize,
    /// 闭合后的隐式起点
    restart: Option<Point2>,
}

impl<'a> SegmentCursor<'a> {
    pub fn new(commands: &'a [Command]) -> Self {
        Self {
            commands,
            position: 0,
            restart: None,
        }
    }

    /// 回到命令序列头部
    pub fn reset(&mut self) {
        self.position = 0;
        self.restart = None;
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.commands.len()
    }

    /// 切分下一个分段，序列结束时返回 `None`
    ///
    /// 出错后游标移动到序列末尾。
    pub fn next_segment(&mut self) -> Result<Option<Segment>> {
        let result = self.scan();
        if result.is_err() {
            self.position = self.commands.len();
            self.restart = None;
        }
        result
    }

    fn scan(&mut self) -> Result<Option<Segment>> {
        let mut start = self.restart.take();
        let mut current = start;
        let mut primitives: Vec<Primitive> = Vec::new();

        while let Some(command) = self.commands.get(self.position) {
            match command {
                Command::MoveTo(point) => {
                    if !primitives.is_empty() {
                        break;
                    }
                    if current.is_some() {
                        trace!(index = self.position, "skipping empty sub-path");
                    }
                    start = Some(*point);
                    current = start;
                    self.position += 1;
                }
                Command::ClosePath => {
                    self.position += 1;
                    let Some(start_point) = start else {
                        return Err(GeometryError::MalformedSequence(format!(
                            "close path at command {} has no current point",
                            self.position - 1
                        )));
                    };
                    self.restart = Some(start_point);

                    let Some(last) = primitives.last_mut() else {
                        trace!(index = self.position - 1, "skipping empty closed sub-path");
                        current = start;
                        continue;
                    };
                    let end = last.endpoint();
                    if points_coincide(&end, &start_point, EPSILON) {
                        // 几乎闭合：吸附终点，不补零长度的直线
                        if end != start_point {
                            last.set_endpoint(start_point)?;
                        }
                    } else {
                        primitives.push(Primitive::Line(Line::new(end, start_point)));
                    }
                    return Ok(Some(Segment {
                        primitives,
                        closed: true,
                    }));
                }
                _ => {
                    let Some(origin) = current else {
                        return Err(GeometryError::MalformedSequence(format!(
                            "{} at command {} has no current point",
                            command.name(),
                            self.position
                        )));
                    };
                    let primitive = Primitive::from_command(origin, command)?;
                    current = Some(primitive.endpoint());
                    primitives.push(primitive);
                    self.position += 1;
                }
            }
        }

        if primitives.is_empty() {
            if current.is_some() {
                trace!("skipping trailing move");
            }
            return Ok(None);
        }
        Ok(Some(Segment {
            primitives,
            closed: false,
        }))
    }
}

impl<'a> IntoIterator for SegmentCursor<'a> {
    type Item = Result<Segment>;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Segments<'a> {
        Segments { cursor: self }
    }
}

/// 分段迭代器，出错后结束
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    cursor: SegmentCursor<'a>,
}

impl Iterator for Segments<'_> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_segment().transpose()
    }
}
