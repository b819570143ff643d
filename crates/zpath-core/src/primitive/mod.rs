//! 路径图元
//!
//! 一个图元是分段中的一段几何：直线、圆弧或三次贝塞尔曲线。
//! 每个图元的起点（`origin`）与前一个图元的终点相同。
//!
//! [`Primitive`] 是封闭的变体集合，所有操作都通过穷尽匹配分派到具体实现。
//! 涉及曲线的求交先把曲线离散为折线，精度由 [`Tolerance`] 控制。

pub mod arc;
pub mod curve;
pub mod line;

pub use arc::{Arc, ArcGeometry, Sweep};
pub use curve::Curve;
pub use line::Line;

use crate::error::{GeometryError, Result};
use crate::extents::Extents;
use crate::math::{points_coincide, Point2, Tolerance, Vector2, EPSILON};
use crate::path::Command;
use crate::transform::Transform2D;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// 连接点离原端点太远时（相对于缺口长度）改用连接线段
const JOIN_LIMIT: f64 = 4.0;

/// 图元类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Line,
    Arc,
    Curve,
}

impl PrimitiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Line => "line",
            PrimitiveKind::Arc => "arc",
            PrimitiveKind::Curve => "curve",
        }
    }

    /// 点的数量（包含起点）
    pub fn point_count(&self) -> usize {
        match self {
            PrimitiveKind::Line => 2,
            PrimitiveKind::Arc => 3,
            PrimitiveKind::Curve => 4,
        }
    }
}

/// 图元
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line(Line),
    Arc(Arc),
    Curve(Curve),
}

impl Primitive {
    /// 从绘图命令构造，`origin` 为当前点
    pub fn from_command(origin: Point2, command: &Command) -> Result<Self> {
        match *command {
            Command::LineTo(end) => Ok(Primitive::Line(Line::new(origin, end))),
            Command::ArcTo(through, end, sweep) => {
                Ok(Primitive::Arc(Arc::with_sweep(origin, through, end, sweep)?))
            }
            Command::CurveTo(control1, control2, end) => {
                Ok(Primitive::Curve(Curve::new(origin, control1, control2, end)))
            }
            Command::MoveTo(_) | Command::ClosePath => Err(GeometryError::MalformedSequence(
                format!("{} does not describe a primitive", command.name()),
            )),
        }
    }

    /// 转换为绘图命令（起点由前一条命令给出）
    pub fn to_command(&self) -> Command {
        match self {
            Primitive::Line(line) => Command::LineTo(line.end),
            Primitive::Arc(arc) => Command::ArcTo(arc.through(), arc.end(), arc.sweep()),
            Primitive::Curve(curve) => Command::CurveTo(curve.control1, curve.control2, curve.end),
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Line(_) => PrimitiveKind::Line,
            Primitive::Arc(_) => PrimitiveKind::Arc,
            Primitive::Curve(_) => PrimitiveKind::Curve,
        }
    }

    pub fn origin(&self) -> Point2 {
        match self {
            Primitive::Line(line) => line.origin,
            Primitive::Arc(arc) => arc.origin(),
            Primitive::Curve(curve) => curve.origin,
        }
    }

    pub fn endpoint(&self) -> Point2 {
        match self {
            Primitive::Line(line) => line.end,
            Primitive::Arc(arc) => arc.end(),
            Primitive::Curve(curve) => curve.end,
        }
    }

    /// 全部点（包含起点），数量为 `kind().point_count()`
    pub fn points(&self) -> Vec<Point2> {
        match self {
            Primitive::Line(line) => vec![line.origin, line.end],
            Primitive::Arc(arc) => vec![arc.origin(), arc.through(), arc.end()],
            Primitive::Curve(curve) => vec![curve.origin, curve.control1, curve.control2, curve.end],
        }
    }

    pub fn pair_at(&self, t: f64) -> Point2 {
        match self {
            Primitive::Line(line) => line.pair_at(t),
            Primitive::Arc(arc) => arc.pair_at(t),
            Primitive::Curve(curve) => curve.pair_at(t),
        }
    }

    /// 切向量，未归一化
    pub fn vector_at(&self, t: f64) -> Vector2 {
        match self {
            Primitive::Line(line) => line.vector_at(t),
            Primitive::Arc(arc) => arc.vector_at(t),
            Primitive::Curve(curve) => curve.vector_at(t),
        }
    }

    /// 包围盒：直线和圆弧精确，曲线为控制多边形的包围盒
    pub fn extents(&self) -> Extents {
        match self {
            Primitive::Line(line) => line.extents(),
            Primitive::Arc(arc) => arc.extents(),
            Primitive::Curve(curve) => curve.extents(),
        }
    }

    pub fn length(&self) -> f64 {
        self.length_with(&Tolerance::default())
    }

    pub fn length_with(&self, tolerance: &Tolerance) -> f64 {
        match self {
            Primitive::Line(line) => line.length(),
            Primitive::Arc(arc) => arc.length(),
            Primitive::Curve(curve) => curve.length_with(tolerance),
        }
    }

    /// 偏移图元，距离的符号与 `normal()` 的旋转方向一致
    pub fn offset(&self, distance: f64) -> Result<Primitive> {
        Ok(match self {
            Primitive::Line(line) => Primitive::Line(line.offset(distance)?),
            Primitive::Arc(arc) => Primitive::Arc(arc.offset(distance)?),
            Primitive::Curve(curve) => Primitive::Curve(curve.offset(distance)?),
        })
    }

    pub fn reverse(&self) -> Primitive {
        match self {
            Primitive::Line(line) => Primitive::Line(line.reverse()),
            Primitive::Arc(arc) => Primitive::Arc(arc.reverse()),
            Primitive::Curve(curve) => Primitive::Curve(curve.reverse()),
        }
    }

    pub fn transform(&self, transform: &Transform2D) -> Result<Primitive> {
        Ok(match self {
            Primitive::Line(line) => Primitive::Line(line.transform(transform)),
            Primitive::Arc(arc) => Primitive::Arc(arc.transform(transform)?),
            Primitive::Curve(curve) => Primitive::Curve(curve.transform(transform)),
        })
    }

    /// 离给定点最近的位置参数
    pub fn closest_pos(&self, point: &Point2) -> f64 {
        match self {
            Primitive::Line(line) => line.closest_pos(point),
            Primitive::Arc(arc) => arc.closest_pos(point),
            Primitive::Curve(curve) => curve.closest_pos(point),
        }
    }

    pub fn intersections(&self, other: &Primitive) -> Vec<Point2> {
        self.intersections_with(other, &Tolerance::default())
    }

    /// 计算两个图元的交点
    ///
    /// 直线、圆弧之间为精确代数解；涉及曲线时只离散靠近对方的部分再求交，
    /// 误差约为 `tolerance.flatness`。
    pub fn intersections_with(&self, other: &Primitive, tolerance: &Tolerance) -> Vec<Point2> {
        match (self, other) {
            (Primitive::Line(l1), Primitive::Line(l2)) => l1.intersection(l2).into_iter().collect(),
            (Primitive::Line(line), Primitive::Arc(arc))
            | (Primitive::Arc(arc), Primitive::Line(line)) => arc.intersection_with_line(line),
            (Primitive::Arc(a1), Primitive::Arc(a2)) => a1.intersection(a2),
            (Primitive::Curve(c1), Primitive::Curve(c2)) => {
                dedup_points(c1.intersection(c2, tolerance), tolerance.flatness)
            }
            (Primitive::Curve(curve), other) | (other, Primitive::Curve(curve)) => {
                let mut points = Vec::new();
                for piece in curve.flatten_within(&other.extents(), tolerance) {
                    points.extend(Primitive::Line(piece).intersections_with(other, tolerance));
                }
                dedup_points(points, tolerance.flatness)
            }
        }
    }

    /// 移动起点，曲线的第一个控制点随之平移
    pub fn set_origin(&mut self, origin: Point2) -> Result<()> {
        match self {
            Primitive::Line(line) => line.origin = origin,
            Primitive::Arc(arc) => *arc = arc.with_origin(origin)?,
            Primitive::Curve(curve) => {
                curve.control1 += origin - curve.origin;
                curve.origin = origin;
            }
        }
        Ok(())
    }

    /// 移动终点，曲线的第二个控制点随之平移
    pub fn set_endpoint(&mut self, end: Point2) -> Result<()> {
        match self {
            Primitive::Line(line) => line.end = end,
            Primitive::Arc(arc) => *arc = arc.with_end(end)?,
            Primitive::Curve(curve) => {
                curve.control2 += end - curve.end;
                curve.end = end;
            }
        }
        Ok(())
    }

    /// 把 `self` 的终点与 `next` 的起点连接起来
    ///
    /// 规则：
    /// 1. 两点距离小于 `EPSILON`：把 `next` 的起点吸附到 `self` 的终点；
    /// 2. 两者都不是圆弧、端点切线不平行且交点不太远：两点都移动到切线交点；
    /// 3. 其他情况：返回一条连接两点的线段，由调用者插入。
    pub fn join(&mut self, next: &mut Primitive) -> Result<Option<Line>> {
        let end = self.endpoint();
        let start = next.origin();

        if points_coincide(&end, &start, EPSILON) {
            if end != start {
                next.set_origin(end)?;
            }
            return Ok(None);
        }

        let has_arc = matches!(self, Primitive::Arc(_)) || matches!(next, Primitive::Arc(_));
        if !has_arc {
            let ta = self.vector_at(1.0);
            let tb = next.vector_at(0.0);
            let cross = ta.perp(&tb);

            if cross.abs() > EPSILON * ta.norm() * tb.norm() {
                let s = (start - end).perp(&tb) / cross;
                let joint = end + ta * s;
                let gap = (start - end).norm();

                if (joint - end).norm() <= JOIN_LIMIT * gap {
                    trace!(x = joint.x, y = joint.y, "joining primitives at tangent intersection");
                    self.set_endpoint(joint)?;
                    next.set_origin(joint)?;
                    return Ok(None);
                }
            }
        }

        trace!("bridging primitives with a line");
        Ok(Some(Line::new(end, start)))
    }
}

impl fmt::Display for Primitive {
    /// 与对应绘图命令的输出一致，例如 `line to (x, y)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_command())
    }
}

/// 合并距离小于 `tolerance` 的点，保持首次出现的顺序
pub fn dedup_points(points: Vec<Point2>, tolerance: f64) -> Vec<Point2> {
    let mut unique: Vec<Point2> = Vec::with_capacity(points.len());
    for point in points {
        if !unique.iter().any(|p| points_coincide(p, &point, tolerance)) {
            unique.push(point);
        }
    }
    unique
}
