//! 圆弧图元
//!
//! 圆弧命令只携带两个点：弧上 `t = 0.5` 处的一点和终点，起点是当前点。
//! 圆心、半径、起止角度由这三个点规范地重新计算：
//!
//! - 圆心为三点外接圆的圆心
//! - 扫掠方向由 起点 → 中间点 → 终点 的转向决定
//! - 起点与终点重合时表示整圆，中间点位于直径另一端，方向由 [`Sweep`] 给出
//!
//! 计算得到的 [`ArcGeometry`] 与三点一起缓存在 [`Arc`] 中，
//! 由 [`Arc::from_center`] 构造的圆弧保留调用者给出的精确参数。

use crate::error::{GeometryError, Result};
use crate::extents::Extents;
use crate::math::{points_coincide, unit_from_angle, Point2, Vector2, VectorExt, EPSILON};
use crate::primitive::line::Line;
use crate::primitive::PrimitiveKind;
use crate::transform::Transform2D;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// 角度比较容差（弧度）
const ANGLE_EPSILON: f64 = 1e-9;

/// 圆弧的参数化表示
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub center: Point2,
    pub radius: f64,
    /// 起始角度（弧度）
    pub start_angle: f64,
    /// 终止角度（弧度），小于起始角度时为顺时针
    pub end_angle: f64,
}

impl ArcGeometry {
    /// 带符号的扫掠角
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn angle_at(&self, t: f64) -> f64 {
        self.start_angle + t * self.sweep()
    }

    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        self.center + unit_from_angle(angle) * self.radius
    }

    /// 角度是否落在扫掠范围内（按 2π 取模，考虑方向）
    pub fn contains_angle(&self, angle: f64) -> bool {
        let sweep = self.sweep();
        if sweep.abs() >= TAU - ANGLE_EPSILON {
            return true;
        }

        let delta = self.delta_from_start(angle);
        delta <= sweep.abs() + ANGLE_EPSILON || delta >= TAU - ANGLE_EPSILON
    }

    /// 沿扫掠方向从起始角度到 `angle` 的角距离，范围 `[0, 2π)`
    fn delta_from_start(&self, angle: f64) -> f64 {
        if self.sweep() >= 0.0 {
            (angle - self.start_angle).rem_euclid(TAU)
        } else {
            (self.start_angle - angle).rem_euclid(TAU)
        }
    }

    pub fn contains_point(&self, point: &Point2) -> bool {
        self.contains_angle((point - self.center).polar_angle())
    }
}

/// 扫掠方向
///
/// 非整圆的方向可以由三点转向得到，整圆的三点编码是对称的，只能显式记录。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sweep {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl Sweep {
    pub fn reversed(self) -> Sweep {
        match self {
            Sweep::CounterClockwise => Sweep::Clockwise,
            Sweep::Clockwise => Sweep::CounterClockwise,
        }
    }

    /// 带符号的整圆扫掠角
    fn full_turn(self) -> f64 {
        match self {
            Sweep::CounterClockwise => TAU,
            Sweep::Clockwise => -TAU,
        }
    }
}

/// 圆弧
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArcPoints", into = "ArcPoints")]
pub struct Arc {
    origin: Point2,
    through: Point2,
    end: Point2,
    geometry: ArcGeometry,
}

/// 圆弧的序列化形式（三点编码）
#[derive(Serialize, Deserialize)]
struct ArcPoints {
    origin: Point2,
    through: Point2,
    end: Point2,
    #[serde(default)]
    sweep: Sweep,
}

impl TryFrom<ArcPoints> for Arc {
    type Error = GeometryError;

    fn try_from(points: ArcPoints) -> Result<Self> {
        Arc::with_sweep(points.origin, points.through, points.end, points.sweep)
    }
}

impl From<Arc> for ArcPoints {
    fn from(arc: Arc) -> Self {
        Self {
            origin: arc.origin,
            through: arc.through,
            end: arc.end,
            sweep: arc.sweep(),
        }
    }
}

impl Arc {
    /// 由起点、弧上中间点、终点构造，整圆为逆时针
    pub fn new(origin: Point2, through: Point2, end: Point2) -> Result<Self> {
        Self::with_sweep(origin, through, end, Sweep::CounterClockwise)
    }

    /// 由三点构造，`sweep` 只决定整圆的方向
    ///
    /// 非整圆的方向总是由 起点 → 中间点 → 终点 的转向决定。
    pub fn with_sweep(origin: Point2, through: Point2, end: Point2, sweep: Sweep) -> Result<Self> {
        let geometry = if points_coincide(&origin, &end, EPSILON) {
            // 整圆：中间点在直径另一端
            let center = nalgebra::center(&origin, &through);
            let radius = (origin - center).norm();
            if radius <= EPSILON {
                return Err(GeometryError::DegenerateInput(
                    "full-circle arc with coincident points".to_string(),
                ));
            }
            let start_angle = (origin - center).polar_angle();
            ArcGeometry {
                center,
                radius,
                start_angle,
                end_angle: start_angle + sweep.full_turn(),
            }
        } else {
            let center = circumcenter(&origin, &through, &end).ok_or_else(|| {
                GeometryError::DegenerateInput(format!(
                    "arc points ({}, {}), ({}, {}), ({}, {}) are collinear",
                    origin.x, origin.y, through.x, through.y, end.x, end.y
                ))
            })?;
            let radius = (origin - center).norm();
            let start_angle = (origin - center).polar_angle();
            let raw = (end - center).polar_angle() - start_angle;

            // 起点 → 中间点 → 终点 逆时针转向时扫掠角为正
            let counter_clockwise = (through - origin).perp(&(end - through)) > 0.0;
            let sweep = if counter_clockwise {
                raw.rem_euclid(TAU)
            } else {
                -(-raw).rem_euclid(TAU)
            };

            ArcGeometry {
                center,
                radius,
                start_angle,
                end_angle: start_angle + sweep,
            }
        };

        Ok(Self {
            origin,
            through,
            end,
            geometry,
        })
    }

    /// 由圆心、半径和起止角度构造
    ///
    /// 扫掠角超过 2π 时截断为整圆。
    pub fn from_center(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(GeometryError::DegenerateInput(format!(
                "arc radius must be positive, got {}",
                radius
            )));
        }
        let sweep = (end_angle - start_angle).clamp(-TAU, TAU);
        if sweep == 0.0 {
            return Err(GeometryError::DegenerateInput(
                "arc with zero sweep angle".to_string(),
            ));
        }

        let geometry = ArcGeometry {
            center,
            radius,
            start_angle,
            end_angle: start_angle + sweep,
        };
        let origin = geometry.point_at_angle(start_angle);
        let through = geometry.point_at_angle(geometry.angle_at(0.5));
        let end = if sweep.abs() == TAU {
            origin
        } else {
            geometry.point_at_angle(geometry.end_angle)
        };

        Ok(Self {
            origin,
            through,
            end,
            geometry,
        })
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// 弧上 `t = 0.5` 处的编码点
    pub fn through(&self) -> Point2 {
        self.through
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    /// 扫掠方向
    pub fn sweep(&self) -> Sweep {
        if self.geometry.sweep() < 0.0 {
            Sweep::Clockwise
        } else {
            Sweep::CounterClockwise
        }
    }

    pub fn geometry(&self) -> &ArcGeometry {
        &self.geometry
    }

    pub fn center(&self) -> Point2 {
        self.geometry.center
    }

    pub fn radius(&self) -> f64 {
        self.geometry.radius
    }

    pub fn pair_at(&self, t: f64) -> Point2 {
        self.geometry.point_at_angle(self.geometry.angle_at(t))
    }

    /// 切向量 `r·(a1-a0)·(-sin a, cos a)`
    pub fn vector_at(&self, t: f64) -> Vector2 {
        let angle = self.geometry.angle_at(t);
        unit_from_angle(angle).normal() * (self.geometry.radius * self.geometry.sweep())
    }

    pub fn length(&self) -> f64 {
        self.geometry.radius * self.geometry.sweep().abs()
    }

    /// 精确包围盒：两端点加上扫掠范围内的象限点
    pub fn extents(&self) -> Extents {
        let mut extents = Extents::from_corners(self.origin, self.end);

        let quadrants = [
            (0.0, Vector2::new(1.0, 0.0)),
            (FRAC_PI_2, Vector2::new(0.0, 1.0)),
            (PI, Vector2::new(-1.0, 0.0)),
            (3.0 * FRAC_PI_2, Vector2::new(0.0, -1.0)),
        ];
        for (angle, direction) in quadrants {
            if self.geometry.contains_angle(angle) {
                extents.add_point(&(self.geometry.center + direction * self.geometry.radius));
            }
        }

        extents
    }

    /// 半径变为 `r + distance`，圆心和角度不变
    pub fn offset(&self, distance: f64) -> Result<Arc> {
        let radius = self.geometry.radius + distance;
        if radius <= 0.0 {
            return Err(GeometryError::DegenerateInput(format!(
                "offset {} collapses arc of radius {}",
                distance, self.geometry.radius
            )));
        }
        Arc::from_center(
            self.geometry.center,
            radius,
            self.geometry.start_angle,
            self.geometry.end_angle,
        )
    }

    /// 交换起止点，扫掠方向反转
    pub fn reverse(&self) -> Arc {
        Self {
            origin: self.end,
            through: self.through,
            end: self.origin,
            geometry: ArcGeometry {
                start_angle: self.geometry.end_angle,
                end_angle: self.geometry.start_angle,
                ..self.geometry
            },
        }
    }

    /// 只接受相似变换，其他变换会把圆变为椭圆
    ///
    /// 镜像变换（行列式为负）反转扫掠方向。
    pub fn transform(&self, transform: &Transform2D) -> Result<Arc> {
        if !transform.is_similarity() {
            return Err(GeometryError::Unsupported {
                operation: "transform",
                kind: PrimitiveKind::Arc,
            });
        }
        let sweep = if transform.determinant() < 0.0 {
            self.sweep().reversed()
        } else {
            self.sweep()
        };
        Arc::with_sweep(
            transform.transform_point(&self.origin),
            transform.transform_point(&self.through),
            transform.transform_point(&self.end),
            sweep,
        )
    }

    /// 替换起点，重新计算圆弧
    pub fn with_origin(&self, origin: Point2) -> Result<Arc> {
        Arc::with_sweep(origin, self.through, self.end, self.sweep())
    }

    /// 替换终点，重新计算圆弧
    pub fn with_end(&self, end: Point2) -> Result<Arc> {
        Arc::with_sweep(self.origin, self.through, end, self.sweep())
    }

    pub fn closest_pos(&self, point: &Point2) -> f64 {
        let v = point - self.geometry.center;
        if v.norm_squared() == 0.0 {
            return 0.0;
        }

        let angle = v.polar_angle();
        let sweep = self.geometry.sweep().abs();
        if self.geometry.contains_angle(angle) {
            let delta = self.geometry.delta_from_start(angle);
            // 起点附近的角度可能落在 2π 一侧
            let delta = if delta > sweep { 0.0 } else { delta };
            return (delta / sweep).clamp(0.0, 1.0);
        }

        if (point - self.origin).norm() <= (point - self.end).norm() {
            0.0
        } else {
            1.0
        }
    }

    /// 圆弧-线段交点
    ///
    /// 把线段的参数式代入圆方程求解二次方程，
    /// 保留线段参数在 `[0, 1]` 内且角度在圆弧范围内的根。
    pub fn intersection_with_line(&self, line: &Line) -> Vec<Point2> {
        let d = line.direction();
        let f = line.origin - self.geometry.center;
        let r = self.geometry.radius;

        let a = d.dot(&d);
        if a == 0.0 {
            return vec![];
        }
        let b = 2.0 * f.dot(&d);
        let c = f.dot(&f) - r * r;

        let discriminant = b * b - 4.0 * a * c;
        let tolerance = EPSILON * (b * b).max(4.0 * a * r * r);
        if discriminant < -tolerance {
            return vec![];
        }

        let sqrt_disc = discriminant.max(0.0).sqrt();
        let roots = if sqrt_disc == 0.0 {
            // 相切
            vec![-b / (2.0 * a)]
        } else {
            vec![(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)]
        };

        let range = -EPSILON..=1.0 + EPSILON;
        roots
            .into_iter()
            .filter(|t| range.contains(t))
            .map(|t| line.pair_at(t.clamp(0.0, 1.0)))
            .filter(|p| self.geometry.contains_point(p))
            .collect()
    }

    /// 圆弧-圆弧交点（根轴构造），同心圆视为无交点
    pub fn intersection(&self, other: &Arc) -> Vec<Point2> {
        let c1 = self.geometry.center;
        let c2 = other.geometry.center;
        let r1 = self.geometry.radius;
        let r2 = other.geometry.radius;

        let delta = c2 - c1;
        let d = delta.norm();

        if d <= EPSILON || d > r1 + r2 + EPSILON || d < (r1 - r2).abs() - EPSILON {
            return vec![];
        }

        let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
        let h = (r1 * r1 - a * a).max(0.0).sqrt();

        let dir = delta / d;
        let base = c1 + dir * a;
        let perp = dir.normal();

        let candidates = if h <= EPSILON {
            vec![base]
        } else {
            vec![base + perp * h, base - perp * h]
        };

        candidates
            .into_iter()
            .filter(|p| self.geometry.contains_point(p) && other.geometry.contains_point(p))
            .collect()
    }
}

/// 三点外接圆圆心，三点共线时返回 `None`
fn circumcenter(p1: &Point2, p2: &Point2, p3: &Point2) -> Option<Point2> {
    let b = p2 - p1;
    let c = p3 - p1;
    let d = 2.0 * b.perp(&c);

    if d.abs() <= EPSILON * b.norm() * c.norm() {
        return None;
    }

    let b2 = b.norm_squared();
    let c2 = c.norm_squared();
    let ux = (c.y * b2 - b.y * c2) / d;
    let uy = (b.x * c2 - c.x * b2) / d;

    Some(p1 + Vector2::new(ux, uy))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn quarter() -> Arc {
        Arc::from_center(Point2::origin(), 5.0, 0.0, FRAC_PI_2).unwrap()
    }

    #[test]
    fn test_three_point_round_trip() {
        for (a0, a1) in [(0.3, 2.5), (1.0, -2.0), (-3.0, 3.0), (2.0, 2.0 - 4.0)] {
            let arc = Arc::from_center(Point2::new(1.5, -2.0), 3.0, a0, a1).unwrap();
            let decoded = Arc::new(arc.origin(), arc.through(), arc.end()).unwrap();
            let g = decoded.geometry();

            assert!((g.center - arc.center()).norm() < TOL);
            assert!((g.radius - 3.0).abs() < TOL);
            assert!((g.start_angle - a0).abs() < TOL);
            assert!((g.end_angle - a1).abs() < TOL);
        }
    }

    #[test]
    fn test_full_circle() {
        let arc = Arc::new(
            Point2::new(5.0, 0.0),
            Point2::new(-5.0, 0.0),
            Point2::new(5.0, 0.0),
        )
        .unwrap();
        assert!(arc.center().coords.norm() < TOL);
        assert!((arc.geometry().sweep() - TAU).abs() < TOL);
        assert!((arc.length() - TAU * 5.0).abs() < TOL);

        let extents = arc.extents();
        assert!((extents.origin - Point2::new(-5.0, -5.0)).norm() < TOL);
        assert!((extents.size - Vector2::new(10.0, 10.0)).norm() < TOL);
    }

    #[test]
    fn test_collinear_is_degenerate() {
        let result = Arc::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        assert!(matches!(result, Err(GeometryError::DegenerateInput(_))));
        assert!(Arc::from_center(Point2::origin(), 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_ends_lie_on_circle() {
        let arc = Arc::new(
            Point2::new(3.0, 1.0),
            Point2::new(4.5, 2.7),
            Point2::new(2.0, 6.0),
        )
        .unwrap();
        let center = arc.center();
        let r = arc.radius();
        assert!(((arc.pair_at(0.0) - center).norm() - r).abs() < TOL);
        assert!(((arc.pair_at(1.0) - center).norm() - r).abs() < TOL);
        assert!((arc.pair_at(0.0) - arc.origin()).norm() < TOL);
        assert!((arc.pair_at(1.0) - arc.end()).norm() < TOL);
    }

    #[test]
    fn test_vector_at() {
        let arc = quarter();
        let v = arc.vector_at(0.0);
        // 逆时针圆弧在 0 角度处切向朝 +y
        assert!(v.x.abs() < TOL);
        assert!((v.y - 5.0 * FRAC_PI_2).abs() < TOL);

        let cw = arc.reverse();
        let v = cw.vector_at(1.0);
        assert!(v.x.abs() < TOL);
        assert!((v.y + 5.0 * FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn test_extents_include_quadrant_points() {
        let arc = quarter();
        let extents = arc.extents();
        assert!((extents.origin - Point2::new(0.0, 0.0)).norm() < TOL);
        assert!((extents.max() - Point2::new(5.0, 5.0)).norm() < TOL);

        // 跨越 0 角度的圆弧，包围盒必须包含 (r, 0)
        let arc = Arc::from_center(Point2::origin(), 2.0, -PI / 4.0, PI / 4.0).unwrap();
        let extents = arc.extents();
        assert_eq!(extents.max().x, 2.0);

        // 顺时针跨越 π/2
        let arc = Arc::from_center(Point2::origin(), 2.0, 3.0 * PI / 4.0, PI / 4.0).unwrap();
        assert_eq!(arc.extents().max().y, 2.0);
    }

    #[test]
    fn test_offset_grows_radius() {
        let offset = quarter().offset(1.0).unwrap();
        let g = offset.geometry();
        assert_eq!(g.center, Point2::origin());
        assert_eq!(g.radius, 6.0);
        assert_eq!(g.start_angle, 0.0);
        assert_eq!(g.end_angle, FRAC_PI_2);

        assert!(quarter().offset(-5.0).is_err());
    }

    #[test]
    fn test_reverse_twice() {
        let arc = quarter();
        assert_eq!(arc.reverse().reverse(), arc);
        assert_eq!(arc.reverse().origin(), arc.end());
    }

    #[test]
    fn test_transform() {
        let arc = quarter();
        let moved = arc
            .transform(&Transform2D::translation(1.0, 1.0).then(&Transform2D::scale(2.0, 2.0)))
            .unwrap();
        assert!((moved.center() - Point2::new(2.0, 2.0)).norm() < TOL);
        assert!((moved.radius() - 10.0).abs() < TOL);

        let err = arc.transform(&Transform2D::scale(2.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::Unsupported {
                operation: "transform",
                kind: PrimitiveKind::Arc
            }
        );

        // 镜像翻转扫掠方向
        let mirrored = arc.transform(&Transform2D::scale(1.0, -1.0)).unwrap();
        assert!(mirrored.geometry().sweep() < 0.0);
    }

    #[test]
    fn test_line_intersection() {
        let upper = Arc::from_center(Point2::origin(), 5.0, 0.0, PI).unwrap();
        let line = Line::new(Point2::new(-10.0, 3.0), Point2::new(10.0, 3.0));
        let points = upper.intersection_with_line(&line);
        assert_eq!(points.len(), 2);
        assert!((points[0] - Point2::new(-4.0, 3.0)).norm() < TOL);
        assert!((points[1] - Point2::new(4.0, 3.0)).norm() < TOL);

        // 下半圆不在圆弧范围内
        let below = Line::new(Point2::new(-10.0, -3.0), Point2::new(10.0, -3.0));
        assert!(upper.intersection_with_line(&below).is_empty());

        // 线段太短
        let short = Line::new(Point2::new(-1.0, 3.0), Point2::new(1.0, 3.0));
        assert!(upper.intersection_with_line(&short).is_empty());

        // 相切
        let tangent = Line::new(Point2::new(-10.0, 5.0), Point2::new(10.0, 5.0));
        let points = upper.intersection_with_line(&tangent);
        assert_eq!(points.len(), 1);
        assert!((points[0] - Point2::new(0.0, 5.0)).norm() < 1e-6);
    }

    #[test]
    fn test_arc_intersection() {
        let a = Arc::from_center(Point2::new(0.0, 0.0), 5.0, 0.0, PI).unwrap();
        let b = Arc::from_center(Point2::new(8.0, 0.0), 5.0, FRAC_PI_2, 3.0 * FRAC_PI_2).unwrap();
        let points = a.intersection(&b);
        assert_eq!(points.len(), 1);
        assert!((points[0] - Point2::new(4.0, 3.0)).norm() < TOL);

        // 同心圆
        let c = Arc::from_center(Point2::origin(), 3.0, 0.0, PI).unwrap();
        assert!(a.intersection(&c).is_empty());

        // 相距太远
        let far = Arc::from_center(Point2::new(20.0, 0.0), 5.0, 0.0, TAU).unwrap();
        assert!(a.intersection(&far).is_empty());
    }

    #[test]
    fn test_closest_pos() {
        let arc = quarter();
        let t = arc.closest_pos(&Point2::new(10.0, 10.0));
        assert!((t - 0.5).abs() < TOL);
        assert_eq!(arc.closest_pos(&Point2::new(3.0, -8.0)), 0.0);
        assert_eq!(arc.closest_pos(&Point2::new(-8.0, 3.0)), 1.0);
    }

    #[test]
    fn test_serde_uses_three_points() {
        let arc = quarter();
        let json = serde_json::to_string(&arc).unwrap();
        assert!(json.contains("through"));
        assert!(!json.contains("geometry"));

        let back: Arc = serde_json::from_str(&json).unwrap();
        assert!((back.radius() - 5.0).abs() < TOL);
    }

    fn circle() -> Arc {
        Arc::from_center(Point2::new(1.0, 2.0), 5.0, 0.0, TAU).unwrap()
    }

    #[test]
    fn test_clockwise_full_circle() {
        let reversed = circle().reverse();
        assert_eq!(reversed.sweep(), Sweep::Clockwise);

        let decoded = Arc::with_sweep(
            reversed.origin(),
            reversed.through(),
            reversed.end(),
            reversed.sweep(),
        )
        .unwrap();
        assert!((decoded.geometry().sweep() + TAU).abs() < TOL);
        assert!((decoded.center() - Point2::new(1.0, 2.0)).norm() < TOL);

        // 方向参数不影响非整圆
        let cw = quarter().reverse();
        let decoded = Arc::with_sweep(cw.origin(), cw.through(), cw.end(), Sweep::CounterClockwise).unwrap();
        assert_eq!(decoded.sweep(), Sweep::Clockwise);
    }

    #[test]
    fn test_mirrored_full_circle_is_clockwise() {
        let mirrored = circle().transform(&Transform2D::scale(1.0, -1.0)).unwrap();
        assert_eq!(mirrored.sweep(), Sweep::Clockwise);
        assert!((mirrored.geometry().sweep() + TAU).abs() < TOL);
        assert!((mirrored.center() - Point2::new(1.0, -2.0)).norm() < TOL);

        // 旋转保持方向
        let rotated = circle().transform(&Transform2D::rotation(1.0)).unwrap();
        assert_eq!(rotated.sweep(), Sweep::CounterClockwise);
    }

    #[test]
    fn test_serde_keeps_full_circle_direction() {
        let reversed = circle().reverse();
        let json = serde_json::to_string(&reversed).unwrap();
        let back: Arc = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sweep(), Sweep::Clockwise);

        // 没有 sweep 字段时按逆时针处理
        let json = r#"{"origin":[6.0,2.0],"through":[-4.0,2.0],"end":[6.0,2.0]}"#;
        let back: Arc = serde_json::from_str(json).unwrap();
        assert_eq!(back.sweep(), Sweep::CounterClockwise);
    }
}
