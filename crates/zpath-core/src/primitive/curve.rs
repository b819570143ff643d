//! 三次贝塞尔曲线图元
//!
//! # 偏移算法
//!
//! 贝塞尔曲线的精确偏移一般无法用一条三次曲线表示，这里构造一条近似曲线：
//!
//! 1. 新曲线的两个端点是原端点沿端点法向精确偏移的结果；
//! 2. 新控制点留在原切线方向上：`p1 = p0 + k0·v0`，`p2 = p3 + k3·v3`；
//! 3. 新曲线在 `t = m`（固定为 0.5）时必须经过原曲线在 `m` 处偏移后的点 `pm`。
//!
//! 代入贝塞尔公式得到关于 `k0`、`k3` 的 2x2 线性方程组：
//!
//! ```text
//! (1-m)·k0·v0 + m·k3·v3 = pk
//! pk = (pm - (1-m)²(1+2m)·p0 - m²(3-2m)·p3) / (3m(1-m))
//! ```
//!
//! 当 `v0` 与 `v3` 平行（叉积精确为零）时方程组没有唯一解，改用备用构造：
//!
//! ```text
//! p1 = p0 + v0 + 4/3·vm
//! p2 = p3 - v3 + 4/3·vm
//! ```
//!
//! 其中 `vm` 是构造 `pm` 时使用的长度为偏移距离的法向量。

use crate::error::Result;
use crate::extents::Extents;
use crate::math::{lerp, Point2, Tolerance, Vector2, VectorExt, EPSILON};
use crate::primitive::line::Line;
use crate::transform::Transform2D;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// 偏移时新曲线被强制经过的参数位置
const OFFSET_TIME: f64 = 0.5;

/// 最近点搜索的初始采样数
const CLOSEST_SAMPLES: usize = 32;

/// 最近点黄金分割搜索的迭代次数
const CLOSEST_ITERATIONS: usize = 48;

/// 三次贝塞尔曲线
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub origin: Point2,
    pub control1: Point2,
    pub control2: Point2,
    pub end: Point2,
}

impl Curve {
    pub fn new(origin: Point2, control1: Point2, control2: Point2, end: Point2) -> Self {
        Self {
            origin,
            control1,
            control2,
            end,
        }
    }

    /// 伯恩斯坦基求值，`t` 不是弧长参数，0.5 不一定是几何中点
    pub fn pair_at(&self, t: f64) -> Point2 {
        let t_2 = t * t;
        let t_3 = t_2 * t;
        let t1 = 1.0 - t;
        let t1_2 = t1 * t1;
        let t1_3 = t1_2 * t1;

        let (p0, p1, p2, p3) = (self.origin, self.control1, self.control2, self.end);
        Point2::new(
            t1_3 * p0.x + 3.0 * t1_2 * t * p1.x + 3.0 * t1 * t_2 * p2.x + t_3 * p3.x,
            t1_3 * p0.y + 3.0 * t1_2 * t * p1.y + 3.0 * t1 * t_2 * p2.y + t_3 * p3.y,
        )
    }

    /// 一阶导数，未归一化
    pub fn vector_at(&self, t: f64) -> Vector2 {
        let p21 = self.control1 - self.origin;
        let p32 = self.control2 - self.control1;
        let p43 = self.end - self.control2;

        let t1 = 1.0 - t;
        p21 * (3.0 * t1 * t1) + p32 * (6.0 * t1 * t) + p43 * (3.0 * t * t)
    }

    /// 控制多边形的包围盒
    ///
    /// 这是一个保守的上界，会包含一些空白区域：精确的包围盒需要求导数的根。
    pub fn extents(&self) -> Extents {
        Extents::from_points(&[self.origin, self.control1, self.control2, self.end])
    }

    pub fn length(&self) -> f64 {
        self.length_with(&Tolerance::default())
    }

    /// 离散为折线后累加弦长，随 `flatness` 减小收敛
    pub fn length_with(&self, tolerance: &Tolerance) -> f64 {
        self.flatten(tolerance).iter().map(Line::length).sum()
    }

    /// 在 `t` 处用 de Casteljau 算法分割
    pub fn split(&self, t: f64) -> (Curve, Curve) {
        let p01 = lerp(&self.origin, &self.control1, t);
        let p12 = lerp(&self.control1, &self.control2, t);
        let p23 = lerp(&self.control2, &self.end, t);
        let p012 = lerp(&p01, &p12, t);
        let p123 = lerp(&p12, &p23, t);
        let mid = lerp(&p012, &p123, t);

        (
            Curve::new(self.origin, p01, p012, mid),
            Curve::new(mid, p123, p23, self.end),
        )
    }

    /// 控制点到弦的距离都不超过 `flatness`，且投影落在弦内
    fn is_flat(&self, flatness: f64) -> bool {
        let chord = self.end - self.origin;
        let len2 = chord.norm_squared();

        if len2 <= EPSILON * EPSILON {
            return (self.control1 - self.origin).norm() <= flatness
                && (self.control2 - self.origin).norm() <= flatness;
        }

        let len = len2.sqrt();
        [self.control1, self.control2].iter().all(|c| {
            let v = c - self.origin;
            let distance = chord.perp(&v).abs() / len;
            let projection = chord.dot(&v) / len2;
            distance <= flatness && (0.0..=1.0).contains(&projection)
        })
    }

    fn chord(&self) -> Line {
        Line::new(self.origin, self.end)
    }

    /// 递归细分为线段，深度受 `max_depth` 限制
    pub fn flatten(&self, tolerance: &Tolerance) -> Vec<Line> {
        let mut lines = Vec::new();
        self.flatten_into(tolerance, 0, &|_: &Curve| true, &mut lines);
        lines
    }

    /// 只细分控制多边形与 `bounds` 相交的部分，其余部分直接丢弃
    ///
    /// 返回的线段一般不连续。
    pub fn flatten_within(&self, bounds: &Extents, tolerance: &Tolerance) -> Vec<Line> {
        let mut lines = Vec::new();
        self.flatten_into(
            tolerance,
            0,
            &|piece: &Curve| piece.extents().overlaps(bounds, EPSILON),
            &mut lines,
        );
        lines
    }

    fn flatten_into(
        &self,
        tolerance: &Tolerance,
        depth: u32,
        keep: &impl Fn(&Curve) -> bool,
        lines: &mut Vec<Line>,
    ) {
        if !keep(self) {
            return;
        }
        if depth >= tolerance.max_depth || self.is_flat(tolerance.flatness) {
            lines.push(self.chord());
            return;
        }

        let (first, second) = self.split(0.5);
        first.flatten_into(tolerance, depth + 1, keep, lines);
        second.flatten_into(tolerance, depth + 1, keep, lines);
    }

    /// 两条曲线的交点
    ///
    /// 同时细分两条曲线，控制多边形的包围盒不相交的子曲线对直接剪掉，
    /// 两边都平直后用弦求交。
    pub fn intersection(&self, other: &Curve, tolerance: &Tolerance) -> Vec<Point2> {
        let mut points = Vec::new();
        clip_curves(self, other, tolerance, (0, 0), &mut |a: &Line, b: &Line| {
            points.extend(a.intersection(b));
        });
        points
    }

    /// 近似偏移曲线，见模块文档
    pub fn offset(&self, distance: f64) -> Result<Curve> {
        let m = OFFSET_TIME;
        let mm = 1.0 - m;

        let v0 = self.control1 - self.origin;
        let v3 = self.end - self.control2;

        // pm = C(m) 沿法向偏移 distance
        let vm = self.vector_at(m).set_length(distance)?.normal();
        let pm = self.pair_at(m) + vm;

        // 端点的精确偏移
        let p0 = self.origin + v0.set_length(distance)?.normal();
        let p3 = self.end + v3.set_length(distance)?.normal();

        let (p1, p2) = if v0.x * v3.y == v3.x * v0.y {
            trace!("parallel end tangents, using the alternative offset construction");
            (
                p0 + v0 + vm * (4.0 / 3.0),
                p3 - v3 + vm * (4.0 / 3.0),
            )
        } else {
            let pk = (pm.coords
                - p0.coords * (mm * mm * (1.0 + m + m))
                - p3.coords * (m * m * (1.0 + mm + mm)))
                / (3.0 * m * mm);

            let (k0, k3) = if v0.x != 0.0 {
                let k3 = (pk.y - pk.x * v0.y / v0.x) / (m * (v3.y - v3.x * v0.y / v0.x));
                let k0 = (pk.x - m * k3 * v3.x) / (mm * v0.x);
                (k0, k3)
            } else {
                let k0 = (pk.y - pk.x * v3.y / v3.x) / (mm * (v0.y - v0.x * v3.y / v3.x));
                let k3 = (pk.x - mm * k0 * v0.x) / (m * v3.x);
                (k0, k3)
            };

            (p0 + v0 * k0, p3 + v3 * k3)
        };

        Ok(Curve::new(p0, p1, p2, p3))
    }

    /// 控制点镜像排列
    pub fn reverse(&self) -> Curve {
        Curve::new(self.end, self.control2, self.control1, self.origin)
    }

    pub fn transform(&self, transform: &Transform2D) -> Curve {
        Curve::new(
            transform.transform_point(&self.origin),
            transform.transform_point(&self.control1),
            transform.transform_point(&self.control2),
            transform.transform_point(&self.end),
        )
    }

    /// 最近点参数：均匀采样后在相邻区间内用黄金分割细化
    pub fn closest_pos(&self, point: &Point2) -> f64 {
        let distance = |t: f64| (self.pair_at(t) - point).norm_squared();

        let n = CLOSEST_SAMPLES as f64;
        let best = (0..=CLOSEST_SAMPLES)
            .map(|i| i as f64 / n)
            .min_by(|a, b| distance(*a).total_cmp(&distance(*b)))
            .unwrap_or(0.0);

        let ratio = (5.0_f64.sqrt() - 1.0) / 2.0;
        let mut lo = (best - 1.0 / n).max(0.0);
        let mut hi = (best + 1.0 / n).min(1.0);
        for _ in 0..CLOSEST_ITERATIONS {
            let a = hi - ratio * (hi - lo);
            let b = lo + ratio * (hi - lo);
            if distance(a) < distance(b) {
                hi = b;
            } else {
                lo = a;
            }
        }

        let refined = (lo + hi) / 2.0;
        if distance(refined) <= distance(best) {
            refined
        } else {
            best
        }
    }
}

/// 递归剪裁曲线对，`leaf` 收到两边都已平直的弦
fn clip_curves(
    a: &Curve,
    b: &Curve,
    tolerance: &Tolerance,
    (depth_a, depth_b): (u32, u32),
    leaf: &mut impl FnMut(&Line, &Line),
) {
    if !a.extents().overlaps(&b.extents(), EPSILON) {
        return;
    }

    let a_flat = depth_a >= tolerance.max_depth || a.is_flat(tolerance.flatness);
    let b_flat = depth_b >= tolerance.max_depth || b.is_flat(tolerance.flatness);
    match (a_flat, b_flat) {
        (true, true) => leaf(&a.chord(), &b.chord()),
        (false, true) => {
            let (a1, a2) = a.split(0.5);
            clip_curves(&a1, b, tolerance, (depth_a + 1, depth_b), leaf);
            clip_curves(&a2, b, tolerance, (depth_a + 1, depth_b), leaf);
        }
        (true, false) => {
            let (b1, b2) = b.split(0.5);
            clip_curves(a, &b1, tolerance, (depth_a, depth_b + 1), leaf);
            clip_curves(a, &b2, tolerance, (depth_a, depth_b + 1), leaf);
        }
        (false, false) => {
            let (a1, a2) = a.split(0.5);
            let (b1, b2) = b.split(0.5);
            let depths = (depth_a + 1, depth_b + 1);
            for a_half in [&a1, &a2] {
                for b_half in [&b1, &b2] {
                    clip_curves(a_half, b_half, tolerance, depths, leaf);
                }
            }
        }
    }
}
