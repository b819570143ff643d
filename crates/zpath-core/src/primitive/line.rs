//! 直线图元

use crate::error::Result;
use crate::extents::Extents;
use crate::math::{lerp, Point2, Vector2, VectorExt, EPSILON};
use crate::transform::Transform2D;
use serde::{Deserialize, Serialize};

/// 线段
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub origin: Point2,
    pub end: Point2,
}

impl Line {
    pub fn new(origin: Point2, end: Point2) -> Self {
        Self { origin, end }
    }

    /// 方向向量（未归一化）
    pub fn direction(&self) -> Vector2 {
        self.end - self.origin
    }

    pub fn pair_at(&self, t: f64) -> Point2 {
        lerp(&self.origin, &self.end, t)
    }

    /// 直线的切向量与 `t` 无关
    pub fn vector_at(&self, _t: f64) -> Vector2 {
        self.direction()
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    pub fn extents(&self) -> Extents {
        Extents::from_corners(self.origin, self.end)
    }

    /// 两端点沿 `normal(unit(end - origin))` 平移 `distance`
    pub fn offset(&self, distance: f64) -> Result<Line> {
        let shift = self.direction().unit()?.normal() * distance;
        Ok(Line::new(self.origin + shift, self.end + shift))
    }

    pub fn reverse(&self) -> Line {
        Line::new(self.end, self.origin)
    }

    pub fn transform(&self, transform: &Transform2D) -> Line {
        Line::new(
            transform.transform_point(&self.origin),
            transform.transform_point(&self.end),
        )
    }

    /// 最近点的参数（投影后截断到 `[0, 1]`）
    pub fn closest_pos(&self, point: &Point2) -> f64 {
        let v = self.direction();
        let len2 = v.norm_squared();
        if len2 == 0.0 {
            return 0.0;
        }
        ((point - self.origin).dot(&v) / len2).clamp(0.0, 1.0)
    }

    /// 线段-线段交点（线段语义，平行时无交点）
    pub fn intersection(&self, other: &Line) -> Option<Point2> {
        let d1 = self.direction();
        let d2 = other.direction();

        let cross = d1.perp(&d2);

        // 平行或退化
        if cross.abs() <= EPSILON * d1.norm() * d2.norm() {
            return None;
        }

        let d = other.origin - self.origin;
        let t1 = d.perp(&d2) / cross;
        let t2 = d.perp(&d1) / cross;

        let range = -EPSILON..=1.0 + EPSILON;
        if range.contains(&t1) && range.contains(&t2) {
            Some(self.pair_at(t1.clamp(0.0, 1.0)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_at_ends_are_exact() {
        let line = Line::new(Point2::new(0.1, 0.2), Point2::new(0.7, -1.3));
        assert_eq!(line.pair_at(0.0), line.origin);
        assert_eq!(line.pair_at(1.0), line.end);

        let mid = line.pair_at(0.5);
        assert!((mid.x - 0.4).abs() < EPSILON);
        assert!((mid.y + 0.55).abs() < EPSILON);
    }

    #[test]
    fn test_vector_is_constant() {
        let line = Line::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_eq!(line.vector_at(0.0), Vector2::new(3.0, 4.0));
        assert_eq!(line.vector_at(0.7), Vector2::new(3.0, 4.0));
        assert!((line.length() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_offset_positive_goes_left() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let offset = line.offset(2.0).unwrap();
        assert_eq!(offset.origin, Point2::new(0.0, 2.0));
        assert_eq!(offset.end, Point2::new(10.0, 2.0));
    }

    #[test]
    fn test_offset_round_trip() {
        let line = Line::new(Point2::new(-3.0, 2.0), Point2::new(7.5, 11.0));
        let back = line.offset(3.25).unwrap().offset(-3.25).unwrap();
        assert!((back.origin - line.origin).norm() < EPSILON);
        assert!((back.end - line.end).norm() < EPSILON);
    }

    #[test]
    fn test_offset_zero_length_is_degenerate() {
        let p = Point2::new(1.0, 1.0);
        assert!(Line::new(p, p).offset(1.0).is_err());
    }

    #[test]
    fn test_intersection() {
        let l1 = Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let l2 = Line::new(Point2::new(5.0, -5.0), Point2::new(5.0, 5.0));
        assert_eq!(l1.intersection(&l2), Some(Point2::new(5.0, 0.0)));

        // 延长线相交但线段不相交
        let l3 = Line::new(Point2::new(12.0, -5.0), Point2::new(12.0, 5.0));
        assert_eq!(l1.intersection(&l3), None);

        // 平行
        let l4 = Line::new(Point2::new(0.0, 1.0), Point2::new(10.0, 1.0));
        assert_eq!(l1.intersection(&l4), None);
    }

    #[test]
    fn test_closest_pos() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        assert!((line.closest_pos(&Point2::new(2.5, 3.0)) - 0.25).abs() < EPSILON);
        assert_eq!(line.closest_pos(&Point2::new(-4.0, 1.0)), 0.0);
        assert_eq!(line.closest_pos(&Point2::new(40.0, 1.0)), 1.0);
    }
}
