//! 轴对齐包围盒
//!
//! [`Extents`] 有三种状态：未定义、单点（尺寸为零）、矩形。
//! 累加操作是单调的：一旦定义，包围盒只会扩大以覆盖新的输入。

use crate::math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    /// 是否已定义
    pub is_defined: bool,
    /// 最小角点
    pub origin: Point2,
    /// 宽和高（非负）
    pub size: Vector2,
}

impl Extents {
    /// 未定义的包围盒
    pub fn new() -> Self {
        Self {
            is_defined: false,
            origin: Point2::origin(),
            size: Vector2::zeros(),
        }
    }

    pub fn from_point(point: Point2) -> Self {
        Self {
            is_defined: true,
            origin: point,
            size: Vector2::zeros(),
        }
    }

    /// 由两个任意对角点构造
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        let mut extents = Self::from_point(a);
        extents.add_point(&b);
        extents
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Self {
        let mut extents = Self::new();
        for point in points {
            extents.add_point(point);
        }
        extents
    }

    /// 扩展以包含一个点
    pub fn add_point(&mut self, point: &Point2) {
        if !self.is_defined {
            *self = Self::from_point(*point);
            return;
        }

        let max = self.max();
        let min_x = self.origin.x.min(point.x);
        let min_y = self.origin.y.min(point.y);
        let max_x = max.x.max(point.x);
        let max_y = max.y.max(point.y);

        self.origin = Point2::new(min_x, min_y);
        self.size = Vector2::new(max_x - min_x, max_y - min_y);
    }

    /// 与另一个包围盒合并
    pub fn add(&mut self, other: &Extents) {
        if !other.is_defined {
            return;
        }
        self.add_point(&other.origin);
        self.add_point(&other.max());
    }

    /// 最大角点
    pub fn max(&self) -> Point2 {
        self.origin + self.size
    }

    pub fn center(&self) -> Point2 {
        self.origin + self.size / 2.0
    }

    /// 已定义且尺寸为零
    pub fn is_point(&self) -> bool {
        self.is_defined && self.size.x == 0.0 && self.size.y == 0.0
    }

    /// 点是否在包围盒内（含边界）
    pub fn contains(&self, point: &Point2) -> bool {
        if !self.is_defined {
            return false;
        }
        let max = self.max();
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }

    /// 两个包围盒在放宽 `margin` 后是否相交，未定义的包围盒与任何包围盒都不相交
    pub fn overlaps(&self, other: &Extents, margin: f64) -> bool {
        if !self.is_defined || !other.is_defined {
            return false;
        }
        let (a_max, b_max) = (self.max(), other.max());
        self.origin.x <= b_max.x + margin
            && other.origin.x <= a_max.x + margin
            && self.origin.y <= b_max.y + margin
            && other.origin.y <= a_max.y + margin
    }
}

impl Default for Extents {
    fn default() -> Self {
        Self::new()
    }
}
