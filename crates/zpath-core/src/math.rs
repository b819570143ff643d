//! 基础数学类型
//!
//! 点与向量直接使用 nalgebra 的类型：
//! - 作为位置时使用 [`Point2`]
//! - 作为方向时使用 [`Vector2`]
//!
//! [`VectorExt`] 补充了路径运算常用的向量操作（法向、定长、角度），
//! 二维叉积直接使用 nalgebra 的 `perp`。

use crate::error::{GeometryError, Result};

/// 二维点
pub type Point2 = nalgebra::Point2<f64>;

/// 二维向量
pub type Vector2 = nalgebra::Vector2<f64>;

/// 通用浮点容差
pub const EPSILON: f64 = 1e-9;

/// 向量扩展操作
pub trait VectorExt: Sized {
    /// 单位向量，零长度时返回 [`GeometryError::DegenerateInput`]
    fn unit(&self) -> Result<Self>;

    /// 保持方向，缩放到指定长度（长度可以为负，此时方向反转）
    fn set_length(&self, length: f64) -> Result<Self>;

    /// 逆时针旋转90°：`(x, y) → (-y, x)`
    fn normal(&self) -> Self;

    /// 向量角度，范围 `(-π, π]`
    fn polar_angle(&self) -> f64;
}

impl VectorExt for Vector2 {
    fn unit(&self) -> Result<Self> {
        let length = self.norm();
        if length == 0.0 {
            return Err(GeometryError::DegenerateInput(
                "cannot normalize a zero-length vector".to_string(),
            ));
        }
        Ok(self / length)
    }

    fn set_length(&self, length: f64) -> Result<Self> {
        Ok(self.unit()? * length)
    }

    fn normal(&self) -> Self {
        Vector2::new(-self.y, self.x)
    }

    fn polar_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// 从角度构造单位向量
pub fn unit_from_angle(angle: f64) -> Vector2 {
    Vector2::new(angle.cos(), angle.sin())
}

/// 两点线性插值，`t = 0` 与 `t = 1` 时精确返回端点
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    let s = 1.0 - t;
    Point2::new(s * a.x + t * b.x, s * a.y + t * b.y)
}

/// 两点是否在容差内重合
pub fn points_coincide(a: &Point2, b: &Point2, tolerance: f64) -> bool {
    (a - b).norm() <= tolerance
}

/// 曲线离散化参数
///
/// 曲线长度和曲线求交都通过递归细分（de Casteljau）把曲线离散为折线，
/// 该结构控制细分的精度和终止条件。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// 控制多边形与弦之间允许的最大距离
    pub flatness: f64,

    /// 最大递归深度
    pub max_depth: u32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            flatness: 1e-4,
            max_depth: 16,
        }
    }
}
