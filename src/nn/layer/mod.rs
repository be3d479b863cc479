/*
 * @Date         : 2026-10-19
 * @Description  : Layer 模块 - 组合张量运算构建常见网络结构
 * @LastEditTime : 2026-10-19
 */

mod linear;

pub use linear::Linear;
