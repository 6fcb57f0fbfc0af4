//! 模式驱动表单模块
//!
//! `schema` 定义字段描述符（纯领域模型），`renderer` 负责把
//! 模式 + 草稿渲染成控件。

pub mod renderer;
pub mod schema;
