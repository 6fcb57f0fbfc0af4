//! 字段模式模块 - 领域模型
//!
//! 用一组有序的字段描述符声明式地定义一张编辑表单：
//! 控件种类是封闭枚举（编译期穷尽检查），可见性规则针对
//! 最新草稿逐次求值，选项来源指向静态数据缓存的类别。
//! 本模块不依赖 DOM，渲染由 `form::renderer` 负责。

use crate::static_data::StaticCategory;

/// 字段值：单字段变更事件携带的载荷
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// 字符串视图；布尔值转成 `"true"`/`"false"`
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Flag(flag) => flag.to_string(),
        }
    }

    /// 布尔视图；文本值一律视为 false
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(_) => false,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Flag(flag) => flag.to_string(),
        }
    }
}

/// 控件种类（封闭枚举，每个变体一种渲染策略）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 单行文本输入
    Text,
    /// 单行文本输入，显示为掩码
    Secret,
    /// 复选框
    Boolean,
    /// 下拉框，选项来自指定参考数据类别，每次渲染时重新解析
    Choice(StaticCategory),
}

/// 字段描述符
///
/// 模式是 `Vec<FieldDescriptor<R>>`，声明顺序即渲染顺序。
pub struct FieldDescriptor<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    hide_if: Option<fn(&R) -> bool>,
}

impl<R> FieldDescriptor<R> {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            hide_if: None,
        }
    }

    /// 附加可见性规则：谓词为真时隐藏该字段
    pub fn hide_when(mut self, predicate: fn(&R) -> bool) -> Self {
        self.hide_if = Some(predicate);
        self
    }

    /// 针对当前草稿求值可见性；无规则即恒可见
    pub fn is_visible(&self, record: &R) -> bool {
        !self.hide_if.is_some_and(|hidden| hidden(record))
    }
}

// 手写 Copy/Clone：字段全是 Copy（fn 指针不要求 R: Clone）
impl<R> Clone for FieldDescriptor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldDescriptor<R> {}

/// 过滤出对当前草稿可见的字段，保持声明顺序
pub fn visible_fields<R>(schema: &[FieldDescriptor<R>], record: &R) -> Vec<FieldDescriptor<R>> {
    schema
        .iter()
        .filter(|field| field.is_visible(record))
        .copied()
        .collect()
}

/// 可被模式驱动表单编辑的记录
///
/// 变更事件按键合并：`set_field` 只改一个字段，其余字段不动；
/// 未知键是无操作而不是错误。
pub trait FormRecord {
    /// 读取字段当前值；缺失值规范化为空字符串/false
    fn field(&self, key: &str) -> FieldValue;
    /// 将单个字段合并进草稿
    fn set_field(&mut self, key: &str, value: FieldValue);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct TestRecord {
        id: Option<i64>,
        login_id: String,
        password: String,
        active: bool,
    }

    impl FormRecord for TestRecord {
        fn field(&self, key: &str) -> FieldValue {
            match key {
                "loginId" => FieldValue::text(&self.login_id),
                "password" => FieldValue::text(&self.password),
                "active" => FieldValue::Flag(self.active),
                _ => FieldValue::Text(String::new()),
            }
        }

        fn set_field(&mut self, key: &str, value: FieldValue) {
            match key {
                "loginId" => self.login_id = value.into_text(),
                "password" => self.password = value.into_text(),
                "active" => self.active = value.as_flag(),
                _ => {}
            }
        }
    }

    fn schema() -> Vec<FieldDescriptor<TestRecord>> {
        vec![
            FieldDescriptor::new("loginId", "User Id", FieldKind::Text),
            FieldDescriptor::new("password", "Password", FieldKind::Secret)
                .hide_when(|record: &TestRecord| record.id.is_some()),
            FieldDescriptor::new("active", "Active", FieldKind::Boolean),
        ]
    }

    #[test]
    fn hide_if_tracks_the_draft() {
        let schema = schema();

        let new_record = TestRecord::default();
        let visible = visible_fields(&schema, &new_record);
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().any(|field| field.key == "password"));

        let persisted = TestRecord {
            id: Some(7),
            ..TestRecord::default()
        };
        let visible = visible_fields(&schema, &persisted);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|field| field.key != "password"));
    }

    #[test]
    fn set_field_merges_exactly_one_field() {
        let initial = TestRecord {
            id: Some(1),
            login_id: "old".to_string(),
            password: "secret".to_string(),
            active: true,
        };
        let mut edited = initial.clone();
        edited.set_field("loginId", FieldValue::text("abc"));

        assert_eq!(edited.login_id, "abc");
        assert_eq!(edited.id, initial.id);
        assert_eq!(edited.password, initial.password);
        assert_eq!(edited.active, initial.active);
    }

    #[test]
    fn unknown_keys_are_a_no_op() {
        let mut record = TestRecord::default();
        let before = record.clone();
        record.set_field("doesNotExist", FieldValue::text("x"));
        assert_eq!(record, before);
    }

    #[test]
    fn value_coercions() {
        assert_eq!(FieldValue::text("abc").as_text(), "abc");
        assert_eq!(FieldValue::Flag(true).as_text(), "true");
        assert!(!FieldValue::text("true").as_flag());
        assert!(FieldValue::Flag(true).as_flag());
        // 缺失值由记录实现规范化为空字符串
        assert_eq!(TestRecord::default().field("missing").as_text(), "");
    }

    #[test]
    fn fields_without_rules_are_always_visible() {
        let field: FieldDescriptor<TestRecord> =
            FieldDescriptor::new("loginId", "User Id", FieldKind::Text);
        assert!(field.is_visible(&TestRecord::default()));
    }
}
