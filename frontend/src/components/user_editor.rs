//! 用户编辑器
//!
//! 用户记录的字段模式声明 + `FormRecord` 绑定，套上模式驱动表单。
//! 密码字段只在新建（草稿无 id）时出现；保存按 id 有无决定
//! 创建或更新，持久化完全由这里的回调完成，渲染器不参与。

use leptos::prelude::*;
use leptos::task::spawn_local;
use tradegate_shared::ApplicationUser;

use crate::api::use_api;
use crate::form::renderer::SchemaForm;
use crate::form::schema::{FieldDescriptor, FieldKind, FieldValue, FormRecord};
use crate::static_data::{StaticCategory, use_static_data};

/// 用户编辑表单的字段模式，声明顺序即渲染顺序
pub fn user_fields() -> Vec<FieldDescriptor<ApplicationUser>> {
    vec![
        FieldDescriptor::new("firstName", "First Name", FieldKind::Text),
        FieldDescriptor::new("lastName", "Last Name", FieldKind::Text),
        FieldDescriptor::new("loginId", "User Id", FieldKind::Text),
        // 已持久化的用户不在这里改密码
        FieldDescriptor::new("password", "Password", FieldKind::Secret)
            .hide_when(|user: &ApplicationUser| user.id.is_some()),
        FieldDescriptor::new("active", "Active", FieldKind::Boolean),
        FieldDescriptor::new(
            "userProfile",
            "User Profile",
            FieldKind::Choice(StaticCategory::UserProfiles),
        ),
    ]
}

impl FormRecord for ApplicationUser {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "firstName" => FieldValue::text(&self.first_name),
            "lastName" => FieldValue::text(&self.last_name),
            "loginId" => FieldValue::text(&self.login_id),
            "password" => FieldValue::text(self.password.as_deref().unwrap_or_default()),
            "active" => FieldValue::Flag(self.active),
            "userProfile" => FieldValue::text(self.user_profile.as_deref().unwrap_or_default()),
            _ => FieldValue::Text(String::new()),
        }
    }

    fn set_field(&mut self, key: &str, value: FieldValue) {
        match key {
            "firstName" => self.first_name = value.into_text(),
            "lastName" => self.last_name = value.into_text(),
            "loginId" => self.login_id = value.into_text(),
            "password" => {
                let text = value.into_text();
                self.password = (!text.is_empty()).then_some(text);
            }
            "active" => self.active = value.as_flag(),
            "userProfile" => {
                let text = value.into_text();
                self.user_profile = (!text.is_empty()).then_some(text);
            }
            _ => {}
        }
    }
}

/// 用户编辑器组件
///
/// `user` 为 `None` 时进入新建模式（空草稿），而不是报错。
#[component]
pub fn UserEditor(
    user: Option<ApplicationUser>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let statics = use_static_data();
    statics.ensure_loaded(&api, StaticCategory::UserProfiles);

    let draft = RwSignal::new(Some(user.unwrap_or_default()));
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_save = {
        let api = api.clone();
        Callback::new(move |record: ApplicationUser| {
            let api = api.clone();
            spawn_local(async move {
                match api.save_user(record).await {
                    Ok(_) => on_done.run(()),
                    Err(message) => {
                        set_error_msg.set(Some(format!("Save failed: {message}")));
                    }
                }
            });
        })
    };
    let on_cancel = Callback::new(move |_| on_done.run(()));

    view! {
        <div class="bg-base-100 mt-10 w-full max-w-xl mx-auto rounded-lg shadow-lg p-8 flex flex-col gap-4 items-center">
            <h2 class="text-2xl font-semibold text-center mb-4">"Add or Edit User"</h2>
            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error text-sm py-2 w-full">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>
            <SchemaForm
                schema=user_fields()
                statics=statics
                draft=draft
                on_save=on_save
                on_cancel=on_cancel
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema::visible_fields;

    #[test]
    fn password_hidden_once_the_record_is_persisted() {
        let schema = user_fields();

        let new_user = ApplicationUser::default();
        let visible = visible_fields(&schema, &new_user);
        assert_eq!(visible.len(), 6);
        assert!(visible.iter().any(|field| field.key == "password"));

        let persisted = ApplicationUser {
            id: Some(42),
            ..ApplicationUser::default()
        };
        let visible = visible_fields(&schema, &persisted);
        assert_eq!(visible.len(), 5);
        assert!(visible.iter().all(|field| field.key != "password"));
    }

    #[test]
    fn editing_login_id_leaves_every_other_field_untouched() {
        let initial = ApplicationUser {
            id: Some(1),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            login_id: "jdoe".to_string(),
            active: true,
            user_profile: Some("TRADER".to_string()),
            ..ApplicationUser::default()
        };

        let mut edited = initial.clone();
        edited.set_field("loginId", FieldValue::text("abc"));

        assert_eq!(edited.login_id, "abc");
        assert_eq!(
            ApplicationUser {
                login_id: initial.login_id.clone(),
                ..edited.clone()
            },
            initial
        );
    }

    #[test]
    fn new_user_draft_collects_exactly_the_edited_fields() {
        let mut draft = ApplicationUser::default();
        assert!(draft.id.is_none());

        draft.set_field("loginId", FieldValue::text("jdoe"));
        draft.set_field("password", FieldValue::text("x"));
        draft.set_field("active", FieldValue::Flag(true));

        let expected = ApplicationUser {
            login_id: "jdoe".to_string(),
            password: Some("x".to_string()),
            active: true,
            ..ApplicationUser::default()
        };
        assert_eq!(draft, expected);
    }

    #[test]
    fn clearing_optional_fields_normalizes_to_none() {
        let mut user = ApplicationUser {
            user_profile: Some("SUPPORT".to_string()),
            ..ApplicationUser::default()
        };
        user.set_field("userProfile", FieldValue::text(""));
        assert_eq!(user.user_profile, None);
    }
}
