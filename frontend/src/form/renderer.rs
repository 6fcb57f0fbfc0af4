//! 表单渲染模块
//!
//! 把字段模式和草稿信号变成实际控件：每个可见字段一个控件，
//! 变更事件按键合并回草稿。草稿缺失时渲染空（编辑器只有绑定
//! 记录才有意义）。渲染器自己不做任何持久化，save/cancel 都
//! 由调用方提供。

use leptos::prelude::*;

use crate::form::schema::{FieldDescriptor, FieldKind, FieldValue, FormRecord, visible_fields};
use crate::static_data::StaticDataCache;

/// 模式驱动表单
///
/// 可见字段列表在每次渲染时针对最新草稿重新计算，
/// 所以 `hide_when` 规则始终与草稿一致。
#[component]
pub fn SchemaForm<R>(
    schema: Vec<FieldDescriptor<R>>,
    statics: StaticDataCache,
    draft: RwSignal<Option<R>>,
    #[prop(into)] on_save: Callback<R>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView
where
    R: FormRecord + Clone + Send + Sync + 'static,
{
    move || {
        let visible = draft.with(|d| {
            d.as_ref()
                .map(|record| visible_fields(&schema, record))
        });
        // 草稿缺失：渲染空而不是空表单
        let Some(visible) = visible else {
            return ().into_any();
        };

        let rows = visible
            .into_iter()
            .map(|field| field_row(field, statics, draft))
            .collect_view();

        view! {
            <div class="flex flex-col gap-4 w-full max-w-md mx-auto">
                {rows}
                <div class="flex flex-row gap-4 mt-6 justify-center w-full">
                    <button
                        class="btn btn-primary"
                        type="button"
                        on:click=move |_| {
                            if let Some(record) = draft.get_untracked() {
                                on_save.run(record);
                            }
                        }
                    >
                        "Save"
                    </button>
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        }
        .into_any()
    }
}

/// 按控件种类渲染单个字段行
fn field_row<R>(
    field: FieldDescriptor<R>,
    statics: StaticDataCache,
    draft: RwSignal<Option<R>>,
) -> AnyView
where
    R: FormRecord + Clone + Send + Sync + 'static,
{
    let key = field.key;
    // 当前值的字符串视图，缺失规范化为空串
    let current_text = move || {
        draft.with(|d| {
            d.as_ref()
                .map(|record| record.field(key).as_text())
                .unwrap_or_default()
        })
    };

    match field.kind {
        FieldKind::Text | FieldKind::Secret => {
            let input_type = if field.kind == FieldKind::Secret {
                "password"
            } else {
                "text"
            };
            view! {
                <div class="form-control w-full">
                    <label class="label">
                        <span class="label-text">{field.label}</span>
                    </label>
                    <input
                        type=input_type
                        class="input input-bordered w-full"
                        prop:value=current_text
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| {
                                if let Some(record) = d.as_mut() {
                                    record.set_field(key, FieldValue::Text(value));
                                }
                            });
                        }
                    />
                </div>
            }
            .into_any()
        }
        FieldKind::Boolean => {
            let checked = move || {
                draft.with(|d| {
                    d.as_ref()
                        .map(|record| record.field(key).as_flag())
                        .unwrap_or(false)
                })
            };
            view! {
                <div class="form-control w-full flex flex-row items-center justify-center gap-2">
                    <input
                        type="checkbox"
                        class="checkbox"
                        prop:checked=checked
                        on:change=move |ev| {
                            let flag = event_target_checked(&ev);
                            draft.update(|d| {
                                if let Some(record) = d.as_mut() {
                                    record.set_field(key, FieldValue::Flag(flag));
                                }
                            });
                        }
                    />
                    <label class="label">
                        <span class="label-text">{field.label}</span>
                    </label>
                </div>
            }
            .into_any()
        }
        FieldKind::Choice(category) => {
            // 每次渲染重新解析选项；缓存逻辑在 StaticDataCache 内
            let options = move || statics.options(category);
            view! {
                <div class="form-control w-full">
                    <label class="label">
                        <span class="label-text">{field.label}</span>
                    </label>
                    <select
                        class="select select-bordered w-full"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| {
                                if let Some(record) = d.as_mut() {
                                    record.set_field(key, FieldValue::Text(value));
                                }
                            });
                        }
                    >
                        // 当前值不在选项集中时保持未选中
                        <option
                            value=""
                            disabled
                            selected=move || {
                                let current = current_text();
                                current.is_empty()
                                    || !options().iter().any(|option| option.value == current)
                            }
                        >
                            "Select..."
                        </option>
                        {move || {
                            options()
                                .into_iter()
                                .map(|option| {
                                    let value = option.value.clone();
                                    let is_selected = {
                                        let value = option.value.clone();
                                        move || current_text() == value
                                    };
                                    view! {
                                        <option value=value selected=is_selected>
                                            {option.label.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            }
            .into_any()
        }
    }
}
