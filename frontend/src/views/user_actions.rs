//! 用户操作视图
//!
//! 承接页面暂存的"当前选中记录"打开编辑器；没有选中记录时
//! 编辑器以新建模式打开，绝不报错。

use leptos::prelude::*;
use tradegate_shared::ApplicationUser;

use crate::components::user_editor::UserEditor;

#[component]
pub fn UserActionsView(
    user: ReadSignal<Option<ApplicationUser>>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    // 挂载时取一次快照：草稿归编辑器独占，后续选中变化不影响编辑中的副本
    let selected = user.get_untracked();
    view! { <UserEditor user=selected on_done=on_done /> }
}
