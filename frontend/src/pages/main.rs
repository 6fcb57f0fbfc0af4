//! 主页 (`/home`)
//!
//! 视图分发约定的完整形态：从查询串解析选择器，精确匹配渲染
//! 唯一一个子视图；"当前选中记录"是页面级信号，随页面卸载一起
//! 丢弃，不进 URL 也不进全局状态。

use leptos::prelude::*;
use tradegate_shared::ApplicationUser;

use crate::components::home_content::HomeContent;
use crate::components::layout::Layout;
use crate::components::view_tabs::ViewTabs;
use crate::view::{MainView, ViewSelector};
use crate::views::all_users::AllUserView;
use crate::views::user_actions::UserActionsView;
use crate::web::router::use_router;

#[component]
pub fn MainPage() -> impl IntoView {
    let router = use_router();
    let search = router.search();
    let (selected_user, set_selected_user) = signal(Option::<ApplicationUser>::None);

    // navigate(view, record)：先暂存记录再切视图；None 表示新建模式
    let open_editor = Callback::new(move |user: Option<ApplicationUser>| {
        set_selected_user.set(user);
        router.set_view(MainView::UserActions.as_query_value());
    });
    let done_editing = Callback::new(move |_| {
        set_selected_user.set(None);
        router.set_view(MainView::AllUsers.as_query_value());
    });

    view! {
        <Layout>
            <ViewTabs tabs=vec![
                ("Home", MainView::Home.as_query_value()),
                ("All Users", MainView::AllUsers.as_query_value()),
                ("User Actions", MainView::UserActions.as_query_value()),
            ] />
            {move || match MainView::from_search(&search.get()) {
                MainView::Home => view! { <HomeContent /> }.into_any(),
                MainView::AllUsers => {
                    view! { <AllUserView on_open_editor=open_editor /> }.into_any()
                }
                MainView::UserActions => {
                    view! { <UserActionsView user=selected_user on_done=done_editing /> }
                        .into_any()
                }
            }}
        </Layout>
    }
}
