//! 管理页面 (`/admin`)
//!
//! 与主页共用用户视图，只是选择器取值不同（user-all / user-actions）。

use leptos::prelude::*;
use tradegate_shared::ApplicationUser;

use crate::components::home_content::HomeContent;
use crate::components::layout::Layout;
use crate::components::view_tabs::ViewTabs;
use crate::view::{AdminView, ViewSelector};
use crate::views::all_users::AllUserView;
use crate::views::user_actions::UserActionsView;
use crate::web::router::use_router;

#[component]
pub fn AdminPage() -> impl IntoView {
    let router = use_router();
    let search = router.search();
    let (selected_user, set_selected_user) = signal(Option::<ApplicationUser>::None);

    let open_editor = Callback::new(move |user: Option<ApplicationUser>| {
        set_selected_user.set(user);
        router.set_view(AdminView::UserActions.as_query_value());
    });
    let done_editing = Callback::new(move |_| {
        set_selected_user.set(None);
        router.set_view(AdminView::UserAll.as_query_value());
    });

    view! {
        <Layout>
            <ViewTabs tabs=vec![
                ("Home", AdminView::Home.as_query_value()),
                ("User Actions", AdminView::UserActions.as_query_value()),
                ("All Users", AdminView::UserAll.as_query_value()),
            ] />
            {move || match AdminView::from_search(&search.get()) {
                AdminView::Home => view! { <HomeContent /> }.into_any(),
                AdminView::UserActions => {
                    view! { <UserActionsView user=selected_user on_done=done_editing /> }
                        .into_any()
                }
                AdminView::UserAll => {
                    view! { <AllUserView on_open_editor=open_editor /> }.into_any()
                }
            }}
        </Layout>
    }
}
