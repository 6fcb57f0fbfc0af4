//! 支持页面 (`/support`)

use leptos::prelude::*;

use crate::components::home_content::HomeContent;
use crate::components::layout::Layout;
use crate::components::view_tabs::ViewTabs;
use crate::view::{SupportView, ViewSelector};
use crate::views::trade_actions::TradeActionsView;
use crate::web::router::use_router;

#[component]
pub fn SupportPage() -> impl IntoView {
    let search = use_router().search();

    view! {
        <Layout>
            <ViewTabs tabs=vec![
                ("Home", SupportView::Home.as_query_value()),
                ("Actions", SupportView::Actions.as_query_value()),
            ] />
            {move || match SupportView::from_search(&search.get()) {
                SupportView::Home => view! { <HomeContent /> }.into_any(),
                SupportView::Actions => view! { <TradeActionsView /> }.into_any(),
            }}
        </Layout>
    }
}
