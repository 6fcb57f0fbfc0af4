//! 中台页面 (`/middle-office`)

use leptos::prelude::*;

use crate::components::home_content::HomeContent;
use crate::components::layout::Layout;
use crate::components::view_tabs::ViewTabs;
use crate::view::{MiddleOfficeView, ViewSelector};
use crate::views::static_data_actions::StaticDataActionsView;
use crate::views::trade_actions::TradeActionsView;
use crate::web::router::use_router;

#[component]
pub fn MiddleOfficePage() -> impl IntoView {
    let search = use_router().search();

    view! {
        <Layout>
            <ViewTabs tabs=vec![
                ("Home", MiddleOfficeView::Home.as_query_value()),
                ("Actions", MiddleOfficeView::Actions.as_query_value()),
                ("Static Data", MiddleOfficeView::StaticData.as_query_value()),
            ] />
            {move || match MiddleOfficeView::from_search(&search.get()) {
                MiddleOfficeView::Home => view! { <HomeContent /> }.into_any(),
                MiddleOfficeView::Actions => view! { <TradeActionsView /> }.into_any(),
                MiddleOfficeView::StaticData => view! { <StaticDataActionsView /> }.into_any(),
            }}
        </Layout>
    }
}
