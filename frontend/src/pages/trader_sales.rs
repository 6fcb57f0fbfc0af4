//! 交易台页面 (`/trade`)

use leptos::prelude::*;

use crate::components::home_content::HomeContent;
use crate::components::layout::Layout;
use crate::components::view_tabs::ViewTabs;
use crate::view::{TradeView, ViewSelector};
use crate::views::trade_actions::TradeActionsView;
use crate::views::trade_blotter::TradeBlotterView;
use crate::web::router::use_router;

#[component]
pub fn TraderSalesPage() -> impl IntoView {
    let search = use_router().search();

    view! {
        <Layout>
            <ViewTabs tabs=vec![
                ("Home", TradeView::Home.as_query_value()),
                ("Actions", TradeView::Actions.as_query_value()),
                ("History", TradeView::History.as_query_value()),
            ] />
            {move || match TradeView::from_search(&search.get()) {
                TradeView::Home => view! { <HomeContent /> }.into_any(),
                TradeView::Actions => view! { <TradeActionsView /> }.into_any(),
                TradeView::History => view! { <TradeBlotterView /> }.into_any(),
            }}
        </Layout>
    }
}
