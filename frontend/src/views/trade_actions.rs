//! 交易操作视图

use leptos::prelude::*;

const ACTIONS: [(&str, &str); 4] = [
    ("New Trade", "Capture a new trade for your book."),
    ("Amend", "Amend an existing trade and bump its version."),
    ("Terminate", "Terminate a live trade before maturity."),
    ("Cancel", "Cancel a trade entered in error."),
];

#[component]
pub fn TradeActionsView() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {ACTIONS
                .into_iter()
                .map(|(title, description)| {
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{title}</h2>
                                <p class="text-base-content/70">{description}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
