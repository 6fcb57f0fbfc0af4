//! 交易流水视图
//!
//! 从后端拉取 Blotter 行并展示，加载失败只显示提示，不影响其他视图。

use leptos::prelude::*;
use leptos::task::spawn_local;
use tradegate_shared::TradeBlotterRow;

use crate::api::use_api;

/// 缺失字段统一显示为短横线
fn dash(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_string())
}

/// 行键取列表位置：所有字段都可能缺失，tradeId 不能当键
fn keyed_rows(trades: Vec<TradeBlotterRow>) -> Vec<(usize, TradeBlotterRow)> {
    trades.into_iter().enumerate().collect()
}

#[component]
pub fn TradeBlotterView() -> impl IntoView {
    let api = use_api();

    let (trades, set_trades) = signal(Vec::<TradeBlotterRow>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    {
        let api = api.clone();
        spawn_local(async move {
            match api.get_trades().await {
                Ok(data) => set_trades.set(data),
                Err(message) => {
                    set_error_msg.set(Some(format!("Failed to load trades: {message}")));
                }
            }
            set_loading.set(false);
        });
    }

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">"Trade Blotter"</h2>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <span class="loading loading-spinner text-primary"></span> }
                >
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>"Trade Id"</th>
                                <th>"Type"</th>
                                <th>"Counterparty"</th>
                                <th>"Book"</th>
                                <th>"Trade Date"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || keyed_rows(trades.get())
                                key=|(index, _)| *index
                                let:entry
                            >
                                {
                                    let trade = entry.1;
                                    view! {
                                        <tr>
                                            <td>{trade.trade_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{dash(trade.trade_type.clone())}</td>
                                            <td>{dash(trade.counterparty_name.clone())}</td>
                                            <td>{dash(trade.book_name.clone())}</td>
                                            <td>{trade.trade_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{dash(trade.trade_status.clone())}</td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_without_trade_ids_still_get_distinct_keys() {
        // Two blotter rows where every field, including tradeId, is absent.
        let trades = vec![TradeBlotterRow::default(), TradeBlotterRow::default()];

        let keyed = keyed_rows(trades);
        assert_eq!(keyed.len(), 2);
        assert_ne!(keyed[0].0, keyed[1].0);
    }

    #[test]
    fn missing_fields_render_as_a_dash() {
        assert_eq!(dash(None), "-");
        assert_eq!(dash(Some(String::new())), "-");
        assert_eq!(dash(Some("FX_BOOK".to_string())), "FX_BOOK");
    }
}
