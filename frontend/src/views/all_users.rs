//! 用户列表视图
//!
//! 从后端拉取用户列表展示；Edit 把选中记录交给页面的
//! 导航回调，由页面切到编辑视图。

use leptos::prelude::*;
use leptos::task::spawn_local;
use tradegate_shared::ApplicationUser;

use crate::api::use_api;

#[component]
pub fn AllUserView(
    #[prop(into)] on_open_editor: Callback<Option<ApplicationUser>>,
) -> impl IntoView {
    let api = use_api();

    let (users, set_users) = signal(Vec::<ApplicationUser>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    {
        let api = api.clone();
        spawn_local(async move {
            match api.get_users().await {
                Ok(data) => set_users.set(data),
                Err(message) => {
                    set_error_msg.set(Some(format!("Failed to load users: {message}")));
                }
            }
            set_loading.set(false);
        });
    }

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex flex-row justify-between items-center">
                    <h2 class="card-title">"All Users"</h2>
                    <button
                        class="btn btn-primary btn-sm"
                        on:click=move |_| on_open_editor.run(None)
                    >
                        "New User"
                    </button>
                </div>

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
                                <th>"User Id"</th>
                                <th>"First Name"</th>
                                <th>"Last Name"</th>
                                <th>"Profile"</th>
                                <th>"Active"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || users.get()
                                key=|user| user.login_id.clone()
                                let:user
                            >
                                {
                                    let row = user.clone();
                                    view! {
                                        <tr>
                                            <td>{user.login_id.clone()}</td>
                                            <td>{user.first_name.clone()}</td>
                                            <td>{user.last_name.clone()}</td>
                                            <td>{user.user_profile.clone().unwrap_or_default()}</td>
                                            <td>{if user.active { "Yes" } else { "No" }}</td>
                                            <td>
                                                <button
                                                    class="btn btn-ghost btn-xs"
                                                    on:click=move |_| on_open_editor.run(Some(row.clone()))
                                                >
                                                    "Edit"
                                                </button>
                                            </td>
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
