use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn SignInPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (login_id, set_login_id) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if login_id.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            match api.authenticate(&login_id.get_untracked(), &password.get_untracked()).await {
                Ok(true) => {
                    // "Remember me" decides durable vs tab-scoped session
                    session::establish(remember.get_untracked());
                    router.navigate(AppRoute::Home);
                }
                Ok(false) => {
                    set_error_msg.set(Some("Invalid login id or password".to_string()));
                }
                Err(message) => {
                    set_error_msg.set(Some(format!("Sign in failed: {message}")));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Trade Platform"</h1>
                    <p class="text-base-content/70">"Sign in to continue"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="login-id">
                                <span class="label-text">"User Id"</span>
                            </label>
                            <input
                                id="login-id"
                                type="text"
                                placeholder="jdoe"
                                on:input=move |ev| set_login_id.set(event_target_value(&ev))
                                prop:value=login_id
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-2">
                            <label class="label cursor-pointer justify-start gap-2">
                                <input
                                    type="checkbox"
                                    class="checkbox checkbox-sm"
                                    prop:checked=remember
                                    on:change=move |ev| set_remember.set(event_target_checked(&ev))
                                />
                                <span class="label-text">"Remember me"</span>
                            </label>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
