//! 页面默认视图的欢迎面板

use leptos::prelude::*;

#[component]
pub fn HomeContent() -> impl IntoView {
    view! {
        <div class="hero mt-10">
            <div class="hero-content text-center">
                <div>
                    <h1 class="text-3xl font-bold">"Welcome to the Trade Platform"</h1>
                    <p class="mt-4 text-base-content/70">
                        "Use the navigation above to reach your desk."
                    </p>
                </div>
            </div>
        </div>
    }
}
