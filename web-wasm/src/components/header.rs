//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <span class="brand">"IO"</span>
            <nav>
                <ul class="nav-links">
                    <li><a href="#">"About"</a></li>
                    <li><a href="#">"Contact"</a></li>
                </ul>
            </nav>
        </header>
    }
}
