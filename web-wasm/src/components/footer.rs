//! フッターコンポーネント

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>
                "Credits: "
                <a
                    href="https://www.instagram.com/4fiq.x"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "4fiq.x"
                </a>
            </p>
        </footer>
    }
}
