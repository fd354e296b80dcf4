//! サンプル一覧

use leptos::prelude::*;
use object_identifier_common::EXAMPLES;

use crate::components::result_table::ResultTable;

#[component]
pub fn ExampleGallery() -> impl IntoView {
    view! {
        <section class="examples">
            <h2>"Examples"</h2>
            <div class="example-grid">
                {EXAMPLES
                    .iter()
                    .enumerate()
                    .map(|(index, example)| {
                        view! {
                            <div class="example-card">
                                <img src=example.image_url alt=format!("Example {}", index + 1) />
                                <ResultTable result=example.result() />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
