//! 識別結果の表
//!
//! ライブ結果とサンプルの両方で使う

use leptos::prelude::*;
use object_identifier_common::IdentificationResult;

#[component]
pub fn ResultTable(result: IdentificationResult) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="result-table">
                <tbody>
                    {result
                        .rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td class="result-label">{row.label}</td>
                                    <td class="result-value">{row.value}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
