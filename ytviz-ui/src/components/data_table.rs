//! Table Component

use leptos::*;
use ytviz::render::Table;

use super::Card;

/// Named entities and average sentiment card
#[component]
pub fn DataTable(table: Table) -> impl IntoView {
    let has_headers = !table.headers.is_empty();

    view! {
        <Card title=table.title description=table.description>
            <table class="w-full text-sm">
                {has_headers.then(|| view! {
                    <thead>
                        <tr class="border-b border-gray-700 text-gray-400">
                            {table.headers
                                .iter()
                                .map(|h| view! { <th class="text-left font-medium py-2 px-3">{*h}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                })}
                <tbody>
                    {table.rows
                        .into_iter()
                        .map(|row| view! {
                            <tr class="border-b border-gray-700 last:border-0">
                                {row
                                    .into_iter()
                                    .enumerate()
                                    .map(|(idx, cell)| {
                                        // Key/value tables label their rows in the first column
                                        let class = if !has_headers && idx == 0 {
                                            "py-2 px-3 font-medium"
                                        } else {
                                            "py-2 px-3"
                                        };
                                        view! { <td class=class>{cell}</td> }
                                    })
                                    .collect_view()}
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </Card>
    }
}
