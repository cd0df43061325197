//! API Documentation Page
//!
//! Lists every registered endpoint and lets the user point the dashboard
//! at another analytics service.

use leptos::*;
use ytviz::dataset::DatasetKey;

use crate::api;
use crate::state::DashboardState;

/// API documentation page component
#[component]
pub fn ApiDocs() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"API Documentation"</h1>
                <p class="text-gray-400 mt-1">"Endpoints the dashboard reads from"</p>
            </div>

            <EndpointTable />
            <ApiSettings />
        </div>
    }
}

#[component]
fn EndpointTable() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Endpoints"</h2>
            <table class="w-full text-sm">
                <thead>
                    <tr class="border-b border-gray-700 text-gray-400">
                        <th class="text-left font-medium py-2 px-3">"Dataset"</th>
                        <th class="text-left font-medium py-2 px-3">"Method"</th>
                        <th class="text-left font-medium py-2 px-3">"Address"</th>
                        <th class="text-left font-medium py-2 px-3">"Response"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state.registry.with(|registry| {
                            registry
                                .iter()
                                .map(|(key, address)| view! {
                                    <tr class="border-b border-gray-700 last:border-0">
                                        <td class="py-2 px-3">{key.as_str()}</td>
                                        <td class="py-2 px-3 font-mono">"GET"</td>
                                        <td class="py-2 px-3 font-mono">{address.to_string()}</td>
                                        <td class="py-2 px-3 text-gray-400">{response_shape(key)}</td>
                                    </tr>
                                })
                                .collect_view()
                        })
                    }}
                </tbody>
            </table>
        </section>
    }
}

/// JSON shape each endpoint returns
fn response_shape(key: DatasetKey) -> &'static str {
    match key {
        DatasetKey::WordFrequency | DatasetKey::WordCloud => "[[word, count], ...]",
        DatasetKey::SentimentDistribution => "{label: proportion, ...}",
        DatasetKey::NamedEntities => "[[[text, label], count], ...]",
        DatasetKey::AverageSentiment => "{neg, neu, pos, compound}",
        DatasetKey::TopicModeling => "[\"Topic N: words\", ...]",
        DatasetKey::TimeSeries | DatasetKey::RawData | DatasetKey::SummaryStatistics => {
            "not shown on the dashboard"
        }
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| state.set_api_base(&api_url.get_untracked());

    let reset_url = move |_| {
        state.reset_api_base();
        set_api_url.set(api::get_api_base());
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <label class="block text-sm text-gray-400 mb-2">"Analytics service URL"</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=save_url
                    class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
                <button
                    on:click=reset_url
                    class="px-4 py-3 bg-gray-600 hover:bg-gray-500
                           rounded-lg font-medium transition-colors"
                >
                    "Reset"
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_endpoint_documented() {
        for key in DatasetKey::ALL {
            assert!(!response_shape(key).is_empty());
        }
        assert_eq!(
            response_shape(DatasetKey::WordCloud),
            response_shape(DatasetKey::WordFrequency)
        );
    }
}
