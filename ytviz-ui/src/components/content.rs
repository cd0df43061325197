//! Content Component
//!
//! Main area of the dashboard: whatever the render selector picks for the
//! current fetch state.

use leptos::*;
use ytviz::render::{render, View, EMPTY_MESSAGE};

use super::{DataTable, Loading, SentimentPieChart, TopicListCard, WordFrequencyChart};
use crate::state::DashboardState;

#[component]
pub fn Content() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let current = create_memo(move |_| state.fetch.with(render));

    move || match current.get() {
        View::Loading => view! { <Loading /> }.into_view(),
        View::Empty => view! {
            <div class="flex items-center justify-center h-full min-h-[50vh]">
                <p class="text-xl text-gray-400">{EMPTY_MESSAGE}</p>
            </div>
        }
        .into_view(),
        View::Blank => ().into_view(),
        View::WordFrequency(chart) => view! { <WordFrequencyChart chart=chart /> }.into_view(),
        View::SentimentDistribution(chart) => {
            view! { <SentimentPieChart chart=chart /> }.into_view()
        }
        View::NamedEntities(table) | View::AverageSentiment(table) => {
            view! { <DataTable table=table /> }.into_view()
        }
        View::TopicModeling(list) => view! { <TopicListCard list=list /> }.into_view(),
    }
}
