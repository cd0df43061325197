//! Topic List Component

use leptos::*;
use ytviz::render::TopicList;

use super::Card;

#[component]
pub fn TopicListCard(list: TopicList) -> impl IntoView {
    view! {
        <Card title=list.title description=list.description>
            {list.topics
                .into_iter()
                .map(|topic| view! {
                    <div class="mb-4">
                        <h3 class="font-semibold">{topic.heading}</h3>
                        <p class="text-gray-300">{topic.text}</p>
                    </div>
                })
                .collect_view()}
        </Card>
    }
}
