use leptos::*;
use leptos_router::use_params_map;
use noty::PAGES_ROUTE;

use crate::GlobalState;

/// Landing view for `/pages/:page_id`. Editing happens elsewhere, this only
/// confirms which page is open.
#[component]
pub fn PageDetail() -> impl IntoView {
    let params = use_params_map();
    let store = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided")
        .with_untracked(|state| state.store.clone());

    let page = move || {
        let page_id =
            params.with(|p| p.get("page_id").cloned().unwrap_or_default());
        store.as_ref().and_then(|store| store.find(&page_id))
    };

    view! {
        <div class="w-full h-full flex justify-center bg-gray-900">
            <div class="w-full max-w-[720px] p-4 flex flex-col gap-2">
                <a href=PAGES_ROUTE class="text-sm text-gray-600 hover:text-gray-400">"← Your pages"</a>
                {move || match page() {
                    Some(page) => view! {
                        <span class="font-bold text-lg text-gray-500">{page.label().to_string()}</span>
                        <span class="text-sm text-gray-700">{format!("{} blocks", page.block_count())}</span>
                    }
                    .into_view(),
                    None => view! {
                        <span class="text-sm text-gray-700">"Page not found"</span>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}
