use leptos::*;
use leptos_router::use_navigate;
use noty::{PageListRender, PageListStore, PageListView, PageRow};

use crate::components::icons::PageIcon;
use crate::components::notifications::ErrorNotification;
use crate::helpers::local_storage::BrowserStorage;
use crate::helpers::navigation::DeferredNavigator;
use crate::GlobalState;

#[component]
pub fn PageList() -> impl IntoView {
    let store = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided")
        .with_untracked(|state| state.store.clone());

    match store {
        Some(store) => view! { <PageListContent store/> }.into_view(),
        None => view! {
            <div class="p-4 text-sm text-gray-500">
                "Local storage is not available in this browser."
            </div>
        }
        .into_view(),
    }
}

#[component]
fn PageListContent(store: PageListStore<BrowserStorage>) -> impl IntoView {
    let page_list = create_rw_signal(PageListView::new(store));
    let create_error = create_rw_signal(None::<String>);
    let navigator = DeferredNavigator::new(use_navigate());

    let on_create = move |_| {
        match page_list.try_update(|view| view.create(&navigator)) {
            Some(Ok(_)) => create_error.set(None),
            Some(Err(e)) => {
                create_error.set(Some(format!("Could not create page: {}", e)))
            }
            None => log::warn!("Page list is no longer mounted"),
        }
    };

    view! {
        <div class="w-full h-full flex justify-center overflow-auto bg-gray-900 select-none">
            <div class="w-full h-full max-w-[720px] p-4 md:px-4 md:py-8 flex flex-col gap-4 overflow-auto">
                <div class="flex flex-col">
                    <span class="font-bold text-lg text-gray-500">"Your pages"</span>
                    <span class="text-sm text-gray-600">
                        "Select or "
                        <span
                            class="text-gray-500 cursor-pointer underline transition duration-200 hover:text-gray-400"
                            on:click=on_create
                        >
                            "create a new page +"
                        </span>
                    </span>
                    <ErrorNotification error=create_error/>
                </div>
                <div class="w-full h-full flex flex-col gap-2">
                    {move || match page_list.with(|view| view.render()) {
                        PageListRender::Empty { message } => view! {
                            <span class="text-sm text-gray-700">{message}</span>
                        }
                        .into_view(),
                        PageListRender::Rows(rows) => rows
                            .into_iter()
                            .map(|row| view! { <PageListRow row/> })
                            .collect_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PageListRow(row: PageRow) -> impl IntoView {
    let blocks_label = row.blocks_label();

    view! {
        <a
            href=row.href
            class="flex items-center gap-2 px-4 py-2 text-gray-600 cursor-pointer border border-transparent transition duration-200 hover:border-gray-800"
        >
            <PageIcon/>
            <div class="w-full flex items-center justify-between">
                <span class="text-gray-600">{row.label}</span>
                <span class="text-gray-800">{blocks_label}</span>
            </div>
        </a>
    }
}
