use leptos::*;

#[component]
pub fn ErrorNotification(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        if let Some(message) = error.get() {
            view! {
                <div class="flex items-center justify-between mt-2 px-4 py-2 text-sm text-red-500 border border-red-900">
                    <span>{message}</span>
                    <button
                        class="ml-4 text-gray-500 hover:text-gray-400"
                        on:click=move |_| error.set(None)
                    >
                        "dismiss"
                    </button>
                </div>
            }
            .into_view()
        } else {
            view! {}.into_view()
        }
    }
}
