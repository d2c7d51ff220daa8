use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use noty::PAGES_ROUTE;

use crate::routes::pages::{PageDetail, PageList};
use crate::GlobalState;

#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(GlobalState::default());
    provide_meta_context();
    provide_context(state);

    view! {
        <Stylesheet id="noty" href="/pkg/tailwind.css"/>
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        <Title text="Noty"/>
        <div class="w-screen h-screen flex flex-col bg-gray-900">
            <Router fallback=|| view! { <Redirect path=PAGES_ROUTE/> }.into_view()>
                <nav class="py-2 px-4 flex items-end gap-4 bg-black">
                    <div class="text-2xl font-sans font-bold text-gray-300 tracking-widest">"Noty"</div>
                    <A href=PAGES_ROUTE class="text-gray-500 hover:text-gray-300 font-mono font-bold">"Pages"</A>
                </nav>
                <main class="flex-1 overflow-hidden">
                    <Routes>
                        // root has no view of its own
                        <Route path="/" view=|| view! { <Redirect path=PAGES_ROUTE/> }/>
                        <Route path=PAGES_ROUTE view=|| view! { <PageList/> }/>
                        <Route path="/pages/:page_id" view=|| view! { <PageDetail/> }/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
