use log::info;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod navigation;
mod relay {
    pub mod gateway;
    pub mod submission;
}
mod components {
    pub mod footer;
    pub mod nav;
    pub mod pitch_modal;
    pub mod relay_form;
    pub mod toast;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod investment;
    pub mod news;
    pub mod philanthropy;
    pub mod portfolio;
    pub mod registry;
    pub mod venture_studio;
}

use components::{footer::Footer, nav::Nav, toast::Toaster};
use navigation::{BrowserLocation, NavRequest, Navigation, NavigationState};
use pages::registry::{PageFrame, PageId};
use relay::gateway::Gateway;

#[function_component]
fn App() -> Html {
    let state = use_mut_ref(|| NavigationState::init(BrowserLocation));
    let current = use_state_eq(|| state.borrow().current());
    let gateway = use_memo(|_| Gateway::from_env(), ());

    let navigate = {
        let state = state.clone();
        let current = current.clone();
        Callback::from(move |request: NavRequest| {
            let page = {
                let mut state = state.borrow_mut();
                state.apply(request);
                state.current()
            };
            current.set(page);
        })
    };

    // back/forward and hand-edited fragments
    {
        let state = state.clone();
        let current = current.clone();
        use_event_with_window("hashchange", move |_: Event| {
            let changed = {
                let mut state = state.borrow_mut();
                state.sync_with_fragment().then(|| state.current())
            };
            if let Some(page) = changed {
                current.set(page);
            }
        });
    }

    let on_mounted = {
        let state = state.clone();
        Callback::from(move |page: PageId| state.borrow_mut().view_mounted(page))
    };

    let navigation = Navigation::new(*current, navigate);

    html! {
        <ContextProvider<Navigation> context={navigation}>
            <ContextProvider<Gateway> context={(*gateway).clone()}>
                <Toaster>
                    <Nav />
                    <main class="page-main">
                        <PageFrame key={current.as_str()} page={*current} on_mounted={on_mounted} />
                    </main>
                    <Footer />
                </Toaster>
            </ContextProvider<Gateway>>
        </ContextProvider<Navigation>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Lumara Ventures site");
    yew::Renderer::<App>::new().render();
}
