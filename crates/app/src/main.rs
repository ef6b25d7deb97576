use std::rc::Rc;

use api_client::{ApiConfig, HttpApi};
use dioxus::prelude::*;

use app::auth::SessionState;
use app::routes::Route;
use app::storage::{DraftStore, Drafts};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);
    use_context_provider(|| HttpApi::new(ApiConfig::default()));
    use_context_provider(|| Drafts(Rc::new(DraftStore::for_platform())));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
