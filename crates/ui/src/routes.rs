use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::app::APP_TITLE;
use crate::views::{HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "logo-container", to: Route::Home {}, h1 { "{APP_TITLE}" } }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
