use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HistoryView, HomeView, QuizView, ResultView, SetupView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/setup", SetupView)] Setup {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/result", ResultView)] Result {},
        #[route("/history", HistoryView)] History {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Quiz" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Setup {}, "New Quiz" } }
                li { Link { to: Route::History {}, "History" } }
            }
        }
    }
}
