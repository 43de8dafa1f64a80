use crate::{
    client::StudentApi,
    view::{DrawerForm, ListView},
};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state: the remote API handle plus the two view-state
/// containers. No free-floating globals - everything the handlers touch
/// hangs off this one struct.
#[derive(Clone)]
pub struct RollcallState {
    api: Arc<dyn StudentApi>,
    list_view: Arc<RwLock<ListView>>,
    drawer: Arc<RwLock<DrawerForm>>,
}

impl RollcallState {
    pub fn new(api: Arc<dyn StudentApi>) -> Self {
        Self {
            api,
            list_view: Arc::new(RwLock::new(ListView::new())),
            drawer: Arc::new(RwLock::new(DrawerForm::new())),
        }
    }

    pub fn api(&self) -> &dyn StudentApi {
        &*self.api
    }

    pub fn list_view(&self) -> &RwLock<ListView> {
        &self.list_view
    }

    pub fn drawer(&self) -> &RwLock<DrawerForm> {
        &self.drawer
    }

    #[allow(clippy::unused_self, clippy::needless_pass_by_value)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Rollcall" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center justify-center text-white" {
                    nav class="w-full bg-gray-800 shadow-md mb-8" {
                        div class="container mx-auto flex flex-row items-center justify-between py-3 px-4" {
                            a href="/" class="text-xl font-bold" {"Rollcall"}
                            a href="/students" class="hover:text-blue-400" {"Students"}
                        }
                    }
                    div id="notifications" class="fixed top-16 right-4 w-96 z-50" {}
                    (markup)
                }
            }
        }
    }
}
