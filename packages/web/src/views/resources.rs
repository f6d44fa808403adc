//! One route per managed collection, all rendered by [`ResourceEditor`].

use api::schema::{ARTICLES, PROJECTS, REVIEWS, USERS};
use dioxus::prelude::*;
use ui::ResourceEditor;

#[component]
pub fn Users() -> Element {
    rsx! {
        ResourceEditor { key: "users", schema: &USERS }
    }
}

#[component]
pub fn Articles() -> Element {
    rsx! {
        ResourceEditor { key: "articles", schema: &ARTICLES }
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        ResourceEditor { key: "projects", schema: &PROJECTS }
    }
}

#[component]
pub fn Reviews() -> Element {
    rsx! {
        ResourceEditor { key: "reviews", schema: &REVIEWS }
    }
}
