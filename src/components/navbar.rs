//! Navigation Bar Component
//!
//! Filter menu, profile link and logout. Only rendered for a signed-in user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::filter::FilterKind;
use crate::route::Route;
use crate::store::AppStateStoreFields;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    let (menu_open, set_menu_open) = signal(false);

    let authenticated = move || store.session().read().is_authenticated();

    let choose_filter = move |kind: FilterKind| {
        let actions = ctx.actions();
        actions.select_filter(kind);
        actions.navigate(Route::Home);
        set_menu_open.set(false);
    };

    let logout = move |_| {
        let actions = ctx.actions();
        spawn_local(async move {
            let _ = actions.logout().await;
        });
    };

    view! {
        <Show when=authenticated>
            <nav class="navbar">
                <button class="navbar-brand" on:click=move |_| ctx.actions().navigate(Route::Home)>
                    "TASK MANAGER"
                </button>

                <div class="navbar-dropdown">
                    <button class="navbar-link" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                        "Filter Tasks ▾"
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="dropdown-menu">
                            {FilterKind::ALL_KINDS.iter().map(|kind| {
                                let kind = *kind;
                                let is_selected = move || store.filter().get() == kind;
                                view! {
                                    <button
                                        data-filter=kind.as_str()
                                        class=move || if is_selected() { "dropdown-item active" } else { "dropdown-item" }
                                        on:click=move |_| choose_filter(kind)
                                    >
                                        {kind.menu_label()}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                </div>

                <button class="navbar-link" on:click=move |_| ctx.actions().navigate(Route::Profile)>
                    "Profile"
                </button>

                <Show when=move || { store.in_flight().get() > 0 }>
                    <span class="navbar-busy">"Working..."</span>
                </Show>

                <button class="navbar-logout" on:click=logout>
                    "LOGOUT"
                </button>
            </nav>
        </Show>
    }
}
