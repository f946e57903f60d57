//! Profile Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::models::or_na;
use crate::store::AppStateStoreFields;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    // Sessions opened by login/registration have no profile yet
    let requested = StoredValue::new(false);
    Effect::new(move |_| {
        let missing = {
            let session = store.session().read();
            session.is_authenticated() && session.user().is_none()
        };
        if missing && !requested.get_value() {
            requested.set_value(true);
            let actions = ctx.actions();
            spawn_local(async move {
                let _ = actions.refresh_profile().await;
            });
        }
    });

    let user = Memo::new(move |_| store.session().read().user().cloned());

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <h1>"PROFILE"</h1>
                {move || match user.get() {
                    Some(user) => view! {
                        <div class="profile-details">
                            {user.avatar_url().map(|url| view! {
                                <img class="profile-avatar" src=url.to_string() alt="avatar" />
                            })}
                            <div class="profile-row">
                                <span class="profile-key">"NAME:"</span>
                                <span>{or_na(&user.name)}</span>
                            </div>
                            <div class="profile-row">
                                <span class="profile-key">"EMAIL:"</span>
                                <span>{or_na(&user.email)}</span>
                            </div>
                            <div class="profile-row">
                                <span class="profile-key">"PHONE:"</span>
                                <span>{or_na(&user.phone)}</span>
                            </div>
                        </div>
                    }.into_any(),
                    None => view! {
                        <p class="muted">"User data is not available."</p>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
