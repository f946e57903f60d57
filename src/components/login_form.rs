//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::models::LoginCredentials;
use crate::route::Route;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginCredentials {
            email: email.get(),
            password: password.get(),
        };
        let actions = ctx.actions();
        spawn_local(async move {
            if actions.login(credentials).await.is_ok() {
                set_email.set(String::new());
                set_password.set(String::new());
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h3>"LOGIN"</h3>
                <label>
                    "Email address"
                    <input
                        type="email"
                        placeholder="Enter email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <small class="muted">"We will never share your email with anyone else."</small>
                <label>
                    "Password"
                    <input
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <p class="auth-switch">
                    "Not Registered? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.actions().navigate(Route::Register);
                    }>"REGISTER NOW"</a>
                </p>
                <button type="submit" class="submit-btn">"Submit"</button>
            </form>
        </div>
    }
}
