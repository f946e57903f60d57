//! Register Form Component
//!
//! Multipart registration with avatar upload.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::models::Registration;
use crate::route::Route;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let avatar_input = NodeRef::<html::Input>::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let avatar = avatar_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let registration = Registration {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            password: password.get(),
            avatar,
        };
        let actions = ctx.actions();
        spawn_local(async move {
            if actions.register(registration).await.is_ok() {
                set_name.set(String::new());
                set_email.set(String::new());
                set_phone.set(String::new());
                set_password.set(String::new());
                if let Some(input) = avatar_input.get_untracked() {
                    input.set_value("");
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h3>"REGISTER"</h3>
                <label>
                    "Name"
                    <input
                        type="text"
                        placeholder="Enter Your Name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        placeholder="Enter Your Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Phone Number"
                    <input
                        type="tel"
                        placeholder="Your Phone Number"
                        required
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                </label>
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
                <label>
                    "Avatar"
                    <input type="file" accept="image/*" required node_ref=avatar_input />
                </label>
                <p class="auth-switch">
                    "Already Registered? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.actions().navigate(Route::Login);
                    }>"LOGIN"</a>
                </p>
                <button type="submit" class="submit-btn">"Submit"</button>
            </form>
        </div>
    }
}
