//! Login Form Component
//!
//! Shown until the session probe or a login marks the user as logged in.

use leptos::prelude::*;
use todo_sync::LoginParams;

use crate::context::use_app_context;

/// Client-side checks before the credentials go out
pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    let valid_shape = email
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.ends_with('.'));
    if !valid_shape {
        return Err("Invalid email address");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < 3 {
        return Err("Password must be at least 3 characters");
    }
    Ok(())
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember_me, set_remember_me) = signal(false);
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = (email.get(), password.get());
        if let Err(message) = validate_login(&email, &password) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);

        let params = LoginParams {
            email: email.trim().to_string(),
            password,
            remember_me: remember_me.get(),
            captcha: None,
        };
        ctx.run(move |intents| async move {
            let _ = intents.login(&params).await;
        });
    };

    view! {
        <form class="login-form" on:submit=submit>
            <h2>"Sign in"</h2>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <label class="remember-me">
                <input
                    type="checkbox"
                    prop:checked=move || remember_me.get()
                    on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                />
                "Remember me"
            </label>
            {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}
            <button type="submit">"Login"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login() {
        assert_eq!(validate_login("", "secret"), Err("Email is required"));
        assert_eq!(validate_login("not-an-email", "secret"), Err("Invalid email address"));
        assert_eq!(validate_login("a@b", "secret"), Err("Invalid email address"));
        assert_eq!(validate_login("a@b.c", ""), Err("Password is required"));
        assert_eq!(validate_login("a@b.c", "ab"), Err("Password must be at least 3 characters"));
        assert_eq!(validate_login(" a@b.c ", "secret"), Ok(()));
    }
}
