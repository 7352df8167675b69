use jobtrackpath_core::{start_submission, SubmissionStatus, Waitlist};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::utils::api::BrowserWaitlistApi;

const FORM_CSS: &str = r#"
    .waitlist-card {
        max-width: 28rem;
        margin: 3rem auto 0;
        padding: 2rem;
        background: rgba(17, 24, 39, 0.5);
        border: 1px solid #1f2937;
        border-radius: 1rem;
        backdrop-filter: blur(4px);
    }
    .waitlist-card h2 {
        font-size: 1.5rem;
        color: #fff;
        margin-bottom: 0.5rem;
    }
    .waitlist-card input {
        width: 100%;
        padding: 0.75rem 1rem;
        border-radius: 0.5rem;
        background: rgba(31, 41, 55, 0.5);
        border: 1px solid #374151;
        color: #fff;
    }
    .waitlist-card button {
        width: 100%;
        margin-top: 1rem;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        background: #31B19E;
        color: #fff;
        font-weight: 500;
        cursor: pointer;
    }
    .waitlist-card button:hover {
        background: #289181;
    }
    .waitlist-card button:disabled,
    .waitlist-card input:disabled {
        opacity: 0.5;
        cursor: not-allowed;
    }
    .waitlist-message {
        margin-top: 1rem;
        font-size: 0.875rem;
        text-align: center;
        animation: fade-in 0.3s ease-out;
    }
    .waitlist-message.success { color: #31B19E; }
    .waitlist-message.error { color: #f87171; }
    .waitlist-privacy {
        margin-top: 1rem;
        font-size: 0.75rem;
        color: #6b7280;
        text-align: center;
    }
    @keyframes fade-in {
        from { opacity: 0; transform: translateY(-10px); }
        to { opacity: 1; transform: translateY(0); }
    }
"#;

fn button_label(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Submitting => "Joining...",
        SubmissionStatus::Succeeded => "✓ Joined!",
        SubmissionStatus::Idle | SubmissionStatus::Failed => "Join Waitlist",
    }
}

fn message_class(status: SubmissionStatus) -> Option<&'static str> {
    match status {
        SubmissionStatus::Succeeded => Some("success"),
        SubmissionStatus::Failed => Some("error"),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
    }
}

#[function_component]
pub fn WaitlistForm() -> Html {
    let form = use_mut_ref(Waitlist::new);
    let api = use_memo(|_| BrowserWaitlistApi::new(config::waitlist_url()), ());
    let rerender = use_force_update();

    let oninput = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().update_email(input.value());
            rerender.force_update();
        })
    };

    let onsubmit = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(pending) = start_submission(&form, api.clone()) else {
                return;
            };
            rerender.force_update();
            let rerender = rerender.clone();
            spawn_local(async move {
                if pending.await.is_applied() {
                    rerender.force_update();
                }
            });
        })
    };

    let (email, status, message, locked) = {
        let form = form.borrow();
        (
            form.email().to_string(),
            form.status(),
            form.message().to_string(),
            form.is_locked(),
        )
    };

    html! {
        <div class="waitlist-card">
            <style>{FORM_CSS}</style>
            <h2>{"Join the Waitlist"}</h2>
            <p>{"Get exclusive launch discount + early access"}</p>
            <form {onsubmit}>
                <input
                    type="email"
                    placeholder="Enter your email"
                    required=true
                    value={email}
                    disabled={locked}
                    {oninput}
                />
                <button type="submit" disabled={locked}>
                    {button_label(status)}
                </button>
                {
                    if let Some(tone) = message_class(status) {
                        html! { <p class={classes!("waitlist-message", tone)}>{message}</p> }
                    } else {
                        html! {}
                    }
                }
            </form>
            <p class="waitlist-privacy">{"We respect your privacy. No spam, ever."}</p>
        </div>
    }
}
