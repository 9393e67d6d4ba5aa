//! Newsletter signup section component.

use std::future::Future;

use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use newsletter_core::{NewsletterContent, SignupForm, SubscribeHandler, Theme};

/// Fallback handler: records the address on the console and succeeds.
fn log_only_handler() -> SubscribeHandler {
    SubscribeHandler::new(|email| async move {
        logging::log!("newsletter signup (no handler configured): {email}");
        Ok(())
    })
}

/// Run one submit attempt: validate, dispatch the handler, settle.
///
/// Returns `None` when validation rejected the attempt or a call is already
/// in flight. The returned future resolves once the settlement has been
/// recorded, so the submitting flag always drops again.
fn submit_request(
    form: RwSignal<SignupForm>,
    handler: &SubscribeHandler,
) -> Option<impl Future<Output = ()>> {
    let email = form.try_update(|f| f.begin_submit()).flatten()?;
    let pending = handler.call(email);
    Some(async move {
        let outcome = pending.await;
        if let Err(ref err) = outcome {
            logging::error!("newsletter subscribe failed: {err}");
        }
        form.update(|f| f.settle(outcome));
    })
}

/// Themeable newsletter signup form.
///
/// Renders a labeled email input, a submit button, inline error copy, and a
/// privacy link. Submitting validates the address client-side, dispatches
/// the subscribe handler on success, disables the button until the call
/// settles, and swaps the whole form for a confirmation notice once a
/// signup goes through. Handler failures reach the user only as generic
/// copy; the detail goes to the console log.
#[component]
pub fn NewsletterSection(
    /// Visual theme. Unrecognized names fall back to the dark palette.
    #[prop(optional, into)]
    theme: Theme,
    /// Display copy. Defaults carry the stock marketing text.
    #[prop(optional)]
    content: NewsletterContent,
    /// Called with the candidate address once it passes validation.
    /// Defaults to a no-op that only logs.
    #[prop(optional, into)]
    on_subscribe: Option<SubscribeHandler>,
) -> impl IntoView {
    let handler = on_subscribe.unwrap_or_else(log_only_handler);
    let form = RwSignal::new(SignupForm::new());
    // Memoized so keystrokes updating the form signal never tear down and
    // rebuild the form subtree (which would drop input focus); the branch
    // only swaps when the flag actually flips.
    let success = Memo::new(move |_| form.with(|f| f.is_success()));

    let palette = theme.palette();
    let section_style = format!(
        "background:{};color:{};",
        palette.container_bg, palette.container_fg
    );
    let input_style = format!(
        "background:{};border-color:{};color:{};",
        palette.input_bg, palette.input_border, palette.input_fg
    );
    let button_style = format!(
        "background:{};color:{};",
        palette.button_bg, palette.button_fg
    );
    let link_style = format!("color:{};", palette.link);

    let button_label = content.button_label.clone();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(settle) = submit_request(form, &handler) {
            spawn_local(settle);
        }
    };

    view! {
        <section
            class=format!("newsletter newsletter--{}", theme.as_str())
            style=section_style
            data-section="newsletter"
        >
            <div class="newsletter-content">
                <h2 class="newsletter-headline">{content.headline.clone()}</h2>
                <p class="newsletter-subheadline">{content.sub_headline.clone()}</p>
                {move || {
                    if success.get() {
                        view! {
                            <div class="newsletter-success">"Thank you for subscribing!"</div>
                        }
                            .into_any()
                    } else {
                        let submit = on_submit.clone();
                        let label = button_label.clone();
                        let input_style = input_style.clone();
                        let button_style = button_style.clone();
                        view! {
                            <form class="newsletter-form" on:submit=submit>
                                <label class="sr-only" for="newsletter-email">
                                    "Email address"
                                </label>
                                <div class="newsletter-controls">
                                    <input
                                        id="newsletter-email"
                                        name="email"
                                        type="email"
                                        class="newsletter-input"
                                        style=input_style
                                        placeholder="Enter your email"
                                        prop:value=move || form.with(|f| f.email().to_owned())
                                        on:input=move |ev| {
                                            form.update(|f| f.set_email(event_target_value(&ev)))
                                        }
                                    />
                                    <button
                                        type="submit"
                                        class="newsletter-button"
                                        style=button_style
                                        disabled=move || form.with(|f| f.is_submitting())
                                    >
                                        {move || {
                                            if form.with(|f| f.is_submitting()) {
                                                "Subscribing...".to_string()
                                            } else {
                                                label.clone()
                                            }
                                        }}
                                    </button>
                                </div>
                                {move || {
                                    form.with(|f| f.error_message())
                                        .map(|msg| {
                                            view! { <div class="newsletter-error">{msg}</div> }
                                        })
                                }}
                            </form>
                        }
                            .into_any()
                    }
                }}
                <p class="newsletter-privacy">
                    {content.privacy_text.clone()}
                    " "
                    <a
                        class="newsletter-link"
                        style=link_style
                        href=content.privacy_link_url.clone()
                    >
                        {content.privacy_link_text.clone()}
                    </a>
                    "."
                </p>
            </div>
        </section>
    }
}
