use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use thiserror::Error;

use crate::api::submit_feedback;
use crate::components::toast::{ToastLevel, use_toasts};

pub const MAX_FEEDBACK_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackForm {
    pub message: String,
    pub rating: Option<u8>,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FeedbackInvalid {
    #[error("Please write a message first")]
    EmptyMessage,

    #[error("Feedback is limited to {} characters", MAX_FEEDBACK_CHARS)]
    TooLong,

    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}

/// Characters left before the limit, counted the way the server counts them
/// (Unicode scalar values of the trimmed text). Negative once over.
pub fn remaining_chars(message: &str) -> i64 {
    MAX_FEEDBACK_CHARS as i64 - message.trim().chars().count() as i64
}

impl FeedbackForm {
    /// Trims the message and checks it against the server's limits.
    pub fn prepare(message: &str, rating: Option<u8>) -> Result<Self, FeedbackInvalid> {
        let message = message.trim();
        if message.is_empty() {
            return Err(FeedbackInvalid::EmptyMessage);
        }
        if message.chars().count() > MAX_FEEDBACK_CHARS {
            return Err(FeedbackInvalid::TooLong);
        }
        if rating.is_some_and(|r| !(1..=5).contains(&r)) {
            return Err(FeedbackInvalid::RatingOutOfRange);
        }
        Ok(Self {
            message: message.to_string(),
            rating,
        })
    }
}

#[component]
pub fn Feedback(open: RwSignal<bool>) -> impl IntoView {
    let toasts = use_toasts();
    let message = RwSignal::new(String::new());
    let rating = RwSignal::new(None::<u8>);
    let sending = RwSignal::new(false);

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }

        let form = match FeedbackForm::prepare(&message.get_untracked(), rating.get_untracked()) {
            Ok(form) => form,
            Err(invalid) => {
                toasts.notify(ToastLevel::Warning, invalid.to_string());
                return;
            }
        };

        sending.set(true);
        spawn_local(async move {
            match submit_feedback(&form).await {
                Ok(receipt) => {
                    leptos::logging::log!("feedback {} received at {}", receipt.id, receipt.received_at);
                    toasts.notify(ToastLevel::Info, "Thanks for the feedback!");
                    message.set(String::new());
                    rating.set(None);
                    open.set(false);
                }
                Err(e) => {
                    leptos::logging::error!("feedback failed: {e}");
                    toasts.notify(ToastLevel::Error, "Could not send feedback, please try again");
                }
            }
            sending.set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center bg-black/50">
                <form
                    class="w-[22rem] sm:w-[28rem] rounded-lg border border-zinc-400 dark:border-zinc-700 \
                           bg-white dark:bg-black p-6 shadow-xl space-y-4"
                    on:submit=on_submit
                >
                    <div class="flex justify-between items-center">
                        <h2 class="text-lg font-bold">"Give Feedback"</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-xl hover:text-sky-500"
                            on:click=move |_| open.set(false)
                        >
                            "×"
                        </button>
                    </div>

                    <textarea
                        class="w-full h-32 rounded border border-zinc-300 dark:border-zinc-700 bg-transparent p-2"
                        placeholder="What did you think?"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <p class=move || {
                        if remaining_chars(&message.get()) < 0 { "text-xs text-red-500" } else { "text-xs text-zinc-500" }
                    }>
                        { move || format!("{} characters left", remaining_chars(&message.get())) }
                    </p>

                    <label class="flex items-center gap-2 text-sm">
                        "Rating"
                        <select
                            class="rounded border border-zinc-300 dark:border-zinc-700 bg-transparent p-1"
                            on:change=move |ev| {
                                rating.set(event_target_value(&ev).parse::<u8>().ok().filter(|r| *r > 0))
                            }
                        >
                            <option value="0" selected=move || rating.get().is_none()>"–"</option>
                            { (1..=5u8).map(|r| view! {
                                <option value=r.to_string() selected=move || rating.get() == Some(r)>
                                    { r.to_string() }
                                </option>
                            }).collect_view() }
                        </select>
                    </label>

                    <button
                        type="submit"
                        class="w-full rounded-full py-2 text-white bg-gradient-to-br from-sky-500 to-blue-700 \
                               disabled:opacity-50"
                        disabled=move || sending.get()
                    >
                        { move || if sending.get() { "Sending…" } else { "Send" } }
                    </button>
                </form>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_trimmed() {
        let form = FeedbackForm::prepare("  great work \n", Some(5)).unwrap();
        assert_eq!(form.message, "great work");
        assert_eq!(form.rating, Some(5));
    }

    #[test]
    fn rejects_what_the_server_would() {
        assert_eq!(FeedbackForm::prepare(" \t", None), Err(FeedbackInvalid::EmptyMessage));
        assert_eq!(
            FeedbackForm::prepare(&"a".repeat(MAX_FEEDBACK_CHARS + 1), None),
            Err(FeedbackInvalid::TooLong)
        );
        assert_eq!(FeedbackForm::prepare("ok", Some(9)), Err(FeedbackInvalid::RatingOutOfRange));
        assert!(FeedbackForm::prepare("ok", None).is_ok());
    }

    #[test]
    fn limit_counts_chars_not_utf16_units() {
        // each emoji is two UTF-16 units but a single char
        let at_limit = "😀".repeat(MAX_FEEDBACK_CHARS);
        assert_eq!(remaining_chars(&at_limit), 0);
        assert!(FeedbackForm::prepare(&at_limit, None).is_ok());

        let over = "😀".repeat(MAX_FEEDBACK_CHARS + 1);
        assert_eq!(remaining_chars(&over), -1);
        assert_eq!(FeedbackForm::prepare(&over, None), Err(FeedbackInvalid::TooLong));
    }

    #[test]
    fn remaining_ignores_surrounding_whitespace() {
        assert_eq!(remaining_chars("  hi  "), MAX_FEEDBACK_CHARS as i64 - 2);
        assert_eq!(remaining_chars(""), MAX_FEEDBACK_CHARS as i64);
    }

    #[test]
    fn invalid_reasons_read_as_messages() {
        assert_eq!(FeedbackInvalid::TooLong.to_string(), "Feedback is limited to 2000 characters");
        assert_eq!(FeedbackInvalid::EmptyMessage.to_string(), "Please write a message first");
    }

    #[test]
    fn serializes_for_the_feedback_endpoint() {
        let form = FeedbackForm::prepare("hi", None).unwrap();
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({ "message": "hi", "rating": null })
        );
    }
}
