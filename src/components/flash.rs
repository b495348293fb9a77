use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::Config;

/// Severity of a flash message, used as its CSS class
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MessageKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Warning => "warning",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FlashProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub kind: MessageKind,
    /// Fired once the message has faded out and rendered nothing.
    #[prop_or_default]
    pub on_dismissed: Callback<()>,
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Phase {
    Visible,
    Fading,
    Gone,
}

/// Client-side flash message that fades out and unmounts itself
#[function_component(Flash)]
pub fn flash(props: &FlashProps) -> Html {
    let phase = use_state(|| Phase::Visible);

    {
        let phase = phase.clone();
        let on_dismissed = props.on_dismissed.clone();
        use_effect_with((), move |_| {
            let fade = {
                let phase = phase.clone();
                Timeout::new(Config::MESSAGE_DISMISS_MS, move || phase.set(Phase::Fading))
            };
            let remove = Timeout::new(
                Config::MESSAGE_DISMISS_MS + Config::MESSAGE_FADE_MS,
                move || {
                    phase.set(Phase::Gone);
                    on_dismissed.emit(());
                },
            );

            move || {
                drop(fade);
                drop(remove);
            }
        });
    }

    let style = match *phase {
        Phase::Visible => "margin-bottom: 1rem;",
        Phase::Fading => "margin-bottom: 1rem; opacity: 0; transform: translateY(-10px);",
        Phase::Gone => return html! {},
    };

    html! {
        <div class={classes!("message", props.kind.as_str())} role="status" {style}>
            {props.text.clone()}
        </div>
    }
}
