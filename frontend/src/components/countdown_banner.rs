use yew::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::countdown::{subscribe, BrowserScheduler, Countdown, CountdownAction};

#[function_component(CountdownBanner)]
pub fn countdown_banner() -> Html {
    let countdown = use_reducer(Countdown::default);

    // One tick per second while mounted; dropping the subscription on unmount clears the interval.
    {
        let dispatcher = countdown.dispatcher();
        use_effect_with_deps(
            move |_| {
                let subscription = subscribe(&BrowserScheduler, move || {
                    dispatcher.dispatch(CountdownAction::Tick);
                });
                move || drop(subscription)
            },
            (),
        );
    }

    html! {
        <div class="countdown-banner">
            <style>
                {r#"
                    .countdown-banner {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        background: #dc2626;
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-align: center;
                    }
                    .countdown-banner time {
                        font-variant-numeric: tabular-nums;
                    }
                "#}
            </style>
            <Icon glyph={Glyph::Clock} />
            {"OFERTA POR TEMPO LIMITADO: ESSA PÁGINA EXPIRA EM "}
            <time>{(*countdown).to_string()}</time>
        </div>
    }
}
