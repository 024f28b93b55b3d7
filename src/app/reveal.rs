use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::state::Reveal;

/// Direction an element slides in from when it is first revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    Up,
    Left,
    Right,
}

impl Entrance {
    fn class(self) -> &'static str {
        match self {
            Self::Up => "enter-up",
            Self::Left => "enter-left",
            Self::Right => "enter-right",
        }
    }
}

/// Latches to `Seen` the first time `target` intersects the viewport by at
/// least `threshold`, then disconnects the observer.
pub fn use_reveal(target: NodeRef<html::Div>, threshold: f64) -> ReadSignal<Reveal> {
    let (reveal, set_reveal) = signal(Reveal::Unseen);

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let next = entries.iter().fold(reveal.get_untracked(), |r, entry| {
                if threshold > 0.0 {
                    r.observe(entry.intersection_ratio(), threshold)
                } else {
                    r.observe_intersecting(entry.is_intersecting())
                }
            });
            if next.is_seen() {
                set_reveal.set(next);
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    reveal
}

/// Wraps children in a block that plays its entrance animation once.
#[component]
pub fn RevealOnScroll(
    #[prop(optional, into)] class: String,
    #[prop(optional)] from: Entrance,
    #[prop(optional)] threshold: f64,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let reveal = use_reveal(node, threshold);

    view! {
        <div
            node_ref=node
            class=move || format!("reveal {} {} {}", from.class(), reveal.get().class(), class)
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}
