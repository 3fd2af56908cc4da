//! Page footer with the current year and a back-to-top button.

use leptos::prelude::*;

use crate::state::ui::AppContext;

/// Site footer.
#[component]
pub fn Footer() -> impl IntoView {
    let title = AppContext::expect().config.with_value(|c| c.title.clone());

    #[cfg(feature = "csr")]
    let year = Some(crate::util::browser::current_year());
    #[cfg(not(feature = "csr"))]
    let year: Option<u32> = None;

    let on_top = move |_| {
        #[cfg(feature = "csr")]
        crate::util::browser::smooth_scroll_to(0.0);
    };

    view! {
        <footer class="footer">
            <p>"© " <span id="current-year">{year}</span> " " {title}</p>
            <button
                id="back-to-top"
                type="button"
                class="back-to-top"
                aria-label="Back to top"
                on:click=on_top
            >
                "↑"
            </button>
        </footer>
    }
}
