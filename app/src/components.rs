use leptos::prelude::*;

use crate::content;

/// Number of star slots a rating is drawn over.
pub const STAR_SLOTS: usize = 5;

/// Fill state of each star slot for a rating: the first `rating` slots are
/// filled, the rest stay empty. The rating is trusted as already within
/// 0..=5; range checking happened once in [`content::Content::verify`].
pub fn star_fill(rating: u8) -> [bool; STAR_SLOTS] {
    core::array::from_fn(|slot| slot < rating as usize)
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="top-bar">
            <nav>
                <span class="brand">{content::get().brand}</span>
                <ul>
                    <li><a href="#about">"About"</a></li>
                    <li><a href="#projects">"Projects"</a></li>
                    <li><a href="#contact">"Contact"</a></li>
                </ul>
            </nav>
        </header>
    }
}

#[component]
pub fn Badge(label: &'static str, #[prop(optional)] outline: bool) -> impl IntoView {
    let class = if outline {
        "badge badge-outline"
    } else {
        "badge"
    };
    view! { <span class=class>{label}</span> }
}

#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    view! {
        <div class="stars">
            {star_fill(rating)
                .into_iter()
                .map(|filled| {
                    let class = if filled { "star star-filled" } else { "star" };
                    view! { <span class=class>{"\u{2605}"}</span> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="page-footer">
            <p>
                <a href="#top"><small>{content::get().copyright}</small></a>
            </p>
        </footer>
    }
}
