//! Top navigation bar with a fixed route list.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::config::BRAND_NAME;

/// One navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

/// Routes shown in the bar, in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { href: "/", label: "Home" },
    NavItem { href: "/friends", label: "Friends" },
    NavItem { href: "/chats", label: "Chats" },
    NavItem { href: "/voice", label: "Voice Chat" },
    NavItem { href: "/rewards", label: "Rewards" },
];

/// Exact match only; `/chats/42` does not activate `/chats`.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

/// Navigation bar highlighting the entry for `current_path`.
#[component]
pub fn Navigation(#[prop(into)] current_path: Signal<String>) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav__inner">
                <a href="/" class="nav__brand">{BRAND_NAME}</a>
                <ul class="nav__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let href = item.href;
                            let active = move || current_path.with(|path| is_active(path, href));
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="nav__link"
                                        class:nav__link--active=active
                                        aria-current=move || active().then_some("page")
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </nav>
    }
}
