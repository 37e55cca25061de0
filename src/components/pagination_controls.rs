use catalog_core::listing::{page_items, PageItem, PageNav, PAGE_SIBLINGS};
use catalog_core::PageInfo;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PaginationControlsProps {
    pub current: u32,
    /// Latest server page info; `None` before the first response
    pub info: Option<PageInfo>,
    pub loading: bool,
    pub on_select: EventHandler<u32>,
}

/// Prev / numbered pages / next, plus a "Page N / M" label.
#[component]
pub fn PaginationControls(props: PaginationControlsProps) -> Element {
    let current = props.current;
    let loading = props.loading;
    let on_select = props.on_select;
    let controls = PageNav::new(current, props.info.as_ref(), loading);

    let items = controls
        .total
        .filter(|total| *total > 0)
        .map(|total| page_items(current, total, PAGE_SIBLINGS))
        .unwrap_or_default();

    let buttons = items.into_iter().enumerate().map(move |(index, item)| match item {
        PageItem::Page(n) => rsx! {
            button {
                key: "page-{n}",
                r#type: "button",
                class: if n == current { "page-btn page-btn--active" } else { "page-btn" },
                disabled: loading,
                "aria-label": "Go to page {n}",
                "aria-current": if n == current { "page" } else { "false" },
                onclick: move |_| {
                    if n != current {
                        on_select.call(n);
                    }
                },
                "{n}"
            }
        },
        PageItem::Ellipsis => rsx! {
            span { key: "gap-{index}", class: "page-ellipsis", "…" }
        },
    });

    rsx! {
        nav { class: "pagination", "aria-label": "Pagination",
            button {
                r#type: "button",
                class: "page-btn",
                disabled: controls.prev_disabled,
                onclick: move |_| on_select.call(controls.prev),
                "Prev"
            }

            {buttons}

            button {
                r#type: "button",
                class: "page-btn",
                disabled: controls.next_disabled,
                onclick: move |_| on_select.call(controls.next),
                "Next"
            }

            span { class: "page-label", "{controls.label()}" }
        }
    }
}
