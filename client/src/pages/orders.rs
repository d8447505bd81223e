//! Orders page: list the caller's orders and place new ones.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use leptos::prelude::*;

use crate::components::notice_bar::NoticeBar;
use crate::net::types::Order;
use crate::util::format::medium_timestamp;
use crate::util::notice::NoticeState;
#[cfg(feature = "hydrate")]
use crate::util::notice::{NOTICE_TTL_MS, notify};

/// One table row, already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRow {
    pub id: i64,
    pub order_number: String,
    pub status_label: &'static str,
    pub status_class: String,
    pub created: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number.clone(),
            status_label: order.status.as_wire(),
            status_class: order.status.chip_class(),
            created: medium_timestamp(&order.creation_time),
        }
    }
}

/// Newest first: a freshly created order goes to the top.
pub fn prepend(orders: &mut Vec<Order>, order: Order) {
    orders.insert(0, order);
}

pub fn created_notice(order: &Order) -> String {
    format!("Order {} created", order.order_number)
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);
    let creating = RwSignal::new(false);
    let notices = RwSignal::new(NoticeState::default());
    #[cfg(feature = "hydrate")]
    let api = StoredValue::new(expect_context::<crate::app::PortalApi>());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api.get_value().list_orders().await {
            Ok(list) => orders.set(list),
            Err(err) => {
                log::warn!("order list failed: {err}");
                notify(notices, "Failed to load orders", NOTICE_TTL_MS);
            }
        }
        loading.set(false);
    });

    let on_create = move |_| {
        if creating.get_untracked() {
            return;
        }
        creating.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                match api.create_order().await {
                    Ok(order) => {
                        notify(notices, created_notice(&order), NOTICE_TTL_MS);
                        orders.update(|list| prepend(list, order));
                    }
                    Err(err) => {
                        log::warn!("order create failed: {err}");
                        notify(notices, "Failed to create order", NOTICE_TTL_MS);
                    }
                }
                creating.set(false);
            });
        }
    };

    let rows = move || orders.with(|list| list.iter().map(OrderRow::from).collect::<Vec<_>>());

    view! {
        <div class="orders-page">
            <div class="orders-page__header">
                <h1>"Orders"</h1>
                <button class="btn btn--primary" on:click=on_create disabled=move || creating.get()>
                    {move || if creating.get() { "Creating..." } else { "Create Order" }}
                </button>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loading">"Loading..."</div> }>
                <Show
                    when=move || !orders.with(Vec::is_empty)
                    fallback=|| view! { <p class="orders-page__empty">"No orders yet."</p> }
                >
                    <table class="orders-table">
                        <thead>
                            <tr>
                                <th>"Order Number"</th>
                                <th>"Status"</th>
                                <th>"Created"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=rows key=|row| row.id let:row>
                                <tr>
                                    <td>{row.order_number}</td>
                                    <td>
                                        <span class=row.status_class>{row.status_label}</span>
                                    </td>
                                    <td>{row.created}</td>
                                </tr>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </Show>
            <NoticeBar notices=notices/>
        </div>
    }
}
