//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer. Conversions into domain
//! types re-validate stored values so a corrupted row surfaces as a query
//! error instead of a broken invariant.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Contact, MenuItem, NewContact, NewMenuItem, Order, OrderItem, OrderNumber, OrderParts,
    OrderStatus, Price,
};

use super::schema::{contacts, menu_items, orders};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = menu_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MenuItemRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    pub image: String,
    pub available: bool,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = menu_items)]
pub(crate) struct NewMenuItemRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: i64,
    pub category: &'a str,
    pub image: &'a str,
    pub available: bool,
}

impl<'a> From<&'a NewMenuItem> for NewMenuItemRow<'a> {
    fn from(item: &'a NewMenuItem) -> Self {
        Self {
            name: &item.name,
            description: &item.description,
            price: item.price.minor_units(),
            category: &item.category,
            image: &item.image,
            available: item.available,
        }
    }
}

impl TryFrom<MenuItemRow> for MenuItem {
    type Error = String;

    fn try_from(row: MenuItemRow) -> Result<Self, Self::Error> {
        let price = Price::new(row.price).map_err(|err| format!("menu item {}: {err}", row.id))?;
        Ok(MenuItem::new(
            row.id,
            NewMenuItem {
                name: row.name,
                description: row.description,
                price,
                category: row.category,
                image: row.image,
                available: row.available,
            },
        ))
    }
}

/// JSON shape of one entry in `orders.items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct OrderItemRecord {
    pub name: String,
    pub quantity: u32,
    pub price: i64,
}

impl From<&OrderItem> for OrderItemRecord {
    fn from(item: &OrderItem) -> Self {
        Self {
            name: item.name().to_owned(),
            quantity: item.quantity(),
            price: item.price().minor_units(),
        }
    }
}

/// Encode order items for the `items` column.
pub(crate) fn items_to_json(items: &[OrderItem]) -> Result<serde_json::Value, String> {
    let records: Vec<OrderItemRecord> = items.iter().map(OrderItemRecord::from).collect();
    serde_json::to_value(records).map_err(|err| format!("encode order items: {err}"))
}

fn items_from_json(value: serde_json::Value) -> Result<Vec<OrderItem>, String> {
    let records: Vec<OrderItemRecord> =
        serde_json::from_value(value).map_err(|err| format!("decode order items: {err}"))?;
    records
        .into_iter()
        .map(|record| {
            let price = Price::new(record.price).map_err(|err| err.to_string())?;
            Ok(OrderItem::new(record.name, record.quantity, price))
        })
        .collect()
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderRow {
    pub id: i64,
    pub order_number: String,
    pub customer_name: String,
    pub total: i64,
    pub status: String,
    pub items: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub(crate) struct NewOrderRow<'a> {
    pub order_number: &'a str,
    pub customer_name: &'a str,
    pub total: i64,
    pub status: &'a str,
    pub items: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = String;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let order_number = OrderNumber::parse(&row.order_number)
            .map_err(|err| format!("order {}: {err}", row.id))?;
        let status = row
            .status
            .parse::<OrderStatus>()
            .map_err(|err| format!("order {}: {err}", row.id))?;
        let total = Price::new(row.total).map_err(|err| format!("order {}: {err}", row.id))?;
        let items = items_from_json(row.items)?;
        Order::from_parts(OrderParts {
            id: row.id,
            order_number,
            customer_name: row.customer_name,
            total,
            status,
            items,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
        .map_err(|err| format!("order {}: {err}", row.id))
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub created_at: DateTime<Utc>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Contact::new(
            row.id,
            NewContact {
                name: row.name,
                email: row.email,
                subject: row.subject,
                message: row.message,
            },
            row.created_at,
        )
    }
}
