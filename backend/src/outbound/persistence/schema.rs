//! Diesel table definitions matching `backend/migrations`.

diesel::table! {
    /// Menu catalogue, listed in `id` order.
    menu_items (id) {
        id -> Int8,
        name -> Text,
        description -> Text,
        /// Minor currency units.
        price -> Int8,
        category -> Text,
        image -> Text,
        available -> Bool,
    }
}

diesel::table! {
    /// Placed orders. `order_number` carries a unique index.
    orders (id) {
        id -> Int8,
        order_number -> Varchar,
        customer_name -> Text,
        /// Minor currency units.
        total -> Int8,
        status -> Varchar,
        /// JSON array of `{name, quantity, price}` objects.
        items -> Jsonb,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only contact form submissions.
    contacts (id) {
        id -> Int8,
        name -> Text,
        email -> Text,
        subject -> Text,
        message -> Text,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(menu_items, orders, contacts);
