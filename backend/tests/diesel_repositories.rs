//! Diesel adapters against an embedded PostgreSQL cluster.
//!
//! Runs the order lifecycle, duplicate handling, row locking and menu seeding
//! through the same services the HTTP layer uses, backed by a real database.

mod support;

use std::collections::HashSet;
use std::sync::Arc;

use bullburger::domain::ports::{
    ContactCommand, ContactRepository, MenuCommand, MenuQuery, MenuRepository, OrderCommand,
    OrderQuery, OrderRepository, OrderRepositoryError, RandomOrderNumberGenerator,
};
use bullburger::domain::{
    ContactDraft, ContactService, MenuService, NewContact, NewOrder, OrderDraft, OrderItem,
    OrderItemDraft, OrderNumber, OrderService, OrderStatus, Price, StepState,
};
use bullburger::outbound::persistence::{
    DbPool, DieselContactRepository, DieselMenuRepository, DieselOrderRepository, PoolConfig,
};
use bullburger::test_support::{MutableClock, fixed_clock, fixed_instant};
use chrono::TimeDelta;
use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

use support::embedded_postgres::{handle_cluster_setup_failure, provision_database};

struct TestContext {
    runtime: Runtime,
    pool: DbPool,
    clock: Arc<MutableClock>,
    _database: TemporaryDatabase,
}

impl TestContext {
    fn orders(&self) -> OrderService<DieselOrderRepository> {
        OrderService::new(
            Arc::new(DieselOrderRepository::new(self.pool.clone())),
            Arc::new(RandomOrderNumberGenerator),
            self.clock.clone(),
        )
    }

    fn menu(&self) -> MenuService<DieselMenuRepository> {
        MenuService::new(Arc::new(DieselMenuRepository::new(self.pool.clone())))
    }

    fn contacts(&self) -> ContactService<DieselContactRepository> {
        ContactService::new(
            Arc::new(DieselContactRepository::new(self.pool.clone())),
            self.clock.clone(),
        )
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| format!("runtime: {err}"))?;
    let database = provision_database()?;
    let config = PoolConfig::new(database.url()).with_max_size(4);
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| format!("pool: {err}"))?;
    Ok(TestContext {
        runtime,
        pool,
        clock: fixed_clock(),
        _database: database,
    })
}

#[fixture]
fn db() -> Option<TestContext> {
    match setup_context() {
        Ok(context) => Some(context),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn draft(customer: &str, total: i64) -> OrderDraft {
    OrderDraft {
        customer_name: Some(customer.to_owned()),
        total: Some(total),
        ..OrderDraft::default()
    }
}

#[rstest]
fn tracking_an_order_from_placement_to_delivery(db: Option<TestContext>) {
    let Some(context) = db else {
        eprintln!("SKIP-TEST-CLUSTER: tracking_an_order_from_placement_to_delivery skipped");
        return;
    };
    let orders = context.orders();

    context.runtime.block_on(async {
        let placed = orders
            .place_order(draft("Asha Rao", 219_700))
            .await
            .expect("order placed");
        assert_eq!(placed.status(), OrderStatus::Confirmed);
        assert_eq!(placed.created_at(), fixed_instant());
        assert_eq!(placed.created_at(), placed.updated_at());
        let number = placed.order_number().to_string();

        let fetched = orders
            .get_order(&number)
            .await
            .expect("lookup succeeds")
            .expect("order exists");
        assert_eq!(fetched, placed);

        let mut previous = placed.updated_at();
        for status in [
            OrderStatus::Preparing,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
        ] {
            context.clock.advance(TimeDelta::minutes(5));
            let updated = orders
                .update_order_status(&number, status)
                .await
                .expect("update succeeds")
                .expect("order exists");
            assert_eq!(updated.status(), status);
            assert_eq!(updated.created_at(), placed.created_at());
            assert!(updated.updated_at() > previous);
            previous = updated.updated_at();
        }

        let progress = orders
            .get_order_progress(&number)
            .await
            .expect("progress succeeds")
            .expect("order exists");
        let states: Vec<_> = progress.steps().iter().map(|step| step.state).collect();
        assert_eq!(
            states,
            vec![
                StepState::Completed,
                StepState::Completed,
                StepState::Completed,
                StepState::Active,
            ]
        );
    });
}

#[rstest]
fn same_instant_update_still_moves_updated_at(db: Option<TestContext>) {
    let Some(context) = db else {
        eprintln!("SKIP-TEST-CLUSTER: same_instant_update_still_moves_updated_at skipped");
        return;
    };
    let orders = context.orders();

    context.runtime.block_on(async {
        let placed = orders
            .place_order(draft("Ravi", 89_900))
            .await
            .expect("order placed");
        let number = placed.order_number().to_string();

        let updated = orders
            .update_order_status(&number, OrderStatus::Preparing)
            .await
            .expect("update succeeds")
            .expect("order exists");
        assert_eq!(
            updated.updated_at(),
            placed.updated_at() + TimeDelta::microseconds(1)
        );
    });
}

#[rstest]
fn unknown_order_update_creates_nothing(db: Option<TestContext>) {
    let Some(context) = db else {
        eprintln!("SKIP-TEST-CLUSTER: unknown_order_update_creates_nothing skipped");
        return;
    };
    let orders = context.orders();

    context.runtime.block_on(async {
        let updated = orders
            .update_order_status("BBZZZZZZZZZ", OrderStatus::Delivered)
            .await
            .expect("update succeeds");
        assert!(updated.is_none());
        let fetched = orders.get_order("BBZZZZZZZZZ").await.expect("lookup");
        assert!(fetched.is_none());
    });
}

#[rstest]
fn reused_order_number_is_rejected(db: Option<TestContext>) {
    let Some(context) = db else {
        eprintln!("SKIP-TEST-CLUSTER: reused_order_number_is_rejected skipped");
        return;
    };
    let repo = DieselOrderRepository::new(context.pool.clone());
    let number = OrderNumber::parse("BB000000001").expect("valid number");
    let order = NewOrder {
        customer_name: "Meera".to_owned(),
        total: Price::new(49_900).expect("valid price"),
        status: OrderStatus::Confirmed,
        items: Vec::new(),
    };

    context.runtime.block_on(async {
        repo.insert(number.clone(), order.clone(), fixed_instant())
            .await
            .expect("first insert");
        let error = repo
            .insert(number.clone(), order, fixed_instant())
            .await
            .expect_err("second insert collides");
        assert!(
            matches!(
                &error,
                OrderRepositoryError::DuplicateNumber { order_number } if order_number == "BB000000001"
            ),
            "{error:?}"
        );
    });
}

#[rstest]
fn order_lines_survive_the_round_trip(db: Option<TestContext>) {
    let Some(context) = db else {
        eprintln!("SKIP-TEST-CLUSTER: order_lines_survive_the_round_trip skipped");
        return;
    };
    let orders = context.orders();

    context.runtime.block_on(async {
        let placed = orders
            .place_order(OrderDraft {
                items: Some(vec![
                    OrderItemDraft {
                        name: Some("Bull Signature Burger".to_owned()),
                        quantity: Some(2),
                        price: Some(89_900),
                    },
                    OrderItemDraft {
                        name: Some("Chocolate Thunder Shake".to_owned()),
                        quantity: None,
                        price: Some(39_900),
                    },
                ]),
                status: Some("preparing".to_owned()),
                ..draft("Kiran", 219_700)
            })
            .await
            .expect("order placed");

        let fetched = orders
            .get_order(placed.order_number().as_str())
            .await
            .expect("lookup succeeds")
            .expect("order exists");
        assert_eq!(fetched.status(), OrderStatus::Preparing);
        assert_eq!(
            fetched.items(),
            [
                OrderItem::new("Bull Signature Burger", 2, Price::new(89_900).expect("price")),
                OrderItem::new("Chocolate Thunder Shake", 1, Price::new(39_900).expect("price")),
            ]
        );
    });
}

#[rstest]
fn parallel_updates_take_distinct_stamps(db: Option<TestContext>) {
    let Some(context) = db else {
        eprintln!("SKIP-TEST-CLUSTER: parallel_updates_take_distinct_stamps skipped");
        return;
    };
    let orders = Arc::new(context.orders());

    context.runtime.block_on(async {
        let placed = orders
            .place_order(draft("Load Test", 10_000))
            .await
            .expect("order placed");
        let number = placed.order_number().to_string();

        let mut handles = Vec::new();
        for i in 0..16 {
            let orders = Arc::clone(&orders);
            let number = number.clone();
            let status = OrderStatus::ALL[i % OrderStatus::ALL.len()];
            handles.push(tokio::spawn(async move {
                orders
                    .update_order_status(&number, status)
                    .await
                    .expect("update succeeds")
                    .expect("order exists")
                    .updated_at()
            }));
        }

        let mut stamps = HashSet::new();
        for handle in handles {
            assert!(stamps.insert(handle.await.expect("task joins")));
        }
        let last = orders
            .get_order(&number)
            .await
            .expect("lookup succeeds")
            .expect("order exists");
        assert_eq!(
            last.updated_at(),
            placed.created_at() + TimeDelta::microseconds(16)
        );
    });
}

#[rstest]
fn seeding_fills_only_an_empty_catalogue(db: Option<TestContext>) {
    let Some(context) = db else {
        eprintln!("SKIP-TEST-CLUSTER: seeding_fills_only_an_empty_catalogue skipped");
        return;
    };
    let menu = context.menu();
    let repo = DieselMenuRepository::new(context.pool.clone());

    context.runtime.block_on(async {
        assert_eq!(menu.seed_default_menu().await.expect("seeded"), 6);
        assert_eq!(menu.seed_default_menu().await.expect("no-op"), 0);
        assert_eq!(repo.count().await.expect("count"), 6);

        let all = menu.list_menu().await.expect("menu");
        let ids: Vec<_> = all.iter().map(|item| item.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let burgers = menu.list_menu_by_category("Burgers").await.expect("burgers");
        let ids: Vec<_> = burgers.iter().map(|item| item.id()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(
            menu.list_menu_by_category("Pizza")
                .await
                .expect("pizza")
                .is_empty()
        );
    });
}

#[rstest]
fn contact_ids_follow_insertion_order(db: Option<TestContext>) {
    let Some(context) = db else {
        eprintln!("SKIP-TEST-CLUSTER: contact_ids_follow_insertion_order skipped");
        return;
    };
    let contacts = context.contacts();
    let submission = |name: &str| ContactDraft {
        name: Some(name.to_owned()),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        subject: Some("Catering".to_owned()),
        message: Some("Do you cater office lunches?".to_owned()),
    };

    context.runtime.block_on(async {
        let first = contacts
            .submit_contact(submission("Priya"))
            .await
            .expect("first stored");
        let second = contacts
            .submit_contact(submission("Arjun"))
            .await
            .expect("second stored");
        assert_eq!((first.id(), second.id()), (1, 2));
        assert_eq!(first.created_at(), fixed_instant());
        assert_eq!(second.email(), "arjun@example.com");
    });
}

#[rstest]
fn repositories_share_the_same_contract(db: Option<TestContext>) {
    let Some(context) = db else {
        eprintln!("SKIP-TEST-CLUSTER: repositories_share_the_same_contract skipped");
        return;
    };
    let orders = DieselOrderRepository::new(context.pool.clone());
    let contacts = DieselContactRepository::new(context.pool.clone());
    let number = OrderNumber::parse("BB000000002").expect("valid number");

    context.runtime.block_on(async {
        assert!(orders.find_by_number(&number).await.expect("lookup").is_none());
        assert!(
            orders
                .update_status(&number, OrderStatus::Delivered, fixed_instant())
                .await
                .expect("update")
                .is_none()
        );
        let stored = contacts
            .insert(
                NewContact {
                    name: "Lena".to_owned(),
                    email: "lena@example.com".to_owned(),
                    subject: "Hours".to_owned(),
                    message: "Open on Sundays?".to_owned(),
                },
                fixed_instant(),
            )
            .await
            .expect("contact stored");
        assert_eq!(stored.id(), 1);
    });
}
