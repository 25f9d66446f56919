//! Tableside checkout smoke CLI
//!
//! Drives the full client flow against a live backend: fetch the menu, build
//! a cart, refresh the checkout view, apply a coupon and print the bill.

use std::{io, process, sync::Arc};

use clap::Parser;
use jiff::Timestamp;
use uuid::Uuid;

use tableside::{
    cart::Cart,
    orders::{Order, OrderLine, OrderStatus},
    receipt,
    session::Session,
};
use tableside_app::{
    context::{AppConfig, AppContext},
    domain::{checkout::CheckoutView, feedback::SheetStoreConfig},
    gateway::BackendConfig,
};

#[derive(Debug, Parser)]
#[command(name = "tableside-app", about = "Tableside checkout CLI", long_about = None)]
struct Cli {
    /// Menu backend base URL
    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:8002")]
    backend_url: String,

    /// Sheet store webhook URL for interaction tracking
    #[arg(long, env = "SHEETS_WEBHOOK_URL", default_value = "")]
    webhook_url: String,

    /// Guest email used for personalization
    #[arg(long, default_value = "guest@example.com")]
    email: String,

    /// Table number for the handoff
    #[arg(long, default_value = "1")]
    table: String,

    /// Item id to add to the cart; repeat to add more
    #[arg(long = "item")]
    items: Vec<String>,

    /// Coupon code to apply, when the backend offers it
    #[arg(long)]
    coupon: Option<String>,
}

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let app = AppContext::from_config(AppConfig {
        backend: BackendConfig {
            base_url: cli.backend_url,
        },
        store: SheetStoreConfig {
            webhook_url: cli.webhook_url,
        },
    });

    let mut session = Session::new();
    session.login(cli.table, 1, None, None, Some(cli.email.clone()));

    let menu = app.menu.fetch_menu(&cli.email).await;

    if menu.is_empty() {
        println!("menu unavailable; nothing to order");
        return Ok(());
    }

    let mut cart = Cart::new();

    for id in &cli.items {
        match menu.items().find(|item| item.id == *id) {
            Some(item) => {
                cart.add_item(item.clone());
                app.feedback.track(&cli.email, id, "cart");
            }
            None => println!("item {id} is not on the menu; skipped"),
        }
    }

    if cart.is_empty() {
        println!("cart is empty; nothing to order");
        return Ok(());
    }

    let mut view = CheckoutView::new(Arc::clone(&app.menu));
    view.refresh(&cart, &cli.email).await;

    if let Some(code) = cli.coupon {
        match view.coupons.iter().find(|coupon| coupon.code == code) {
            Some(coupon) if coupon.qualifies_at(cart.item_subtotal()) => {
                let coupon = coupon.clone();
                view.select_coupon(coupon);
            }
            Some(_) => println!("coupon {code} needs a bigger order; skipped"),
            None => println!("coupon {code} is not available; skipped"),
        }
    }

    if let Some(nudge) = view.nudge.as_ref().filter(|nudge| nudge.show) {
        println!("{}", nudge.message);
    }

    let totals = view.totals(&cart);

    receipt::write_bill(io::stdout().lock(), &cart, &totals, view.selected_coupon())
        .map_err(|error| format!("failed to print the bill: {error}"))?;

    let handoff = view.handoff(&cart, &session.table_number);

    let order = Order {
        id: Uuid::now_v7().to_string(),
        placed_at: Timestamp::now(),
        items: handoff
            .lines
            .iter()
            .map(|line| OrderLine {
                name: line.item.name.clone(),
                quantity: line.quantity,
                price: line.item.price,
            })
            .collect(),
        total: handoff.total_amount,
        status: OrderStatus::Preparing,
        rating: None,
    };

    println!(
        "handing off ₹{} for table {} (order {})",
        handoff.total_amount, handoff.table_number, order.id
    );

    session.add_order(order);

    Ok(())
}
