//! Demo run: seeds a small menu, fills a cart and checks out twice, once at
//! the counter and once through Messenger.

use cafe_order::checkout::CheckoutSession;
use cafe_order::config::CafeConfig;
use cafe_order::customization::{quick_addition, Customization};
use cafe_order::lifecycle::{setup_tracing, CafeSystem};
use cafe_order::model::{AddOn, MenuItem, MenuItemCreate, ServiceType, Variation};
use cafe_order::pricing::{action_label, card_price, format_price, stock_status};
use cafe_order::storefront::Hero;
use rust_decimal_macros::dec;
use tracing::{error, info, Instrument};

fn seed_menu() -> Vec<MenuItemCreate> {
    vec![
        MenuItemCreate::new("Spanish Latte", "hot-coffee", dec!(150))
            .with_description("Espresso, milk and condensed milk")
            .with_variation(Variation::new("regular", "Regular", dec!(0)))
            .with_variation(Variation::new("large", "Large", dec!(30)))
            .with_add_on(AddOn::new("extra-shot", "Extra Shot", dec!(30), "coffee-add-ons"))
            .with_add_on(AddOn::new("oat-milk", "Oat Milk", dec!(25), "milk-options"))
            .popular(),
        MenuItemCreate::new("Ensaymada", "pastries", dec!(85))
            .with_discount(dec!(70))
            .with_stock(6, 3),
        MenuItemCreate::new("Tapsilog", "rice-meals", dec!(220)).with_stock(10, 2),
        MenuItemCreate::new("Ube Cheesecake", "desserts", dec!(160)).unavailable(),
    ]
}

fn print_card(item: &MenuItem) {
    let price = card_price(item);
    let stock = stock_status(item).card_label().unwrap_or_default();
    println!("  {:<16} {:<28} {:<12} [{}]", item.name, price, stock, action_label(item));
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CafeConfig::from_env().map_err(|e| e.to_string())?;
    let system = CafeSystem::new();
    let services = config
        .services(&system.order_client)
        .map_err(|e| e.to_string())?;
    let settings = config.checkout_settings();

    println!("{}\n", Hero::new(&config.cafe_name));

    let span = tracing::info_span!("menu_setup");
    async {
        for params in seed_menu() {
            system
                .menu_client
                .create_item(params)
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let menu = system.menu_client.menu(None).await.map_err(|e| e.to_string())?;
    println!("Menu:");
    for item in &menu {
        print_card(item);
    }

    let span = tracing::info_span!("ordering");
    let cart_id = async {
        let cart_id = system.cart_client.open_cart().await.map_err(|e| e.to_string())?;

        let latte = menu[0].clone();
        let mut customization = Customization::new(latte).map_err(|e| e.to_string())?;
        customization
            .select_variation("large")
            .and_then(|_| customization.set_add_on_quantity("extra-shot", 2))
            .map_err(|e| e.to_string())?;
        info!(label = %customization.add_to_cart_label(), "Customized");
        system
            .cart_client
            .add(cart_id, customization.into_addition())
            .await
            .map_err(|e| e.to_string())?;

        let ensaymada = quick_addition(&menu[1]).map_err(|e| e.to_string())?;
        let line_id = system
            .cart_client
            .add(cart_id, ensaymada)
            .await
            .map_err(|e| e.to_string())?;
        system
            .cart_client
            .increment(cart_id, line_id)
            .await
            .map_err(|e| e.to_string())?;

        Ok::<_, String>(cart_id)
    }
    .instrument(span)
    .await?;

    let cart = system.cart_client.cart(cart_id).await.map_err(|e| e.to_string())?;
    println!("\nCart:");
    for line in &cart.lines {
        println!("  {} x{}  {}", line.name, line.quantity, line.total_label());
    }
    println!("  Total: {}", format_price(cart.total()));

    let span = tracing::info_span!("checkout");
    async {
        let mut session = CheckoutSession::start(&cart, services.clone(), settings.clone())
            .await
            .map_err(|e| e.to_string())?;
        session.set_customer_name("Maria");
        session.set_service_type(ServiceType::TakeOut);

        match session.confirm_at_counter().await {
            Ok(confirmation) => {
                println!("\nCounter order {}", confirmation.badge());
                confirmation.countdown.finished().await;
                session.finish().map_err(|e| e.to_string())?;
            }
            Err(e) => error!(error = %e, "Counter checkout failed"),
        }

        let mut session = CheckoutSession::start(&cart, services, settings)
            .await
            .map_err(|e| e.to_string())?;
        session.set_customer_name("Jose");
        session.set_notes("Less sugar please");
        session.proceed_to_payment().map_err(|e| e.to_string())?;

        match session.place_order().await {
            Ok(redirect) => {
                println!("\nOrder #{}:\n{}\n", redirect.order_number, redirect.message);
                println!("{}", redirect.link);
            }
            Err(e) => error!(error = %e, "Online checkout failed"),
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let stock = system
        .menu_client
        .check_stock(menu[1].id)
        .await
        .map_err(|e| e.to_string())?;
    info!(?stock, "Ensaymada left");

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
