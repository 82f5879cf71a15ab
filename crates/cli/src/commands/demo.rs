//! Walk a cart through checkout against the loaded feed.

use std::path::PathBuf;

use nifty_pets_core::ItemKind;
use nifty_pets_storefront::adoption::AdoptionApplication;
use nifty_pets_storefront::config::StorefrontConfig;
use nifty_pets_storefront::error::StorefrontError;
use nifty_pets_storefront::events::{ToastLevel, UiEvent};
use nifty_pets_storefront::orders::CheckoutForm;
use nifty_pets_storefront::session::Session;
use nifty_pets_storefront::state::Storefront;

use super::{CommandError, load_feed};

#[allow(clippy::print_stdout)]
fn show_events(events: &[UiEvent]) {
    for event in events {
        match event {
            UiEvent::CartUpdated { count } => println!("  [cart badge] {count} item(s)"),
            UiEvent::Toast { message, level } => {
                let prefix = match level {
                    ToastLevel::Success => "toast",
                    ToastLevel::Error => "error",
                };
                println!("  [{prefix}] {message}");
            }
            UiEvent::PetAdopted(id) => println!("  [locked] adopt buttons for {id}"),
        }
    }
}

/// Run the `demo` command: add the first two priced listings to a cart,
/// tweak a quantity, then check out.
#[allow(clippy::print_stdout)]
pub fn run(feed: Option<PathBuf>) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let loaded = load_feed(feed, &config)?;

    let mut storefront = Storefront::new(Session::new());
    storefront.set_catalog(loaded.records);

    let priced: Vec<_> = storefront
        .catalog()
        .iter()
        .filter(|r| r.price.is_some())
        .take(2)
        .cloned()
        .collect();
    if priced.is_empty() {
        println!("The feed has no priced listings to demo with.");
        return Ok(());
    }

    println!("Adding to cart:");
    for record in &priced {
        if let Some(price) = record.price {
            let events = storefront.cart_mut().add_item(
                &record.name,
                price,
                &record.image,
                record.id.clone(),
                ItemKind::Pet,
            )?;
            show_events(&events);
        }
    }

    if let Some(first) = priced.first() {
        println!("One more of {}:", first.name);
        let events = storefront
            .cart_mut()
            .change_quantity(&first.id, ItemKind::Pet, 1)?;
        show_events(&events);
    }

    println!(
        "Cart: {} item(s), total ${}",
        storefront.cart().item_count(),
        storefront.cart().total()
    );

    // An empty form first, to show the field-level validation surface.
    println!("Checkout with an empty form:");
    match storefront.checkout(&CheckoutForm::default()) {
        Ok(_) => println!("  unexpectedly succeeded"),
        Err(e) => {
            show_events(&[e.to_toast()]);
        }
    }

    let form = CheckoutForm {
        name: "Jamie Doe".to_owned(),
        email: "jamie@example.com".to_owned(),
        phone: "(555) 123-4567".to_owned(),
        address: "1 Main Street, Springfield".to_owned(),
    };
    println!("Checkout as {}:", form.name);
    let (order, events) = storefront.checkout(&form)?;
    show_events(&events);

    println!(
        "Order {} placed at {} for ${}; cart now has {} item(s)",
        order.id,
        order.placed_at.to_rfc3339(),
        order.total,
        storefront.cart().item_count()
    );

    if let Some(adoptable) = storefront
        .catalog()
        .iter()
        .find(|r| r.price.is_none())
        .cloned()
    {
        println!("Adoption application for {}:", adoptable.name);
        let application = AdoptionApplication {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            address: form.address.clone(),
            donation: None,
        };
        let events = storefront
            .adoption_mut()
            .submit_application(&adoptable.id, &application)?;
        show_events(&events);
    }

    println!("A $25 donation on the side:");
    let picker = storefront.donation_mut();
    picker.select_preset(rust_decimal::Decimal::from(25));
    match picker.confirm() {
        Ok(events) => show_events(&events),
        Err(e) => {
            show_events(&[StorefrontError::from(e).to_toast()]);
        }
    }
    Ok(())
}
