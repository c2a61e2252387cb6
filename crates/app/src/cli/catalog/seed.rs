use storefront_app::domain::products::{ProductsService, catalog::default_catalog};

pub(crate) async fn run(service: &dyn ProductsService) -> Result<(), String> {
    let inserted = service
        .seed_products(default_catalog())
        .await
        .map_err(|error| format!("failed to seed catalog: {error}"))?;

    if inserted == 0 {
        println!("catalog already populated; nothing seeded");
    } else {
        println!("seeded {inserted} products");
    }

    Ok(())
}
