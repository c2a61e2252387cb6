use storefront_app::domain::products::ProductsService;

pub(crate) async fn run(service: &dyn ProductsService) -> Result<(), String> {
    let products = service
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("catalog is empty");

        return Ok(());
    }

    for product in products {
        println!("{}\t{}\t{}", product.id, product.price, product.name);
    }

    Ok(())
}
