use storefront_app::domain::products::{
    ProductsService, ProductsServiceError,
    records::{ProductId, ProductRecord},
};

pub(crate) async fn run(service: &dyn ProductsService, id: String) -> Result<(), String> {
    let product = service
        .get_product(ProductId::new(id.clone()))
        .await
        .map_err(|error| match error {
            ProductsServiceError::NotFound => format!("product {id} not found"),
            error => format!("failed to load product {id}: {error}"),
        })?;

    println!("{}", describe(&product));

    Ok(())
}

fn describe(product: &ProductRecord) -> String {
    format!(
        "id:          {}\nname:        {}\nprice:       {}\nimage:       {}\ndescription: {}",
        product.id, product.name, product.price, product.image, product.description
    )
}
