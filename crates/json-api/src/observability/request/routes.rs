//! Route labels for spans and metrics.

/// Replace cart item ids with `{id}` so every `/api/cart/<id>` request shares a label.
pub(super) fn route_label(path: &str) -> String {
    let mut segments = Vec::new();
    let mut previous = "";

    for segment in path.split('/') {
        segments.push(if previous == "cart" && !segment.is_empty() {
            "{id}"
        } else {
            segment
        });

        previous = segment;
    }

    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::route_label;

    #[test]
    fn cart_item_ids_are_collapsed() {
        assert_eq!(
            route_label("/api/cart/01890a5d-ac96-774b-bcce-b302099a8057"),
            "/api/cart/{id}"
        );
        assert_eq!(route_label("/api/cart/not-a-uuid"), "/api/cart/{id}");
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(route_label("/api/products"), "/api/products");
        assert_eq!(route_label("/api/cart"), "/api/cart");
        assert_eq!(route_label("/"), "/");
    }
}
