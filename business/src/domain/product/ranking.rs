use super::model::Product;

/// Orders products by usage count, most used first, and keeps at most
/// `limit` of them.
///
/// The sort is stable, so products with equal usage keep their catalog order.
pub fn most_used(mut products: Vec<Product>, limit: usize) -> Vec<Product> {
    products.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    products.truncate(limit);
    products
}
