use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,
    Inactive,
    Discontinued,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Unique catalog code, the lookup key at the request boundary.
    pub code: String,
    pub name: String,
    pub price: Decimal,
    pub status: ProductStatus,
}

impl Product {
    pub fn is_sellable(&self) -> bool {
        self.status == ProductStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::{Product, ProductId, ProductStatus};

    fn product(status: ProductStatus) -> Product {
        Product {
            id: ProductId(Uuid::new_v4()),
            code: "BOOK1".to_string(),
            name: "Book One".to_string(),
            price: Decimal::new(500_000, 2),
            status,
        }
    }

    #[test]
    fn only_active_products_are_sellable() {
        assert!(product(ProductStatus::Active).is_sellable());
        assert!(!product(ProductStatus::Inactive).is_sellable());
        assert!(!product(ProductStatus::Discontinued).is_sellable());
    }
}
