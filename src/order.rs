// =============================================================================
// Prototype: orders
// =============================================================================

use crate::prototype::Prototype;

#[derive(Debug, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Product {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl Prototype for Product {
    fn duplicate(&self) -> Self {
        Product {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Discount {
    pub percent: f64,
}

impl Discount {
    pub fn new(percent: f64) -> Self {
        Discount { percent }
    }

    pub fn apply(&self, amount: f64) -> f64 {
        amount * (1.0 - self.percent / 100.0)
    }
}

impl Prototype for Discount {
    fn duplicate(&self) -> Self {
        Discount {
            percent: self.percent,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Order {
    pub products: Vec<Product>,
    pub delivery_cost: f64,
    pub discount: Option<Discount>,
    pub payment_method: String,
}

impl Order {
    pub fn new(
        products: Vec<Product>,
        delivery_cost: f64,
        discount: Option<Discount>,
        payment_method: impl Into<String>,
    ) -> Self {
        Order {
            products,
            delivery_cost,
            discount,
            payment_method: payment_method.into(),
        }
    }

    /// Products plus delivery, with the discount applied to the whole sum.
    pub fn total_price(&self) -> f64 {
        let total: f64 =
            self.products.iter().map(Product::subtotal).sum::<f64>() + self.delivery_cost;
        match &self.discount {
            Some(discount) => discount.apply(total),
            None => total,
        }
    }
}

impl Prototype for Order {
    fn duplicate(&self) -> Self {
        Order {
            products: self.products.duplicate(),
            delivery_cost: self.delivery_cost,
            discount: self.discount.duplicate(),
            payment_method: self.payment_method.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order::new(
            vec![Product::new("Laptop", 1000.0, 1)],
            50.0,
            Some(Discount::new(10.0)),
            "Card",
        )
    }

    #[test]
    fn test_total_with_discount() {
        assert!((sample_order().total_price() - 945.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_without_discount() {
        let order = Order::new(
            vec![Product::new("Mouse", 25.0, 2), Product::new("Pad", 5.5, 1)],
            0.0,
            None,
            "Cash",
        );
        assert!((order.total_price() - 55.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_order_costs_delivery() {
        let order = Order::new(Vec::new(), 12.0, None, "Card");
        assert!((order.total_price() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = sample_order();
        let mut copy = original.duplicate();
        assert_eq!(copy, original);

        copy.products[0].quantity = 2;
        copy.discount.as_mut().unwrap().percent = 0.0;

        assert_eq!(original.products[0].quantity, 1);
        assert!((original.total_price() - 945.0).abs() < 1e-9);
        assert!((copy.total_price() - 2050.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_quantity_change_total() {
        let original = sample_order();
        let mut copy = original.duplicate();
        copy.products[0].quantity = 2;
        assert!((copy.total_price() - 1845.0).abs() < 1e-9);
    }
}
