use crate::models::{CartItem, Product};
use crate::storage::{SlotKey, SlotStore, StorageError};

use super::{load_slot, save_slot};

/// Storefront cart: one line per product id, each with a quantity.
#[derive(Debug)]
pub struct CartStore<S: SlotStore> {
    slots: S,
    items: Vec<CartItem>,
}

impl<S: SlotStore> CartStore<S> {
    pub fn hydrate(slots: S) -> Self {
        let items: Vec<CartItem> = load_slot(&slots, SlotKey::Cart).unwrap_or_default();
        tracing::debug!(lines = items.len(), "cart hydrated");
        Self { slots, items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Adds one unit of `product`, opening a new line if needed.
    pub fn add_to_cart(&mut self, product: Product) -> Result<(), StorageError> {
        match self.items.iter_mut().find(|item| item.id() == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem::new(product)),
        }
        save_slot(&self.slots, SlotKey::Cart, &self.items)
    }

    /// Removes a product from the cart.
    ///
    /// With `decrease` set, takes one unit off the line and drops the line
    /// when it reaches zero. Otherwise drops the whole line. Returns whether
    /// a line with `id` existed.
    pub fn remove_from_cart(&mut self, id: u64, decrease: bool) -> Result<bool, StorageError> {
        let Some(pos) = self.items.iter().position(|item| item.id() == id) else {
            return Ok(false);
        };

        if decrease && self.items[pos].quantity > 1 {
            self.items[pos].quantity -= 1;
        } else {
            self.items.remove(pos);
        }
        save_slot(&self.slots, SlotKey::Cart, &self.items)?;
        Ok(true)
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
