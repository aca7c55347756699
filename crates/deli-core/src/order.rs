//! # Order Aggregate
//!
//! The root of the priced tree: three insertion-ordered collections
//! (sandwiches, drinks, extras) behind the editing operations the cart
//! view exposes.
//!
//! Removal semantics differ by kind, deliberately:
//!
//! - **sandwiches** are removed by position (the cart lists them numbered,
//!   and two identical sandwiches are still two different sandwiches)
//! - **drinks** are removed by (type, size) value match, first hit wins
//! - **extras** are removed by type value match, first hit wins
//!
//! Sandwiches stay mutable in place after being added; [`Order::sandwich_mut`]
//! reopens one for the editor.

use crate::catalog::{Catalog, DrinkId, EntryRef, ExtraId};
use crate::error::{OrderError, OrderResult};
use crate::item::{Consumption, LineItem};
use crate::money::Money;
use crate::sandwich::SandwichLine;
use crate::size::DrinkSize;

// =============================================================================
// Drink Line
// =============================================================================

/// A drink in the order: one type at one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrinkLine {
    drink: DrinkId,
    size: DrinkSize,
}

impl DrinkLine {
    pub fn new(drink: DrinkId, size: DrinkSize) -> Self {
        DrinkLine { drink, size }
    }

    pub fn drink(&self) -> DrinkId {
        self.drink
    }

    pub fn size(&self) -> DrinkSize {
        self.size
    }
}

impl LineItem for DrinkLine {
    fn name(&self, catalog: &Catalog<'_>) -> String {
        format!("{} {}", self.size, catalog.drink(self.drink).name)
    }

    fn own_price(&self, catalog: &Catalog<'_>) -> Money {
        catalog.drink(self.drink).price(self.size)
    }

    fn sub_items(&self) -> Vec<&dyn LineItem> {
        Vec::new()
    }

    fn consumption(&self) -> Option<Consumption> {
        Some(Consumption {
            entry: EntryRef::Drink(self.drink),
            units: self.size.units(),
        })
    }
}

// =============================================================================
// Extra Line
// =============================================================================

/// A standalone extra in the order (chips, cookie).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraLine {
    extra: ExtraId,
}

impl ExtraLine {
    pub fn new(extra: ExtraId) -> Self {
        ExtraLine { extra }
    }

    pub fn extra(&self) -> ExtraId {
        self.extra
    }
}

impl LineItem for ExtraLine {
    fn name(&self, catalog: &Catalog<'_>) -> String {
        catalog.extra(self.extra).name.clone()
    }

    fn own_price(&self, catalog: &Catalog<'_>) -> Money {
        catalog.extra(self.extra).price
    }

    fn sub_items(&self) -> Vec<&dyn LineItem> {
        Vec::new()
    }

    fn consumption(&self) -> Option<Consumption> {
        // Extras ignore size; one sold, one drawn.
        Some(Consumption {
            entry: EntryRef::Extra(self.extra),
            units: 1,
        })
    }
}

// =============================================================================
// Order
// =============================================================================

/// The order being built at the terminal. Root of the composite tree:
/// prices at zero itself and exposes sandwiches, then drinks, then extras
/// as children in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    sandwiches: Vec<SandwichLine>,
    drinks: Vec<DrinkLine>,
    extras: Vec<ExtraLine>,
}

impl Order {
    pub fn new() -> Self {
        Order::default()
    }

    /// True when nothing has been added yet (or everything was removed).
    pub fn is_empty(&self) -> bool {
        self.sandwiches.is_empty() && self.drinks.is_empty() && self.extras.is_empty()
    }

    // ----- sandwiches -----

    pub fn add_sandwich(&mut self, sandwich: SandwichLine) {
        self.sandwiches.push(sandwich);
    }

    pub fn sandwiches(&self) -> &[SandwichLine] {
        &self.sandwiches
    }

    /// Reopens a sandwich for in-place editing. `None` past the end.
    pub fn sandwich_mut(&mut self, index: usize) -> Option<&mut SandwichLine> {
        self.sandwiches.get_mut(index)
    }

    /// Removes the sandwich at `index`.
    pub fn remove_sandwich(&mut self, index: usize) -> OrderResult<()> {
        if index >= self.sandwiches.len() {
            return Err(OrderError::SandwichIndexOutOfRange { index });
        }
        self.sandwiches.remove(index);
        Ok(())
    }

    // ----- drinks -----

    pub fn add_drink(&mut self, drink: DrinkId, size: DrinkSize) {
        self.drinks.push(DrinkLine::new(drink, size));
    }

    pub fn drinks(&self) -> &[DrinkLine] {
        &self.drinks
    }

    /// Removes the first drink line matching (type, size).
    pub fn remove_drink(&mut self, drink: DrinkId, size: DrinkSize) -> OrderResult<()> {
        let position = self
            .drinks
            .iter()
            .position(|line| line.drink == drink && line.size == size)
            .ok_or(OrderError::DrinkNotFound)?;
        self.drinks.remove(position);
        Ok(())
    }

    // ----- extras -----

    pub fn add_extra(&mut self, extra: ExtraId) {
        self.extras.push(ExtraLine::new(extra));
    }

    pub fn extras(&self) -> &[ExtraLine] {
        &self.extras
    }

    /// Removes the first extra line of the given type.
    pub fn remove_extra(&mut self, extra: ExtraId) -> OrderResult<()> {
        let position = self
            .extras
            .iter()
            .position(|line| line.extra == extra)
            .ok_or(OrderError::ExtraNotFound)?;
        self.extras.remove(position);
        Ok(())
    }
}

impl LineItem for Order {
    fn name(&self, _catalog: &Catalog<'_>) -> String {
        "Order".to_string()
    }

    /// The root contributes nothing; the order's total is entirely its
    /// children's.
    fn own_price(&self, _catalog: &Catalog<'_>) -> Money {
        Money::zero()
    }

    fn sub_items(&self) -> Vec<&dyn LineItem> {
        let mut subs: Vec<&dyn LineItem> =
            Vec::with_capacity(self.sandwiches.len() + self.drinks.len() + self.extras.len());
        subs.extend(self.sandwiches.iter().map(|s| s as &dyn LineItem));
        subs.extend(self.drinks.iter().map(|d| d as &dyn LineItem));
        subs.extend(self.extras.iter().map(|e| e as &dyn LineItem));
        subs
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BreadEntry, BreadId, DrinkEntry, ExtraEntry};
    use crate::item::total_price;
    use crate::size::SandwichSize;

    fn test_drinks() -> Vec<DrinkEntry> {
        vec![
            DrinkEntry {
                name: "Cola".into(),
                prices: [
                    Money::from_cents(100),
                    Money::from_cents(125),
                    Money::from_cents(150),
                ],
                stock: 10,
            },
            DrinkEntry {
                name: "Lemonade".into(),
                prices: [
                    Money::from_cents(200),
                    Money::from_cents(250),
                    Money::from_cents(300),
                ],
                stock: 10,
            },
        ]
    }

    fn test_extras() -> Vec<ExtraEntry> {
        vec![
            ExtraEntry {
                name: "Chips".into(),
                price: Money::from_cents(150),
                stock: 10,
            },
            ExtraEntry {
                name: "Cookie".into(),
                price: Money::from_cents(125),
                stock: 10,
            },
        ]
    }

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new();
        assert!(order.is_empty());
        assert!(order.sub_items().is_empty());
    }

    #[test]
    fn test_children_ordered_by_kind_then_insertion() {
        let breads = vec![BreadEntry {
            name: "Wheat".into(),
            stock: 10,
        }];
        let drinks = test_drinks();
        let extras = test_extras();
        let cat = Catalog {
            breads: &breads,
            toppings: &[],
            drinks: &drinks,
            extras: &extras,
        };

        let mut order = Order::new();
        // Added out of kind order on purpose.
        order.add_extra(ExtraId::from_index(0));
        order.add_drink(DrinkId::from_index(0), DrinkSize::Small);
        order.add_sandwich(SandwichLine::new(
            SandwichSize::FourInch,
            BreadId::from_index(0),
        ));

        let names: Vec<String> = order
            .sub_items()
            .iter()
            .map(|item| item.name(&cat))
            .collect();
        assert_eq!(names, vec!["4in Sandwich", "Small Cola", "Chips"]);
    }

    #[test]
    fn test_order_total_is_children_sum() {
        let drinks = test_drinks();
        let extras = test_extras();
        let cat = Catalog {
            breads: &[],
            toppings: &[],
            drinks: &drinks,
            extras: &extras,
        };

        let mut order = Order::new();
        order.add_drink(DrinkId::from_index(0), DrinkSize::Medium);
        order.add_extra(ExtraId::from_index(0));

        assert!(order.own_price(&cat).is_zero());
        assert_eq!(total_price(&order, &cat).cents(), 125 + 150);
    }

    #[test]
    fn test_remove_drink_first_match_only() {
        let mut order = Order::new();
        let cola = DrinkId::from_index(0);
        order.add_drink(cola, DrinkSize::Small);
        order.add_drink(cola, DrinkSize::Small);
        order.add_drink(cola, DrinkSize::Large);

        order.remove_drink(cola, DrinkSize::Small).unwrap();

        let sizes: Vec<DrinkSize> = order.drinks().iter().map(|d| d.size()).collect();
        assert_eq!(sizes, vec![DrinkSize::Small, DrinkSize::Large]);
    }

    #[test]
    fn test_remove_drink_requires_exact_size() {
        let mut order = Order::new();
        let cola = DrinkId::from_index(0);
        order.add_drink(cola, DrinkSize::Small);

        assert_eq!(
            order.remove_drink(cola, DrinkSize::Large),
            Err(OrderError::DrinkNotFound)
        );
        assert_eq!(
            order.remove_drink(DrinkId::from_index(1), DrinkSize::Small),
            Err(OrderError::DrinkNotFound)
        );
        assert_eq!(order.drinks().len(), 1);
    }

    #[test]
    fn test_remove_extra_first_match() {
        let mut order = Order::new();
        let chips = ExtraId::from_index(0);
        let cookie = ExtraId::from_index(1);
        order.add_extra(chips);
        order.add_extra(cookie);
        order.add_extra(chips);

        order.remove_extra(chips).unwrap();

        let remaining: Vec<ExtraId> = order.extras().iter().map(|e| e.extra()).collect();
        assert_eq!(remaining, vec![cookie, chips]);

        assert_eq!(
            order.remove_extra(ExtraId::from_index(9)),
            Err(OrderError::ExtraNotFound)
        );
    }

    #[test]
    fn test_remove_sandwich_by_position() {
        let mut order = Order::new();
        let wheat = BreadId::from_index(0);
        order.add_sandwich(SandwichLine::new(SandwichSize::FourInch, wheat));
        order.add_sandwich(SandwichLine::new(SandwichSize::TwelveInch, wheat));

        order.remove_sandwich(0).unwrap();
        assert_eq!(order.sandwiches().len(), 1);
        assert_eq!(order.sandwiches()[0].size(), SandwichSize::TwelveInch);

        assert_eq!(
            order.remove_sandwich(5),
            Err(OrderError::SandwichIndexOutOfRange { index: 5 })
        );
    }

    #[test]
    fn test_sandwich_editable_in_place() {
        let mut order = Order::new();
        order.add_sandwich(SandwichLine::new(
            SandwichSize::FourInch,
            BreadId::from_index(0),
        ));

        order
            .sandwich_mut(0)
            .expect("sandwich exists")
            .set_size(SandwichSize::EightInch);

        assert_eq!(order.sandwiches()[0].size(), SandwichSize::EightInch);
        assert!(order.sandwich_mut(7).is_none());
    }

    #[test]
    fn test_drink_line_name_and_draw() {
        let drinks = test_drinks();
        let cat = Catalog {
            breads: &[],
            toppings: &[],
            drinks: &drinks,
            extras: &[],
        };

        let line = DrinkLine::new(DrinkId::from_index(0), DrinkSize::Medium);
        assert_eq!(line.name(&cat), "Medium Cola");
        assert_eq!(line.own_price(&cat).cents(), 125);

        let draw = line.consumption().unwrap();
        assert_eq!(draw.units, 2);
        assert_eq!(draw.entry, EntryRef::Drink(DrinkId::from_index(0)));
    }

    #[test]
    fn test_extra_line_always_draws_one() {
        let extras = test_extras();
        let cat = Catalog {
            breads: &[],
            toppings: &[],
            drinks: &[],
            extras: &extras,
        };

        let line = ExtraLine::new(ExtraId::from_index(1));
        assert_eq!(line.name(&cat), "Cookie");
        assert_eq!(line.own_price(&cat).cents(), 125);
        assert_eq!(line.consumption().unwrap().units, 1);
    }
}
