//! # Sandwich Lines
//!
//! A sandwich in the order: one size, one bread, any number of topping
//! selections, optionally toasted. The sandwich is the only order line
//! that stays editable after being added; the cart view reopens it in the
//! editor at any time before checkout.
//!
//! ## Topping Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Each topping type appears AT MOST TWICE on a sandwich:                 │
//! │    • once as the normal serving                                         │
//! │    • once as the "extra" serving (its own selection node, its own       │
//! │      price column, its own stock draw)                                  │
//! │                                                                         │
//! │  An extra serving does NOT require the normal serving to exist.         │
//! │                                                                         │
//! │  Removing the normal serving cascades: the extra serving of the same    │
//! │  type goes with it. Removing just the extra leaves the normal alone.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every selection carries the sandwich's size so price lookups and stock
//! draws scale together; `set_size` re-stamps the bread and all toppings.

use crate::catalog::{BreadId, Catalog, EntryRef, ToppingId};
use crate::error::{OrderError, OrderResult};
use crate::item::{Consumption, LineItem, TOASTED};
use crate::money::Money;
use crate::size::SandwichSize;

// =============================================================================
// Bread Selection
// =============================================================================

/// The bread on a sandwich. Prices at zero (bread is in the base price)
/// but draws stock scaled by sandwich size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreadSelection {
    bread: BreadId,
    size: SandwichSize,
}

impl BreadSelection {
    pub fn new(bread: BreadId, size: SandwichSize) -> Self {
        BreadSelection { bread, size }
    }

    pub fn bread(&self) -> BreadId {
        self.bread
    }
}

impl LineItem for BreadSelection {
    fn name(&self, catalog: &Catalog<'_>) -> String {
        catalog.bread(self.bread).name.clone()
    }

    fn own_price(&self, _catalog: &Catalog<'_>) -> Money {
        Money::zero()
    }

    fn sub_items(&self) -> Vec<&dyn LineItem> {
        Vec::new()
    }

    fn consumption(&self) -> Option<Consumption> {
        Some(Consumption {
            entry: EntryRef::Bread(self.bread),
            units: self.size.units(),
        })
    }
}

// =============================================================================
// Topping Selection
// =============================================================================

/// One serving of a topping on a sandwich, normal or extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToppingSelection {
    topping: ToppingId,
    size: SandwichSize,
    extra: bool,
}

impl ToppingSelection {
    pub fn new(topping: ToppingId, size: SandwichSize, extra: bool) -> Self {
        ToppingSelection {
            topping,
            size,
            extra,
        }
    }

    pub fn topping(&self) -> ToppingId {
        self.topping
    }

    pub fn is_extra(&self) -> bool {
        self.extra
    }
}

impl LineItem for ToppingSelection {
    fn name(&self, catalog: &Catalog<'_>) -> String {
        let name = &catalog.topping(self.topping).name;
        if self.extra {
            format!("Extra {name}")
        } else {
            name.clone()
        }
    }

    fn own_price(&self, catalog: &Catalog<'_>) -> Money {
        catalog.topping(self.topping).price(self.size, self.extra)
    }

    fn sub_items(&self) -> Vec<&dyn LineItem> {
        Vec::new()
    }

    fn consumption(&self) -> Option<Consumption> {
        // Extra servings draw the same size-scaled units as normal ones.
        Some(Consumption {
            entry: EntryRef::Topping(self.topping),
            units: self.size.units(),
        })
    }
}

// =============================================================================
// Sandwich Line
// =============================================================================

/// A sandwich being built or already in the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandwichLine {
    size: SandwichSize,
    bread: BreadSelection,
    toppings: Vec<ToppingSelection>,
    toasted: bool,
}

impl SandwichLine {
    /// Starts a sandwich of the given size on the given bread, no
    /// toppings, untoasted.
    pub fn new(size: SandwichSize, bread: BreadId) -> Self {
        SandwichLine {
            size,
            bread: BreadSelection::new(bread, size),
            toppings: Vec::new(),
            toasted: false,
        }
    }

    pub fn size(&self) -> SandwichSize {
        self.size
    }

    /// Changes the size and re-stamps it onto the bread and every topping
    /// selection, so their prices and stock draws follow.
    pub fn set_size(&mut self, size: SandwichSize) {
        self.size = size;
        self.bread.size = size;
        for topping in &mut self.toppings {
            topping.size = size;
        }
    }

    pub fn bread(&self) -> BreadId {
        self.bread.bread()
    }

    /// Swaps the bread, keeping the current size.
    pub fn set_bread(&mut self, bread: BreadId) {
        self.bread = BreadSelection::new(bread, self.size);
    }

    pub fn is_toasted(&self) -> bool {
        self.toasted
    }

    pub fn set_toasted(&mut self, toasted: bool) {
        self.toasted = toasted;
    }

    /// Current topping selections in the order they were added.
    pub fn toppings(&self) -> &[ToppingSelection] {
        &self.toppings
    }

    /// Adds a serving of a topping.
    ///
    /// Rejects a second serving of the same (type, kind) pair; a topping
    /// appears at most once normal and once extra. The extra serving does
    /// not require the normal one to exist.
    pub fn add_topping(&mut self, topping: ToppingId, extra: bool) -> OrderResult<()> {
        let duplicate = self
            .toppings
            .iter()
            .any(|t| t.topping == topping && t.extra == extra);
        if duplicate {
            return Err(OrderError::DuplicateTopping);
        }
        self.toppings
            .push(ToppingSelection::new(topping, self.size, extra));
        Ok(())
    }

    /// Removes a serving of a topping.
    ///
    /// Removing the normal serving cascades to the extra serving of the
    /// same type; removing the extra serving removes only itself.
    pub fn remove_topping(&mut self, topping: ToppingId, extra: bool) -> OrderResult<()> {
        if extra {
            let position = self
                .toppings
                .iter()
                .position(|t| t.topping == topping && t.extra)
                .ok_or(OrderError::ToppingNotFound)?;
            self.toppings.remove(position);
        } else {
            let present = self
                .toppings
                .iter()
                .any(|t| t.topping == topping && !t.extra);
            if !present {
                return Err(OrderError::ToppingNotFound);
            }
            self.toppings.retain(|t| t.topping != topping);
        }
        Ok(())
    }
}

impl LineItem for SandwichLine {
    fn name(&self, _catalog: &Catalog<'_>) -> String {
        format!("{} Sandwich", self.size)
    }

    /// The base price is the sandwich's own; bread and toppings price
    /// themselves as children.
    fn own_price(&self, _catalog: &Catalog<'_>) -> Money {
        self.size.base_price()
    }

    fn sub_items(&self) -> Vec<&dyn LineItem> {
        let mut subs: Vec<&dyn LineItem> = Vec::with_capacity(self.toppings.len() + 2);
        subs.push(&self.bread);
        subs.extend(self.toppings.iter().map(|t| t as &dyn LineItem));
        if self.toasted {
            subs.push(&TOASTED);
        }
        subs
    }
}

// =============================================================================
// Signature Sandwich
// =============================================================================

/// A named house sandwich: a template resolved against the catalogs at
/// load time and cloned into the order when a customer picks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureSandwich {
    name: String,
    sandwich: SandwichLine,
}

impl SignatureSandwich {
    pub fn new(name: impl Into<String>, sandwich: SandwichLine) -> Self {
        SignatureSandwich {
            name: name.into(),
            sandwich,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A fresh copy of the template; edits to it never touch the book.
    pub fn sandwich(&self) -> SandwichLine {
        self.sandwich.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BreadEntry, ToppingEntry};
    use crate::item::total_price;

    fn test_breads() -> Vec<BreadEntry> {
        vec![
            BreadEntry {
                name: "Wheat".into(),
                stock: 10,
            },
            BreadEntry {
                name: "Rye".into(),
                stock: 10,
            },
        ]
    }

    fn test_toppings() -> Vec<ToppingEntry> {
        vec![
            ToppingEntry {
                name: "Cheddar".into(),
                category: "cheese".into(),
                prices: [
                    Money::from_cents(50),
                    Money::from_cents(50),
                    Money::from_cents(50),
                ],
                extra_prices: [
                    Money::from_cents(75),
                    Money::from_cents(75),
                    Money::from_cents(75),
                ],
                stock: 20,
            },
            ToppingEntry {
                name: "Bacon".into(),
                category: "meats".into(),
                prices: [
                    Money::from_cents(100),
                    Money::from_cents(200),
                    Money::from_cents(300),
                ],
                extra_prices: [
                    Money::from_cents(50),
                    Money::from_cents(100),
                    Money::from_cents(150),
                ],
                stock: 20,
            },
        ]
    }

    fn catalog<'a>(breads: &'a [BreadEntry], toppings: &'a [ToppingEntry]) -> Catalog<'a> {
        Catalog {
            breads,
            toppings,
            drinks: &[],
            extras: &[],
        }
    }

    #[test]
    fn test_name_follows_size() {
        let breads = test_breads();
        let cat = catalog(&breads, &[]);

        let mut sandwich = SandwichLine::new(SandwichSize::FourInch, BreadId::from_index(0));
        assert_eq!(sandwich.name(&cat), "4in Sandwich");

        sandwich.set_size(SandwichSize::TwelveInch);
        assert_eq!(sandwich.name(&cat), "12in Sandwich");
    }

    #[test]
    fn test_plain_sandwich_prices_at_base() {
        let breads = test_breads();
        let cat = catalog(&breads, &[]);

        let sandwich = SandwichLine::new(SandwichSize::TwelveInch, BreadId::from_index(0));
        assert_eq!(total_price(&sandwich, &cat).cents(), 850);
    }

    #[test]
    fn test_toasting_is_free_but_visible() {
        let breads = test_breads();
        let cat = catalog(&breads, &[]);

        let mut sandwich = SandwichLine::new(SandwichSize::FourInch, BreadId::from_index(0));
        assert_eq!(sandwich.sub_items().len(), 1); // bread only

        sandwich.set_toasted(true);
        assert_eq!(sandwich.sub_items().len(), 2); // bread + marker
        assert_eq!(total_price(&sandwich, &cat).cents(), 550);

        sandwich.set_toasted(false);
        assert_eq!(sandwich.sub_items().len(), 1);
    }

    #[test]
    fn test_topping_prices_by_size_and_serving() {
        let breads = test_breads();
        let toppings = test_toppings();
        let cat = catalog(&breads, &toppings);
        let bacon = ToppingId::from_index(1);

        let mut sandwich = SandwichLine::new(SandwichSize::EightInch, BreadId::from_index(0));
        sandwich.add_topping(bacon, false).unwrap();
        sandwich.add_topping(bacon, true).unwrap();

        // 7.00 base + 2.00 bacon + 1.00 extra bacon
        assert_eq!(total_price(&sandwich, &cat).cents(), 1000);
    }

    #[test]
    fn test_extra_serving_without_normal_succeeds() {
        let cheddar = ToppingId::from_index(0);
        let mut sandwich = SandwichLine::new(SandwichSize::FourInch, BreadId::from_index(0));

        sandwich.add_topping(cheddar, true).unwrap();
        sandwich.add_topping(cheddar, false).unwrap();

        let flags: Vec<bool> = sandwich.toppings().iter().map(|t| t.is_extra()).collect();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn test_duplicate_serving_rejected() {
        let cheddar = ToppingId::from_index(0);
        let mut sandwich = SandwichLine::new(SandwichSize::FourInch, BreadId::from_index(0));

        sandwich.add_topping(cheddar, false).unwrap();
        assert_eq!(
            sandwich.add_topping(cheddar, false),
            Err(OrderError::DuplicateTopping)
        );

        sandwich.add_topping(cheddar, true).unwrap();
        assert_eq!(
            sandwich.add_topping(cheddar, true),
            Err(OrderError::DuplicateTopping)
        );
        assert_eq!(sandwich.toppings().len(), 2);
    }

    #[test]
    fn test_removing_normal_cascades_to_extra() {
        let cheddar = ToppingId::from_index(0);
        let bacon = ToppingId::from_index(1);
        let mut sandwich = SandwichLine::new(SandwichSize::FourInch, BreadId::from_index(0));

        sandwich.add_topping(cheddar, false).unwrap();
        sandwich.add_topping(cheddar, true).unwrap();
        sandwich.add_topping(bacon, false).unwrap();

        sandwich.remove_topping(cheddar, false).unwrap();

        assert_eq!(sandwich.toppings().len(), 1);
        assert_eq!(sandwich.toppings()[0].topping(), bacon);
    }

    #[test]
    fn test_removing_extra_keeps_normal() {
        let cheddar = ToppingId::from_index(0);
        let mut sandwich = SandwichLine::new(SandwichSize::FourInch, BreadId::from_index(0));

        sandwich.add_topping(cheddar, false).unwrap();
        sandwich.add_topping(cheddar, true).unwrap();

        sandwich.remove_topping(cheddar, true).unwrap();

        assert_eq!(sandwich.toppings().len(), 1);
        assert!(!sandwich.toppings()[0].is_extra());
    }

    #[test]
    fn test_removing_missing_topping_errs() {
        let cheddar = ToppingId::from_index(0);
        let mut sandwich = SandwichLine::new(SandwichSize::FourInch, BreadId::from_index(0));

        assert_eq!(
            sandwich.remove_topping(cheddar, false),
            Err(OrderError::ToppingNotFound)
        );

        // Only the extra exists; asking for the normal serving still errs.
        sandwich.add_topping(cheddar, true).unwrap();
        assert_eq!(
            sandwich.remove_topping(cheddar, false),
            Err(OrderError::ToppingNotFound)
        );
    }

    #[test]
    fn test_set_size_restamps_selections() {
        let breads = test_breads();
        let toppings = test_toppings();
        let cat = catalog(&breads, &toppings);
        let bacon = ToppingId::from_index(1);

        let mut sandwich = SandwichLine::new(SandwichSize::FourInch, BreadId::from_index(0));
        sandwich.add_topping(bacon, false).unwrap();
        sandwich.set_size(SandwichSize::TwelveInch);

        // 8.50 base + 3.00 bacon at the 12in column
        assert_eq!(total_price(&sandwich, &cat).cents(), 1150);

        // Stock draws follow the new size too, bread included.
        let draws: Vec<i64> = sandwich
            .sub_items()
            .iter()
            .filter_map(|item| item.consumption())
            .map(|c| c.units)
            .collect();
        assert_eq!(draws, vec![3, 3]);
    }

    #[test]
    fn test_set_bread_keeps_size() {
        let mut sandwich = SandwichLine::new(SandwichSize::EightInch, BreadId::from_index(0));
        sandwich.set_bread(BreadId::from_index(1));

        assert_eq!(sandwich.bread(), BreadId::from_index(1));
        let bread_draw = sandwich.sub_items()[0].consumption().unwrap();
        assert_eq!(bread_draw.units, 2);
    }

    #[test]
    fn test_extra_serving_name_prefix() {
        let breads = test_breads();
        let toppings = test_toppings();
        let cat = catalog(&breads, &toppings);
        let cheddar = ToppingId::from_index(0);

        let normal = ToppingSelection::new(cheddar, SandwichSize::FourInch, false);
        let extra = ToppingSelection::new(cheddar, SandwichSize::FourInch, true);

        assert_eq!(normal.name(&cat), "Cheddar");
        assert_eq!(extra.name(&cat), "Extra Cheddar");
    }

    #[test]
    fn test_signature_hands_out_independent_copies() {
        let cheddar = ToppingId::from_index(0);
        let mut template = SandwichLine::new(SandwichSize::FourInch, BreadId::from_index(0));
        template.add_topping(cheddar, false).unwrap();
        template.set_toasted(true);

        let signature = SignatureSandwich::new("The House", template);
        assert_eq!(signature.name(), "The House");

        let mut copy = signature.sandwich();
        copy.set_size(SandwichSize::TwelveInch);
        copy.remove_topping(cheddar, false).unwrap();

        // The template is untouched.
        let fresh = signature.sandwich();
        assert_eq!(fresh.size(), SandwichSize::FourInch);
        assert_eq!(fresh.toppings().len(), 1);
        assert!(fresh.is_toasted());
    }
}
