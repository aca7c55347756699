//! # Register Menus
//!
//! The menu loop the cashier drives: one order at a time, built line by
//! line, checked out from the cart view.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Main ──► Order ──┬─► Add sandwich ──► (build | signature) ──► Editor   │
//! │                   ├─► Add drink                                         │
//! │                   ├─► Add extra                                         │
//! │                   ├─► Cart ──┬─► Check out  (save receipt, draw stock)  │
//! │                   │          ├─► Modify sandwich ──► Editor             │
//! │                   │          └─► Remove sandwich / drink / extra        │
//! │                   └─► Cancel order  (confirmed when non-empty)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Generic I/O?
//! [`Menu`] is generic over `BufRead + Write` rather than talking to stdin
//! and stdout directly, so tests run entire sessions from a scripted input
//! buffer and assert on the captured transcript. `main` plugs in the real
//! locked handles.
//!
//! Every prompt treats end of input as "walk away": the current flow
//! unwinds without touching the shop.
//!
//! Listings only offer what is currently in stock; selections already in
//! the order stay valid even if stock runs out underneath them.

use std::io::{self, BufRead, Write};
use std::path::Path;

use deli_core::catalog::{BreadId, DrinkId, ExtraId, ToppingId};
use deli_core::error::OrderError;
use deli_core::item::{total_price, LineItem};
use deli_core::order::Order;
use deli_core::sandwich::SandwichLine;
use deli_core::size::{DrinkSize, SandwichSize};
use deli_store::{Receipt, ShopInventory};

// =============================================================================
// Menu
// =============================================================================

/// The interactive register session.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

/// How the cart view handed control back.
enum CartAction {
    /// The cashier backed out; the order is still open.
    Back,
    /// The order was placed; the order loop is done.
    CheckedOut,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Menu { input, output }
    }

    /// Runs the register until the cashier exits or input ends.
    pub fn run(&mut self, shop: &mut ShopInventory, receipts_dir: &Path) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "===== Deli POS =====")?;
            writeln!(self.output, "  1) New order")?;
            writeln!(self.output, "  0) Exit")?;
            let choice = match self.read_choice()? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            match choice.as_str() {
                "1" => self.order_menu(shop, receipts_dir)?,
                "0" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Please pick one of the listed options.")?,
            }
        }
    }

    // =========================================================================
    // Order Loop
    // =========================================================================

    /// One order from first line to checkout or cancellation.
    fn order_menu(&mut self, shop: &mut ShopInventory, receipts_dir: &Path) -> io::Result<()> {
        let mut order = Order::new();
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "===== Order =====")?;
            writeln!(self.output, "  1) Add a sandwich")?;
            writeln!(self.output, "  2) Add a drink")?;
            writeln!(self.output, "  3) Add an extra")?;
            writeln!(self.output, "  4) View cart / check out")?;
            writeln!(self.output, "  0) Cancel order")?;
            let choice = match self.read_choice()? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            match choice.as_str() {
                "1" => self.add_sandwich(shop, &mut order)?,
                "2" => self.add_drink(shop, &mut order)?,
                "3" => self.add_extra(shop, &mut order)?,
                "4" => {
                    if let CartAction::CheckedOut =
                        self.cart_menu(shop, &mut order, receipts_dir)?
                    {
                        return Ok(());
                    }
                }
                "0" => {
                    if order.is_empty() {
                        return Ok(());
                    }
                    if self.confirm("Throw away this order?", false)? {
                        writeln!(self.output, "Order cancelled.")?;
                        return Ok(());
                    }
                }
                _ => writeln!(self.output, "Please pick one of the listed options.")?,
            }
        }
    }

    // =========================================================================
    // Sandwiches
    // =========================================================================

    /// Starts a sandwich, runs it through the editor, adds it to the order.
    fn add_sandwich(&mut self, shop: &ShopInventory, order: &mut Order) -> io::Result<()> {
        let started = if shop.signature_book().signatures().is_empty() {
            self.build_sandwich(shop)?
        } else {
            loop {
                writeln!(self.output)?;
                writeln!(self.output, "----- Sandwich -----")?;
                writeln!(self.output, "  1) Build your own")?;
                writeln!(self.output, "  2) Signature sandwich")?;
                writeln!(self.output, "  0) Back")?;
                let choice = match self.read_choice()? {
                    Some(choice) => choice,
                    None => return Ok(()),
                };
                match choice.as_str() {
                    "1" => break self.build_sandwich(shop)?,
                    "2" => break self.pick_signature(shop)?,
                    "0" => return Ok(()),
                    _ => writeln!(self.output, "Please pick one of the listed options.")?,
                }
            }
        };

        let mut sandwich = match started {
            Some(sandwich) => sandwich,
            None => return Ok(()),
        };

        self.edit_sandwich(shop, &mut sandwich)?;

        let (name, bread) = {
            let catalog = shop.catalog();
            (
                sandwich.name(&catalog),
                catalog.bread(sandwich.bread()).name.clone(),
            )
        };
        writeln!(self.output, "Added {name} on {bread}.")?;
        order.add_sandwich(sandwich);
        Ok(())
    }

    /// Size and bread picks for a from-scratch sandwich.
    fn build_sandwich(&mut self, shop: &ShopInventory) -> io::Result<Option<SandwichLine>> {
        let size = match self.pick_from("Pick a size:", &size_options())? {
            Some(size) => size,
            None => return Ok(None),
        };
        let bread = match self.pick_from("Pick a bread:", &bread_options(shop))? {
            Some(bread) => bread,
            None => return Ok(None),
        };
        Ok(Some(SandwichLine::new(size, bread)))
    }

    /// Copies a house sandwich out of the signature book.
    fn pick_signature(&mut self, shop: &ShopInventory) -> io::Result<Option<SandwichLine>> {
        let options: Vec<(String, usize)> = shop
            .signature_book()
            .signatures()
            .iter()
            .enumerate()
            .map(|(index, signature)| (signature.name().to_string(), index))
            .collect();
        let index = match self.pick_from("Pick a signature sandwich:", &options)? {
            Some(index) => index,
            None => return Ok(None),
        };
        let signature = &shop.signature_book().signatures()[index];
        writeln!(self.output, "Starting from {}.", signature.name())?;
        Ok(Some(signature.sandwich()))
    }

    /// The sandwich editor. Works in place; used both before a sandwich
    /// joins the order and when the cart reopens one.
    fn edit_sandwich(
        &mut self,
        shop: &ShopInventory,
        sandwich: &mut SandwichLine,
    ) -> io::Result<()> {
        loop {
            {
                let catalog = shop.catalog();
                writeln!(self.output)?;
                writeln!(self.output, "----- {} -----", sandwich.name(&catalog))?;
                writeln!(
                    self.output,
                    "  Bread: {}",
                    catalog.bread(sandwich.bread()).name
                )?;
                writeln!(
                    self.output,
                    "  Toasted: {}",
                    if sandwich.is_toasted() { "yes" } else { "no" }
                )?;
                let toppings = if sandwich.toppings().is_empty() {
                    "none".to_string()
                } else {
                    sandwich
                        .toppings()
                        .iter()
                        .map(|selection| selection.name(&catalog))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                writeln!(self.output, "  Toppings: {toppings}")?;
                writeln!(self.output, "  Price: {}", total_price(&*sandwich, &catalog))?;
            }
            writeln!(self.output, "  1) Change size")?;
            writeln!(self.output, "  2) Change bread")?;
            writeln!(self.output, "  3) Add a topping")?;
            writeln!(self.output, "  4) Add an extra serving")?;
            writeln!(self.output, "  5) Remove a topping")?;
            writeln!(self.output, "  6) Toggle toasted")?;
            writeln!(self.output, "  0) Done")?;
            let choice = match self.read_choice()? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            match choice.as_str() {
                "1" => {
                    if let Some(size) = self.pick_from("Pick a size:", &size_options())? {
                        sandwich.set_size(size);
                    }
                }
                "2" => {
                    if let Some(bread) = self.pick_from("Pick a bread:", &bread_options(shop))? {
                        sandwich.set_bread(bread);
                    }
                }
                "3" => self.add_topping_flow(shop, sandwich, false)?,
                "4" => self.add_topping_flow(shop, sandwich, true)?,
                "5" => self.remove_topping_flow(shop, sandwich)?,
                "6" => sandwich.set_toasted(!sandwich.is_toasted()),
                "0" => return Ok(()),
                _ => writeln!(self.output, "Please pick one of the listed options.")?,
            }
        }
    }

    /// Adds a normal or extra serving of a topping.
    fn add_topping_flow(
        &mut self,
        shop: &ShopInventory,
        sandwich: &mut SandwichLine,
        extra: bool,
    ) -> io::Result<()> {
        let title = if extra {
            "Add an extra serving:"
        } else {
            "Add a topping:"
        };
        let options = topping_options(shop, sandwich.size(), extra);
        let topping = match self.pick_from(title, &options)? {
            Some(topping) => topping,
            None => return Ok(()),
        };
        match sandwich.add_topping(topping, extra) {
            Ok(()) => {}
            Err(OrderError::DuplicateTopping) if !extra => {
                writeln!(
                    self.output,
                    "That topping is already on the sandwich; use the extra serving option for a second helping."
                )?;
            }
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    /// Removes a serving; taking off the normal one drags its extra along.
    fn remove_topping_flow(
        &mut self,
        shop: &ShopInventory,
        sandwich: &mut SandwichLine,
    ) -> io::Result<()> {
        if sandwich.toppings().is_empty() {
            writeln!(self.output, "No toppings to remove.")?;
            return Ok(());
        }
        let options: Vec<(String, (ToppingId, bool))> = {
            let catalog = shop.catalog();
            sandwich
                .toppings()
                .iter()
                .map(|selection| {
                    (
                        selection.name(&catalog),
                        (selection.topping(), selection.is_extra()),
                    )
                })
                .collect()
        };
        let (topping, extra) = match self.pick_from("Remove which topping?", &options)? {
            Some(pick) => pick,
            None => return Ok(()),
        };
        let before = sandwich.toppings().len();
        match sandwich.remove_topping(topping, extra) {
            Ok(()) => {
                if before - sandwich.toppings().len() == 2 {
                    writeln!(self.output, "Removed the topping and its extra serving.")?;
                }
            }
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    // =========================================================================
    // Drinks and Extras
    // =========================================================================

    fn add_drink(&mut self, shop: &ShopInventory, order: &mut Order) -> io::Result<()> {
        let drink_options: Vec<(String, DrinkId)> = shop
            .drinks()
            .items()
            .map(|(id, entry)| (entry.name.clone(), id))
            .collect();
        let drink = match self.pick_from("Pick a drink:", &drink_options)? {
            Some(drink) => drink,
            None => return Ok(()),
        };

        let (size_options, name) = {
            let catalog = shop.catalog();
            let entry = catalog.drink(drink);
            let options: Vec<(String, DrinkSize)> = DrinkSize::ALL
                .iter()
                .map(|&size| (format!("{:<6} {}", size, entry.price(size)), size))
                .collect();
            (options, entry.name.clone())
        };
        let size = match self.pick_from("Pick a size:", &size_options)? {
            Some(size) => size,
            None => return Ok(()),
        };

        order.add_drink(drink, size);
        writeln!(self.output, "Added {size} {name}.")?;
        Ok(())
    }

    fn add_extra(&mut self, shop: &ShopInventory, order: &mut Order) -> io::Result<()> {
        let options: Vec<(String, ExtraId)> = shop
            .extras()
            .items()
            .map(|(id, entry)| (format!("{} {}", entry.name, entry.price), id))
            .collect();
        let extra = match self.pick_from("Pick an extra:", &options)? {
            Some(extra) => extra,
            None => return Ok(()),
        };
        order.add_extra(extra);
        let name = shop.catalog().extra(extra).name.clone();
        writeln!(self.output, "Added {name}.")?;
        Ok(())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The cart view: the receipt as it would print, plus the editing and
    /// checkout choices.
    fn cart_menu(
        &mut self,
        shop: &mut ShopInventory,
        order: &mut Order,
        receipts_dir: &Path,
    ) -> io::Result<CartAction> {
        loop {
            if order.is_empty() {
                writeln!(self.output, "Cart is empty.")?;
                return Ok(CartAction::Back);
            }

            {
                let catalog = shop.catalog();
                let receipt = Receipt::new(&*order);
                writeln!(self.output)?;
                writeln!(self.output, "----- Cart -----")?;
                writeln!(self.output, "{}", receipt.render(&catalog))?;
                writeln!(self.output)?;
                writeln!(self.output, "Total: {}", receipt.price(&catalog))?;
            }

            writeln!(self.output, "  1) Check out")?;
            writeln!(self.output, "  2) Modify a sandwich")?;
            writeln!(self.output, "  3) Remove a sandwich")?;
            writeln!(self.output, "  4) Remove a drink")?;
            writeln!(self.output, "  5) Remove an extra")?;
            writeln!(self.output, "  0) Back")?;
            let choice = match self.read_choice()? {
                Some(choice) => choice,
                None => return Ok(CartAction::Back),
            };
            match choice.as_str() {
                "1" => {
                    if !self.confirm("Place this order?", true)? {
                        continue;
                    }
                    match shop.checkout(order, receipts_dir) {
                        Ok(path) => {
                            writeln!(
                                self.output,
                                "Order placed! Receipt saved to {}.",
                                path.display()
                            )?;
                            return Ok(CartAction::CheckedOut);
                        }
                        Err(error) => {
                            // The receipt never hit disk, so nothing was
                            // drawn from stock either.
                            writeln!(self.output, "Could not save the receipt: {error}")?;
                            writeln!(self.output, "Nothing was charged; try again.")?;
                        }
                    }
                }
                "2" => self.modify_sandwich(shop, order)?,
                "3" => self.remove_sandwich_flow(shop, order)?,
                "4" => self.remove_drink_flow(shop, order)?,
                "5" => self.remove_extra_flow(shop, order)?,
                "0" => return Ok(CartAction::Back),
                _ => writeln!(self.output, "Please pick one of the listed options.")?,
            }
        }
    }

    /// Reopens a sandwich already in the order in the editor.
    fn modify_sandwich(&mut self, shop: &ShopInventory, order: &mut Order) -> io::Result<()> {
        let options = sandwich_options(shop, order);
        if options.is_empty() {
            writeln!(self.output, "No sandwiches in the cart.")?;
            return Ok(());
        }
        let index = match self.pick_from("Modify which sandwich?", &options)? {
            Some(index) => index,
            None => return Ok(()),
        };
        let sandwich = match order.sandwich_mut(index) {
            Some(sandwich) => sandwich,
            None => return Ok(()),
        };
        self.edit_sandwich(shop, sandwich)
    }

    fn remove_sandwich_flow(&mut self, shop: &ShopInventory, order: &mut Order) -> io::Result<()> {
        let options = sandwich_options(shop, order);
        if options.is_empty() {
            writeln!(self.output, "No sandwiches in the cart.")?;
            return Ok(());
        }
        let index = match self.pick_from("Remove which sandwich?", &options)? {
            Some(index) => index,
            None => return Ok(()),
        };
        match order.remove_sandwich(index) {
            Ok(()) => writeln!(self.output, "Removed.")?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn remove_drink_flow(&mut self, shop: &ShopInventory, order: &mut Order) -> io::Result<()> {
        if order.drinks().is_empty() {
            writeln!(self.output, "No drinks in the cart.")?;
            return Ok(());
        }
        let options: Vec<(String, (DrinkId, DrinkSize))> = {
            let catalog = shop.catalog();
            order
                .drinks()
                .iter()
                .map(|line| (line.name(&catalog), (line.drink(), line.size())))
                .collect()
        };
        let (drink, size) = match self.pick_from("Remove which drink?", &options)? {
            Some(pick) => pick,
            None => return Ok(()),
        };
        match order.remove_drink(drink, size) {
            Ok(()) => writeln!(self.output, "Removed.")?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn remove_extra_flow(&mut self, shop: &ShopInventory, order: &mut Order) -> io::Result<()> {
        if order.extras().is_empty() {
            writeln!(self.output, "No extras in the cart.")?;
            return Ok(());
        }
        let options: Vec<(String, ExtraId)> = {
            let catalog = shop.catalog();
            order
                .extras()
                .iter()
                .map(|line| (line.name(&catalog), line.extra()))
                .collect()
        };
        let extra = match self.pick_from("Remove which extra?", &options)? {
            Some(extra) => extra,
            None => return Ok(()),
        };
        match order.remove_extra(extra) {
            Ok(()) => writeln!(self.output, "Removed.")?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    // =========================================================================
    // Prompt Helpers
    // =========================================================================

    /// One prompted line, trimmed. `None` when input has ended.
    fn read_choice(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Numbered pick list with a `0) Back` escape. Re-asks until the answer
    /// is one of the listed numbers; `None` on back or end of input.
    fn pick_from<T: Copy>(
        &mut self,
        title: &str,
        options: &[(String, T)],
    ) -> io::Result<Option<T>> {
        writeln!(self.output, "{title}")?;
        for (index, (label, _)) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", index + 1, label)?;
        }
        writeln!(self.output, "  0) Back")?;
        loop {
            let choice = match self.read_choice()? {
                Some(choice) => choice,
                None => return Ok(None),
            };
            match choice.parse::<usize>() {
                Ok(0) => return Ok(None),
                Ok(number) if number <= options.len() => {
                    return Ok(Some(options[number - 1].1));
                }
                _ => writeln!(self.output, "Please pick one of the listed options.")?,
            }
        }
    }

    /// Yes/no question with a default for a bare Enter. End of input reads
    /// as "no".
    fn confirm(&mut self, question: &str, default_yes: bool) -> io::Result<bool> {
        let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{question} {hint} ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            match line.trim().to_lowercase().as_str() {
                "" => return Ok(default_yes),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }
}

// =============================================================================
// Option Lists
// =============================================================================

fn size_options() -> Vec<(String, SandwichSize)> {
    SandwichSize::ALL
        .iter()
        .map(|&size| (format!("{:<4} {}", size, size.base_price()), size))
        .collect()
}

fn bread_options(shop: &ShopInventory) -> Vec<(String, BreadId)> {
    shop.breads()
        .items()
        .map(|(id, entry)| (entry.name.clone(), id))
        .collect()
}

/// Topping labels carry the category and, when the serving costs anything
/// at this sandwich size, the price.
fn topping_options(
    shop: &ShopInventory,
    size: SandwichSize,
    extra: bool,
) -> Vec<(String, ToppingId)> {
    shop.toppings()
        .items()
        .map(|(id, entry)| {
            let price = entry.price(size, extra);
            let label = if price.is_zero() {
                format!("{} ({})", entry.name, entry.category)
            } else {
                format!("{} ({}) {}", entry.name, entry.category, price)
            };
            (label, id)
        })
        .collect()
}

fn sandwich_options(shop: &ShopInventory, order: &Order) -> Vec<(String, usize)> {
    let catalog = shop.catalog();
    order
        .sandwiches()
        .iter()
        .enumerate()
        .map(|(index, sandwich)| {
            let label = format!(
                "{} on {}",
                sandwich.name(&catalog),
                catalog.bread(sandwich.bread()).name
            );
            (label, index)
        })
        .collect()
}

// =============================================================================
// Scripted Session Tests
// =============================================================================
