use clap::{Args, Subcommand};
use serde::Serialize;

use super::{print_json, OutputFormat};
use wellmart_core::models::CartItem;
use wellmart_core::{CartStore, SlotStore};

#[derive(Args)]
pub struct CartCommand {
    #[command(subcommand)]
    pub command: CartSubcommand,
}

#[derive(Subcommand)]
pub enum CartSubcommand {
    /// Show cart contents and total
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Take a product out of the cart
    Remove {
        /// Product id
        id: u64,

        /// Remove the whole line instead of one unit
        #[arg(long, short)]
        all: bool,
    },
}

#[derive(Serialize)]
struct CartView<'a> {
    items: &'a [CartItem],
    units: u64,
    total: f64,
}

impl CartCommand {
    pub fn run<S: SlotStore>(
        &self,
        cart: &mut CartStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            CartSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => print_json(&CartView {
                        items: cart.items(),
                        units: cart.unit_count(),
                        total: cart.total(),
                    })?,
                    OutputFormat::Text => {
                        if cart.is_empty() {
                            println!("Your cart is empty");
                            return Ok(());
                        }
                        for item in cart.items() {
                            println!("{}", item);
                        }
                        println!("{}", "-".repeat(60));
                        println!("{} item(s), total ${:.2}", cart.unit_count(), cart.total());
                    }
                }
                Ok(())
            }
            CartSubcommand::Remove { id, all } => {
                if cart.remove_from_cart(*id, !*all)? {
                    match cart.get(*id) {
                        Some(line) => println!("Product {} now x{}", id, line.quantity),
                        None => println!("Removed product {} from cart", id),
                    }
                } else {
                    println!("Product {} is not in the cart", id);
                }
                Ok(())
            }
        }
    }
}
