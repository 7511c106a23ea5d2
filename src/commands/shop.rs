use clap::{Args, Subcommand};

use super::{print_json, OutputFormat};
use crate::config::Config;
use wellmart_core::{CartStore, CatalogClient, SlotStore};

#[derive(Args)]
pub struct ShopCommand {
    #[command(subcommand)]
    pub command: ShopSubcommand,
}

#[derive(Subcommand)]
pub enum ShopSubcommand {
    /// Browse the catalog
    List {
        /// Number of products, defaults to catalog.page_size
        #[arg(long, short)]
        limit: Option<u32>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show one product
    Show {
        id: u64,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Fetch a product and put one unit in the cart
    Add { id: u64 },
}

impl ShopCommand {
    pub async fn run<S: SlotStore>(
        &self,
        client: &CatalogClient,
        cart: &mut CartStore<S>,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ShopSubcommand::List { limit, format } => {
                let limit = limit.unwrap_or(config.page_size.value);
                let products = client.list_products(limit).await?;

                match format {
                    OutputFormat::Json => print_json(&products)?,
                    OutputFormat::Text => {
                        if products.is_empty() {
                            println!("No products available");
                            return Ok(());
                        }
                        for product in &products {
                            let in_cart = cart
                                .get(product.id)
                                .map(|line| format!("  (x{} in cart)", line.quantity))
                                .unwrap_or_default();
                            println!("{}{}", product, in_cart);
                        }
                        println!("\n{} product(s)", products.len());
                    }
                }
                Ok(())
            }
            ShopSubcommand::Show { id, format } => {
                let product = client.get_product(*id).await?;
                match format {
                    OutputFormat::Json => print_json(&product)?,
                    OutputFormat::Text => {
                        println!("{}", product);
                        if let Some(description) = &product.description {
                            println!("\n{}", description);
                        }
                        if !product.thumbnail.is_empty() {
                            println!("\nImage: {}", product.thumbnail);
                        }
                    }
                }
                Ok(())
            }
            ShopSubcommand::Add { id } => {
                let product = client.get_product(*id).await?;
                let title = product.title.clone();
                cart.add_to_cart(product)?;
                println!(
                    "Added '{}' to cart ({} item(s), ${:.2})",
                    title,
                    cart.unit_count(),
                    cart.total()
                );
                Ok(())
            }
        }
    }
}
