use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use order_color::rule::{
    AddressCondition, CartLoader, ColorConditionEvaluator, ColorConditionHook, CompareOp,
    ConditionMetadata, ConfigLoader, HookRegistry,
};

use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Condition config file (falls back to ORDER_COLOR_CONFIG, then defaults)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a cart holds an item in the target color
    Evaluate {
        /// Path to the cart file (.json or .yaml)
        #[arg(long)]
        cart: String,
    },
    /// Print the condition metadata as JSON
    Metadata,
    /// Validate a rule condition for the color attribute against a cart
    Validate {
        /// Path to the cart file (.json or .yaml)
        #[arg(long)]
        cart: String,

        /// Value the condition compares with (defaults to the target value)
        #[arg(long)]
        value: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = ConfigLoader::new()
        .resolve(args.config.as_deref())
        .context("Failed to load condition config")?;

    match args.command {
        Commands::Evaluate { cart } => {
            let cart = CartLoader::new()
                .load_cart(&cart)
                .with_context(|| format!("Failed to load cart: {}", cart))?;
            let evaluator = ColorConditionEvaluator::new(config);

            match evaluator.matching_item(&cart) {
                Some(item) => {
                    println!("match: true");
                    println!("sku: {}", item.product.sku);
                }
                None => println!("match: false"),
            }
        }
        Commands::Metadata => {
            let metadata = ConditionMetadata::from_config(&config);
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        Commands::Validate { cart, value } => {
            let mut cart = CartLoader::new()
                .load_cart(&cart)
                .with_context(|| format!("Failed to load cart: {}", cart))?;

            let value = value.unwrap_or_else(|| config.target_value.clone());
            let condition =
                AddressCondition::new(config.attribute_code.clone(), CompareOp::Eq, value);

            let mut hooks = HookRegistry::new();
            hooks.register(Arc::new(ColorConditionHook::new(config)));

            let valid = condition.validate(&mut cart, &hooks);
            println!(
                "{} {} '{}': {}",
                condition.attribute, condition.operator, condition.value, valid
            );
        }
    }

    Ok(())
}
